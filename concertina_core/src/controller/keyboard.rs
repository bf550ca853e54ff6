// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard navigation between triggers.

use super::AccordionController;
use crate::accordion::SectionRef;
use crate::dom::Document;
use crate::input::{EventOutcome, Key};
use crate::trace::{FocusMoveEvent, Tracer};

impl AccordionController {
    /// Moves focus in response to `key` pressed on the trigger of `r`.
    ///
    /// Home and End always apply. Arrow keys apply only when the accordion
    /// opted in, and wrap around at either end.
    pub(super) fn navigate(
        &mut self,
        doc: &mut Document,
        r: SectionRef,
        key: Key,
        tracer: &mut Tracer<'_>,
    ) -> EventOutcome {
        let Some(accordion) = self.accordion(r.accordion) else {
            return EventOutcome::IGNORED;
        };
        let count = accordion.sections.len();
        let arrows = accordion.options.arrow_keys;
        let to = match key {
            Key::Home => 0,
            Key::End => count - 1,
            Key::ArrowDown | Key::ArrowRight if arrows => (r.index + 1) % count,
            Key::ArrowUp | Key::ArrowLeft if arrows => (r.index + count - 1) % count,
            _ => return EventOutcome::IGNORED,
        };

        let target = accordion.sections[to].trigger;
        doc.focus(target);
        tracer.focus_move(&FocusMoveEvent {
            accordion: r.accordion,
            key,
            from: r.index,
            to,
        });
        EventOutcome {
            prevent_default: true,
            toggle: None,
            focus: Some(target),
        }
    }
}
