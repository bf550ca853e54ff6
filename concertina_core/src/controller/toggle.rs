// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opening and closing sections.

use super::{AccordionController, IgnoreReason, ToggleOutcome, write_state};
use crate::accordion::SectionRef;
use crate::dom::{Document, NodeId};
use crate::trace::{ToggleEvent, Tracer};

impl AccordionController {
    /// Toggles the section controlled by `trigger`.
    ///
    /// Returns `None` if `trigger` is not a registered trigger.
    pub fn toggle(
        &mut self,
        doc: &mut Document,
        trigger: NodeId,
        tracer: &mut Tracer<'_>,
    ) -> Option<ToggleOutcome> {
        let r = self.section_ref(trigger)?;
        Some(self.toggle_section(doc, r, tracer))
    }

    pub(super) fn toggle_section(
        &mut self,
        doc: &mut Document,
        r: SectionRef,
        tracer: &mut Tracer<'_>,
    ) -> ToggleOutcome {
        let accordion = &mut self.accordions[r.accordion.0 as usize];
        let options = accordion.options;

        let outcome = {
            let section = &mut accordion.sections[r.index];
            // The open section of a constant-open accordion is always disabled.
            debug_assert!(
                !(section.expanded && options.constant_open) || section.disabled,
                "open constant section must be disabled"
            );
            if section.disabled {
                ToggleOutcome::Ignored(IgnoreReason::Disabled)
            } else {
                section.current = true;
                section.expanded = !section.expanded;
                if section.expanded && options.constant_open {
                    section.disabled = true;
                }
                if section.expanded {
                    ToggleOutcome::Expanded
                } else {
                    ToggleOutcome::Collapsed
                }
            }
        };

        if !matches!(outcome, ToggleOutcome::Ignored(_)) {
            for (i, other) in accordion.sections.iter_mut().enumerate() {
                if i == r.index {
                    continue;
                }
                other.current = false;
                if options.exclusive() {
                    other.expanded = false;
                    other.disabled = false;
                }
            }
            for section in &accordion.sections {
                write_state(doc, section);
            }
        }

        tracer.toggle(&ToggleEvent {
            accordion: r.accordion,
            section: r.index,
            outcome,
            expanded_count: accordion.expanded_count(),
        });
        outcome
    }
}
