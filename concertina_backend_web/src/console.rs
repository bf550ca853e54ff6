// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console logging.

use alloc::format;
use alloc::string::String;

use concertina_core::controller::{SkippedAccordion, ToggleOutcome};
use concertina_core::trace::{
    AccordionReadyEvent, AccordionSkippedEvent, FocusMoveEvent, ToggleEvent, TraceSink,
};
use wasm_bindgen::JsValue;
use web_sys::console;

/// A [`TraceSink`] that logs every event with `console.debug`.
///
/// Events only arrive when the `trace` feature is enabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl TraceSink for ConsoleSink {
    fn on_accordion_ready(&mut self, e: &AccordionReadyEvent<'_>) {
        debug(&ready_message(e));
    }

    fn on_accordion_skipped(&mut self, e: &AccordionSkippedEvent) {
        debug(&format!("concertina: skipped {:?}: {}", e.container, e.error));
    }

    fn on_toggle(&mut self, e: &ToggleEvent) {
        debug(&toggle_message(e));
    }

    fn on_focus_move(&mut self, e: &FocusMoveEvent) {
        debug(&format!(
            "concertina: #{} {:?} moved focus {} -> {}",
            e.accordion.0, e.key, e.from, e.to
        ));
    }
}

/// Warns about a container that could not be set up.
pub(crate) fn warn_skipped(skipped: &SkippedAccordion) {
    let msg = format!(
        "concertina: container {:?} left as is: {}",
        skipped.container, skipped.error
    );
    console::warn_1(&JsValue::from_str(&msg));
}

fn debug(msg: &str) {
    console::debug_1(&JsValue::from_str(msg));
}

fn ready_message(e: &AccordionReadyEvent<'_>) -> String {
    format!(
        "concertina: #{} ready as \"{}\" ({} sections, {} open, {} generated triggers)",
        e.accordion.0, e.element_id, e.sections, e.expanded, e.generated_triggers
    )
}

fn toggle_message(e: &ToggleEvent) -> String {
    let what = match e.outcome {
        ToggleOutcome::Expanded => "expanded",
        ToggleOutcome::Collapsed => "collapsed",
        ToggleOutcome::Ignored(_) => "ignored",
    };
    format!(
        "concertina: #{} section {} {what} ({} open)",
        e.accordion.0, e.section, e.expanded_count
    )
}

#[cfg(test)]
mod tests {
    use concertina_core::accordion::AccordionId;
    use concertina_core::controller::IgnoreReason;

    use super::*;

    #[test]
    fn ready_message_names_the_container() {
        let msg = ready_message(&AccordionReadyEvent {
            accordion: AccordionId(2),
            element_id: "faq",
            sections: 4,
            expanded: 1,
            generated_triggers: 3,
        });
        assert_eq!(
            msg,
            "concertina: #2 ready as \"faq\" (4 sections, 1 open, 3 generated triggers)"
        );
    }

    #[test]
    fn toggle_message_reports_outcome() {
        let mut e = ToggleEvent {
            accordion: AccordionId(0),
            section: 1,
            outcome: ToggleOutcome::Expanded,
            expanded_count: 1,
        };
        assert_eq!(
            toggle_message(&e),
            "concertina: #0 section 1 expanded (1 open)"
        );
        e.outcome = ToggleOutcome::Ignored(IgnoreReason::Disabled);
        assert_eq!(toggle_message(&e), "concertina: #0 section 1 ignored (1 open)");
    }
}
