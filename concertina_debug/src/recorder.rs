// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps an owned copy of every
//! event, so tests and tools can inspect a session after the controller is
//! done with it.

use concertina_core::accordion::AccordionId;
use concertina_core::dom::NodeId;
use concertina_core::error::SetupError;
use concertina_core::trace::{
    AccordionReadyEvent, AccordionSkippedEvent, FocusMoveEvent, ToggleEvent, TraceSink,
};

/// An owned trace event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// An [`AccordionReadyEvent`].
    AccordionReady {
        /// Controller-local accordion id.
        accordion: AccordionId,
        /// The container's `id` attribute.
        element_id: String,
        /// Number of sections.
        sections: usize,
        /// Number of sections expanded on load.
        expanded: usize,
        /// Number of generated trigger buttons.
        generated_triggers: usize,
    },
    /// An [`AccordionSkippedEvent`].
    AccordionSkipped {
        /// The skipped container.
        container: NodeId,
        /// Why it was skipped.
        error: SetupError,
    },
    /// A [`ToggleEvent`].
    Toggle(ToggleEvent),
    /// A [`FocusMoveEvent`].
    FocusMove(FocusMoveEvent),
}

/// A [`TraceSink`] that stores every event.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecorderSink {
    fn on_accordion_ready(&mut self, e: &AccordionReadyEvent<'_>) {
        self.events.push(RecordedEvent::AccordionReady {
            accordion: e.accordion,
            element_id: e.element_id.to_owned(),
            sections: e.sections,
            expanded: e.expanded,
            generated_triggers: e.generated_triggers,
        });
    }

    fn on_accordion_skipped(&mut self, e: &AccordionSkippedEvent) {
        self.events.push(RecordedEvent::AccordionSkipped {
            container: e.container,
            error: e.error,
        });
    }

    fn on_toggle(&mut self, e: &ToggleEvent) {
        self.events.push(RecordedEvent::Toggle(*e));
    }

    fn on_focus_move(&mut self, e: &FocusMoveEvent) {
        self.events.push(RecordedEvent::FocusMove(*e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concertina_core::controller::{AccordionController, ToggleOutcome};
    use concertina_core::dom::Document;
    use concertina_core::ids::SequentialIds;
    use concertina_core::markup;
    use concertina_core::trace::Tracer;

    #[test]
    fn records_a_session() {
        let mut doc = Document::new();
        let c = doc.create_element("div");
        doc.set_attribute(c, markup::ACCORDION, "");
        let heading = doc.create_element("h2");
        doc.set_attribute(heading, markup::HEADING, "");
        doc.set_text_content(heading, "Only");
        let panel = doc.create_element("div");
        doc.set_attribute(panel, markup::PANEL, "");
        doc.append_child(c, heading);
        doc.append_child(c, panel);

        let mut rec = RecorderSink::new();
        let mut controller = AccordionController::default();
        controller.initialize(
            &mut doc,
            c,
            &mut SequentialIds::default(),
            &mut Tracer::new(&mut rec),
        );
        let trigger = controller.accordions()[0].sections[0].trigger;
        controller.toggle(&mut doc, trigger, &mut Tracer::new(&mut rec));

        assert_eq!(rec.events().len(), 2);
        assert_eq!(
            rec.events()[0],
            RecordedEvent::AccordionReady {
                accordion: AccordionId(0),
                element_id: "acc-1".into(),
                sections: 1,
                expanded: 0,
                generated_triggers: 1,
            }
        );
        let RecordedEvent::Toggle(toggle) = rec.events()[1] else {
            panic!("expected a toggle, got {:?}", rec.events()[1]);
        };
        assert_eq!(toggle.outcome, ToggleOutcome::Expanded);
        assert_eq!(toggle.expanded_count, 1);

        rec.clear();
        assert!(rec.into_events().is_empty());
    }
}
