// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use concertina_core::controller::{IgnoreReason, ToggleOutcome};
use concertina_core::trace::{
    AccordionReadyEvent, AccordionSkippedEvent, FocusMoveEvent, ToggleEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Short name of a toggle outcome.
pub(crate) fn outcome_name(outcome: ToggleOutcome) -> &'static str {
    match outcome {
        ToggleOutcome::Expanded => "expanded",
        ToggleOutcome::Collapsed => "collapsed",
        ToggleOutcome::Ignored(IgnoreReason::Disabled) => "ignored:disabled",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_accordion_ready(&mut self, e: &AccordionReadyEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[ready] acc={} id={} sections={} expanded={} generated={}",
            e.accordion.0, e.element_id, e.sections, e.expanded, e.generated_triggers,
        );
    }

    fn on_accordion_skipped(&mut self, e: &AccordionSkippedEvent) {
        let _ = writeln!(
            self.writer,
            "[skipped] container={:?} error=\"{}\"",
            e.container, e.error,
        );
    }

    fn on_toggle(&mut self, e: &ToggleEvent) {
        let _ = writeln!(
            self.writer,
            "[toggle] acc={} section={} {} expanded={}",
            e.accordion.0,
            e.section,
            outcome_name(e.outcome),
            e.expanded_count,
        );
    }

    fn on_focus_move(&mut self, e: &FocusMoveEvent) {
        let _ = writeln!(
            self.writer,
            "[focus] acc={} key={:?} {} -> {}",
            e.accordion.0, e.key, e.from, e.to,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concertina_core::accordion::AccordionId;
    use concertina_core::input::Key;

    #[test]
    fn pretty_print_toggle() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_toggle(&ToggleEvent {
            accordion: AccordionId(1),
            section: 2,
            outcome: ToggleOutcome::Ignored(IgnoreReason::Disabled),
            expanded_count: 1,
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert_eq!(
            output, "[toggle] acc=1 section=2 ignored:disabled expanded=1\n",
            "got: {output}"
        );
    }

    #[test]
    fn pretty_print_ready_and_focus() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_accordion_ready(&AccordionReadyEvent {
            accordion: AccordionId(0),
            element_id: "acc-1",
            sections: 3,
            expanded: 0,
            generated_triggers: 3,
        });
        sink.on_focus_move(&FocusMoveEvent {
            accordion: AccordionId(0),
            key: Key::End,
            from: 0,
            to: 2,
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert!(output.contains("[ready] acc=0 id=acc-1"), "got: {output}");
        assert!(output.contains("[focus] acc=0 key=End 0 -> 2"), "got: {output}");
    }
}
