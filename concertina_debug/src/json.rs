// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded events.
//!
//! [`export`] turns the log of a [`RecorderSink`](crate::recorder::RecorderSink)
//! into a JSON array with one object per event, tagged by an `"event"` field.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::pretty::outcome_name;
use crate::recorder::RecordedEvent;

/// Converts one recorded event to a JSON object.
#[must_use]
pub fn to_value(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::AccordionReady {
            accordion,
            element_id,
            sections,
            expanded,
            generated_triggers,
        } => json!({
            "event": "ready",
            "accordion": accordion.0,
            "id": element_id,
            "sections": sections,
            "expanded": expanded,
            "generated_triggers": generated_triggers,
        }),
        RecordedEvent::AccordionSkipped { container, error } => json!({
            "event": "skipped",
            "container": container.index(),
            "error": error.to_string(),
        }),
        RecordedEvent::Toggle(e) => json!({
            "event": "toggle",
            "accordion": e.accordion.0,
            "section": e.section,
            "outcome": outcome_name(e.outcome),
            "expanded_count": e.expanded_count,
        }),
        RecordedEvent::FocusMove(e) => json!({
            "event": "focus",
            "accordion": e.accordion.0,
            "key": format!("{:?}", e.key),
            "from": e.from,
            "to": e.to,
        }),
    }
}

/// Writes recorded events as a pretty-printed JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events.iter().map(to_value).collect();
    serde_json::to_writer_pretty(writer, &values)?;
    Ok(())
}
