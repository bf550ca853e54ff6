// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted accordion session that exercises the tracing and diagnostics
//! pipeline.
//!
//! Builds a page with four accordion containers (one of them malformed),
//! replays a fixed sequence of clicks and key presses, and records every event
//! to both a [`PrettyPrintSink`](concertina_debug::pretty::PrettyPrintSink)
//! and a [`RecorderSink`](concertina_debug::recorder::RecorderSink). Prints
//! the resulting HTML and writes the recording as JSON.

use std::fs::File;
use std::io::BufWriter;

use concertina_core::controller::AccordionController;
use concertina_core::dom::{Document, NodeId};
use concertina_core::ids::SequentialIds;
use concertina_core::input::{InputEvent, Key};
use concertina_core::markup;
use concertina_core::trace::{
    AccordionReadyEvent, AccordionSkippedEvent, FocusMoveEvent, ToggleEvent, TraceSink, Tracer,
};

use concertina_debug::pretty::PrettyPrintSink;
use concertina_debug::recorder::RecorderSink;

/// Forwards every event to both sinks.
struct Both<'a> {
    pretty: &'a mut PrettyPrintSink,
    recorder: &'a mut RecorderSink,
}

impl TraceSink for Both<'_> {
    fn on_accordion_ready(&mut self, e: &AccordionReadyEvent<'_>) {
        self.pretty.on_accordion_ready(e);
        self.recorder.on_accordion_ready(e);
    }

    fn on_accordion_skipped(&mut self, e: &AccordionSkippedEvent) {
        self.pretty.on_accordion_skipped(e);
        self.recorder.on_accordion_skipped(e);
    }

    fn on_toggle(&mut self, e: &ToggleEvent) {
        self.pretty.on_toggle(e);
        self.recorder.on_toggle(e);
    }

    fn on_focus_move(&mut self, e: &FocusMoveEvent) {
        self.pretty.on_focus_move(e);
        self.recorder.on_focus_move(e);
    }
}

fn main() {
    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut recorder = RecorderSink::new();

    // -- page --------------------------------------------------------------
    let mut doc = Document::new();
    let body = doc.create_element("body");
    let plain = container(&mut doc, body, &[]);
    sections(&mut doc, plain, &["Shipping", "Returns", "Warranty"]);
    let constant = container(
        &mut doc,
        body,
        &[(markup::CONSTANT, ""), (markup::DEFAULT, "1"), (markup::ARROW_KEYS, "")],
    );
    sections(&mut doc, constant, &["First", "Second", "Third"]);
    let multi = container(&mut doc, body, &[(markup::MULTI, "")]);
    sections(&mut doc, multi, &["Alpha", "Beta"]);
    let broken = container(&mut doc, body, &[]);
    let orphan = doc.create_element("h3");
    doc.set_attribute(orphan, markup::HEADING, "");
    doc.set_text_content(orphan, "No panel follows");
    doc.append_child(broken, orphan);

    // -- setup -------------------------------------------------------------
    let mut controller = AccordionController::default();
    let mut ids = SequentialIds::default();
    let report = {
        let mut both = Both {
            pretty: &mut pretty,
            recorder: &mut recorder,
        };
        controller.initialize(&mut doc, body, &mut ids, &mut Tracer::new(&mut both))
    };
    println!(
        "{} ready, {} skipped\n",
        report.ready.len(),
        report.skipped.len()
    );

    // -- scripted input ----------------------------------------------------
    let triggers: Vec<Vec<NodeId>> = controller
        .accordions()
        .iter()
        .map(|a| a.triggers().collect())
        .collect();
    let script = [
        InputEvent::Click {
            target: triggers[0][1],
        },
        InputEvent::Click {
            target: triggers[0][2],
        },
        InputEvent::Click {
            target: triggers[0][2],
        },
        InputEvent::Click {
            target: triggers[1][0],
        },
        InputEvent::Click {
            target: triggers[1][2],
        },
        InputEvent::KeyDown {
            target: triggers[1][2],
            key: Key::ArrowDown,
        },
        InputEvent::KeyDown {
            target: triggers[0][0],
            key: Key::End,
        },
        InputEvent::Click {
            target: triggers[2][0],
        },
        InputEvent::Click {
            target: triggers[2][1],
        },
    ];
    for event in &script {
        let mut both = Both {
            pretty: &mut pretty,
            recorder: &mut recorder,
        };
        let outcome = controller.handle(&mut doc, event, &mut Tracer::new(&mut both));
        assert!(outcome.prevent_default, "scripted events target triggers");
    }

    // -- result ------------------------------------------------------------
    println!("\n{}\n", doc.to_html(body));

    let path = "concertina-trace.json";
    let file = File::create(path).expect("failed to create concertina-trace.json");
    let mut writer = BufWriter::new(file);
    concertina_debug::json::export(recorder.events(), &mut writer)
        .expect("failed to write trace JSON");
    println!("Wrote {path} ({} events)", recorder.events().len());
}

fn container(doc: &mut Document, body: NodeId, options: &[(&str, &str)]) -> NodeId {
    let c = doc.create_element("div");
    doc.set_attribute(c, markup::ACCORDION, "");
    for &(name, value) in options {
        doc.set_attribute(c, name, value);
    }
    doc.append_child(body, c);
    c
}

fn sections(doc: &mut Document, container: NodeId, labels: &[&str]) {
    for label in labels {
        let heading = doc.create_element("h3");
        doc.set_attribute(heading, markup::HEADING, "");
        doc.set_text_content(heading, label);
        doc.append_child(container, heading);
        let panel = doc.create_element("div");
        doc.set_attribute(panel, markup::PANEL, "");
        let p = doc.create_element("p");
        doc.set_text_content(p, &format!("About {}.", label.to_lowercase()));
        doc.append_child(panel, p);
        doc.append_child(container, panel);
    }
}
