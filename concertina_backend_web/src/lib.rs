// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backend for concertina.
//!
//! This crate provides integration with the live DOM:
//!
//! - [`DomPresenter`]: mirrors a [`Document`] into native nodes and imports
//!   existing markup.
//! - [`enhance`] / [`enhance_document`]: set up every accordion below an
//!   element and install delegated `click` and `keydown` listeners.
//! - [`ConsoleSink`]: trace events on the browser console.
//!
//! All state is shared between the listeners through `Rc<RefCell<_>>`. The
//! borrow is released before focus moves, since `focus()` dispatches events
//! synchronously.
//!
//! # Crate features
//!
//! - `trace`: turns on `concertina_core/trace`, so [`ConsoleSink`] receives
//!   events.

#![no_std]

extern crate alloc;

mod console;
mod import;
mod presenter;

pub use concertina_core::backend::Presenter;
pub use console::ConsoleSink;
pub use presenter::DomPresenter;

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use concertina_core::controller::{AccordionController, InitReport};
use concertina_core::dom::{Document, NodeId};
use concertina_core::ids::{IdGenerator, SequentialIds};
use concertina_core::input::{InputEvent, Key};
use concertina_core::markup::ControllerConfig;
use concertina_core::trace::Tracer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Element, Event, HtmlElement, KeyboardEvent, Node};

type EventClosure = Closure<dyn FnMut(Event)>;
type KeyClosure = Closure<dyn FnMut(KeyboardEvent)>;

struct State {
    doc: Document,
    controller: AccordionController,
    presenter: DomPresenter,
    sink: ConsoleSink,
}

/// Accordions set up by [`enhance`], with their event listeners.
///
/// Dropping the handle removes the listeners; the markup keeps its last
/// state. Call [`leak`](Self::leak) to keep the accordions interactive for
/// the lifetime of the page.
pub struct Enhanced {
    root: Element,
    state: Rc<RefCell<State>>,
    report: InitReport,
    click: EventClosure,
    keydown: KeyClosure,
}

impl core::fmt::Debug for Enhanced {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Enhanced")
            .field("root", &"Element")
            .field("report", &self.report)
            .finish_non_exhaustive()
    }
}

impl Enhanced {
    /// Returns what [`AccordionController::initialize`] reported.
    #[must_use]
    pub fn report(&self) -> &InitReport {
        &self.report
    }

    /// Returns the number of interactive accordions.
    #[must_use]
    pub fn accordion_count(&self) -> usize {
        self.state.borrow().controller.accordions().len()
    }

    /// Keeps the listeners installed forever.
    pub fn leak(self) {
        core::mem::forget(self);
    }
}

impl Drop for Enhanced {
    fn drop(&mut self) {
        let _ = self
            .root
            .remove_event_listener_with_callback("click", self.click.as_ref().unchecked_ref());
        let _ = self
            .root
            .remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref());
    }
}

/// Sets up every accordion at or below `root` with the default configuration
/// and `acc-N` container ids.
///
/// # Errors
///
/// Returns the exception thrown by a failing DOM call.
pub fn enhance(root: &Element) -> Result<Enhanced, JsValue> {
    enhance_with(root, ControllerConfig::default(), &mut SequentialIds::default())
}

/// Sets up every accordion in `document.body`.
///
/// # Errors
///
/// Fails if there is no window, document or body, or if a DOM call fails.
pub fn enhance_document() -> Result<Enhanced, JsValue> {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .ok_or_else(|| JsValue::from_str("no document body"))?;
    enhance(&body)
}

/// Sets up every accordion at or below `root`.
///
/// Malformed containers are left untouched and logged with `console.warn`.
///
/// # Errors
///
/// Returns the exception thrown by a failing DOM call.
pub fn enhance_with(
    root: &Element,
    config: ControllerConfig,
    ids: &mut dyn IdGenerator,
) -> Result<Enhanced, JsValue> {
    let document = root
        .owner_document()
        .ok_or_else(|| JsValue::from_str("element has no owner document"))?;
    let mut doc = Document::new();
    let mut presenter = DomPresenter::new(document);
    let root_id = presenter.import(&mut doc, root)?;
    // The page already shows the imported nodes.
    let _ = doc.take_changes();

    let mut controller = AccordionController::new(config);
    let mut sink = ConsoleSink;
    let report = controller.initialize(&mut doc, root_id, ids, &mut Tracer::new(&mut sink));
    for skipped in &report.skipped {
        console::warn_skipped(skipped);
    }
    let changes = doc.take_changes();
    presenter.try_apply(&doc, &changes)?;

    let state = Rc::new(RefCell::new(State {
        doc,
        controller,
        presenter,
        sink,
    }));

    let click = {
        let state = Rc::clone(&state);
        Closure::wrap(Box::new(move |event: Event| {
            dispatch(&state, &event, |target| InputEvent::Click { target });
        }) as Box<dyn FnMut(Event)>)
    };
    let keydown = {
        let state = Rc::clone(&state);
        Closure::wrap(Box::new(move |event: KeyboardEvent| {
            let key = Key::from_dom_key(&event.key());
            if key != Key::Other {
                dispatch(&state, &event, |target| InputEvent::KeyDown { target, key });
            }
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };
    root.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
    root.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;

    Ok(Enhanced {
        root: root.clone(),
        state,
        report,
        click,
        keydown,
    })
}

/// Routes one native event through the controller and mirrors the result.
fn dispatch(state: &RefCell<State>, event: &Event, input: impl FnOnce(NodeId) -> InputEvent) {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
        return;
    };
    let focus = {
        let mut guard = state.borrow_mut();
        let State {
            doc,
            controller,
            presenter,
            sink,
        } = &mut *guard;
        let Some(id) = presenter.resolve(doc, &target) else {
            return;
        };
        let outcome = controller.handle(doc, &input(id), &mut Tracer::new(sink));
        if outcome.prevent_default {
            event.prevent_default();
        }
        let changes = doc.take_changes();
        presenter.apply(doc, &changes);
        outcome
            .focus
            .and_then(|f| presenter.get_node(f.index()).cloned())
    };
    if let Some(node) = focus
        && let Ok(el) = node.dyn_into::<HtmlElement>()
    {
        let _ = el.focus();
    }
}
