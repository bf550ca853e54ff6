// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! Concertina splits platform-specific work into *backend* crates. Each
//! backend provides the following pieces:
//!
//! - **Import**: Builds a [`Document`] mirror of the live markup and keeps a
//!   slot-indexed table of native nodes. This is backend-specific and not
//!   abstracted by a trait because native node types differ fundamentally.
//!
//! - **Input**: Translates native events into
//!   [`InputEvent`](crate::input::InputEvent)s and feeds them to
//!   [`AccordionController::handle`](crate::controller::AccordionController::handle).
//!   The returned [`EventOutcome`](crate::input::EventOutcome) says whether to
//!   cancel the native default action and where focus goes.
//!
//! - **Presenter**: Implements the [`Presenter`] trait to apply drained
//!   [`DomChanges`] to the native tree.
//!
//! # Crate boundaries
//!
//! `concertina_core` owns the data model, the controller, and this contract
//! module. Backend crates depend on `concertina_core` and provide platform
//! glue. Application code depends on both and wires them together.

use crate::dom::{Document, DomChanges};

/// Applies drained document changes to a platform-native tree.
///
/// DOM-based presenters and test doubles implement this trait.
///
/// # Event handler pseudocode
///
/// ```rust,ignore
/// fn on_click(target: NodeId) {
///     let outcome = controller.handle(&mut doc, &InputEvent::Click { target }, &mut tracer);
///     if outcome.prevent_default {
///         native_event.prevent_default();
///     }
///
///     // Present: mirror the attribute changes into the native tree
///     let changes = doc.take_changes();
///     presenter.apply(&doc, &changes);
///
///     if let Some(focus) = outcome.focus {
///         native_node(focus).focus();
///     }
/// }
/// ```
pub trait Presenter {
    /// Applies the given [`DomChanges`] to the backing native tree, reading
    /// current node contents from `doc` as needed.
    fn apply(&mut self, doc: &Document, changes: &DomChanges);
}
