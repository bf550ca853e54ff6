// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document tree and controller for accessible accordion widgets.
//!
//! `concertina_core` turns marked-up content (headings followed by content
//! panels) into a WAI-ARIA accordion. It is `no_std` compatible (with
//! `alloc`) and operates on an explicit document tree addressed by
//! generational handles, so it can be driven by a browser backend or by tests
//! and tools without any platform at all.
//!
//! # Architecture
//!
//! ```text
//!   Backend (imports live markup)
//!       │
//!       ▼
//!   Document ──► AccordionController::initialize() ──► InitReport
//!       │
//!       │   InputEvent (click, keydown)
//!       ▼
//!   AccordionController::handle() ──► EventOutcome (focus, prevent_default)
//!       │
//!       ▼
//!   Document::take_changes() ──► DomChanges ──► Presenter::apply()
//! ```
//!
//! **[`dom`]**: Struct-of-arrays document tree with generational handles,
//! attributes, text, focus, and HTML serialization.
//!
//! **[`dirty`]**: Change channels via `understory_dirty`. Attribute, text,
//! and topology mutations mark the corresponding channel; draining them
//! yields [`DomChanges`](dom::DomChanges).
//!
//! **[`markup`]**: The markup contract: marker attributes, generated class
//! names, and per-accordion [`AccordionOptions`](markup::AccordionOptions).
//!
//! **[`ids`]**: Caller-supplied [`IdGenerator`](ids::IdGenerator) for
//! containers that carry no id.
//!
//! **[`accordion`]**: Accordion and section records with explicit
//! back-references.
//!
//! **[`controller`]**: [`AccordionController`](controller::AccordionController):
//! discovery, setup, toggling, and keyboard navigation.
//!
//! **[`input`]**: Input events and key mapping.
//!
//! **[`error`]**: [`SetupError`](error::SetupError) for malformed instances.
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait that
//! platform backends implement to mirror changes into a native tree.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types,
//! with zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod accordion;
pub mod backend;
pub mod controller;
pub mod dirty;
pub mod dom;
pub mod error;
pub mod ids;
pub mod input;
pub mod markup;
pub mod trace;
