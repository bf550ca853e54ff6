// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! The [`Document`](crate::dom::Document) uses multi-channel dirty tracking
//! (via [`understory_dirty`]) to remember which nodes a backend has to
//! touch. Each channel represents an independent category of change.
//!
//! All channels are local-only: a node is marked when its own state changes,
//! and nothing propagates to descendants. A mirrored DOM node carries its own
//! attributes and text, so there is no inherited state to recompute.
//!
//! - [`ATTRIBUTES`]: an attribute was set or removed on an element.
//! - [`TEXT`]: the data of a text or comment node changed.
//! - [`TOPOLOGY`]: the child list of a node changed. The *parent* is marked,
//!   so a backend can re-order exactly the affected child lists.
//!
//! # Consumption
//!
//! Callers never need to query dirty state directly. Each
//! [`Document::take_changes`](crate::dom::Document::take_changes) call drains
//! all channels and surfaces the results as
//! [`DomChanges`](crate::dom::DomChanges), which backends
//! [consume](crate::backend::Presenter::apply).

use understory_dirty::Channel;

/// Element attributes changed.
pub const ATTRIBUTES: Channel = Channel::new(0);

/// Text or comment data changed.
pub const TEXT: Channel = Channel::new(1);

/// Child list changed. Marks the parent.
pub const TOPOLOGY: Channel = Channel::new(2);
