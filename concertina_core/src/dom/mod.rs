// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document tree data model.
//!
//! A *node* is an element, a text node, or a comment. Each node has:
//!
//! - **Identity** ([`NodeId`]): a generational handle that becomes stale when
//!   the node is destroyed, preventing use-after-free bugs at the API level.
//! - **Topology**: parent, first-child, and sibling links forming an ordered tree.
//! - **Content**: a lower-cased tag name and an ordered attribute list for
//!   elements ([`attribute`](Document::attribute),
//!   [`set_attribute`](Document::set_attribute)), or character data for text
//!   and comments ([`text`](Document::text)).
//!
//! Nodes are stored in struct-of-arrays layout with index-based handles. A
//! [`Document`] may hold several unattached subtrees; there is no implicit
//! root node.
//!
//! # Change tracking
//!
//! Mutations automatically mark the corresponding dirty channel (see
//! [`dirty`](crate::dirty)). [`Document::take_changes`] drains them into
//! [`DomChanges`], which backends apply to a live tree.

mod changes;
mod id;
mod serialize;
mod store;
mod traverse;

pub use changes::DomChanges;
pub use id::{INVALID, NodeId};
pub use store::{Attribute, Document, NodeKind};
pub use traverse::{Ancestors, Children, Descendants};
