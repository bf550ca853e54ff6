// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live DOM mirroring.
//!
//! Keeps one native [`Node`] per [`Document`] slot and applies incremental
//! updates from [`DomChanges`] to them.

use alloc::vec::Vec;

use concertina_core::backend::Presenter;
use concertina_core::dom::{Attribute, Document, DomChanges, NodeId, NodeKind};
use js_sys::Reflect;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Element, Node};

/// Property set on every mirrored native node, holding its slot index.
pub(crate) const SLOT_PROPERTY: &str = "__concertinaSlot";

/// Maps a [`Document`] to live DOM nodes, applying incremental updates from
/// [`DomChanges`].
///
/// Nodes imported from the page (see [`DomPresenter::import`]) are reused;
/// nodes the controller creates are built with the owner `web_sys::Document`.
pub struct DomPresenter {
    document: web_sys::Document,
    nodes: Vec<Option<Node>>,
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("document", &"Document")
            .field("nodes_len", &self.nodes.len())
            .finish()
    }
}

impl DomPresenter {
    /// Creates a presenter that builds new nodes with `document`.
    #[must_use]
    pub fn new(document: web_sys::Document) -> Self {
        Self {
            document,
            nodes: Vec::new(),
        }
    }

    /// Returns the native node mirroring slot `idx`, if any.
    #[must_use]
    pub fn get_node(&self, idx: u32) -> Option<&Node> {
        self.nodes.get(idx as usize).and_then(|slot| slot.as_ref())
    }

    /// Finds the [`NodeId`] of the nearest mirrored node at or above `node`.
    ///
    /// Nodes inserted into the page by other scripts are skipped over.
    #[must_use]
    pub fn resolve(&self, doc: &Document, node: &Node) -> Option<NodeId> {
        let mut current = node.clone();
        loop {
            if let Some(id) = self.id_of(doc, &current) {
                return Some(id);
            }
            current = current.parent_node()?;
        }
    }

    /// Returns the [`NodeId`] of `node` if it is mirrored by this presenter.
    fn id_of(&self, doc: &Document, node: &Node) -> Option<NodeId> {
        let slot = Reflect::get(node, &JsValue::from_str(SLOT_PROPERTY)).ok()?;
        let idx = slot_index(slot.as_f64()?)?;
        let mirrored = self.get_node(idx)?;
        mirrored.is_same_node(Some(node)).then(|| doc.node_at(idx))
    }

    /// Takes a node out of the slot, leaving `None`.
    fn take_node(&mut self, idx: u32) -> Option<Node> {
        self.nodes.get_mut(idx as usize)?.take()
    }

    /// Stores a node at the given slot index, growing the vec if needed, and
    /// tags it with its slot.
    pub(crate) fn put_node(&mut self, idx: u32, node: Node) -> Result<(), JsValue> {
        Reflect::set(
            &node,
            &JsValue::from_str(SLOT_PROPERTY),
            &JsValue::from(idx),
        )?;
        let slot = idx as usize;
        if self.nodes.len() <= slot {
            self.nodes.resize_with(slot + 1, || None);
        }
        self.nodes[slot] = Some(node);
        Ok(())
    }

    /// Applies `changes`, stopping at the first failing DOM call.
    ///
    /// # Errors
    ///
    /// Returns the exception thrown by the browser.
    pub fn try_apply(&mut self, doc: &Document, changes: &DomChanges) -> Result<(), JsValue> {
        // 1. Removals
        for &idx in &changes.removed {
            if let Some(node) = self.take_node(idx)
                && let Some(parent) = node.parent_node()
            {
                parent.remove_child(&node)?;
            }
        }

        // 2. Additions
        for &idx in &changes.added {
            if self.get_node(idx).is_some() {
                continue;
            }
            let node: Node = match doc.kind_at(idx) {
                NodeKind::Element => {
                    let el = self.document.create_element(doc.tag_at(idx))?;
                    for attr in doc.attributes_at(idx) {
                        el.set_attribute(&attr.name, &attr.value)?;
                    }
                    el.into()
                }
                NodeKind::Text => self.document.create_text_node(doc.text_at(idx)).into(),
                NodeKind::Comment => self.document.create_comment(doc.text_at(idx)).into(),
            };
            self.put_node(idx, node)?;
        }

        // 3. Attributes the document touched; everything else on the native
        // element belongs to the page.
        for (idx, name) in &changes.attribute_names {
            let Some(el) = self.get_node(*idx).and_then(|n| n.dyn_ref::<Element>()) else {
                continue;
            };
            match current_value(doc.attributes_at(*idx), name) {
                Some(value) => {
                    if el.get_attribute(name).as_deref() != Some(value) {
                        el.set_attribute(name, value)?;
                    }
                }
                None => el.remove_attribute(name)?,
            }
        }

        // 4. Text
        for &idx in &changes.text {
            if let Some(node) = self.get_node(idx) {
                node.set_node_value(Some(doc.text_at(idx)));
            }
        }

        // 5. Topology reorder
        for &idx in &changes.topology {
            let Some(parent) = self.get_node(idx) else {
                continue;
            };
            for child in doc.children_at(idx) {
                if let Some(native) = self.get_node(child.index()) {
                    // DOM re-append moves an existing child, reordering it.
                    parent.append_child(native)?;
                }
            }
        }
        Ok(())
    }
}

impl Presenter for DomPresenter {
    /// Applies incremental changes from a [`DomChanges`] to the DOM.
    ///
    /// A failing DOM call is logged to the console and ends this batch.
    fn apply(&mut self, doc: &Document, changes: &DomChanges) {
        if let Err(err) = self.try_apply(doc, changes) {
            let msg = JsValue::from_str("concertina: DOM update failed:");
            web_sys::console::error_2(&msg, &err);
        }
    }
}

/// Returns the value `name` has in the document, or `None` if it was removed.
fn current_value<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|a| a.name.eq_ignore_ascii_case(name))
        .map(|a| a.value.as_str())
}

/// Converts a slot property value back into an index.
fn slot_index(value: f64) -> Option<u32> {
    if !(value >= 0.0 && value <= f64::from(u32::MAX) && value.fract() == 0.0) {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "range and integrality are checked above"
    )]
    let idx = value as u32;
    Some(idx)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn attr(name: &str, value: &str) -> Attribute {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }

    #[test]
    fn only_touched_names_are_looked_up() {
        let attrs = vec![attr("aria-hidden", "false"), attr("id", "acc-1_panel_1")];
        assert_eq!(current_value(&attrs, "aria-hidden"), Some("false"));
        assert_eq!(current_value(&attrs, "ARIA-HIDDEN"), Some("false"));
        // A removed state attribute resolves to a removal.
        assert_eq!(current_value(&attrs, "aria-disabled"), None);
    }

    #[test]
    fn slot_index_rejects_foreign_values() {
        assert_eq!(slot_index(0.0), Some(0));
        assert_eq!(slot_index(42.0), Some(42));
        assert_eq!(slot_index(-1.0), None);
        assert_eq!(slot_index(1.5), None);
        assert_eq!(slot_index(f64::NAN), None);
        assert_eq!(slot_index(1e12), None);
    }
}
