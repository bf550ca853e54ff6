// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Importing live markup into a [`Document`].

use concertina_core::dom::{Document, NodeId};
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Element, Node};

use crate::presenter::DomPresenter;

impl DomPresenter {
    /// Mirrors the subtree under `root` into `doc` and records every native
    /// node, so later [`DomChanges`] apply to the page in place.
    ///
    /// Only elements, text and comments are imported; other node types are
    /// left out of the mirror. The changes recorded by the import describe
    /// what the page already shows, so callers usually discard them with
    /// [`Document::take_changes`].
    ///
    /// # Errors
    ///
    /// Returns the exception thrown by the browser while tagging nodes.
    ///
    /// [`DomChanges`]: concertina_core::dom::DomChanges
    pub fn import(&mut self, doc: &mut Document, root: &Element) -> Result<NodeId, JsValue> {
        let id = self.import_element(doc, root)?;
        let mut stack = alloc::vec![(id, root.first_child())];
        while let Some((parent, next)) = stack.pop() {
            let Some(node) = next else {
                continue;
            };
            stack.push((parent, node.next_sibling()));
            let Some(child) = self.import_node(doc, &node)? else {
                continue;
            };
            doc.append_child(parent, child);
            if doc.is_element(child) {
                stack.push((child, node.first_child()));
            }
        }
        Ok(id)
    }

    fn import_node(
        &mut self,
        doc: &mut Document,
        node: &Node,
    ) -> Result<Option<NodeId>, JsValue> {
        let id = match node.node_type() {
            Node::ELEMENT_NODE => {
                let Some(el) = node.dyn_ref::<Element>() else {
                    return Ok(None);
                };
                return self.import_element(doc, el).map(Some);
            }
            Node::TEXT_NODE => doc.create_text(&node.node_value().unwrap_or_default()),
            Node::COMMENT_NODE => doc.create_comment(&node.node_value().unwrap_or_default()),
            _ => return Ok(None),
        };
        self.put_node(id.index(), node.clone())?;
        Ok(Some(id))
    }

    fn import_element(&mut self, doc: &mut Document, el: &Element) -> Result<NodeId, JsValue> {
        let id = doc.create_element(&el.local_name());
        for name in el.get_attribute_names().iter() {
            let Some(name) = name.as_string() else {
                continue;
            };
            if let Some(value) = el.get_attribute(&name) {
                doc.set_attribute(id, &name, &value);
            }
        }
        self.put_node(id.index(), el.clone().into())?;
        Ok(id)
    }
}
