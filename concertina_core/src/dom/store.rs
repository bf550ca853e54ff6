// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays node storage with allocation, topology, attributes, and
//! focus.

use alloc::string::String;
use alloc::vec::Vec;

use understory_dirty::{CycleHandling, DirtyTracker};

use super::id::{INVALID, NodeId};
use super::traverse::{Ancestors, Children, Descendants};
use crate::dirty;

/// The kind of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// An element with a tag name and attributes.
    Element,
    /// A text node.
    Text,
    /// A comment node.
    Comment,
}

/// A single element attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    /// ASCII lower-cased attribute name.
    pub name: String,
    /// Attribute value.
    pub value: String,
}

/// Struct-of-arrays storage for all nodes of a document.
///
/// Nodes are addressed by [`NodeId`] handles. Internally, each node occupies
/// a slot in parallel arrays. Destroyed nodes are recycled via a free list,
/// and generation counters prevent stale handle access.
#[derive(Debug)]
pub struct Document {
    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) first_child: Vec<u32>,
    pub(crate) next_sibling: Vec<u32>,
    pub(crate) prev_sibling: Vec<u32>,

    // -- Content --
    pub(crate) kind: Vec<NodeKind>,
    pub(crate) tag: Vec<String>,
    pub(crate) attributes: Vec<Vec<Attribute>>,
    pub(crate) text: Vec<String>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,

    // -- Lifecycle tracking --
    pub(crate) pending_added: Vec<u32>,
    pub(crate) pending_removed: Vec<u32>,
    /// Attribute names written or removed, per slot.
    pub(crate) pending_attributes: Vec<(u32, String)>,

    // -- Focus --
    pub(crate) focused: u32,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: Vec::new(),
            first_child: Vec::new(),
            next_sibling: Vec::new(),
            prev_sibling: Vec::new(),
            kind: Vec::new(),
            tag: Vec::new(),
            attributes: Vec::new(),
            text: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            pending_added: Vec::new(),
            pending_removed: Vec::new(),
            pending_attributes: Vec::new(),
            focused: INVALID,
        }
    }

    // -- Allocation API --

    /// Creates a detached element and returns its handle.
    ///
    /// The tag name is lower-cased.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = self.allocate(NodeKind::Element);
        self.tag[id.idx as usize] = tag.to_ascii_lowercase();
        id
    }

    /// Creates a detached text node and returns its handle.
    pub fn create_text(&mut self, data: &str) -> NodeId {
        let id = self.allocate(NodeKind::Text);
        self.text[id.idx as usize] = String::from(data);
        self.dirty.mark(id.idx, dirty::TEXT);
        id
    }

    /// Creates a detached comment node and returns its handle.
    pub fn create_comment(&mut self, data: &str) -> NodeId {
        let id = self.allocate(NodeKind::Comment);
        self.text[id.idx as usize] = String::from(data);
        self.dirty.mark(id.idx, dirty::TEXT);
        id
    }

    /// Destroys a node, freeing its slot for reuse.
    ///
    /// # Panics
    ///
    /// Panics if the node has children (remove them first, or use
    /// [`destroy_subtree`](Self::destroy_subtree)) or if the handle is stale.
    pub fn destroy_node(&mut self, id: NodeId) {
        self.validate(id);
        let idx = id.idx;
        assert!(
            self.first_child[idx as usize] == INVALID,
            "cannot destroy node with children"
        );

        if self.parent[idx as usize] != INVALID {
            let p = self.parent[idx as usize];
            self.unlink_from_parent(idx);
            self.dirty.mark(p, dirty::TOPOLOGY);
        }

        self.dirty.remove_key(idx);

        // Bump generation so old handles immediately fail validation.
        self.generation[idx as usize] += 1;

        if self.focused == idx {
            self.focused = INVALID;
        }
        self.pending_attributes.retain(|&(slot, _)| slot != idx);
        self.attributes[idx as usize].clear();
        self.text[idx as usize].clear();
        self.free_list.push(idx);
        self.pending_removed.push(idx);
    }

    /// Destroys a node and all of its descendants.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn destroy_subtree(&mut self, id: NodeId) {
        self.validate(id);
        while self.first_child[id.idx as usize] != INVALID {
            let child = self.handle(self.first_child[id.idx as usize]);
            self.destroy_subtree(child);
        }
        self.destroy_node(id);
    }

    /// Returns whether the given handle refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        (id.idx < self.len)
            && self.generation[id.idx as usize] == id.generation
            && !self.free_list.contains(&id.idx)
    }

    // -- Topology API --

    /// Adds `child` as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale, if `child` already has a parent, or
    /// if `parent` is not an element.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.validate(parent);
        self.validate(child);
        let p = parent.idx;
        let c = child.idx;
        assert!(
            self.kind[p as usize] == NodeKind::Element,
            "only elements can have children"
        );
        assert!(
            self.parent[c as usize] == INVALID,
            "child already has a parent"
        );

        self.parent[c as usize] = p;
        self.prev_sibling[c as usize] = INVALID;
        self.next_sibling[c as usize] = INVALID;

        if self.first_child[p as usize] == INVALID {
            self.first_child[p as usize] = c;
        } else {
            // Walk to last child.
            let mut last = self.first_child[p as usize];
            while self.next_sibling[last as usize] != INVALID {
                last = self.next_sibling[last as usize];
            }
            self.next_sibling[last as usize] = c;
            self.prev_sibling[c as usize] = last;
        }

        self.dirty.mark(p, dirty::TOPOLOGY);
    }

    /// Inserts `child` before `sibling` in the sibling list.
    ///
    /// `child` must not already have a parent. `sibling` must have a parent.
    ///
    /// # Panics
    ///
    /// Panics if handles are stale, `child` already has a parent, or `sibling`
    /// has no parent.
    pub fn insert_before(&mut self, child: NodeId, sibling: NodeId) {
        self.validate(child);
        self.validate(sibling);
        let c = child.idx;
        let s = sibling.idx;
        assert!(
            self.parent[c as usize] == INVALID,
            "child already has a parent"
        );
        let p = self.parent[s as usize];
        assert!(p != INVALID, "sibling has no parent");

        self.parent[c as usize] = p;
        self.next_sibling[c as usize] = s;
        self.prev_sibling[c as usize] = self.prev_sibling[s as usize];

        if self.prev_sibling[s as usize] != INVALID {
            self.next_sibling[self.prev_sibling[s as usize] as usize] = c;
        } else {
            // `sibling` was the first child.
            self.first_child[p as usize] = c;
        }
        self.prev_sibling[s as usize] = c;

        self.dirty.mark(p, dirty::TOPOLOGY);
    }

    /// Removes `child` from its current parent.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or the node has no parent.
    pub fn remove_from_parent(&mut self, child: NodeId) {
        self.validate(child);
        let c = child.idx;
        assert!(self.parent[c as usize] != INVALID, "node has no parent");

        let p = self.parent[c as usize];
        self.unlink_from_parent(c);
        self.dirty.mark(p, dirty::TOPOLOGY);
    }

    /// Returns the parent of a node, if any.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.validate(id);
        let p = self.parent[id.idx as usize];
        (p != INVALID).then(|| self.handle(p))
    }

    /// Returns an iterator over the direct children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Children<'_> {
        self.validate(id);
        Children::new(self, self.first_child[id.idx as usize])
    }

    /// Returns an iterator over the direct element children of a node.
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .filter(|c| self.kind[c.idx as usize] == NodeKind::Element)
    }

    /// Returns a pre-order iterator over the descendants of a node.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        self.validate(id);
        Descendants::new(self, id.idx)
    }

    /// Returns an iterator over the ancestors of a node, nearest first.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        self.validate(id);
        Ancestors::new(self, id.idx)
    }

    /// Returns the next sibling that is an element.
    #[must_use]
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.validate(id);
        let mut idx = self.next_sibling[id.idx as usize];
        while idx != INVALID {
            if self.kind[idx as usize] == NodeKind::Element {
                return Some(self.handle(idx));
            }
            idx = self.next_sibling[idx as usize];
        }
        None
    }

    /// Returns the previous sibling that is an element.
    #[must_use]
    pub fn previous_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.validate(id);
        let mut idx = self.prev_sibling[id.idx as usize];
        while idx != INVALID {
            if self.kind[idx as usize] == NodeKind::Element {
                return Some(self.handle(idx));
            }
            idx = self.prev_sibling[idx as usize];
        }
        None
    }

    /// Returns every live node that has no parent, in slot order.
    #[must_use]
    pub fn roots(&self) -> Vec<NodeId> {
        (0..self.len)
            .filter(|&idx| self.parent[idx as usize] == INVALID && !self.free_list.contains(&idx))
            .map(|idx| self.handle(idx))
            .collect()
    }

    // -- Content API --

    /// Returns the kind of a node.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.validate(id);
        self.kind[id.idx as usize]
    }

    /// Returns whether the node is an element.
    #[must_use]
    pub fn is_element(&self, id: NodeId) -> bool {
        self.kind(id) == NodeKind::Element
    }

    /// Returns the lower-cased tag name of an element, or `""` for other
    /// node kinds.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> &str {
        self.validate(id);
        &self.tag[id.idx as usize]
    }

    /// Returns the value of an attribute, if present.
    ///
    /// Always `None` for non-element nodes.
    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.validate(id);
        self.attributes[id.idx as usize]
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .map(|a| a.value.as_str())
    }

    /// Returns whether an attribute is present.
    #[must_use]
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    /// Returns all attributes of a node in insertion order.
    #[must_use]
    pub fn attributes(&self, id: NodeId) -> &[Attribute] {
        self.validate(id);
        &self.attributes[id.idx as usize]
    }

    /// Sets an attribute, replacing any previous value.
    ///
    /// Marks the ATTRIBUTES channel only when the value actually changes.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or the node is not an element.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        self.validate_element(id);
        let attrs = &mut self.attributes[id.idx as usize];
        let written = match attrs.iter_mut().find(|a| a.name.eq_ignore_ascii_case(name)) {
            Some(existing) if existing.value == value => return,
            Some(existing) => {
                existing.value.clear();
                existing.value.push_str(value);
                existing.name.clone()
            }
            None => {
                let name = name.to_ascii_lowercase();
                attrs.push(Attribute {
                    name: name.clone(),
                    value: String::from(value),
                });
                name
            }
        };
        self.pending_attributes.push((id.idx, written));
        self.dirty.mark(id.idx, dirty::ATTRIBUTES);
    }

    /// Removes an attribute. Returns whether it was present.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or the node is not an element.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> bool {
        self.validate_element(id);
        let attrs = &mut self.attributes[id.idx as usize];
        let Some(pos) = attrs.iter().position(|a| a.name.eq_ignore_ascii_case(name)) else {
            return false;
        };
        let removed = attrs.remove(pos);
        self.pending_attributes.push((id.idx, removed.name));
        self.dirty.mark(id.idx, dirty::ATTRIBUTES);
        true
    }

    /// Returns whether the element's `class` attribute contains `class`.
    #[must_use]
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attribute(id, "class")
            .is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class))
    }

    /// Adds a token to the element's `class` attribute if not yet present.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or the node is not an element.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if self.has_class(id, class) {
            return;
        }
        let mut list = String::from(self.attribute(id, "class").unwrap_or_default().trim());
        if !list.is_empty() {
            list.push(' ');
        }
        list.push_str(class);
        self.set_attribute(id, "class", &list);
    }

    /// Returns the character data of a text or comment node, or `""` for
    /// elements.
    #[must_use]
    pub fn text(&self, id: NodeId) -> &str {
        self.validate(id);
        &self.text[id.idx as usize]
    }

    /// Replaces the character data of a text or comment node.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or the node is an element.
    pub fn set_text(&mut self, id: NodeId, data: &str) {
        self.validate(id);
        assert!(
            self.kind[id.idx as usize] != NodeKind::Element,
            "set_text on an element; use set_text_content"
        );
        let text = &mut self.text[id.idx as usize];
        if text != data {
            text.clear();
            text.push_str(data);
            self.dirty.mark(id.idx, dirty::TEXT);
        }
    }

    /// Returns the concatenated data of all descendant text nodes (or the
    /// node's own data for text nodes), like the DOM `textContent` getter.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        match self.kind(id) {
            NodeKind::Text | NodeKind::Comment => String::from(self.text(id)),
            NodeKind::Element => self
                .descendants(id)
                .filter(|d| self.kind[d.idx as usize] == NodeKind::Text)
                .map(|d| self.text[d.idx as usize].as_str())
                .collect(),
        }
    }

    /// Replaces all children of an element with a single text node holding
    /// `data` (no text node when `data` is empty), like the DOM
    /// `textContent` setter.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or the node is not an element.
    pub fn set_text_content(&mut self, id: NodeId, data: &str) {
        self.clear_children(id);
        if !data.is_empty() {
            let text = self.create_text(data);
            self.append_child(id, text);
        }
    }

    /// Destroys every child subtree of an element.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or the node is not an element.
    pub fn clear_children(&mut self, id: NodeId) {
        self.validate_element(id);
        while self.first_child[id.idx as usize] != INVALID {
            let child = self.handle(self.first_child[id.idx as usize]);
            self.destroy_subtree(child);
        }
    }

    // -- Focus API --

    /// Returns the focused node, if any.
    #[must_use]
    pub fn focused(&self) -> Option<NodeId> {
        (self.focused != INVALID).then(|| self.handle(self.focused))
    }

    /// Moves focus to `id`.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or the node is not an element.
    pub fn focus(&mut self, id: NodeId) {
        self.validate_element(id);
        self.focused = id.idx;
    }

    // -- Raw-index accessors for backends --
    //
    // These accept raw slot indices (as found in `DomChanges`) rather than
    // `NodeId` handles, skipping generation validation. Only use with indices
    // that came from `DomChanges` or `NodeId::index`.

    /// Returns a handle for the live node at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn node_at(&self, idx: u32) -> NodeId {
        self.check_slot(idx);
        self.handle(idx)
    }

    /// Returns the node kind at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn kind_at(&self, idx: u32) -> NodeKind {
        self.check_slot(idx);
        self.kind[idx as usize]
    }

    /// Returns the tag name at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn tag_at(&self, idx: u32) -> &str {
        self.check_slot(idx);
        &self.tag[idx as usize]
    }

    /// Returns the attributes at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn attributes_at(&self, idx: u32) -> &[Attribute] {
        self.check_slot(idx);
        &self.attributes[idx as usize]
    }

    /// Returns the character data at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn text_at(&self, idx: u32) -> &str {
        self.check_slot(idx);
        &self.text[idx as usize]
    }

    /// Returns the children of the node at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn children_at(&self, idx: u32) -> Children<'_> {
        self.check_slot(idx);
        Children::new(self, self.first_child[idx as usize])
    }

    // -- Internal helpers --

    /// Builds a handle for a slot using its current generation.
    pub(crate) fn handle(&self, idx: u32) -> NodeId {
        NodeId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    fn allocate(&mut self, kind: NodeKind) -> NodeId {
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot. `destroy_node` already bumped the generation.
            self.parent[idx as usize] = INVALID;
            self.first_child[idx as usize] = INVALID;
            self.next_sibling[idx as usize] = INVALID;
            self.prev_sibling[idx as usize] = INVALID;
            self.kind[idx as usize] = kind;
            self.tag[idx as usize].clear();
            self.attributes[idx as usize].clear();
            self.text[idx as usize].clear();
            idx
        } else {
            let idx = self.len;
            self.len += 1;
            self.parent.push(INVALID);
            self.first_child.push(INVALID);
            self.next_sibling.push(INVALID);
            self.prev_sibling.push(INVALID);
            self.kind.push(kind);
            self.tag.push(String::new());
            self.attributes.push(Vec::new());
            self.text.push(String::new());
            self.generation.push(0);
            idx
        };

        self.pending_added.push(idx);
        self.handle(idx)
    }

    /// Panics if the handle is stale.
    fn validate(&self, id: NodeId) {
        assert!(
            id.idx < self.len && self.generation[id.idx as usize] == id.generation,
            "stale NodeId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }

    /// Panics if the handle is stale or not an element.
    fn validate_element(&self, id: NodeId) {
        self.validate(id);
        assert!(
            self.kind[id.idx as usize] == NodeKind::Element,
            "{id:?} is not an element"
        );
    }

    fn check_slot(&self, idx: u32) {
        assert!(
            idx < self.len,
            "slot index {idx} out of range (len {})",
            self.len
        );
    }

    /// Removes `idx` from its parent's child list without touching dirty state.
    fn unlink_from_parent(&mut self, idx: u32) {
        let p = self.parent[idx as usize];
        let prev = self.prev_sibling[idx as usize];
        let next = self.next_sibling[idx as usize];

        if prev != INVALID {
            self.next_sibling[prev as usize] = next;
        } else {
            // Was first child.
            self.first_child[p as usize] = next;
        }

        if next != INVALID {
            self.prev_sibling[next as usize] = prev;
        }

        self.parent[idx as usize] = INVALID;
        self.prev_sibling[idx as usize] = INVALID;
        self.next_sibling[idx as usize] = INVALID;
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn create_and_destroy() {
        let mut doc = Document::new();
        let id = doc.create_element("div");
        assert!(doc.is_alive(id));
        doc.destroy_node(id);
        assert!(!doc.is_alive(id));
    }

    #[test]
    fn generation_prevents_stale_access() {
        let mut doc = Document::new();
        let old = doc.create_element("div");
        doc.destroy_node(old);
        let new = doc.create_element("span");
        assert_eq!(old.index(), new.index(), "slot should be reused");
        assert_ne!(old.generation(), new.generation());
        assert!(!doc.is_alive(old));
        assert!(doc.is_alive(new));
    }

    #[test]
    fn tag_names_are_lower_cased() {
        let mut doc = Document::new();
        let id = doc.create_element("BUTTON");
        assert_eq!(doc.tag(id), "button");
    }

    #[test]
    fn append_child_and_query() {
        let mut doc = Document::new();
        let parent = doc.create_element("div");
        let a = doc.create_element("h3");
        let b = doc.create_text("hello");
        doc.append_child(parent, a);
        doc.append_child(parent, b);

        let kids: Vec<_> = doc.children(parent).collect();
        assert_eq!(kids, vec![a, b]);
        assert_eq!(doc.parent(b), Some(parent));
        let elements: Vec<_> = doc.element_children(parent).collect();
        assert_eq!(elements, vec![a]);
    }

    #[test]
    fn insert_before_works() {
        let mut doc = Document::new();
        let parent = doc.create_element("div");
        let a = doc.create_element("p");
        let b = doc.create_element("p");
        let c = doc.create_element("p");

        doc.append_child(parent, a);
        doc.append_child(parent, c);
        doc.insert_before(b, c);

        let kids: Vec<_> = doc.children(parent).collect();
        assert_eq!(kids, vec![a, b, c]);
    }

    #[test]
    fn insert_before_first_child() {
        let mut doc = Document::new();
        let parent = doc.create_element("div");
        let a = doc.create_element("p");
        let b = doc.create_element("p");
        doc.append_child(parent, b);
        doc.insert_before(a, b);

        let kids: Vec<_> = doc.children(parent).collect();
        assert_eq!(kids, vec![a, b]);
        assert_eq!(doc.previous_element_sibling(b), Some(a));
    }

    #[test]
    fn remove_from_parent_works() {
        let mut doc = Document::new();
        let parent = doc.create_element("div");
        let child = doc.create_element("p");
        doc.append_child(parent, child);

        doc.remove_from_parent(child);
        assert_eq!(doc.parent(child), None);
        assert!(doc.children(parent).next().is_none());
    }

    #[test]
    fn element_siblings_skip_text() {
        let mut doc = Document::new();
        let parent = doc.create_element("div");
        let h = doc.create_element("h3");
        let ws = doc.create_text("\n  ");
        let p = doc.create_element("div");
        doc.append_child(parent, h);
        doc.append_child(parent, ws);
        doc.append_child(parent, p);

        assert_eq!(doc.next_element_sibling(h), Some(p));
        assert_eq!(doc.previous_element_sibling(p), Some(h));
        assert_eq!(doc.next_element_sibling(p), None);
    }

    #[test]
    fn descendants_are_pre_order_and_bounded() {
        let mut doc = Document::new();
        let outer = doc.create_element("div");
        let root = doc.create_element("section");
        let a = doc.create_element("a");
        let a1 = doc.create_text("x");
        let b = doc.create_element("b");
        let after = doc.create_element("footer");
        doc.append_child(outer, root);
        doc.append_child(outer, after);
        doc.append_child(root, a);
        doc.append_child(a, a1);
        doc.append_child(root, b);

        let all: Vec<_> = doc.descendants(root).collect();
        assert_eq!(all, vec![a, a1, b], "must not escape into root's siblings");
        let anc: Vec<_> = doc.ancestors(a1).collect();
        assert_eq!(anc, vec![a, root, outer]);
    }

    #[test]
    fn roots_returns_parentless_nodes() {
        let mut doc = Document::new();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        let c = doc.create_element("div");
        doc.append_child(a, c);

        let roots = doc.roots();
        assert!(roots.contains(&a));
        assert!(roots.contains(&b));
        assert!(!roots.contains(&c));
    }

    #[test]
    fn attributes_set_get_remove() {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        doc.set_attribute(el, "Data-Multi", "");
        assert!(doc.has_attribute(el, "data-multi"));
        assert_eq!(doc.attributes(el)[0].name, "data-multi");

        doc.set_attribute(el, "id", "one");
        doc.set_attribute(el, "id", "two");
        assert_eq!(doc.attribute(el, "id"), Some("two"));
        assert_eq!(doc.attributes(el).len(), 2);

        assert!(doc.remove_attribute(el, "id"));
        assert!(!doc.remove_attribute(el, "id"));
        assert_eq!(doc.attribute(el, "id"), None);
    }

    #[test]
    fn class_tokens() {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        doc.set_attribute(el, "class", " intro ");
        doc.add_class(el, "accordion");
        doc.add_class(el, "accordion");
        assert_eq!(doc.attribute(el, "class"), Some("intro accordion"));
        assert!(doc.has_class(el, "intro"));
        assert!(!doc.has_class(el, "accord"));
    }

    #[test]
    fn text_content_and_replacement() {
        let mut doc = Document::new();
        let h = doc.create_element("h3");
        let t1 = doc.create_text("Ship");
        let em = doc.create_element("em");
        let t2 = doc.create_text("ping");
        doc.append_child(h, t1);
        doc.append_child(h, em);
        doc.append_child(em, t2);
        assert_eq!(doc.text_content(h), "Shipping");

        doc.set_text_content(h, "Returns");
        assert!(!doc.is_alive(t1));
        assert!(!doc.is_alive(em));
        assert!(!doc.is_alive(t2));
        assert_eq!(doc.text_content(h), "Returns");
        assert_eq!(doc.children(h).count(), 1);
    }

    #[test]
    fn destroying_focused_node_clears_focus() {
        let mut doc = Document::new();
        let b = doc.create_element("button");
        doc.focus(b);
        assert_eq!(doc.focused(), Some(b));
        doc.destroy_node(b);
        assert_eq!(doc.focused(), None);
    }

    #[test]
    #[should_panic(expected = "cannot destroy node with children")]
    fn destroy_with_children_panics() {
        let mut doc = Document::new();
        let parent = doc.create_element("div");
        let child = doc.create_element("p");
        doc.append_child(parent, child);
        doc.destroy_node(parent);
    }

    #[test]
    #[should_panic(expected = "stale NodeId")]
    fn destroyed_handle_panics_on_attribute() {
        let mut doc = Document::new();
        let id = doc.create_element("div");
        doc.destroy_node(id);
        let _ = doc.attribute(id, "id");
    }

    #[test]
    #[should_panic(expected = "stale NodeId")]
    fn destroyed_handle_panics_on_append() {
        let mut doc = Document::new();
        let root = doc.create_element("div");
        let id = doc.create_element("p");
        doc.destroy_node(id);
        doc.append_child(root, id);
    }

    #[test]
    #[should_panic(expected = "is not an element")]
    fn set_attribute_on_text_panics() {
        let mut doc = Document::new();
        let t = doc.create_text("x");
        doc.set_attribute(t, "id", "nope");
    }

    #[test]
    #[should_panic(expected = "only elements can have children")]
    fn text_cannot_have_children() {
        let mut doc = Document::new();
        let t = doc.create_text("x");
        let el = doc.create_element("b");
        doc.append_child(t, el);
    }
}
