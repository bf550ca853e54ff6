// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change draining.
//!
//! [`Document::take_changes`] drains every dirty channel and the lifecycle
//! lists into a [`DomChanges`] value. Backends apply it in field order:
//!
//! 1. **removed**: drop the mirrored native node.
//! 2. **added**: create a native node for each new slot.
//! 3. **attributes**: for each `(slot, name)` in `attribute_names`, set the
//!    attribute to its current value or remove it if the element no longer
//!    has it. Attributes the document never touched are left alone.
//! 4. **text**: rewrite the data of each listed text or comment node.
//! 5. **topology**: re-append the children of each listed parent in order.
//!
//! [`DomChanges`] uses raw slot indices (`u32`) rather than [`NodeId`]
//! handles so that backends can index directly into their own tables and
//! read current values through the `*_at()` accessors (e.g.
//! [`attributes_at`](super::Document::attributes_at)).
//!
//! [`NodeId`]: super::NodeId

use alloc::string::String;
use alloc::vec::Vec;

use super::store::Document;
use crate::dirty;

/// The set of changes accumulated since the previous
/// [`Document::take_changes`] call.
#[derive(Clone, Debug, Default)]
pub struct DomChanges {
    /// Slots destroyed since the last drain.
    pub removed: Vec<u32>,
    /// Slots created since the last drain that are still alive.
    pub added: Vec<u32>,
    /// Elements whose attribute set changed.
    pub attributes: Vec<u32>,
    /// Attribute names written or removed, sorted by slot then name.
    pub attribute_names: Vec<(u32, String)>,
    /// Text or comment nodes whose data changed.
    pub text: Vec<u32>,
    /// Nodes whose child list changed.
    pub topology: Vec<u32>,
}

impl DomChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.removed.clear();
        self.added.clear();
        self.attributes.clear();
        self.attribute_names.clear();
        self.text.clear();
        self.topology.clear();
    }

    /// Returns whether nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
            && self.added.is_empty()
            && self.attributes.is_empty()
            && self.attribute_names.is_empty()
            && self.text.is_empty()
            && self.topology.is_empty()
    }
}

impl Document {
    /// Drains all pending changes.
    pub fn take_changes(&mut self) -> DomChanges {
        let mut changes = DomChanges::default();
        self.take_changes_into(&mut changes);
        changes
    }

    /// Like [`take_changes`](Self::take_changes), but reuses a
    /// caller-provided buffer to avoid allocation.
    pub fn take_changes_into(&mut self, changes: &mut DomChanges) {
        changes.clear();

        changes.removed.append(&mut self.pending_removed);
        changes.removed.sort_unstable();
        changes.removed.dedup();

        // A slot can be created and destroyed within one batch; only slots
        // that are still live need a native node.
        changes.added.append(&mut self.pending_added);
        changes.added.sort_unstable();
        changes.added.dedup();
        changes.added.retain(|idx| !self.free_list.contains(idx));

        changes
            .attribute_names
            .append(&mut self.pending_attributes);
        changes.attribute_names.sort_unstable();
        changes.attribute_names.dedup();

        changes.attributes.extend(
            self.dirty
                .drain(dirty::ATTRIBUTES)
                .affected()
                .deterministic()
                .run(),
        );
        changes
            .text
            .extend(self.dirty.drain(dirty::TEXT).affected().deterministic().run());
        changes.topology.extend(
            self.dirty
                .drain(dirty::TOPOLOGY)
                .affected()
                .deterministic()
                .run(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_is_reported_once() {
        let mut doc = Document::new();
        let root = doc.create_element("div");
        let t = doc.create_text("a");
        doc.append_child(root, t);

        let changes = doc.take_changes();
        assert_eq!(changes.added, [root.index(), t.index()]);
        assert!(changes.text.contains(&t.index()), "new text is dirty");
        assert!(changes.topology.contains(&root.index()), "parent is dirty");

        assert!(doc.take_changes().is_empty(), "second drain is empty");
    }

    #[test]
    fn attribute_change_marks_element() {
        let mut doc = Document::new();
        let el = doc.create_element("button");
        let _ = doc.take_changes();

        doc.set_attribute(el, "aria-expanded", "false");
        let changes = doc.take_changes();
        assert!(changes.attributes.contains(&el.index()));
        assert!(changes.added.is_empty());
    }

    #[test]
    fn attribute_names_cover_only_touched_attributes() {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        doc.set_attribute(el, "class", "panel");
        doc.set_attribute(el, "aria-hidden", "true");
        doc.set_attribute(el, "aria-disabled", "true");
        let _ = doc.take_changes();

        doc.set_attribute(el, "ARIA-HIDDEN", "false");
        doc.set_attribute(el, "aria-hidden", "true");
        doc.remove_attribute(el, "aria-disabled");
        doc.remove_attribute(el, "data-missing");
        let changes = doc.take_changes();
        assert_eq!(
            changes.attribute_names,
            [
                (el.index(), String::from("aria-disabled")),
                (el.index(), String::from("aria-hidden")),
            ]
        );
    }

    #[test]
    fn unchanged_attribute_is_not_reported() {
        let mut doc = Document::new();
        let el = doc.create_element("button");
        doc.set_attribute(el, "aria-expanded", "false");
        let _ = doc.take_changes();

        doc.set_attribute(el, "aria-expanded", "false");
        assert!(doc.take_changes().is_empty());
    }

    #[test]
    fn short_lived_node_is_not_added() {
        let mut doc = Document::new();
        let root = doc.create_element("div");
        let _ = doc.take_changes();

        let tmp = doc.create_element("span");
        doc.append_child(root, tmp);
        doc.destroy_node(tmp);

        let changes = doc.take_changes();
        assert!(changes.added.is_empty(), "dead slot must not be created");
        assert_eq!(changes.removed, [tmp.index()]);
        assert!(changes.topology.contains(&root.index()));
    }

    #[test]
    fn destroyed_node_drops_pending_marks() {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        let _ = doc.take_changes();

        doc.set_attribute(el, "id", "x");
        doc.destroy_node(el);
        let changes = doc.take_changes();
        assert!(!changes.attributes.contains(&el.index()));
        assert!(changes.attribute_names.is_empty());
        assert_eq!(changes.removed, [el.index()]);
    }
}
