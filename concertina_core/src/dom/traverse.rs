// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree traversal utilities.

use super::id::{INVALID, NodeId};
use super::store::Document;

/// An iterator over the direct children of a node.
///
/// Created by [`Document::children`].
#[derive(Debug)]
pub struct Children<'a> {
    doc: &'a Document,
    current: u32,
}

impl<'a> Children<'a> {
    pub(crate) fn new(doc: &'a Document, first: u32) -> Self {
        Self {
            doc,
            current: first,
        }
    }
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.current == INVALID {
            return None;
        }
        let idx = self.current;
        self.current = self.doc.next_sibling[idx as usize];
        Some(self.doc.handle(idx))
    }
}

/// A pre-order iterator over the descendants of a node, excluding the node
/// itself.
///
/// Created by [`Document::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    doc: &'a Document,
    root: u32,
    current: u32,
}

impl<'a> Descendants<'a> {
    pub(crate) fn new(doc: &'a Document, root: u32) -> Self {
        Self {
            doc,
            root,
            current: doc.first_child[root as usize],
        }
    }
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.current == INVALID {
            return None;
        }
        let idx = self.current;

        // Advance: first child, else next sibling, else the next sibling of
        // the nearest ancestor below `root` that has one.
        let first = self.doc.first_child[idx as usize];
        self.current = if first != INVALID {
            first
        } else {
            let mut node = idx;
            loop {
                if node == self.root {
                    break INVALID;
                }
                let next = self.doc.next_sibling[node as usize];
                if next != INVALID {
                    break next;
                }
                node = self.doc.parent[node as usize];
                if node == INVALID {
                    break INVALID;
                }
            }
        };

        Some(self.doc.handle(idx))
    }
}

/// An iterator over the ancestors of a node, nearest first, excluding the
/// node itself.
///
/// Created by [`Document::ancestors`].
#[derive(Debug)]
pub struct Ancestors<'a> {
    doc: &'a Document,
    current: u32,
}

impl<'a> Ancestors<'a> {
    pub(crate) fn new(doc: &'a Document, start: u32) -> Self {
        Self {
            doc,
            current: doc.parent[start as usize],
        }
    }
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.current == INVALID {
            return None;
        }
        let idx = self.current;
        self.current = self.doc.parent[idx as usize];
        Some(self.doc.handle(idx))
    }
}
