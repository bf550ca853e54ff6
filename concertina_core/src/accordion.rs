// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accordion and section records.
//!
//! An [`Accordion`] owns the handles of its container and of each
//! [`Section`] (heading, trigger, panel). Every section points back at its
//! accordion, so an event on a trigger resolves its owner without looking at
//! ids or re-querying the document.
//!
//! Section state (`expanded`, `disabled`, `current`) is the source of truth;
//! the controller writes it through to the ARIA attributes after every
//! change.

use alloc::string::String;
use alloc::vec::Vec;

use crate::dom::NodeId;
use crate::markup::AccordionOptions;

/// Index of an accordion within its [`AccordionController`].
///
/// [`AccordionController`]: crate::controller::AccordionController
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccordionId(pub u32);

/// Addresses one section of one accordion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SectionRef {
    /// Owning accordion.
    pub accordion: AccordionId,
    /// Position of the section within the accordion.
    pub index: usize,
}

/// A heading/trigger/panel triple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Owning accordion.
    pub accordion: AccordionId,
    /// The heading wrapping the trigger, if the markup had one.
    pub heading: Option<NodeId>,
    /// The trigger button.
    pub trigger: NodeId,
    /// The panel the trigger controls.
    pub panel: NodeId,
    /// The panel is shown.
    pub expanded: bool,
    /// The trigger cannot be activated (`aria-disabled`).
    pub disabled: bool,
    /// The trigger was toggled most recently.
    pub current: bool,
}

/// A set-up accordion instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accordion {
    /// This accordion's id within the controller.
    pub id: AccordionId,
    /// The container element.
    pub container: NodeId,
    /// The container's `id` attribute.
    pub element_id: String,
    /// Options read from the container.
    pub options: AccordionOptions,
    /// Sections in document order.
    pub sections: Vec<Section>,
}

impl Accordion {
    /// Returns the number of expanded sections.
    #[must_use]
    pub fn expanded_count(&self) -> usize {
        self.sections.iter().filter(|s| s.expanded).count()
    }

    /// Returns the triggers in document order.
    pub fn triggers(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.sections.iter().map(|s| s.trigger)
    }

    /// Returns the index of the section whose trigger is `trigger`.
    #[must_use]
    pub fn position_of(&self, trigger: NodeId) -> Option<usize> {
        self.sections.iter().position(|s| s.trigger == trigger)
    }
}
