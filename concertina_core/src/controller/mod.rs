// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The accordion controller.
//!
//! [`AccordionController`] owns the accordion records and a trigger index; the
//! caller owns the [`Document`]. Work happens in three entry points:
//!
//! 1. [`initialize`](AccordionController::initialize): discovers
//!    containers below a root, validates each one, generates trigger buttons
//!    and ARIA attributes, and applies the default-open policy.
//! 2. [`toggle`](AccordionController::toggle): opens or closes one section,
//!    keeping the single-open and constant-open invariants.
//! 3. [`handle`](AccordionController::handle): routes click and keydown
//!    events to toggling and keyboard navigation.
//!
//! Every state change is written through to the document immediately, so a
//! backend only has to drain [`Document::take_changes`] afterwards.

mod keyboard;
mod setup;
mod toggle;

use alloc::vec::Vec;
use core::iter;

use hashbrown::HashMap;

use crate::accordion::{Accordion, AccordionId, Section, SectionRef};
use crate::dom::{Document, NodeId};
use crate::error::SetupError;
use crate::input::{EventOutcome, InputEvent};
use crate::markup::{self, ControllerConfig};
use crate::trace::Tracer;

/// What a toggle did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToggleOutcome {
    /// The section was opened.
    Expanded,
    /// The section was closed.
    Collapsed,
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// Why a toggle was ignored.
///
/// The open section of a constant-open accordion is disabled, so clicking it
/// reports [`Disabled`](Self::Disabled) too.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// The trigger is `aria-disabled`.
    Disabled,
}

/// A container that was not set up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkippedAccordion {
    /// The container element.
    pub container: NodeId,
    /// Why it was skipped.
    pub error: SetupError,
}

/// Result of [`AccordionController::initialize`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InitReport {
    /// Accordions that were set up, in document order.
    pub ready: Vec<AccordionId>,
    /// Containers that were left untouched.
    pub skipped: Vec<SkippedAccordion>,
}

/// Discovers accordions in a [`Document`] and keeps their state.
#[derive(Debug, Default)]
pub struct AccordionController {
    config: ControllerConfig,
    accordions: Vec<Accordion>,
    triggers: HashMap<NodeId, SectionRef>,
    containers: HashMap<NodeId, AccordionId>,
}

impl AccordionController {
    /// Creates a controller with the given configuration.
    #[must_use]
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            accordions: Vec::new(),
            triggers: HashMap::new(),
            containers: HashMap::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Returns all set-up accordions.
    #[must_use]
    pub fn accordions(&self) -> &[Accordion] {
        &self.accordions
    }

    /// Returns one accordion.
    #[must_use]
    pub fn accordion(&self, id: AccordionId) -> Option<&Accordion> {
        self.accordions.get(id.0 as usize)
    }

    /// Returns the accordion set up on `container`, if any.
    #[must_use]
    pub fn accordion_for_container(&self, container: NodeId) -> Option<&Accordion> {
        let id = self.containers.get(&container)?;
        self.accordion(*id)
    }

    /// Returns the section a trigger belongs to.
    #[must_use]
    pub fn section_ref(&self, trigger: NodeId) -> Option<SectionRef> {
        self.triggers.get(&trigger).copied()
    }

    /// Returns a section.
    #[must_use]
    pub fn section(&self, r: SectionRef) -> Option<&Section> {
        self.accordion(r.accordion)?.sections.get(r.index)
    }

    /// Returns every registered trigger.
    pub fn triggers(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.accordions.iter().flat_map(Accordion::triggers)
    }

    /// Resolves an event target to the section of the nearest enclosing
    /// trigger (the target itself included).
    #[must_use]
    pub fn resolve_target(&self, doc: &Document, target: NodeId) -> Option<SectionRef> {
        iter::once(target)
            .chain(doc.ancestors(target))
            .find_map(|node| self.section_ref(node))
    }

    /// Handles a user input event.
    ///
    /// Clicks on a trigger (or inside one) toggle its section. Navigation
    /// keys on a trigger move focus within the same accordion. Events that do
    /// not concern an accordion return [`EventOutcome::IGNORED`].
    pub fn handle(
        &mut self,
        doc: &mut Document,
        event: &InputEvent,
        tracer: &mut Tracer<'_>,
    ) -> EventOutcome {
        let Some(r) = self.resolve_target(doc, event.target()) else {
            return EventOutcome::IGNORED;
        };
        match *event {
            InputEvent::Click { .. } => EventOutcome {
                prevent_default: true,
                toggle: Some(self.toggle_section(doc, r, tracer)),
                focus: None,
            },
            InputEvent::KeyDown { key, .. } => self.navigate(doc, r, key, tracer),
        }
    }

    fn register(&mut self, accordion: Accordion) -> AccordionId {
        let id = accordion.id;
        for (index, section) in accordion.sections.iter().enumerate() {
            self.triggers.insert(
                section.trigger,
                SectionRef {
                    accordion: id,
                    index,
                },
            );
        }
        self.containers.insert(accordion.container, id);
        self.accordions.push(accordion);
        id
    }
}

/// Writes a section's state through to its trigger and panel attributes.
fn write_state(doc: &mut Document, section: &Section) {
    let trigger = section.trigger;
    doc.set_attribute(trigger, "aria-expanded", markup::bool_attr(section.expanded));
    doc.set_attribute(trigger, markup::CURRENT, markup::bool_attr(section.current));
    if section.disabled {
        doc.set_attribute(trigger, "aria-disabled", "true");
    } else {
        doc.remove_attribute(trigger, "aria-disabled");
    }
    doc.set_attribute(
        section.panel,
        "aria-hidden",
        markup::bool_attr(!section.expanded),
    );
}
