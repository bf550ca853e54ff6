// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discovery, validation, and setup of accordion containers.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::iter;

use super::{AccordionController, InitReport, SkippedAccordion, write_state};
use crate::accordion::{Accordion, AccordionId, Section};
use crate::dom::{Document, NodeId};
use crate::error::SetupError;
use crate::ids::IdGenerator;
use crate::markup::{self, AccordionOptions};
use crate::trace::{AccordionReadyEvent, AccordionSkippedEvent, Tracer};

/// State a section starts in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct InitialState {
    expanded: bool,
    current: bool,
}

/// A validated heading/panel pair, before anything was written.
#[derive(Clone, Copy, Debug)]
struct PlannedSection {
    heading: Option<NodeId>,
    panel: NodeId,
    /// An existing trigger button inside the heading.
    trigger: Option<NodeId>,
}

impl AccordionController {
    /// Sets up every accordion container at or below `root`.
    ///
    /// Containers are visited in document order. Each one is validated before
    /// anything is written; a malformed container is left untouched, reported
    /// in [`InitReport::skipped`], and does not stop the others. Containers
    /// that already carry an `id` keep it; the rest get one from `ids`.
    pub fn initialize(
        &mut self,
        doc: &mut Document,
        root: NodeId,
        ids: &mut dyn IdGenerator,
        tracer: &mut Tracer<'_>,
    ) -> InitReport {
        let containers: Vec<NodeId> = iter::once(root)
            .chain(doc.descendants(root))
            .filter(|&n| doc.is_element(n) && doc.has_attribute(n, markup::ACCORDION))
            .collect();

        let mut report = InitReport::default();
        for container in containers {
            match self.plan(doc, container) {
                Ok(plan) => {
                    let id = self.build(doc, container, &plan, ids, tracer);
                    report.ready.push(id);
                }
                Err(error) => {
                    tracer.accordion_skipped(&AccordionSkippedEvent { container, error });
                    report.skipped.push(SkippedAccordion { container, error });
                }
            }
        }
        report
    }

    /// Validates a container and pairs its headings with panels.
    ///
    /// Does not mutate anything.
    fn plan(
        &self,
        doc: &Document,
        container: NodeId,
    ) -> Result<Vec<PlannedSection>, SetupError> {
        if self.containers.contains_key(&container) {
            return Err(SetupError::AlreadyInitialized);
        }

        let mut sections = Vec::new();
        for item in scope(doc, container) {
            if doc.has_attribute(item, markup::HEADING) {
                let followed_by_panel = doc
                    .next_element_sibling(item)
                    .is_some_and(|next| doc.has_attribute(next, markup::PANEL));
                if !followed_by_panel {
                    return Err(SetupError::HeadingWithoutPanel { heading: item });
                }
            } else if doc.has_attribute(item, markup::PANEL) {
                let heading = doc
                    .previous_element_sibling(item)
                    .filter(|&prev| doc.has_attribute(prev, markup::HEADING));
                let trigger = match heading {
                    Some(h) => existing_trigger(doc, h)?,
                    None => None,
                };
                sections.push(PlannedSection {
                    heading,
                    panel: item,
                    trigger,
                });
            }
        }

        if sections.is_empty() {
            return Err(SetupError::NoPanels);
        }
        Ok(sections)
    }

    /// Writes ids, classes, triggers and ARIA state for a validated container.
    fn build(
        &mut self,
        doc: &mut Document,
        container: NodeId,
        plan: &[PlannedSection],
        ids: &mut dyn IdGenerator,
        tracer: &mut Tracer<'_>,
    ) -> AccordionId {
        let id = AccordionId(u32::try_from(self.accordions.len()).unwrap_or(u32::MAX));
        let options = AccordionOptions::from_container(doc, container);

        let element_id = match non_empty(doc.attribute(container, "id")) {
            Some(existing) => String::from(existing),
            None => {
                let fresh = ids.accordion_id();
                doc.set_attribute(container, "id", &fresh);
                fresh
            }
        };
        doc.add_class(container, markup::ACCORDION_CLASS);

        let panels: Vec<NodeId> = plan.iter().map(|p| p.panel).collect();
        let initial = initial_state(doc, &options, &panels);

        let mut sections = Vec::with_capacity(plan.len());
        let mut generated_triggers = 0;
        for (i, planned) in plan.iter().enumerate() {
            let panel = planned.panel;
            let panel_id = match non_empty(doc.attribute(panel, "id")) {
                Some(existing) => String::from(existing),
                None => {
                    let fresh = format!("{element_id}_panel_{}", i + 1);
                    doc.set_attribute(panel, "id", &fresh);
                    fresh
                }
            };
            doc.add_class(panel, markup::PANEL_CLASS);
            if options.transition {
                doc.add_class(panel, markup::PANEL_TRANSITION_CLASS);
            }

            let trigger = match planned.trigger {
                Some(existing) => existing,
                None => {
                    generated_triggers += 1;
                    let label = self.label(doc, planned, i);
                    generate_trigger(doc, planned, &label)
                }
            };
            if let Some(heading) = planned.heading {
                doc.add_class(heading, markup::HEADING_CLASS);
            }

            let trigger_id = match non_empty(doc.attribute(trigger, "id")) {
                Some(existing) => String::from(existing),
                None => {
                    let fresh = format!("{panel_id}_trigger");
                    doc.set_attribute(trigger, "id", &fresh);
                    fresh
                }
            };
            doc.set_attribute(trigger, "type", "button");
            doc.add_class(trigger, markup::TRIGGER_CLASS);
            doc.set_attribute(trigger, "aria-controls", &panel_id);
            doc.set_attribute(panel, "aria-labelledby", &trigger_id);

            let InitialState { expanded, current } = initial[i];
            let section = Section {
                accordion: id,
                heading: planned.heading,
                trigger,
                panel,
                expanded,
                disabled: expanded && options.constant_open,
                current,
            };
            write_state(doc, &section);
            sections.push(section);
        }

        let accordion = Accordion {
            id,
            container,
            element_id,
            options,
            sections,
        };
        tracer.accordion_ready(&AccordionReadyEvent {
            accordion: id,
            element_id: &accordion.element_id,
            sections: accordion.sections.len(),
            expanded: accordion.expanded_count(),
            generated_triggers,
        });
        self.register(accordion)
    }

    /// Chooses the label of a generated trigger: the heading text, then the
    /// panel's `data-label` (or `data-tab-label`), then a positional fallback.
    fn label(&self, doc: &Document, planned: &PlannedSection, index: usize) -> String {
        if let Some(heading) = planned.heading {
            let text = doc.text_content(heading);
            let text = text.trim();
            if !text.is_empty() {
                return String::from(text);
            }
        }
        let label = [markup::PANEL_LABEL, markup::PANEL_TAB_LABEL]
            .into_iter()
            .find_map(|name| non_empty(doc.attribute(planned.panel, name)));
        if let Some(label) = label {
            return String::from(label.trim());
        }
        format!("{} {}", self.config.fallback_label, index + 1)
    }
}

/// Returns the elements a container's headings and panels are looked up in.
///
/// Normally these are the container's element children. When the container
/// is a list, the children of each `li` item are used instead.
fn scope(doc: &Document, container: NodeId) -> Vec<NodeId> {
    let items: Vec<NodeId> = doc
        .element_children(container)
        .filter(|&c| doc.tag(c) == "li")
        .collect();
    if items.is_empty() {
        doc.element_children(container).collect()
    } else {
        items
            .into_iter()
            .flat_map(|li| doc.element_children(li))
            .collect()
    }
}

/// Finds a trigger button already placed inside `heading`.
fn existing_trigger(doc: &Document, heading: NodeId) -> Result<Option<NodeId>, SetupError> {
    let found: Vec<NodeId> = doc
        .descendants(heading)
        .filter(|&d| {
            doc.is_element(d) && doc.tag(d) == "button" && doc.has_class(d, markup::TRIGGER_CLASS)
        })
        .collect();
    match found.as_slice() {
        [] => Ok(None),
        [one] => Ok(Some(*one)),
        many => Err(SetupError::MultipleTriggers {
            heading,
            count: many.len(),
        }),
    }
}

/// Creates a trigger button for a section that has none.
///
/// The button replaces the heading's content, or is placed right before the
/// panel when there is no heading.
fn generate_trigger(doc: &mut Document, planned: &PlannedSection, label: &str) -> NodeId {
    let button = doc.create_element("button");
    doc.set_text_content(button, label);
    match planned.heading {
        Some(heading) => {
            doc.clear_children(heading);
            doc.append_child(heading, button);
        }
        None => doc.insert_before(button, planned.panel),
    }
    button
}

/// Decides which panels start expanded, in order of precedence: the
/// container's default index, constant-open, show-all, then panels marked
/// open by default.
///
/// Show-all opens every panel but only marks the first trigger current.
fn initial_state(
    doc: &Document,
    options: &AccordionOptions,
    panels: &[NodeId],
) -> Vec<InitialState> {
    let mut expanded = alloc::vec![false; panels.len()];
    if let Some(i) = options.default_open.resolve(panels.len()) {
        expanded[i] = true;
    } else if options.constant_open {
        expanded[0] = true;
    } else if options.show_all {
        return (0..panels.len())
            .map(|i| InitialState {
                expanded: true,
                current: i == 0,
            })
            .collect();
    } else {
        let marked = panels
            .iter()
            .enumerate()
            .filter(|&(_, &p)| {
                markup::flag(
                    doc,
                    p,
                    &[markup::PANEL_DEFAULT_OPEN, markup::PANEL_SHOW_BY_DEFAULT],
                )
            })
            .map(|(i, _)| i);
        let limit = if options.exclusive() { 1 } else { usize::MAX };
        for i in marked.take(limit) {
            expanded[i] = true;
        }
    }
    expanded
        .into_iter()
        .map(|open| InitialState {
            expanded: open,
            current: open,
        })
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
