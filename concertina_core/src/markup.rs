// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The markup contract.
//!
//! Authors flag a container with [`ACCORDION`] and mark its direct children
//! (or the children of its `li` items) with [`HEADING`] and [`PANEL`]. A
//! heading is followed by the panel it labels:
//!
//! ```html
//! <div data-aria-accordion data-default="2">
//!   <h3 data-aria-accordion-heading>Shipping</h3>
//!   <div data-aria-accordion-panel>…</div>
//!   <h3 data-aria-accordion-heading>Returns</h3>
//!   <div data-aria-accordion-panel>…</div>
//! </div>
//! ```
//!
//! Container options are boolean-ish attributes read by
//! [`AccordionOptions::from_container`]: a flag is on when present with any
//! value other than `"false"`. The older markup names (`data-multi-open`,
//! `data-showbydefault`, `data-tab-label`) are accepted next to the current
//! ones. Everything the controller writes
//! back (classes, ARIA state) is listed here too, since stylesheets and
//! assistive technology consume it as the public surface.

use alloc::string::String;

use crate::dom::{Document, NodeId};

/// Marks an accordion container.
pub const ACCORDION: &str = "data-aria-accordion";
/// Marks a heading that labels the following panel.
pub const HEADING: &str = "data-aria-accordion-heading";
/// Marks a content panel.
pub const PANEL: &str = "data-aria-accordion-panel";

/// Container option: several panels may be open at once.
pub const MULTI: &str = "data-multi";
/// Older spelling of [`MULTI`].
pub const MULTI_OPEN: &str = "data-multi-open";
/// Container option: exactly one panel is always open.
pub const CONSTANT: &str = "data-constant";
/// Container option: 1-based index of the panel open on load.
pub const DEFAULT: &str = "data-default";
/// Container option: panels animate, so they get [`PANEL_TRANSITION_CLASS`].
pub const TRANSITION: &str = "data-transition";
/// Container option: arrow keys cycle focus between triggers.
pub const ARROW_KEYS: &str = "data-up-down";
/// Container option: every panel is open on load.
pub const SHOW_ALL: &str = "data-showall";

/// Panel option: open on load.
pub const PANEL_DEFAULT_OPEN: &str = "data-default-open";
/// Older spelling of [`PANEL_DEFAULT_OPEN`].
pub const PANEL_SHOW_BY_DEFAULT: &str = "data-showbydefault";
/// Panel option: trigger label used when no heading precedes the panel.
pub const PANEL_LABEL: &str = "data-label";
/// Older spelling of [`PANEL_LABEL`].
pub const PANEL_TAB_LABEL: &str = "data-tab-label";

/// Class added to every initialized container.
pub const ACCORDION_CLASS: &str = "accordion";
/// Class added to headings.
pub const HEADING_CLASS: &str = "accordion__heading";
/// Class carried by trigger buttons.
pub const TRIGGER_CLASS: &str = "accordion__trigger";
/// Class added to panels.
pub const PANEL_CLASS: &str = "accordion__panel";
/// Class added to panels of a [`TRANSITION`] container.
pub const PANEL_TRANSITION_CLASS: &str = "accordion__panel--transition";

/// Trigger attribute recording the most recently toggled trigger.
pub const CURRENT: &str = "data-current";

/// Which panel opens when the accordion is set up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaultOpen {
    /// No index was given.
    Unset,
    /// A 1-based index as written; it is clamped to the panel range when
    /// applied, so `0` and negative values mean "first".
    Index(i64),
}

impl DefaultOpen {
    /// Parses a `data-default` value.
    ///
    /// `none`, empty, and non-numeric values are [`Unset`](Self::Unset).
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<i64>() {
            Ok(n) => Self::Index(n),
            Err(_) => Self::Unset,
        }
    }

    /// Resolves to a 0-based panel index for an accordion of `count` panels.
    #[must_use]
    pub fn resolve(self, count: usize) -> Option<usize> {
        match self {
            Self::Unset => None,
            _ if count == 0 => None,
            Self::Index(n) if n <= 1 => Some(0),
            Self::Index(n) => {
                let zero_based = usize::try_from(n - 1).unwrap_or(usize::MAX);
                Some(zero_based.min(count - 1))
            }
        }
    }
}

/// Per-accordion options read from container attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccordionOptions {
    /// Several panels may be open at once ([`MULTI`] or [`MULTI_OPEN`]).
    pub multi_open: bool,
    /// Exactly one panel is always open ([`CONSTANT`]). Takes precedence over
    /// [`multi_open`](Self::multi_open).
    pub constant_open: bool,
    /// Panel opened on load ([`DEFAULT`]).
    pub default_open: DefaultOpen,
    /// Panels get the transition class ([`TRANSITION`]).
    pub transition: bool,
    /// Arrow keys cycle focus ([`ARROW_KEYS`]).
    pub arrow_keys: bool,
    /// Every panel starts open ([`SHOW_ALL`]). Ignored when a default index
    /// or [`constant_open`](Self::constant_open) is set.
    pub show_all: bool,
}

impl Default for AccordionOptions {
    fn default() -> Self {
        Self {
            multi_open: false,
            constant_open: false,
            default_open: DefaultOpen::Unset,
            transition: false,
            arrow_keys: false,
            show_all: false,
        }
    }
}

impl AccordionOptions {
    /// Reads the options from a container element.
    #[must_use]
    pub fn from_container(doc: &Document, container: NodeId) -> Self {
        Self {
            multi_open: flag(doc, container, &[MULTI, MULTI_OPEN]),
            constant_open: flag(doc, container, &[CONSTANT]),
            default_open: doc
                .attribute(container, DEFAULT)
                .map_or(DefaultOpen::Unset, DefaultOpen::parse),
            transition: flag(doc, container, &[TRANSITION]),
            arrow_keys: flag(doc, container, &[ARROW_KEYS]),
            show_all: flag(doc, container, &[SHOW_ALL]),
        }
    }

    /// Whether opening one panel closes the others.
    #[must_use]
    pub const fn exclusive(&self) -> bool {
        self.constant_open || !self.multi_open
    }
}

/// Settings shared by every accordion a controller sets up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Prefix of the positional fallback trigger label (`"Section 3"`).
    pub fallback_label: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            fallback_label: String::from("Section"),
        }
    }
}

/// Reads a boolean-ish option that may be spelled several ways.
#[must_use]
pub fn flag(doc: &Document, node: NodeId, names: &[&str]) -> bool {
    names.iter().any(|name| {
        doc.attribute(node, name)
            .is_some_and(|v| !v.trim().eq_ignore_ascii_case("false"))
    })
}

/// Renders an ARIA boolean.
#[must_use]
pub const fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_open_parsing() {
        assert_eq!(DefaultOpen::parse("2"), DefaultOpen::Index(2));
        assert_eq!(DefaultOpen::parse(" 3 "), DefaultOpen::Index(3));
        assert_eq!(DefaultOpen::parse("-1"), DefaultOpen::Index(-1));
        assert_eq!(DefaultOpen::parse("none"), DefaultOpen::Unset);
        assert_eq!(DefaultOpen::parse(""), DefaultOpen::Unset);
        assert_eq!(DefaultOpen::parse("two"), DefaultOpen::Unset);
    }

    #[test]
    fn default_open_is_clamped() {
        assert_eq!(DefaultOpen::Index(-4).resolve(3), Some(0));
        assert_eq!(DefaultOpen::Index(0).resolve(3), Some(0));
        assert_eq!(DefaultOpen::Index(1).resolve(3), Some(0));
        assert_eq!(DefaultOpen::Index(2).resolve(3), Some(1));
        assert_eq!(DefaultOpen::Index(3).resolve(3), Some(2));
        assert_eq!(DefaultOpen::Index(99).resolve(3), Some(2));
        assert_eq!(DefaultOpen::Index(i64::MAX).resolve(3), Some(2));
        assert_eq!(DefaultOpen::Index(2).resolve(0), None);
        assert_eq!(DefaultOpen::Unset.resolve(3), None);
    }

    #[test]
    fn options_from_container() {
        let mut doc = Document::new();
        let c = doc.create_element("div");
        assert_eq!(
            AccordionOptions::from_container(&doc, c),
            AccordionOptions::default()
        );

        doc.set_attribute(c, MULTI, "");
        doc.set_attribute(c, DEFAULT, "2");
        doc.set_attribute(c, ARROW_KEYS, "");
        let opts = AccordionOptions::from_container(&doc, c);
        assert!(opts.multi_open);
        assert!(!opts.constant_open);
        assert!(opts.arrow_keys);
        assert_eq!(opts.default_open, DefaultOpen::Index(2));
        assert!(!opts.exclusive());

        doc.set_attribute(c, CONSTANT, "");
        let opts = AccordionOptions::from_container(&doc, c);
        assert!(opts.exclusive(), "constant wins over multi");
    }

    #[test]
    fn older_option_names() {
        let mut doc = Document::new();
        let c = doc.create_element("div");
        doc.set_attribute(c, MULTI_OPEN, "true");
        doc.set_attribute(c, SHOW_ALL, "true");
        let opts = AccordionOptions::from_container(&doc, c);
        assert!(opts.multi_open);
        assert!(opts.show_all);
    }

    #[test]
    fn false_turns_a_flag_off() {
        let mut doc = Document::new();
        let c = doc.create_element("div");
        doc.set_attribute(c, SHOW_ALL, "false");
        doc.set_attribute(c, MULTI_OPEN, "False");
        doc.set_attribute(c, TRANSITION, "");
        let opts = AccordionOptions::from_container(&doc, c);
        assert!(!opts.show_all);
        assert!(!opts.multi_open);
        assert!(opts.transition);
    }
}
