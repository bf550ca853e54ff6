// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Setup errors.

use core::fmt;

use crate::dom::NodeId;

/// Why a container could not be turned into an accordion.
///
/// The container is left untouched and the remaining accordions are still
/// set up; see [`InitReport`](crate::controller::InitReport).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// The container has no panel children.
    NoPanels,
    /// A heading is not directly followed by a panel.
    HeadingWithoutPanel {
        /// The offending heading.
        heading: NodeId,
    },
    /// A heading holds more than one trigger button, so it is unclear
    /// which one controls the panel.
    MultipleTriggers {
        /// The offending heading.
        heading: NodeId,
        /// Number of trigger buttons found.
        count: usize,
    },
    /// The container was already set up by this controller.
    AlreadyInitialized,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPanels => f.write_str("accordion has no panels"),
            Self::HeadingWithoutPanel { heading } => {
                write!(f, "heading {heading:?} is not followed by a panel")
            }
            Self::MultipleTriggers { heading, count } => {
                write!(f, "heading {heading:?} holds {count} trigger buttons")
            }
            Self::AlreadyInitialized => f.write_str("accordion is already initialized"),
        }
    }
}

impl core::error::Error for SetupError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(SetupError::NoPanels.to_string(), "accordion has no panels");
        assert_eq!(
            SetupError::AlreadyInitialized.to_string(),
            "accordion is already initialized"
        );
    }
}
