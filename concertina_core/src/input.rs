// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events delivered to the controller.

use crate::controller::ToggleOutcome;
use crate::dom::NodeId;

/// Keys the controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `Home`.
    Home,
    /// `End`.
    End,
    /// `ArrowUp`.
    ArrowUp,
    /// `ArrowDown`.
    ArrowDown,
    /// `ArrowLeft`.
    ArrowLeft,
    /// `ArrowRight`.
    ArrowRight,
    /// Anything else.
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    ///
    /// The legacy `Up`/`Down`/`Left`/`Right` names are accepted too.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Home" => Self::Home,
            "End" => Self::End,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// A user input event targeted at a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer or keyboard activation.
    Click {
        /// The event target (a trigger or one of its descendants).
        target: NodeId,
    },
    /// A key press.
    KeyDown {
        /// The event target.
        target: NodeId,
        /// The pressed key.
        key: Key,
    },
}

impl InputEvent {
    /// Returns the event target.
    #[must_use]
    pub const fn target(&self) -> NodeId {
        match *self {
            Self::Click { target } | Self::KeyDown { target, .. } => target,
        }
    }
}

/// What handling an [`InputEvent`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// The backend should cancel the native default action.
    pub prevent_default: bool,
    /// Result of a toggle, for click events on a trigger.
    pub toggle: Option<ToggleOutcome>,
    /// Trigger that received focus, for navigation keys.
    pub focus: Option<NodeId>,
}

impl EventOutcome {
    /// The event did not concern any accordion.
    pub const IGNORED: Self = Self {
        prevent_default: false,
        toggle: None,
        focus: None,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_key_mapping() {
        assert_eq!(Key::from_dom_key("Home"), Key::Home);
        assert_eq!(Key::from_dom_key("End"), Key::End);
        assert_eq!(Key::from_dom_key("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_dom_key("Up"), Key::ArrowUp);
        assert_eq!(Key::from_dom_key("Enter"), Key::Other);
        assert_eq!(Key::from_dom_key("home"), Key::Other);
    }
}
