// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for accordion setup and interaction.
//!
//! The [`AccordionController`](crate::controller::AccordionController) reports
//! setup results, toggles and focus moves to a [`TraceSink`]. Every sink
//! method has an empty default body.
//!
//! Calls go through [`Tracer`], which holds the sink only when the `trace`
//! feature is enabled. Without the feature the calls vanish at compile time.

use crate::accordion::AccordionId;
use crate::controller::ToggleOutcome;
use crate::dom::NodeId;
use crate::error::SetupError;
use crate::input::Key;

/// Emitted when a container has been turned into an accordion.
#[derive(Clone, Copy, Debug)]
pub struct AccordionReadyEvent<'a> {
    /// Controller-local accordion id.
    pub accordion: AccordionId,
    /// The container's `id` attribute.
    pub element_id: &'a str,
    /// Number of sections.
    pub sections: usize,
    /// Number of sections expanded on load.
    pub expanded: usize,
    /// Number of trigger buttons that had to be generated.
    pub generated_triggers: usize,
}

/// Emitted when a container is skipped because its markup is malformed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccordionSkippedEvent {
    /// The skipped container.
    pub container: NodeId,
    /// Why it was skipped.
    pub error: SetupError,
}

/// Emitted after a trigger was activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleEvent {
    /// Owning accordion.
    pub accordion: AccordionId,
    /// Section position within the accordion.
    pub section: usize,
    /// What the toggle did.
    pub outcome: ToggleOutcome,
    /// Expanded sections after the toggle.
    pub expanded_count: usize,
}

/// Emitted when a navigation key moved focus between triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusMoveEvent {
    /// Owning accordion.
    pub accordion: AccordionId,
    /// The key that moved focus.
    pub key: Key,
    /// Section position focus moved from.
    pub from: usize,
    /// Section position focus moved to.
    pub to: usize,
}

/// Receives trace events from the controller.
///
/// Override only the events you need.
pub trait TraceSink {
    /// Called when an accordion finished setting up.
    fn on_accordion_ready(&mut self, e: &AccordionReadyEvent<'_>) {
        _ = e;
    }

    /// Called when a container was skipped.
    fn on_accordion_skipped(&mut self, e: &AccordionSkippedEvent) {
        _ = e;
    }

    /// Called after a toggle.
    fn on_toggle(&mut self, e: &ToggleEvent) {
        _ = e;
    }

    /// Called after keyboard navigation moved focus.
    fn on_focus_move(&mut self, e: &FocusMoveEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

/// Forwards controller events to a [`TraceSink`] if one is attached.
///
/// Holds nothing unless the `trace` feature is on.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    #[inline]
    fn emit(&mut self, f: impl FnOnce(&mut dyn TraceSink)) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            f(&mut **sink);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = f;
        }
    }

    /// Emits an [`AccordionReadyEvent`].
    #[inline]
    pub fn accordion_ready(&mut self, e: &AccordionReadyEvent<'_>) {
        self.emit(|s| s.on_accordion_ready(e));
    }

    /// Emits an [`AccordionSkippedEvent`].
    #[inline]
    pub fn accordion_skipped(&mut self, e: &AccordionSkippedEvent) {
        self.emit(|s| s.on_accordion_skipped(e));
    }

    /// Emits a [`ToggleEvent`].
    #[inline]
    pub fn toggle(&mut self, e: &ToggleEvent) {
        self.emit(|s| s.on_toggle(e));
    }

    /// Emits a [`FocusMoveEvent`].
    #[inline]
    pub fn focus_move(&mut self, e: &FocusMoveEvent) {
        self.emit(|s| s.on_focus_move(e));
    }
}
