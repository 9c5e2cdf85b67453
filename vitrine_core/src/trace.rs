// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for event dispatch.
//!
//! [`TraceSink`] has one method per event kind, all defaulting to no-ops.
//! [`Page::dispatch`](crate::page::Page::dispatch) reports through a
//! [`Tracer`], which wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing. When **on**,
//! each method performs a single `Option` branch before dispatching.
//!
//! Every event carries the sequence number of the dispatch that produced it,
//! so sinks can group state changes under the DOM event that caused them.

use crate::error::PageError;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a page event enters [`Page::dispatch`](crate::page::Page::dispatch).
#[derive(Clone, Copy, Debug)]
pub struct DispatchEvent {
    /// Dispatch sequence number, starting at 1.
    pub seq: u64,
    /// Short name of the page event.
    pub event: &'static str,
}

/// Emitted when the carousel shows a slide.
#[derive(Clone, Copy, Debug)]
pub struct SlideEvent {
    /// Dispatch sequence number.
    pub seq: u64,
    /// Slide now shown.
    pub index: usize,
    /// Total number of slides.
    pub slide_count: usize,
}

/// Emitted when a tab becomes active.
#[derive(Clone, Copy, Debug)]
pub struct TabEvent {
    /// Dispatch sequence number.
    pub seq: u64,
    /// Index of the active tab.
    pub index: usize,
}

/// Emitted when the modal's visibility changes.
#[derive(Clone, Copy, Debug)]
pub struct ModalEvent {
    /// Dispatch sequence number.
    pub seq: u64,
    /// Whether the modal is now shown.
    pub visible: bool,
}

/// Emitted when the navigation gains or loses the sticky marker.
#[derive(Clone, Copy, Debug)]
pub struct StickyEvent {
    /// Dispatch sequence number.
    pub seq: u64,
    /// Whether the navigation is now sticky.
    pub sticky: bool,
}

/// Emitted when a section is revealed.
#[derive(Clone, Copy, Debug)]
pub struct RevealEvent {
    /// Dispatch sequence number.
    pub seq: u64,
    /// Index of the revealed section.
    pub section: usize,
}

/// Which transition a lazy image went through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageStage {
    /// The real source was assigned.
    Swapped,
    /// The real source finished loading.
    Loaded,
}

/// Emitted when a lazy image changes state.
#[derive(Clone, Copy, Debug)]
pub struct ImageEvent {
    /// Dispatch sequence number.
    pub seq: u64,
    /// Index of the image.
    pub image: usize,
    /// Transition taken.
    pub stage: ImageStage,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from event dispatch.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when dispatch of a page event begins.
    fn on_dispatch(&mut self, e: &DispatchEvent) {
        _ = e;
    }

    /// Called when the carousel shows a slide.
    fn on_slide(&mut self, e: &SlideEvent) {
        _ = e;
    }

    /// Called when a tab becomes active.
    fn on_tab(&mut self, e: &TabEvent) {
        _ = e;
    }

    /// Called when the modal opens or closes.
    fn on_modal(&mut self, e: &ModalEvent) {
        _ = e;
    }

    /// Called when the sticky marker flips.
    fn on_sticky(&mut self, e: &StickyEvent) {
        _ = e;
    }

    /// Called when a section is revealed.
    fn on_reveal(&mut self, e: &RevealEvent) {
        _ = e;
    }

    /// Called when a lazy image changes state.
    fn on_image(&mut self, e: &ImageEvent) {
        _ = e;
    }

    /// Called when an event was dropped because a lookup failed.
    fn on_rejected(&mut self, seq: u64, error: &PageError) {
        _ = (seq, error);
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
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

    /// Emits a [`DispatchEvent`].
    #[inline]
    pub fn dispatch(&mut self, e: &DispatchEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_dispatch(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SlideEvent`].
    #[inline]
    pub fn slide(&mut self, e: &SlideEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_slide(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TabEvent`].
    #[inline]
    pub fn tab(&mut self, e: &TabEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_tab(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ModalEvent`].
    #[inline]
    pub fn modal(&mut self, e: &ModalEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_modal(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`StickyEvent`].
    #[inline]
    pub fn sticky(&mut self, e: &StickyEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_sticky(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RevealEvent`].
    #[inline]
    pub fn reveal(&mut self, e: &RevealEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_reveal(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`ImageEvent`].
    #[inline]
    pub fn image(&mut self, e: &ImageEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_image(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Reports a dropped event.
    #[inline]
    pub fn rejected(&mut self, seq: u64, error: &PageError) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_rejected(seq, error);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = (seq, error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_sink_accepts_everything() {
        let mut sink = NoopSink;
        let mut tracer = Tracer::new(&mut sink);
        tracer.dispatch(&DispatchEvent {
            seq: 1,
            event: "next-slide",
        });
        tracer.rejected(1, &PageError::EmptyCarousel);
        let mut none = Tracer::none();
        none.modal(&ModalEvent {
            seq: 2,
            visible: true,
        });
    }
}
