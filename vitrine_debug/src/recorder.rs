// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps every event as an
//! owned [`RecordedEvent`], in arrival order. Rejections keep the rendered
//! error message rather than the error value.

use vitrine_core::error::PageError;
use vitrine_core::trace::{
    DispatchEvent, ImageEvent, ImageStage, ModalEvent, RevealEvent, SlideEvent, StickyEvent,
    TabEvent, TraceSink,
};

/// A decoded trace event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// A page event entered dispatch.
    Dispatch {
        /// Dispatch sequence number.
        seq: u64,
        /// Short name of the page event.
        event: &'static str,
    },
    /// The carousel showed a slide.
    Slide {
        /// Dispatch sequence number.
        seq: u64,
        /// Slide shown.
        index: usize,
        /// Total number of slides.
        slide_count: usize,
    },
    /// A tab became active.
    Tab {
        /// Dispatch sequence number.
        seq: u64,
        /// Active tab.
        index: usize,
    },
    /// The modal opened or closed.
    Modal {
        /// Dispatch sequence number.
        seq: u64,
        /// Whether the modal is shown.
        visible: bool,
    },
    /// The sticky marker flipped.
    Sticky {
        /// Dispatch sequence number.
        seq: u64,
        /// Whether the navigation is sticky.
        sticky: bool,
    },
    /// A section was revealed.
    Reveal {
        /// Dispatch sequence number.
        seq: u64,
        /// Revealed section.
        section: usize,
    },
    /// A lazy image changed state.
    Image {
        /// Dispatch sequence number.
        seq: u64,
        /// The image.
        image: usize,
        /// Transition taken.
        stage: ImageStage,
    },
    /// An event was dropped.
    Rejected {
        /// Dispatch sequence number.
        seq: u64,
        /// Rendered error.
        reason: String,
    },
}

impl RecordedEvent {
    /// Sequence number of the dispatch that produced this event.
    #[must_use]
    pub fn seq(&self) -> u64 {
        match self {
            Self::Dispatch { seq, .. }
            | Self::Slide { seq, .. }
            | Self::Tab { seq, .. }
            | Self::Modal { seq, .. }
            | Self::Sticky { seq, .. }
            | Self::Reveal { seq, .. }
            | Self::Image { seq, .. }
            | Self::Rejected { seq, .. } => *seq,
        }
    }
}

/// A [`TraceSink`] that records every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Drops everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecorderSink {
    fn on_dispatch(&mut self, e: &DispatchEvent) {
        self.events.push(RecordedEvent::Dispatch {
            seq: e.seq,
            event: e.event,
        });
    }

    fn on_slide(&mut self, e: &SlideEvent) {
        self.events.push(RecordedEvent::Slide {
            seq: e.seq,
            index: e.index,
            slide_count: e.slide_count,
        });
    }

    fn on_tab(&mut self, e: &TabEvent) {
        self.events.push(RecordedEvent::Tab {
            seq: e.seq,
            index: e.index,
        });
    }

    fn on_modal(&mut self, e: &ModalEvent) {
        self.events.push(RecordedEvent::Modal {
            seq: e.seq,
            visible: e.visible,
        });
    }

    fn on_sticky(&mut self, e: &StickyEvent) {
        self.events.push(RecordedEvent::Sticky {
            seq: e.seq,
            sticky: e.sticky,
        });
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        self.events.push(RecordedEvent::Reveal {
            seq: e.seq,
            section: e.section,
        });
    }

    fn on_image(&mut self, e: &ImageEvent) {
        self.events.push(RecordedEvent::Image {
            seq: e.seq,
            image: e.image,
            stage: e.stage,
        });
    }

    fn on_rejected(&mut self, seq: u64, error: &PageError) {
        self.events.push(RecordedEvent::Rejected {
            seq,
            reason: error.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::config::PageConfig;
    use vitrine_core::page::{Page, PageEvent, PageLayout};
    use vitrine_core::trace::Tracer;
    use vitrine_core::watch::Intersection;

    fn page() -> Page {
        let layout = PageLayout {
            slide_count: 3,
            tabs: vec!["1".into(), "2".into()],
            panels: vec!["1".into(), "2".into()],
            initial_tab: Some(0),
            section_count: 2,
            image_count: 1,
        };
        Page::new(layout, PageConfig::bankist().watch).unwrap()
    }

    #[test]
    fn records_dispatch_then_state_change() {
        let mut page = page();
        let mut sink = RecorderSink::new();
        page.dispatch(PageEvent::NextSlide, &mut Tracer::new(&mut sink));
        assert_eq!(
            sink.events(),
            [
                RecordedEvent::Dispatch {
                    seq: 1,
                    event: "next-slide",
                },
                RecordedEvent::Slide {
                    seq: 1,
                    index: 1,
                    slide_count: 3,
                },
            ]
        );
    }

    #[test]
    fn records_rejections_with_reason() {
        let mut page = page();
        let mut sink = RecorderSink::new();
        page.dispatch(
            PageEvent::TabClick { tab: Some("4") },
            &mut Tracer::new(&mut sink),
        );
        let events = sink.into_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[1],
            RecordedEvent::Rejected { seq: 1, reason } if reason.contains("`4`")
        ));
    }

    #[test]
    fn lazy_image_records_both_stages() {
        let mut page = page();
        let mut sink = RecorderSink::new();
        let seen = Intersection::new(true, 0.1);
        page.dispatch(
            PageEvent::Image {
                index: 0,
                entry: seen,
            },
            &mut Tracer::new(&mut sink),
        );
        page.dispatch(
            PageEvent::ImageLoaded { index: 0 },
            &mut Tracer::new(&mut sink),
        );
        let stages: Vec<_> = sink
            .events()
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::Image { stage, .. } => Some(*stage),
                _ => None,
            })
            .collect();
        assert_eq!(stages, [ImageStage::Swapped, ImageStage::Loaded]);
        assert_eq!(sink.events().last().map(RecordedEvent::seq), Some(2));
    }
}
