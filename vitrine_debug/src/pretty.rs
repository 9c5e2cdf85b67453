// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Lines start
//! with the dispatch sequence number, so every state change lines up under
//! the event that caused it.

use std::io::Write;

use vitrine_core::error::PageError;
use vitrine_core::trace::{
    DispatchEvent, ImageEvent, ImageStage, ModalEvent, RevealEvent, SlideEvent, StickyEvent,
    TabEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn on_off(flag: bool, on: &'static str, off: &'static str) -> &'static str {
    if flag { on } else { off }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_dispatch(&mut self, e: &DispatchEvent) {
        let _ = writeln!(self.writer, "[{:>4}] dispatch {}", e.seq, e.event);
    }

    fn on_slide(&mut self, e: &SlideEvent) {
        let _ = writeln!(
            self.writer,
            "[{:>4}]   slide {}/{}",
            e.seq,
            e.index + 1,
            e.slide_count,
        );
    }

    fn on_tab(&mut self, e: &TabEvent) {
        let _ = writeln!(self.writer, "[{:>4}]   tab index={}", e.seq, e.index);
    }

    fn on_modal(&mut self, e: &ModalEvent) {
        let _ = writeln!(
            self.writer,
            "[{:>4}]   modal {}",
            e.seq,
            on_off(e.visible, "open", "closed"),
        );
    }

    fn on_sticky(&mut self, e: &StickyEvent) {
        let _ = writeln!(
            self.writer,
            "[{:>4}]   nav {}",
            e.seq,
            on_off(e.sticky, "sticky", "static"),
        );
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        let _ = writeln!(self.writer, "[{:>4}]   reveal section={}", e.seq, e.section);
    }

    fn on_image(&mut self, e: &ImageEvent) {
        let stage = match e.stage {
            ImageStage::Swapped => "swapped",
            ImageStage::Loaded => "loaded",
        };
        let _ = writeln!(
            self.writer,
            "[{:>4}]   image={} {stage}",
            e.seq, e.image,
        );
    }

    fn on_rejected(&mut self, seq: u64, error: &PageError) {
        let _ = writeln!(self.writer, "[{seq:>4}]   REJECTED {error}");
    }
}
