// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.

use alloc::format;
use alloc::string::String;

use vitrine_core::error::PageError;
use vitrine_core::trace::{
    DispatchEvent, ImageEvent, ImageStage, ModalEvent, RevealEvent, SlideEvent, StickyEvent,
    TabEvent, TraceSink,
};
use web_sys::console;

/// A [`TraceSink`] that logs to the browser console.
///
/// State changes are logged with `console.log`; dropped events with
/// `console.warn`. Dispatch entries are only logged when `verbose` is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    verbose: bool,
}

impl ConsoleSink {
    /// Creates a sink that logs state changes and dropped events.
    #[must_use]
    pub const fn new() -> Self {
        Self { verbose: false }
    }

    /// Creates a sink that also logs every dispatched event.
    #[must_use]
    pub const fn verbose() -> Self {
        Self { verbose: true }
    }
}

fn log(line: &str) {
    console::log_1(&line.into());
}

impl TraceSink for ConsoleSink {
    fn on_dispatch(&mut self, e: &DispatchEvent) {
        if self.verbose {
            log(&format!("[vitrine #{}] {}", e.seq, e.event));
        }
    }

    fn on_slide(&mut self, e: &SlideEvent) {
        log(&slide_line(e));
    }

    fn on_tab(&mut self, e: &TabEvent) {
        log(&format!("[vitrine #{}] tab {} active", e.seq, e.index));
    }

    fn on_modal(&mut self, e: &ModalEvent) {
        let state = if e.visible { "opened" } else { "closed" };
        log(&format!("[vitrine #{}] modal {state}", e.seq));
    }

    fn on_sticky(&mut self, e: &StickyEvent) {
        let state = if e.sticky { "on" } else { "off" };
        log(&format!("[vitrine #{}] sticky nav {state}", e.seq));
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        log(&format!("[vitrine #{}] section {} revealed", e.seq, e.section));
    }

    fn on_image(&mut self, e: &ImageEvent) {
        let stage = match e.stage {
            ImageStage::Swapped => "source swapped",
            ImageStage::Loaded => "loaded",
        };
        log(&format!("[vitrine #{}] image {} {stage}", e.seq, e.image));
    }

    fn on_rejected(&mut self, seq: u64, error: &PageError) {
        console::warn_1(&format!("[vitrine #{seq}] dropped: {error}").into());
    }
}

fn slide_line(e: &SlideEvent) -> String {
    format!(
        "[vitrine #{}] slide {}/{}",
        e.seq,
        e.index + 1,
        e.slide_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_line_is_one_based() {
        let line = slide_line(&SlideEvent {
            seq: 4,
            index: 0,
            slide_count: 3,
        });
        assert_eq!(line, "[vitrine #4] slide 1/3");
    }
}
