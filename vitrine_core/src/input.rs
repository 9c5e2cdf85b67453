// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard input understood by the page.

/// A key the page reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Closes the modal.
    Escape,
    /// Shows the previous slide.
    ArrowLeft,
    /// Shows the next slide.
    ArrowRight,
    /// Anything else.
    Other,
}

impl Key {
    /// Maps a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" => Self::Escape,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}
