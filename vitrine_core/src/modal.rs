// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modal dialog visibility.
//!
//! The dialog and its overlay share a single visibility flag, so the two
//! can never disagree.

use crate::input::Key;

/// Visibility of the modal dialog and its overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modal {
    visible: bool,
}

impl Modal {
    /// Creates a hidden modal.
    #[must_use]
    pub const fn new() -> Self {
        Self { visible: false }
    }

    /// Whether the dialog and overlay are shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows the dialog. Returns `true` if it was hidden.
    pub const fn open(&mut self) -> bool {
        let changed = !self.visible;
        self.visible = true;
        changed
    }

    /// Hides the dialog. Returns `true` if it was shown.
    pub const fn close(&mut self) -> bool {
        let changed = self.visible;
        self.visible = false;
        changed
    }

    /// Closes the dialog on Escape while it is shown.
    pub fn on_key(&mut self, key: Key) -> bool {
        key == Key::Escape && self.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_and_close_are_idempotent() {
        let mut m = Modal::new();
        assert!(m.open());
        assert!(!m.open());
        assert!(m.close());
        assert!(!m.close());
        assert!(!m.is_visible());
    }

    #[test]
    fn escape_closes_only_when_visible() {
        let mut m = Modal::new();
        assert!(!m.on_key(Key::Escape));
        m.open();
        assert!(!m.on_key(Key::ArrowLeft));
        assert!(m.is_visible());
        assert!(m.on_key(Key::Escape));
        assert!(!m.is_visible());
    }
}
