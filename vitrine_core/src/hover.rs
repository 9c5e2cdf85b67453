// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation hover highlight.
//!
//! Hovering a navigation link dims its siblings and the logo; leaving it
//! restores them. The opacity depends only on the [`HoverPhase`], never on
//! the event.

/// Opacity applied to sibling links and the logo while a link is hovered.
pub const DIM_OPACITY: f32 = 0.5;

/// Opacity restored when the pointer leaves a link.
pub const RESTORE_OPACITY: f32 = 1.0;

/// Which edge of a hover the event marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HoverPhase {
    /// The pointer entered a link (`mouseover`).
    Enter,
    /// The pointer left a link (`mouseout`).
    Leave,
}

impl HoverPhase {
    /// Opacity for the siblings and the logo in this phase.
    #[must_use]
    pub const fn opacity(self) -> f32 {
        match self {
            Self::Enter => DIM_OPACITY,
            Self::Leave => RESTORE_OPACITY,
        }
    }
}

/// Opacities to apply for one hover event over link `hovered`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    /// Index of the hovered link among the navigation links.
    pub hovered: usize,
    /// Phase of the hover.
    pub phase: HoverPhase,
}

impl Highlight {
    /// Opacity for link `index`, or `None` for the hovered link itself.
    #[must_use]
    pub fn link_opacity(&self, index: usize) -> Option<f32> {
        (index != self.hovered).then_some(self.phase.opacity())
    }

    /// Opacity for the navigation logo.
    #[must_use]
    pub const fn logo_opacity(&self) -> f32 {
        self.phase.opacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_dims_siblings_but_not_hovered_link() {
        let h = Highlight {
            hovered: 1,
            phase: HoverPhase::Enter,
        };
        assert_eq!(h.link_opacity(0), Some(0.5));
        assert_eq!(h.link_opacity(1), None);
        assert_eq!(h.link_opacity(2), Some(0.5));
        assert_eq!(h.logo_opacity(), 0.5);
    }

    #[test]
    fn leave_restores_full_opacity() {
        let h = Highlight {
            hovered: 0,
            phase: HoverPhase::Leave,
        };
        assert_eq!(h.link_opacity(3), Some(1.0));
        assert_eq!(h.logo_opacity(), 1.0);
    }
}
