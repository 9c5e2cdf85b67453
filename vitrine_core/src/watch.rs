// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport watchers.
//!
//! Three independent state machines consume [`Intersection`] entries, whether
//! they come from a native `IntersectionObserver` or from
//! [`geometry::intersect`](crate::geometry::intersect):
//!
//! - [`StickyNav`]: continuous and reversible. The navigation becomes
//!   sticky while its sentinel (the header) is out of view.
//! - [`RevealSet`]: one-shot per section: `Pending → Revealed`.
//! - [`LazyImageSet`]: one-shot per image: `Pending → Swapped → Loaded`.
//!   The source swap happens on visibility; only the later load event clears
//!   the placeholder.
//!
//! No one-shot entity ever returns to `Pending`. Once a transition fires,
//! the backend stops observing the target.

use alloc::vec;
use alloc::vec::Vec;

/// Slack allowed when comparing a ratio against its reach.
const RATIO_TOLERANCE: f64 = 1e-9;

/// One visibility observation for a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    /// Whether the target overlaps the (margin-adjusted) viewport.
    pub is_intersecting: bool,
    /// Fraction of the target's area inside the viewport, `0.0..=1.0`.
    pub ratio: f64,
    /// Largest ratio the target can reach against this viewport.
    ///
    /// `1.0` unless the target is taller or wider than the viewport; see
    /// [`geometry::reach`](crate::geometry::reach).
    pub reach: f64,
}

impl Intersection {
    /// An observation of a target that fits inside the viewport.
    #[must_use]
    pub const fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio,
            reach: 1.0,
        }
    }

    /// Replaces the reach.
    #[must_use]
    pub const fn with_reach(self, reach: f64) -> Self {
        Self { reach, ..self }
    }

    /// Whether the target is visible with at least `threshold` of its area.
    ///
    /// The threshold is capped at [`reach`](Self::reach), so a target larger
    /// than the viewport still qualifies once it fills as much as it can.
    #[must_use]
    pub fn meets(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio + RATIO_TOLERANCE >= threshold.min(self.reach)
    }
}

impl Default for Intersection {
    fn default() -> Self {
        Self::new(false, 0.0)
    }
}

/// Sticky-navigation state driven by the header sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StickyNav {
    sticky: bool,
}

impl StickyNav {
    /// Whether the navigation currently carries the sticky marker.
    #[must_use]
    pub const fn is_sticky(&self) -> bool {
        self.sticky
    }

    /// Updates from a sentinel observation. Returns the new flag if it
    /// flipped.
    pub fn observe(&mut self, entry: Intersection) -> Option<bool> {
        let sticky = !entry.is_intersecting;
        if sticky == self.sticky {
            return None;
        }
        self.sticky = sticky;
        Some(sticky)
    }
}

/// Reveal state of one section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    /// Hidden, still observed.
    #[default]
    Pending,
    /// Shown and no longer observed.
    Revealed,
}

/// Reveal-on-scroll state for every section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealSet {
    states: Vec<RevealState>,
}

impl RevealSet {
    /// Creates a set with `count` pending sections.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            states: vec![RevealState::Pending; count],
        }
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether there are no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State of section `index`.
    #[must_use]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    /// Sections still waiting to be revealed.
    pub fn pending(&self) -> impl Iterator<Item = usize> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == RevealState::Pending)
            .map(|(i, _)| i)
    }

    /// Feeds an observation of section `index`. Returns `true` if this
    /// observation revealed it.
    pub fn observe(&mut self, index: usize, entry: Intersection, threshold: f64) -> bool {
        match self.states.get_mut(index) {
            Some(state @ RevealState::Pending) if entry.meets(threshold) => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }
}

/// Load state of one lazy image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageState {
    /// Showing the placeholder, still observed.
    #[default]
    Pending,
    /// Real source assigned, waiting for the load event.
    Swapped,
    /// Real source loaded and placeholder marker cleared.
    Loaded,
}

/// Lazy-loading state for every deferred image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LazyImageSet {
    states: Vec<ImageState>,
}

impl LazyImageSet {
    /// Creates a set with `count` pending images.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            states: vec![ImageState::Pending; count],
        }
    }

    /// Number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether there are no images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State of image `index`.
    #[must_use]
    pub fn state(&self, index: usize) -> Option<ImageState> {
        self.states.get(index).copied()
    }

    /// Feeds an observation of image `index`. Returns `true` if the real
    /// source should be assigned now.
    pub fn observe(&mut self, index: usize, entry: Intersection) -> bool {
        match self.states.get_mut(index) {
            Some(state @ ImageState::Pending) if entry.is_intersecting => {
                *state = ImageState::Swapped;
                true
            }
            _ => false,
        }
    }

    /// Records that image `index` finished loading. Returns `true` if the
    /// placeholder marker should be cleared now.
    ///
    /// Load events for images whose source was never swapped (the
    /// placeholder itself loading) are ignored.
    pub fn loaded(&mut self, index: usize) -> bool {
        match self.states.get_mut(index) {
            Some(state @ ImageState::Swapped) => {
                *state = ImageState::Loaded;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VISIBLE: Intersection = Intersection::new(true, 0.5);
    const HIDDEN: Intersection = Intersection::new(false, 0.0);

    #[test]
    fn sticky_follows_sentinel_both_ways() {
        let mut nav = StickyNav::default();
        assert_eq!(nav.observe(VISIBLE), None, "initially not sticky");
        assert_eq!(nav.observe(HIDDEN), Some(true));
        assert_eq!(nav.observe(HIDDEN), None);
        assert_eq!(nav.observe(VISIBLE), Some(false));
        assert_eq!(nav.observe(HIDDEN), Some(true));
    }

    #[test]
    fn section_reveals_once_above_threshold() {
        let mut sections = RevealSet::new(2);
        let sliver = Intersection::new(true, 0.1);
        assert!(!sections.observe(0, sliver, 0.15));
        assert!(sections.observe(0, VISIBLE, 0.15));
        assert!(!sections.observe(0, HIDDEN, 0.15));
        assert!(!sections.observe(0, VISIBLE, 0.15), "never revealed twice");
        assert_eq!(sections.state(0), Some(RevealState::Revealed));
        assert_eq!(sections.pending().collect::<Vec<_>>(), [1]);
    }

    #[test]
    fn threshold_is_capped_at_reach() {
        // A section ten viewports tall never shows more than a tenth of itself.
        let full = Intersection::new(true, 0.1).with_reach(0.1);
        let partial = Intersection::new(true, 0.05).with_reach(0.1);
        assert!(!partial.meets(0.15));
        assert!(full.meets(0.15));
        assert!(!Intersection::new(false, 0.0).with_reach(0.0).meets(0.15));

        let mut sections = RevealSet::new(1);
        assert!(!sections.observe(0, partial, 0.15));
        assert!(sections.observe(0, full, 0.15));
    }

    #[test]
    fn out_of_range_section_is_ignored() {
        let mut sections = RevealSet::new(1);
        assert!(!sections.observe(5, VISIBLE, 0.15));
    }

    #[test]
    fn image_swaps_once_then_clears_on_load() {
        let mut images = LazyImageSet::new(1);
        assert!(!images.loaded(0), "placeholder load must not clear marker");
        assert!(!images.observe(0, HIDDEN));
        assert!(images.observe(0, VISIBLE));
        assert!(!images.observe(0, VISIBLE), "source swaps at most once");
        assert_eq!(images.state(0), Some(ImageState::Swapped));
        assert!(images.loaded(0));
        assert!(!images.loaded(0));
        assert_eq!(images.state(0), Some(ImageState::Loaded));
    }
}
