// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cyclic slide carousel with dot indicators.
//!
//! [`Carousel`] owns the current slide index. Every transition wraps modulo
//! the slide count, so stepping past either end continues from the other.
//! Rendering is a projection of the index: [`Carousel::offsets`] yields the
//! horizontal offset of every slide and [`Carousel::dots`] the active flag of
//! every dot, both recomputed in full on each call.

use crate::error::PageError;

/// Horizontal offset of slide `ordinal`, in percent of the slide width, when
/// slide `current` is shown.
///
/// The current slide sits at `0`; slides before it are pushed left in steps
/// of `-100` and slides after it right in steps of `100`.
#[must_use]
pub const fn slide_offset(ordinal: usize, current: usize) -> isize {
    (ordinal as isize - current as isize) * 100
}

/// Current-slide state for a fixed set of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    slide_count: usize,
    current: usize,
}

impl Carousel {
    /// Creates a carousel showing slide 0.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::EmptyCarousel`] when `slide_count` is zero, since
    /// there is no index the carousel could hold.
    pub const fn new(slide_count: usize) -> Result<Self, PageError> {
        if slide_count == 0 {
            return Err(PageError::EmptyCarousel);
        }
        Ok(Self {
            slide_count,
            current: 0,
        })
    }

    /// Number of slides.
    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Index of the slide currently shown.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Shows slide 0 regardless of prior state.
    pub const fn reset(&mut self) -> usize {
        self.current = 0;
        self.current
    }

    /// Advances one slide, wrapping from the last slide to the first.
    pub const fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.slide_count;
        self.current
    }

    /// Steps back one slide, wrapping from the first slide to the last.
    pub const fn previous(&mut self) -> usize {
        self.current = (self.current + self.slide_count - 1) % self.slide_count;
        self.current
    }

    /// Shows slide `index` directly.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidSlide`] when `index` is out of range; the
    /// current slide is left unchanged.
    pub fn go_to(&mut self, index: usize) -> Result<usize, PageError> {
        if index >= self.slide_count {
            return Err(PageError::InvalidSlide(alloc::format!("{index}")));
        }
        self.current = index;
        Ok(index)
    }

    /// Shows the slide named by a dot's slide attribute.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidSlide`] when `raw` is not a decimal index
    /// within range.
    pub fn go_to_attribute(&mut self, raw: &str) -> Result<usize, PageError> {
        let index = raw
            .trim()
            .parse::<usize>()
            .map_err(|_| PageError::InvalidSlide(raw.into()))?;
        self.go_to(index)
    }

    /// Offsets of every slide, in slide order, for the current index.
    pub fn offsets(&self) -> impl Iterator<Item = isize> {
        let current = self.current;
        (0..self.slide_count).map(move |ordinal| slide_offset(ordinal, current))
    }

    /// Active flag of every dot, in slide order.
    pub fn dots(&self) -> impl Iterator<Item = bool> {
        let current = self.current;
        (0..self.slide_count).map(move |ordinal| ordinal == current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn empty_carousel_is_rejected() {
        assert_eq!(Carousel::new(0), Err(PageError::EmptyCarousel));
    }

    #[test]
    fn next_wraps_to_first() {
        let mut c = Carousel::new(3).unwrap();
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.next(), 0);
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut c = Carousel::new(4).unwrap();
        assert_eq!(c.previous(), 3);
        assert_eq!(c.dots().position(|active| active), Some(3));
        assert_eq!(c.offsets().collect::<Vec<_>>(), [-300, -200, -100, 0]);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut c = Carousel::new(1).unwrap();
        assert_eq!(c.next(), 0);
        assert_eq!(c.previous(), 0);
    }

    #[test]
    fn go_to_attribute_parses_dot_ordinal() {
        let mut c = Carousel::new(4).unwrap();
        assert_eq!(c.go_to_attribute("2"), Ok(2));
        assert_eq!(c.offsets().collect::<Vec<_>>(), [-200, -100, 0, 100]);
        // Stepping continues from the selected dot.
        assert_eq!(c.next(), 3);
    }

    #[test]
    fn go_to_rejects_out_of_range_and_garbage() {
        let mut c = Carousel::new(3).unwrap();
        c.next();
        assert_eq!(c.go_to(3), Err(PageError::InvalidSlide("3".into())));
        assert_eq!(c.go_to_attribute("x"), Err(PageError::InvalidSlide("x".into())));
        assert_eq!(c.current(), 1, "failed selection must not move the carousel");
    }

    #[test]
    fn reset_returns_to_first_slide() {
        let mut c = Carousel::new(5).unwrap();
        c.previous();
        assert_eq!(c.reset(), 0);
        assert_eq!(c.offsets().next(), Some(0));
    }
}
