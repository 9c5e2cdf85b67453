// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The document structure contract.
//!
//! [`PageConfig`] names every element, marker class, and data attribute the
//! backends look up. [`PageConfig::bankist`] matches the landing page markup
//! shipped with the demo; other pages can build their own values.

use alloc::format;
use alloc::string::String;

/// Selectors for the elements the page wires up.
///
/// Single-element selectors are resolved with `querySelector`; the plural
/// ones (`open_modal`, `nav_link`, `tab`, `tab_content`, `section`,
/// `lazy_image`, `slide`) with `querySelectorAll`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selectors {
    /// The modal dialog.
    pub modal: &'static str,
    /// The backdrop shown behind the dialog.
    pub overlay: &'static str,
    /// The dialog's close button.
    pub close_modal: &'static str,
    /// Every control that opens the dialog.
    pub open_modal: &'static str,
    /// The "learn more" button that scrolls to the features section.
    pub scroll_to: &'static str,
    /// The section the scroll button targets.
    pub features_section: &'static str,
    /// The navigation bar.
    pub nav: &'static str,
    /// The container holding the navigation links.
    pub nav_links: &'static str,
    /// A single navigation link.
    pub nav_link: &'static str,
    /// The logo image inside the navigation bar.
    pub nav_logo: &'static str,
    /// The header, used as the sticky-nav sentinel.
    pub header: &'static str,
    /// A tab button.
    pub tab: &'static str,
    /// The element enclosing every tab button.
    pub tab_container: &'static str,
    /// A tab content panel.
    pub tab_content: &'static str,
    /// A page section revealed on scroll.
    pub section: &'static str,
    /// An image whose real source is deferred.
    pub lazy_image: &'static str,
    /// A carousel slide.
    pub slide: &'static str,
    /// The carousel's "previous" button.
    pub slider_left: &'static str,
    /// The carousel's "next" button.
    pub slider_right: &'static str,
    /// The element the dot indicators are generated into.
    pub dot_container: &'static str,
}

/// Marker classes toggled on elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Markers {
    /// Hides the dialog and the overlay.
    pub hidden: &'static str,
    /// Marks the active tab button.
    pub tab_active: &'static str,
    /// Marks the visible content panel.
    pub content_active: &'static str,
    /// Prefix that, followed by a discriminator, names a content panel.
    pub content_prefix: &'static str,
    /// Class of a generated dot indicator.
    pub dot: &'static str,
    /// Marks the dot of the current slide.
    pub dot_active: &'static str,
    /// Fixes the navigation bar to the top of the viewport.
    pub sticky: &'static str,
    /// Keeps a section hidden until it is revealed.
    pub section_hidden: &'static str,
    /// Blurs a lazy image until its real source has loaded.
    pub lazy_placeholder: &'static str,
}

impl Markers {
    /// Returns the class that identifies the content panel for `discriminator`.
    #[must_use]
    pub fn content_class(&self, discriminator: &str) -> String {
        format!("{}{discriminator}", self.content_prefix)
    }
}

/// Data attributes read from or written to elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attributes {
    /// Tab discriminator on tab buttons.
    pub tab: &'static str,
    /// Slide ordinal on generated dots.
    pub slide: &'static str,
    /// Deferred real source on lazy images.
    pub lazy_src: &'static str,
}

/// Tuning for the viewport watchers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WatchConfig {
    /// Fraction of a section that must be visible before it is revealed.
    pub reveal_threshold: f64,
    /// Pixels beyond the viewport at which lazy images start loading.
    pub lazy_root_margin_px: f64,
}

/// Number of equal steps between zero and the reveal threshold at which a
/// section observer reports.
pub const REVEAL_STEPS: usize = 4;

impl WatchConfig {
    /// Observer thresholds for sections: zero, then `reveal_threshold` in
    /// [`REVEAL_STEPS`] equal steps.
    #[must_use]
    pub fn reveal_steps(&self) -> [f64; REVEAL_STEPS + 1] {
        core::array::from_fn(|i| self.reveal_threshold * i as f64 / REVEAL_STEPS as f64)
    }

    /// Rounds `reach` down to the nearest reveal step.
    ///
    /// An observer only reports when the ratio crosses one of its
    /// thresholds, so a section that cannot reach the full threshold has to
    /// qualify at the last step it does cross.
    #[must_use]
    pub fn snap_reach(&self, reach: f64) -> f64 {
        self.reveal_steps()
            .into_iter()
            .rev()
            .find(|step| *step <= reach)
            .unwrap_or(0.0)
    }

    /// Root margin for the sticky-nav watcher: the viewport shrunk by the
    /// navigation bar's height.
    #[must_use]
    pub fn sticky_root_margin_px(nav_height: f64) -> f64 {
        -nav_height
    }
}

/// Complete configuration for mounting a page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageConfig {
    /// Element selectors.
    pub selectors: Selectors,
    /// Marker classes.
    pub markers: Markers,
    /// Data attributes.
    pub attributes: Attributes,
    /// Viewport watcher tuning.
    pub watch: WatchConfig,
}

impl PageConfig {
    /// Configuration for the Bankist landing page markup.
    #[must_use]
    pub const fn bankist() -> Self {
        Self {
            selectors: Selectors {
                modal: ".modal",
                overlay: ".overlay",
                close_modal: ".btn--close-modal",
                open_modal: ".btn--show-modal",
                scroll_to: ".btn--scroll-to",
                features_section: "#section--1",
                nav: ".nav",
                nav_links: ".nav__links",
                nav_link: ".nav__link",
                nav_logo: "img",
                header: ".header",
                tab: ".operations__tab",
                tab_container: ".operations__tab-container",
                tab_content: ".operations__content",
                section: ".section",
                lazy_image: "img[data-src]",
                slide: ".slide",
                slider_left: ".slider__btn--left",
                slider_right: ".slider__btn--right",
                dot_container: ".dots",
            },
            markers: Markers {
                hidden: "hidden",
                tab_active: "operations__tab--active",
                content_active: "operations__content--active",
                content_prefix: "operations__content--",
                dot: "dots__dot",
                dot_active: "dots__dot--active",
                sticky: "sticky",
                section_hidden: "section--hidden",
                lazy_placeholder: "lazy-img",
            },
            attributes: Attributes {
                tab: "data-tab",
                slide: "data-slide",
                lazy_src: "data-src",
            },
            watch: WatchConfig {
                reveal_threshold: 0.15,
                lazy_root_margin_px: 200.0,
            },
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::bankist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_class_appends_discriminator() {
        let markers = PageConfig::bankist().markers;
        assert_eq!(markers.content_class("2"), "operations__content--2");
    }

    #[test]
    fn reveal_steps_end_at_threshold() {
        let watch = PageConfig::bankist().watch;
        let steps = watch.reveal_steps();
        assert_eq!(steps[0], 0.0);
        assert_eq!(steps[REVEAL_STEPS], watch.reveal_threshold);
        assert!(steps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn reach_snaps_down_to_a_step() {
        let watch = WatchConfig {
            reveal_threshold: 0.2,
            lazy_root_margin_px: 0.0,
        };
        assert_eq!(watch.snap_reach(1.0), 0.2);
        assert_eq!(watch.snap_reach(0.12), 0.1);
        assert_eq!(watch.snap_reach(0.01), 0.0);
    }

    #[test]
    fn sticky_margin_shrinks_viewport() {
        assert_eq!(WatchConfig::sticky_root_margin_px(90.0), -90.0);
    }
}
