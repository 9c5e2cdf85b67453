// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM marker management.
//!
//! Writes the marker classes, inline styles, and scroll positions described
//! by [`PageChanges`], reading the current state back from the [`Page`].
//!
//! [`PageChanges`]: vitrine_core::page::PageChanges
//! [`Page`]: vitrine_core::page::Page

use alloc::format;
use alloc::string::String;

use vitrine_core::backend::Presenter;
use vitrine_core::config::PageConfig;
use vitrine_core::error::PageError;
use vitrine_core::hover::Highlight;
use vitrine_core::page::{Page, PageChanges, ScrollTarget};
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

use crate::document::PageElements;

/// Projects page state onto the resolved elements.
pub struct DomPresenter {
    elements: PageElements,
    config: PageConfig,
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("slides", &self.elements.slides.len())
            .field("tabs", &self.elements.tabs.len())
            .field("sections", &self.elements.sections.len())
            .field("lazy_images", &self.elements.lazy_images.len())
            .finish_non_exhaustive()
    }
}

impl DomPresenter {
    /// Creates a presenter over already resolved elements.
    #[must_use]
    pub fn new(elements: PageElements, config: PageConfig) -> Self {
        Self { elements, config }
    }

    /// Returns the resolved elements.
    #[must_use]
    pub fn elements(&self) -> &PageElements {
        &self.elements
    }

    fn render_modal(&self, page: &Page) {
        let hidden = !page.modal().is_visible();
        let marker = self.config.markers.hidden;
        toggle(&self.elements.modal, marker, hidden);
        toggle(&self.elements.overlay, marker, hidden);
    }

    fn render_slides(&self, page: &Page) {
        let carousel = page.carousel();
        for (slide, offset) in self.elements.slides.iter().zip(carousel.offsets()) {
            let _ = slide.style().set_property("transform", &translate_x(offset));
        }
        for (dot, active) in self.elements.dots.iter().zip(carousel.dots()) {
            toggle(dot, self.config.markers.dot_active, active);
        }
    }

    fn render_tabs(&self, page: &Page) {
        let tabs = page.tabs();
        for (tab, active) in self.elements.tabs.iter().zip(tabs.tab_markers()) {
            toggle(tab, self.config.markers.tab_active, active);
        }
        for (panel, active) in self.elements.panels.iter().zip(tabs.panel_markers()) {
            toggle(panel, self.config.markers.content_active, active);
        }
    }

    fn render_highlight(&self, highlight: Highlight) {
        for (i, link) in self.elements.links.iter().enumerate() {
            if let Some(opacity) = highlight.link_opacity(i) {
                let _ = link.style().set_property("opacity", &opacity_css(opacity));
            }
        }
        let logo = opacity_css(highlight.logo_opacity());
        let _ = self.elements.logo.style().set_property("opacity", &logo);
    }

    fn scroll(&self, target: &ScrollTarget) -> Result<(), PageError> {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        match target {
            ScrollTarget::Features => {
                self.elements
                    .features
                    .scroll_into_view_with_scroll_into_view_options(&options);
            }
            ScrollTarget::Section(id) => {
                let section = self
                    .elements
                    .document
                    .get_element_by_id(id)
                    .ok_or_else(|| PageError::UnresolvedFragment(format!("#{id}")))?;
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
        Ok(())
    }
}

impl Presenter for DomPresenter {
    fn apply(&mut self, page: &Page, changes: &PageChanges) -> Result<(), PageError> {
        let markers = &self.config.markers;

        if changes.modal {
            self.render_modal(page);
        }
        if changes.slides {
            self.render_slides(page);
        }
        if changes.tabs {
            self.render_tabs(page);
        }
        if let Some(highlight) = changes.highlight {
            self.render_highlight(highlight);
        }
        if changes.sticky {
            toggle(&self.elements.nav, markers.sticky, page.sticky().is_sticky());
        }

        for &i in &changes.concealed {
            if let Some(section) = self.elements.sections.get(i) {
                toggle(section, markers.section_hidden, true);
            }
        }
        for &i in &changes.revealed {
            if let Some(section) = self.elements.sections.get(i) {
                toggle(section, markers.section_hidden, false);
            }
        }
        for &i in &changes.swapped {
            if let Some(img) = self.elements.lazy_images.get(i)
                && let Some(src) = img.get_attribute(self.config.attributes.lazy_src)
            {
                img.set_src(&src);
            }
        }
        for &i in &changes.loaded {
            if let Some(img) = self.elements.lazy_images.get(i) {
                toggle(img, markers.lazy_placeholder, false);
            }
        }

        // Last, so a bad fragment does not hold back the rest of the batch.
        match &changes.scroll {
            Some(target) => self.scroll(target),
            None => Ok(()),
        }
    }
}

fn toggle(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// CSS `transform` placing a slide `offset` percent along the x axis.
#[must_use]
pub(crate) fn translate_x(offset: isize) -> String {
    format!("translateX({offset}%)")
}

/// CSS `opacity` value.
#[must_use]
pub(crate) fn opacity_css(opacity: f32) -> String {
    format!("{opacity}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::carousel::slide_offset;

    #[test]
    fn translate_x_formats_percent() {
        assert_eq!(translate_x(slide_offset(0, 3)), "translateX(-300%)");
        assert_eq!(translate_x(slide_offset(2, 0)), "translateX(200%)");
        assert_eq!(translate_x(0), "translateX(0%)");
    }

    #[test]
    fn opacity_keeps_short_decimals() {
        assert_eq!(opacity_css(0.5), "0.5");
        assert_eq!(opacity_css(1.0), "1");
    }
}
