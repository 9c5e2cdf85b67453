// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of the document structure contract.
//!
//! [`PageElements`] looks up every element named by a [`PageConfig`] once, at
//! mount time. Required single elements that are missing fail resolution
//! with [`PageError::MissingElement`]; element lists may be empty.

use alloc::format;
use alloc::string::{String, ToString as _};
use alloc::vec::Vec;

use vitrine_core::bindings::Target;
use vitrine_core::config::PageConfig;
use vitrine_core::error::PageError;
use vitrine_core::page::PageLayout;
use vitrine_core::tabs::panel_discriminator;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast as _;
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlImageElement, NodeList};

/// Handles to every element the page reads or writes.
#[derive(Clone, Debug)]
pub struct PageElements {
    /// The owning document.
    pub document: Document,
    /// The modal dialog.
    pub modal: HtmlElement,
    /// The backdrop behind the dialog.
    pub overlay: HtmlElement,
    /// The dialog's close button.
    pub close_modal: HtmlElement,
    /// Controls that open the dialog.
    pub open_modal: Vec<HtmlElement>,
    /// The "scroll to features" button.
    pub scroll_to: HtmlElement,
    /// The features section.
    pub features: Element,
    /// The navigation bar.
    pub nav: HtmlElement,
    /// The navigation links container.
    pub nav_links: HtmlElement,
    /// Every navigation link inside the navigation bar.
    pub links: Vec<HtmlElement>,
    /// The logo inside the navigation bar.
    pub logo: HtmlElement,
    /// The header sentinel.
    pub header: Element,
    /// The tab button container.
    pub tab_container: HtmlElement,
    /// Tab buttons.
    pub tabs: Vec<Element>,
    /// Content panels.
    pub panels: Vec<Element>,
    /// Reveal-on-scroll sections.
    pub sections: Vec<Element>,
    /// Lazy images.
    pub lazy_images: Vec<HtmlImageElement>,
    /// Carousel slides.
    pub slides: Vec<HtmlElement>,
    /// The carousel's "previous" button.
    pub slider_left: HtmlElement,
    /// The carousel's "next" button.
    pub slider_right: HtmlElement,
    /// The dot indicator container.
    pub dot_container: HtmlElement,
    /// Generated dot indicators, in slide order.
    pub dots: Vec<Element>,
}

impl PageElements {
    /// Looks up every element named by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MissingElement`] with the first required selector
    /// that matches nothing (or matches an element of the wrong kind).
    pub fn resolve(document: &Document, config: &PageConfig) -> Result<Self, PageError> {
        let s = &config.selectors;
        let nav: HtmlElement = one(document, s.nav)?;
        Ok(Self {
            document: document.clone(),
            modal: one(document, s.modal)?,
            overlay: one(document, s.overlay)?,
            close_modal: one(document, s.close_modal)?,
            open_modal: all(document.query_selector_all(s.open_modal)),
            scroll_to: one(document, s.scroll_to)?,
            features: one(document, s.features_section)?,
            nav_links: one(document, s.nav_links)?,
            links: all(nav.query_selector_all(s.nav_link)),
            logo: nav
                .query_selector(s.nav_logo)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into().ok())
                .ok_or(PageError::MissingElement(s.nav_logo))?,
            nav,
            header: one(document, s.header)?,
            tab_container: one(document, s.tab_container)?,
            tabs: all(document.query_selector_all(s.tab)),
            panels: all(document.query_selector_all(s.tab_content)),
            sections: all(document.query_selector_all(s.section)),
            lazy_images: all(document.query_selector_all(s.lazy_image)),
            slides: all(document.query_selector_all(s.slide)),
            slider_left: one(document, s.slider_left)?,
            slider_right: one(document, s.slider_right)?,
            dot_container: one(document, s.dot_container)?,
            dots: Vec::new(),
        })
    }

    /// Generates one dot per slide inside the dot container.
    ///
    /// Each dot is a `<button>` carrying the dot marker class and its slide
    /// ordinal as the slide attribute.
    pub fn create_dots(&mut self, config: &PageConfig) -> Result<(), JsValue> {
        for ordinal in 0..self.slides.len() {
            let dot = self.document.create_element("button")?;
            dot.set_class_name(config.markers.dot);
            dot.set_attribute(config.attributes.slide, &ordinal.to_string())?;
            self.dot_container.append_child(&dot)?;
            self.dots.push(dot);
        }
        Ok(())
    }

    /// Detaches every generated dot from the document.
    pub fn remove_dots(&mut self) {
        for dot in self.dots.drain(..) {
            dot.remove();
        }
    }

    /// Summarizes the resolved elements for [`Page::new`].
    ///
    /// [`Page::new`]: vitrine_core::page::Page::new
    #[must_use]
    pub fn layout(&self, config: &PageConfig) -> PageLayout {
        let tabs = self
            .tabs
            .iter()
            .map(|tab| tab.get_attribute(config.attributes.tab).unwrap_or_default())
            .collect();
        let panels = self
            .panels
            .iter()
            .map(|panel| {
                let classes = panel.class_name();
                panel_discriminator(classes.split_whitespace(), &config.markers)
                    .map(String::from)
                    .unwrap_or_default()
            })
            .collect();
        let initial_tab = self
            .tabs
            .iter()
            .position(|tab| tab.class_list().contains(config.markers.tab_active))
            .or_else(|| (!self.tabs.is_empty()).then_some(0));
        PageLayout {
            slide_count: self.slides.len(),
            tabs,
            panels,
            initial_tab,
            section_count: self.sections.len(),
            image_count: self.lazy_images.len(),
        }
    }

    /// Elements that receive listeners for `target`.
    #[must_use]
    pub fn targets(&self, target: Target) -> Vec<EventTarget> {
        let single = |el: &HtmlElement| alloc::vec![el.clone().unchecked_into::<EventTarget>()];
        match target {
            Target::OpenModalButtons => self
                .open_modal
                .iter()
                .map(|el| el.clone().unchecked_into())
                .collect(),
            Target::CloseModalButton => single(&self.close_modal),
            Target::Overlay => single(&self.overlay),
            Target::ScrollToButton => single(&self.scroll_to),
            Target::NavLinks => single(&self.nav_links),
            Target::TabContainer => single(&self.tab_container),
            Target::Nav => single(&self.nav),
            Target::SliderRight => single(&self.slider_right),
            Target::SliderLeft => single(&self.slider_left),
            Target::DotContainer => single(&self.dot_container),
            Target::Document => alloc::vec![self.document.clone().unchecked_into()],
        }
    }
}

/// Turns a marker class into a selector matching it.
#[must_use]
pub(crate) fn class_selector(class: &str) -> String {
    format!(".{class}")
}

/// Position of `target` in `items`, compared by JS identity.
pub(crate) fn index_of<T: AsRef<JsValue>>(items: &[T], target: &JsValue) -> Option<usize> {
    items.iter().position(|item| item.as_ref() == target)
}

fn one<T: JsCast>(document: &Document, selector: &'static str) -> Result<T, PageError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or(PageError::MissingElement(selector))
}

fn all<T: JsCast>(list: Result<NodeList, JsValue>) -> Vec<T> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_selector_prefixes_dot() {
        assert_eq!(class_selector("dots__dot"), ".dots__dot");
    }
}
