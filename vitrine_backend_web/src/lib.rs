// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for vitrine.
//!
//! This crate wires a [`Page`] to a live document:
//!
//! - [`PageElements`]: resolution of the document structure contract
//! - [`DomPresenter`]: marker classes, inline styles, smooth scrolling
//! - [`ConsoleSink`]: trace output on the browser console
//! - [`mount`]: resolves the document, generates the carousel dots, attaches
//!   every listener in [`BINDINGS`], and starts the viewport watchers
//!
//! Viewport watching uses `IntersectionObserver` where the browser provides
//! it and falls back to scroll/resize polling with rectangle intersection
//! otherwise.
//!
//! [`BINDINGS`]: vitrine_core::bindings::BINDINGS

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(
        dead_code,
        reason = "host builds only compile the pure helpers and their tests"
    )
)]

extern crate alloc;

mod console;
mod document;
mod listeners;
mod observer;
mod presenter;

pub use console::ConsoleSink;
pub use document::PageElements;
pub use presenter::DomPresenter;
pub use vitrine_core::backend::Presenter;

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;
use core::fmt;

use vitrine_core::config::PageConfig;
use vitrine_core::error::PageError;
use vitrine_core::page::{Page, PageChanges, PageEvent};
use vitrine_core::trace::{TraceSink, Tracer};
use wasm_bindgen::JsValue;
use web_sys::Document;

use listeners::Listeners;
use observer::Watchers;

/// Errors from [`mount`].
#[derive(Debug)]
pub enum MountError {
    /// The document does not satisfy the structure contract.
    Page(PageError),
    /// A DOM call failed.
    Js(JsValue),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(error) => write!(f, "cannot mount page: {error}"),
            Self::Js(value) => write!(f, "cannot mount page: DOM call failed: {value:?}"),
        }
    }
}

impl core::error::Error for MountError {}

impl From<PageError> for MountError {
    fn from(error: PageError) -> Self {
        Self::Page(error)
    }
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        Self::Js(value)
    }
}

impl From<MountError> for JsValue {
    fn from(error: MountError) -> Self {
        match error {
            MountError::Js(value) => value,
            MountError::Page(_) => Self::from_str(&format!("{error}")),
        }
    }
}

/// State shared by every listener and watcher callback.
pub(crate) struct Mounted {
    page: Page,
    presenter: DomPresenter,
    config: PageConfig,
    sink: Box<dyn TraceSink>,
}

pub(crate) type Shared = Rc<RefCell<Mounted>>;

impl Mounted {
    /// Dispatches `event` and applies the resulting changes.
    pub(crate) fn dispatch(&mut self, event: PageEvent<'_>) -> PageChanges {
        let mut tracer = Tracer::new(&mut *self.sink);
        let changes = self.page.dispatch(event, &mut tracer);
        if let Err(error) = self.presenter.apply(&self.page, &changes) {
            tracer.rejected(self.page.seq(), &error);
        }
        changes
    }

    /// Applies changes produced outside of dispatch.
    pub(crate) fn present(&mut self, changes: &PageChanges) {
        if let Err(error) = self.presenter.apply(&self.page, changes) {
            Tracer::new(&mut *self.sink).rejected(self.page.seq(), &error);
        }
    }

    pub(crate) fn page(&self) -> &Page {
        &self.page
    }

    pub(crate) fn elements(&self) -> &PageElements {
        self.presenter.elements()
    }

    pub(crate) fn config(&self) -> &PageConfig {
        &self.config
    }
}

/// A page with live listeners and watchers.
///
/// Dropping it detaches every listener and disconnects every observer. Keep
/// it alive for as long as the page should stay interactive (for a page-long
/// lifetime, [`core::mem::forget`] it).
pub struct MountedPage {
    shared: Shared,
    listeners: Listeners,
    watchers: Watchers,
}

impl MountedPage {
    /// Index of the slide currently shown.
    #[must_use]
    pub fn current_slide(&self) -> usize {
        self.shared.borrow().page.carousel().current()
    }

    /// Whether the modal is shown.
    #[must_use]
    pub fn is_modal_visible(&self) -> bool {
        self.shared.borrow().page.modal().is_visible()
    }
}

impl fmt::Debug for MountedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountedPage")
            .field("listeners", &self.listeners.len())
            .field("watchers", &self.watchers)
            .finish_non_exhaustive()
    }
}

/// Mounts every interactive behavior on `document`.
///
/// # Errors
///
/// Returns [`MountError::Page`] when a required element is missing or the
/// carousel has no slides, and [`MountError::Js`] when the DOM rejects a
/// call (generating dots, attaching listeners, creating observers). After
/// an error no listener stays attached, no observer stays connected, the
/// generated dots are removed, and every concealed section is shown again.
pub fn mount(
    document: &Document,
    config: PageConfig,
    sink: Box<dyn TraceSink>,
) -> Result<MountedPage, MountError> {
    let mut elements = PageElements::resolve(document, &config)?;
    let page = Page::new(elements.layout(&config), config.watch)?;
    if let Err(error) = elements.create_dots(&config) {
        elements.remove_dots();
        return Err(error.into());
    }

    let shared: Shared = Rc::new(RefCell::new(Mounted {
        page,
        presenter: DomPresenter::new(elements.clone(), config),
        config,
        sink,
    }));
    {
        let mut mounted = shared.borrow_mut();
        let changes = mounted.page.initialize();
        mounted.present(&changes);
    }

    let started = Listeners::attach(&shared, &elements).and_then(|listeners| {
        Watchers::start(&shared, &elements).map(|watchers| (listeners, watchers))
    });
    let (listeners, watchers) = match started {
        Ok(started) => started,
        Err(error) => {
            let mut mounted = shared.borrow_mut();
            let changes = mounted.page.stop_watching();
            mounted.present(&changes);
            elements.remove_dots();
            return Err(error.into());
        }
    };
    Ok(MountedPage {
        shared,
        listeners,
        watchers,
    })
}

/// CSS `rootMargin` for a uniform margin of `px` pixels.
#[must_use]
pub(crate) fn root_margin_css(px: f64) -> String {
    format!("{px}px")
}
