// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! A backend provides the following pieces:
//!
//! - **Document resolution**: Looks up every element named by
//!   [`PageConfig`](crate::config::PageConfig) and summarizes what it found
//!   as a [`PageLayout`](crate::page::PageLayout).
//!
//! - **Listener wiring**: Walks [`BINDINGS`](crate::bindings::BINDINGS)
//!   and turns each DOM event into a [`PageEvent`](crate::page::PageEvent).
//!
//! - **Watchers**: Delivers [`Intersection`](crate::watch::Intersection)
//!   observations for the header, the sections, and the lazy images, and
//!   stops observing targets once their one-shot transition has fired.
//!
//! - **Presenter**: Implements the [`Presenter`] trait to write marker
//!   classes, styles, and scroll positions.
//!
//! # Event loop pseudocode
//!
//! ```rust,ignore
//! fn on_dom_event(event: &Event) {
//!     let Some(page_event) = translate(action, event) else { return };
//!     let changes = page.dispatch(page_event, &mut tracer);
//!     if changes.prevent_default {
//!         event.prevent_default();
//!     }
//!     if let Err(error) = presenter.apply(&page, &changes) {
//!         tracer.rejected(page.seq(), &error);
//!     }
//! }
//! ```

use crate::error::PageError;
use crate::page::{Page, PageChanges};

/// Applies dispatched changes to a platform-native document.
///
/// Implemented by the DOM presenter and by test doubles.
pub trait Presenter {
    /// Applies `changes`, reading current marker state from `page`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::UnresolvedFragment`] when a scroll target names
    /// no element. Every other change in the batch is still applied.
    fn apply(&mut self, page: &Page, changes: &PageChanges) -> Result<(), PageError>;
}
