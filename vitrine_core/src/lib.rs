// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-independent interaction state for the Vitrine landing page.
//!
//! `vitrine_core` models every interactive behavior of the page as an owned
//! state machine with a pure projection onto marker classes. It is `no_std`
//! compatible (with `alloc`) and has no DOM dependency, so all behavior is
//! testable on the host.
//!
//! # Architecture
//!
//! ```text
//!   DOM event / IntersectionObserver entry
//!       │
//!       ▼  (backend translates via BINDINGS)
//!   PageEvent ──► Page::dispatch() ──► PageChanges
//!                      │                    │
//!                      ▼                    ▼
//!                 TraceSink          Presenter::apply()
//! ```
//!
//! **[`page`]**: [`Page`](page::Page) owns the controllers and turns
//! [`PageEvent`](page::PageEvent)s into [`PageChanges`](page::PageChanges).
//!
//! **[`carousel`]**, **[`tabs`]**, **[`modal`]**, **[`hover`]**: the
//! pointer and keyboard driven behaviors.
//!
//! **[`watch`]**: the viewport watchers (sticky navigation, section reveal,
//! lazy images) and the [`Intersection`](watch::Intersection) entry they
//! consume. **[`geometry`]** computes entries from rectangles for backends
//! without a native observer.
//!
//! **[`bindings`]**: the static `(target, event) → action` table.
//!
//! **[`backend`]**: the [`Presenter`](backend::Presenter) trait.
//!
//! **[`config`]**: selectors, marker classes, and watcher tuning.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types,
//! with the zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod bindings;
pub mod carousel;
pub mod config;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod input;
pub mod modal;
pub mod page;
pub mod tabs;
pub mod trace;
pub mod watch;
