// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing, recording, and JSON timeline export for vitrine
//! diagnostics.
//!
//! This crate provides [`TraceSink`](vitrine_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: keeps every event in memory as a
//!   [`recorder::RecordedEvent`].
//! - [`timeline::export`]: writes recorded events as a JSON array.

pub mod pretty;
pub mod recorder;
pub mod timeline;
