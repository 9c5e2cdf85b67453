// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo: the Bankist landing page driven by `vitrine_backend_web`.
//!
//! Mounts every behavior (modal, smooth scrolling, tabs, navigation hover,
//! sticky navigation, section reveal, lazy images, and the carousel) on the
//! markup in `index.html`, logging state changes to the browser console.
//!
//! Build with: `wasm-pack build --target web demos/landing_page`
//!
//! Then serve `demos/landing_page/` and open `index.html` in a browser.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;

use wasm_bindgen::prelude::*;

use vitrine_backend_web::{ConsoleSink, mount};
use vitrine_core::config::PageConfig;

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let page = mount(&document, PageConfig::bankist(), Box::new(ConsoleSink::new()))?;

    // The page stays interactive for its whole lifetime.
    core::mem::forget(page);

    Ok(())
}
