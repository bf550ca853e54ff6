// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: turns the marked-up sections of `index.html` into accordions.
//!
//! Build with: `wasm-pack build --target web demos/web_accordion`
//!
//! Then serve `demos/web_accordion/` and open `index.html` in a browser. Trace
//! events are logged with `console.debug`.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::format;

use wasm_bindgen::prelude::*;

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let enhanced = concertina_backend_web::enhance_document()?;
    let report = enhanced.report();
    web_sys::console::info_1(&JsValue::from_str(&format!(
        "concertina: {} accordions ready, {} skipped",
        report.ready.len(),
        report.skipped.len()
    )));
    enhanced.leak();
    Ok(())
}
