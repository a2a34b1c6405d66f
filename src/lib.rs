//! Behavior layer for the server-rendered quiz pages.
//!
//! This crate is compiled to WebAssembly and runs in the browser. The host
//! page owns all markup; this crate only attaches behaviors to it — dismissing
//! notification banners, guarding test submission, restoring a previously
//! submitted attempt, animating cards and the score gauge. Wiring happens once
//! at module start; the page also calls back into the exported guard and modal
//! functions from inline handlers.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | One-shot page wiring, owned by module start |
//! | [`notice`] | Notification banner auto-dismiss |
//! | [`submit`] | Submission confirmation guard |
//! | [`modal`] | Retake confirmation modal toggle |
//! | [`review`] | Previous-answer restoration and form lock-down |
//! | [`reveal`] | Scroll-in entrance animation observer |
//! | [`progress`] | Answer-change highlight and progress diagnostics |
//! | [`gauge`] | Circular score gauge animation |
//! | [`hover`] | Answer-option hover affordance |
//! | [`consts`] | Selectors, delays, and style values |

pub mod consts;
pub mod controller;
pub mod dom;
pub mod gauge;
pub mod hover;
pub mod modal;
pub mod notice;
pub mod progress;
pub mod review;
pub mod reveal;
pub mod submit;

use wasm_bindgen::prelude::*;

/// Module entry point: set up logging and wire the page.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        // A logger is already registered (the module was started twice);
        // keep the existing one.
        log::debug!("logger already registered");
    }
    controller::install();
}

/// Submission guard wired to the test form's inline `onsubmit` handler.
///
/// Returns the user's decision; the form aborts submission on `false`.
#[wasm_bindgen(js_name = confirmSubmit)]
#[must_use]
pub fn confirm_submit() -> bool {
    submit::confirm_submit()
}

/// Open the retake confirmation modal. Wired to the retake button.
#[wasm_bindgen(js_name = showRetakeConfirm)]
pub fn show_retake_confirm() {
    modal::show();
}

/// Close the retake confirmation modal. Wired to its cancel button.
#[wasm_bindgen(js_name = closeRetakeModal)]
pub fn close_retake_modal() {
    modal::close();
}
