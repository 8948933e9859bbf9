/// Tabitha - browser extension skeleton
/// Built with Rust + WASM + Yew

pub mod bridge;
pub mod diagnostics;
pub mod orchestrator;
pub mod startup;
pub mod ui;

use std::cell::OnceCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::bridge::WebExtensionBridge;
use crate::diagnostics::ConsoleSink;
use crate::orchestrator::BackgroundContext;

// Composition root for the background context. Lives here so the
// orchestrator outlives start_background() and stays around for the
// worker's whole lifetime.
thread_local! {
    static BACKGROUND: OnceCell<BackgroundContext> = const { OnceCell::new() };
}

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Entry point for the background service worker bundle
#[wasm_bindgen]
pub fn start_background() {
    BACKGROUND.with(|cell| {
        let context = cell.get_or_init(|| BackgroundContext::new(Rc::new(ConsoleSink)));
        startup::run_background_startup(&WebExtensionBridge, &ConsoleSink, || {
            context.orchestrator().borrow_mut().initialize()
        });
    });
}

// Entry point for the hub page bundle
#[wasm_bindgen]
pub fn start_ui() {
    ui::mount(&ConsoleSink);
}
