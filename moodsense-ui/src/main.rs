//! MoodSense Dashboard
//!
//! Workforce mood check-ins and the HR view, built with Leptos (WASM).
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! It talks to the MoodSense API over HTTP. View logic lives in plain state
//! machines under `state`, which the components keep in signals.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
