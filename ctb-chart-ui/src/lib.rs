//! Shared Dioxus components and JS bridge for the dashboard pages.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js chart and Leaflet map
//!   functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, panels, metrics)

pub mod components;
pub mod js_bridge;
pub mod state;
