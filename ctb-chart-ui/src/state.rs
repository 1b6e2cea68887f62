//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals shared by the dashboard pages
//! into one struct provided via `use_context_provider`. Child components
//! retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;

/// Shared state for the dashboard page apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the page is still loading its backend data
    pub loading: Signal<bool>,
    /// Error message shown inline when a backend call fails
    pub error_msg: Signal<Option<String>>,
    /// Informational notice (e.g. "no RMSE data for this year")
    pub info_msg: Signal<Option<String>>,
    /// Currently selected year (always one of the supported set)
    pub selected_year: Signal<i32>,
    /// Currently selected palette label
    pub selected_palette: Signal<String>,
    /// Active tab index on the map page
    pub active_tab: Signal<usize>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            info_msg: Signal::new(None),
            selected_year: Signal::new(ctb_gee::asset::SUPPORTED_YEARS[0]),
            selected_palette: Signal::new("Greens".to_string()),
            active_tab: Signal::new(0),
        }
    }
}
