//! Reusable Dioxus RSX components for the dashboard pages.

mod chart_container;
mod error_display;
mod info_notice;
mod loading_spinner;
mod metric_card;
mod palette_selector;
mod panel_header;
mod tab_bar;
mod year_selector;

pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use info_notice::InfoNotice;
pub use loading_spinner::LoadingSpinner;
pub use metric_card::MetricCard;
pub use palette_selector::PaletteSelector;
pub use panel_header::PanelHeader;
pub use tab_bar::TabBar;
pub use year_selector::YearSelector;
