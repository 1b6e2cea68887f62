//! Overview page: project background, highlights, and a split-panel map
//! comparing one year's AGB against the 2021-2024 biomass trend.

use ctb_chart_ui::components::{ChartContainer, ErrorDisplay, LoadingSpinner, YearSelector};
use ctb_chart_ui::js_bridge;
use ctb_chart_ui::state::AppState;
use ctb_data::palette::Palette;
use ctb_gee::asset::{RasterHandle, Year};
use ctb_gee::client::GeeClient;
use ctb_gee::geometry::Geometry;
use ctb_gee::vis::VisParams;
use dioxus::prelude::*;
use log::warn;

const SPLIT_MAP_CONTAINER_ID: &str = "trend-split-map";

/// Project highlight figures shown in the side card.
const HIGHLIGHTS: [(&str, &str); 3] = [
    ("Area Coverage", "73,878 ha"),
    ("Model Accuracy", "80%+"),
    ("Years Analyzed", "2021–2024"),
];

/// The processing pipeline, step by step.
const STEPS: [(&str, &str, &str); 5] = [
    ("01", "Data Acquisition", "Collecting Landsat and Sentinel-2 satellite data."),
    ("02", "Data Processing", "Preprocessing and extraction of spectral and textural features."),
    ("03", "Machine Learning", "Training a Random Forest model with ground truth data."),
    ("04", "Prediction & Mapping", "Biomass prediction and visualization on an interactive map."),
    ("05", "Analysis & Monitoring", "Temporal analysis and monitoring of the biomass trend."),
];

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("home-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let client = use_hook(GeeClient::new);

    let mut boundary: Signal<Option<Geometry>> = use_signal(|| None);

    // ─── Effect 1: fetch the boundary once on mount ───
    let mount_client = client.clone();
    use_effect(move || {
        let client = mount_client.clone();
        js_bridge::init_charts();
        spawn(async move {
            match client.fetch_boundary().await {
                Ok(geometry) => boundary.set(Some(geometry)),
                Err(e) => {
                    warn!("boundary fetch failed: {e:#}");
                    state
                        .error_msg
                        .set(Some(format!("Error loading park boundary: {e}")));
                }
            }
            state.loading.set(false);
        });
    });

    // ─── Effect 2: split map whenever the year changes ───
    let map_client = client.clone();
    use_effect(move || {
        let year_raw = (state.selected_year)();
        let Some(geometry) = boundary.read().clone() else {
            return;
        };
        let year = match Year::new(year_raw) {
            Ok(year) => year,
            Err(e) => {
                state.error_msg.set(Some(e.to_string()));
                return;
            }
        };
        let Some((lon, lat)) = geometry.centroid() else {
            state
                .error_msg
                .set(Some("Park boundary has no usable geometry.".to_string()));
            return;
        };

        let client = map_client.clone();
        let agb = RasterHandle::agb(year);
        let trend = RasterHandle::gedi_trend();
        let agb_vis = VisParams::agb(Palette::Viridis.stops());
        let trend_vis = VisParams::agb_trend();

        let config = serde_json::json!({
            "center": [lat, lon],
            "zoom": 11,
            "boundary": geometry,
            "left": {
                "tileUrl": client.tile_url_template(&agb, &agb_vis),
                "layerName": format!("AGB {year}"),
                "legend": {
                    "label": format!("AGB {year} (ton/ha)"),
                    "min": agb_vis.min,
                    "max": agb_vis.max,
                    "palette": agb_vis.palette,
                },
            },
            "right": {
                "tileUrl": client.tile_url_template(&trend, &trend_vis),
                "layerName": "Trend AGB",
                "legend": {
                    "label": "Trend AGB 2021-2024 (ton/ha/year)",
                    "min": trend_vis.min,
                    "max": trend_vis.max,
                    "palette": trend_vis.palette,
                },
            },
        });
        js_bridge::render_split_map(SPLIT_MAP_CONTAINER_ID, &config.to_string());
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            div {
                style: "text-align: center; margin-bottom: 16px;",
                h2 {
                    style: "color: #238b45; margin: 0;",
                    "Aboveground Biomass Monitoring for Cat Tien National Park"
                }
                h5 {
                    style: "color: #A9A9A9; font-weight: 400; margin: 4px 0 0 0;",
                    "Harnessing AI & satellite data for a greener Vietnam"
                }
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            div {
                style: "display: flex; gap: 16px; align-items: flex-start;",

                div {
                    style: "flex: 2.5; background: rgba(35,139,69,0.12); border-radius: 16px; padding: 20px;",
                    h3 { style: "color: #238b45; margin-top: 0;", "About Biomass2025" }
                    p {
                        style: "line-height: 1.7;",
                        "Biomass2025 combines a Random Forest model with satellite "
                        "imagery to estimate aboveground biomass density across Cat "
                        "Tien National Park. The goal is to support forest "
                        "conservation and data-driven land management through remote "
                        "sensing."
                    }
                    p {
                        style: "line-height: 1.7; font-style: italic;",
                        "Join us in protecting Vietnam's natural heritage for generations to come."
                    }
                }

                div {
                    style: "flex: 1; background: #232323; border-radius: 14px; padding: 16px; color: #fff;",
                    div {
                        style: "text-align: center; font-weight: 600; margin-bottom: 8px;",
                        "Project Highlights"
                    }
                    for (label, value) in HIGHLIGHTS {
                        div {
                            style: "font-size: 13px; color: #A9A9A9; margin-bottom: 2px;",
                            "{label}"
                        }
                        div {
                            style: "font-size: 18px; font-weight: 700; margin-bottom: 10px;",
                            "{value}"
                        }
                    }
                }
            }

            h3 {
                style: "text-align: center; margin: 24px 0 8px 0;",
                "How it Works"
            }
            div {
                style: "display: flex; gap: 12px;",
                for (num, title, desc) in STEPS {
                    div {
                        style: "flex: 1; text-align: center;",
                        div {
                            style: "background-color: rgba(60, 90, 60, 0.25); border-radius: 50%; width: 50px; height: 50px; display: flex; align-items: center; justify-content: center; margin: 12px auto; font-weight: bold;",
                            "{num}"
                        }
                        h5 { style: "color: #9ACD32; margin: 0;", "{title}" }
                        p { style: "font-size: 12px;", "{desc}" }
                    }
                }
            }

            h3 { style: "margin: 24px 0 8px 0;", "Biomass Trend" }
            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                div {
                    style: "margin-bottom: 8px;",
                    YearSelector {}
                }
                ChartContainer {
                    id: SPLIT_MAP_CONTAINER_ID.to_string(),
                    min_height: 650,
                }
            }

            div {
                style: "text-align: center; margin-top: 32px; padding: 24px; background-color: rgba(60, 90, 60, 0.25);",
                p {
                    style: "margin: 0; opacity: 0.7; font-size: 13px;",
                    "© 2025 | BIOMASS2025"
                    br {}
                    "Aboveground Biomass Monitoring System — developed for academic research purposes."
                }
            }
        }
    }
}
