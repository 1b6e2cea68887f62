//! Biomass Distribution Map page.
//!
//! Visualize, compare, and analyze aboveground biomass across years and
//! color schemes.
//!
//! Data flow:
//! 1. On mount: fetch the park boundary and the three per-year summary
//!    tables (total AGB, annual change, model RMSE), then initialize the
//!    chart scripts.
//! 2. On year/palette change: re-render the Leaflet map from the selected
//!    year's tile layer, and re-request the year's statistics and
//!    distribution sample.
//! 3. On year or RMSE-table change: re-request the year's validation table
//!    and re-render the model-performance donut.
//!
//! Every backend failure is reported inline and replaced by a safe default
//! (empty table, zero statistic, no-render donut) so sibling panels keep
//! rendering.

use ctb_chart_ui::components::{
    ChartContainer, ErrorDisplay, InfoNotice, LoadingSpinner, MetricCard, PaletteSelector,
    PanelHeader, TabBar, YearSelector,
};
use ctb_chart_ui::js_bridge;
use ctb_chart_ui::state::AppState;
use ctb_data::accuracy;
use ctb_data::histogram;
use ctb_data::palette::Palette;
use ctb_data::stats::StatSummary;
use ctb_data::table::RecordTable;
use ctb_gee::asset::{
    observed_vs_predicted_table, GeometryHandle, RasterHandle, Year, AGB_CHANGE_TABLE,
    AGB_TOTALS_TABLE, BOUNDARY_ASSET, RMSE_TABLE,
};
use ctb_gee::client::{
    GeeClient, HISTOGRAM_SAMPLE_PIXELS, REDUCE_MAX_PIXELS, REDUCE_SCALE_M,
};
use ctb_gee::geometry::Geometry;
use ctb_gee::vis::VisParams;
use dioxus::prelude::*;
use log::{info, warn};

/// DOM ids for the JS-rendered widgets.
const MAP_CONTAINER_ID: &str = "biomass-map";
const DONUT_CONTAINER_ID: &str = "accuracy-donut";
const AGB_CHART_ID: &str = "total-agb-chart";
const CHANGE_CHART_ID: &str = "agb-change-chart";
const RMSE_CHART_ID: &str = "rmse-chart";
const HIST_CHART_ID: &str = "agb-histogram";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("biomass-map-root"))
        .launch(App);
}

/// All asset ids the page requests when a year is selected. Kept as a pure
/// function so the request plan is testable: only the selected year's
/// assets plus the fixed boundary and summary tables appear.
fn assets_for_year(year: Year) -> Vec<String> {
    vec![
        RasterHandle::agb(year).asset_id,
        BOUNDARY_ASSET.to_string(),
        observed_vs_predicted_table(year),
        AGB_TOTALS_TABLE.to_string(),
        AGB_CHANGE_TABLE.to_string(),
        RMSE_TABLE.to_string(),
    ]
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let client = use_hook(GeeClient::new);

    let mut boundary: Signal<Option<Geometry>> = use_signal(|| None);
    let mut totals_table: Signal<RecordTable> =
        use_signal(|| RecordTable::empty(&["year", "total_agb"]));
    let mut change_table: Signal<RecordTable> =
        use_signal(|| RecordTable::empty(&["year", "change"]));
    let mut rmse_table: Signal<RecordTable> = use_signal(|| RecordTable::empty(&["year", "rmse"]));
    let mut mean_agb: Signal<Option<f64>> = use_signal(|| None);
    let mut donut_ready: Signal<bool> = use_signal(|| false);

    // ─── Effect 1: boundary + summary tables, once on mount ───
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

            // A failed table fetch reports and falls back to an empty table
            // so the tab panels can branch on emptiness.
            let fetch_table = |asset: &'static str, fields: &'static [&'static str]| {
                let client = client.clone();
                async move {
                    match client.fetch_feature_collection(asset).await {
                        Ok(fc) => RecordTable::from_features(&fc, fields),
                        Err(e) => {
                            warn!("table fetch failed for {asset}: {e:#}");
                            state
                                .error_msg
                                .set(Some(format!("Error loading feature collections: {e}")));
                            RecordTable::empty(fields)
                        }
                    }
                }
            };

            let mut totals = fetch_table(AGB_TOTALS_TABLE, &["year", "total_agb"]).await;
            totals.sort_by("year");
            totals_table.set(totals);

            let mut change = fetch_table(AGB_CHANGE_TABLE, &["year", "change"]).await;
            change.sort_by("year");
            change_table.set(change);

            let mut rmse = fetch_table(RMSE_TABLE, &["year", "rmse"]).await;
            rmse.sort_by("year");
            rmse_table.set(rmse);

            state.loading.set(false);
        });
    });

    // ─── Effect 2: map layer, stats, histogram per year/palette ───
    let year_client = client.clone();
    use_effect(move || {
        let year_raw = (state.selected_year)();
        let palette_label = (state.selected_palette)();
        let Some(geometry) = boundary.read().clone() else {
            return;
        };

        let year = match Year::new(year_raw) {
            Ok(year) => year,
            Err(e) => {
                // Out-of-set years never fall back to a default asset.
                state.error_msg.set(Some(e.to_string()));
                return;
            }
        };
        let palette = Palette::from_label(&palette_label).unwrap_or(Palette::Greens);
        info!(
            "rendering year {year} (palette {}), request plan: {:?}",
            palette.label(),
            assets_for_year(year)
        );

        let raster = RasterHandle::agb(year);
        let bound = GeometryHandle::boundary();
        let client = year_client.clone();

        // Map widget: centroid-centered, styled tile layer, boundary outline.
        let vis = VisParams::agb(palette.stops());
        if let Some((lon, lat)) = geometry.centroid() {
            let map_config = serde_json::json!({
                "center": [lat, lon],
                "zoom": 11,
                "tileUrl": client.tile_url_template(&raster, &vis),
                "layerName": format!("AGB {year}"),
                "boundary": geometry,
                "legend": {
                    "label": "AGB (ton/Ha)",
                    "min": vis.min,
                    "max": vis.max,
                    "palette": vis.palette,
                },
            });
            js_bridge::render_biomass_map(MAP_CONTAINER_ID, &map_config.to_string());
        } else {
            state
                .error_msg
                .set(Some("Park boundary has no usable geometry.".to_string()));
        }

        // Statistics panel: composed mean/min/max reduction over the boundary.
        let stats_client = client.clone();
        let stats_raster = raster.clone();
        let stats_bound = bound.clone();
        spawn(async move {
            match stats_client
                .reduce_region(&stats_raster, &stats_bound, REDUCE_SCALE_M, REDUCE_MAX_PIXELS)
                .await
            {
                Ok(response) => {
                    let stats = StatSummary::from_reduction(&response, &stats_raster.band);
                    // None means no valid pixels; display zero, never crash.
                    mean_agb.set(Some(stats.display_mean()));
                }
                Err(e) => {
                    warn!("stats reduction failed: {e:#}");
                    state
                        .error_msg
                        .set(Some(format!("Error calculating stats: {e}")));
                    mean_agb.set(Some(0.0));
                }
            }
        });

        // Distribution histogram: bounded random sample, never the full raster.
        let hist_client = client.clone();
        spawn(async move {
            match hist_client
                .sample_band(&raster, &bound, REDUCE_SCALE_M, HISTOGRAM_SAMPLE_PIXELS)
                .await
            {
                Ok(values) => {
                    // Empty samples and degenerate ranges both come back as
                    // zero bins; clear the panel instead of drawing.
                    let bins = histogram::bin_values(&values, histogram::BIN_WIDTH);
                    if bins.is_empty() {
                        info!("unusable AGB sample for {year}");
                        js_bridge::destroy_chart(HIST_CHART_ID);
                    } else {
                        let config = serde_json::json!({
                            "title": format!("AGB Distribution (Histogram) {year}"),
                            "xAxisLabel": "AGB (ton/ha)",
                            "yAxisLabel": "Pixel Count",
                            "color": "#41ab5d",
                        });
                        js_bridge::render_histogram_chart(
                            HIST_CHART_ID,
                            &histogram::to_chart_json(&bins).to_string(),
                            &config.to_string(),
                        );
                    }
                }
                Err(e) => {
                    warn!("histogram sample failed: {e:#}");
                    state
                        .error_msg
                        .set(Some(format!("Could not build histogram: {e}")));
                    js_bridge::destroy_chart(HIST_CHART_ID);
                }
            }
        });
    });

    // ─── Effect 3: model-performance donut per year and RMSE table ───
    // Subscribed separately from the map effect: the RMSE table arriving
    // after mount must refresh the donut without rebuilding the map widget.
    let donut_client = client.clone();
    use_effect(move || {
        let year_raw = (state.selected_year)();
        let rmse_rows = rmse_table.read().clone();
        // Unsupported years are already reported by the map effect.
        let Ok(year) = Year::new(year_raw) else {
            return;
        };
        let client = donut_client.clone();

        // RMSE over mean observed AGB.
        spawn(async move {
            donut_ready.set(false);
            let observed = match client
                .fetch_feature_collection(&observed_vs_predicted_table(year))
                .await
            {
                Ok(fc) => RecordTable::from_features(&fc, &["agbd", "agbd_predicted"]),
                Err(e) => {
                    warn!("validation table fetch failed: {e:#}");
                    state
                        .error_msg
                        .set(Some(format!("Error loading performance data: {e}")));
                    RecordTable::empty(&["agbd", "agbd_predicted"])
                }
            };

            let rmse = rmse_rows
                .row_where("year", year.value() as f64)
                .and_then(|row| row.get("rmse").copied().flatten());
            let mean_observed = observed.mean("agbd");

            match (rmse, mean_observed) {
                (Some(rmse), Some(mean)) => match accuracy::error_percent(rmse, mean) {
                    Some(error_pct) => {
                        state.info_msg.set(None);
                        donut_ready.set(true);
                        js_bridge::render_donut_chart(
                            DONUT_CONTAINER_ID,
                            &accuracy::donut_spec(error_pct).to_string(),
                        );
                    }
                    None => {
                        info!("mean observed AGB is zero for {year}; skipping donut");
                        js_bridge::destroy_chart(DONUT_CONTAINER_ID);
                        state
                            .info_msg
                            .set(Some("No usable observed data for this year.".to_string()));
                    }
                },
                _ => {
                    info!("no RMSE or observed data for {year}");
                    js_bridge::destroy_chart(DONUT_CONTAINER_ID);
                    state
                        .info_msg
                        .set(Some("No RMSE or observed data for this year.".to_string()));
                }
            }
        });
    });

    // ─── Effect 4: trend line charts whenever the tables change ───
    use_effect(move || {
        let totals = totals_table.read().clone();
        let change = change_table.read().clone();
        let rmse = rmse_table.read().clone();

        render_year_line(AGB_CHART_ID, &totals, "total_agb", "AGB (ton)", "ton");
        render_year_line(CHANGE_CHART_ID, &change, "change", "Change (ton)", "ton");
        render_year_line(RMSE_CHART_ID, &rmse, "rmse", "RMSE (ton/Ha)", "ton/Ha");
    });

    // ─── Render ───
    let active_tab = (state.active_tab)();
    let totals_empty = totals_table.read().is_empty();
    let rmse_empty = rmse_table.read().is_empty();
    let mean_display = match *mean_agb.read() {
        Some(mean) => format!("{mean:.1} ton/ha"),
        None => "…".to_string(),
    };
    let donut_hidden = !*donut_ready.read();

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            PanelHeader {
                title: "Biomass Distribution Map".to_string(),
                help: "Visualize, compare, and analyze aboveground biomass across years and color schemes".to_string(),
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; gap: 16px; margin: 8px 0; align-items: center;",
                    YearSelector {}
                    PaletteSelector {}
                }

                div {
                    style: "display: flex; gap: 16px; align-items: flex-start;",

                    div {
                        style: "flex: 3;",
                        ChartContainer {
                            id: MAP_CONTAINER_ID.to_string(),
                            min_height: 600,
                        }
                    }

                    div {
                        style: "flex: 1;",
                        h4 { style: "margin: 0 0 6px 0;", "Statistics" }
                        MetricCard {
                            label: format!("Average AGB {}", (state.selected_year)()),
                            value: mean_display,
                            help: "Average aboveground biomass value per hectare (density)".to_string(),
                        }

                        h4 { style: "margin: 12px 0 6px 0;", "Model Performance" }
                        if let Some(msg) = state.info_msg.read().as_ref() {
                            InfoNotice { message: msg.clone() }
                        }
                        ChartContainer {
                            id: DONUT_CONTAINER_ID.to_string(),
                            min_height: 160,
                            hidden: donut_hidden,
                        }
                    }
                }

                TabBar {
                    labels: vec![
                        "Total Aboveground Biomass".to_string(),
                        "Model RMSE".to_string(),
                        "Biomass Distribution".to_string(),
                    ],
                }

                // Panels stay mounted so the JS-rendered charts survive tab
                // switches; visibility is toggled per tab.
                div {
                    if active_tab == 0 && totals_empty {
                        InfoNotice { message: "Total aboveground biomass data is not available.".to_string() }
                    }
                    if active_tab == 0 {
                        PanelHeader {
                            title: "Total Aboveground Biomass 2021 - 2024".to_string(),
                            help: "The total mass of living vegetation above the ground surface within the park".to_string(),
                        }
                    }
                    ChartContainer {
                        id: AGB_CHART_ID.to_string(),
                        min_height: 300,
                        hidden: active_tab != 0,
                    }
                    ChartContainer {
                        id: CHANGE_CHART_ID.to_string(),
                        min_height: 300,
                        hidden: active_tab != 0,
                    }

                    if active_tab == 1 && rmse_empty {
                        InfoNotice { message: "Model RMSE data is not available.".to_string() }
                    }
                    if active_tab == 1 {
                        PanelHeader {
                            title: "Model RMSE 2021 - 2024".to_string(),
                            help: "Average difference between predicted and observed biomass".to_string(),
                        }
                    }
                    ChartContainer {
                        id: RMSE_CHART_ID.to_string(),
                        min_height: 300,
                        hidden: active_tab != 1,
                    }

                    if active_tab == 2 {
                        PanelHeader {
                            title: "Aboveground Biomass Distribution".to_string(),
                            help: "Histogram of AGB (ton/ha) from a bounded random pixel sample".to_string(),
                        }
                    }
                    ChartContainer {
                        id: HIST_CHART_ID.to_string(),
                        min_height: 300,
                        hidden: active_tab != 2,
                    }
                }

                Footer {}
            }
        }
    }
}

/// Render one year-keyed line chart from a sorted table; empty tables clear
/// the container instead of drawing.
fn render_year_line(
    container_id: &str,
    table: &RecordTable,
    value_field: &str,
    y_label: &str,
    y_unit: &str,
) {
    if table.is_empty() {
        js_bridge::destroy_chart(container_id);
        return;
    }
    let points: Vec<serde_json::Value> = table
        .points("year", value_field)
        .into_iter()
        .map(|(year, value)| serde_json::json!({ "year": year, "value": value }))
        .collect();
    let config = serde_json::json!({
        "yAxisLabel": y_label,
        "yUnit": y_unit,
        "color": "#9ACD32",
    });
    js_bridge::render_line_chart(
        container_id,
        &serde_json::Value::Array(points).to_string(),
        &config.to_string(),
    );
}

#[component]
fn Footer() -> Element {
    rsx! {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2022_requests_only_2022_assets_plus_fixed_ones() {
        let plan = assets_for_year(Year::new(2022).unwrap());
        assert!(plan.iter().any(|id| id.ends_with("agb_2022")));
        assert!(plan.iter().any(|id| id == BOUNDARY_ASSET));
        for id in &plan {
            for other in [2021, 2023, 2024] {
                assert!(
                    !id.contains(&other.to_string()),
                    "plan for 2022 must not touch {other}: {id}"
                );
            }
        }
    }

    #[test]
    fn request_plan_covers_every_panel() {
        let plan = assets_for_year(Year::new(2021).unwrap());
        assert!(plan.iter().any(|id| id.ends_with("Observed_vs_Predicted_2021")));
        assert!(plan.contains(&AGB_TOTALS_TABLE.to_string()));
        assert!(plan.contains(&RMSE_TABLE.to_string()));
    }
}
