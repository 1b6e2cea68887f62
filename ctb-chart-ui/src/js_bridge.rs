//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart renderers (D3.js) and the map widget (Leaflet) live in
//! `assets/js/*.js`, evaluated as globals (no ES modules) and exposed via
//! `window.*`. This module serializes data on the Rust side and calls those
//! globals, polling until the libraries, the scripts, and the target DOM
//! node are all ready.

// Embed the renderer JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static HISTOGRAM_CHART_JS: &str = include_str!("../assets/js/histogram-chart.js");
static DONUT_CHART_JS: &str = include_str!("../assets/js/donut-chart.js");
static BIOMASS_MAP_JS: &str = include_str!("../assets/js/biomass-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('CTB JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart and map scripts with a wait-for-libraries polling loop.
///
/// The JS files declare functions like `renderAgbLineChart(...)`. To make
/// them globally accessible (not block-scoped inside the setInterval
/// callback) they are evaluated at global scope via indirect eval once both
/// D3 and Leaflet are present, then promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        LINE_CHART_JS,
        HISTOGRAM_CHART_JS,
        DONUT_CHART_JS,
        BIOMASS_MAP_JS,
    ]
    .join("\n");

    // Stash the scripts on window so the polling callback can eval them at
    // global scope later.
    let store_js = format!(
        "window.__ctbChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLibs = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof L !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__ctbChartScripts);
                    delete window.__ctbChartScripts;
                    if (typeof renderAgbLineChart !== 'undefined') window.renderAgbLineChart = renderAgbLineChart;
                    if (typeof renderAgbHistogram !== 'undefined') window.renderAgbHistogram = renderAgbHistogram;
                    if (typeof renderAccuracyDonut !== 'undefined') window.renderAccuracyDonut = renderAccuracyDonut;
                    if (typeof renderBiomassMap !== 'undefined') window.renderBiomassMap = renderBiomassMap;
                    if (typeof renderSplitMap !== 'undefined') window.renderSplitMap = renderSplitMap;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__ctbChartsReady = true;
                    console.log('CTB charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Call `window.<func>(container_id, ...json_args)` once the scripts are
/// initialized and the container exists in the DOM.
fn render_when_ready(func: &str, container_id: &str, json_args: &[&str]) {
    let mut args = vec![format!("'{container_id}'")];
    for arg in json_args {
        let escaped = arg.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "");
        args.push(format!("'{escaped}'"));
    }
    let arg_list = args.join(", ");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__ctbChartsReady &&
                    typeof window.{func} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{func}({arg_list});
                    }} catch(e) {{ console.error('[CTB] {func} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a year-keyed line chart (AGB trend, RMSE trend).
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderAgbLineChart", container_id, &[data_json, config_json]);
}

/// Render the AGB distribution histogram from pre-binned data.
pub fn render_histogram_chart(container_id: &str, bins_json: &str, config_json: &str) {
    render_when_ready("renderAgbHistogram", container_id, &[bins_json, config_json]);
}

/// Render the model-accuracy donut.
pub fn render_donut_chart(container_id: &str, spec_json: &str) {
    render_when_ready("renderAccuracyDonut", container_id, &[spec_json]);
}

/// Render the interactive Leaflet map with one styled raster layer and the
/// park boundary outline.
pub fn render_biomass_map(container_id: &str, config_json: &str) {
    render_when_ready("renderBiomassMap", container_id, &[config_json]);
}

/// Render the split-panel comparison map (left/right tile layers).
pub fn render_split_map(container_id: &str, config_json: &str) {
    render_when_ready("renderSplitMap", container_id, &[config_json]);
}

/// Destroy/clean up a chart or map in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) {{ if (el._ctbMap) {{ el._ctbMap.remove(); el._ctbMap = null; }} el.innerHTML = ''; }}",
        container_id
    ));
}
