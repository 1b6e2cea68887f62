//! HTTP client for the geospatial backend.
//!
//! The backend exposes pre-computed assets behind a small JSON surface:
//! feature collections by asset id, boundary geometries, composed spatial
//! reductions, bounded random pixel samples, and an XYZ tile endpoint for
//! map layers. Every call here is a single stateless round trip; responses
//! are memoized in [`ResponseCache`].

use crate::asset::{GeometryHandle, RasterHandle};
use crate::cache::ResponseCache;
use crate::feature::FeatureCollection;
use crate::geometry::Geometry;
use crate::vis::VisParams;
use anyhow::{bail, Context};
use log::info;
use serde_json::{json, Value};

/// Sampling scale for reductions and pixel samples, in meters.
pub const REDUCE_SCALE_M: f64 = 100.0;

/// Upper bound on pixels scanned by a reduction, bounding cost/latency.
pub const REDUCE_MAX_PIXELS: f64 = 1e10;

/// Pixel budget for the distribution histogram. A bounded random sample
/// traded against statistical completeness; exact population histograms are
/// deliberately not requested.
pub const HISTOGRAM_SAMPLE_PIXELS: u32 = 5000;

/// Where the backend lives. Credentials and auth are the proxy's concern.
#[derive(Debug, Clone)]
pub struct GeeConfig {
    pub base_url: String,
}

impl Default for GeeConfig {
    fn default() -> Self {
        GeeConfig {
            base_url: "https://gee-proxy.biomass2025.org/v1".to_string(),
        }
    }
}

/// Backend client. Cheaply cloneable; clones share one response cache.
#[derive(Clone)]
pub struct GeeClient {
    config: GeeConfig,
    http: reqwest::Client,
    cache: ResponseCache,
}

impl GeeClient {
    pub fn new() -> GeeClient {
        GeeClient::with_config(GeeConfig::default())
    }

    pub fn with_config(config: GeeConfig) -> GeeClient {
        GeeClient {
            config,
            http: reqwest::Client::new(),
            cache: ResponseCache::new(),
        }
    }

    /// Fetch a table asset as a feature collection.
    pub async fn fetch_feature_collection(
        &self,
        asset_id: &str,
    ) -> anyhow::Result<FeatureCollection> {
        let url = format!("{}/table?asset={}", self.config.base_url, asset_id);
        let value = self.get_json(&url).await?;
        let fc: FeatureCollection = serde_json::from_value(value)
            .with_context(|| format!("malformed feature collection for {asset_id}"))?;
        info!("fetched {} features from {}", fc.len(), asset_id);
        Ok(fc)
    }

    /// Fetch a polygon asset's geometry.
    pub async fn fetch_geometry(&self, handle: &GeometryHandle) -> anyhow::Result<Geometry> {
        let url = format!("{}/geometry?asset={}", self.config.base_url, handle.asset_id);
        let value = self.get_json(&url).await?;
        let geometry: Geometry = serde_json::from_value(value)
            .with_context(|| format!("malformed geometry for {}", handle.asset_id))?;
        Ok(geometry)
    }

    /// Fetch the fixed park boundary.
    pub async fn fetch_boundary(&self) -> anyhow::Result<Geometry> {
        self.fetch_geometry(&GeometryHandle::boundary()).await
    }

    /// Run a composed mean/min/max reduction of one band, clipped to a
    /// geometry. The response keys follow `<band>_mean` / `_min` / `_max`;
    /// values are null when no valid pixels intersect.
    pub async fn reduce_region(
        &self,
        raster: &RasterHandle,
        geometry: &GeometryHandle,
        scale_m: f64,
        max_pixels: f64,
    ) -> anyhow::Result<Value> {
        let url = format!("{}/reduce", self.config.base_url);
        let body = json!({
            "asset": raster.asset_id,
            "band": raster.band,
            "reducers": ["mean", "min", "max"],
            "geometry_asset": geometry.asset_id,
            "scale": scale_m,
            "max_pixels": max_pixels,
        });
        self.post_json(&url, &body).await
    }

    /// Request a bounded random pixel sample of one band within a geometry.
    /// Null sample values (masked pixels) are dropped here.
    pub async fn sample_band(
        &self,
        raster: &RasterHandle,
        geometry: &GeometryHandle,
        scale_m: f64,
        num_pixels: u32,
    ) -> anyhow::Result<Vec<f64>> {
        let url = format!("{}/sample", self.config.base_url);
        let body = json!({
            "asset": raster.asset_id,
            "band": raster.band,
            "geometry_asset": geometry.asset_id,
            "scale": scale_m,
            "num_pixels": num_pixels,
        });
        let value = self.post_json(&url, &body).await?;
        let values = value
            .get("values")
            .and_then(Value::as_array)
            .with_context(|| format!("sample response for {} lacks values", raster.asset_id))?;
        Ok(values.iter().filter_map(Value::as_f64).collect())
    }

    /// XYZ tile URL template for a styled raster layer, consumed directly
    /// by the map widget.
    pub fn tile_url_template(&self, raster: &RasterHandle, vis: &VisParams) -> String {
        format!(
            "{}/tiles/{}/{{z}}/{{x}}/{{y}}.png?band={}&min={}&max={}&palette={}",
            self.config.base_url,
            raster.asset_id,
            vis.band,
            vis.min,
            vis.max,
            vis.palette_query(),
        )
    }

    async fn get_json(&self, url: &str) -> anyhow::Result<Value> {
        if let Some(hit) = self.cache.get(url) {
            return Ok(hit);
        }
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("request failed: {url}"))?;
        if !response.status().is_success() {
            bail!("backend returned {} for {url}", response.status());
        }
        let value: Value = response
            .json()
            .await
            .with_context(|| format!("non-JSON response: {url}"))?;
        self.cache.put(url, value.clone());
        Ok(value)
    }

    async fn post_json(&self, url: &str, body: &Value) -> anyhow::Result<Value> {
        let key = format!("{url} {body}");
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("request failed: {url}"))?;
        if !response.status().is_success() {
            bail!("backend returned {} for {url}", response.status());
        }
        let value: Value = response
            .json()
            .await
            .with_context(|| format!("non-JSON response: {url}"))?;
        self.cache.put(&key, value.clone());
        Ok(value)
    }
}

impl Default for GeeClient {
    fn default() -> Self {
        GeeClient::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::Year;

    #[test]
    fn tile_url_carries_band_range_and_palette() {
        let client = GeeClient::new();
        let raster = RasterHandle::agb(Year::new(2021).unwrap());
        let vis = VisParams::agb(&["#f7fcf5", "#00441b"]);
        let url = client.tile_url_template(&raster, &vis);
        assert!(url.contains("/tiles/projects/seventh-program-460820-u1/assets/Cattien/agb_2021/{z}/{x}/{y}.png"));
        assert!(url.contains("band=agbd"));
        assert!(url.contains("min=0"));
        assert!(url.contains("max=300"));
        assert!(url.contains("palette=f7fcf5,00441b"));
    }
}
