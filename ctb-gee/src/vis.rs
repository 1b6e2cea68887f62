//! Raster visualization parameters for map tile requests.

use serde::Serialize;

/// Display range and color ramp applied server-side when tiling a raster.
#[derive(Debug, Clone, Serialize)]
pub struct VisParams {
    pub band: String,
    pub min: f64,
    pub max: f64,
    pub palette: Vec<String>,
}

/// Diverging ramp for the biomass trend layer (loss red, gain green).
const TREND_PALETTE: [&str; 5] = ["#d73027", "#fc8d59", "#fee08b", "#d9ef8b", "#91cf60"];

impl VisParams {
    /// Display range for AGB rasters: 0-300 t/ha.
    pub fn agb(palette: &[&str]) -> VisParams {
        VisParams {
            band: crate::asset::AGB_BAND.to_string(),
            min: 0.0,
            max: 300.0,
            palette: palette.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Display range for the GEDI trend raster: -20..5 t/ha/yr.
    pub fn agb_trend() -> VisParams {
        VisParams::custom(-20.0, 5.0, &TREND_PALETTE)
    }

    pub fn custom(min: f64, max: f64, palette: &[&str]) -> VisParams {
        VisParams {
            band: crate::asset::AGB_BAND.to_string(),
            min,
            max,
            palette: palette.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Palette as a comma-joined query value, `#` stripped, the form the
    /// tile endpoint expects.
    pub fn palette_query(&self) -> String {
        self.palette
            .iter()
            .map(|c| c.trim_start_matches('#'))
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agb_range_is_0_to_300() {
        let vis = VisParams::agb(&["#112233", "#445566"]);
        assert_eq!(vis.min, 0.0);
        assert_eq!(vis.max, 300.0);
        assert_eq!(vis.band, "agbd");
    }

    #[test]
    fn palette_query_strips_hashes() {
        let vis = VisParams::agb(&["#112233", "445566"]);
        assert_eq!(vis.palette_query(), "112233,445566");
    }
}
