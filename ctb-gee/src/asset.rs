//! Canonical identifiers for the Cat Tien asset catalog.
//!
//! Every raster and table this dashboard consumes is a pre-computed asset
//! living on the geospatial backend under a fixed project. Paths are
//! composed here, in one place, so a backend-side rename breaks loudly in
//! exactly one module.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend project that hosts all Cat Tien assets.
pub const PROJECT: &str = "projects/seventh-program-460820-u1";

/// Fixed park boundary asset (polygon feature collection).
pub const BOUNDARY_ASSET: &str = "projects/seventh-program-460820-u1/assets/Cat_tien_ranh_gioi";

/// Per-year total AGB table: rows of `{year, total_agb}`.
pub const AGB_TOTALS_TABLE: &str = "projects/seventh-program-460820-u1/assets/Cattien/AGBP_per_year";

/// Per-year AGB change table: rows of `{year, change}`.
pub const AGB_CHANGE_TABLE: &str =
    "projects/seventh-program-460820-u1/assets/Cattien/AGBP_Diff_per_year";

/// Per-year model RMSE table: rows of `{year, rmse}`.
pub const RMSE_TABLE: &str = "projects/seventh-program-460820-u1/assets/Cattien/RMSE_per_year";

/// The single band of interest on every AGB raster (tons per hectare).
pub const AGB_BAND: &str = "agbd";

/// Years with pre-computed AGB assets on the backend.
pub const SUPPORTED_YEARS: [i32; 4] = [2021, 2022, 2023, 2024];

/// A year outside the supported asset catalog.
///
/// Out-of-set years must fail fast rather than silently fall back to a
/// default year, so this is a hard error, not a clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedYear(pub i32);

impl fmt::Display for UnsupportedYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no AGB assets for year {} (supported: {:?})",
            self.0, SUPPORTED_YEARS
        )
    }
}

impl std::error::Error for UnsupportedYear {}

/// A year known to have assets in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Year(i32);

impl Year {
    /// Validate a raw year against the supported set.
    pub fn new(year: i32) -> Result<Year, UnsupportedYear> {
        if SUPPORTED_YEARS.contains(&year) {
            Ok(Year(year))
        } else {
            Err(UnsupportedYear(year))
        }
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// All supported years, in ascending order.
    pub fn all() -> impl Iterator<Item = Year> {
        SUPPORTED_YEARS.into_iter().map(Year)
    }
}

impl TryFrom<i32> for Year {
    type Error = UnsupportedYear;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Year::new(value)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque reference to a remote raster with its band of interest already
/// selected. Carries no pixel data; sampling and reduction happen on the
/// backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterHandle {
    pub asset_id: String,
    pub band: String,
}

impl RasterHandle {
    /// The AGB raster for a validated year, band `agbd` selected.
    pub fn agb(year: Year) -> RasterHandle {
        RasterHandle {
            asset_id: format!("{PROJECT}/assets/Cattien/agb_{year}"),
            band: AGB_BAND.to_string(),
        }
    }

    /// The 2021-2024 GEDI biomass trend raster (tons per hectare per year).
    pub fn gedi_trend() -> RasterHandle {
        RasterHandle {
            asset_id: format!("{PROJECT}/assets/Cattien/gedi_trend_2021_2024"),
            band: AGB_BAND.to_string(),
        }
    }
}

/// Opaque reference to a remote polygon asset, used as a spatial bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryHandle {
    pub asset_id: String,
}

impl GeometryHandle {
    /// The fixed park boundary.
    pub fn boundary() -> GeometryHandle {
        GeometryHandle {
            asset_id: BOUNDARY_ASSET.to_string(),
        }
    }
}

/// Observed-vs-predicted validation table for one year: rows of
/// `{agbd, agbd_predicted}`.
pub fn observed_vs_predicted_table(year: Year) -> String {
    format!("{PROJECT}/assets/Cattien/Observed_vs_Predicted_{year}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_years_produce_handles_with_the_year_in_the_path() {
        for raw in SUPPORTED_YEARS {
            let year = Year::new(raw).unwrap();
            let handle = RasterHandle::agb(year);
            assert!(
                handle.asset_id.contains(&raw.to_string()),
                "asset id {} should contain {}",
                handle.asset_id,
                raw
            );
            assert_eq!(handle.band, AGB_BAND);
        }
    }

    #[test]
    fn unsupported_year_fails_fast() {
        for raw in [2019, 2020, 2025, 0, -2021] {
            assert_eq!(Year::new(raw), Err(UnsupportedYear(raw)));
        }
    }

    #[test]
    fn year_try_from_matches_new() {
        assert_eq!(Year::try_from(2022), Year::new(2022));
        assert!(Year::try_from(1999).is_err());
    }

    #[test]
    fn agb_asset_path_is_canonical() {
        let handle = RasterHandle::agb(Year::new(2022).unwrap());
        assert_eq!(
            handle.asset_id,
            "projects/seventh-program-460820-u1/assets/Cattien/agb_2022"
        );
    }

    #[test]
    fn observed_vs_predicted_path_is_year_keyed() {
        let id = observed_vs_predicted_table(Year::new(2024).unwrap());
        assert!(id.ends_with("Observed_vs_Predicted_2024"));
    }
}
