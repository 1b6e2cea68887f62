//! Scalar summaries of a spatial reduction.

use serde_json::Value;

/// Mean/min/max of one band over a geometry. `None` means the backend had
/// no valid pixels for that statistic (e.g. the geometry misses the raster
/// extent); display accessors substitute zero so metric panels render
/// instead of crashing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatSummary {
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl StatSummary {
    /// Pull `<band>_mean` / `<band>_min` / `<band>_max` out of a reduction
    /// response. Missing keys and JSON nulls both map to `None`.
    pub fn from_reduction(response: &Value, band: &str) -> StatSummary {
        let read = |stat: &str| {
            response
                .get(format!("{band}_{stat}"))
                .and_then(Value::as_f64)
        };
        StatSummary {
            mean: read("mean"),
            min: read("min"),
            max: read("max"),
        }
    }

    pub fn display_mean(&self) -> f64 {
        self.mean.unwrap_or(0.0)
    }

    pub fn display_min(&self) -> f64 {
        self.min.unwrap_or(0.0)
    }

    pub fn display_max(&self) -> f64 {
        self.max.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_band_suffixed_keys() {
        let resp = json!({ "agbd_mean": 142.5, "agbd_min": 0.0, "agbd_max": 297.3 });
        let stats = StatSummary::from_reduction(&resp, "agbd");
        assert_eq!(stats.mean, Some(142.5));
        assert_eq!(stats.min, Some(0.0));
        assert_eq!(stats.max, Some(297.3));
    }

    #[test]
    fn null_and_missing_stats_become_none_and_display_as_zero() {
        let resp = json!({ "agbd_mean": null, "agbd_max": 12.0 });
        let stats = StatSummary::from_reduction(&resp, "agbd");
        assert_eq!(stats.mean, None);
        assert_eq!(stats.min, None);
        assert_eq!(stats.display_mean(), 0.0);
        assert_eq!(stats.display_min(), 0.0);
        assert_eq!(stats.display_max(), 12.0);
    }
}
