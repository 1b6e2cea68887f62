//! Model-accuracy donut math.
//!
//! The donut shows RMSE as a percentage of the mean observed AGB. A zero
//! or invalid mean short-circuits to "nothing to render" rather than
//! dividing by zero; the page logs an informational message instead.

use serde_json::{json, Value};

/// Donut segment colors: error red, accuracy green.
pub const ERROR_COLOR: &str = "#E74C3C";
pub const ACCURACY_COLOR: &str = "#4CAF50";

/// RMSE over the mean observed value, as a percentage. `None` when the
/// mean is zero or either input is not a finite, usable number.
pub fn error_percent(rmse: f64, mean_observed: f64) -> Option<f64> {
    if !rmse.is_finite() || !mean_observed.is_finite() || mean_observed == 0.0 {
        return None;
    }
    Some(rmse / mean_observed * 100.0)
}

/// Center label for the donut, e.g. error 15.0 -> "85.0%".
pub fn accuracy_label(error_pct: f64) -> String {
    format!("{:.1}%", 100.0 - error_pct)
}

/// Segment data for the donut renderer.
pub fn donut_spec(error_pct: f64) -> Value {
    json!({
        "segments": [
            { "category": "Error", "value": error_pct, "color": ERROR_COLOR },
            { "category": "Accuracy", "value": 100.0 - error_pct, "color": ACCURACY_COLOR },
        ],
        "label": accuracy_label(error_pct),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rmse_15_over_mean_100_is_15_percent_error() {
        let pct = error_percent(15.0, 100.0).unwrap();
        assert_eq!(pct, 15.0);
        assert_eq!(accuracy_label(pct), "85.0%");
    }

    #[test]
    fn zero_mean_short_circuits() {
        assert_eq!(error_percent(15.0, 0.0), None);
    }

    #[test]
    fn non_finite_inputs_short_circuit() {
        assert_eq!(error_percent(f64::NAN, 100.0), None);
        assert_eq!(error_percent(15.0, f64::INFINITY), None);
    }

    #[test]
    fn donut_spec_splits_100_percent() {
        let spec = donut_spec(20.0);
        let segments = spec["segments"].as_array().unwrap();
        assert_eq!(segments[0]["value"], 20.0);
        assert_eq!(segments[1]["value"], 80.0);
        assert_eq!(spec["label"], "80.0%");
    }
}
