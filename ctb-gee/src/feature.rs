//! Wire types for backend feature collections.
//!
//! A feature collection is the backend's vector record set: a list of
//! features, each carrying a free-form property map. Only the property maps
//! matter to this dashboard; geometries on table assets are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One vector record with its named properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: HashMap<String, Value>,
}

impl Feature {
    /// Read a property as a number. Missing, null, and non-numeric values
    /// all come back as `None`; numeric strings are tolerated since some
    /// export paths stringify their columns.
    pub fn number(&self, field: &str) -> Option<f64> {
        match self.properties.get(field) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

/// An ordered collection of features as returned by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature(props: Value) -> Feature {
        serde_json::from_value(json!({ "properties": props })).unwrap()
    }

    #[test]
    fn number_reads_numeric_and_stringified_values() {
        let f = feature(json!({ "total_agb": 1234.5, "year": "2022" }));
        assert_eq!(f.number("total_agb"), Some(1234.5));
        assert_eq!(f.number("year"), Some(2022.0));
    }

    #[test]
    fn number_is_none_for_missing_null_and_non_numeric() {
        let f = feature(json!({ "rmse": null, "note": "n/a" }));
        assert_eq!(f.number("rmse"), None);
        assert_eq!(f.number("note"), None);
        assert_eq!(f.number("absent"), None);
    }

    #[test]
    fn collection_deserializes_without_properties_key() {
        let fc: FeatureCollection =
            serde_json::from_value(json!({ "features": [{}, { "properties": {} }] })).unwrap();
        assert_eq!(fc.len(), 2);
    }
}
