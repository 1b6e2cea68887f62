//! Row-oriented tables extracted from feature collections.

use ctb_gee::feature::FeatureCollection;
use std::collections::HashMap;

/// An ordered sequence of rows, each mapping exactly the requested field
/// names to a numeric value or null.
///
/// Two invariants hold by construction:
/// - row count equals the source feature count; a feature missing a field
///   yields a null cell, never a dropped row, so charts can distinguish
///   "field absent" from "feature absent";
/// - row order equals backend order, which is not sorted by any domain
///   key. Callers sort explicitly (see [`RecordTable::sort_by`]) before
///   charting.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordTable {
    fields: Vec<String>,
    rows: Vec<HashMap<String, Option<f64>>>,
}

impl RecordTable {
    /// A zero-row table with the given schema. This is the error fallback:
    /// rendering code branches on emptiness, never on a missing table.
    pub fn empty(fields: &[&str]) -> RecordTable {
        RecordTable {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Flatten a feature collection into rows restricted to `fields`.
    pub fn from_features(fc: &FeatureCollection, fields: &[&str]) -> RecordTable {
        let rows = fc
            .features
            .iter()
            .map(|feature| {
                fields
                    .iter()
                    .map(|&field| (field.to_string(), feature.number(field)))
                    .collect()
            })
            .collect();
        RecordTable {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            rows,
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn rows(&self) -> &[HashMap<String, Option<f64>>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// One column, in row order.
    pub fn column(&self, field: &str) -> Vec<Option<f64>> {
        self.rows
            .iter()
            .map(|row| row.get(field).copied().flatten())
            .collect()
    }

    /// Sort rows ascending by a numeric field; null cells sort last.
    pub fn sort_by(&mut self, field: &str) {
        self.rows.sort_by(|a, b| {
            let av = a.get(field).copied().flatten();
            let bv = b.get(field).copied().flatten();
            match (av, bv) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }
        });
    }

    /// First row whose `key_field` equals `key` (e.g. the RMSE row for a
    /// selected year).
    pub fn row_where(&self, key_field: &str, key: f64) -> Option<&HashMap<String, Option<f64>>> {
        self.rows
            .iter()
            .find(|row| row.get(key_field).copied().flatten() == Some(key))
    }

    /// `(x, y)` pairs for charting; rows where either cell is null are
    /// skipped (nulls break D3 line paths).
    pub fn points(&self, x_field: &str, y_field: &str) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .filter_map(|row| {
                let x = row.get(x_field).copied().flatten()?;
                let y = row.get(y_field).copied().flatten()?;
                Some((x, y))
            })
            .collect()
    }

    /// Mean of the non-null cells of a column; `None` when the column has
    /// no values at all.
    pub fn mean(&self, field: &str) -> Option<f64> {
        let values: Vec<f64> = self.column(field).into_iter().flatten().collect();
        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctb_gee::feature::FeatureCollection;
    use serde_json::json;

    fn fc(features: serde_json::Value) -> FeatureCollection {
        serde_json::from_value(json!({ "features": features })).unwrap()
    }

    #[test]
    fn row_count_and_key_set_match_request() {
        let fc = fc(json!([
            { "properties": { "year": 2021, "total_agb": 100.0 } },
            { "properties": { "year": 2022 } },
            { "properties": { "total_agb": 300.0, "extra": 1 } },
        ]));
        let table = RecordTable::from_features(&fc, &["year", "total_agb"]);
        assert_eq!(table.len(), fc.len());
        for row in table.rows() {
            let mut keys: Vec<&str> = row.keys().map(String::as_str).collect();
            keys.sort();
            assert_eq!(keys, vec!["total_agb", "year"]);
        }
    }

    #[test]
    fn missing_fields_become_null_not_dropped_rows() {
        let fc = fc(json!([
            { "properties": { "year": 2022 } },
        ]));
        let table = RecordTable::from_features(&fc, &["year", "rmse"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0]["year"], Some(2022.0));
        assert_eq!(table.rows()[0]["rmse"], None);
    }

    #[test]
    fn empty_collection_yields_zero_row_table() {
        let table = RecordTable::from_features(&fc(json!([])), &["year", "rmse"]);
        assert!(table.is_empty());
        assert_eq!(table.fields(), &["year".to_string(), "rmse".to_string()]);
    }

    #[test]
    fn sort_by_orders_ascending_with_nulls_last() {
        let fc = fc(json!([
            { "properties": { "year": 2023, "rmse": 12.0 } },
            { "properties": { "rmse": 99.0 } },
            { "properties": { "year": 2021, "rmse": 18.0 } },
        ]));
        let mut table = RecordTable::from_features(&fc, &["year", "rmse"]);
        table.sort_by("year");
        assert_eq!(table.column("year"), vec![Some(2021.0), Some(2023.0), None]);
    }

    #[test]
    fn points_skip_null_cells() {
        let fc = fc(json!([
            { "properties": { "year": 2021, "total_agb": 10.0 } },
            { "properties": { "year": 2022 } },
            { "properties": { "year": 2023, "total_agb": 30.0 } },
        ]));
        let table = RecordTable::from_features(&fc, &["year", "total_agb"]);
        assert_eq!(
            table.points("year", "total_agb"),
            vec![(2021.0, 10.0), (2023.0, 30.0)]
        );
    }

    #[test]
    fn row_where_finds_the_year_row() {
        let fc = fc(json!([
            { "properties": { "year": 2021, "rmse": 18.0 } },
            { "properties": { "year": 2022, "rmse": 15.0 } },
        ]));
        let table = RecordTable::from_features(&fc, &["year", "rmse"]);
        let row = table.row_where("year", 2022.0).unwrap();
        assert_eq!(row["rmse"], Some(15.0));
        assert!(table.row_where("year", 2024.0).is_none());
    }

    #[test]
    fn mean_ignores_nulls_and_is_none_when_empty() {
        let fc = fc(json!([
            { "properties": { "agbd": 90.0 } },
            { "properties": {} },
            { "properties": { "agbd": 110.0 } },
        ]));
        let table = RecordTable::from_features(&fc, &["agbd"]);
        assert_eq!(table.mean("agbd"), Some(100.0));
        assert_eq!(RecordTable::empty(&["agbd"]).mean("agbd"), None);
    }
}
