//! Park boundary geometry and centroid derivation.
//!
//! The boundary arrives as a GeoJSON geometry object. It is used two ways:
//! forwarded verbatim to the map layer as an outline, and collapsed to a
//! centroid for centering the view. The centroid is derived locally from
//! the outer rings rather than round-tripping to the backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A GeoJSON geometry, kept loosely typed: the coordinate nesting depth
/// differs between `Polygon` and `MultiPolygon` and the map layer consumes
/// the raw JSON anyway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub geom_type: String,
    pub coordinates: Value,
}

impl Geometry {
    /// Area-weighted centroid of the outer ring(s), as `(lon, lat)`.
    ///
    /// Falls back to the plain vertex mean for degenerate (zero-area)
    /// rings. Returns `None` when no usable ring exists.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        let rings = self.outer_rings();
        if rings.is_empty() {
            return None;
        }

        let mut area_sum = 0.0;
        let mut cx = 0.0;
        let mut cy = 0.0;
        for ring in &rings {
            if let Some((a, x, y)) = ring_centroid(ring) {
                area_sum += a;
                cx += x * a;
                cy += y * a;
            }
        }
        if area_sum.abs() > f64::EPSILON {
            return Some((cx / area_sum, cy / area_sum));
        }

        // Degenerate rings: average all vertices instead.
        let mut n = 0usize;
        let (mut sx, mut sy) = (0.0, 0.0);
        for ring in &rings {
            for &(x, y) in ring {
                sx += x;
                sy += y;
                n += 1;
            }
        }
        if n == 0 {
            None
        } else {
            Some((sx / n as f64, sy / n as f64))
        }
    }

    /// Outer rings of the polygon(s) as `(lon, lat)` vertex lists.
    /// Interior rings (holes) are ignored; they do not move the centroid
    /// enough to matter for map centering.
    fn outer_rings(&self) -> Vec<Vec<(f64, f64)>> {
        match self.geom_type.as_str() {
            "Polygon" => parse_ring(self.coordinates.get(0))
                .map(|r| vec![r])
                .unwrap_or_default(),
            "MultiPolygon" => self
                .coordinates
                .as_array()
                .map(|polys| {
                    polys
                        .iter()
                        .filter_map(|poly| parse_ring(poly.get(0)))
                        .collect()
                })
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}

/// Parse one GeoJSON ring (`[[lon, lat], ...]`) into vertex pairs.
fn parse_ring(ring: Option<&Value>) -> Option<Vec<(f64, f64)>> {
    let pairs = ring?.as_array()?;
    let mut out = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let coords = pair.as_array()?;
        let lon = coords.first()?.as_f64()?;
        let lat = coords.get(1)?.as_f64()?;
        out.push((lon, lat));
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

/// Shoelace signed area and centroid of a single ring.
/// Returns `(|area|, cx, cy)`, or `None` for rings that are too small to
/// carry a meaningful centroid.
fn ring_centroid(ring: &[(f64, f64)]) -> Option<(f64, f64, f64)> {
    if ring.len() < 3 {
        return None;
    }
    let mut a2 = 0.0; // twice the signed area
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..ring.len() {
        let (x0, y0) = ring[i];
        let (x1, y1) = ring[(i + 1) % ring.len()];
        let cross = x0 * y1 - x1 * y0;
        a2 += cross;
        cx += (x0 + x1) * cross;
        cy += (y0 + y1) * cross;
    }
    if a2.abs() < f64::EPSILON {
        return None;
    }
    let area = a2 / 2.0;
    Some((area.abs(), cx / (3.0 * a2), cy / (3.0 * a2)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn geom(v: Value) -> Geometry {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn centroid_of_unit_square() {
        let g = geom(json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]]
        }));
        let (lon, lat) = g.centroid().unwrap();
        assert!((lon - 0.5).abs() < 1e-9);
        assert!((lat - 0.5).abs() < 1e-9);
    }

    #[test]
    fn centroid_of_multipolygon_weights_by_area() {
        // A big square at origin and a tiny one far away: the centroid must
        // stay near the big square.
        let g = geom(json!({
            "type": "MultiPolygon",
            "coordinates": [
                [[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]],
                [[[100.0, 100.0], [100.1, 100.0], [100.1, 100.1], [100.0, 100.1], [100.0, 100.0]]]
            ]
        }));
        let (lon, lat) = g.centroid().unwrap();
        assert!(lon < 6.0, "lon {lon} pulled too far by the small polygon");
        assert!(lat < 6.0, "lat {lat} pulled too far by the small polygon");
    }

    #[test]
    fn degenerate_ring_falls_back_to_vertex_mean() {
        let g = geom(json!({
            "type": "Polygon",
            "coordinates": [[[2.0, 4.0], [2.0, 4.0], [2.0, 4.0]]]
        }));
        assert_eq!(g.centroid(), Some((2.0, 4.0)));
    }

    #[test]
    fn unknown_geometry_type_has_no_centroid() {
        let g = geom(json!({ "type": "Point", "coordinates": [1.0, 2.0] }));
        assert_eq!(g.centroid(), None);
    }
}
