//! Display-oriented reshaping of backend responses.
//!
//! This crate turns raw backend payloads into the exact shapes the chart
//! and map widgets consume: row-oriented tables with a fixed field set,
//! scalar stat summaries with display defaults, histogram bins, and the
//! model-accuracy donut math.

pub mod accuracy;
pub mod histogram;
pub mod palette;
pub mod stats;
pub mod table;
