pub mod asset;
pub mod cache;
pub mod feature;
pub mod geometry;
pub mod vis;

#[cfg(feature = "api")]
pub mod client;
