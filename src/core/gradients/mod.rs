pub mod cache;
pub mod colour_map;
pub mod gradient;
pub mod presets;
