pub mod grid_source;
pub mod numeric;
pub mod segmenter;
