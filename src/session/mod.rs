pub mod picker;
pub mod visualizer;
