pub mod aspect;
pub mod model;
