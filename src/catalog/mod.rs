pub mod frames;
pub mod photo;
