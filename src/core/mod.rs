pub mod actions;
pub mod animation;
pub mod colour_mapping;
pub mod data;
pub mod fern;
pub mod fractals;
pub mod frame;
pub mod precision;
pub mod viewport;
