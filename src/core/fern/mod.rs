pub mod generator;
pub mod maps;
pub mod plot;
