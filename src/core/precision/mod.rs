pub mod double_double;
pub mod error_free;
pub mod split_float;
