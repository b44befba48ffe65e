pub mod algorithm;
pub mod uniforms;
