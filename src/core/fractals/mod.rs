pub mod errors;
pub mod formulas;
pub mod fractal_kinds;
pub mod kernel;
pub mod newton;
pub mod outcome;
pub mod params;
