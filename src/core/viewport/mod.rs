pub mod limits;
pub mod state;
pub mod transform;
pub mod tuning;
