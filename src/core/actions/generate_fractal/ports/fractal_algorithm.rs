use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel evaluation run by the generators. Pixels are independent, so
/// any order of calls gives the same results.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
