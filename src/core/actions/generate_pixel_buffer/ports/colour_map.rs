use crate::core::data::colour::Colour;
use std::error::Error;

/// Turns one generated value into an RGBA colour.
pub trait ColourMap {
    type T;
    type Failure: Error + Send + Sync + 'static;

    fn map(&self, value: Self::T) -> Result<Colour, Self::Failure>;
}
