use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{
    BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError,
};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    Cancelled(Cancelled),
    ColourMap(Box<dyn Error + Send + Sync>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::ColourMap(err) => Some(err.as_ref()),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Maps each value to an RGBA pixel in row-major order, polling `cancel`
/// every [`CANCEL_CHECK_INTERVAL_PIXELS`] values.
pub fn generate_pixel_buffer_cancelable<CMap, C>(
    input: Vec<CMap::T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap,
    C: CancelToken,
{
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * BYTES_PER_PIXEL);

    for (i, value) in input.into_iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferError::Cancelled(Cancelled));
        }

        let Colour { r, g, b, a } = mapper
            .map(value)
            .map_err(|err| GeneratePixelBufferError::ColourMap(Box::new(err)))?;

        buffer.extend_from_slice(&[r, g, b, a]);
    }

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::data::point::Point;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Debug)]
    struct StubColourMapError;

    impl fmt::Display for StubColourMapError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubColourMapError")
        }
    }

    impl Error for StubColourMapError {}

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap for StubColourMapSuccess {
        type T = u8;
        type Failure = StubColourMapError;

        fn map(&self, value: u8) -> Result<Colour, Self::Failure> {
            Ok(Colour::opaque(value, value, value))
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap for StubColourMapFailure {
        type T = u8;
        type Failure = StubColourMapError;

        fn map(&self, _: u8) -> Result<Colour, Self::Failure> {
            Err(StubColourMapError)
        }
    }

    fn three_by_two() -> PixelRect {
        PixelRect::new(Point { x: 0, y: 0 }, Point { x: 2, y: 1 }).unwrap()
    }

    #[test]
    fn test_generates_rgba_pixel_buffer() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let expected: PixelBufferData = [1u8, 2, 3, 4, 5, 6]
            .iter()
            .flat_map(|&v| [v, v, v, 255])
            .collect();

        let result = generate_pixel_buffer_cancelable(
            input,
            &StubColourMapSuccess {},
            three_by_two(),
            &NeverCancel,
        )
        .unwrap();

        assert_eq!(result.buffer(), &expected);
        assert_eq!(result.pixel_rect(), three_by_two());
        assert_eq!(result.buffer_size(), 24);
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let result = generate_pixel_buffer_cancelable(
            vec![1, 2, 3],
            &StubColourMapFailure {},
            three_by_two(),
            &NeverCancel,
        );

        match result {
            Err(GeneratePixelBufferError::ColourMap(err)) => {
                assert_eq!(err.to_string(), "StubColourMapError");
            }
            other => panic!("expected colour map error, got {:?}", other),
        }
    }

    #[test]
    fn test_input_size_mismatch_returns_err() {
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 1, y: 1 }).unwrap();
        let result = generate_pixel_buffer_cancelable(
            vec![1, 2, 3, 4, 5, 6],
            &StubColourMapSuccess {},
            pixel_rect,
            &NeverCancel,
        );

        assert!(matches!(
            result,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    pixel_rect_size: 16,
                    buffer_size: 24
                }
            ))
        ));
    }

    #[test]
    fn test_cancelled_does_not_create_pixel_buffer() {
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = generate_pixel_buffer_cancelable(
            vec![1, 2, 3, 4, 5, 6],
            &StubColourMapSuccess {},
            three_by_two(),
            &cancel_token,
        );

        assert!(matches!(result, Err(GeneratePixelBufferError::Cancelled(_))));
    }

    #[test]
    fn test_error_display() {
        let cancelled = GeneratePixelBufferError::Cancelled(Cancelled);
        let colour_map = GeneratePixelBufferError::ColourMap(Box::new(StubColourMapError));

        assert_eq!(cancelled.to_string(), "render cancelled");
        assert_eq!(colour_map.to_string(), "colour map error: StubColourMapError");
    }
}
