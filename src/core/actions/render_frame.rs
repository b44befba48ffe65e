use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon_cancelable,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer_cancelable,
};
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::fern::generator::FernGenerator;
use crate::core::fern::plot::plot_fern;
use crate::core::frame::algorithm::{FractalPixelAlgorithm, PixelOutsideFrameError};
use crate::core::frame::uniforms::FrameUniforms;
use log::{debug, trace};
use rand::Rng;
use std::error::Error;
use std::fmt;
use std::time::Instant;

#[derive(Debug)]
pub enum RenderFrameError {
    InvalidResolution(PixelRectError),
    Cancelled(Cancelled),
    Algorithm(PixelOutsideFrameError),
    ColourMap(Box<dyn Error + Send + Sync>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResolution(err) => write!(f, "invalid resolution: {}", err),
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidResolution(err) => Some(err),
            Self::Cancelled(c) => Some(c),
            Self::Algorithm(err) => Some(err),
            Self::ColourMap(err) => Some(err.as_ref()),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<GenerateFractalError<PixelOutsideFrameError>> for RenderFrameError {
    fn from(err: GenerateFractalError<PixelOutsideFrameError>) -> Self {
        match err {
            GenerateFractalError::Cancelled(c) => Self::Cancelled(c),
            GenerateFractalError::Algorithm(err) => Self::Algorithm(err),
        }
    }
}

impl From<GeneratePixelBufferError> for RenderFrameError {
    fn from(err: GeneratePixelBufferError) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(c) => Self::Cancelled(c),
            GeneratePixelBufferError::ColourMap(err) => Self::ColourMap(err),
            GeneratePixelBufferError::PixelBuffer(err) => Self::PixelBuffer(err),
        }
    }
}

impl From<PixelBufferError> for RenderFrameError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Renders one frame from a uniform snapshot.
///
/// The fern family plots a fresh point cloud from `rng` onto a transparent
/// buffer. Every other family is evaluated per pixel in parallel and colour
/// mapped with alpha 255.
pub fn render_frame<R, C>(
    uniforms: &FrameUniforms,
    fern: &FernGenerator,
    rng: &mut R,
    cancel: &C,
) -> Result<PixelBuffer, RenderFrameError>
where
    R: Rng + ?Sized,
    C: CancelToken,
{
    let pixel_rect = uniforms
        .resolution
        .pixel_rect()
        .map_err(RenderFrameError::InvalidResolution)?;
    let start = Instant::now();

    if uniforms.is_point_cloud() {
        let points = fern.generate(uniforms.elapsed_time, rng);

        if cancel.is_cancelled() {
            return Err(RenderFrameError::Cancelled(Cancelled));
        }

        let mut buffer = PixelBuffer::new(pixel_rect);
        let plotted = plot_fern(&points, &mut buffer)?;

        debug!(
            "fern frame {}x{}: {} of {} points plotted in {:?}",
            pixel_rect.width(),
            pixel_rect.height(),
            plotted,
            points.len(),
            start.elapsed()
        );

        return Ok(buffer);
    }

    let algorithm = FractalPixelAlgorithm::new(pixel_rect, uniforms);
    let outcomes = generate_fractal_parallel_rayon_cancelable(pixel_rect, &algorithm, cancel)?;
    trace!("kernel pass finished in {:?}", start.elapsed());

    let buffer = generate_pixel_buffer_cancelable(
        outcomes,
        &uniforms.colour_mapper(),
        pixel_rect,
        cancel,
    )?;

    debug!(
        "fractal frame {}x{} (type {}, {} iterations, zoom {:e}) rendered in {:?}",
        pixel_rect.width(),
        pixel_rect.height(),
        uniforms.fractal_type,
        uniforms.max_iterations,
        uniforms.zoom,
        start.elapsed()
    );

    Ok(buffer)
}
