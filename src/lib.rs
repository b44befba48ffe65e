pub mod controllers;
pub mod core;
pub mod presenters;
pub mod storage;

pub use crate::controllers::cli::render_once::RenderOnceController;
pub use crate::controllers::explorer::config::{ExplorerConfig, ViewConfig};
pub use crate::controllers::explorer::state::ExplorerState;
pub use crate::controllers::interactive::{FrameSink, InteractiveController, RenderEvent};
pub use crate::core::actions::cancellation::{CancelToken, NeverCancel};
pub use crate::core::actions::render_frame::{RenderFrameError, render_frame};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::{ScreenDelta, ScreenPoint};
pub use crate::core::data::resolution::Resolution;
pub use crate::core::fern::generator::{FernGenerator, FernSettings};
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::core::fractals::kernel::FractalKernel;
pub use crate::core::fractals::outcome::IterationOutcome;
pub use crate::core::fractals::params::FractalParameters;
pub use crate::core::frame::uniforms::FrameUniforms;
pub use crate::core::precision::split_float::SplitFloat;
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::storage::config_file::{ConfigError, load_config};
