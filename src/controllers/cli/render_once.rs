use crate::controllers::explorer::state::ExplorerState;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::render_frame::{RenderFrameError, render_frame};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fern::generator::FernGenerator;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use std::time::Instant;

/// Renders a single frame from an explorer state and hands it to a file
/// presenter.
pub struct RenderOnceController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderOnceController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    /// Renders the frame `state` describes at `elapsed` seconds. `seed`
    /// fixes the fern's random source.
    pub fn generate(
        &mut self,
        state: &mut ExplorerState,
        fern: &FernGenerator,
        elapsed: f64,
        seed: u64,
    ) -> Result<(), RenderFrameError> {
        let uniforms = state.frame_uniforms(elapsed);
        let mut rng = StdRng::seed_from_u64(seed);

        info!(
            "rendering {} at {}x{}, zoom {:e}, {} iterations",
            state.fractal(),
            uniforms.resolution.width,
            uniforms.resolution.height,
            uniforms.zoom,
            uniforms.max_iterations
        );

        let start = Instant::now();
        let buffer = render_frame(&uniforms, fern, &mut rng, &NeverCancel)?;

        info!("rendered in {:?}", start.elapsed());

        self.buffer = Some(buffer);

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        match &self.buffer {
            Some(buffer) => {
                self.presenter.present(buffer, filepath.as_ref())?;
                info!("wrote {}", filepath.as_ref().display());
            }
            None => warn!("nothing rendered yet; {} not written", filepath.as_ref().display()),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::resolution::Resolution;
    use crate::core::fern::generator::FernSettings;
    use crate::core::fractals::fractal_kinds::FractalKind;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        written: RefCell<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
            self.written
                .borrow_mut()
                .push((filepath.to_path_buf(), buffer.buffer_size()));
            Ok(())
        }
    }

    fn small_state(kind: FractalKind) -> ExplorerState {
        let mut state = ExplorerState::default();
        state.select_fractal(kind);
        state.resize(Resolution::new(20, 10));
        state
    }

    #[test]
    fn test_generate_then_write_presents_the_frame() {
        let presenter = RecordingPresenter::default();
        let mut controller = RenderOnceController::new(&presenter);
        let mut state = small_state(FractalKind::BurningShip);

        controller
            .generate(&mut state, &FernGenerator::new(FernSettings::default()), 0.0, 1)
            .unwrap();
        controller.write("out/frame.ppm").unwrap();

        assert_eq!(
            presenter.written.borrow().as_slice(),
            &[(PathBuf::from("out/frame.ppm"), 20 * 10 * 4)]
        );
    }

    #[test]
    fn test_write_before_generate_presents_nothing() {
        let presenter = RecordingPresenter::default();
        let controller = RenderOnceController::new(&presenter);

        controller.write("out/frame.ppm").unwrap();

        assert!(controller.buffer().is_none());
        assert!(presenter.written.borrow().is_empty());
    }

    #[test]
    fn test_same_seed_gives_the_same_fern() {
        let presenter = RecordingPresenter::default();
        let fern = FernGenerator::new(FernSettings {
            point_count: 500,
            ..FernSettings::default()
        });
        let mut first = RenderOnceController::new(&presenter);
        let mut second = RenderOnceController::new(&presenter);

        first
            .generate(&mut small_state(FractalKind::BarnsleyFern), &fern, 2.0, 9)
            .unwrap();
        second
            .generate(&mut small_state(FractalKind::BarnsleyFern), &fern, 2.0, 9)
            .unwrap();

        assert_eq!(first.buffer(), second.buffer());
    }
}
