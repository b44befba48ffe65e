use clap::Parser;
use fractal_lab::{
    Complex, ExplorerConfig, ExplorerState, FernGenerator, FractalKind, PpmFilePresenter,
    RenderOnceController, load_config,
};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fractal_lab")]
#[command(version)]
#[command(about = "Render escape-time fractals and the Barnsley fern to PPM", long_about = None)]
struct Cli {
    /// TOML file with explorer settings; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fractal family, e.g. mandelbrot, burning-ship-julia, newton, barnsley-fern
    #[arg(short, long)]
    fractal: Option<FractalKind>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    #[arg(short, long)]
    zoom: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    center_x: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    center_y: Option<f64>,

    #[arg(short, long)]
    max_iterations: Option<u32>,

    /// Escape on the accumulated derivative instead of |z|²
    #[arg(long)]
    derivative_bailout: bool,

    /// Disable the early interior exit for orbits whose |z|² stops changing
    #[arg(long)]
    no_stabilization: bool,

    /// Elapsed seconds the frame is rendered at
    #[arg(short, long, default_value = "0.0")]
    time: f64,

    /// Animate the Julia and Phoenix constants
    #[arg(short, long)]
    animate: bool,

    /// Random seed for the fern point cloud
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long, default_value = "output/fractal.ppm")]
    output: PathBuf,
}

impl Cli {
    fn explorer_config(&self) -> Result<ExplorerConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ExplorerConfig::default(),
        };

        if let Some(fractal) = self.fractal {
            config.fractal.fractal_type = fractal;
        }
        if let Some(width) = self.width {
            config.view.width = width;
        }
        if let Some(height) = self.height {
            config.view.height = height;
        }
        if let Some(zoom) = self.zoom {
            config.view.zoom = zoom;
        }
        if self.center_x.is_some() || self.center_y.is_some() {
            config.view.centre = Complex::new(
                self.center_x.unwrap_or(config.view.centre.real),
                self.center_y.unwrap_or(config.view.centre.imag),
            );
        }
        if let Some(max_iterations) = self.max_iterations {
            config.fractal.max_iterations = max_iterations;
        }
        if self.derivative_bailout {
            config.fractal.use_derivative_bailout = true;
        }
        if self.no_stabilization {
            config.fractal.stabilization_exit = false;
        }
        if self.animate {
            config.animation.animate = true;
        }

        config.validate()?;

        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = cli.explorer_config()?;
    let mut state = ExplorerState::new(&config);
    let fern = FernGenerator::new(config.fern);
    let seed = cli.seed.unwrap_or_else(rand::random);

    let mut controller = RenderOnceController::new(PpmFilePresenter::new());
    controller.generate(&mut state, &fern, cli.time, seed)?;
    controller.write(&cli.output)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run(&Cli::parse())
}
