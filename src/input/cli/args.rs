use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::controllers::cli::animate_controller::RenderOptions;
use crate::core::actions::render_frames::render_frames::Scheduler;
use crate::core::actions::resolve_animation_spec::PartialAnimationSpec;
use crate::core::data::animation::LoopCount;
use crate::core::data::complex::Complex;
use crate::core::data::frame_geometry::Zoom;
use crate::core::data::palette::Palette;
use crate::core::fractals::mandelbrot::algorithm::EscapeTest;

const TEST_OUTPUT: &str = "test.gif";

#[derive(Parser, Debug)]
#[command(
    name = "mandelbrot_zoom",
    version,
    about = "Render a zoom through the Mandelbrot set as an animated GIF"
)]
pub struct Args {
    /// Start position as `RE [IM]`; the imaginary part defaults to 0.
    #[arg(long = "start-pos", alias = "startPos", num_args = 1..=2, value_names = ["RE", "IM"], allow_negative_numbers = true)]
    pub start_pos: Option<Vec<f64>>,

    /// End position as `RE [IM]`; defaults to the start position.
    #[arg(long = "end-pos", alias = "endPos", num_args = 1..=2, value_names = ["RE", "IM"], allow_negative_numbers = true)]
    pub end_pos: Option<Vec<f64>>,

    /// Full viewport width and height at the first frame; height defaults to width.
    #[arg(long = "start-zoom", alias = "startZoom", num_args = 1..=2, value_names = ["WIDTH", "HEIGHT"])]
    pub start_zoom: Option<Vec<f64>>,

    /// Full viewport width and height at the last frame; defaults to the start zoom.
    #[arg(long = "end-zoom", alias = "endZoom", num_args = 1..=2, value_names = ["WIDTH", "HEIGHT"])]
    pub end_zoom: Option<Vec<f64>>,

    /// Frame size in pixels; height defaults to width. [default: 512 512]
    #[arg(long, num_args = 1..=2, value_names = ["WIDTH", "HEIGHT"])]
    pub size: Option<Vec<u32>>,

    /// Iteration cap for the escape test. [default: 1000]
    #[arg(long = "iters")]
    pub max_iterations: Option<u32>,

    /// Number of frames. [default: 1 for a still view, 25 otherwise]
    #[arg(long)]
    pub frames: Option<u32>,

    /// Delay between frames in hundredths of a second. [default: 8]
    #[arg(long)]
    pub delay: Option<u32>,

    /// Output file; the GIF is written to stdout when omitted.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Render the built-in demo zoom into `test.gif`, ignoring the view flags.
    #[arg(long)]
    pub test: bool,

    /// Play the animation this many times instead of looping forever.
    #[arg(long)]
    pub loops: Option<u16>,

    /// Escape criterion used to classify points.
    #[arg(long, value_enum, default_value_t = EscapeArg::RealPart)]
    pub escape: EscapeArg,

    /// How frame rendering tasks are scheduled onto threads.
    #[arg(long, value_enum, default_value_t = SchedulerArg::ThreadPerFrame)]
    pub scheduler: SchedulerArg,

    /// Worker pool size; implies `--scheduler worker-pool`.
    #[arg(long)]
    pub threads: Option<NonZeroUsize>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum EscapeArg {
    /// Stop once the real part reaches 2.
    RealPart,
    /// Stop once |z| exceeds 2.
    Modulus,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SchedulerArg {
    /// One thread per frame, all started together.
    ThreadPerFrame,
    /// A bounded pool of worker threads.
    WorkerPool,
}

impl Args {
    pub fn partial_spec(&self) -> PartialAnimationSpec {
        if self.test {
            return test_preset();
        }

        PartialAnimationSpec {
            start_pos: self.start_pos.as_deref().and_then(complex_from),
            end_pos: self.end_pos.as_deref().and_then(complex_from),
            start_zoom: self.start_zoom.as_deref().and_then(zoom_from),
            end_zoom: self.end_zoom.as_deref().and_then(zoom_from),
            canvas_size: self.size.as_deref().and_then(pair_from),
            max_iterations: self.max_iterations,
            frame_count: self.frames,
            frame_delay: self.delay,
        }
    }

    pub fn output_path(&self) -> Option<PathBuf> {
        match (&self.output, self.test) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => Some(PathBuf::from(TEST_OUTPUT)),
            (None, false) => None,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        let scheduler = match (self.scheduler, self.threads) {
            (SchedulerArg::ThreadPerFrame, None) => Scheduler::ThreadPerFrame,
            (_, threads) => Scheduler::WorkerPool { threads },
        };

        RenderOptions {
            scheduler,
            escape_test: match self.escape {
                EscapeArg::RealPart => EscapeTest::RealPart,
                EscapeArg::Modulus => EscapeTest::Modulus,
            },
            palette: Palette::default(),
            loop_count: self.loops.map_or(LoopCount::Infinite, LoopCount::Times),
        }
    }
}

fn test_preset() -> PartialAnimationSpec {
    PartialAnimationSpec {
        start_pos: Some(Complex { real: -1.0, imag: 0.0 }),
        end_pos: Some(Complex { real: -1.31, imag: 0.0 }),
        start_zoom: Some(Zoom::square(0.5)),
        end_zoom: Some(Zoom::square(0.12)),
        canvas_size: Some((512, 512)),
        max_iterations: Some(1000),
        frame_count: Some(25),
        frame_delay: Some(8),
    }
}

fn complex_from(values: &[f64]) -> Option<Complex> {
    match *values {
        [real] => Some(Complex { real, imag: 0.0 }),
        [real, imag, ..] => Some(Complex { real, imag }),
        [] => None,
    }
}

fn zoom_from(values: &[f64]) -> Option<Zoom> {
    pair_from(values).map(|(width, height)| Zoom { width, height })
}

fn pair_from<T: Copy>(values: &[T]) -> Option<(T, T)> {
    match *values {
        [both] => Some((both, both)),
        [first, second, ..] => Some((first, second)),
        [] => None,
    }
}
