use std::error::Error;
use std::fmt;
use std::io::Write;
use std::time::Instant;

use crate::controllers::ports::animation_presenter::AnimationPresenterPort;
use crate::core::actions::render_frames::render_frames::{render_frames, RenderFramesError, Scheduler};
use crate::core::data::animation::{Animation, LoopCount};
use crate::core::data::animation_spec::AnimationSpec;
use crate::core::data::palette::Palette;
use crate::core::fractals::mandelbrot::algorithm::{EscapeTest, MandelbrotAlgorithm};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::frame_renderer::MandelbrotFrameRenderer;
use crate::core::util::interpolate_frames::interpolate_frames;

/// How an animation is rendered and packaged, independent of what it shows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub scheduler: Scheduler,
    pub escape_test: EscapeTest,
    pub palette: Palette,
    pub loop_count: LoopCount,
}

#[derive(Debug)]
pub enum AnimateControllerError {
    Mandelbrot(MandelbrotError),
    Render(RenderFramesError),
    Present(Box<dyn Error + Send + Sync>),
    NothingRendered,
}

impl fmt::Display for AnimateControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mandelbrot(err) => write!(f, "mandelbrot error: {}", err),
            Self::Render(err) => write!(f, "render error: {}", err),
            Self::Present(err) => write!(f, "presenter error: {}", err),
            Self::NothingRendered => write!(f, "no animation has been generated"),
        }
    }
}

impl Error for AnimateControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Mandelbrot(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Present(err) => Some(err.as_ref()),
            Self::NothingRendered => None,
        }
    }
}

impl From<MandelbrotError> for AnimateControllerError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

impl From<RenderFramesError> for AnimateControllerError {
    fn from(err: RenderFramesError) -> Self {
        Self::Render(err)
    }
}

pub struct AnimateController<P: AnimationPresenterPort> {
    presenter: P,
    options: RenderOptions,
    animation: Option<Animation>,
}

impl<P: AnimationPresenterPort> AnimateController<P> {
    pub fn new(presenter: P, options: RenderOptions) -> Self {
        Self {
            presenter,
            options,
            animation: None,
        }
    }

    pub fn generate(&mut self, spec: &AnimationSpec) -> Result<(), AnimateControllerError> {
        let canvas = spec.canvas();

        tracing::info!(
            width = canvas.width(),
            height = canvas.height(),
            max_iterations = spec.max_iterations(),
            frames = spec.frame_count(),
            scheduler = ?self.options.scheduler,
            "rendering mandelbrot animation"
        );

        let algorithm = MandelbrotAlgorithm::new(spec.max_iterations(), self.options.escape_test)?;
        let renderer = MandelbrotFrameRenderer::new(canvas, algorithm, self.options.palette);
        let geometries = interpolate_frames(spec);

        let start = Instant::now();
        let frames = render_frames(&geometries, &renderer, self.options.scheduler)?;
        tracing::info!(duration = ?start.elapsed(), "rendered {} frame(s)", frames.len());

        self.animation = Some(Animation::new(frames, spec.frame_delay(), self.options.loop_count));
        Ok(())
    }

    #[must_use]
    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    pub fn write<W: Write>(&self, out: W) -> Result<(), AnimateControllerError> {
        let animation = self.animation.as_ref().ok_or(AnimateControllerError::NothingRendered)?;

        self.presenter
            .present(animation, out)
            .map_err(|err| AnimateControllerError::Present(Box::new(err)))
    }
}
