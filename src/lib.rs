mod controllers;
mod core;
mod input;
mod presenters;
mod storage;

pub use controllers::cli::animate_controller::{AnimateController, AnimateControllerError, RenderOptions};
pub use controllers::ports::animation_presenter::AnimationPresenterPort;
pub use input::cli::args::{Args, EscapeArg, SchedulerArg};
pub use presenters::gif::gif_presenter::{GifPresenter, GifPresenterError};
pub use storage::output::open_output;

pub use crate::core::actions::render_frames::ports::frame_renderer::FrameRenderer;
pub use crate::core::actions::render_frames::render_frames::{render_frames, RenderFramesError, Scheduler};
pub use crate::core::actions::resolve_animation_spec::{
    resolve_animation_spec, PartialAnimationSpec, ResolvedSpec, SpecWarning,
};
pub use crate::core::data::animation::{Animation, LoopCount};
pub use crate::core::data::animation_spec::{AnimationSpec, AnimationSpecError};
pub use crate::core::data::canvas::{Canvas, CanvasError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_geometry::{FrameGeometry, Viewpoint, Zoom};
pub use crate::core::data::indexed_bitmap::IndexedBitmap;
pub use crate::core::data::palette::{Palette, PaletteIndex};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::mandelbrot::algorithm::{escape_iterations, EscapeTest, MandelbrotAlgorithm};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::frame_renderer::MandelbrotFrameRenderer;
pub use crate::core::util::interpolate_frames::{frame_geometry, interpolate_frames};
pub use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
