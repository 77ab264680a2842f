use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::io::Write;

use gif::{Encoder, EncodingError, Frame, Repeat};

use crate::controllers::ports::animation_presenter::AnimationPresenterPort;
use crate::core::data::animation::{Animation, LoopCount};
use crate::core::data::indexed_bitmap::IndexedBitmap;
use crate::core::data::palette::{Palette, PaletteIndex};

#[derive(Debug)]
pub enum GifPresenterError {
    EmptyAnimation,
    CanvasTooLarge { width: u32, height: u32 },
    Encode(EncodingError),
}

impl fmt::Display for GifPresenterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAnimation => write!(f, "animation has no frames"),
            Self::CanvasTooLarge { width, height } => {
                write!(f, "canvas {}x{} does not fit in a gif frame", width, height)
            }
            Self::Encode(err) => write!(f, "gif encoding failed: {}", err),
        }
    }
}

impl Error for GifPresenterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EncodingError> for GifPresenterError {
    fn from(err: EncodingError) -> Self {
        Self::Encode(err)
    }
}

impl From<std::io::Error> for GifPresenterError {
    fn from(err: std::io::Error) -> Self {
        Self::Encode(err.into())
    }
}

/// Encodes animations as GIF streams.
///
/// Frames are written as palette indices against one global colour table
/// taken from the first frame, so every frame shares the same two colours.
pub struct GifPresenter {}

impl AnimationPresenterPort for GifPresenter {
    type Failure = GifPresenterError;

    fn present<W: Write>(&self, animation: &Animation, out: W) -> Result<(), GifPresenterError> {
        let first = animation.frames().first().ok_or(GifPresenterError::EmptyAnimation)?;
        let canvas = first.canvas();
        let (width, height) = match (u16::try_from(canvas.width()), u16::try_from(canvas.height())) {
            (Ok(width), Ok(height)) => (width, height),
            _ => {
                return Err(GifPresenterError::CanvasTooLarge {
                    width: canvas.width(),
                    height: canvas.height(),
                });
            }
        };

        let delay = u16::try_from(animation.frame_delay()).unwrap_or(u16::MAX);
        let mut encoder = Encoder::new(out, width, height, &global_palette(first.palette()))?;
        encoder.set_repeat(match animation.loop_count() {
            LoopCount::Infinite => Repeat::Infinite,
            LoopCount::Times(times) => Repeat::Finite(times),
        })?;

        for bitmap in animation.frames() {
            encoder.write_frame(&indexed_frame(bitmap, width, height, delay))?;
        }
        encoder.into_inner()?;

        tracing::debug!(frames = animation.frames().len(), "gif encoded");
        Ok(())
    }
}

impl Default for GifPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl GifPresenter {
    pub fn new() -> Self {
        Self {}
    }
}

// RGB triples in palette index order.
fn global_palette(palette: Palette) -> [u8; 6] {
    let background = palette.colour(PaletteIndex::Background);
    let foreground = palette.colour(PaletteIndex::Foreground);

    [
        background.r,
        background.g,
        background.b,
        foreground.r,
        foreground.g,
        foreground.b,
    ]
}

fn indexed_frame(bitmap: &IndexedBitmap, width: u16, height: u16, delay: u16) -> Frame<'static> {
    let indices: Vec<u8> = bitmap.indices().iter().map(|&index| index as u8).collect();

    Frame {
        width,
        height,
        delay,
        buffer: Cow::Owned(indices),
        ..Frame::default()
    }
}
