use std::error::Error;
use std::fmt;
use std::io;
use std::num::NonZeroUsize;
use std::time::Instant;

use rayon::ThreadPoolBuildError;

use crate::core::actions::render_frames::ports::frame_renderer::FrameRenderer;
use crate::core::actions::render_frames::render_frames_rayon::render_frames_rayon;
use crate::core::actions::render_frames::render_frames_scoped_threads::render_frames_scoped_threads;
use crate::core::data::frame_geometry::FrameGeometry;

/// Failure of a whole render. No partial results survive any of these.
#[derive(Debug)]
pub enum RenderFramesError {
    FrameTaskPanicked { frame: usize },
    Spawn { frame: usize, source: io::Error },
    WorkerPool(ThreadPoolBuildError),
}

impl fmt::Display for RenderFramesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameTaskPanicked { frame } => {
                write!(f, "rendering task for frame {} panicked", frame)
            }
            Self::Spawn { frame, source } => {
                write!(f, "could not start rendering task for frame {}: {}", frame, source)
            }
            Self::WorkerPool(err) => write!(f, "could not build worker pool: {}", err),
        }
    }
}

impl Error for RenderFramesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FrameTaskPanicked { .. } => None,
            Self::Spawn { source, .. } => Some(source),
            Self::WorkerPool(err) => Some(err),
        }
    }
}

impl From<ThreadPoolBuildError> for RenderFramesError {
    fn from(err: ThreadPoolBuildError) -> Self {
        Self::WorkerPool(err)
    }
}

/// How frame tasks are mapped onto threads.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Scheduler {
    /// One OS thread per frame, all started at once. Unbounded: a long
    /// animation oversubscribes the machine.
    #[default]
    ThreadPerFrame,
    /// Frames queued onto a rayon pool. `None` uses the global pool, sized
    /// to the available parallelism.
    WorkerPool { threads: Option<NonZeroUsize> },
}

/// Renders every geometry and returns the frames in input order, whatever
/// order the tasks finish in.
pub fn render_frames<R>(
    geometries: &[FrameGeometry],
    renderer: &R,
    scheduler: Scheduler,
) -> Result<Vec<R::Frame>, RenderFramesError>
where
    R: FrameRenderer + Sync,
    R::Frame: Send,
{
    tracing::debug!(frames = geometries.len(), ?scheduler, "dispatching frame tasks");
    let start = Instant::now();

    let frames = match scheduler {
        Scheduler::ThreadPerFrame => render_frames_scoped_threads(geometries, renderer)?,
        Scheduler::WorkerPool { threads } => render_frames_rayon(geometries, renderer, threads)?,
    };

    tracing::debug!(frames = frames.len(), elapsed = ?start.elapsed(), "all frame tasks joined");
    Ok(frames)
}
