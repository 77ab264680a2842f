use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::core::actions::render_frames::ports::frame_renderer::FrameRenderer;
use crate::core::actions::render_frames::render_frames::RenderFramesError;
use crate::core::data::frame_geometry::FrameGeometry;

/// Renders frames on a bounded rayon pool.
///
/// With `threads` set, a dedicated pool of that many workers is built for
/// this render; otherwise the global pool is used. The indexed parallel
/// iterator collects results in input order.
pub fn render_frames_rayon<R>(
    geometries: &[FrameGeometry],
    renderer: &R,
    threads: Option<NonZeroUsize>,
) -> Result<Vec<R::Frame>, RenderFramesError>
where
    R: FrameRenderer + Sync,
    R::Frame: Send,
{
    match threads {
        Some(threads) => {
            let pool = ThreadPoolBuilder::new()
                .num_threads(threads.get())
                .thread_name(|index| format!("frame-worker-{}", index))
                .build()?;

            pool.install(|| render_in_current_pool(geometries, renderer))
        }
        None => render_in_current_pool(geometries, renderer),
    }
}

fn render_in_current_pool<R>(
    geometries: &[FrameGeometry],
    renderer: &R,
) -> Result<Vec<R::Frame>, RenderFramesError>
where
    R: FrameRenderer + Sync,
    R::Frame: Send,
{
    geometries
        .par_iter()
        .enumerate()
        .map(|(frame, geometry)| {
            let rendered = panic::catch_unwind(AssertUnwindSafe(|| renderer.render(geometry)))
                .map_err(|_| RenderFramesError::FrameTaskPanicked { frame })?;
            tracing::debug!(frame, "frame rendered");
            Ok(rendered)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    fn geometry_for(frame: usize) -> FrameGeometry {
        FrameGeometry {
            center: Complex { real: frame as f64, imag: 0.0 },
            width: 1.0,
            height: 1.0,
        }
    }

    fn frame_of(geometry: &FrameGeometry) -> usize {
        geometry.center.real as usize
    }

    #[derive(Debug)]
    struct StubSleepyRenderer {
        delays_ms: Vec<u64>,
        renders: AtomicUsize,
    }

    impl FrameRenderer for StubSleepyRenderer {
        type Frame = usize;

        fn render(&self, geometry: &FrameGeometry) -> usize {
            let frame = frame_of(geometry);
            thread::sleep(Duration::from_millis(self.delays_ms[frame]));
            self.renders.fetch_add(1, Ordering::Relaxed);
            frame
        }
    }

    #[derive(Debug)]
    struct StubPanickingRenderer {
        panic_on: usize,
    }

    impl FrameRenderer for StubPanickingRenderer {
        type Frame = usize;

        fn render(&self, geometry: &FrameGeometry) -> usize {
            let frame = frame_of(geometry);
            if frame == self.panic_on {
                panic!("stub failure on frame {}", frame);
            }
            frame
        }
    }

    #[test]
    fn test_output_order_ignores_completion_order() {
        let delays_ms = vec![25, 0, 15, 5, 30, 10, 20, 0];
        let geometries: Vec<FrameGeometry> = (0..delays_ms.len()).map(geometry_for).collect();

        for threads in [None, NonZeroUsize::new(1), NonZeroUsize::new(3), NonZeroUsize::new(16)] {
            let renderer = StubSleepyRenderer {
                delays_ms: delays_ms.clone(),
                renders: AtomicUsize::new(0),
            };

            let frames = render_frames_rayon(&geometries, &renderer, threads).unwrap();

            assert_eq!(frames, (0..8).collect::<Vec<_>>());
            assert_eq!(renderer.renders.load(Ordering::Relaxed), 8);
        }
    }

    #[test]
    fn test_more_frames_than_workers() {
        let geometries: Vec<FrameGeometry> = (0..40).map(geometry_for).collect();
        let renderer = StubSleepyRenderer {
            delays_ms: vec![1; 40],
            renders: AtomicUsize::new(0),
        };

        let frames = render_frames_rayon(&geometries, &renderer, NonZeroUsize::new(2)).unwrap();

        assert_eq!(frames, (0..40).collect::<Vec<_>>());
    }

    #[test]
    fn test_panicking_frame_fails_the_whole_render() {
        let geometries: Vec<FrameGeometry> = (0..6).map(geometry_for).collect();
        let renderer = StubPanickingRenderer { panic_on: 2 };

        let result = render_frames_rayon(&geometries, &renderer, NonZeroUsize::new(2));

        assert!(matches!(result, Err(RenderFramesError::FrameTaskPanicked { frame: 2 })));
    }
}
