use std::thread;

use crate::core::actions::render_frames::ports::frame_renderer::FrameRenderer;
use crate::core::actions::render_frames::render_frames::RenderFramesError;
use crate::core::data::frame_geometry::FrameGeometry;

/// Spawns one scoped thread per frame. Each thread writes only its own slot
/// of a pre-sized output vector, so no locking is needed; results are read
/// back by index once every thread has been joined.
pub fn render_frames_scoped_threads<R>(
    geometries: &[FrameGeometry],
    renderer: &R,
) -> Result<Vec<R::Frame>, RenderFramesError>
where
    R: FrameRenderer + Sync,
    R::Frame: Send,
{
    let mut slots: Vec<Option<R::Frame>> = geometries.iter().map(|_| None).collect();

    thread::scope(|scope| -> Result<(), RenderFramesError> {
        let handles: Vec<_> = slots
            .iter_mut()
            .zip(geometries)
            .enumerate()
            .map(|(frame, (slot, geometry))| {
                thread::Builder::new()
                    .name(format!("frame-{}", frame))
                    .spawn_scoped(scope, move || {
                        *slot = Some(renderer.render(geometry));
                        tracing::debug!(frame, "frame rendered");
                    })
                    .map_err(|source| RenderFramesError::Spawn { frame, source })
            })
            .collect();

        // Join everything before looking at any outcome.
        let joined: Vec<Result<(), RenderFramesError>> = handles
            .into_iter()
            .enumerate()
            .map(|(frame, handle)| {
                handle?
                    .join()
                    .map_err(|_| RenderFramesError::FrameTaskPanicked { frame })
            })
            .collect();

        joined.into_iter().collect()
    })?;

    slots
        .into_iter()
        .enumerate()
        .map(|(frame, slot)| slot.ok_or(RenderFramesError::FrameTaskPanicked { frame }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use std::sync::Mutex;
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
        completed: Mutex<Vec<usize>>,
    }

    impl FrameRenderer for StubSleepyRenderer {
        type Frame = usize;

        fn render(&self, geometry: &FrameGeometry) -> usize {
            let frame = frame_of(geometry);
            thread::sleep(Duration::from_millis(self.delays_ms[frame]));
            self.completed.lock().unwrap().push(frame);
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
        let schedules: [&[u64]; 3] = [
            &[40, 0, 30, 10, 20],
            &[0, 10, 20, 30, 40],
            &[40, 30, 20, 10, 0],
        ];

        for delays_ms in schedules {
            let geometries: Vec<FrameGeometry> = (0..delays_ms.len()).map(geometry_for).collect();
            let renderer = StubSleepyRenderer {
                delays_ms: delays_ms.to_vec(),
                completed: Mutex::new(Vec::new()),
            };

            let frames = render_frames_scoped_threads(&geometries, &renderer).unwrap();

            assert_eq!(frames, vec![0, 1, 2, 3, 4]);
            assert_eq!(renderer.completed.lock().unwrap().len(), 5);
        }
    }

    #[test]
    fn test_single_frame() {
        let renderer = StubSleepyRenderer {
            delays_ms: vec![0],
            completed: Mutex::new(Vec::new()),
        };

        let frames = render_frames_scoped_threads(&[geometry_for(0)], &renderer).unwrap();

        assert_eq!(frames, vec![0]);
    }

    #[test]
    fn test_panicking_frame_fails_the_whole_render() {
        let geometries: Vec<FrameGeometry> = (0..6).map(geometry_for).collect();
        let renderer = StubPanickingRenderer { panic_on: 4 };

        let result = render_frames_scoped_threads(&geometries, &renderer);

        assert!(matches!(result, Err(RenderFramesError::FrameTaskPanicked { frame: 4 })));
    }
}
