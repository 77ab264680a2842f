pub mod ports;
pub mod render_frames;
pub mod render_frames_rayon;
pub mod render_frames_scoped_threads;
