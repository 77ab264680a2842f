pub mod algorithm;
pub mod errors;
pub mod frame_renderer;
