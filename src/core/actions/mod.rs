pub mod render_frames;
pub mod resolve_animation_spec;
