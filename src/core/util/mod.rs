pub mod interpolate_frames;
pub mod pixel_to_complex_coords;
