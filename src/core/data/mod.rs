pub mod animation;
pub mod animation_spec;
pub mod canvas;
pub mod colour;
pub mod complex;
pub mod frame_geometry;
pub mod indexed_bitmap;
pub mod palette;
pub mod point;
