pub mod gif_presenter;
