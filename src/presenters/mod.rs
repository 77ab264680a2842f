pub mod gif;
