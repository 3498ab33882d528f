pub mod album;
pub mod album_local_model;
pub mod band;
pub mod band_local_model;
pub mod genre;

pub use genre::{Genre, InvalidGenre};
