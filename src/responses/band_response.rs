use entities::{album, band, Genre};
use queries::BandWithAlbums;
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct BandResponse {
    pub(crate) id: i32,
    pub(crate) name: String,
    pub(crate) genre: Genre,
    pub(crate) albums: Vec<album::Model>,
}

impl BandResponse {
    pub fn from_band(band: band::Model, albums: Vec<album::Model>) -> Self {
        Self {
            id: band.id,
            name: band.name,
            genre: band.genre,
            albums,
        }
    }
}

impl From<BandWithAlbums> for BandResponse {
    fn from((band, albums): BandWithAlbums) -> Self {
        Self::from_band(band, albums)
    }
}
