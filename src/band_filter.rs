use entities::{album, band, Genre};
use queries::BandWithAlbums;

use crate::error::AppError;

/// Filters applied to `GET /bands`. Both conditions must hold when both
/// are set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BandFilter {
    pub genre: Option<Genre>,
    pub has_album: bool,
}

impl BandFilter {
    pub fn from_query(genre: Option<&str>, has_album: Option<&str>) -> Result<Self, AppError> {
        let genre = genre.map(str::parse::<Genre>).transpose()?;
        let has_album = match has_album {
            None => false,
            Some(raw) => parse_flag(raw).ok_or_else(|| {
                AppError::Validation(format!("'{}' is not a valid boolean for has_album", raw))
            })?,
        };
        Ok(Self { genre, has_album })
    }

    pub fn matches(&self, band: &band::Model, albums: &[album::Model]) -> bool {
        if let Some(genre) = self.genre {
            if band.genre != genre {
                return false;
            }
        }
        !self.has_album || !albums.is_empty()
    }

    pub fn apply(&self, bands: Vec<BandWithAlbums>) -> Vec<BandWithAlbums> {
        bands
            .into_iter()
            .filter(|(band, albums)| self.matches(band, albums))
            .collect()
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" | "on" => Some(true),
        "false" | "f" | "0" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}
