use std::str::FromStr;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, IntoActiveValue, Iterable};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// The closed set of genres a band can be filed under.
///
/// Stored as its display value, so the column reads `Hip-Hop` rather than
/// `HipHop`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
pub enum Genre {
    #[sea_orm(string_value = "Rock")]
    Rock,
    #[sea_orm(string_value = "Electronic")]
    Electronic,
    #[sea_orm(string_value = "Metal")]
    Metal,
    #[sea_orm(string_value = "Hip-Hop")]
    HipHop,
    #[sea_orm(string_value = "Pop")]
    Pop,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid genre")]
pub struct InvalidGenre(pub String);

impl Genre {
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Rock => "Rock",
            Genre::Electronic => "Electronic",
            Genre::Metal => "Metal",
            Genre::HipHop => "Hip-Hop",
            Genre::Pop => "Pop",
        }
    }
}

impl FromStr for Genre {
    type Err = InvalidGenre;

    /// Trims and title-cases the input before matching it against the
    /// display values, so `" hip-hop "` parses as [`Genre::HipHop`].
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = title_case(raw.trim());
        Genre::iter()
            .find(|genre| genre.as_str() == normalized)
            .ok_or_else(|| InvalidGenre(raw.to_string()))
    }
}

impl IntoActiveValue<Genre> for Genre {
    fn into_active_value(self) -> ActiveValue<Genre> {
        ActiveValue::Set(self)
    }
}

impl Serialize for Genre {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Upper-cases every letter that follows a non-letter and lower-cases the
/// rest: `hIP-hop` becomes `Hip-Hop`.
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut previous_is_letter = false;
    for c in input.chars() {
        if previous_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }
    out
}
