use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use entities::Genre;
use log::{info, warn};
use queries::{NewAlbum, NewBand};
use serde::Deserialize;

use crate::band_filter::BandFilter;
use crate::error::AppError;
use crate::responses::BandResponse;
use crate::DatabaseState;

#[derive(Deserialize)]
pub struct ListBandsQuery {
    genre: Option<String>,
    has_album: Option<String>,
}

#[derive(Deserialize)]
pub struct BandCreate {
    name: String,
    /// Raw genre text; normalized before anything is written.
    genre: String,
    #[serde(default)]
    albums: Option<Vec<AlbumCreate>>,
}

#[derive(Deserialize)]
pub struct AlbumCreate {
    title: String,
    release_date: NaiveDate,
}

pub async fn get_bands(
    State(state): State<DatabaseState>,
    query: Result<Query<ListBandsQuery>, QueryRejection>,
) -> Result<Json<Vec<BandResponse>>, AppError> {
    let Query(query) = query?;
    let filter = BandFilter::from_query(query.genre.as_deref(), query.has_album.as_deref())?;

    let bands = queries::find_bands_with_albums(&state.connection).await?;
    let ret = filter
        .apply(bands)
        .into_iter()
        .map(BandResponse::from)
        .collect();
    Ok(Json(ret))
}

pub async fn get_band(
    State(state): State<DatabaseState>,
    band_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<BandResponse>, AppError> {
    let Path(band_id) = band_id?;
    if band_id < 1 {
        return Err(AppError::Validation(format!(
            "Band id must be a positive integer, got {}",
            band_id
        )));
    }

    // Keys are i32; anything wider can't be stored, so it's simply missing.
    let Ok(key) = i32::try_from(band_id) else {
        warn!("Band doesn't exist: {}", band_id);
        return Err(AppError::NotFound(band_id));
    };

    match queries::find_band_by_id(&state.connection, key).await? {
        Some(band) => Ok(Json(band.into())),
        None => {
            warn!("Band doesn't exist: {}", band_id);
            Err(AppError::NotFound(band_id))
        }
    }
}

pub async fn create_band(
    State(state): State<DatabaseState>,
    payload: Result<Json<BandCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<BandResponse>), AppError> {
    let Json(payload) = payload?;
    let genre: Genre = payload.genre.parse()?;

    let new_band = NewBand {
        name: payload.name,
        genre,
        albums: payload
            .albums
            .unwrap_or_default()
            .into_iter()
            .map(|album| NewAlbum {
                title: album.title,
                release_date: album.release_date,
            })
            .collect(),
    };
    let (band, albums) = queries::insert_band(&state.connection, new_band).await?;
    info!("Created band {} with id {}", band.name, band.id);

    Ok((
        StatusCode::CREATED,
        Json(BandResponse::from_band(band, albums)),
    ))
}
