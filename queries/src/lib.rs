use entities::album_local_model::AlbumModel;
use entities::band_local_model::BandModel;
use entities::{Genre, album, band};
use log::{error, info};
use sea_orm::prelude::Date;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, ModelTrait,
    QueryOrder, TransactionTrait,
};

/// A band together with its albums, oldest album first.
pub type BandWithAlbums = (band::Model, Vec<album::Model>);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBand {
    pub name: String,
    pub genre: Genre,
    pub albums: Vec<NewAlbum>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewAlbum {
    pub title: String,
    pub release_date: Date,
}

pub async fn find_bands_with_albums<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<BandWithAlbums>, DbErr> {
    band::Entity::find()
        .find_with_related(album::Entity)
        .order_by_asc(band::Column::Id)
        .order_by_asc(album::Column::Id)
        .all(db)
        .await
}

pub async fn find_band_by_id<C: ConnectionTrait>(
    db: &C,
    band_id: i32,
) -> Result<Option<BandWithAlbums>, DbErr> {
    let Some(band) = band::Entity::find_by_id(band_id).one(db).await? else {
        return Ok(None);
    };
    let albums = band
        .find_related(album::Entity)
        .order_by_asc(album::Column::Id)
        .all(db)
        .await?;
    Ok(Some((band, albums)))
}

/// Inserts the band and every one of its albums in a single transaction.
/// On any failure the transaction is dropped uncommitted and nothing is kept.
pub async fn insert_band<C: TransactionTrait>(
    db: &C,
    new_band: NewBand,
) -> Result<BandWithAlbums, DbErr> {
    let txn = db.begin().await?;

    let band = BandModel {
        name: new_band.name,
        genre: new_band.genre,
    }
    .into_active_model()
    .insert(&txn)
    .await?;

    let mut albums = Vec::with_capacity(new_band.albums.len());
    for new_album in new_band.albums {
        let album = AlbumModel {
            title: new_album.title,
            release_date: new_album.release_date,
            band_id: band.id,
        }
        .into_active_model()
        .insert(&txn)
        .await
        .inspect_err(|e| error!("Failed to insert album for band {}: {}", band.id, e))?;
        albums.push(album);
    }

    txn.commit().await?;
    info!(
        "Inserted band {} ({}) with {} album(s)",
        band.id,
        band.name,
        albums.len()
    );
    Ok((band, albums))
}
