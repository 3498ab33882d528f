use crate::album::ActiveModel;
use sea_orm::prelude::Date;
use sea_orm::DeriveIntoActiveModel;

#[derive(DeriveIntoActiveModel, PartialEq, Eq, Clone, Debug)]
pub struct AlbumModel {
    pub title: String,
    pub release_date: Date,
    pub band_id: i32,
}
