use crate::band::ActiveModel;
use crate::genre::Genre;
use sea_orm::DeriveIntoActiveModel;

#[derive(DeriveIntoActiveModel, PartialEq, Eq, Clone, Debug)]
pub struct BandModel {
    pub name: String,
    pub genre: Genre,
}
