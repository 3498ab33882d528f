use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240401_000001_create_bands" // Make sure this matches with the file name
    }
}

#[derive(DeriveIden)]
enum Band {
    Table,
    Id,
    Name,
    Genre,
}

#[derive(DeriveIden)]
enum Album {
    Table,
    Id,
    Title,
    ReleaseDate,
    BandId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Band::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Band::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Band::Name).string().not_null())
                    .col(ColumnDef::new(Band::Genre).string_len(16).not_null())
                    .to_owned(),
            )
            .await?;

        // Can't have an Album without a Band
        manager
            .create_table(
                Table::create()
                    .table(Album::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Album::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Album::Title).string().not_null())
                    .col(ColumnDef::new(Album::ReleaseDate).date().not_null())
                    .col(ColumnDef::new(Album::BandId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-album-band_id")
                            .from(Album::Table, Album::BandId)
                            .to(Band::Table, Band::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-album-band_id")
                    .table(Album::Table)
                    .col(Album::BandId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Album::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Band::Table).to_owned())
            .await
    }
}
