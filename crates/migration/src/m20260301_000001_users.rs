use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::Name).string())
                    .col(ColumnDef::new(Users::Akey).text())
                    .col(ColumnDef::new(Users::PrivateKey).text())
                    .col(ColumnDef::new(Users::SecurityStamp).string())
                    // Bitwarden defaults: PBKDF2-SHA256 with 600k iterations.
                    .col(
                        ColumnDef::new(Users::ClientKdfType)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Users::ClientKdfIter)
                            .integer()
                            .not_null()
                            .default(600_000),
                    )
                    .col(ColumnDef::new(Users::ClientKdfMemory).integer())
                    .col(ColumnDef::new(Users::ClientKdfParallelism).integer())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    Name,
    Akey,
    PrivateKey,
    SecurityStamp,
    ClientKdfType,
    ClientKdfIter,
    ClientKdfMemory,
    ClientKdfParallelism,
    CreatedAt,
    UpdatedAt,
}
