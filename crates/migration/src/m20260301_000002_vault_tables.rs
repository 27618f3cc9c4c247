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
                    .table(Folders::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Folders::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Folders::UserId).string().not_null())
                    .col(ColumnDef::new(Folders::Name).text().not_null())
                    .col(ColumnDef::new(Folders::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Folders::UpdatedAt).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_folders_user_id")
                            .from(Folders::Table, Folders::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_folders_user_id")
                    .table(Folders::Table)
                    .col(Folders::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Type and payload columns are text: older writers stored whatever the
        // client sent, and readers coerce on the way out.
        manager
            .create_table(
                Table::create()
                    .table(Ciphers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Ciphers::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Ciphers::UserId).string().not_null())
                    .col(ColumnDef::new(Ciphers::Type).text())
                    .col(ColumnDef::new(Ciphers::Name).text().not_null())
                    .col(ColumnDef::new(Ciphers::Notes).text())
                    .col(ColumnDef::new(Ciphers::Login).text())
                    .col(ColumnDef::new(Ciphers::Card).text())
                    .col(ColumnDef::new(Ciphers::Identity).text())
                    .col(ColumnDef::new(Ciphers::SecureNote).text())
                    .col(ColumnDef::new(Ciphers::SshKey).text())
                    .col(ColumnDef::new(Ciphers::Fields).text())
                    .col(ColumnDef::new(Ciphers::PasswordHistory).text())
                    .col(ColumnDef::new(Ciphers::Reprompt).integer())
                    .col(ColumnDef::new(Ciphers::Key).text())
                    .col(ColumnDef::new(Ciphers::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Ciphers::UpdatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Ciphers::DeletedAt).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ciphers_user_id")
                            .from(Ciphers::Table, Ciphers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ciphers_user_id")
                    .table(Ciphers::Table)
                    .col(Ciphers::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FoldersCiphers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FoldersCiphers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FoldersCiphers::FolderId).string().not_null())
                    .col(ColumnDef::new(FoldersCiphers::CipherId).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_folders_ciphers_folder_id")
                            .from(FoldersCiphers::Table, FoldersCiphers::FolderId)
                            .to(Folders::Table, Folders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_folders_ciphers_cipher_id")
                            .from(FoldersCiphers::Table, FoldersCiphers::CipherId)
                            .to(Ciphers::Table, Ciphers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_folders_ciphers_cipher_id")
                    .table(FoldersCiphers::Table)
                    .col(FoldersCiphers::CipherId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Favorites::UserId).string().not_null())
                    .col(ColumnDef::new(Favorites::CipherId).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(Favorites::UserId)
                            .col(Favorites::CipherId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_cipher_id")
                            .from(Favorites::Table, Favorites::CipherId)
                            .to(Ciphers::Table, Ciphers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse dependency order.
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FoldersCiphers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Ciphers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Folders::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Folders {
    Table,
    Id,
    UserId,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Ciphers {
    Table,
    Id,
    UserId,
    Type,
    Name,
    Notes,
    Login,
    Card,
    Identity,
    SecureNote,
    SshKey,
    Fields,
    PasswordHistory,
    Reprompt,
    Key,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
enum FoldersCiphers {
    Table,
    Id,
    FolderId,
    CipherId,
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    UserId,
    CipherId,
}
