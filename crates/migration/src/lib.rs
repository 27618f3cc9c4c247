pub use sea_orm_migration::prelude::*;

mod m20260301_000001_users;
mod m20260301_000002_vault_tables;
mod m20260301_000003_attachments;

pub struct Migrator;

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_users::Migration),
            Box::new(m20260301_000002_vault_tables::Migration),
            Box::new(m20260301_000003_attachments::Migration),
        ]
    }
}
