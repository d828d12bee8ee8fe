use sea_orm::Schema;
use sea_orm_migration::prelude::*;

use crate::entity::{Items, Orders};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Tables are derived from the entities so the same migration runs on
        // PostgreSQL and SQLite. `items` carries the foreign key to `orders`.
        let schema = Schema::new(manager.get_database_backend());

        manager
            .create_table(schema.create_table_from_entity(Orders).if_not_exists().to_owned())
            .await?;
        manager
            .create_table(schema.create_table_from_entity(Items).if_not_exists().to_owned())
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Orders).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
