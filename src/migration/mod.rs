use sea_orm_migration::prelude::*;

mod m20180301_000001_create_orders_and_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20180301_000001_create_orders_and_items::Migration)]
    }
}
