//! Database migrations.

use sea_orm_migration::prelude::*;

mod m20260801_000001_initial;
mod m20260801_000002_sessions;

/// The migrator for all Fiscora migrations.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_initial::Migration),
            Box::new(m20260801_000002_sessions::Migration),
        ]
    }
}
