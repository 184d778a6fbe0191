//! Schema migrations for both datastore tiers.
//!
//! The fast tier only holds session tokens, the slow tier holds the
//! long-lived records. Each tier keeps its own migration table so both can
//! point at the same database without seeing each other's history.

pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_users;
mod m20240301_000002_create_courses;
mod m20240301_000003_create_tokens;

pub use m20240301_000001_create_users::User;
pub use m20240301_000002_create_courses::Course;
pub use m20240301_000003_create_tokens::Token;

/// Migrations applied to the fast (session) tier.
pub struct FastMigrator;

#[async_trait::async_trait]
impl MigratorTrait for FastMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240301_000003_create_tokens::Migration)]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_fast").into_iden()
    }
}

/// Migrations applied to the slow (record) tier.
pub struct SlowMigrator;

#[async_trait::async_trait]
impl MigratorTrait for SlowMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_users::Migration),
            Box::new(m20240301_000002_create_courses::Migration),
        ]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_slow").into_iden()
    }
}
