pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod infrastructure;
pub mod schema;

use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub use application::order_service::OrderService;
pub use config::{ConfigError, DbSettings};
pub use db::{create_pool, DbPool};
pub use domain::errors::DomainError;
pub use domain::order::{Order, OrderItem};
pub use domain::ports::OrderRepository;
pub use infrastructure::order_repo::DieselOrderRepository;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), DomainError> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DomainError::Persistence(e.to_string()))?;
    log::info!("applied {} pending migration(s)", applied.len());
    Ok(())
}
