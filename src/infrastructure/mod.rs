//! Infrastructure layer - external concerns

pub mod database;

pub use database::repositories::SeaOrmUserRepository;
pub use database::{init_database, DatabaseConfig, PoolConfig};
