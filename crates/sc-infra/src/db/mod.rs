pub mod executor;
pub mod models;
pub mod pool;
pub mod ports;
pub mod repositories;
pub mod schema;

pub use executor::DieselSqliteExecutor;
pub use pool::{init_db_pool, DbPool};
pub use repositories::{DieselArtifactRepository, DieselStatusCheckRepository};
