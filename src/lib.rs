//! Employee roster REST service
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── config.rs    # Environment-driven configuration
//! ├── state.rs     # Shared application state (connection pool)
//! ├── models/      # Wire/storage types for employees
//! ├── db/          # Persistence gateway (sqlx queries)
//! ├── services/    # Business rules (uniqueness, existence)
//! ├── api/         # HTTP routes and handlers
//! └── error.rs     # Service error type and HTTP mapping
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{ServiceError, ServiceResult};
pub use state::AppState;
