//! PostgreSQL loader for catalog-seed.
//!
//! [`CatalogPopulator`] owns a single connection and walks one linear sequence:
//!
//! ```text
//! connect -> clear -> categories (commit) -> fetch ids -> items (commit) -> ANALYZE -> summary
//! ```
//!
//! Items reference store-assigned category identifiers, so categories must be
//! committed and read back before the first item is generated.

pub mod args;
pub mod connection;
pub mod error;
pub mod insert;
pub mod populator;

pub use args::PostgreSQLConnectionArgs;
pub use connection::{mask_connection_password, ConnectionConfig};
pub use error::PopulateError;
pub use populator::{CatalogPopulator, PopulateMetrics, PopulateReport};
