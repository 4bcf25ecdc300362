// SQLite engagement store
// Holds the rows the reconciler reads plus the guarded maintenance writes

mod db;
mod error;
mod queries;
mod records;
mod schema;

// Public API
pub use db::Database;
pub use error::{Error, Result};
pub use records::{BackfillWrite, PropertySummary};
pub use schema::SCHEMA_VERSION;
