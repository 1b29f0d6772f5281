/// Database module for zc
///
/// Stores visited directories and their weights in SQLite via sqlx.

pub mod connection;
pub mod models;
pub mod queries;

pub use connection::Database;
pub use models::*;
