//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `sqlite.rs`: storage handle over a sqlx pool

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::Aluno;
pub use schema::SQLITE_INIT;
pub use sqlite::{AlunoStorage, SqlitePool};
