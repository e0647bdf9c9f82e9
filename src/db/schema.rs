//! SQL DDL for initializing the student registry.

/// SQLite schema:
/// - `cpf` INTEGER PRIMARY KEY (natural key, no autoincrement)
/// - `data_nascimento` stored as ISO-8601 TEXT; SQLite has no date type,
///   conversion happens in the storage layer
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS alunos (
    cpf INTEGER PRIMARY KEY,
    nome TEXT NOT NULL,
    data_nascimento TEXT NOT NULL
);
"#;
