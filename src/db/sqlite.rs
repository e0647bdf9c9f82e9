use crate::db::models::Aluno;
use crate::db::schema::SQLITE_INIT;
use crate::error::RegistryError;
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct AlunoStorage {
    pool: SqlitePool,
}

impl AlunoStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the backing store, creating the file and the schema if needed.
    /// The pool is capped at a single connection; concurrent requests share
    /// it and rely on SQLite's own serialization, nothing more.
    pub async fn connect(database_url: &str) -> Result<Self, RegistryError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connect_opts)
            .await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), RegistryError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert one aluno. A duplicate `cpf` surfaces as `Conflict`.
    pub async fn insert(&self, aluno: &Aluno) -> Result<(), RegistryError> {
        sqlx::query("INSERT INTO alunos (cpf, nome, data_nascimento) VALUES (?, ?, ?)")
            .bind(aluno.cpf)
            .bind(&aluno.nome)
            .bind(aluno.data_nascimento.format("%Y-%m-%d").to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    RegistryError::Conflict("CPF já cadastrado".to_string())
                }
                _ => RegistryError::Database(e),
            })?;
        Ok(())
    }

    pub async fn get_by_cpf(&self, cpf: i64) -> Result<Option<Aluno>, RegistryError> {
        let row = sqlx::query("SELECT cpf, nome, data_nascimento FROM alunos WHERE cpf = ?")
            .bind(cpf)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Self::row_to_model).transpose()
    }

    /// Every stored row, in the store's natural return order.
    pub async fn list_all(&self) -> Result<Vec<Aluno>, RegistryError> {
        let rows = sqlx::query("SELECT cpf, nome, data_nascimento FROM alunos")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Self::row_to_model).collect()
    }

    fn row_to_model(row: SqliteRow) -> Result<Aluno, RegistryError> {
        let cpf: i64 = row.try_get("cpf")?;
        let nome: String = row.try_get("nome")?;
        let date_str: String = row.try_get("data_nascimento")?;

        let data_nascimento = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(Aluno {
            cpf,
            nome,
            data_nascimento,
        })
    }
}
