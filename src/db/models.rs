use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered student. `data_nascimento` crosses the wire and the store
/// as an ISO-8601 date string (`YYYY-MM-DD`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Aluno {
    pub cpf: i64,
    pub nome: String,
    pub data_nascimento: NaiveDate,
}
