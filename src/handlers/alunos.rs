use axum::{
    Json,
    extract::{Path, State},
    response::Redirect,
};
use serde_json::{Value, json};
use tracing::info;

use crate::db::Aluno;
use crate::{RegistryError, router::RegistryState};

/// GET / -> send callers toward the documentation endpoint.
pub async fn redirect_to_docs() -> Redirect {
    Redirect::temporary("/docs")
}

/// GET /alunos -> every stored aluno.
///
/// Historical contract: an empty table is reported as 404, not as `[]`.
pub async fn list_alunos(
    State(state): State<RegistryState>,
) -> Result<Json<Vec<Aluno>>, RegistryError> {
    let alunos = state.storage.list_all().await?;
    if alunos.is_empty() {
        return Err(RegistryError::NotFound(
            "Nenhum aluno encontrado".to_string(),
        ));
    }
    Ok(Json(alunos))
}

/// POST /alunos -> insert one row. Payload typing is the Json extractor's
/// job (422 on malformed input); the only check here is cpf uniqueness.
pub async fn create_aluno(
    State(state): State<RegistryState>,
    Json(aluno): Json<Aluno>,
) -> Result<Json<Value>, RegistryError> {
    state.storage.insert(&aluno).await?;
    info!(cpf = aluno.cpf, "aluno created");
    Ok(Json(json!({ "message": "Usuário criado com sucesso" })))
}

/// GET /alunos/{cpf} -> the matching aluno, or 404.
pub async fn get_aluno(
    State(state): State<RegistryState>,
    Path(cpf): Path<i64>,
) -> Result<Json<Aluno>, RegistryError> {
    match state.storage.get_by_cpf(cpf).await? {
        Some(aluno) => Ok(Json(aluno)),
        None => Err(RegistryError::NotFound(
            "Usuário não encontrado".to_string(),
        )),
    }
}
