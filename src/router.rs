use axum::{Router, routing::get};

use crate::db::AlunoStorage;
use crate::handlers::alunos::{create_aluno, get_aluno, list_alunos, redirect_to_docs};

#[derive(Clone)]
pub struct RegistryState {
    pub storage: AlunoStorage,
}

impl RegistryState {
    pub fn new(storage: AlunoStorage) -> Self {
        Self { storage }
    }
}

pub fn registry_router(state: RegistryState) -> Router {
    Router::new()
        .route("/", get(redirect_to_docs))
        .route("/alunos", get(list_alunos).post(create_aluno))
        .route("/alunos/{cpf}", get(get_aluno))
        .with_state(state)
}
