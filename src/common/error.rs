use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Erros de domínio e de infraestrutura, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("{0} não encontrado(a)")]
    RegistroNaoEncontrado(&'static str),

    #[error("Selecione ao menos um item válido para compor a Ata.")]
    SelecaoVazia,

    #[error("Não há transição de homologação pendente para este processo.")]
    TransicaoNaoEncontrada,

    // Regras pontuais com mensagem própria (ex.: aditivo sem termo de referência)
    #[error("{0}")]
    RegraDeNegocio(String),

    #[error("Fonte não encontrada: {0}")]
    FonteNaoEncontrada(String),

    #[error("Falha ao gerar o documento")]
    DocumentoError(#[from] genpdf::error::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::RegistroNaoEncontrado(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::SelecaoVazia | AppError::RegraDeNegocio(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            AppError::TransicaoNaoEncontrada => (StatusCode::CONFLICT, self.to_string()),

            // Os demais (documento, fonte, inesperados) viram 500.
            // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
