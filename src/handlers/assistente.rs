// src/handlers/assistente.rs

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{common::error::AppError, config::AppState};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerguntaPayload {
    #[schema(example = "Compare o planejado e o executado por classificação.")]
    pub pergunta: String,
    pub ano: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RespostaAssistente {
    pub resposta: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentoPayload {
    // Última resposta do assistente, em Markdown livre
    pub conteudo: String,
    pub ano: Option<i32>,
}

// POST /api/assistente/analisar
//
// Falhas do colaborador externo chegam aqui já convertidas em texto; este
// endpoint nunca devolve erro por causa da chamada externa.
#[utoipa::path(
    post,
    path = "/api/assistente/analisar",
    tag = "Assistente",
    request_body = PerguntaPayload,
    responses(
        (status = 200, description = "Texto livre, possivelmente com tabelas Markdown", body = RespostaAssistente)
    )
)]
pub async fn analisar(
    State(app_state): State<AppState>,
    Json(payload): Json<PerguntaPayload>,
) -> Result<impl IntoResponse, AppError> {
    let resposta = app_state
        .assistente_service
        .analisar(&payload.pergunta, payload.ano)
        .await;
    Ok(Json(RespostaAssistente { resposta }))
}

// POST /api/assistente/documento
#[utoipa::path(
    post,
    path = "/api/assistente/documento",
    tag = "Assistente",
    request_body = DocumentoPayload,
    responses(
        (status = 200, description = "Documento PDF gerado da resposta", content_type = "application/pdf"),
        (status = 500, description = "Fonte não disponível para a renderização")
    )
)]
pub async fn gerar_documento(
    State(app_state): State<AppState>,
    Json(payload): Json<DocumentoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = app_state
        .documento_service
        .gerar(&payload.conteudo, payload.ano)?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"relatorio_inteligencia.pdf\"",
            ),
        ],
        bytes,
    ))
}
