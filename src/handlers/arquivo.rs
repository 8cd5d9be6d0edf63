// src/handlers/arquivo.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    models::arquivo::{FiltroArquivo, TipoArquivo},
};

// GET /api/arquivo
#[utoipa::path(
    get,
    path = "/api/arquivo",
    tag = "Arquivo",
    params(FiltroArquivo),
    responses(
        (status = 200, description = "Registros arquivados do tipo pedido, após os filtros conjuntivos", body = Vec<crate::models::arquivo::RegistroArquivado>)
    )
)]
pub async fn listar_arquivo(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroArquivo>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.arquivo_service.listar(filtro).await))
}

// POST /api/arquivo/{tipo}/{id}/arquivar
#[utoipa::path(
    post,
    path = "/api/arquivo/{tipo}/{id}/arquivar",
    tag = "Arquivo",
    params(
        ("tipo" = TipoArquivo, Path, description = "Tipo de entidade"),
        ("id" = Uuid, Path, description = "ID do registro")
    ),
    responses(
        (status = 204, description = "Registro fora das visões ativas")
    )
)]
pub async fn arquivar(
    State(app_state): State<AppState>,
    Path((tipo, id)): Path<(TipoArquivo, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    app_state.arquivo_service.arquivar(tipo, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// POST /api/arquivo/{tipo}/{id}/restaurar
//
// Processo restaurado volta como CONCLUÍDO, nunca com o status pré-arquivo.
#[utoipa::path(
    post,
    path = "/api/arquivo/{tipo}/{id}/restaurar",
    tag = "Arquivo",
    params(
        ("tipo" = TipoArquivo, Path, description = "Tipo de entidade"),
        ("id" = Uuid, Path, description = "ID do registro")
    ),
    responses(
        (status = 204, description = "Registro de volta ao monitoramento ativo")
    )
)]
pub async fn restaurar(
    State(app_state): State<AppState>,
    Path((tipo, id)): Path<(TipoArquivo, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    app_state.arquivo_service.restaurar(tipo, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
