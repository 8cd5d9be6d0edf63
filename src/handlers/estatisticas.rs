// src/handlers/estatisticas.rs

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    config::AppState,
    models::processo::ClassificacaoProcesso,
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct FiltroEstatisticasQuery {
    pub ano: Option<i32>,
    pub classificacao: Option<ClassificacaoProcesso>,
}

// GET /api/estatisticas
#[utoipa::path(
    get,
    path = "/api/estatisticas",
    tag = "Estatísticas",
    params(FiltroEstatisticasQuery),
    responses(
        (status = 200, description = "Painel estratégico completo do recorte pedido", body = crate::models::estatisticas::PainelEstatisticas)
    )
)]
pub async fn painel(
    State(app_state): State<AppState>,
    Query(query): Query<FiltroEstatisticasQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(
        app_state
            .estatisticas_service
            .painel(query.ano, query.classificacao)
            .await,
    ))
}
