// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{common::error::AppError, config::AppState};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct FiltroAnoQuery {
    // Sem o parâmetro, o painel cobre o histórico global
    pub ano: Option<i32>,
}

// GET /api/dashboard/resumo
#[utoipa::path(
    get,
    path = "/api/dashboard/resumo",
    tag = "Dashboard",
    params(FiltroAnoQuery),
    responses(
        (status = 200, description = "Cards volumétricos, totais financeiros, funil e radar de risco", body = crate::models::dashboard::ResumoDashboard)
    )
)]
pub async fn resumo(
    State(app_state): State<AppState>,
    Query(query): Query<FiltroAnoQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.dashboard_service.resumo(query.ano).await))
}

// GET /api/dashboard/financeiro
#[utoipa::path(
    get,
    path = "/api/dashboard/financeiro",
    tag = "Dashboard",
    params(FiltroAnoQuery),
    responses(
        (status = 200, description = "Memória de cálculo do planejado e do executado", body = crate::models::dashboard::DetalheFinanceiro)
    )
)]
pub async fn financeiro(
    State(app_state): State<AppState>,
    Query(query): Query<FiltroAnoQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.dashboard_service.financeiro(query.ano).await))
}
