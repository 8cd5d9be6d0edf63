// src/handlers/consumo.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::movimento::FaseExecucao,
    models::processo::UnidadeDemandante,
    services::consumo_service::{AvancoFluxo, EdicaoMovimento, NovoMovimento},
};

use super::irp::BuscaQuery;
use super::processos::validate_positivo;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NovoMovimentoPayload {
    // Item de ata contra o qual o pedido consome
    pub origem_id: Uuid,

    #[validate(custom(function = "validate_positivo"))]
    pub quantidade_consumida: Decimal,

    pub data: Option<NaiveDate>,
    pub unidade_demandante: UnidadeDemandante,
    pub processo_sei_consumo: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EdicaoMovimentoPayload {
    #[validate(custom(function = "validate_positivo"))]
    pub quantidade_consumida: Decimal,
    pub unidade_demandante: UnidadeDemandante,
    pub processo_sei_consumo: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvancoFluxoPayload {
    pub fase_execucao: FaseExecucao,
    pub data_empenho: Option<NaiveDate>,
    pub prazo_entrega_dias: Option<u32>,
}

// GET /api/consumos
#[utoipa::path(
    get,
    path = "/api/consumos",
    tag = "Consumo",
    params(BuscaQuery),
    responses(
        (status = 200, description = "Movimentos não arquivados, com descrição e valor do item", body = Vec<crate::services::consumo_service::MovimentoDetalhado>)
    )
)]
pub async fn listar_consumos(
    State(app_state): State<AppState>,
    Query(query): Query<BuscaQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.consumo_service.listar(query.busca).await))
}

// POST /api/consumos
#[utoipa::path(
    post,
    path = "/api/consumos",
    tag = "Consumo",
    request_body = NovoMovimentoPayload,
    responses(
        (status = 201, description = "Pedido registrado na fase inicial; sem checagem cruzada de saldo", body = crate::models::movimento::MovimentoConsumo)
    )
)]
pub async fn criar_consumo(
    State(app_state): State<AppState>,
    Json(payload): Json<NovoMovimentoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let movimento = app_state
        .consumo_service
        .criar(NovoMovimento {
            origem_id: payload.origem_id,
            quantidade_consumida: payload.quantidade_consumida,
            data: payload.data,
            unidade_demandante: payload.unidade_demandante,
            processo_sei_consumo: payload.processo_sei_consumo,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(movimento)))
}

// PUT /api/consumos/{id}
#[utoipa::path(
    put,
    path = "/api/consumos/{id}",
    tag = "Consumo",
    request_body = EdicaoMovimentoPayload,
    params(("id" = Uuid, Path, description = "ID do movimento")),
    responses((status = 200, body = crate::models::movimento::MovimentoConsumo))
)]
pub async fn atualizar_consumo(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EdicaoMovimentoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let movimento = app_state
        .consumo_service
        .atualizar(
            id,
            EdicaoMovimento {
                quantidade_consumida: payload.quantidade_consumida,
                unidade_demandante: payload.unidade_demandante,
                processo_sei_consumo: payload.processo_sei_consumo,
            },
        )
        .await?;
    Ok(Json(movimento))
}

// POST /api/consumos/{id}/fluxo
#[utoipa::path(
    post,
    path = "/api/consumos/{id}/fluxo",
    tag = "Consumo",
    request_body = AvancoFluxoPayload,
    params(("id" = Uuid, Path, description = "ID do movimento")),
    responses(
        (status = 200, description = "Fase logística avançada; previsão de entrega recalculada", body = crate::models::movimento::MovimentoConsumo)
    )
)]
pub async fn avancar_fluxo(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AvancoFluxoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let movimento = app_state
        .consumo_service
        .avancar_fluxo(
            id,
            AvancoFluxo {
                fase_execucao: payload.fase_execucao,
                data_empenho: payload.data_empenho,
                prazo_entrega_dias: payload.prazo_entrega_dias,
            },
        )
        .await?;
    Ok(Json(movimento))
}

// POST /api/consumos/{id}/cancelar
#[utoipa::path(
    post,
    path = "/api/consumos/{id}/cancelar",
    tag = "Consumo",
    params(("id" = Uuid, Path, description = "ID do movimento")),
    responses(
        (status = 200, description = "Movimento cancelado: permanece no histórico, sai das somas", body = crate::models::movimento::MovimentoConsumo)
    )
)]
pub async fn cancelar_consumo(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.consumo_service.cancelar(id).await?))
}
