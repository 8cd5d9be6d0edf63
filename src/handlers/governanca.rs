// src/handlers/governanca.rs
//
// Governança de Atas SRP e Contratos: listagens, edição, substituição do
// conjunto de itens de uma ata e termos aditivos.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::ata::SituacaoContrato,
    services::governanca_service::{Aditivo, EdicaoAta, EdicaoContrato},
};

use super::processos::GerarAtaPayload;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EdicaoAtaPayload {
    #[validate(length(min = 1, message = "O número da ata é obrigatório."))]
    pub numero_ata: String,
    #[serde(default)]
    pub fornecedor: String,
    pub data_assinatura: NaiveDate,
    pub data_vencimento: NaiveDate,
    #[serde(default)]
    pub prorrogacao: bool,
    pub situacao: SituacaoContrato,
    #[serde(default)]
    pub objeto: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EdicaoContratoPayload {
    #[validate(length(min = 1, message = "O número do contrato é obrigatório."))]
    pub numero_contrato: String,
    #[serde(default)]
    pub fornecedor: String,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub situacao: SituacaoContrato,
    #[serde(default)]
    pub objeto: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AditivoPayload {
    #[schema(example = "1º Termo Aditivo")]
    pub termo: String,
    pub processo_sei: String,
    #[schema(example = 12)]
    pub meses: u32,
}

// GET /api/atas
#[utoipa::path(
    get,
    path = "/api/atas",
    tag = "Governança",
    responses(
        (status = 200, description = "Atas ativas", body = Vec<crate::models::ata::AtaSrp>)
    )
)]
pub async fn listar_atas(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.governanca_service.listar_atas().await))
}

// GET /api/atas/{id}/itens
#[utoipa::path(
    get,
    path = "/api/atas/{id}/itens",
    tag = "Governança",
    params(("id" = Uuid, Path, description = "ID da ata")),
    responses(
        (status = 200, description = "Itens com o saldo recalculado a partir dos movimentos ativos", body = Vec<crate::services::governanca_service::ItemAtaComSaldo>)
    )
)]
pub async fn itens_da_ata(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.governanca_service.itens_da_ata(id).await?))
}

// PUT /api/atas/{id}
#[utoipa::path(
    put,
    path = "/api/atas/{id}",
    tag = "Governança",
    request_body = EdicaoAtaPayload,
    params(("id" = Uuid, Path, description = "ID da ata")),
    responses((status = 200, body = crate::models::ata::AtaSrp))
)]
pub async fn atualizar_ata(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EdicaoAtaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let ata = app_state
        .governanca_service
        .atualizar_ata(
            id,
            EdicaoAta {
                numero_ata: payload.numero_ata,
                fornecedor: payload.fornecedor,
                data_assinatura: payload.data_assinatura,
                data_vencimento: payload.data_vencimento,
                prorrogacao: payload.prorrogacao,
                situacao: payload.situacao,
                objeto: payload.objeto,
            },
        )
        .await?;
    Ok(Json(ata))
}

// PUT /api/atas/{id}/itens
//
// Reedição da composição: repete a checagem de duplicidade excluindo a
// própria ata e SUBSTITUI o conjunto de itens.
#[utoipa::path(
    put,
    path = "/api/atas/{id}/itens",
    tag = "Governança",
    request_body = GerarAtaPayload,
    params(("id" = Uuid, Path, description = "ID da ata")),
    responses(
        (status = 200, body = crate::models::ata::AtaSrp),
        (status = 422, description = "Nenhum item válido selecionado")
    )
)]
pub async fn substituir_itens_da_ata(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<GerarAtaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let ata = app_state
        .ciclo_vida_service
        .atualizar_ata(id, payload.em_geracao())
        .await?;
    Ok(Json(ata))
}

// POST /api/atas/{id}/aditivo
#[utoipa::path(
    post,
    path = "/api/atas/{id}/aditivo",
    tag = "Governança",
    request_body = AditivoPayload,
    params(("id" = Uuid, Path, description = "ID da ata")),
    responses(
        (status = 200, description = "Vencimento prorrogado e histórico registrado", body = crate::models::ata::AtaSrp),
        (status = 422, description = "Termo ou processo SEI ausentes")
    )
)]
pub async fn aplicar_aditivo_ata(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AditivoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let ata = app_state
        .governanca_service
        .aplicar_aditivo_ata(
            id,
            Aditivo {
                termo: payload.termo,
                processo_sei: payload.processo_sei,
                meses: payload.meses,
            },
        )
        .await?;
    Ok(Json(ata))
}

// GET /api/contratos
#[utoipa::path(
    get,
    path = "/api/contratos",
    tag = "Governança",
    responses(
        (status = 200, description = "Contratos ativos", body = Vec<crate::models::contrato::Contrato>)
    )
)]
pub async fn listar_contratos(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.governanca_service.listar_contratos().await))
}

// GET /api/contratos/{id}/itens
#[utoipa::path(
    get,
    path = "/api/contratos/{id}/itens",
    tag = "Governança",
    params(("id" = Uuid, Path, description = "ID do contrato")),
    responses(
        (status = 200, description = "Itens do processo vinculado ao contrato", body = Vec<crate::models::processo::ItemProcesso>)
    )
)]
pub async fn itens_do_contrato(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.governanca_service.itens_do_contrato(id).await?))
}

// PUT /api/contratos/{id}
#[utoipa::path(
    put,
    path = "/api/contratos/{id}",
    tag = "Governança",
    request_body = EdicaoContratoPayload,
    params(("id" = Uuid, Path, description = "ID do contrato")),
    responses((status = 200, body = crate::models::contrato::Contrato))
)]
pub async fn atualizar_contrato(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EdicaoContratoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let contrato = app_state
        .governanca_service
        .atualizar_contrato(
            id,
            EdicaoContrato {
                numero_contrato: payload.numero_contrato,
                fornecedor: payload.fornecedor,
                data_inicio: payload.data_inicio,
                data_fim: payload.data_fim,
                situacao: payload.situacao,
                objeto: payload.objeto,
            },
        )
        .await?;
    Ok(Json(contrato))
}

// POST /api/contratos/{id}/aditivo
#[utoipa::path(
    post,
    path = "/api/contratos/{id}/aditivo",
    tag = "Governança",
    request_body = AditivoPayload,
    params(("id" = Uuid, Path, description = "ID do contrato")),
    responses(
        (status = 200, body = crate::models::contrato::Contrato),
        (status = 422, description = "Termo ou processo SEI ausentes")
    )
)]
pub async fn aplicar_aditivo_contrato(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AditivoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let contrato = app_state
        .governanca_service
        .aplicar_aditivo_contrato(
            id,
            Aditivo {
                termo: payload.termo,
                processo_sei: payload.processo_sei,
                meses: payload.meses,
            },
        )
        .await?;
    Ok(Json(contrato))
}
