// src/handlers/irp.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::irp::SituacaoIrp,
    models::processo::TipoCodigo,
    services::irp_service::{DadosIrp, DadosIrpItem},
};

use super::processos::{validate_nao_negativo, validate_positivo};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct BuscaQuery {
    pub busca: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IrpPayload {
    #[validate(length(min = 1, message = "O número da IRP é obrigatório."))]
    pub numero_irp: String,

    #[serde(default)]
    pub origem: String,
    #[serde(default)]
    pub orgao_gerenciador: String,
    pub situacao: SituacaoIrp,

    pub data_abertura: NaiveDate,
    pub data_limite: NaiveDate,

    #[serde(default)]
    pub numero_processo_sei: String,
    pub processo_gerenciador: Option<String>,
    pub processo_participante: Option<String>,
    #[serde(default)]
    pub outros_processos: Vec<String>,

    #[serde(default)]
    pub objeto: String,
}

impl IrpPayload {
    fn em_dados(self) -> DadosIrp {
        DadosIrp {
            numero_irp: self.numero_irp,
            origem: self.origem,
            orgao_gerenciador: self.orgao_gerenciador,
            situacao: self.situacao,
            data_abertura: self.data_abertura,
            data_limite: self.data_limite,
            numero_processo_sei: self.numero_processo_sei,
            processo_gerenciador: self.processo_gerenciador,
            processo_participante: self.processo_participante,
            outros_processos: self.outros_processos,
            objeto: self.objeto,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IrpItemPayload {
    #[validate(length(min = 1, message = "O código do item é obrigatório."))]
    pub codigo_item: String,
    pub tipo_codigo: TipoCodigo,

    #[serde(default)]
    pub descricao: String,
    #[serde(default = "unidade_padrao")]
    pub unidade: String,

    #[validate(custom(function = "validate_positivo"))]
    pub quantidade: Decimal,

    #[validate(custom(function = "validate_nao_negativo"))]
    pub valor_unitario: Decimal,
}

fn unidade_padrao() -> String {
    "UN".to_string()
}

impl IrpItemPayload {
    fn em_dados(self) -> DadosIrpItem {
        DadosIrpItem {
            codigo_item: self.codigo_item,
            tipo_codigo: self.tipo_codigo,
            descricao: self.descricao,
            unidade: self.unidade,
            quantidade: self.quantidade,
            valor_unitario: self.valor_unitario,
        }
    }
}

// GET /api/irps
#[utoipa::path(
    get,
    path = "/api/irps",
    tag = "IRP",
    params(BuscaQuery),
    responses(
        (status = 200, description = "IRPs ativas", body = Vec<crate::models::irp::IrpCabecalho>)
    )
)]
pub async fn listar_irps(
    State(app_state): State<AppState>,
    Query(query): Query<BuscaQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.irp_service.listar(query.busca).await))
}

// POST /api/irps
#[utoipa::path(
    post,
    path = "/api/irps",
    tag = "IRP",
    request_body = IrpPayload,
    responses((status = 201, body = crate::models::irp::IrpCabecalho))
)]
pub async fn criar_irp(
    State(app_state): State<AppState>,
    Json(payload): Json<IrpPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let irp = app_state.irp_service.criar(payload.em_dados()).await;
    Ok((StatusCode::CREATED, Json(irp)))
}

// PUT /api/irps/{id}
#[utoipa::path(
    put,
    path = "/api/irps/{id}",
    tag = "IRP",
    request_body = IrpPayload,
    params(("id" = Uuid, Path, description = "ID da IRP")),
    responses((status = 200, body = crate::models::irp::IrpCabecalho))
)]
pub async fn atualizar_irp(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<IrpPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let irp = app_state.irp_service.atualizar(id, payload.em_dados()).await?;
    Ok(Json(irp))
}

// GET /api/irps/{id}/itens
#[utoipa::path(
    get,
    path = "/api/irps/{id}/itens",
    tag = "IRP",
    params(("id" = Uuid, Path, description = "ID da IRP")),
    responses((status = 200, body = Vec<crate::models::irp::IrpItem>))
)]
pub async fn listar_itens_irp(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.irp_service.itens(id).await?))
}

// POST /api/irps/{id}/itens
#[utoipa::path(
    post,
    path = "/api/irps/{id}/itens",
    tag = "IRP",
    request_body = IrpItemPayload,
    params(("id" = Uuid, Path, description = "ID da IRP")),
    responses((status = 201, body = crate::models::irp::IrpItem))
)]
pub async fn criar_item_irp(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<IrpItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let item = app_state.irp_service.criar_item(id, payload.em_dados()).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

// PUT /api/itens-irp/{id}
#[utoipa::path(
    put,
    path = "/api/itens-irp/{id}",
    tag = "IRP",
    request_body = IrpItemPayload,
    params(("id" = Uuid, Path, description = "ID do item")),
    responses((status = 200, body = crate::models::irp::IrpItem))
)]
pub async fn atualizar_item_irp(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<IrpItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let item = app_state
        .irp_service
        .atualizar_item(id, payload.em_dados())
        .await?;
    Ok(Json(item))
}

// DELETE /api/itens-irp/{id}
#[utoipa::path(
    delete,
    path = "/api/itens-irp/{id}",
    tag = "IRP",
    params(("id" = Uuid, Path, description = "ID do item")),
    responses((status = 204))
)]
pub async fn excluir_item_irp(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.irp_service.excluir_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
