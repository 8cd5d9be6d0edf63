// src/handlers/processos.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    common::error::AppError,
    config::AppState,
    models::processo::{
        ClassificacaoProcesso, Modalidade, Processo, StatusProcesso, TipoCodigo, UnidadeDemandante,
    },
    services::ciclo_vida_service::{GeracaoAta, GeracaoContrato},
    services::processo_service::{
        FiltroProcessos, ImportacaoItemIrp, NovoItemProcesso, NovoProcesso,
    },
};

// ---
// Validações customizadas
// ---
pub(crate) fn validate_nao_negativo(valor: &Decimal) -> Result<(), ValidationError> {
    if valor.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

pub(crate) fn validate_positivo(valor: &Decimal) -> Result<(), ValidationError> {
    if *valor <= Decimal::ZERO {
        let mut err = ValidationError::new("range");
        err.message = Some("A quantidade deve ser maior que zero.".into());
        return Err(err);
    }
    Ok(())
}

// ---
// Payloads
// ---

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct FiltroProcessosQuery {
    pub busca: Option<String>,
    pub status: Option<StatusProcesso>,
    pub modalidade: Option<Modalidade>,
    pub classificacao: Option<ClassificacaoProcesso>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportacaoItemIrpPayload {
    pub irp_item_id: Uuid,
    pub quantidade: Option<Decimal>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CriarProcessoPayload {
    // Em branco, o sistema atribui um identificador pendente
    #[serde(default)]
    pub numero_processo_sei: String,

    #[serde(default)]
    pub processos_relacionados: Vec<String>,
    pub numero_pregao: Option<String>,

    #[serde(default)]
    pub objeto: String,

    pub modalidade: Modalidade,
    pub classificacao: ClassificacaoProcesso,
    pub status: StatusProcesso,
    pub setor_requisitante: UnidadeDemandante,

    pub ano: i32,
    pub ano_planejamento: i32,
    pub data_inicio: Option<DateTime<Utc>>,

    #[serde(default)]
    pub qtd_participantes_externos: u32,

    pub origem_irp_id: Option<Uuid>,
    #[serde(default)]
    pub importacao: Vec<ImportacaoItemIrpPayload>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AtualizarProcessoPayload {
    #[validate(length(min = 1, message = "O número SEI é obrigatório."))]
    pub numero_processo_sei: String,

    #[serde(default)]
    pub processos_relacionados: Vec<String>,
    pub numero_pregao: Option<String>,
    pub objeto: String,

    pub modalidade: Modalidade,
    pub classificacao: ClassificacaoProcesso,
    pub status: StatusProcesso,
    pub setor_requisitante: UnidadeDemandante,

    pub ano: i32,
    pub ano_planejamento: i32,
    pub data_inicio: DateTime<Utc>,
    pub data_ultima_movimentacao: DateTime<Utc>,

    #[serde(default)]
    pub qtd_participantes_externos: u32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemProcessoPayload {
    #[validate(length(min = 1, message = "O código do item é obrigatório."))]
    pub codigo_item: String,
    pub tipo_codigo: TipoCodigo,

    #[serde(default)]
    pub descricao: String,

    #[validate(custom(function = "validate_positivo"))]
    pub quantidade_estimada: Decimal,

    #[validate(custom(function = "validate_nao_negativo"))]
    pub valor_unitario_estimado: Decimal,

    pub valor_unitario_final: Option<Decimal>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmarHomologacaoPayload {
    pub definir_valores: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValorHomologadoPayload {
    pub item_id: Uuid,
    pub valor: Decimal,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConcluirHomologacaoPayload {
    #[serde(default)]
    pub valores: Vec<ValorHomologadoPayload>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GerarContratoPayload {
    #[serde(default)]
    pub numero_contrato: String,
    #[serde(default)]
    pub fornecedor: String,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    #[serde(default)]
    pub itens_selecionados: Vec<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GerarAtaPayload {
    #[serde(default)]
    pub numero_ata: String,
    #[serde(default)]
    pub fornecedor: String,
    pub data_assinatura: NaiveDate,
    pub data_vencimento: NaiveDate,
    #[serde(default)]
    pub prorrogacao: bool,
    #[serde(default)]
    pub itens_selecionados: Vec<Uuid>,
}

impl GerarAtaPayload {
    pub(crate) fn em_geracao(self) -> GeracaoAta {
        GeracaoAta {
            numero_ata: self.numero_ata,
            fornecedor: self.fornecedor,
            data_assinatura: self.data_assinatura,
            data_vencimento: self.data_vencimento,
            prorrogacao: self.prorrogacao,
            itens_selecionados: self.itens_selecionados,
        }
    }
}

// ---
// Handlers
// ---

// GET /api/processos
#[utoipa::path(
    get,
    path = "/api/processos",
    tag = "Processos",
    params(FiltroProcessosQuery),
    responses(
        (status = 200, description = "Processos ativos (arquivados ficam de fora)", body = Vec<Processo>)
    )
)]
pub async fn listar_processos(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroProcessosQuery>,
) -> Result<impl IntoResponse, AppError> {
    let processos = app_state
        .processo_service
        .listar(FiltroProcessos {
            busca: filtro.busca,
            status: filtro.status,
            modalidade: filtro.modalidade,
            classificacao: filtro.classificacao,
        })
        .await;
    Ok(Json(processos))
}

// POST /api/processos
#[utoipa::path(
    post,
    path = "/api/processos",
    tag = "Processos",
    request_body = CriarProcessoPayload,
    responses(
        (status = 201, description = "Processo criado, com importação opcional de itens da IRP de origem", body = Processo)
    )
)]
pub async fn criar_processo(
    State(app_state): State<AppState>,
    Json(payload): Json<CriarProcessoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let processo = app_state
        .processo_service
        .criar(NovoProcesso {
            numero_processo_sei: payload.numero_processo_sei,
            processos_relacionados: payload.processos_relacionados,
            numero_pregao: payload.numero_pregao,
            objeto: payload.objeto,
            modalidade: payload.modalidade,
            classificacao: payload.classificacao,
            status: payload.status,
            setor_requisitante: payload.setor_requisitante,
            ano: payload.ano,
            ano_planejamento: payload.ano_planejamento,
            data_inicio: payload.data_inicio,
            qtd_participantes_externos: payload.qtd_participantes_externos,
            origem_irp_id: payload.origem_irp_id,
            importacao: payload
                .importacao
                .into_iter()
                .map(|i| ImportacaoItemIrp {
                    irp_item_id: i.irp_item_id,
                    quantidade: i.quantidade,
                })
                .collect(),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(processo)))
}

// PUT /api/processos/{id}
//
// A gravação passa pelo serviço de ciclo de vida: mudar para um dos três
// marcos devolve o gatilho do fluxo correspondente em vez da gravação plana.
#[utoipa::path(
    put,
    path = "/api/processos/{id}",
    tag = "Processos",
    request_body = AtualizarProcessoPayload,
    params(("id" = Uuid, Path, description = "ID do processo")),
    responses(
        (status = 200, description = "Gravação aplicada ou fluxo de marco iniciado", body = crate::models::ciclo_vida::ResultadoTransicao),
        (status = 404, description = "Processo não encontrado")
    )
)]
pub async fn atualizar_processo(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AtualizarProcessoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let atual = app_state.processo_service.buscar(id).await?;
    let atualizado = Processo {
        id: atual.id,
        numero_processo_sei: payload.numero_processo_sei,
        processos_relacionados: payload.processos_relacionados,
        numero_pregao: payload.numero_pregao,
        modalidade: payload.modalidade,
        classificacao: payload.classificacao,
        status: payload.status,
        ano: payload.ano,
        ano_planejamento: payload.ano_planejamento,
        data_inicio: payload.data_inicio,
        data_ultima_movimentacao: payload.data_ultima_movimentacao,
        objeto: payload.objeto,
        setor_requisitante: payload.setor_requisitante,
        origem_irp_id: atual.origem_irp_id,
        qtd_participantes_externos: payload.qtd_participantes_externos,
        historico_numeros: atual.historico_numeros,
    };
    let resultado = app_state
        .ciclo_vida_service
        .atualizar_processo(atualizado)
        .await?;
    Ok(Json(resultado))
}

// DELETE /api/processos/{id}
#[utoipa::path(
    delete,
    path = "/api/processos/{id}",
    tag = "Processos",
    params(("id" = Uuid, Path, description = "ID do processo")),
    responses(
        (status = 204, description = "Processo e itens removidos em definitivo")
    )
)]
pub async fn excluir_processo(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.processo_service.excluir(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// POST /api/processos/{id}/movimentar-hoje
#[utoipa::path(
    post,
    path = "/api/processos/{id}/movimentar-hoje",
    tag = "Processos",
    params(("id" = Uuid, Path, description = "ID do processo")),
    responses(
        (status = 200, description = "Última movimentação registrada agora", body = Processo)
    )
)]
pub async fn movimentar_hoje(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let processo = app_state.processo_service.movimentar_hoje(id).await?;
    Ok(Json(processo))
}

// GET /api/processos/{id}/itens
#[utoipa::path(
    get,
    path = "/api/processos/{id}/itens",
    tag = "Processos",
    params(("id" = Uuid, Path, description = "ID do processo")),
    responses(
        (status = 200, body = Vec<crate::models::processo::ItemProcesso>)
    )
)]
pub async fn listar_itens(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let itens = app_state.processo_service.itens(id).await?;
    Ok(Json(itens))
}

// POST /api/processos/{id}/itens
#[utoipa::path(
    post,
    path = "/api/processos/{id}/itens",
    tag = "Processos",
    request_body = ItemProcessoPayload,
    params(("id" = Uuid, Path, description = "ID do processo")),
    responses(
        (status = 201, body = crate::models::processo::ItemProcesso)
    )
)]
pub async fn criar_item(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ItemProcessoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let item = app_state
        .processo_service
        .criar_item(id, em_novo_item(payload))
        .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

// PUT /api/itens-processo/{id}
//
// Edição propaga código, descrição e valor efetivo para os itens de ata do
// mesmo processo vinculados a este item.
#[utoipa::path(
    put,
    path = "/api/itens-processo/{id}",
    tag = "Processos",
    request_body = ItemProcessoPayload,
    params(("id" = Uuid, Path, description = "ID do item")),
    responses(
        (status = 200, body = crate::models::processo::ItemProcesso)
    )
)]
pub async fn atualizar_item(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ItemProcessoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let item = app_state
        .processo_service
        .atualizar_item(id, em_novo_item(payload))
        .await?;
    Ok(Json(item))
}

// DELETE /api/itens-processo/{id}
#[utoipa::path(
    delete,
    path = "/api/itens-processo/{id}",
    tag = "Processos",
    params(("id" = Uuid, Path, description = "ID do item")),
    responses((status = 204))
)]
pub async fn excluir_item(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.processo_service.excluir_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// POST /api/processos/{id}/homologacao
#[utoipa::path(
    post,
    path = "/api/processos/{id}/homologacao",
    tag = "Processos",
    request_body = ConfirmarHomologacaoPayload,
    params(("id" = Uuid, Path, description = "ID do processo")),
    responses(
        (status = 200, description = "Sem valores: gravação imediata; com valores: formulário pré-preenchido", body = crate::models::ciclo_vida::ResultadoTransicao),
        (status = 409, description = "Não há transição pendente")
    )
)]
pub async fn confirmar_homologacao(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ConfirmarHomologacaoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let resultado = app_state
        .ciclo_vida_service
        .confirmar_homologacao(id, payload.definir_valores)
        .await?;
    Ok(Json(resultado))
}

// POST /api/processos/{id}/homologacao/valores
#[utoipa::path(
    post,
    path = "/api/processos/{id}/homologacao/valores",
    tag = "Processos",
    request_body = ConcluirHomologacaoPayload,
    params(("id" = Uuid, Path, description = "ID do processo")),
    responses(
        (status = 200, description = "Valores finais gravados e status commitado em um só passo", body = crate::models::ciclo_vida::ResultadoTransicao)
    )
)]
pub async fn concluir_homologacao(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ConcluirHomologacaoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let valores = payload
        .valores
        .into_iter()
        .map(|v| (v.item_id, v.valor))
        .collect();
    let resultado = app_state
        .ciclo_vida_service
        .concluir_homologacao(id, valores)
        .await?;
    Ok(Json(resultado))
}

// DELETE /api/processos/{id}/homologacao
#[utoipa::path(
    delete,
    path = "/api/processos/{id}/homologacao",
    tag = "Processos",
    params(("id" = Uuid, Path, description = "ID do processo")),
    responses(
        (status = 204, description = "Rascunho descartado; o status anterior permanece")
    )
)]
pub async fn descartar_homologacao(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.ciclo_vida_service.descartar_homologacao(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// POST /api/processos/{id}/contrato
#[utoipa::path(
    post,
    path = "/api/processos/{id}/contrato",
    tag = "Processos",
    request_body = GerarContratoPayload,
    params(("id" = Uuid, Path, description = "ID do processo")),
    responses(
        (status = 201, description = "Contrato gerado com valor global fixado sobre os itens selecionados", body = crate::models::contrato::Contrato)
    )
)]
pub async fn gerar_contrato(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<GerarContratoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let contrato = app_state
        .ciclo_vida_service
        .gerar_contrato(
            id,
            GeracaoContrato {
                numero_contrato: payload.numero_contrato,
                fornecedor: payload.fornecedor,
                data_inicio: payload.data_inicio,
                data_fim: payload.data_fim,
                itens_selecionados: payload.itens_selecionados,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(contrato)))
}

// GET /api/processos/{id}/atas/disponibilidade
#[utoipa::path(
    get,
    path = "/api/processos/{id}/atas/disponibilidade",
    tag = "Processos",
    params(("id" = Uuid, Path, description = "ID do processo")),
    responses(
        (status = 200, description = "Itens do processo com a ata que já os registra, se houver", body = Vec<crate::models::ciclo_vida::DisponibilidadeItemAta>)
    )
)]
pub async fn disponibilidade_atas(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let itens = app_state.ciclo_vida_service.disponibilidade_atas(id).await?;
    Ok(Json(itens))
}

// POST /api/processos/{id}/atas
#[utoipa::path(
    post,
    path = "/api/processos/{id}/atas",
    tag = "Processos",
    request_body = GerarAtaPayload,
    params(("id" = Uuid, Path, description = "ID do processo")),
    responses(
        (status = 201, description = "Uma iteração do assistente de atas", body = crate::models::ata::AtaSrp),
        (status = 422, description = "Nenhum item válido selecionado")
    )
)]
pub async fn criar_ata(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<GerarAtaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let ata = app_state
        .ciclo_vida_service
        .criar_ata(id, payload.em_geracao())
        .await?;
    Ok((StatusCode::CREATED, Json(ata)))
}

fn em_novo_item(payload: ItemProcessoPayload) -> NovoItemProcesso {
    NovoItemProcesso {
        codigo_item: payload.codigo_item,
        tipo_codigo: payload.tipo_codigo,
        descricao: payload.descricao,
        quantidade_estimada: payload.quantidade_estimada,
        valor_unitario_estimado: payload.valor_unitario_estimado,
        valor_unitario_final: payload.valor_unitario_final,
    }
}
