// src/models/irp.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::processo::TipoCodigo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SituacaoIrp {
    #[serde(rename = "Em elaboração")]
    EmElaboracao,
    #[serde(rename = "Em análise (DGAL)")]
    EmAnaliseDgal,
    #[serde(rename = "Aguardando aprovação")]
    AguardandoAprovacao,
    #[serde(rename = "Publicada")]
    Publicada,
    #[serde(rename = "Concluída")]
    Concluida,
    #[serde(rename = "Cancelada")]
    Cancelada,
}

// Intenção de Registro de Preços: documento de planejamento que agrega a
// demanda de vários órgãos antes do pregão SRP.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IrpCabecalho {
    pub id: Uuid,

    #[schema(example = "IRP 004/2024")]
    pub numero_irp: String,
    pub origem: String,
    pub orgao_gerenciador: String,
    pub situacao: SituacaoIrp,

    // dataLimite >= dataAbertura é esperado, mas não imposto
    pub data_abertura: NaiveDate,
    pub data_limite: NaiveDate,

    pub numero_processo_sei: String,
    pub processo_gerenciador: Option<String>,
    pub processo_participante: Option<String>,
    #[serde(default)]
    pub outros_processos: Vec<String>,

    pub objeto: String,

    #[serde(default)]
    pub arquivado: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IrpItem {
    pub id: Uuid,
    pub irp_id: Uuid,

    pub codigo_item: String,
    pub tipo_codigo: TipoCodigo,
    pub descricao: String,

    #[schema(example = "UN")]
    pub unidade: String,
    pub quantidade: Decimal,
    pub valor_unitario: Decimal,

    // Carimbado quando o item é importado para um processo
    pub numero_processo_sei_gerado: Option<String>,
}
