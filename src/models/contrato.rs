// src/models/contrato.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::ata::{HistoricoAditivo, SituacaoContrato};

// Contrato bilateral, com ou sem ata de origem. O valor global é fixado na
// criação (soma dos itens selecionados) e não é recalculado em edições
// posteriores dos itens do processo.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contrato {
    pub id: Uuid,
    pub ata_id: Option<Uuid>,
    pub processo_id: Option<Uuid>,

    #[schema(example = "CTT 021/2024")]
    pub numero_contrato: String,
    pub fornecedor: String,

    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,

    #[schema(example = "1500000.00")]
    pub valor_global: Decimal,

    pub situacao: SituacaoContrato,
    pub objeto: String,

    #[serde(default)]
    pub arquivado: bool,

    #[serde(default)]
    pub historico_aditivos: Vec<HistoricoAditivo>,
}
