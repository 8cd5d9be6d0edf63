// src/models/movimento.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::processo::UnidadeDemandante;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TipoOrigem {
    #[serde(rename = "Ata de Registro de Preços")]
    Ata,
    #[serde(rename = "Contrato Direto")]
    Contrato,
}

// Sub-fase logística do pedido, da requisição à entrega
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FaseExecucao {
    Pedido,
    Contrato,
    Assinado,
    Empenho,
    Entregue,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusMovimento {
    #[default]
    Ativo,
    Cancelado,
}

// Requisição de consumo contra um item de Ata (ou contrato direto).
// Movimentos cancelados saem das somas de saldo; arquivados não.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovimentoConsumo {
    pub id: Uuid,

    pub tipo_origem: TipoOrigem,
    // FK polimórfica: ItemAta ou Contrato, conforme tipo_origem
    pub origem_id: Uuid,

    pub quantidade_consumida: Decimal,
    pub data: NaiveDate,
    pub unidade_demandante: UnidadeDemandante,

    pub processo_sei_consumo: Option<String>,

    pub data_empenho: Option<NaiveDate>,
    pub prazo_entrega_dias: Option<u32>,

    // Derivado: data_empenho + prazo_entrega_dias (dias corridos).
    // Recalculado sempre que um dos dois insumos muda.
    pub previsao_entrega: Option<NaiveDate>,

    pub fase_execucao: FaseExecucao,

    #[serde(default)]
    pub status: StatusMovimento,

    #[serde(default)]
    pub arquivado: bool,
}

impl MovimentoConsumo {
    pub fn consome_saldo(&self) -> bool {
        self.status != StatusMovimento::Cancelado
    }

    pub fn recalcular_previsao(&mut self) {
        self.previsao_entrega = match (self.data_empenho, self.prazo_entrega_dias) {
            (Some(empenho), Some(prazo)) if prazo > 0 => {
                empenho.checked_add_signed(chrono::Duration::days(prazo as i64))
            }
            _ => None,
        };
    }
}
