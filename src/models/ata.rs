// src/models/ata.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::processo::TipoCodigo;

// Situação compartilhada entre Atas SRP e Contratos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SituacaoContrato {
    #[serde(rename = "Vigente")]
    Vigente,
    #[serde(rename = "Em execução")]
    EmExecucao,
    #[serde(rename = "Aguardando Empenho")]
    AguardandoEmpenho,
    #[serde(rename = "Suspenso")]
    Suspenso,
    #[serde(rename = "Cancelado/Rescindido")]
    Cancelado,
    #[serde(rename = "Finalizado/Expirado")]
    Finalizado,
}

// Registro imutável de prorrogação; o vencimento só muda por esta via.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoricoAditivo {
    #[schema(example = "1º Termo Aditivo")]
    pub termo: String,
    pub processo_sei: String,
    pub meses_adicionados: u32,
    pub data_alteracao: DateTime<Utc>,
    pub novo_vencimento: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AtaSrp {
    pub id: Uuid,
    pub processo_id: Uuid,

    #[schema(example = "ARP 015/2024")]
    pub numero_ata: String,
    pub data_assinatura: NaiveDate,
    pub data_vencimento: NaiveDate,
    pub fornecedor: String,
    pub prorrogacao: bool,
    pub situacao: SituacaoContrato,
    pub objeto: String,

    #[serde(default)]
    pub arquivado: bool,

    #[serde(default)]
    pub historico_aditivos: Vec<HistoricoAditivo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemAta {
    pub id: Uuid,
    pub ata_id: Uuid,

    pub codigo_item: String,
    pub tipo_codigo: TipoCodigo,
    pub descricao: String,

    pub quantidade_registrada: Decimal,

    // Cache histórico de exibição; o saldo oficial é sempre recalculado a
    // partir dos movimentos ativos (valoracao::saldo_item_ata).
    pub quantidade_consumida: Decimal,

    pub valor_unitario: Decimal,

    // Vínculo explícito com o item de processo de origem, gravado na geração
    // da ata. Registros antigos sem vínculo caem no casamento por código.
    pub origem_item_processo_id: Option<Uuid>,
}
