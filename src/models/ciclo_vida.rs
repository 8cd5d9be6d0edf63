// src/models/ciclo_vida.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::processo::{ItemProcesso, Processo};

// Etapas do fluxo de homologação. O rascunho vive no store até o commit
// (ou descarte) e carrega o processo já com as edições pendentes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EtapaHomologacao {
    AguardandoConfirmacao,
    ColetandoValores,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValorHomologacao {
    pub item_id: Uuid,
    pub numero_item: u32,
    pub codigo_item: String,
    pub descricao: String,
    // Pré-preenchido com o valor unitário efetivo vigente
    pub valor_proposto: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransicaoPendente {
    pub processo_id: Uuid,
    pub etapa: EtapaHomologacao,
    // Estado completo do processo aguardando o commit (inclui o status alvo
    // e as demais edições feitas no mesmo formulário).
    pub processo: Processo,
    pub itens: Vec<ValorHomologacao>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemPreSelecionado {
    #[serde(flatten)]
    pub item: ItemProcesso,
    pub valor_unitario_efetivo: Decimal,
    pub selecionado: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisponibilidadeItemAta {
    #[serde(flatten)]
    pub item: ItemProcesso,
    pub valor_unitario_efetivo: Decimal,
    pub disponivel: bool,
    // Número da ata que já registra este código, quando indisponível
    pub ata_existente: Option<String>,
}

// Resultado de uma edição de processo: ou a gravação simples, ou o gatilho
// de um dos três fluxos de marco (homologação, contrato, atas).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "tipo", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultadoTransicao {
    Aplicada {
        processo: Processo,
    },
    HomologacaoPendente {
        rascunho: TransicaoPendente,
    },
    GerarContrato {
        processo: Processo,
        itens: Vec<ItemPreSelecionado>,
    },
    GerarAtas {
        processo: Processo,
        itens: Vec<DisponibilidadeItemAta>,
    },
}
