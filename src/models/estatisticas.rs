// src/models/estatisticas.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::processo::Modalidade;

// Economicidade global: estimado × contratado dos processos com resultado
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Economicidade {
    pub estimado: Decimal,
    pub contratado: Decimal,
    pub diferenca: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinhaMatrizModalidade {
    pub modalidade: Modalidade,
    pub quantidade: usize,
    pub media_dias: i64,

    /// Percentual ILUSTRATIVO (simulado): constante por modalidade com
    /// jitter aleatório. Não é derivado dos valores reais do sistema.
    #[schema(example = 22.4)]
    pub economia_media_simulada: f64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContagemLicitacoes {
    pub pregoes: usize,
    pub dispensas: usize,
    pub adesoes: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinhaClassificacao {
    pub classificacao: String,
    pub quantidade: usize,
    pub valor_estimado: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinhaSazonalidade {
    #[schema(example = "Jan")]
    pub mes: String,
    pub abertos: usize,
    pub concluidos: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinhaSaudePlanejamento {
    #[schema(example = "Planejamento")]
    pub etapa: String,
    pub quantidade: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PainelEstatisticas {
    pub economicidade: Economicidade,
    pub matriz_modalidades: Vec<LinhaMatrizModalidade>,
    pub licitacoes: ContagemLicitacoes,
    pub classificacoes: Vec<LinhaClassificacao>,
    pub sazonalidade: Vec<LinhaSazonalidade>,
    pub saude_planejamento: Vec<LinhaSaudePlanejamento>,
    pub insights: Vec<String>,
}
