// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

// 1. Cards volumétricos + bloco financeiro do painel
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumoDashboard {
    pub irps: usize,
    pub processos: usize,
    pub atas: usize,
    pub contratos: usize,
    pub consumos: usize,

    pub total_planejado: Decimal,
    pub total_executado: Decimal,

    pub funil: FunilDemandas,
    pub alertas: Vec<AlertaGovernanca>,
}

// 2. Funil de demandas ativas (três estágios disjuntos)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FunilDemandas {
    pub planejamento: usize,
    pub licitacao: usize,
    pub execucao: usize,
}

// 3. Radar de risco: processos não terminais parados há mais de 30 dias
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertaGovernanca {
    pub processo_id: Uuid,
    pub numero_processo_sei: String,
    pub dias_parado: i64,
    pub mensagem: String,
}

// 4. Memória de cálculo (planejado analítico + componentes do executado)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinhaPlanejado {
    pub numero_processo_sei: String,
    pub objeto: String,
    pub valor: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetalheFinanceiro {
    pub planejado: Vec<LinhaPlanejado>,
    pub total_planejado: Decimal,
    pub contratado: Decimal,
    pub consumo: Decimal,
    pub total_executado: Decimal,
}
