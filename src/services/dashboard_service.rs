// src/services/dashboard_service.rs
//
// Leituras do painel de comando. Tudo é recalculado sob demanda a partir do
// snapshot vivo; não há cache nem invalidação.

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;

use crate::models::dashboard::{
    AlertaGovernanca, DetalheFinanceiro, FunilDemandas, LinhaPlanejado, ResumoDashboard,
};
use crate::models::movimento::MovimentoConsumo;
use crate::models::processo::{Processo, StatusProcesso};
use crate::services::valoracao;
use crate::store::SharedStore;

// Dias de paralisação que disparam o alerta de governança
const LIMIAR_ALERTA_DIAS: i64 = 30;

#[derive(Clone)]
pub struct DashboardService {
    store: SharedStore,
}

impl DashboardService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    // Resumo do exercício: contagens (base unificada, ativos + arquivo),
    // totais financeiros, funil e radar de risco.
    pub async fn resumo(&self, ano: Option<i32>) -> ResumoDashboard {
        let dados = self.store.read().await;

        let processos: Vec<&Processo> = dados
            .processos
            .iter()
            .filter(|p| ano.is_none_or(|a| p.ano_planejamento == a))
            .collect();
        let irps = dados
            .irps
            .iter()
            .filter(|i| ano.is_none_or(|a| i.data_abertura.year() == a))
            .count();
        let atas = dados
            .atas
            .iter()
            .filter(|a| ano.is_none_or(|an| a.data_assinatura.year() == an))
            .count();
        let contratos = dados
            .contratos
            .iter()
            .filter(|c| ano.is_none_or(|a| c.data_inicio.year() == a))
            .count();
        let consumos = dados
            .movimentos
            .iter()
            .filter(|m| ano.is_none_or(|a| m.data.year() == a))
            .count();

        ResumoDashboard {
            irps,
            processos: processos.len(),
            atas,
            contratos,
            consumos,
            total_planejado: valoracao::total_planejado(&dados, ano),
            total_executado: valoracao::total_executado(&dados, ano),
            funil: montar_funil(&processos),
            alertas: montar_alertas(&processos),
        }
    }

    // Memória de cálculo dos dois cartões financeiros
    pub async fn financeiro(&self, ano: Option<i32>) -> DetalheFinanceiro {
        let dados = self.store.read().await;

        let mut planejado: Vec<LinhaPlanejado> = dados
            .processos
            .iter()
            .filter(|p| p.status != StatusProcesso::Arquivado)
            .filter(|p| ano.is_none_or(|a| p.ano_planejamento == a))
            .map(|p| LinhaPlanejado {
                numero_processo_sei: p.numero_processo_sei.clone(),
                objeto: p.objeto.clone(),
                valor: valoracao::valor_estimado_processo(&dados, p.id),
            })
            .filter(|l| l.valor > Decimal::ZERO)
            .collect();
        planejado.sort_by(|a, b| b.valor.cmp(&a.valor));
        let total_planejado: Decimal = planejado.iter().map(|l| l.valor).sum();

        let contratado: Decimal = dados
            .contratos
            .iter()
            .filter(|c| ano.is_none_or(|a| c.data_inicio.year() == a))
            .map(|c| c.valor_global)
            .sum();
        let consumo: Decimal = dados
            .movimentos
            .iter()
            .filter(|m: &&MovimentoConsumo| m.consome_saldo())
            .filter(|m| ano.is_none_or(|a| m.data.year() == a))
            .map(|m| valoracao::valor_movimento(&dados, m))
            .sum();

        DetalheFinanceiro {
            planejado,
            total_planejado,
            contratado,
            consumo,
            total_executado: contratado + consumo,
        }
    }
}

// Três estágios disjuntos; o que não é planejamento nem licitação cai em
// execução por padrão.
fn montar_funil(processos: &[&Processo]) -> FunilDemandas {
    use StatusProcesso::*;
    let mut funil = FunilDemandas {
        planejamento: 0,
        licitacao: 0,
        execucao: 0,
    };
    for p in processos.iter().filter(|p| p.status != Arquivado) {
        match p.status {
            Dod | PesqMerc | CheckList => funil.planejamento += 1,
            Edital | ParecerJur | Habilitacao | PregaoAgendado => funil.licitacao += 1,
            _ => funil.execucao += 1,
        }
    }
    funil
}

fn montar_alertas(processos: &[&Processo]) -> Vec<AlertaGovernanca> {
    use StatusProcesso::*;
    let agora = Utc::now();
    processos
        .iter()
        .filter(|p| !matches!(p.status, Arquivado | Concluido | Fracassado))
        .filter_map(|p| {
            let dias = (agora - p.data_ultima_movimentacao).num_days();
            (dias > LIMIAR_ALERTA_DIAS).then(|| AlertaGovernanca {
                processo_id: p.id,
                numero_processo_sei: p.numero_processo_sei.clone(),
                dias_parado: dias,
                mensagem: format!(
                    "PROCESSO {} PARADO HÁ {} DIAS",
                    p.numero_processo_sei, dias
                ),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::store::dados::fixtures;
    use crate::store::novo_store;

    #[tokio::test]
    async fn resumo_particiona_o_funil_e_alerta_paralisados() {
        let store = novo_store();
        let servico = DashboardService::new(store.clone());

        let mut parado = fixtures::processo("SEI-PARADO", StatusProcesso::Edital);
        parado.data_ultima_movimentacao = Utc::now() - Duration::days(45);
        let planejando = fixtures::processo("SEI-PLAN", StatusProcesso::Dod);
        let mut concluido = fixtures::processo("SEI-OK", StatusProcesso::Concluido);
        concluido.data_ultima_movimentacao = Utc::now() - Duration::days(200);
        let executando = fixtures::processo("SEI-EXEC", StatusProcesso::Contrato);

        {
            let mut dados = store.write().await;
            dados.processos.push(parado);
            dados.processos.push(planejando);
            dados.processos.push(concluido);
            dados.processos.push(executando);
        }

        let resumo = servico.resumo(Some(2024)).await;
        assert_eq!(resumo.processos, 4);
        assert_eq!(resumo.funil.planejamento, 1);
        assert_eq!(resumo.funil.licitacao, 1);
        // Concluído e Contrato caem em execução
        assert_eq!(resumo.funil.execucao, 2);

        // Só o Edital parado alerta; o concluído antigo não
        assert_eq!(resumo.alertas.len(), 1);
        assert_eq!(resumo.alertas[0].numero_processo_sei, "SEI-PARADO");
        assert!(resumo.alertas[0].dias_parado >= 45);
    }

    #[tokio::test]
    async fn financeiro_ordena_o_planejado_e_descarta_valor_zero() {
        let store = novo_store();
        let servico = DashboardService::new(store.clone());

        let menor = fixtures::processo("SEI-MENOR", StatusProcesso::Edital);
        let maior = fixtures::processo("SEI-MAIOR", StatusProcesso::Edital);
        let zerado = fixtures::processo("SEI-ZERO", StatusProcesso::Edital);
        let (menor_id, maior_id) = (menor.id, maior.id);
        {
            let mut dados = store.write().await;
            dados.processos.push(menor);
            dados.processos.push(maior);
            dados.processos.push(zerado);
            dados
                .itens_processo
                .push(fixtures::item_processo(menor_id, 1, "A", dec!(1), dec!(100)));
            dados
                .itens_processo
                .push(fixtures::item_processo(maior_id, 1, "B", dec!(10), dec!(100)));
            dados.contratos.push(fixtures::contrato(Uuid::new_v4(), dec!(500)));
        }

        let detalhe = servico.financeiro(None).await;
        assert_eq!(detalhe.planejado.len(), 2);
        assert_eq!(detalhe.planejado[0].numero_processo_sei, "SEI-MAIOR");
        assert_eq!(detalhe.total_planejado, dec!(1100));
        assert_eq!(detalhe.contratado, dec!(500));
        assert_eq!(detalhe.total_executado, dec!(500));
    }
}
