// src/services/estatisticas_service.rs
//
// Inteligência estratégica: leituras agregadas sobre processos filtrados por
// exercício e classificação, com atas e contratos seguindo o processo a que
// pertencem.

use chrono::Datelike;
use rand::Rng;
use rust_decimal::Decimal;

use crate::models::estatisticas::{
    ContagemLicitacoes, Economicidade, LinhaClassificacao, LinhaMatrizModalidade,
    LinhaSazonalidade, LinhaSaudePlanejamento, PainelEstatisticas,
};
use crate::models::processo::{ClassificacaoProcesso, Modalidade, Processo, StatusProcesso};
use crate::common::texto::rotulo;
use crate::services::valoracao;
use crate::store::SharedStore;

const MESES: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

#[derive(Clone)]
pub struct EstatisticasService {
    store: SharedStore,
}

impl EstatisticasService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn painel(
        &self,
        ano: Option<i32>,
        classificacao: Option<ClassificacaoProcesso>,
    ) -> PainelEstatisticas {
        let dados = self.store.read().await;

        let processos: Vec<&Processo> = dados
            .processos
            .iter()
            .filter(|p| ano.is_none_or(|a| p.ano_planejamento == a))
            .filter(|p| classificacao.is_none_or(|c| p.classificacao == c))
            .collect();

        // Atas e contratos seguem o processo filtrado
        let ids: Vec<uuid::Uuid> = processos.iter().map(|p| p.id).collect();
        let atas: Vec<_> = dados
            .atas
            .iter()
            .filter(|a| ids.contains(&a.processo_id))
            .collect();
        let contratos: Vec<_> = dados
            .contratos
            .iter()
            .filter(|c| {
                c.processo_id.is_some_and(|pid| ids.contains(&pid))
                    || c.ata_id.is_some_and(|aid| atas.iter().any(|a| a.id == aid))
            })
            .collect();

        // --- Economicidade (processos com resultado fechado) ---
        let mut estimado = Decimal::ZERO;
        let mut contratado = Decimal::ZERO;
        for p in processos.iter().filter(|p| resultado_fechado(p.status)) {
            estimado += dados
                .itens_processo
                .iter()
                .filter(|i| i.processo_id == p.id)
                .map(|i| i.quantidade_estimada * i.valor_unitario_estimado)
                .sum::<Decimal>();
            contratado += contratos
                .iter()
                .filter(|c| c.processo_id == Some(p.id))
                .map(|c| c.valor_global)
                .sum::<Decimal>();
            contratado += atas
                .iter()
                .filter(|a| a.processo_id == p.id)
                .map(|a| valoracao::valor_registrado_ata(&dados, a.id))
                .sum::<Decimal>();
        }
        let economicidade = Economicidade {
            estimado,
            contratado,
            diferenca: estimado - contratado,
        };

        // --- Matriz de modalidades ---
        let matriz_modalidades = montar_matriz(&processos);

        // --- Contagem por natureza da licitação ---
        let mut licitacoes = ContagemLicitacoes {
            pregoes: 0,
            dispensas: 0,
            adesoes: 0,
        };
        for p in &processos {
            match p.modalidade {
                Modalidade::PregaoEletronico | Modalidade::PregaoSrp => licitacoes.pregoes += 1,
                Modalidade::DispensaEletronica
                | Modalidade::DispensaArt75
                | Modalidade::Inexigibilidade => licitacoes.dispensas += 1,
                Modalidade::AdesaoArp => licitacoes.adesoes += 1,
                Modalidade::Concorrencia => {}
            }
        }

        // --- Distribuição por classificação ---
        let mut classificacoes: Vec<LinhaClassificacao> = Vec::new();
        for p in &processos {
            let nome = rotulo(&p.classificacao);
            let valor: Decimal = dados
                .itens_processo
                .iter()
                .filter(|i| i.processo_id == p.id)
                .map(|i| i.quantidade_estimada * i.valor_unitario_estimado)
                .sum();
            match classificacoes.iter_mut().find(|l| l.classificacao == nome) {
                Some(linha) => {
                    linha.quantidade += 1;
                    linha.valor_estimado += valor;
                }
                None => classificacoes.push(LinhaClassificacao {
                    classificacao: nome,
                    quantidade: 1,
                    valor_estimado: valor,
                }),
            }
        }
        classificacoes.sort_by(|a, b| b.quantidade.cmp(&a.quantidade));

        // --- Sazonalidade (ritmo de abertura e conclusão por mês) ---
        let mut sazonalidade: Vec<LinhaSazonalidade> = MESES
            .iter()
            .map(|m| LinhaSazonalidade {
                mes: m.to_string(),
                abertos: 0,
                concluidos: 0,
            })
            .collect();
        for p in &processos {
            let aberto = p.data_inicio.month0() as usize;
            sazonalidade[aberto].abertos += 1;
            if concludente(p.status) {
                let concluido = p.data_ultima_movimentacao.month0() as usize;
                sazonalidade[concluido].concluidos += 1;
            }
        }

        // --- Saúde do planejamento ---
        let saude_planejamento = montar_saude(&processos);

        // --- Insights ---
        let mut insights = Vec::new();
        if let Some(agil) = matriz_modalidades.iter().min_by_key(|l| l.media_dias) {
            insights.push(format!(
                "A modalidade mais ágil é \"{}\" com média de {} dias.",
                rotulo(&agil.modalidade),
                agil.media_dias
            ));
        }
        if let Some(topo) = classificacoes.first() {
            insights.push(format!(
                "A maior demanda é por \"{}\" com {} processos.",
                topo.classificacao, topo.quantidade
            ));
        }
        if licitacoes.pregoes > 0 {
            insights.push(format!(
                "Total de {} Pregões (SRP/Eletrônico) gerenciados no período.",
                licitacoes.pregoes
            ));
        }

        PainelEstatisticas {
            economicidade,
            matriz_modalidades,
            licitacoes,
            classificacoes,
            sazonalidade,
            saude_planejamento,
            insights,
        }
    }
}

// Processos cuja fase competitiva terminou com resultado
fn resultado_fechado(status: StatusProcesso) -> bool {
    use StatusProcesso::*;
    matches!(status, Contrato | CttAssinado | AtaRp | Concluido | Entregue)
}

// Estados que contam como conclusão no ritmo sazonal
fn concludente(status: StatusProcesso) -> bool {
    use StatusProcesso::*;
    matches!(status, Contrato | AtaRp | Concluido)
}

fn montar_matriz(processos: &[&Processo]) -> Vec<LinhaMatrizModalidade> {
    struct Acumulado {
        modalidade: Modalidade,
        quantidade: usize,
        total_dias: i64,
        total_pct: f64,
    }

    let mut rng = rand::thread_rng();
    let mut acumulados: Vec<Acumulado> = Vec::new();
    for p in processos {
        let dias = (p.data_ultima_movimentacao - p.data_inicio).num_days().max(0);

        // Percentual SIMULADO para fins de demonstração: constante por
        // modalidade mais jitter uniforme. Não é uma medida real.
        let base = match p.modalidade {
            Modalidade::PregaoSrp => 25.0,
            Modalidade::PregaoEletronico => 20.0,
            Modalidade::AdesaoArp => 15.0,
            _ => 5.0,
        };
        let pct = base + rng.gen_range(-5.0..5.0);

        match acumulados.iter_mut().find(|a| a.modalidade == p.modalidade) {
            Some(a) => {
                a.quantidade += 1;
                a.total_dias += dias;
                a.total_pct += pct;
            }
            None => acumulados.push(Acumulado {
                modalidade: p.modalidade,
                quantidade: 1,
                total_dias: dias,
                total_pct: pct,
            }),
        }
    }

    let mut linhas: Vec<LinhaMatrizModalidade> = acumulados
        .into_iter()
        .map(|a| LinhaMatrizModalidade {
            modalidade: a.modalidade,
            quantidade: a.quantidade,
            media_dias: a.total_dias / a.quantidade as i64,
            economia_media_simulada: ((a.total_pct / a.quantidade as f64) * 10.0).round() / 10.0,
        })
        .collect();
    linhas.sort_by(|a, b| {
        b.economia_media_simulada
            .partial_cmp(&a.economia_media_simulada)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    linhas
}

fn montar_saude(processos: &[&Processo]) -> Vec<LinhaSaudePlanejamento> {
    use StatusProcesso::*;
    let mut planejamento = 0usize;
    let mut licitacao = 0usize;
    let mut contratado = 0usize;
    let mut problema = 0usize;
    for p in processos {
        match p.status {
            Dod | PesqMerc | CheckList => planejamento += 1,
            Edital | PregaoAgendado | Habilitacao => licitacao += 1,
            Contrato | AtaRp | Concluido | Entregue => contratado += 1,
            _ => problema += 1,
        }
    }
    [
        ("Planejamento", planejamento),
        ("Licitação", licitacao),
        ("Contratado", contratado),
        ("Problema", problema),
    ]
    .into_iter()
    .map(|(etapa, quantidade)| LinhaSaudePlanejamento {
        etapa: etapa.to_string(),
        quantidade,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::store::dados::fixtures;
    use crate::store::novo_store;

    #[tokio::test]
    async fn economicidade_considera_so_processos_com_resultado() {
        let store = novo_store();
        let servico = EstatisticasService::new(store.clone());

        let fechado = fixtures::processo("SEI-1", StatusProcesso::Contrato);
        let aberto = fixtures::processo("SEI-2", StatusProcesso::Edital);
        let (fechado_id, aberto_id) = (fechado.id, aberto.id);
        {
            let mut dados = store.write().await;
            dados.processos.push(fechado);
            dados.processos.push(aberto);
            dados
                .itens_processo
                .push(fixtures::item_processo(fechado_id, 1, "A", dec!(10), dec!(100)));
            dados
                .itens_processo
                .push(fixtures::item_processo(aberto_id, 1, "B", dec!(99), dec!(99)));
            dados.contratos.push(fixtures::contrato(fechado_id, dec!(900)));
        }

        let painel = servico.painel(Some(2024), None).await;
        assert_eq!(painel.economicidade.estimado, dec!(1000));
        assert_eq!(painel.economicidade.contratado, dec!(900));
        assert_eq!(painel.economicidade.diferenca, dec!(100));
    }

    #[tokio::test]
    async fn matriz_rotula_a_economia_como_simulada_dentro_da_faixa() {
        let store = novo_store();
        let servico = EstatisticasService::new(store.clone());
        {
            let mut dados = store.write().await;
            // Modalidade padrão das fixtures: Pregão SRP (base 25)
            dados.processos.push(fixtures::processo("SEI-1", StatusProcesso::Edital));
            dados.processos.push(fixtures::processo("SEI-2", StatusProcesso::Edital));
        }

        let painel = servico.painel(None, None).await;
        assert_eq!(painel.matriz_modalidades.len(), 1);
        let linha = &painel.matriz_modalidades[0];
        assert_eq!(linha.quantidade, 2);
        // Duração das fixtures: 15/02 → 20/05
        assert_eq!(linha.media_dias, 95);
        // Base 25 ± 5 de jitter
        assert!(linha.economia_media_simulada > 19.9 && linha.economia_media_simulada < 30.1);
    }

    #[tokio::test]
    async fn sazonalidade_conta_abertura_e_conclusao_por_mes() {
        let store = novo_store();
        let servico = EstatisticasService::new(store.clone());
        {
            let mut dados = store.write().await;
            // Aberto em fevereiro, concluído (status concludente) em maio
            dados
                .processos
                .push(fixtures::processo("SEI-1", StatusProcesso::Concluido));
            // Aberto em fevereiro, ainda em edital: não conta conclusão
            dados
                .processos
                .push(fixtures::processo("SEI-2", StatusProcesso::Edital));
        }

        let painel = servico.painel(None, None).await;
        let fev = &painel.sazonalidade[1];
        let mai = &painel.sazonalidade[4];
        assert_eq!(fev.abertos, 2);
        assert_eq!(mai.concluidos, 1);
    }

    #[tokio::test]
    async fn filtro_de_classificacao_restringe_o_painel() {
        let store = novo_store();
        let servico = EstatisticasService::new(store.clone());
        {
            let mut dados = store.write().await;
            let mut epi = fixtures::processo("SEI-EPI", StatusProcesso::Edital);
            epi.classificacao = ClassificacaoProcesso::Epi;
            dados.processos.push(epi);
            dados
                .processos
                .push(fixtures::processo("SEI-VTR", StatusProcesso::Edital));
        }

        let painel = servico
            .painel(None, Some(ClassificacaoProcesso::Epi))
            .await;
        assert_eq!(painel.classificacoes.len(), 1);
        assert_eq!(painel.classificacoes[0].classificacao, "EPI");
        assert_eq!(painel.saude_planejamento[1].quantidade, 1);
    }
}
