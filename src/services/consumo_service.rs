// src/services/consumo_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::movimento::{
    FaseExecucao, MovimentoConsumo, StatusMovimento, TipoOrigem,
};
use crate::models::processo::UnidadeDemandante;
use crate::services::valoracao;
use crate::store::{AtaRepository, MovimentoRepository, SharedStore};

// Linha do monitoramento logístico: o movimento com a descrição do item
// referenciado (vazia se a referência estiver pendurada) e o valor monetário.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovimentoDetalhado {
    #[serde(flatten)]
    pub movimento: MovimentoConsumo,
    pub descricao_item: String,
    pub valor: Decimal,
}

#[derive(Debug, Clone)]
pub struct NovoMovimento {
    pub origem_id: Uuid,
    pub quantidade_consumida: Decimal,
    pub data: Option<NaiveDate>,
    pub unidade_demandante: UnidadeDemandante,
    pub processo_sei_consumo: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EdicaoMovimento {
    pub quantidade_consumida: Decimal,
    pub unidade_demandante: UnidadeDemandante,
    pub processo_sei_consumo: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AvancoFluxo {
    pub fase_execucao: FaseExecucao,
    pub data_empenho: Option<NaiveDate>,
    pub prazo_entrega_dias: Option<u32>,
}

#[derive(Clone)]
pub struct ConsumoService {
    store: SharedStore,
    movimento_repo: MovimentoRepository,
    ata_repo: AtaRepository,
}

impl ConsumoService {
    pub fn new(
        store: SharedStore,
        movimento_repo: MovimentoRepository,
        ata_repo: AtaRepository,
    ) -> Self {
        Self {
            store,
            movimento_repo,
            ata_repo,
        }
    }

    pub async fn listar(&self, busca: Option<String>) -> Vec<MovimentoDetalhado> {
        let dados = self.store.read().await;
        let mut linhas: Vec<MovimentoDetalhado> = self
            .movimento_repo
            .listar_ativos(&dados)
            .into_iter()
            .map(|movimento| {
                let descricao_item = self
                    .ata_repo
                    .buscar_item(&dados, movimento.origem_id)
                    .map(|i| i.descricao)
                    .unwrap_or_default();
                let valor = valoracao::valor_movimento(&dados, &movimento);
                MovimentoDetalhado {
                    movimento,
                    descricao_item,
                    valor,
                }
            })
            .collect();

        if let Some(termo) = busca.filter(|b| !b.is_empty()) {
            let termo = termo.to_lowercase();
            linhas.retain(|l| {
                l.descricao_item.to_lowercase().contains(&termo)
                    || l.movimento
                        .processo_sei_consumo
                        .as_deref()
                        .is_some_and(|p| p.to_lowercase().contains(&termo))
                    || crate::common::texto::rotulo(&l.movimento.unidade_demandante)
                        .to_lowercase()
                        .contains(&termo)
            });
        }
        linhas
    }

    // Novo pedido contra um item de Ata. Nenhuma checagem cruzada de saldo:
    // o consumo pode exceder o registrado (permissividade do modelo).
    pub async fn criar(&self, novo: NovoMovimento) -> Result<MovimentoConsumo, AppError> {
        let mut dados = self.store.write().await;
        let movimento = MovimentoConsumo {
            id: Uuid::new_v4(),
            tipo_origem: TipoOrigem::Ata,
            origem_id: novo.origem_id,
            quantidade_consumida: novo.quantidade_consumida,
            data: novo
                .data
                .unwrap_or_else(|| chrono::Utc::now().date_naive()),
            unidade_demandante: novo.unidade_demandante,
            processo_sei_consumo: novo.processo_sei_consumo,
            data_empenho: None,
            prazo_entrega_dias: None,
            previsao_entrega: None,
            fase_execucao: FaseExecucao::Pedido,
            status: StatusMovimento::Ativo,
            arquivado: false,
        };
        Ok(self.movimento_repo.inserir(&mut dados, movimento))
    }

    pub async fn atualizar(
        &self,
        id: Uuid,
        edicao: EdicaoMovimento,
    ) -> Result<MovimentoConsumo, AppError> {
        let mut dados = self.store.write().await;
        let mut movimento = self.movimento_repo.buscar(&dados, id)?;
        movimento.quantidade_consumida = edicao.quantidade_consumida;
        movimento.unidade_demandante = edicao.unidade_demandante;
        movimento.processo_sei_consumo = edicao.processo_sei_consumo;
        self.movimento_repo.atualizar(&mut dados, movimento)
    }

    // Avanço de fase logística; na fase de empenho, a previsão de entrega é
    // recalculada a partir da data do empenho e do prazo contratual.
    pub async fn avancar_fluxo(
        &self,
        id: Uuid,
        avanco: AvancoFluxo,
    ) -> Result<MovimentoConsumo, AppError> {
        let mut dados = self.store.write().await;
        let mut movimento = self.movimento_repo.buscar(&dados, id)?;
        movimento.fase_execucao = avanco.fase_execucao;
        if let Some(data_empenho) = avanco.data_empenho {
            movimento.data_empenho = Some(data_empenho);
        }
        if let Some(prazo) = avanco.prazo_entrega_dias {
            movimento.prazo_entrega_dias = Some(prazo);
        }
        movimento.recalcular_previsao();
        self.movimento_repo.atualizar(&mut dados, movimento)
    }

    // Cancelamento: o registro permanece, mas sai das somas de saldo e do
    // total executado.
    pub async fn cancelar(&self, id: Uuid) -> Result<MovimentoConsumo, AppError> {
        let mut dados = self.store.write().await;
        let mut movimento = self.movimento_repo.buscar(&dados, id)?;
        movimento.status = StatusMovimento::Cancelado;
        self.movimento_repo.atualizar(&mut dados, movimento)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::store::dados::fixtures;
    use crate::store::novo_store;

    fn servico(store: SharedStore) -> ConsumoService {
        ConsumoService::new(store, MovimentoRepository::new(), AtaRepository::new())
    }

    #[tokio::test]
    async fn previsao_de_entrega_acompanha_empenho_e_prazo() {
        let store = novo_store();
        let servico = servico(store.clone());

        let movimento = fixtures::movimento(Uuid::new_v4(), dec!(10));
        let id = movimento.id;
        {
            let mut dados = store.write().await;
            dados.movimentos.push(movimento);
        }

        let atualizado = servico
            .avancar_fluxo(
                id,
                AvancoFluxo {
                    fase_execucao: FaseExecucao::Empenho,
                    data_empenho: NaiveDate::from_ymd_opt(2024, 6, 10),
                    prazo_entrega_dias: Some(30),
                },
            )
            .await
            .unwrap();
        assert_eq!(
            atualizado.previsao_entrega,
            NaiveDate::from_ymd_opt(2024, 7, 10)
        );

        // Mudou o prazo, muda a previsão
        let atualizado = servico
            .avancar_fluxo(
                id,
                AvancoFluxo {
                    fase_execucao: FaseExecucao::Empenho,
                    data_empenho: None,
                    prazo_entrega_dias: Some(45),
                },
            )
            .await
            .unwrap();
        assert_eq!(
            atualizado.previsao_entrega,
            NaiveDate::from_ymd_opt(2024, 7, 25)
        );
    }

    #[tokio::test]
    async fn listagem_resolve_descricao_e_valor_do_item() {
        let store = novo_store();
        let servico = servico(store.clone());

        let ata = fixtures::ata(Uuid::new_v4(), "ARP 001/2024");
        let item = fixtures::item_ata(ata.id, "CATMAT 100", dec!(50), dec!(20));
        let item_id = item.id;
        {
            let mut dados = store.write().await;
            dados.atas.push(ata);
            dados.itens_ata.push(item);
            dados.movimentos.push(fixtures::movimento(item_id, dec!(3)));
            // Referência pendurada: não derruba a listagem, vale zero
            dados
                .movimentos
                .push(fixtures::movimento(Uuid::new_v4(), dec!(7)));
        }

        let linhas = servico.listar(None).await;
        assert_eq!(linhas.len(), 2);
        let com_item = linhas
            .iter()
            .find(|l| l.movimento.origem_id == item_id)
            .unwrap();
        assert_eq!(com_item.descricao_item, "Item CATMAT 100");
        assert_eq!(com_item.valor, dec!(60));
        let pendurado = linhas
            .iter()
            .find(|l| l.movimento.origem_id != item_id)
            .unwrap();
        assert_eq!(pendurado.valor, dec!(0));
        assert!(pendurado.descricao_item.is_empty());
    }
}
