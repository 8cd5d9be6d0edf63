// src/services/governanca_service.rs
//
// Governança de Atas SRP e Contratos: listagens com vigência, edição de
// cabeçalho e termos aditivos. O vencimento só muda pela via do aditivo,
// que fica registrado em histórico imutável.

use chrono::{Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::ata::{AtaSrp, HistoricoAditivo, ItemAta, SituacaoContrato};
use crate::models::contrato::Contrato;
use crate::models::processo::ItemProcesso;
use crate::services::valoracao;
use crate::store::{AtaRepository, ContratoRepository, ProcessoRepository, SharedStore};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemAtaComSaldo {
    #[serde(flatten)]
    pub item: ItemAta,
    pub consumido: Decimal,
    pub saldo: Decimal,
    // Já com piso em zero, para as barras de exibição
    pub percentual_saldo: Decimal,
}

#[derive(Debug, Clone)]
pub struct Aditivo {
    pub termo: String,
    pub processo_sei: String,
    pub meses: u32,
}

#[derive(Debug, Clone)]
pub struct EdicaoAta {
    pub numero_ata: String,
    pub fornecedor: String,
    pub data_assinatura: NaiveDate,
    pub data_vencimento: NaiveDate,
    pub prorrogacao: bool,
    pub situacao: SituacaoContrato,
    pub objeto: String,
}

#[derive(Debug, Clone)]
pub struct EdicaoContrato {
    pub numero_contrato: String,
    pub fornecedor: String,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub situacao: SituacaoContrato,
    pub objeto: String,
}

// Soma de meses com aritmética de calendário: 31/01 + 1 mês cai no último
// dia de fevereiro (clamp de fim de mês), nunca estoura para março.
pub(crate) fn somar_meses(data: NaiveDate, meses: u32) -> NaiveDate {
    data.checked_add_months(Months::new(meses)).unwrap_or(data)
}

#[derive(Clone)]
pub struct GovernancaService {
    store: SharedStore,
    ata_repo: AtaRepository,
    contrato_repo: ContratoRepository,
    processo_repo: ProcessoRepository,
}

impl GovernancaService {
    pub fn new(
        store: SharedStore,
        ata_repo: AtaRepository,
        contrato_repo: ContratoRepository,
        processo_repo: ProcessoRepository,
    ) -> Self {
        Self {
            store,
            ata_repo,
            contrato_repo,
            processo_repo,
        }
    }

    // --- ATAS ---

    pub async fn listar_atas(&self) -> Vec<AtaSrp> {
        let dados = self.store.read().await;
        self.ata_repo.listar_ativas(&dados)
    }

    pub async fn itens_da_ata(&self, ata_id: Uuid) -> Result<Vec<ItemAtaComSaldo>, AppError> {
        let dados = self.store.read().await;
        self.ata_repo.buscar(&dados, ata_id)?;
        Ok(self
            .ata_repo
            .itens_da_ata(&dados, ata_id)
            .into_iter()
            .map(|item| {
                let consumido = valoracao::consumo_item_ata(&dados, item.id);
                let saldo = valoracao::saldo_item_ata(&dados, item.id);
                let percentual_saldo = valoracao::percentual_saldo_item_ata(&dados, item.id);
                ItemAtaComSaldo {
                    item,
                    consumido,
                    saldo,
                    percentual_saldo,
                }
            })
            .collect())
    }

    pub async fn atualizar_ata(&self, id: Uuid, edicao: EdicaoAta) -> Result<AtaSrp, AppError> {
        let mut dados = self.store.write().await;
        let atual = self.ata_repo.buscar(&dados, id)?;
        let ata = AtaSrp {
            numero_ata: edicao.numero_ata,
            fornecedor: edicao.fornecedor,
            data_assinatura: edicao.data_assinatura,
            data_vencimento: edicao.data_vencimento,
            prorrogacao: edicao.prorrogacao,
            situacao: edicao.situacao,
            objeto: edicao.objeto,
            ..atual
        };
        self.ata_repo.atualizar(&mut dados, ata)
    }

    pub async fn aplicar_aditivo_ata(&self, id: Uuid, aditivo: Aditivo) -> Result<AtaSrp, AppError> {
        let mut dados = self.store.write().await;
        let mut ata = self.ata_repo.buscar(&dados, id)?;
        let (novo_vencimento, registro) =
            montar_aditivo(ata.data_vencimento, &aditivo)?;
        ata.data_vencimento = novo_vencimento;
        ata.historico_aditivos.push(registro);
        self.ata_repo.atualizar(&mut dados, ata)
    }

    // --- CONTRATOS ---

    pub async fn listar_contratos(&self) -> Vec<Contrato> {
        let dados = self.store.read().await;
        self.contrato_repo.listar_ativos(&dados)
    }

    // Itens do processo vinculado, para o painel de detalhe do contrato
    pub async fn itens_do_contrato(&self, id: Uuid) -> Result<Vec<ItemProcesso>, AppError> {
        let dados = self.store.read().await;
        let contrato = self.contrato_repo.buscar(&dados, id)?;
        Ok(contrato
            .processo_id
            .map(|processo_id| self.processo_repo.itens_do_processo(&dados, processo_id))
            .unwrap_or_default())
    }

    pub async fn atualizar_contrato(
        &self,
        id: Uuid,
        edicao: EdicaoContrato,
    ) -> Result<Contrato, AppError> {
        let mut dados = self.store.write().await;
        let atual = self.contrato_repo.buscar(&dados, id)?;
        let contrato = Contrato {
            numero_contrato: edicao.numero_contrato,
            fornecedor: edicao.fornecedor,
            data_inicio: edicao.data_inicio,
            data_fim: edicao.data_fim,
            situacao: edicao.situacao,
            objeto: edicao.objeto,
            ..atual
        };
        self.contrato_repo.atualizar(&mut dados, contrato)
    }

    pub async fn aplicar_aditivo_contrato(
        &self,
        id: Uuid,
        aditivo: Aditivo,
    ) -> Result<Contrato, AppError> {
        let mut dados = self.store.write().await;
        let mut contrato = self.contrato_repo.buscar(&dados, id)?;
        let (novo_fim, registro) = montar_aditivo(contrato.data_fim, &aditivo)?;
        contrato.data_fim = novo_fim;
        contrato.historico_aditivos.push(registro);
        self.contrato_repo.atualizar(&mut dados, contrato)
    }
}

fn montar_aditivo(
    vencimento_atual: NaiveDate,
    aditivo: &Aditivo,
) -> Result<(NaiveDate, HistoricoAditivo), AppError> {
    if aditivo.termo.trim().is_empty() || aditivo.processo_sei.trim().is_empty() {
        return Err(AppError::RegraDeNegocio(
            "Informe a Referência do Termo e o Processo SEI antes de aplicar.".to_string(),
        ));
    }
    if aditivo.meses == 0 {
        return Err(AppError::RegraDeNegocio(
            "O aditivo precisa acrescentar ao menos um mês.".to_string(),
        ));
    }
    let novo_vencimento = somar_meses(vencimento_atual, aditivo.meses);
    let registro = HistoricoAditivo {
        termo: aditivo.termo.clone(),
        processo_sei: aditivo.processo_sei.clone(),
        meses_adicionados: aditivo.meses,
        data_alteracao: Utc::now(),
        novo_vencimento,
    };
    Ok((novo_vencimento, registro))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::store::dados::fixtures;
    use crate::store::novo_store;

    fn servico(store: SharedStore) -> GovernancaService {
        GovernancaService::new(
            store,
            AtaRepository::new(),
            ContratoRepository::new(),
            ProcessoRepository::new(),
        )
    }

    #[test]
    fn soma_de_meses_sem_clamp() {
        // 31/01 + 12 meses cai em 31/01 do ano seguinte
        let base = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(
            somar_meses(base, 12),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
        );
    }

    #[test]
    fn soma_de_meses_com_clamp_de_fim_de_mes() {
        // 31/01 + 1 mês em ano bissexto cai em 29/02
        let base = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(
            somar_meses(base, 1),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        // Em ano comum, 28/02
        let base = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(
            somar_meses(base, 1),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }

    #[tokio::test]
    async fn aditivo_move_o_vencimento_e_registra_historico() {
        let store = novo_store();
        let servico = servico(store.clone());

        let mut ata = fixtures::ata(Uuid::new_v4(), "ARP 001/2024");
        ata.data_vencimento = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let id = ata.id;
        {
            let mut dados = store.write().await;
            dados.atas.push(ata);
        }

        let atualizada = servico
            .aplicar_aditivo_ata(
                id,
                Aditivo {
                    termo: "1º Termo Aditivo".to_string(),
                    processo_sei: "SEI-240001/777000/2024".to_string(),
                    meses: 12,
                },
            )
            .await
            .unwrap();

        assert_eq!(
            atualizada.data_vencimento,
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
        );
        assert_eq!(atualizada.historico_aditivos.len(), 1);
        let registro = &atualizada.historico_aditivos[0];
        assert_eq!(registro.meses_adicionados, 12);
        assert_eq!(registro.novo_vencimento, atualizada.data_vencimento);
    }

    #[tokio::test]
    async fn aditivo_sem_termo_e_rejeitado() {
        let store = novo_store();
        let servico = servico(store.clone());

        let ata = fixtures::ata(Uuid::new_v4(), "ARP 001/2024");
        let id = ata.id;
        {
            let mut dados = store.write().await;
            dados.atas.push(ata);
        }

        let erro = servico
            .aplicar_aditivo_ata(
                id,
                Aditivo {
                    termo: "".to_string(),
                    processo_sei: "SEI-1".to_string(),
                    meses: 12,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(erro, AppError::RegraDeNegocio(_)));
    }

    #[tokio::test]
    async fn itens_da_ata_trazem_saldo_recalculado() {
        let store = novo_store();
        let servico = servico(store.clone());

        let ata = fixtures::ata(Uuid::new_v4(), "ARP 001/2024");
        let ata_id = ata.id;
        let mut item = fixtures::item_ata(ata_id, "A", dec!(100), dec!(10));
        // O cache de consumida é ignorado; vale a soma dos movimentos
        item.quantidade_consumida = dec!(99);
        let item_id = item.id;
        {
            let mut dados = store.write().await;
            dados.atas.push(ata);
            dados.itens_ata.push(item);
            dados.movimentos.push(fixtures::movimento(item_id, dec!(25)));
        }

        let itens = servico.itens_da_ata(ata_id).await.unwrap();
        assert_eq!(itens.len(), 1);
        assert_eq!(itens[0].consumido, dec!(25));
        assert_eq!(itens[0].saldo, dec!(75));
        assert_eq!(itens[0].percentual_saldo, dec!(75));
    }
}
