// src/services/ciclo_vida_service.rs
//
// Reações à mudança de status de um processo. Três marcos disparam efeitos
// colaterais: Homologação (fluxo em duas etapas com rascunho), Contrato
// (geração de contrato) e Ata R P (assistente de atas com checagem de
// duplicidade de código entre atas do mesmo processo).

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::ata::{AtaSrp, ItemAta, SituacaoContrato};
use crate::models::ciclo_vida::{
    DisponibilidadeItemAta, EtapaHomologacao, ItemPreSelecionado, ResultadoTransicao,
    TransicaoPendente, ValorHomologacao,
};
use crate::models::contrato::Contrato;
use crate::models::processo::{Processo, StatusProcesso};
use crate::services::valoracao;
use crate::store::{AtaRepository, ContratoRepository, DataStore, ProcessoRepository, SharedStore};

// Dados do formulário de geração de contrato (campos em branco persistem
// como placeholders, sem validação além da seleção)
#[derive(Debug, Clone)]
pub struct GeracaoContrato {
    pub numero_contrato: String,
    pub fornecedor: String,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub itens_selecionados: Vec<Uuid>,
}

// Uma iteração do assistente de atas
#[derive(Debug, Clone)]
pub struct GeracaoAta {
    pub numero_ata: String,
    pub fornecedor: String,
    pub data_assinatura: NaiveDate,
    pub data_vencimento: NaiveDate,
    pub prorrogacao: bool,
    pub itens_selecionados: Vec<Uuid>,
}

#[derive(Clone)]
pub struct CicloVidaService {
    store: SharedStore,
    processo_repo: ProcessoRepository,
    ata_repo: AtaRepository,
    contrato_repo: ContratoRepository,
}

impl CicloVidaService {
    pub fn new(
        store: SharedStore,
        processo_repo: ProcessoRepository,
        ata_repo: AtaRepository,
        contrato_repo: ContratoRepository,
    ) -> Self {
        Self {
            store,
            processo_repo,
            ata_repo,
            contrato_repo,
        }
    }

    // --- ATUALIZAÇÃO DE PROCESSO (com interceptação de marcos) ---
    pub async fn atualizar_processo(
        &self,
        atualizado: Processo,
    ) -> Result<ResultadoTransicao, AppError> {
        let mut dados = self.store.write().await;
        let original = self.processo_repo.buscar(&dados, atualizado.id)?;

        let mut novo = atualizado;
        if novo.numero_processo_sei != original.numero_processo_sei {
            let registro = format!(
                "{} (Alterado em {})",
                original.numero_processo_sei,
                Utc::now().format("%d/%m/%Y")
            );
            novo.historico_numeros = original.historico_numeros.clone();
            novo.historico_numeros.push(registro);
        }

        // INTERCEPTAÇÃO PARA HOMOLOGAÇÃO: a gravação fica suspensa num
        // rascunho até a confirmação em duas etapas.
        if novo.status == StatusProcesso::Homologacao
            && original.status != StatusProcesso::Homologacao
        {
            let itens = self.montar_valores_homologacao(&dados, novo.id);
            let rascunho = TransicaoPendente {
                processo_id: novo.id,
                etapa: EtapaHomologacao::AguardandoConfirmacao,
                processo: novo.clone(),
                itens,
            };
            dados
                .transicoes_pendentes
                .insert(novo.id, rascunho.clone());
            return Ok(ResultadoTransicao::HomologacaoPendente { rascunho });
        }

        // CONTRATO: grava já e devolve o pré-preenchimento do formulário
        if novo.status == StatusProcesso::Contrato && original.status != StatusProcesso::Contrato {
            let processo = self.processo_repo.atualizar(&mut dados, novo)?;
            let itens = self
                .processo_repo
                .itens_do_processo(&dados, processo.id)
                .into_iter()
                .map(|item| ItemPreSelecionado {
                    valor_unitario_efetivo: valoracao::valor_unitario_efetivo(&item),
                    item,
                    selecionado: true,
                })
                .collect();
            return Ok(ResultadoTransicao::GerarContrato { processo, itens });
        }

        // ATA R P: grava já e devolve a disponibilidade para o assistente
        if novo.status == StatusProcesso::AtaRp && original.status != StatusProcesso::AtaRp {
            let processo = self.processo_repo.atualizar(&mut dados, novo)?;
            let itens = self.montar_disponibilidade(&dados, processo.id, None);
            return Ok(ResultadoTransicao::GerarAtas { processo, itens });
        }

        let processo = self.processo_repo.atualizar(&mut dados, novo)?;
        Ok(ResultadoTransicao::Aplicada { processo })
    }

    // --- HOMOLOGAÇÃO ---

    // Etapa (a): "definir valores finais?". Com "não", o status (e as demais
    // edições pendentes) é gravado sem tocar em item algum.
    pub async fn confirmar_homologacao(
        &self,
        processo_id: Uuid,
        definir_valores: bool,
    ) -> Result<ResultadoTransicao, AppError> {
        let mut dados = self.store.write().await;
        let mut rascunho = dados
            .transicoes_pendentes
            .get(&processo_id)
            .cloned()
            .ok_or(AppError::TransicaoNaoEncontrada)?;

        if !definir_valores {
            let processo = self
                .processo_repo
                .atualizar(&mut dados, rascunho.processo)?;
            dados.transicoes_pendentes.remove(&processo_id);
            return Ok(ResultadoTransicao::Aplicada { processo });
        }

        rascunho.etapa = EtapaHomologacao::ColetandoValores;
        dados
            .transicoes_pendentes
            .insert(processo_id, rascunho.clone());
        Ok(ResultadoTransicao::HomologacaoPendente { rascunho })
    }

    // Etapa (b): grava cada valor editado em valor_unitario_final e então o
    // status — um único commit sob o mesmo guard.
    pub async fn concluir_homologacao(
        &self,
        processo_id: Uuid,
        valores: Vec<(Uuid, Decimal)>,
    ) -> Result<ResultadoTransicao, AppError> {
        let mut dados = self.store.write().await;
        let rascunho = dados
            .transicoes_pendentes
            .get(&processo_id)
            .cloned()
            .ok_or(AppError::TransicaoNaoEncontrada)?;
        if rascunho.etapa != EtapaHomologacao::ColetandoValores {
            return Err(AppError::RegraDeNegocio(
                "Confirme a definição de valores antes de concluir a homologação.".to_string(),
            ));
        }

        for (item_id, valor) in valores {
            if let Some(item) = dados
                .itens_processo
                .iter_mut()
                .find(|i| i.id == item_id && i.processo_id == processo_id)
            {
                item.valor_unitario_final = Some(valor);
            }
        }

        let processo = self
            .processo_repo
            .atualizar(&mut dados, rascunho.processo)?;
        dados.transicoes_pendentes.remove(&processo_id);
        Ok(ResultadoTransicao::Aplicada { processo })
    }

    // Fechar o fluxo sem confirmar descarta o rascunho; o status antigo fica
    pub async fn descartar_homologacao(&self, processo_id: Uuid) -> Result<(), AppError> {
        let mut dados = self.store.write().await;
        dados
            .transicoes_pendentes
            .remove(&processo_id)
            .map(|_| ())
            .ok_or(AppError::TransicaoNaoEncontrada)
    }

    // --- GERAÇÃO DE CONTRATO ---
    pub async fn gerar_contrato(
        &self,
        processo_id: Uuid,
        geracao: GeracaoContrato,
    ) -> Result<Contrato, AppError> {
        let mut dados = self.store.write().await;
        let processo = self.processo_repo.buscar(&dados, processo_id)?;

        // Valor global fixado agora, sobre os itens SELECIONADOS; edições
        // posteriores dos itens não o recalculam.
        let valor_global: Decimal = self
            .processo_repo
            .itens_do_processo(&dados, processo_id)
            .iter()
            .filter(|i| geracao.itens_selecionados.contains(&i.id))
            .map(|i| i.quantidade_estimada * valoracao::valor_unitario_efetivo(i))
            .sum();

        let contrato = Contrato {
            id: Uuid::new_v4(),
            ata_id: None,
            processo_id: Some(processo_id),
            numero_contrato: placeholder(geracao.numero_contrato, "S/N"),
            fornecedor: placeholder(geracao.fornecedor, "Fornecedor Pendente"),
            data_inicio: geracao.data_inicio,
            data_fim: geracao.data_fim,
            valor_global,
            situacao: SituacaoContrato::Vigente,
            objeto: processo.objeto,
            arquivado: false,
            historico_aditivos: vec![],
        };
        tracing::info!("Contrato {} gerado para o processo {}", contrato.numero_contrato, processo_id);
        Ok(self.contrato_repo.inserir(&mut dados, contrato))
    }

    // --- ASSISTENTE DE ATAS ---

    pub async fn disponibilidade_atas(
        &self,
        processo_id: Uuid,
    ) -> Result<Vec<DisponibilidadeItemAta>, AppError> {
        let dados = self.store.read().await;
        self.processo_repo.buscar(&dados, processo_id)?;
        Ok(self.montar_disponibilidade(&dados, processo_id, None))
    }

    // Uma iteração do assistente: cria a ata e um ItemAta por item
    // selecionado que ainda não esteja registrado em outra ata do processo.
    // Quantidade e valor unitário são um retrato do momento, não uma
    // referência viva.
    pub async fn criar_ata(
        &self,
        processo_id: Uuid,
        geracao: GeracaoAta,
    ) -> Result<AtaSrp, AppError> {
        let mut dados = self.store.write().await;
        let processo = self.processo_repo.buscar(&dados, processo_id)?;

        let ata_id = Uuid::new_v4();
        let itens = self.montar_itens_ata(&dados, processo_id, ata_id, None, &geracao.itens_selecionados);
        if itens.is_empty() {
            return Err(AppError::SelecaoVazia);
        }

        let ata = AtaSrp {
            id: ata_id,
            processo_id,
            numero_ata: geracao.numero_ata,
            data_assinatura: geracao.data_assinatura,
            data_vencimento: geracao.data_vencimento,
            fornecedor: geracao.fornecedor,
            prorrogacao: geracao.prorrogacao,
            situacao: SituacaoContrato::Vigente,
            objeto: processo.objeto,
            arquivado: false,
            historico_aditivos: vec![],
        };
        let ata = self.ata_repo.inserir(&mut dados, ata);
        self.ata_repo.inserir_itens(&mut dados, itens);
        Ok(ata)
    }

    // Edição de ata existente: mesma checagem de duplicidade, excluindo a
    // própria ata da busca, e o conjunto de itens é SUBSTITUÍDO.
    pub async fn atualizar_ata(
        &self,
        ata_id: Uuid,
        geracao: GeracaoAta,
    ) -> Result<AtaSrp, AppError> {
        let mut dados = self.store.write().await;
        let atual = self.ata_repo.buscar(&dados, ata_id)?;

        let itens = self.montar_itens_ata(
            &dados,
            atual.processo_id,
            ata_id,
            Some(ata_id),
            &geracao.itens_selecionados,
        );
        if itens.is_empty() {
            return Err(AppError::SelecaoVazia);
        }

        let ata = AtaSrp {
            numero_ata: geracao.numero_ata,
            data_assinatura: geracao.data_assinatura,
            data_vencimento: geracao.data_vencimento,
            fornecedor: geracao.fornecedor,
            prorrogacao: geracao.prorrogacao,
            ..atual
        };
        let ata = self.ata_repo.atualizar(&mut dados, ata)?;
        self.ata_repo.substituir_itens(&mut dados, ata_id, itens);
        Ok(ata)
    }

    // --- PROPAGAÇÃO DE EDIÇÃO DE ITEM ---
    //
    // Código, descrição e valor efetivo do item editado seguem para os itens
    // de ata do mesmo processo: pelo vínculo explícito quando gravado, ou
    // pelo código original para registros sem vínculo.
    pub(crate) fn propagar_edicao_item(
        dados: &mut DataStore,
        processo_id: Uuid,
        item_original_id: Uuid,
        codigo_original: &str,
        novo: &crate::models::processo::ItemProcesso,
    ) {
        let atas_do_processo: Vec<Uuid> = dados
            .atas
            .iter()
            .filter(|a| a.processo_id == processo_id)
            .map(|a| a.id)
            .collect();

        let valor_efetivo = valoracao::valor_unitario_efetivo(novo);
        for item_ata in dados
            .itens_ata
            .iter_mut()
            .filter(|i| atas_do_processo.contains(&i.ata_id))
        {
            let vinculado = item_ata.origem_item_processo_id == Some(item_original_id)
                || (item_ata.origem_item_processo_id.is_none()
                    && item_ata.codigo_item == codigo_original);
            if vinculado {
                item_ata.codigo_item = novo.codigo_item.clone();
                item_ata.descricao = novo.descricao.clone();
                item_ata.valor_unitario = valor_efetivo;
            }
        }
    }

    // --- helpers ---

    fn montar_valores_homologacao(
        &self,
        dados: &DataStore,
        processo_id: Uuid,
    ) -> Vec<ValorHomologacao> {
        self.processo_repo
            .itens_do_processo(dados, processo_id)
            .into_iter()
            .map(|item| ValorHomologacao {
                item_id: item.id,
                numero_item: item.numero_item,
                codigo_item: item.codigo_item.clone(),
                descricao: item.descricao.clone(),
                valor_proposto: valoracao::valor_unitario_efetivo(&item),
            })
            .collect()
    }

    fn montar_disponibilidade(
        &self,
        dados: &DataStore,
        processo_id: Uuid,
        excluir_ata: Option<Uuid>,
    ) -> Vec<DisponibilidadeItemAta> {
        self.processo_repo
            .itens_do_processo(dados, processo_id)
            .into_iter()
            .map(|item| {
                let ata_existente = self.ata_repo.ata_existente_para_item(
                    dados,
                    processo_id,
                    &item.codigo_item,
                    excluir_ata,
                );
                DisponibilidadeItemAta {
                    valor_unitario_efetivo: valoracao::valor_unitario_efetivo(&item),
                    disponivel: ata_existente.is_none(),
                    ata_existente,
                    item,
                }
            })
            .collect()
    }

    fn montar_itens_ata(
        &self,
        dados: &DataStore,
        processo_id: Uuid,
        ata_id: Uuid,
        excluir_ata: Option<Uuid>,
        selecionados: &[Uuid],
    ) -> Vec<ItemAta> {
        self.processo_repo
            .itens_do_processo(dados, processo_id)
            .into_iter()
            .filter(|item| selecionados.contains(&item.id))
            .filter(|item| {
                // Item já registrado em outra ata do processo é saltado em
                // silêncio, como na seleção desabilitada do formulário
                self.ata_repo
                    .ata_existente_para_item(dados, processo_id, &item.codigo_item, excluir_ata)
                    .is_none()
            })
            .map(|item| ItemAta {
                id: Uuid::new_v4(),
                ata_id,
                codigo_item: item.codigo_item.clone(),
                tipo_codigo: item.tipo_codigo,
                descricao: item.descricao.clone(),
                quantidade_registrada: item.quantidade_estimada,
                quantidade_consumida: Decimal::ZERO,
                valor_unitario: valoracao::valor_unitario_efetivo(&item),
                origem_item_processo_id: Some(item.id),
            })
            .collect()
    }
}

fn placeholder(valor: String, padrao: &str) -> String {
    if valor.trim().is_empty() {
        padrao.to_string()
    } else {
        valor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::store::dados::fixtures;
    use crate::store::novo_store;

    fn servico(store: SharedStore) -> CicloVidaService {
        CicloVidaService::new(
            store,
            ProcessoRepository::new(),
            AtaRepository::new(),
            ContratoRepository::new(),
        )
    }

    fn geracao_ata(numero: &str, itens: Vec<Uuid>) -> GeracaoAta {
        GeracaoAta {
            numero_ata: numero.to_string(),
            fornecedor: "Fornecedor Alfa LTDA".to_string(),
            data_assinatura: chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            data_vencimento: chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            prorrogacao: false,
            itens_selecionados: itens,
        }
    }

    #[tokio::test]
    async fn homologacao_suspende_a_gravacao_e_commita_com_valores() {
        let store = novo_store();
        let servico = servico(store.clone());

        let processo = fixtures::processo("SEI-1", StatusProcesso::Habilitacao);
        let processo_id = processo.id;
        let item = fixtures::item_processo(processo_id, 1, "A", dec!(10), dec!(100));
        let item_id = item.id;
        {
            let mut dados = store.write().await;
            dados.processos.push(processo.clone());
            dados.itens_processo.push(item);
        }

        let mut editado = processo.clone();
        editado.status = StatusProcesso::Homologacao;
        let resultado = servico.atualizar_processo(editado).await.unwrap();
        let rascunho = match resultado {
            ResultadoTransicao::HomologacaoPendente { rascunho } => rascunho,
            outro => panic!("esperava homologação pendente, veio {outro:?}"),
        };
        assert_eq!(rascunho.etapa, EtapaHomologacao::AguardandoConfirmacao);
        assert_eq!(rascunho.itens[0].valor_proposto, dec!(100));

        // O status ainda não mudou
        {
            let dados = store.read().await;
            assert_eq!(dados.processos[0].status, StatusProcesso::Habilitacao);
        }

        servico.confirmar_homologacao(processo_id, true).await.unwrap();
        servico
            .concluir_homologacao(processo_id, vec![(item_id, dec!(80))])
            .await
            .unwrap();

        let dados = store.read().await;
        assert_eq!(dados.processos[0].status, StatusProcesso::Homologacao);
        assert_eq!(
            dados.itens_processo[0].valor_unitario_final,
            Some(dec!(80))
        );
        assert!(dados.transicoes_pendentes.is_empty());
    }

    #[tokio::test]
    async fn homologacao_sem_valores_nao_toca_nos_itens() {
        let store = novo_store();
        let servico = servico(store.clone());

        let processo = fixtures::processo("SEI-1", StatusProcesso::Habilitacao);
        let processo_id = processo.id;
        {
            let mut dados = store.write().await;
            dados.processos.push(processo.clone());
            dados.itens_processo.push(fixtures::item_processo(
                processo_id,
                1,
                "A",
                dec!(10),
                dec!(100),
            ));
        }

        let mut editado = processo;
        editado.status = StatusProcesso::Homologacao;
        servico.atualizar_processo(editado).await.unwrap();
        let resultado = servico.confirmar_homologacao(processo_id, false).await.unwrap();
        assert!(matches!(resultado, ResultadoTransicao::Aplicada { .. }));

        let dados = store.read().await;
        assert_eq!(dados.processos[0].status, StatusProcesso::Homologacao);
        assert_eq!(dados.itens_processo[0].valor_unitario_final, None);
    }

    #[tokio::test]
    async fn item_registrado_numa_ata_fica_indisponivel_para_a_proxima() {
        let store = novo_store();
        let servico = servico(store.clone());

        let processo = fixtures::processo("SEI-1", StatusProcesso::AtaRp);
        let processo_id = processo.id;
        let item_a = fixtures::item_processo(processo_id, 1, "A", dec!(10), dec!(100));
        let item_b = fixtures::item_processo(processo_id, 2, "B", dec!(5), dec!(50));
        let (id_a, id_b) = (item_a.id, item_b.id);
        {
            let mut dados = store.write().await;
            dados.processos.push(processo);
            dados.itens_processo.push(item_a);
            dados.itens_processo.push(item_b);
        }

        // Iteração 1: registra só o item A
        servico
            .criar_ata(processo_id, geracao_ata("ARP 001/2024", vec![id_a]))
            .await
            .unwrap();

        // Iteração 2: A ficou indisponível, B continua livre
        let disponibilidade = servico.disponibilidade_atas(processo_id).await.unwrap();
        let por_id = |id: Uuid| disponibilidade.iter().find(|d| d.item.id == id).unwrap();
        assert!(!por_id(id_a).disponivel);
        assert_eq!(por_id(id_a).ata_existente.as_deref(), Some("ARP 001/2024"));
        assert!(por_id(id_b).disponivel);

        // Selecionar A de novo é saltado em silêncio; só B entra
        let ata2 = servico
            .criar_ata(processo_id, geracao_ata("ARP 002/2024", vec![id_a, id_b]))
            .await
            .unwrap();
        let dados = store.read().await;
        let itens_ata2: Vec<_> = dados
            .itens_ata
            .iter()
            .filter(|i| i.ata_id == ata2.id)
            .collect();
        assert_eq!(itens_ata2.len(), 1);
        assert_eq!(itens_ata2[0].codigo_item, "B");
        assert_eq!(itens_ata2[0].origem_item_processo_id, Some(id_b));
    }

    #[tokio::test]
    async fn ata_sem_itens_validos_e_rejeitada() {
        let store = novo_store();
        let servico = servico(store.clone());

        let processo = fixtures::processo("SEI-1", StatusProcesso::AtaRp);
        let processo_id = processo.id;
        let item = fixtures::item_processo(processo_id, 1, "A", dec!(10), dec!(100));
        let item_id = item.id;
        {
            let mut dados = store.write().await;
            dados.processos.push(processo);
            dados.itens_processo.push(item);
        }

        servico
            .criar_ata(processo_id, geracao_ata("ARP 001/2024", vec![item_id]))
            .await
            .unwrap();

        // Nada selecionado
        let erro = servico
            .criar_ata(processo_id, geracao_ata("ARP 002/2024", vec![]))
            .await
            .unwrap_err();
        assert!(matches!(erro, AppError::SelecaoVazia));

        // Só itens já registrados em outra ata
        let erro = servico
            .criar_ata(processo_id, geracao_ata("ARP 002/2024", vec![item_id]))
            .await
            .unwrap_err();
        assert!(matches!(erro, AppError::SelecaoVazia));
    }

    #[tokio::test]
    async fn transicao_para_contrato_grava_e_gera_pelo_valor_efetivo() {
        let store = novo_store();
        let servico = servico(store.clone());

        let processo = fixtures::processo("SEI-1", StatusProcesso::Homologacao);
        let processo_id = processo.id;
        let item1 = fixtures::item_processo(processo_id, 1, "A", dec!(10), dec!(100));
        let mut item2 = fixtures::item_processo(processo_id, 2, "B", dec!(5), dec!(50));
        item2.valor_unitario_final = Some(dec!(40));
        let (id1, id2) = (item1.id, item2.id);
        {
            let mut dados = store.write().await;
            dados.processos.push(processo.clone());
            dados.itens_processo.push(item1);
            dados.itens_processo.push(item2);
        }

        let mut editado = processo;
        editado.status = StatusProcesso::Contrato;
        let resultado = servico.atualizar_processo(editado).await.unwrap();
        match resultado {
            ResultadoTransicao::GerarContrato { processo, itens } => {
                assert_eq!(processo.status, StatusProcesso::Contrato);
                assert!(itens.iter().all(|i| i.selecionado));
            }
            outro => panic!("esperava geração de contrato, veio {outro:?}"),
        }

        let contrato = servico
            .gerar_contrato(
                processo_id,
                GeracaoContrato {
                    numero_contrato: "".to_string(),
                    fornecedor: "  ".to_string(),
                    data_inicio: chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                    data_fim: chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                    itens_selecionados: vec![id1, id2],
                },
            )
            .await
            .unwrap();

        // 10×100 + 5×40, com placeholders nos campos em branco
        assert_eq!(contrato.valor_global, dec!(1200));
        assert_eq!(contrato.numero_contrato, "S/N");
        assert_eq!(contrato.fornecedor, "Fornecedor Pendente");
        assert_eq!(contrato.processo_id, Some(processo_id));
    }

    #[tokio::test]
    async fn mudanca_de_numero_sei_alimenta_o_historico() {
        let store = novo_store();
        let servico = servico(store.clone());

        let processo = fixtures::processo("SEI-ANTIGO", StatusProcesso::Edital);
        {
            let mut dados = store.write().await;
            dados.processos.push(processo.clone());
        }

        let mut editado = processo;
        editado.numero_processo_sei = "SEI-NOVO".to_string();
        let resultado = servico.atualizar_processo(editado).await.unwrap();
        match resultado {
            ResultadoTransicao::Aplicada { processo } => {
                assert_eq!(processo.numero_processo_sei, "SEI-NOVO");
                assert_eq!(processo.historico_numeros.len(), 1);
                assert!(processo.historico_numeros[0].starts_with("SEI-ANTIGO"));
            }
            outro => panic!("esperava gravação simples, veio {outro:?}"),
        }
    }
}
