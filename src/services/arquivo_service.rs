// src/services/arquivo_service.rs
//
// Arquivo morto: arquivar/restaurar uniforme sobre IRP, Ata, Contrato e
// Movimento (flag), e sobre Processo via o status ARQUIVADO. A restauração
// de processo força o status CONCLUÍDO — nunca o status anterior.

use chrono::Datelike;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::common::texto::rotulo;
use crate::models::arquivo::{FiltroArquivo, RegistroArquivado, TipoArquivo};
use crate::models::processo::StatusProcesso;
use crate::services::valoracao;
use crate::store::{DataStore, SharedStore};

#[derive(Clone)]
pub struct ArquivoService {
    store: SharedStore,
}

impl ArquivoService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn arquivar(&self, tipo: TipoArquivo, id: Uuid) -> Result<(), AppError> {
        let mut dados = self.store.write().await;
        marcar(&mut dados, tipo, id, true)
    }

    pub async fn restaurar(&self, tipo: TipoArquivo, id: Uuid) -> Result<(), AppError> {
        let mut dados = self.store.write().await;
        marcar(&mut dados, tipo, id, false)
    }

    // Listagem do arquivo, por tipo, com filtros conjuntivos: todo filtro
    // preenchido é um AND; vazio deixa passar.
    pub async fn listar(&self, filtro: FiltroArquivo) -> Vec<RegistroArquivado> {
        let dados = self.store.read().await;
        let registros: Vec<RegistroArquivado> = match filtro.tipo {
            TipoArquivo::Processos => dados
                .processos
                .iter()
                .filter(|p| p.status == StatusProcesso::Arquivado)
                .filter(|p| filtro.ano.is_none_or(|a| p.ano_planejamento == a))
                .map(|p| RegistroArquivado {
                    id: p.id,
                    identificador: p.numero_processo_sei.clone(),
                    classificacao: rotulo(&p.classificacao),
                    objeto: p.objeto.clone(),
                    status: rotulo(&p.status),
                    valor: valoracao::valor_estimado_processo(&dados, p.id),
                })
                .collect(),
            TipoArquivo::Irps => dados
                .irps
                .iter()
                .filter(|i| i.arquivado)
                .filter(|i| filtro.ano.is_none_or(|a| i.data_abertura.year() == a))
                .map(|i| RegistroArquivado {
                    id: i.id,
                    identificador: i.numero_irp.clone(),
                    classificacao: "PLANEJAMENTO IRP".to_string(),
                    objeto: i.objeto.clone(),
                    status: rotulo(&i.situacao),
                    valor: valoracao::valor_irp(&dados, i.id),
                })
                .collect(),
            TipoArquivo::Atas => dados
                .atas
                .iter()
                .filter(|a| a.arquivado)
                .filter(|a| filtro.ano.is_none_or(|ano| a.data_assinatura.year() == ano))
                .map(|a| RegistroArquivado {
                    id: a.id,
                    identificador: a.numero_ata.clone(),
                    classificacao: classificacao_transitiva(&dados, Some(a.processo_id)),
                    objeto: a.objeto.clone(),
                    status: rotulo(&a.situacao),
                    valor: valoracao::valor_registrado_ata(&dados, a.id),
                })
                .collect(),
            TipoArquivo::Contratos => dados
                .contratos
                .iter()
                .filter(|c| c.arquivado)
                .filter(|c| filtro.ano.is_none_or(|ano| c.data_inicio.year() == ano))
                .map(|c| RegistroArquivado {
                    id: c.id,
                    identificador: c.numero_contrato.clone(),
                    classificacao: classificacao_transitiva(&dados, c.processo_id),
                    objeto: c.objeto.clone(),
                    status: rotulo(&c.situacao),
                    valor: c.valor_global,
                })
                .collect(),
            TipoArquivo::Consumos => dados
                .movimentos
                .iter()
                .filter(|m| m.arquivado)
                .filter(|m| filtro.ano.is_none_or(|ano| m.data.year() == ano))
                .map(|m| {
                    // Classificação transita Movimento → ItemAta → Ata → Processo
                    let processo_id = dados
                        .itens_ata
                        .iter()
                        .find(|i| i.id == m.origem_id)
                        .and_then(|item| {
                            dados
                                .atas
                                .iter()
                                .find(|a| a.id == item.ata_id)
                                .map(|a| a.processo_id)
                        });
                    RegistroArquivado {
                        id: m.id,
                        identificador: m.processo_sei_consumo.clone().unwrap_or_default(),
                        classificacao: classificacao_transitiva(&dados, processo_id),
                        objeto: rotulo(&m.unidade_demandante),
                        status: rotulo(&m.fase_execucao),
                        valor: valoracao::valor_movimento(&dados, m),
                    }
                })
                .collect(),
        };

        registros
            .into_iter()
            .filter(|r| contem(&r.identificador, &filtro.identificador))
            .filter(|r| contem(&r.classificacao, &filtro.classificacao))
            .filter(|r| contem(&r.objeto, &filtro.objeto))
            .filter(|r| contem(&r.status, &filtro.status))
            .collect()
    }
}

fn contem(valor: &str, filtro: &Option<String>) -> bool {
    match filtro {
        Some(f) if !f.is_empty() => valor.to_lowercase().contains(&f.to_lowercase()),
        _ => true,
    }
}

// Qualquer elo quebrado na cadeia cai no padrão ADMINISTRATIVO
fn classificacao_transitiva(dados: &DataStore, processo_id: Option<Uuid>) -> String {
    processo_id
        .and_then(|id| dados.processos.iter().find(|p| p.id == id))
        .map(|p| rotulo(&p.classificacao))
        .unwrap_or_else(|| "ADMINISTRATIVO".to_string())
}

fn marcar(dados: &mut DataStore, tipo: TipoArquivo, id: Uuid, arquivar: bool) -> Result<(), AppError> {
    match tipo {
        TipoArquivo::Processos => {
            let processo = dados
                .processos
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(AppError::RegistroNaoEncontrado("Processo"))?;
            processo.status = if arquivar {
                StatusProcesso::Arquivado
            } else {
                StatusProcesso::Concluido
            };
        }
        TipoArquivo::Irps => {
            dados
                .irps
                .iter_mut()
                .find(|i| i.id == id)
                .ok_or(AppError::RegistroNaoEncontrado("IRP"))?
                .arquivado = arquivar;
        }
        TipoArquivo::Atas => {
            dados
                .atas
                .iter_mut()
                .find(|a| a.id == id)
                .ok_or(AppError::RegistroNaoEncontrado("Ata"))?
                .arquivado = arquivar;
        }
        TipoArquivo::Contratos => {
            dados
                .contratos
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or(AppError::RegistroNaoEncontrado("Contrato"))?
                .arquivado = arquivar;
        }
        TipoArquivo::Consumos => {
            dados
                .movimentos
                .iter_mut()
                .find(|m| m.id == id)
                .ok_or(AppError::RegistroNaoEncontrado("Movimento de consumo"))?
                .arquivado = arquivar;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::store::dados::fixtures;
    use crate::store::novo_store;

    fn filtro(tipo: TipoArquivo) -> FiltroArquivo {
        FiltroArquivo {
            tipo,
            ano: None,
            identificador: None,
            classificacao: None,
            objeto: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn arquivar_e_restaurar_processo_mexe_so_no_status() {
        let store = novo_store();
        let servico = ArquivoService::new(store.clone());

        let processo = fixtures::processo("SEI-1", StatusProcesso::Edital);
        let id = processo.id;
        {
            let mut dados = store.write().await;
            dados.processos.push(processo);
        }

        servico.arquivar(TipoArquivo::Processos, id).await.unwrap();
        {
            let dados = store.read().await;
            assert_eq!(dados.processos[0].status, StatusProcesso::Arquivado);
        }
        assert_eq!(servico.listar(filtro(TipoArquivo::Processos)).await.len(), 1);

        // Restaurar leva para CONCLUÍDO, não para o status pré-arquivo
        servico.restaurar(TipoArquivo::Processos, id).await.unwrap();
        {
            let dados = store.read().await;
            assert_eq!(dados.processos[0].status, StatusProcesso::Concluido);
        }
        assert!(servico.listar(filtro(TipoArquivo::Processos)).await.is_empty());
    }

    #[tokio::test]
    async fn arquivamento_de_ata_e_reversivel_e_some_da_listagem_ativa() {
        let store = novo_store();
        let servico = ArquivoService::new(store.clone());

        let ata = fixtures::ata(Uuid::new_v4(), "ARP 001/2024");
        let id = ata.id;
        {
            let mut dados = store.write().await;
            dados.atas.push(ata);
        }

        servico.arquivar(TipoArquivo::Atas, id).await.unwrap();
        {
            let dados = store.read().await;
            assert!(dados.atas[0].arquivado);
        }
        servico.restaurar(TipoArquivo::Atas, id).await.unwrap();
        {
            let dados = store.read().await;
            assert!(!dados.atas[0].arquivado);
        }
    }

    #[tokio::test]
    async fn classificacao_de_consumo_transita_ate_o_processo() {
        let store = novo_store();
        let servico = ArquivoService::new(store.clone());

        let processo = fixtures::processo("SEI-1", StatusProcesso::AtaRp);
        let ata = fixtures::ata(processo.id, "ARP 001/2024");
        let item = fixtures::item_ata(ata.id, "A", dec!(10), dec!(5));
        let mut movimento = fixtures::movimento(item.id, dec!(2));
        movimento.arquivado = true;
        // Segundo movimento com referência pendurada: cai no padrão
        let mut pendurado = fixtures::movimento(Uuid::new_v4(), dec!(1));
        pendurado.arquivado = true;
        {
            let mut dados = store.write().await;
            dados.processos.push(processo);
            dados.atas.push(ata);
            dados.itens_ata.push(item);
            dados.movimentos.push(movimento);
            dados.movimentos.push(pendurado);
        }

        let registros = servico.listar(filtro(TipoArquivo::Consumos)).await;
        assert_eq!(registros.len(), 2);
        let classes: Vec<&str> = registros.iter().map(|r| r.classificacao.as_str()).collect();
        assert!(classes.contains(&"VIATURAS"));
        assert!(classes.contains(&"ADMINISTRATIVO"));
        // Valor do arquivado segue calculável: 2 × 5
        assert!(registros.iter().any(|r| r.valor == dec!(10)));
    }

    #[tokio::test]
    async fn filtros_sao_conjuntivos_e_por_substring() {
        let store = novo_store();
        let servico = ArquivoService::new(store.clone());

        let mut a = fixtures::processo("SEI-AAA/2024", StatusProcesso::Arquivado);
        a.objeto = "Aquisição de capacetes".to_string();
        let mut b = fixtures::processo("SEI-BBB/2024", StatusProcesso::Arquivado);
        b.objeto = "Aquisição de viaturas".to_string();
        b.ano_planejamento = 2025;
        {
            let mut dados = store.write().await;
            dados.processos.push(a);
            dados.processos.push(b);
        }

        let mut f = filtro(TipoArquivo::Processos);
        f.identificador = Some("bbb".to_string());
        let registros = servico.listar(f.clone()).await;
        assert_eq!(registros.len(), 1);
        assert_eq!(registros[0].identificador, "SEI-BBB/2024");

        // Conjunção: identificador casa, mas o ano não
        f.ano = Some(2024);
        assert!(servico.listar(f).await.is_empty());

        // Filtro vazio deixa tudo passar
        assert_eq!(servico.listar(filtro(TipoArquivo::Processos)).await.len(), 2);
    }
}
