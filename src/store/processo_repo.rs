// src/store/processo_repo.rs

use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::processo::{ItemProcesso, Processo, StatusProcesso};
use crate::store::DataStore;

// Os repositórios recebem o snapshot (&DataStore / &mut DataStore) como
// argumento; quem segura o guard do lock é o serviço, e um único guard de
// escrita cobre toda a operação multi-coleção.
#[derive(Clone)]
pub struct ProcessoRepository;

impl ProcessoRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn listar(&self, dados: &DataStore) -> Vec<Processo> {
        dados.processos.clone()
    }

    // Processos arquivados ficam fora de todas as visões ativas
    pub fn listar_ativos(&self, dados: &DataStore) -> Vec<Processo> {
        dados
            .processos
            .iter()
            .filter(|p| p.status != StatusProcesso::Arquivado)
            .cloned()
            .collect()
    }

    pub fn buscar(&self, dados: &DataStore, id: Uuid) -> Result<Processo, AppError> {
        dados
            .processos
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(AppError::RegistroNaoEncontrado("Processo"))
    }

    pub fn inserir(&self, dados: &mut DataStore, processo: Processo) -> Processo {
        dados.processos.insert(0, processo.clone());
        processo
    }

    pub fn atualizar(&self, dados: &mut DataStore, processo: Processo) -> Result<Processo, AppError> {
        let slot = dados
            .processos
            .iter_mut()
            .find(|p| p.id == processo.id)
            .ok_or(AppError::RegistroNaoEncontrado("Processo"))?;
        *slot = processo.clone();
        Ok(processo)
    }

    // Remoção definitiva: leva junto os itens e o rascunho de transição
    pub fn remover(&self, dados: &mut DataStore, id: Uuid) -> Result<(), AppError> {
        let antes = dados.processos.len();
        dados.processos.retain(|p| p.id != id);
        if dados.processos.len() == antes {
            return Err(AppError::RegistroNaoEncontrado("Processo"));
        }
        dados.itens_processo.retain(|i| i.processo_id != id);
        dados.transicoes_pendentes.remove(&id);
        Ok(())
    }

    pub fn itens_do_processo(&self, dados: &DataStore, processo_id: Uuid) -> Vec<ItemProcesso> {
        dados
            .itens_processo
            .iter()
            .filter(|i| i.processo_id == processo_id)
            .cloned()
            .collect()
    }

    pub fn proximo_numero_item(&self, dados: &DataStore, processo_id: Uuid) -> u32 {
        dados
            .itens_processo
            .iter()
            .filter(|i| i.processo_id == processo_id)
            .map(|i| i.numero_item)
            .max()
            .unwrap_or(0)
            + 1
    }

    pub fn buscar_item(&self, dados: &DataStore, id: Uuid) -> Result<ItemProcesso, AppError> {
        dados
            .itens_processo
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or(AppError::RegistroNaoEncontrado("Item de processo"))
    }

    pub fn inserir_item(&self, dados: &mut DataStore, item: ItemProcesso) -> ItemProcesso {
        dados.itens_processo.push(item.clone());
        item
    }

    pub fn atualizar_item(
        &self,
        dados: &mut DataStore,
        item: ItemProcesso,
    ) -> Result<ItemProcesso, AppError> {
        let slot = dados
            .itens_processo
            .iter_mut()
            .find(|i| i.id == item.id)
            .ok_or(AppError::RegistroNaoEncontrado("Item de processo"))?;
        *slot = item.clone();
        Ok(item)
    }

    pub fn remover_item(&self, dados: &mut DataStore, id: Uuid) -> Result<(), AppError> {
        let antes = dados.itens_processo.len();
        dados.itens_processo.retain(|i| i.id != id);
        if dados.itens_processo.len() == antes {
            return Err(AppError::RegistroNaoEncontrado("Item de processo"));
        }
        Ok(())
    }
}
