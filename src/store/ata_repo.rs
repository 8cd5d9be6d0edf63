// src/store/ata_repo.rs

use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::ata::{AtaSrp, ItemAta};
use crate::store::DataStore;

#[derive(Clone)]
pub struct AtaRepository;

impl AtaRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn listar_ativas(&self, dados: &DataStore) -> Vec<AtaSrp> {
        dados.atas.iter().filter(|a| !a.arquivado).cloned().collect()
    }

    pub fn buscar(&self, dados: &DataStore, id: Uuid) -> Result<AtaSrp, AppError> {
        dados
            .atas
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(AppError::RegistroNaoEncontrado("Ata"))
    }

    pub fn inserir(&self, dados: &mut DataStore, ata: AtaSrp) -> AtaSrp {
        dados.atas.push(ata.clone());
        ata
    }

    pub fn atualizar(&self, dados: &mut DataStore, ata: AtaSrp) -> Result<AtaSrp, AppError> {
        let slot = dados
            .atas
            .iter_mut()
            .find(|a| a.id == ata.id)
            .ok_or(AppError::RegistroNaoEncontrado("Ata"))?;
        *slot = ata.clone();
        Ok(ata)
    }

    pub fn itens_da_ata(&self, dados: &DataStore, ata_id: Uuid) -> Vec<ItemAta> {
        dados
            .itens_ata
            .iter()
            .filter(|i| i.ata_id == ata_id)
            .cloned()
            .collect()
    }

    pub fn buscar_item(&self, dados: &DataStore, id: Uuid) -> Result<ItemAta, AppError> {
        dados
            .itens_ata
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or(AppError::RegistroNaoEncontrado("Item de ata"))
    }

    pub fn inserir_itens(&self, dados: &mut DataStore, itens: Vec<ItemAta>) {
        dados.itens_ata.extend(itens);
    }

    // Edição de ata: o conjunto de itens é substituído, não acrescido
    pub fn substituir_itens(&self, dados: &mut DataStore, ata_id: Uuid, itens: Vec<ItemAta>) {
        dados.itens_ata.retain(|i| i.ata_id != ata_id);
        dados.itens_ata.extend(itens);
    }

    // Um código de item não pode figurar em duas atas do mesmo processo.
    // Devolve o número da ata que já o registra, ignorando `excluir` (a ata
    // em edição) quando informado.
    pub fn ata_existente_para_item(
        &self,
        dados: &DataStore,
        processo_id: Uuid,
        codigo_item: &str,
        excluir: Option<Uuid>,
    ) -> Option<String> {
        dados
            .atas
            .iter()
            .filter(|a| a.processo_id == processo_id)
            .filter(|a| excluir != Some(a.id))
            .find(|a| {
                dados
                    .itens_ata
                    .iter()
                    .any(|i| i.ata_id == a.id && i.codigo_item == codigo_item)
            })
            .map(|a| a.numero_ata.clone())
    }
}
