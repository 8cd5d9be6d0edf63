// src/store/irp_repo.rs

use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::irp::{IrpCabecalho, IrpItem};
use crate::store::DataStore;

#[derive(Clone)]
pub struct IrpRepository;

impl IrpRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn listar_ativas(&self, dados: &DataStore) -> Vec<IrpCabecalho> {
        dados.irps.iter().filter(|i| !i.arquivado).cloned().collect()
    }

    pub fn buscar(&self, dados: &DataStore, id: Uuid) -> Result<IrpCabecalho, AppError> {
        dados
            .irps
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or(AppError::RegistroNaoEncontrado("IRP"))
    }

    pub fn inserir(&self, dados: &mut DataStore, irp: IrpCabecalho) -> IrpCabecalho {
        dados.irps.insert(0, irp.clone());
        irp
    }

    pub fn atualizar(
        &self,
        dados: &mut DataStore,
        irp: IrpCabecalho,
    ) -> Result<IrpCabecalho, AppError> {
        let slot = dados
            .irps
            .iter_mut()
            .find(|i| i.id == irp.id)
            .ok_or(AppError::RegistroNaoEncontrado("IRP"))?;
        *slot = irp.clone();
        Ok(irp)
    }

    pub fn itens_da_irp(&self, dados: &DataStore, irp_id: Uuid) -> Vec<IrpItem> {
        dados
            .itens_irp
            .iter()
            .filter(|i| i.irp_id == irp_id)
            .cloned()
            .collect()
    }

    pub fn buscar_item(&self, dados: &DataStore, id: Uuid) -> Result<IrpItem, AppError> {
        dados
            .itens_irp
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or(AppError::RegistroNaoEncontrado("Item de IRP"))
    }

    pub fn inserir_item(&self, dados: &mut DataStore, item: IrpItem) -> IrpItem {
        dados.itens_irp.push(item.clone());
        item
    }

    pub fn atualizar_item(&self, dados: &mut DataStore, item: IrpItem) -> Result<IrpItem, AppError> {
        let slot = dados
            .itens_irp
            .iter_mut()
            .find(|i| i.id == item.id)
            .ok_or(AppError::RegistroNaoEncontrado("Item de IRP"))?;
        *slot = item.clone();
        Ok(item)
    }

    pub fn remover_item(&self, dados: &mut DataStore, id: Uuid) -> Result<(), AppError> {
        let antes = dados.itens_irp.len();
        dados.itens_irp.retain(|i| i.id != id);
        if dados.itens_irp.len() == antes {
            return Err(AppError::RegistroNaoEncontrado("Item de IRP"));
        }
        Ok(())
    }
}
