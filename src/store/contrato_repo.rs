// src/store/contrato_repo.rs

use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::contrato::Contrato;
use crate::store::DataStore;

#[derive(Clone)]
pub struct ContratoRepository;

impl ContratoRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn listar_ativos(&self, dados: &DataStore) -> Vec<Contrato> {
        dados
            .contratos
            .iter()
            .filter(|c| !c.arquivado)
            .cloned()
            .collect()
    }

    pub fn buscar(&self, dados: &DataStore, id: Uuid) -> Result<Contrato, AppError> {
        dados
            .contratos
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(AppError::RegistroNaoEncontrado("Contrato"))
    }

    pub fn inserir(&self, dados: &mut DataStore, contrato: Contrato) -> Contrato {
        dados.contratos.push(contrato.clone());
        contrato
    }

    pub fn atualizar(&self, dados: &mut DataStore, contrato: Contrato) -> Result<Contrato, AppError> {
        let slot = dados
            .contratos
            .iter_mut()
            .find(|c| c.id == contrato.id)
            .ok_or(AppError::RegistroNaoEncontrado("Contrato"))?;
        *slot = contrato.clone();
        Ok(contrato)
    }
}
