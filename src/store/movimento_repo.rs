// src/store/movimento_repo.rs

use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::movimento::MovimentoConsumo;
use crate::store::DataStore;

#[derive(Clone)]
pub struct MovimentoRepository;

impl MovimentoRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn listar_ativos(&self, dados: &DataStore) -> Vec<MovimentoConsumo> {
        dados
            .movimentos
            .iter()
            .filter(|m| !m.arquivado)
            .cloned()
            .collect()
    }

    pub fn buscar(&self, dados: &DataStore, id: Uuid) -> Result<MovimentoConsumo, AppError> {
        dados
            .movimentos
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(AppError::RegistroNaoEncontrado("Movimento de consumo"))
    }

    pub fn inserir(&self, dados: &mut DataStore, movimento: MovimentoConsumo) -> MovimentoConsumo {
        dados.movimentos.insert(0, movimento.clone());
        movimento
    }

    pub fn atualizar(
        &self,
        dados: &mut DataStore,
        movimento: MovimentoConsumo,
    ) -> Result<MovimentoConsumo, AppError> {
        let slot = dados
            .movimentos
            .iter_mut()
            .find(|m| m.id == movimento.id)
            .ok_or(AppError::RegistroNaoEncontrado("Movimento de consumo"))?;
        *slot = movimento.clone();
        Ok(movimento)
    }
}
