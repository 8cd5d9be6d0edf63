// src/services/irp_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::irp::{IrpCabecalho, IrpItem, SituacaoIrp};
use crate::models::processo::TipoCodigo;
use crate::store::{IrpRepository, SharedStore};

#[derive(Debug, Clone)]
pub struct DadosIrp {
    pub numero_irp: String,
    pub origem: String,
    pub orgao_gerenciador: String,
    pub situacao: SituacaoIrp,
    pub data_abertura: NaiveDate,
    pub data_limite: NaiveDate,
    pub numero_processo_sei: String,
    pub processo_gerenciador: Option<String>,
    pub processo_participante: Option<String>,
    pub outros_processos: Vec<String>,
    pub objeto: String,
}

#[derive(Debug, Clone)]
pub struct DadosIrpItem {
    pub codigo_item: String,
    pub tipo_codigo: TipoCodigo,
    pub descricao: String,
    pub unidade: String,
    pub quantidade: Decimal,
    pub valor_unitario: Decimal,
}

#[derive(Clone)]
pub struct IrpService {
    store: SharedStore,
    irp_repo: IrpRepository,
}

impl IrpService {
    pub fn new(store: SharedStore, irp_repo: IrpRepository) -> Self {
        Self { store, irp_repo }
    }

    pub async fn listar(&self, busca: Option<String>) -> Vec<IrpCabecalho> {
        let dados = self.store.read().await;
        let mut irps = self.irp_repo.listar_ativas(&dados);
        if let Some(termo) = busca.filter(|b| !b.is_empty()) {
            let termo = termo.to_lowercase();
            irps.retain(|i| {
                i.numero_irp.to_lowercase().contains(&termo)
                    || i.objeto.to_lowercase().contains(&termo)
            });
        }
        irps
    }

    pub async fn criar(&self, dados_irp: DadosIrp) -> IrpCabecalho {
        let mut dados = self.store.write().await;
        let irp = IrpCabecalho {
            id: Uuid::new_v4(),
            numero_irp: dados_irp.numero_irp,
            origem: dados_irp.origem,
            orgao_gerenciador: dados_irp.orgao_gerenciador,
            situacao: dados_irp.situacao,
            data_abertura: dados_irp.data_abertura,
            data_limite: dados_irp.data_limite,
            numero_processo_sei: dados_irp.numero_processo_sei,
            processo_gerenciador: dados_irp.processo_gerenciador,
            processo_participante: dados_irp.processo_participante,
            outros_processos: dados_irp.outros_processos,
            objeto: dados_irp.objeto,
            arquivado: false,
        };
        self.irp_repo.inserir(&mut dados, irp)
    }

    pub async fn atualizar(&self, id: Uuid, dados_irp: DadosIrp) -> Result<IrpCabecalho, AppError> {
        let mut dados = self.store.write().await;
        let atual = self.irp_repo.buscar(&dados, id)?;
        let irp = IrpCabecalho {
            numero_irp: dados_irp.numero_irp,
            origem: dados_irp.origem,
            orgao_gerenciador: dados_irp.orgao_gerenciador,
            situacao: dados_irp.situacao,
            data_abertura: dados_irp.data_abertura,
            data_limite: dados_irp.data_limite,
            numero_processo_sei: dados_irp.numero_processo_sei,
            processo_gerenciador: dados_irp.processo_gerenciador,
            processo_participante: dados_irp.processo_participante,
            outros_processos: dados_irp.outros_processos,
            objeto: dados_irp.objeto,
            ..atual
        };
        self.irp_repo.atualizar(&mut dados, irp)
    }

    pub async fn itens(&self, irp_id: Uuid) -> Result<Vec<IrpItem>, AppError> {
        let dados = self.store.read().await;
        self.irp_repo.buscar(&dados, irp_id)?;
        Ok(self.irp_repo.itens_da_irp(&dados, irp_id))
    }

    pub async fn criar_item(
        &self,
        irp_id: Uuid,
        dados_item: DadosIrpItem,
    ) -> Result<IrpItem, AppError> {
        let mut dados = self.store.write().await;
        self.irp_repo.buscar(&dados, irp_id)?;
        let item = IrpItem {
            id: Uuid::new_v4(),
            irp_id,
            codigo_item: dados_item.codigo_item,
            tipo_codigo: dados_item.tipo_codigo,
            descricao: dados_item.descricao,
            unidade: dados_item.unidade,
            quantidade: dados_item.quantidade,
            valor_unitario: dados_item.valor_unitario,
            numero_processo_sei_gerado: None,
        };
        Ok(self.irp_repo.inserir_item(&mut dados, item))
    }

    pub async fn atualizar_item(
        &self,
        item_id: Uuid,
        dados_item: DadosIrpItem,
    ) -> Result<IrpItem, AppError> {
        let mut dados = self.store.write().await;
        let atual = self.irp_repo.buscar_item(&dados, item_id)?;
        let item = IrpItem {
            codigo_item: dados_item.codigo_item,
            tipo_codigo: dados_item.tipo_codigo,
            descricao: dados_item.descricao,
            unidade: dados_item.unidade,
            quantidade: dados_item.quantidade,
            valor_unitario: dados_item.valor_unitario,
            ..atual
        };
        self.irp_repo.atualizar_item(&mut dados, item)
    }

    pub async fn excluir_item(&self, item_id: Uuid) -> Result<(), AppError> {
        let mut dados = self.store.write().await;
        self.irp_repo.remover_item(&mut dados, item_id)
    }
}
