// src/services/processo_service.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::processo::{
    ClassificacaoProcesso, ItemProcesso, Modalidade, Processo, StatusProcesso, TipoCodigo,
    UnidadeDemandante,
};
use crate::services::ciclo_vida_service::CicloVidaService;
use crate::store::{IrpRepository, ProcessoRepository, SharedStore};

#[derive(Debug, Clone)]
pub struct NovoProcesso {
    pub numero_processo_sei: String,
    pub processos_relacionados: Vec<String>,
    pub numero_pregao: Option<String>,
    pub objeto: String,
    pub modalidade: Modalidade,
    pub classificacao: ClassificacaoProcesso,
    pub status: StatusProcesso,
    pub setor_requisitante: UnidadeDemandante,
    pub ano: i32,
    pub ano_planejamento: i32,
    pub data_inicio: Option<DateTime<Utc>>,
    pub qtd_participantes_externos: u32,
    pub origem_irp_id: Option<Uuid>,
    // Seleção de itens da IRP de origem, com ajuste opcional de quantidade
    pub importacao: Vec<ImportacaoItemIrp>,
}

#[derive(Debug, Clone)]
pub struct ImportacaoItemIrp {
    pub irp_item_id: Uuid,
    pub quantidade: Option<Decimal>,
}

#[derive(Debug, Clone)]
pub struct NovoItemProcesso {
    pub codigo_item: String,
    pub tipo_codigo: TipoCodigo,
    pub descricao: String,
    pub quantidade_estimada: Decimal,
    pub valor_unitario_estimado: Decimal,
    pub valor_unitario_final: Option<Decimal>,
}

#[derive(Debug, Clone)]
pub struct FiltroProcessos {
    pub busca: Option<String>,
    pub status: Option<StatusProcesso>,
    pub modalidade: Option<Modalidade>,
    pub classificacao: Option<ClassificacaoProcesso>,
}

#[derive(Clone)]
pub struct ProcessoService {
    store: SharedStore,
    processo_repo: ProcessoRepository,
    irp_repo: IrpRepository,
}

impl ProcessoService {
    pub fn new(store: SharedStore, processo_repo: ProcessoRepository, irp_repo: IrpRepository) -> Self {
        Self {
            store,
            processo_repo,
            irp_repo,
        }
    }

    // Listagem ativa com os filtros da tela (todos conjuntivos)
    pub async fn listar(&self, filtro: FiltroProcessos) -> Vec<Processo> {
        let dados = self.store.read().await;
        let mut processos = self.processo_repo.listar_ativos(&dados);
        if let Some(busca) = filtro.busca.filter(|b| !b.is_empty()) {
            let termo = busca.to_lowercase();
            processos.retain(|p| {
                p.numero_processo_sei.to_lowercase().contains(&termo)
                    || p.objeto.to_lowercase().contains(&termo)
            });
        }
        if let Some(status) = filtro.status {
            processos.retain(|p| p.status == status);
        }
        if let Some(modalidade) = filtro.modalidade {
            processos.retain(|p| p.modalidade == modalidade);
        }
        if let Some(classificacao) = filtro.classificacao {
            processos.retain(|p| p.classificacao == classificacao);
        }
        processos
    }

    pub async fn buscar(&self, id: Uuid) -> Result<Processo, AppError> {
        let dados = self.store.read().await;
        self.processo_repo.buscar(&dados, id)
    }

    // Criação, com importação opcional dos itens da IRP de origem (uma
    // importação por processo originado; a linhagem fica no item).
    pub async fn criar(&self, novo: NovoProcesso) -> Result<Processo, AppError> {
        let mut dados = self.store.write().await;
        let agora = Utc::now();
        let id = Uuid::new_v4();

        let numero_sei = if novo.numero_processo_sei.trim().is_empty() {
            format!("(Pendente) SEI-{}/{}", agora.format("%y%m"), &id.to_string()[..8])
        } else {
            novo.numero_processo_sei.clone()
        };

        let mut processo = Processo {
            id,
            numero_processo_sei: numero_sei,
            processos_relacionados: novo.processos_relacionados,
            numero_pregao: novo.numero_pregao,
            modalidade: novo.modalidade,
            classificacao: novo.classificacao,
            status: novo.status,
            ano: novo.ano,
            ano_planejamento: novo.ano_planejamento,
            data_inicio: novo.data_inicio.unwrap_or(agora),
            data_ultima_movimentacao: agora,
            objeto: if novo.objeto.trim().is_empty() {
                "Objeto não informado".to_string()
            } else {
                novo.objeto
            },
            setor_requisitante: novo.setor_requisitante,
            origem_irp_id: novo.origem_irp_id,
            qtd_participantes_externos: novo.qtd_participantes_externos,
            historico_numeros: vec![],
        };

        if let Some(irp_id) = novo.origem_irp_id {
            let irp = self.irp_repo.buscar(&dados, irp_id)?;
            // Objeto em branco herda o da IRP de origem
            if processo.objeto == "Objeto não informado" {
                processo.objeto = irp.objeto.clone();
            }

            let mut numero_item = 0u32;
            for selecao in &novo.importacao {
                // Seleção apontando para item inexistente ou de outra IRP é ignorada
                let Ok(mut irp_item) = self.irp_repo.buscar_item(&dados, selecao.irp_item_id) else {
                    continue;
                };
                if irp_item.irp_id != irp_id {
                    continue;
                }
                numero_item += 1;
                let item = ItemProcesso {
                    id: Uuid::new_v4(),
                    processo_id: processo.id,
                    numero_item,
                    codigo_item: irp_item.codigo_item.clone(),
                    tipo_codigo: irp_item.tipo_codigo,
                    descricao: irp_item.descricao.clone(),
                    quantidade_estimada: selecao.quantidade.unwrap_or(irp_item.quantidade),
                    valor_unitario_estimado: irp_item.valor_unitario,
                    valor_unitario_final: None,
                    origem_irp_item_id: Some(irp_item.id),
                };
                self.processo_repo.inserir_item(&mut dados, item);

                irp_item.numero_processo_sei_gerado = Some(processo.numero_processo_sei.clone());
                self.irp_repo.atualizar_item(&mut dados, irp_item)?;
            }
        }

        Ok(self.processo_repo.inserir(&mut dados, processo))
    }

    // Remoção definitiva (processo e itens saem da coleção)
    pub async fn excluir(&self, id: Uuid) -> Result<(), AppError> {
        let mut dados = self.store.write().await;
        self.processo_repo.remover(&mut dados, id)
    }

    // Atualização pontual: registra andamento hoje
    pub async fn movimentar_hoje(&self, id: Uuid) -> Result<Processo, AppError> {
        let mut dados = self.store.write().await;
        let mut processo = self.processo_repo.buscar(&dados, id)?;
        processo.data_ultima_movimentacao = Utc::now();
        self.processo_repo.atualizar(&mut dados, processo)
    }

    pub async fn itens(&self, processo_id: Uuid) -> Result<Vec<ItemProcesso>, AppError> {
        let dados = self.store.read().await;
        self.processo_repo.buscar(&dados, processo_id)?;
        Ok(self.processo_repo.itens_do_processo(&dados, processo_id))
    }

    pub async fn criar_item(
        &self,
        processo_id: Uuid,
        novo: NovoItemProcesso,
    ) -> Result<ItemProcesso, AppError> {
        let mut dados = self.store.write().await;
        self.processo_repo.buscar(&dados, processo_id)?;
        let item = ItemProcesso {
            id: Uuid::new_v4(),
            processo_id,
            numero_item: self.processo_repo.proximo_numero_item(&dados, processo_id),
            codigo_item: novo.codigo_item,
            tipo_codigo: novo.tipo_codigo,
            descricao: novo.descricao,
            quantidade_estimada: novo.quantidade_estimada,
            valor_unitario_estimado: novo.valor_unitario_estimado,
            valor_unitario_final: novo.valor_unitario_final.filter(|v| !v.is_zero()),
            origem_irp_item_id: None,
        };
        Ok(self.processo_repo.inserir_item(&mut dados, item))
    }

    // Edição de item com propagação para as atas do processo que o
    // registram (vínculo explícito, ou código original como fallback)
    pub async fn atualizar_item(
        &self,
        item_id: Uuid,
        novo: NovoItemProcesso,
    ) -> Result<ItemProcesso, AppError> {
        let mut dados = self.store.write().await;
        let original = self.processo_repo.buscar_item(&dados, item_id)?;

        let atualizado = ItemProcesso {
            codigo_item: novo.codigo_item,
            tipo_codigo: novo.tipo_codigo,
            descricao: novo.descricao,
            quantidade_estimada: novo.quantidade_estimada,
            valor_unitario_estimado: novo.valor_unitario_estimado,
            valor_unitario_final: novo.valor_unitario_final.filter(|v| !v.is_zero()),
            ..original.clone()
        };
        let atualizado = self.processo_repo.atualizar_item(&mut dados, atualizado)?;

        CicloVidaService::propagar_edicao_item(
            &mut dados,
            original.processo_id,
            original.id,
            &original.codigo_item,
            &atualizado,
        );
        Ok(atualizado)
    }

    pub async fn excluir_item(&self, item_id: Uuid) -> Result<(), AppError> {
        let mut dados = self.store.write().await;
        self.processo_repo.remover_item(&mut dados, item_id)
    }
}
