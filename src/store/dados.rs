// src/store/dados.rs

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::ata::{AtaSrp, ItemAta};
use crate::models::ciclo_vida::TransicaoPendente;
use crate::models::contrato::Contrato;
use crate::models::irp::{IrpCabecalho, IrpItem};
use crate::models::movimento::MovimentoConsumo;
use crate::models::processo::{ItemProcesso, Processo};

// As cinco coleções de entidades da sessão, mais os rascunhos transitórios de
// homologação. Todo o estado vive aqui; reiniciar o processo perde tudo.
//
// O guard de escrita do RwLock é a fronteira de atomicidade: operações que
// tocam mais de uma coleção fazem todas as mutações sob um único guard.
#[derive(Debug, Default)]
pub struct DataStore {
    pub processos: Vec<Processo>,
    pub itens_processo: Vec<ItemProcesso>,
    pub irps: Vec<IrpCabecalho>,
    pub itens_irp: Vec<IrpItem>,
    pub atas: Vec<AtaSrp>,
    pub itens_ata: Vec<ItemAta>,
    pub contratos: Vec<Contrato>,
    pub movimentos: Vec<MovimentoConsumo>,

    pub transicoes_pendentes: HashMap<Uuid, TransicaoPendente>,
}

pub type SharedStore = Arc<RwLock<DataStore>>;

pub fn novo_store() -> SharedStore {
    Arc::new(RwLock::new(DataStore::default()))
}

#[cfg(test)]
pub mod fixtures {
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::models::ata::{AtaSrp, ItemAta, SituacaoContrato};
    use crate::models::contrato::Contrato;
    use crate::models::irp::{IrpCabecalho, IrpItem, SituacaoIrp};
    use crate::models::movimento::{FaseExecucao, MovimentoConsumo, StatusMovimento, TipoOrigem};
    use crate::models::processo::{
        ClassificacaoProcesso, ItemProcesso, Modalidade, Processo, StatusProcesso, TipoCodigo,
        UnidadeDemandante,
    };

    pub fn processo(numero: &str, status: StatusProcesso) -> Processo {
        Processo {
            id: Uuid::new_v4(),
            numero_processo_sei: numero.to_string(),
            processos_relacionados: vec![],
            numero_pregao: None,
            modalidade: Modalidade::PregaoSrp,
            classificacao: ClassificacaoProcesso::Viaturas,
            status,
            ano: 2024,
            ano_planejamento: 2024,
            data_inicio: Utc.with_ymd_and_hms(2024, 2, 15, 9, 0, 0).unwrap(),
            data_ultima_movimentacao: Utc.with_ymd_and_hms(2024, 5, 20, 14, 30, 0).unwrap(),
            objeto: "Aquisição de Veículos de Combate a Incêndio".to_string(),
            setor_requisitante: UnidadeDemandante::Dgal,
            origem_irp_id: None,
            qtd_participantes_externos: 0,
            historico_numeros: vec![],
        }
    }

    pub fn item_processo(
        processo_id: Uuid,
        numero_item: u32,
        codigo: &str,
        quantidade: Decimal,
        valor_estimado: Decimal,
    ) -> ItemProcesso {
        ItemProcesso {
            id: Uuid::new_v4(),
            processo_id,
            numero_item,
            codigo_item: codigo.to_string(),
            tipo_codigo: TipoCodigo::Catmat,
            descricao: format!("Item {codigo}"),
            quantidade_estimada: quantidade,
            valor_unitario_estimado: valor_estimado,
            valor_unitario_final: None,
            origem_irp_item_id: None,
        }
    }

    pub fn ata(processo_id: Uuid, numero: &str) -> AtaSrp {
        AtaSrp {
            id: Uuid::new_v4(),
            processo_id,
            numero_ata: numero.to_string(),
            data_assinatura: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            data_vencimento: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            fornecedor: "Fornecedor Alfa LTDA".to_string(),
            prorrogacao: true,
            situacao: SituacaoContrato::Vigente,
            objeto: "Registro de preços de materiais operacionais".to_string(),
            arquivado: false,
            historico_aditivos: vec![],
        }
    }

    pub fn item_ata(
        ata_id: Uuid,
        codigo: &str,
        quantidade_registrada: Decimal,
        valor_unitario: Decimal,
    ) -> ItemAta {
        ItemAta {
            id: Uuid::new_v4(),
            ata_id,
            codigo_item: codigo.to_string(),
            tipo_codigo: TipoCodigo::Catmat,
            descricao: format!("Item {codigo}"),
            quantidade_registrada,
            quantidade_consumida: dec!(0),
            valor_unitario,
            origem_item_processo_id: None,
        }
    }

    pub fn movimento(origem_id: Uuid, quantidade: Decimal) -> MovimentoConsumo {
        MovimentoConsumo {
            id: Uuid::new_v4(),
            tipo_origem: TipoOrigem::Ata,
            origem_id,
            quantidade_consumida: quantidade,
            data: NaiveDate::from_ymd_opt(2024, 4, 10).unwrap(),
            unidade_demandante: UnidadeDemandante::Dgal,
            processo_sei_consumo: Some("SEI-240001/555000/2024".to_string()),
            data_empenho: None,
            prazo_entrega_dias: None,
            previsao_entrega: None,
            fase_execucao: FaseExecucao::Pedido,
            status: StatusMovimento::Ativo,
            arquivado: false,
        }
    }

    pub fn contrato(processo_id: Uuid, valor_global: Decimal) -> Contrato {
        Contrato {
            id: Uuid::new_v4(),
            ata_id: None,
            processo_id: Some(processo_id),
            numero_contrato: "CTT 001/2024".to_string(),
            fornecedor: "Fornecedor Beta LTDA".to_string(),
            data_inicio: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            data_fim: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            valor_global,
            situacao: SituacaoContrato::Vigente,
            objeto: "Fornecimento continuado".to_string(),
            arquivado: false,
            historico_aditivos: vec![],
        }
    }

    pub fn irp(numero: &str) -> IrpCabecalho {
        IrpCabecalho {
            id: Uuid::new_v4(),
            numero_irp: numero.to_string(),
            origem: "ComprasNet".to_string(),
            orgao_gerenciador: "DGAL".to_string(),
            situacao: SituacaoIrp::Publicada,
            data_abertura: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            data_limite: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            numero_processo_sei: "SEI-240001/000050/2024".to_string(),
            processo_gerenciador: None,
            processo_participante: None,
            outros_processos: vec![],
            objeto: "Registro de preços de EPI".to_string(),
            arquivado: false,
        }
    }

    pub fn irp_item(
        irp_id: Uuid,
        codigo: &str,
        quantidade: Decimal,
        valor_unitario: Decimal,
    ) -> IrpItem {
        IrpItem {
            id: Uuid::new_v4(),
            irp_id,
            codigo_item: codigo.to_string(),
            tipo_codigo: TipoCodigo::Catmat,
            descricao: format!("Item {codigo}"),
            unidade: "UN".to_string(),
            quantidade,
            valor_unitario,
            numero_processo_sei_gerado: None,
        }
    }
}
