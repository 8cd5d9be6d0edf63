// src/models/processo.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums (vocabulário oficial do órgão) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Modalidade {
    #[serde(rename = "Pregão Eletrônico")]
    PregaoEletronico,
    #[serde(rename = "Pregão Eletrônico SRP")]
    PregaoSrp,
    #[serde(rename = "Concorrência Eletrônica")]
    Concorrencia,
    #[serde(rename = "Dispensa Eletrônica")]
    DispensaEletronica,
    #[serde(rename = "Dispensa de Licitação (Art. 75)")]
    DispensaArt75,
    #[serde(rename = "Inexigibilidade")]
    Inexigibilidade,
    #[serde(rename = "Adesão a ARP (Carona)")]
    AdesaoArp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassificacaoProcesso {
    Viaturas,
    Uniformes,
    #[serde(rename = "SERVIÇO")]
    Servico,
    Operacional,
    Obra,
    Epi,
    #[serde(rename = "EMBARCAÇÃO")]
    Embarcacao,
    Concurso,
    #[serde(rename = "CONCESSIONÁRIA")]
    Concessionaria,
    #[serde(rename = "AERONÁUTICO")]
    Aeronautico,
    Administrativo,
    Insumos,
}

// O status é um rótulo de etapa ordenado (não há máquina de estados estrita;
// apenas três transições disparam efeitos colaterais, ver ciclo_vida_service).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum StatusProcesso {
    #[serde(rename = "1 DOD")]
    Dod,
    #[serde(rename = "2 CHECK LIST")]
    CheckList,
    #[serde(rename = "2.0 CHECK Retif")]
    CheckRetif,
    #[serde(rename = "2.1 Pesq. Merc")]
    PesqMerc,
    #[serde(rename = "3 EDITAL")]
    Edital,
    #[serde(rename = "4 PARECER JUR")]
    ParecerJur,
    #[serde(rename = "4.1 APONTAM JUR")]
    ApontamJur,
    #[serde(rename = "4.2 CONTROLADORIA / CGE")]
    Controladoria,
    #[serde(rename = "5 PREGÃO AGENDADO")]
    PregaoAgendado,
    #[serde(rename = "6 ANÁLISE AMOSTRA")]
    AnaliseAmostra,
    #[serde(rename = "6.1 HABILITAÇÃO")]
    Habilitacao,
    #[serde(rename = "7 HOMOLOGAÇÃO")]
    Homologacao,
    #[serde(rename = "7.1 ATA R P")]
    AtaRp,
    #[serde(rename = "7.2 CONTRATO")]
    Contrato,
    #[serde(rename = "7.3 CTT Assinado")]
    CttAssinado,
    #[serde(rename = "8 PRAZO DE ENTREGA")]
    PrazoEntrega,
    #[serde(rename = "9 ENTREGUE")]
    Entregue,
    #[serde(rename = "9.1 CONCLUÍDO")]
    Concluido,
    #[serde(rename = "DESERTO")]
    Deserto,
    #[serde(rename = "FRACASSADO")]
    Fracassado,
    #[serde(rename = "ARQUIVADO")]
    Arquivado,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnidadeDemandante {
    #[serde(rename = "CBA VIII")]
    CbaViii,
    #[serde(rename = "CBA X")]
    CbaX,
    #[serde(rename = "CI - GEP")]
    CiGep,
    #[serde(rename = "CSM/MOP")]
    CsmMop,
    #[serde(rename = "CSM/MOTO")]
    CsmMoto,
    #[serde(rename = "CSM/TEL")]
    CsmTel,
    Dgal,
    Dgas,
    Dgeao,
    Dgei,
    Dgp,
    Dgs,
    Dgst,
    Dgti,
    Emg,
    #[serde(rename = "EXTERNO - GOV ESTADUAL")]
    ExternoEstadual,
    #[serde(rename = "EXTERNO - GOV FEDERAL")]
    ExternoFederal,
    Funesbom,
    Goa,
    Suad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum TipoCodigo {
    #[serde(rename = "CATMAT (Material)")]
    Catmat,
    #[serde(rename = "CATSERV (Serviço)")]
    Catserv,
    #[serde(rename = "ID SIGA (Interno)")]
    IdSiga,
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Processo {
    pub id: Uuid,

    #[schema(example = "SEI-240001/000123/2024")]
    pub numero_processo_sei: String,

    #[serde(default)]
    pub processos_relacionados: Vec<String>,

    #[schema(example = "PE 012/2024")]
    pub numero_pregao: Option<String>,

    pub modalidade: Modalidade,
    pub classificacao: ClassificacaoProcesso,
    pub status: StatusProcesso,

    pub ano: i32,
    pub ano_planejamento: i32,

    pub data_inicio: DateTime<Utc>,
    pub data_ultima_movimentacao: DateTime<Utc>,

    pub objeto: String,
    pub setor_requisitante: UnidadeDemandante,

    pub origem_irp_id: Option<Uuid>,
    pub qtd_participantes_externos: u32,

    // Números SEI anteriores, com a data de alteração
    #[serde(default)]
    pub historico_numeros: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemProcesso {
    pub id: Uuid,
    pub processo_id: Uuid,

    // Sequencial por processo, base 1
    pub numero_item: u32,

    #[schema(example = "CATMAT 45220")]
    pub codigo_item: String,
    pub tipo_codigo: TipoCodigo,
    pub descricao: String,

    pub quantidade_estimada: Decimal,
    pub valor_unitario_estimado: Decimal,

    // Definido apenas após a homologação; quando presente e não nulo,
    // prevalece sobre o estimado em toda valoração a jusante.
    pub valor_unitario_final: Option<Decimal>,

    // Linhagem de importação a partir de um item de IRP
    pub origem_irp_item_id: Option<Uuid>,
}
