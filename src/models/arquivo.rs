// src/models/arquivo.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoArquivo {
    Processos,
    Irps,
    Atas,
    Contratos,
    Consumos,
}

// Filtros conjuntivos da listagem do arquivo morto: todo filtro ativo é um
// predicado AND; campo vazio deixa passar.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct FiltroArquivo {
    pub tipo: TipoArquivo,
    pub ano: Option<i32>,
    pub identificador: Option<String>,
    pub classificacao: Option<String>,
    pub objeto: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistroArquivado {
    pub id: Uuid,
    pub identificador: String,
    pub classificacao: String,
    pub objeto: String,
    pub status: String,
    pub valor: Decimal,
}
