// src/common/texto.rs

use serde::Serialize;

// Rótulo oficial (pt-BR) de um enum de domínio: o mesmo texto que o serde
// usa no JSON. Evita duplicar as tabelas de rename em Display manual.
pub fn rotulo<T: Serialize>(valor: &T) -> String {
    match serde_json::to_value(valor) {
        Ok(serde_json::Value::String(s)) => s,
        _ => String::new(),
    }
}
