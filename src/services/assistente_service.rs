// src/services/assistente_service.rs
//
// Colaborador de texto generativo, tratado como serviço opaco: entra a
// pergunta, um contexto e um retrato JSON do domínio filtrado; sai texto
// livre (possivelmente com tabelas Markdown). Qualquer falha — chave ausente,
// rede, resposta malformada — vira mensagem de erro legível para o usuário;
// esta chamada nunca propaga Err. Sem retry, sem timeout próprio, sem
// cancelamento.

use chrono::Datelike;
use serde_json::{json, Value};

use crate::store::SharedStore;

const URL_GERACAO: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent";

const INSTRUCAO_SISTEMA: &str = r#"
Você é um Analista de Dados Sênior e Especialista em Licitações do CBMERJ (Corpo de Bombeiros RJ).

SUA MISSÃO:
1. Analisar os dados fornecidos no formato JSON (Banco de Dados do Sistema).
2. Responder a perguntas do usuário com base EXCLUSIVA nesses dados.
3. Gerar relatórios técnicos, resumos executivos e tabelas comparativas.

REGRAS DE FORMATAÇÃO:
- Se o usuário pedir uma lista ou comparação, GERE UMA TABELA em Markdown.
- Se o usuário pedir um relatório, use títulos (##), negrito (**texto**) e tópicos.
- Valores monetários devem ser formatados como R$ X.XXX,XX.
- Datas devem ser formatadas como DD/MM/AAAA.

SOBRE OS DADOS:
- 'processos': Lista de licitações.
- 'itensProcesso': Itens solicitados em cada processo.
- 'atas': Atas de Registro de Preços vigentes.
- 'contratos': Contratos assinados.
- 'movimentos': Histórico de consumo (pedidos de material).

IMPORTANTE:
- Seja preciso. Se a informação não estiver no JSON, diga que não encontrou. Não invente dados.
- Ao calcular totais, some os valores unitários * quantidades.
"#;

#[derive(Clone)]
pub struct AssistenteService {
    store: SharedStore,
    http: reqwest::Client,
    api_key: Option<String>,
}

impl AssistenteService {
    pub fn new(store: SharedStore, api_key: Option<String>) -> Self {
        Self {
            store,
            http: reqwest::Client::new(),
            api_key,
        }
    }

    pub async fn analisar(&self, pergunta: &str, ano: Option<i32>) -> String {
        let retrato = self.montar_retrato(ano).await;
        let referencia = match ano {
            Some(a) => format!("especificamente do exercício de {a}"),
            None => "de todo o histórico do sistema".to_string(),
        };
        let contexto = format!(
            "Usuário está no módulo de Inteligência de Dados. O objetivo é extrair insights {referencia}. \
             Ignore dados de outros anos se houver ambiguidade."
        );
        self.gerar(pergunta, &contexto, retrato).await
    }

    // O chamador é responsável por filtrar o retrato por exercício antes do
    // envio. Processos filtram pelo ano de planejamento; as demais entidades,
    // pela sua data primária. Os itens de processo seguem inteiros.
    async fn montar_retrato(&self, ano: Option<i32>) -> Value {
        let dados = self.store.read().await;
        let filtra = |a: i32| ano.is_none_or(|alvo| a == alvo);
        json!({
            "processos": dados.processos.iter()
                .filter(|p| filtra(p.ano_planejamento)).collect::<Vec<_>>(),
            "itensProcesso": &dados.itens_processo,
            "irps": dados.irps.iter()
                .filter(|i| filtra(i.data_abertura.year())).collect::<Vec<_>>(),
            "atas": dados.atas.iter()
                .filter(|a| filtra(a.data_assinatura.year())).collect::<Vec<_>>(),
            "itensAta": &dados.itens_ata,
            "contratos": dados.contratos.iter()
                .filter(|c| filtra(c.data_inicio.year())).collect::<Vec<_>>(),
            "movimentos": dados.movimentos.iter()
                .filter(|m| filtra(m.data.year())).collect::<Vec<_>>(),
        })
    }

    async fn gerar(&self, pergunta: &str, contexto: &str, retrato: Value) -> String {
        let Some(chave) = self.api_key.as_deref() else {
            return "Assistente indisponível: chave de API não configurada.".to_string();
        };

        let dados_contexto = match serde_json::to_string_pretty(&retrato) {
            Ok(texto) => format!("\n\n--- DADOS DO SISTEMA (JSON) ---\n{texto}\n--- FIM DOS DADOS ---\n"),
            Err(_) => String::new(),
        };

        let corpo = json!({
            "system_instruction": { "parts": [{ "text": INSTRUCAO_SISTEMA }] },
            "contents": [{
                "parts": [{
                    "text": format!("Contexto: {contexto}{dados_contexto}\n\nSolicitação do Usuário: {pergunta}")
                }]
            }],
            "generationConfig": { "temperature": 0.2 }
        });

        let resposta = self
            .http
            .post(URL_GERACAO)
            .header("x-goog-api-key", chave)
            .json(&corpo)
            .send()
            .await;

        match resposta {
            Ok(resposta) => match resposta.error_for_status() {
                Ok(resposta) => match resposta.json::<Value>().await {
                    Ok(corpo) => extrair_texto(&corpo).unwrap_or_else(|| {
                        "Não foi possível gerar uma resposta. Tente novamente.".to_string()
                    }),
                    Err(e) => {
                        tracing::error!("Resposta do assistente ilegível: {e}");
                        "Erro ao comunicar com o assistente inteligente. Verifique sua conexão."
                            .to_string()
                    }
                },
                Err(e) => {
                    tracing::error!("Assistente retornou erro HTTP: {e}");
                    "Erro ao comunicar com o assistente inteligente. Verifique sua conexão."
                        .to_string()
                }
            },
            Err(e) => {
                tracing::error!("Falha na chamada ao assistente: {e}");
                "Erro ao comunicar com o assistente inteligente. Verifique sua conexão.".to_string()
            }
        }
    }
}

fn extrair_texto(corpo: &Value) -> Option<String> {
    let partes = corpo
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;
    let texto: String = partes
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect::<Vec<_>>()
        .join("");
    (!texto.is_empty()).then_some(texto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::store::dados::fixtures;
    use crate::store::novo_store;

    #[tokio::test]
    async fn retrato_filtra_por_exercicio_mas_leva_itens_inteiros() {
        let store = novo_store();
        {
            let mut dados = store.write().await;
            let p2024 = fixtures::processo("SEI-2024", crate::models::processo::StatusProcesso::Edital);
            let mut p2025 = fixtures::processo("SEI-2025", crate::models::processo::StatusProcesso::Edital);
            p2025.ano_planejamento = 2025;
            let p2024_id = p2024.id;
            dados.processos.push(p2024);
            dados.processos.push(p2025);
            dados
                .itens_processo
                .push(fixtures::item_processo(p2024_id, 1, "A", dec!(1), dec!(1)));
            dados.contratos.push(fixtures::contrato(Uuid::new_v4(), dec!(10)));
        }
        let servico = AssistenteService::new(store, None);

        let retrato = servico.montar_retrato(Some(2025)).await;
        assert_eq!(retrato["processos"].as_array().unwrap().len(), 1);
        assert_eq!(
            retrato["processos"][0]["numeroProcessoSei"],
            "SEI-2025"
        );
        // Itens não são filtrados; contratos de 2024 ficam de fora
        assert_eq!(retrato["itensProcesso"].as_array().unwrap().len(), 1);
        assert_eq!(retrato["contratos"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn sem_chave_a_falha_vira_mensagem_e_nao_erro() {
        let servico = AssistenteService::new(novo_store(), None);
        let resposta = servico.analisar("Qual o total planejado?", None).await;
        assert!(resposta.contains("indisponível"));
    }

    #[test]
    fn extrai_o_texto_dos_candidatos() {
        let corpo = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Olá " }, { "text": "mundo" }] }
            }]
        });
        assert_eq!(extrair_texto(&corpo).as_deref(), Some("Olá mundo"));
        assert_eq!(extrair_texto(&serde_json::json!({})), None);
    }
}
