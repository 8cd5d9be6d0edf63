// src/services/documento_service.rs
//
// Exporta a resposta do assistente para um documento baixável. A conversão é
// de melhor esforço, orientada a linhas: linha que começa e termina com pipe
// é linha de tabela, linha de traços é separador (ignorada), marcadores de
// ênfase são removidos. Markdown malformado nunca derruba a geração.

use genpdf::{elements, style, Element};

use crate::common::error::AppError;

#[derive(Debug, PartialEq)]
pub enum BlocoDocumento {
    Titulo { nivel: u8, texto: String },
    Paragrafo(String),
    Tabela {
        cabecalho: Vec<String>,
        linhas: Vec<Vec<String>>,
    },
}

// Varredura linha a linha do Markdown devolvido pelo assistente
pub fn interpretar_markdown(markdown: &str) -> Vec<BlocoDocumento> {
    let mut blocos = Vec::new();
    let mut tabela: Option<(Vec<String>, Vec<Vec<String>>)> = None;

    for linha in markdown.lines() {
        let linha = linha.trim();

        if linha.len() > 1 && linha.starts_with('|') && linha.ends_with('|') {
            let celulas = dividir_celulas(linha);
            match tabela.as_mut() {
                None => tabela = Some((celulas, Vec::new())),
                Some((_, linhas)) => {
                    // Linha separadora do cabeçalho
                    if linha.contains("---") {
                        continue;
                    }
                    linhas.push(celulas);
                }
            }
            continue;
        }

        if let Some((cabecalho, linhas)) = tabela.take() {
            blocos.push(BlocoDocumento::Tabela { cabecalho, linhas });
        }

        if let Some(texto) = linha.strip_prefix("### ") {
            blocos.push(BlocoDocumento::Titulo { nivel: 3, texto: limpar_enfase(texto) });
        } else if let Some(texto) = linha.strip_prefix("## ") {
            blocos.push(BlocoDocumento::Titulo { nivel: 2, texto: limpar_enfase(texto) });
        } else if let Some(texto) = linha.strip_prefix("# ") {
            blocos.push(BlocoDocumento::Titulo { nivel: 1, texto: limpar_enfase(texto) });
        } else if !linha.is_empty() {
            blocos.push(BlocoDocumento::Paragrafo(limpar_enfase(linha)));
        }
    }

    if let Some((cabecalho, linhas)) = tabela.take() {
        blocos.push(BlocoDocumento::Tabela { cabecalho, linhas });
    }
    blocos
}

// Células entre pipes, descartando as pontas vazias
fn dividir_celulas(linha: &str) -> Vec<String> {
    let mut celulas: Vec<&str> = linha.split('|').collect();
    if celulas.first().is_some_and(|c| c.trim().is_empty()) {
        celulas.remove(0);
    }
    if celulas.last().is_some_and(|c| c.trim().is_empty()) {
        celulas.pop();
    }
    celulas
        .into_iter()
        .map(|c| limpar_enfase(c.trim()))
        .collect()
}

fn limpar_enfase(texto: &str) -> String {
    texto.replace("**", "").replace('*', "")
}

#[derive(Clone)]
pub struct DocumentoService;

impl DocumentoService {
    pub fn new() -> Self {
        Self
    }

    pub fn gerar(&self, conteudo: &str, ano: Option<i32>) -> Result<Vec<u8>, AppError> {
        // Carrega a fonte da pasta 'fonts/'
        let familia = genpdf::fonts::from_files("./fonts", "Roboto", None)
            .map_err(|_| AppError::FonteNaoEncontrada("Fonte não encontrada na pasta ./fonts".to_string()))?;

        let mut doc = genpdf::Document::new(familia);
        doc.set_title("Relatório de Inteligência de Dados");
        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(10);
        doc.set_page_decorator(decorator);

        // --- CABEÇALHO ---
        doc.push(
            elements::Paragraph::new("CBMERJ - Relatório de Inteligência de Dados")
                .styled(style::Style::new().bold().with_font_size(18)),
        );
        let referencia = match ano {
            Some(a) => format!("Ano de Referência Analisado: {a}"),
            None => "Ano de Referência Analisado: Histórico Completo".to_string(),
        };
        doc.push(elements::Paragraph::new(referencia).styled(style::Style::new().with_font_size(10)));
        doc.push(elements::Break::new(1.5));

        // --- CORPO ---
        for bloco in interpretar_markdown(conteudo) {
            match bloco {
                BlocoDocumento::Titulo { nivel, texto } => {
                    let tamanho = match nivel {
                        1 => 16,
                        2 => 14,
                        _ => 12,
                    };
                    doc.push(
                        elements::Paragraph::new(texto)
                            .styled(style::Style::new().bold().with_font_size(tamanho)),
                    );
                    doc.push(elements::Break::new(0.5));
                }
                BlocoDocumento::Paragrafo(texto) => {
                    doc.push(elements::Paragraph::new(texto));
                    doc.push(elements::Break::new(0.5));
                }
                BlocoDocumento::Tabela { cabecalho, linhas } => {
                    let colunas = cabecalho.len().max(1);
                    let mut tabela = elements::TableLayout::new(vec![1; colunas]);
                    tabela.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

                    let mut linha_cabecalho = tabela.row();
                    for celula in preencher(cabecalho, colunas) {
                        linha_cabecalho = linha_cabecalho
                            .element(elements::Paragraph::new(celula).styled(style::Style::new().bold()));
                    }
                    linha_cabecalho.push()?;

                    for cells in linhas {
                        let mut linha = tabela.row();
                        for celula in preencher(cells, colunas) {
                            linha = linha.element(elements::Paragraph::new(celula));
                        }
                        linha.push()?;
                    }

                    doc.push(tabela);
                    doc.push(elements::Break::new(1.0));
                }
            }
        }

        let mut saida = Vec::new();
        doc.render(&mut saida)?;
        Ok(saida)
    }
}

// Linhas tortas são ajustadas à largura do cabeçalho, nunca rejeitadas
fn preencher(mut celulas: Vec<String>, colunas: usize) -> Vec<String> {
    celulas.truncate(colunas);
    while celulas.len() < colunas {
        celulas.push(String::new());
    }
    celulas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabela_e_detectada_e_o_separador_ignorado() {
        let markdown = "\
## Resumo

| Processo | Valor |
|---|---|
| SEI-1 | R$ 100,00 |
| SEI-2 | R$ 200,00 |

Fim do relatório.";

        let blocos = interpretar_markdown(markdown);
        assert_eq!(blocos.len(), 3);
        assert_eq!(
            blocos[0],
            BlocoDocumento::Titulo { nivel: 2, texto: "Resumo".to_string() }
        );
        match &blocos[1] {
            BlocoDocumento::Tabela { cabecalho, linhas } => {
                assert_eq!(cabecalho, &vec!["Processo".to_string(), "Valor".to_string()]);
                assert_eq!(linhas.len(), 2);
                assert_eq!(linhas[0], vec!["SEI-1".to_string(), "R$ 100,00".to_string()]);
            }
            outro => panic!("esperava tabela, veio {outro:?}"),
        }
        assert_eq!(
            blocos[2],
            BlocoDocumento::Paragrafo("Fim do relatório.".to_string())
        );
    }

    #[test]
    fn enfase_e_removida_e_tabela_no_fim_do_texto_fecha() {
        let markdown = "**Total**: *alto*\n| A | B |\n| 1 | 2 |";
        let blocos = interpretar_markdown(markdown);
        assert_eq!(blocos.len(), 2);
        assert_eq!(blocos[0], BlocoDocumento::Paragrafo("Total: alto".to_string()));
        assert!(matches!(&blocos[1], BlocoDocumento::Tabela { linhas, .. } if linhas.len() == 1));
    }

    #[test]
    fn markdown_malformado_nao_derruba_a_conversao() {
        // Linha de tabela com células a mais que o cabeçalho
        let markdown = "| A |\n| 1 | 2 | 3 |\n| só um pipe no começo\nlinha solta";
        let blocos = interpretar_markdown(markdown);
        match &blocos[0] {
            BlocoDocumento::Tabela { cabecalho, linhas } => {
                assert_eq!(cabecalho.len(), 1);
                assert_eq!(linhas[0].len(), 3);
            }
            outro => panic!("esperava tabela, veio {outro:?}"),
        }
        // O resto vira parágrafo comum
        assert_eq!(blocos.len(), 3);
    }
}
