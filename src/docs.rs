// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;
use crate::services;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Processos ---
        handlers::processos::listar_processos,
        handlers::processos::criar_processo,
        handlers::processos::atualizar_processo,
        handlers::processos::excluir_processo,
        handlers::processos::movimentar_hoje,
        handlers::processos::listar_itens,
        handlers::processos::criar_item,
        handlers::processos::atualizar_item,
        handlers::processos::excluir_item,
        handlers::processos::confirmar_homologacao,
        handlers::processos::concluir_homologacao,
        handlers::processos::descartar_homologacao,
        handlers::processos::gerar_contrato,
        handlers::processos::disponibilidade_atas,
        handlers::processos::criar_ata,

        // --- IRP ---
        handlers::irp::listar_irps,
        handlers::irp::criar_irp,
        handlers::irp::atualizar_irp,
        handlers::irp::listar_itens_irp,
        handlers::irp::criar_item_irp,
        handlers::irp::atualizar_item_irp,
        handlers::irp::excluir_item_irp,

        // --- Governança ---
        handlers::governanca::listar_atas,
        handlers::governanca::itens_da_ata,
        handlers::governanca::atualizar_ata,
        handlers::governanca::substituir_itens_da_ata,
        handlers::governanca::aplicar_aditivo_ata,
        handlers::governanca::listar_contratos,
        handlers::governanca::itens_do_contrato,
        handlers::governanca::atualizar_contrato,
        handlers::governanca::aplicar_aditivo_contrato,

        // --- Consumo ---
        handlers::consumo::listar_consumos,
        handlers::consumo::criar_consumo,
        handlers::consumo::atualizar_consumo,
        handlers::consumo::avancar_fluxo,
        handlers::consumo::cancelar_consumo,

        // --- Arquivo ---
        handlers::arquivo::listar_arquivo,
        handlers::arquivo::arquivar,
        handlers::arquivo::restaurar,

        // --- Dashboard ---
        handlers::dashboard::resumo,
        handlers::dashboard::financeiro,

        // --- Estatísticas ---
        handlers::estatisticas::painel,

        // --- Assistente ---
        handlers::assistente::analisar,
        handlers::assistente::gerar_documento,
    ),
    components(
        schemas(
            // Entidades
            models::processo::Processo,
            models::processo::ItemProcesso,
            models::processo::Modalidade,
            models::processo::ClassificacaoProcesso,
            models::processo::StatusProcesso,
            models::processo::UnidadeDemandante,
            models::processo::TipoCodigo,
            models::irp::IrpCabecalho,
            models::irp::IrpItem,
            models::irp::SituacaoIrp,
            models::ata::AtaSrp,
            models::ata::ItemAta,
            models::ata::HistoricoAditivo,
            models::ata::SituacaoContrato,
            models::contrato::Contrato,
            models::movimento::MovimentoConsumo,
            models::movimento::TipoOrigem,
            models::movimento::FaseExecucao,
            models::movimento::StatusMovimento,

            // Ciclo de vida
            models::ciclo_vida::ResultadoTransicao,
            models::ciclo_vida::TransicaoPendente,
            models::ciclo_vida::EtapaHomologacao,
            models::ciclo_vida::ValorHomologacao,
            models::ciclo_vida::ItemPreSelecionado,
            models::ciclo_vida::DisponibilidadeItemAta,

            // Leituras
            models::dashboard::ResumoDashboard,
            models::dashboard::FunilDemandas,
            models::dashboard::AlertaGovernanca,
            models::dashboard::LinhaPlanejado,
            models::dashboard::DetalheFinanceiro,
            models::estatisticas::PainelEstatisticas,
            models::estatisticas::Economicidade,
            models::estatisticas::LinhaMatrizModalidade,
            models::estatisticas::ContagemLicitacoes,
            models::estatisticas::LinhaClassificacao,
            models::estatisticas::LinhaSazonalidade,
            models::estatisticas::LinhaSaudePlanejamento,
            models::arquivo::TipoArquivo,
            models::arquivo::RegistroArquivado,
            services::consumo_service::MovimentoDetalhado,
            services::governanca_service::ItemAtaComSaldo,

            // Payloads
            handlers::processos::CriarProcessoPayload,
            handlers::processos::AtualizarProcessoPayload,
            handlers::processos::ImportacaoItemIrpPayload,
            handlers::processos::ItemProcessoPayload,
            handlers::processos::ConfirmarHomologacaoPayload,
            handlers::processos::ValorHomologadoPayload,
            handlers::processos::ConcluirHomologacaoPayload,
            handlers::processos::GerarContratoPayload,
            handlers::processos::GerarAtaPayload,
            handlers::irp::IrpPayload,
            handlers::irp::IrpItemPayload,
            handlers::governanca::EdicaoAtaPayload,
            handlers::governanca::EdicaoContratoPayload,
            handlers::governanca::AditivoPayload,
            handlers::consumo::NovoMovimentoPayload,
            handlers::consumo::EdicaoMovimentoPayload,
            handlers::consumo::AvancoFluxoPayload,
            handlers::assistente::PerguntaPayload,
            handlers::assistente::RespostaAssistente,
            handlers::assistente::DocumentoPayload,
        )
    ),
    tags(
        (name = "Processos", description = "Gestão de processos licitatórios e seus itens"),
        (name = "IRP", description = "Intenções de Registro de Preços"),
        (name = "Governança", description = "Atas SRP, contratos e termos aditivos"),
        (name = "Consumo", description = "Monitoramento logístico de consumo"),
        (name = "Arquivo", description = "Arquivo morto: arquivamento e restauração"),
        (name = "Dashboard", description = "Painel de comando"),
        (name = "Estatísticas", description = "Inteligência estratégica"),
        (name = "Assistente", description = "Assistente de análise de dados e exportação")
    )
)]
pub struct ApiDoc;
