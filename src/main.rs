//src/main.rs

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod docs;
mod handlers;
mod models;
mod services;
mod store;

use crate::config::AppState;
use crate::docs::ApiDoc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    let processos_routes = Router::new()
        .route(
            "/",
            get(handlers::processos::listar_processos).post(handlers::processos::criar_processo),
        )
        .route(
            "/{id}",
            put(handlers::processos::atualizar_processo)
                .delete(handlers::processos::excluir_processo),
        )
        .route(
            "/{id}/movimentar-hoje",
            post(handlers::processos::movimentar_hoje),
        )
        .route(
            "/{id}/itens",
            get(handlers::processos::listar_itens).post(handlers::processos::criar_item),
        )
        .route(
            "/{id}/homologacao",
            post(handlers::processos::confirmar_homologacao)
                .delete(handlers::processos::descartar_homologacao),
        )
        .route(
            "/{id}/homologacao/valores",
            post(handlers::processos::concluir_homologacao),
        )
        .route("/{id}/contrato", post(handlers::processos::gerar_contrato))
        .route(
            "/{id}/atas/disponibilidade",
            get(handlers::processos::disponibilidade_atas),
        )
        .route("/{id}/atas", post(handlers::processos::criar_ata));

    let itens_processo_routes = Router::new().route(
        "/{id}",
        put(handlers::processos::atualizar_item).delete(handlers::processos::excluir_item),
    );

    let irp_routes = Router::new()
        .route(
            "/",
            get(handlers::irp::listar_irps).post(handlers::irp::criar_irp),
        )
        .route("/{id}", put(handlers::irp::atualizar_irp))
        .route(
            "/{id}/itens",
            get(handlers::irp::listar_itens_irp).post(handlers::irp::criar_item_irp),
        );

    let itens_irp_routes = Router::new().route(
        "/{id}",
        put(handlers::irp::atualizar_item_irp).delete(handlers::irp::excluir_item_irp),
    );

    let atas_routes = Router::new()
        .route("/", get(handlers::governanca::listar_atas))
        .route("/{id}", put(handlers::governanca::atualizar_ata))
        .route(
            "/{id}/itens",
            get(handlers::governanca::itens_da_ata)
                .put(handlers::governanca::substituir_itens_da_ata),
        )
        .route(
            "/{id}/aditivo",
            post(handlers::governanca::aplicar_aditivo_ata),
        );

    let contratos_routes = Router::new()
        .route("/", get(handlers::governanca::listar_contratos))
        .route("/{id}", put(handlers::governanca::atualizar_contrato))
        .route("/{id}/itens", get(handlers::governanca::itens_do_contrato))
        .route(
            "/{id}/aditivo",
            post(handlers::governanca::aplicar_aditivo_contrato),
        );

    let consumo_routes = Router::new()
        .route(
            "/",
            get(handlers::consumo::listar_consumos).post(handlers::consumo::criar_consumo),
        )
        .route("/{id}", put(handlers::consumo::atualizar_consumo))
        .route("/{id}/fluxo", post(handlers::consumo::avancar_fluxo))
        .route("/{id}/cancelar", post(handlers::consumo::cancelar_consumo));

    let arquivo_routes = Router::new()
        .route("/", get(handlers::arquivo::listar_arquivo))
        .route("/{tipo}/{id}/arquivar", post(handlers::arquivo::arquivar))
        .route("/{tipo}/{id}/restaurar", post(handlers::arquivo::restaurar));

    let dashboard_routes = Router::new()
        .route("/resumo", get(handlers::dashboard::resumo))
        .route("/financeiro", get(handlers::dashboard::financeiro));

    let assistente_routes = Router::new()
        .route("/analisar", post(handlers::assistente::analisar))
        .route("/documento", post(handlers::assistente::gerar_documento));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/processos", processos_routes)
        .nest("/api/itens-processo", itens_processo_routes)
        .nest("/api/irps", irp_routes)
        .nest("/api/itens-irp", itens_irp_routes)
        .nest("/api/atas", atas_routes)
        .nest("/api/contratos", contratos_routes)
        .nest("/api/consumos", consumo_routes)
        .nest("/api/arquivo", arquivo_routes)
        .nest("/api/dashboard", dashboard_routes)
        .route("/api/estatisticas", get(handlers::estatisticas::painel))
        .nest("/api/assistente", assistente_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
