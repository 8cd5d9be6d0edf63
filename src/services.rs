pub mod valoracao;
pub mod processo_service;
pub use processo_service::ProcessoService;
pub mod ciclo_vida_service;
pub use ciclo_vida_service::CicloVidaService;
pub mod irp_service;
pub use irp_service::IrpService;
pub mod consumo_service;
pub use consumo_service::ConsumoService;
pub mod governanca_service;
pub use governanca_service::GovernancaService;
pub mod arquivo_service;
pub use arquivo_service::ArquivoService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod estatisticas_service;
pub use estatisticas_service::EstatisticasService;
pub mod assistente_service;
pub use assistente_service::AssistenteService;
pub mod documento_service;
pub use documento_service::DocumentoService;
