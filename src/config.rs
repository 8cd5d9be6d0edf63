// src/config.rs

use std::env;

use crate::services::{
    ArquivoService, AssistenteService, CicloVidaService, ConsumoService, DashboardService,
    DocumentoService, EstatisticasService, GovernancaService, IrpService, ProcessoService,
};
use crate::store::{
    novo_store, AtaRepository, ContratoRepository, IrpRepository, MovimentoRepository,
    ProcessoRepository, SharedStore,
};

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub processo_service: ProcessoService,
    pub ciclo_vida_service: CicloVidaService,
    pub irp_service: IrpService,
    pub consumo_service: ConsumoService,
    pub governanca_service: GovernancaService,
    pub arquivo_service: ArquivoService,
    pub dashboard_service: DashboardService,
    pub estatisticas_service: EstatisticasService,
    pub assistente_service: AssistenteService,
    pub documento_service: DocumentoService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // A chave é opcional: sem ela o assistente responde com a mensagem
        // de indisponibilidade, e o resto do sistema segue normal.
        let chave_assistente = env::var("GEMINI_API_KEY").ok();
        if chave_assistente.is_none() {
            tracing::warn!("⚠️ GEMINI_API_KEY não definida; o assistente de dados ficará indisponível.");
        }

        // Estado em memória: tudo vive na sessão e morre com o processo.
        let store = novo_store();
        tracing::info!("✅ Base de dados em memória inicializada!");

        // --- Monta o gráfico de dependências ---
        let processo_repo = ProcessoRepository::new();
        let irp_repo = IrpRepository::new();
        let ata_repo = AtaRepository::new();
        let contrato_repo = ContratoRepository::new();
        let movimento_repo = MovimentoRepository::new();

        let processo_service =
            ProcessoService::new(store.clone(), processo_repo.clone(), irp_repo.clone());
        let ciclo_vida_service = CicloVidaService::new(
            store.clone(),
            processo_repo.clone(),
            ata_repo.clone(),
            contrato_repo.clone(),
        );
        let irp_service = IrpService::new(store.clone(), irp_repo);
        let consumo_service =
            ConsumoService::new(store.clone(), movimento_repo, ata_repo.clone());
        let governanca_service = GovernancaService::new(
            store.clone(),
            ata_repo,
            contrato_repo,
            processo_repo,
        );
        let arquivo_service = ArquivoService::new(store.clone());
        let dashboard_service = DashboardService::new(store.clone());
        let estatisticas_service = EstatisticasService::new(store.clone());
        let assistente_service = AssistenteService::new(store.clone(), chave_assistente);
        let documento_service = DocumentoService::new();

        Ok(Self {
            store,
            processo_service,
            ciclo_vida_service,
            irp_service,
            consumo_service,
            governanca_service,
            arquivo_service,
            dashboard_service,
            estatisticas_service,
            assistente_service,
            documento_service,
        })
    }
}
