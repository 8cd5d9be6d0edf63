pub mod dados;
pub use dados::{novo_store, DataStore, SharedStore};
pub mod processo_repo;
pub use processo_repo::ProcessoRepository;
pub mod irp_repo;
pub use irp_repo::IrpRepository;
pub mod ata_repo;
pub use ata_repo::AtaRepository;
pub mod contrato_repo;
pub use contrato_repo::ContratoRepository;
pub mod movimento_repo;
pub use movimento_repo::MovimentoRepository;
