pub mod processo;
pub mod irp;
pub mod ata;
pub mod contrato;
pub mod movimento;
pub mod ciclo_vida;
pub mod dashboard;
pub mod estatisticas;
pub mod arquivo;
