pub mod processos;
pub mod irp;
pub mod governanca;
pub mod consumo;
pub mod arquivo;
pub mod dashboard;
pub mod estatisticas;
pub mod assistente;
