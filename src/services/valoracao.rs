// src/services/valoracao.rs
//
// Motor de saldo e valoração: funções puras sobre o snapshot da sessão.
// São totais no domínio — referência pendurada (movimento apontando para item
// de ata removido, contrato sem processo) vale zero, nunca erro.

use chrono::Datelike;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::movimento::MovimentoConsumo;
use crate::models::processo::{ItemProcesso, StatusProcesso};
use crate::store::DataStore;

// Valor unitário vigente de um item de processo: o homologado, quando
// presente e não nulo; senão, o estimado. "Ainda não homologado" é
// indistinguível de "homologado pelo valor da estimativa".
pub fn valor_unitario_efetivo(item: &ItemProcesso) -> Decimal {
    match item.valor_unitario_final {
        Some(valor) if !valor.is_zero() => valor,
        _ => item.valor_unitario_estimado,
    }
}

pub fn valor_estimado_processo(dados: &DataStore, processo_id: Uuid) -> Decimal {
    dados
        .itens_processo
        .iter()
        .filter(|i| i.processo_id == processo_id)
        .map(|i| i.quantidade_estimada * valor_unitario_efetivo(i))
        .sum()
}

pub fn valor_registrado_ata(dados: &DataStore, ata_id: Uuid) -> Decimal {
    dados
        .itens_ata
        .iter()
        .filter(|i| i.ata_id == ata_id)
        .map(|i| i.quantidade_registrada * i.valor_unitario)
        .sum()
}

pub fn valor_irp(dados: &DataStore, irp_id: Uuid) -> Decimal {
    dados
        .itens_irp
        .iter()
        .filter(|i| i.irp_id == irp_id)
        .map(|i| i.quantidade * i.valor_unitario)
        .sum()
}

// Quantidade consumida oficial: soma dos movimentos não cancelados que
// referenciam o item. Arquivar um movimento NÃO o tira da soma; só o
// cancelamento tira.
pub fn consumo_item_ata(dados: &DataStore, item_ata_id: Uuid) -> Decimal {
    dados
        .movimentos
        .iter()
        .filter(|m| m.origem_id == item_ata_id && m.consome_saldo())
        .map(|m| m.quantidade_consumida)
        .sum()
}

// Saldo = registrado − consumido. Sem clamp: o consumo acima do registrado é
// permitido pelo modelo e o saldo pode ficar negativo.
pub fn saldo_item_ata(dados: &DataStore, item_ata_id: Uuid) -> Decimal {
    let registrado = dados
        .itens_ata
        .iter()
        .find(|i| i.id == item_ata_id)
        .map(|i| i.quantidade_registrada)
        .unwrap_or(Decimal::ZERO);
    registrado - consumo_item_ata(dados, item_ata_id)
}

// Percentual de saldo para exibição, já com o piso em zero
pub fn percentual_saldo_item_ata(dados: &DataStore, item_ata_id: Uuid) -> Decimal {
    let registrado = dados
        .itens_ata
        .iter()
        .find(|i| i.id == item_ata_id)
        .map(|i| i.quantidade_registrada)
        .unwrap_or(Decimal::ZERO);
    if registrado.is_zero() {
        return Decimal::ZERO;
    }
    let percentual = saldo_item_ata(dados, item_ata_id) / registrado * Decimal::ONE_HUNDRED;
    percentual.max(Decimal::ZERO)
}

pub fn valor_movimento(dados: &DataStore, movimento: &MovimentoConsumo) -> Decimal {
    let preco = dados
        .itens_ata
        .iter()
        .find(|i| i.id == movimento.origem_id)
        .map(|i| i.valor_unitario)
        .unwrap_or(Decimal::ZERO);
    movimento.quantidade_consumida * preco
}

// Total planejado: soma do valor estimado de cada processo não arquivado,
// opcionalmente restrito ao exercício (ano de PLANEJAMENTO, não o da data
// de início).
pub fn total_planejado(dados: &DataStore, ano: Option<i32>) -> Decimal {
    dados
        .processos
        .iter()
        .filter(|p| p.status != StatusProcesso::Arquivado)
        .filter(|p| ano.is_none_or(|a| p.ano_planejamento == a))
        .map(|p| valor_estimado_processo(dados, p.id))
        .sum()
}

// Total executado: contratos (ano da data de início) + movimentos não
// cancelados (ano da data do pedido).
pub fn total_executado(dados: &DataStore, ano: Option<i32>) -> Decimal {
    let contratado: Decimal = dados
        .contratos
        .iter()
        .filter(|c| ano.is_none_or(|a| c.data_inicio.year() == a))
        .map(|c| c.valor_global)
        .sum();

    let consumido: Decimal = dados
        .movimentos
        .iter()
        .filter(|m| m.consome_saldo())
        .filter(|m| ano.is_none_or(|a| m.data.year() == a))
        .map(|m| valor_movimento(dados, m))
        .sum();

    contratado + consumido
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::models::movimento::StatusMovimento;
    use crate::store::dados::fixtures;

    #[test]
    fn valor_efetivo_prefere_o_homologado_nao_nulo() {
        let mut item = fixtures::item_processo(Uuid::new_v4(), 1, "CATMAT 100", dec!(10), dec!(100));
        assert_eq!(valor_unitario_efetivo(&item), dec!(100));

        item.valor_unitario_final = Some(dec!(80));
        assert_eq!(valor_unitario_efetivo(&item), dec!(80));

        // Homologado em zero não supera a estimativa
        item.valor_unitario_final = Some(dec!(0));
        assert_eq!(valor_unitario_efetivo(&item), dec!(100));
    }

    #[test]
    fn valor_estimado_do_processo_mistura_itens_homologados_e_nao() {
        let mut dados = DataStore::default();
        let processo = fixtures::processo("SEI-1", crate::models::processo::StatusProcesso::Edital);
        let id = processo.id;
        dados.processos.push(processo);

        dados
            .itens_processo
            .push(fixtures::item_processo(id, 1, "A", dec!(10), dec!(100)));
        let mut item2 = fixtures::item_processo(id, 2, "B", dec!(5), dec!(50));
        item2.valor_unitario_final = Some(dec!(40));
        dados.itens_processo.push(item2);

        // 10×100 + 5×40: o valor final prevalece item a item
        assert_eq!(valor_estimado_processo(&dados, id), dec!(1200));
    }

    #[test]
    fn saldo_exclui_cancelados_e_ignora_arquivamento() {
        let mut dados = DataStore::default();
        let ata = fixtures::ata(Uuid::new_v4(), "ARP 001/2024");
        let item = fixtures::item_ata(ata.id, "A", dec!(100), dec!(10));
        let item_id = item.id;
        dados.atas.push(ata);
        dados.itens_ata.push(item);

        let ativo = fixtures::movimento(item_id, dec!(30));
        let ativo_id = ativo.id;
        let mut cancelado = fixtures::movimento(item_id, dec!(20));
        cancelado.status = StatusMovimento::Cancelado;
        dados.movimentos.push(ativo);
        dados.movimentos.push(cancelado);

        assert_eq!(saldo_item_ata(&dados, item_id), dec!(70));

        // Arquivar não mexe no saldo; só o cancelamento mexe
        dados
            .movimentos
            .iter_mut()
            .find(|m| m.id == ativo_id)
            .unwrap()
            .arquivado = true;
        assert_eq!(saldo_item_ata(&dados, item_id), dec!(70));
    }

    #[test]
    fn saldo_pode_ficar_negativo_mas_percentual_nao() {
        let mut dados = DataStore::default();
        let ata = fixtures::ata(Uuid::new_v4(), "ARP 002/2024");
        let item = fixtures::item_ata(ata.id, "A", dec!(10), dec!(1));
        let item_id = item.id;
        dados.atas.push(ata);
        dados.itens_ata.push(item);
        dados.movimentos.push(fixtures::movimento(item_id, dec!(15)));

        assert_eq!(saldo_item_ata(&dados, item_id), dec!(-5));
        assert_eq!(percentual_saldo_item_ata(&dados, item_id), dec!(0));
    }

    #[test]
    fn movimento_com_referencia_pendurada_vale_zero() {
        let dados = DataStore::default();
        let movimento = fixtures::movimento(Uuid::new_v4(), dec!(30));
        assert_eq!(valor_movimento(&dados, &movimento), dec!(0));
    }

    #[test]
    fn total_planejado_ignora_arquivados_e_filtra_por_ano_de_planejamento() {
        let mut dados = DataStore::default();

        let ativo = fixtures::processo("SEI-1", crate::models::processo::StatusProcesso::Edital);
        let ativo_id = ativo.id;
        dados.processos.push(ativo);
        dados
            .itens_processo
            .push(fixtures::item_processo(ativo_id, 1, "A", dec!(2), dec!(100)));

        let mut arquivado =
            fixtures::processo("SEI-2", crate::models::processo::StatusProcesso::Arquivado);
        arquivado.ano_planejamento = 2024;
        let arquivado_id = arquivado.id;
        dados.processos.push(arquivado);
        dados
            .itens_processo
            .push(fixtures::item_processo(arquivado_id, 1, "B", dec!(9), dec!(9)));

        let mut outro_ano = fixtures::processo("SEI-3", crate::models::processo::StatusProcesso::Dod);
        outro_ano.ano_planejamento = 2025;
        let outro_id = outro_ano.id;
        dados.processos.push(outro_ano);
        dados
            .itens_processo
            .push(fixtures::item_processo(outro_id, 1, "C", dec!(1), dec!(50)));

        assert_eq!(total_planejado(&dados, Some(2024)), dec!(200));
        assert_eq!(total_planejado(&dados, None), dec!(250));
    }

    #[test]
    fn total_executado_soma_contratos_e_consumo_sem_cancelados() {
        let mut dados = DataStore::default();
        let processo_id = Uuid::new_v4();
        dados.contratos.push(fixtures::contrato(processo_id, dec!(1000)));

        let ata = fixtures::ata(processo_id, "ARP 003/2024");
        let item = fixtures::item_ata(ata.id, "A", dec!(100), dec!(10));
        let item_id = item.id;
        dados.atas.push(ata);
        dados.itens_ata.push(item);

        let movimento = fixtures::movimento(item_id, dec!(5));
        let movimento_id = movimento.id;
        dados.movimentos.push(movimento);

        // 1000 + 5×10
        assert_eq!(total_executado(&dados, Some(2024)), dec!(1050));

        // Cancelar tira da soma sem apagar o registro
        dados
            .movimentos
            .iter_mut()
            .find(|m| m.id == movimento_id)
            .unwrap()
            .status = StatusMovimento::Cancelado;
        assert_eq!(total_executado(&dados, Some(2024)), dec!(1000));
        assert_eq!(dados.movimentos.len(), 1);

        // Fora do exercício, nada soma
        assert_eq!(total_executado(&dados, Some(2030)), dec!(0));
    }
}
