use std::collections::HashMap;

use tracing::{debug, info};

use crate::encode::Record;
use crate::generator::Compiled;

/// информация о размере таблиц и распределении значений
pub fn report<R: Record>(name: &str, compiled: &Compiled<R>)
{
    let size = compiled.table.estimate();
    let mapping_bytes = compiled.mapping.len() * 4;

    info!(
        table = name,
        block_size = size.block_size,
        stage1_len = compiled.table.stage1.len(),
        stage2_blocks = size.stage2_blocks,
        stage1_item_bytes = size.stage1_item_bytes,
        stage1_bytes = size.stage1_bytes,
        stage2_bytes = size.stage2_bytes,
        mapping_bytes,
        total = size.total() + mapping_bytes,
        "размер таблиц"
    );

    if let Some(baseline) = compiled.optimized.estimate_for(256) {
        debug!(table = name, total = baseline.total(), "размер таблиц при блоке 256");
    }

    for (symbol, count) in histogram(compiled) {
        debug!(table = name, symbol, count, "кодпоинтов со значением");
    }
}

/// количество кодпоинтов с каждым значением свойства, по убыванию количества
pub fn histogram<R: Record>(compiled: &Compiled<R>) -> Vec<(&str, usize)>
{
    let table = &compiled.table;
    let blocks: Vec<&[R]> = table.blocks().collect();

    let mut counts: HashMap<i8, usize> = HashMap::new();

    for &index in &table.stage1 {
        for record in blocks[index] {
            if let Some(symbol) = record.symbol() {
                *counts.entry(symbol).or_default() += 1;
            }
        }
    }

    let mut result: Vec<(&str, usize)> = compiled
        .symbols
        .iter()
        .filter_map(|(name, code)| counts.get(&code).map(|&count| (name, count)))
        .collect();

    result.sort_by(|a, b| b.1.cmp(&a.1));

    result
}
