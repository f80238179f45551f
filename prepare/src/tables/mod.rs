use std::collections::HashMap;

use crate::encode::Record;
use crate::PrepareError;

mod decomposition;
mod estimate;
mod optimize;

pub use decomposition::DecompositionTable;
pub use estimate::{estimate, page_align, stage1_item_bytes, SizeEstimate, PAGE_SIZE};
pub use optimize::{search, Optimized, MAX_BLOCK_BITS, MIN_BLOCK_BITS};

/// двухуровневая таблица поиска:
/// значение(code) = stage2[stage1[code / block_size]][code % block_size]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoStageTable<R>
{
    /// размер блока, степень двойки
    pub block_size: usize,
    /// номер блока в stage2 для каждого отрезка кодпоинтов длиной block_size
    pub stage1: Vec<usize>,
    /// уникальные блоки, записанные подряд в порядке первого появления
    pub stage2: Vec<R>,
}

impl<R: Record> TwoStageTable<R>
{
    /// составить таблицу с заданным размером блока
    pub fn build(encoded: &[R], block_size: usize) -> Result<Self, PrepareError>
    {
        let blocks = partition(encoded, block_size)?;
        let (stage1, unique) = dedupe(&blocks);

        Ok(Self {
            block_size,
            stage1,
            stage2: unique.concat(),
        })
    }

    /// значение для кодпоинта
    #[inline]
    pub fn get(&self, code: u32) -> R
    {
        let code = code as usize;
        let block = self.stage1[code / self.block_size];

        self.stage2[block * self.block_size + code % self.block_size]
    }

    /// количество уникальных блоков
    #[inline]
    pub fn blocks_count(&self) -> usize
    {
        self.stage2.len() / self.block_size
    }

    /// уникальные блоки по порядку
    pub fn blocks(&self) -> impl Iterator<Item = &[R]>
    {
        self.stage2.chunks_exact(self.block_size)
    }

    /// размер элемента stage1 в байтах
    #[inline]
    pub fn stage1_item_bytes(&self) -> usize
    {
        stage1_item_bytes(self.blocks_count())
    }

    /// занимаемая таблицей память с выравниванием по страницам
    pub fn estimate(&self) -> SizeEstimate
    {
        estimate(self.block_size, self.stage1.len(), self.blocks_count(), R::BYTES)
    }
}

/// разбить закодированные значения на блоки одинакового размера в порядке кодпоинтов
pub fn partition<R>(encoded: &[R], block_size: usize) -> Result<Vec<&[R]>, PrepareError>
{
    if block_size == 0 || encoded.len() % block_size != 0 {
        return Err(PrepareError::NonDivisibleDomain {
            domain: encoded.len(),
            block_size,
        });
    }

    Ok(encoded.chunks_exact(block_size).collect())
}

/// объединить одинаковые блоки. порядок уникальных блоков - порядок их первого появления,
/// поэтому на одинаковых данных результат всегда один и тот же
pub fn dedupe<'a, R: Record>(blocks: &[&'a [R]]) -> (Vec<usize>, Vec<&'a [R]>)
{
    let mut stage1 = Vec::with_capacity(blocks.len());
    let mut stage2: Vec<&'a [R]> = vec![];
    let mut seen: HashMap<&'a [R], usize> = HashMap::new();

    for &block in blocks {
        let index = *seen.entry(block).or_insert_with(|| {
            stage2.push(block);
            stage2.len() - 1
        });

        stage1.push(index);
    }

    (stage1, stage2)
}
