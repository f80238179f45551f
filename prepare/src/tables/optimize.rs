use tracing::{debug, info};

use super::{dedupe, estimate, partition, SizeEstimate};
use crate::encode::Record;
use crate::PrepareError;

/// наименьший проверяемый размер блока - 2^1
pub const MIN_BLOCK_BITS: u32 = 1;
/// наибольший проверяемый размер блока - 2^16
pub const MAX_BLOCK_BITS: u32 = 16;

/// результат перебора размеров блока
#[derive(Debug, Clone)]
pub struct Optimized
{
    /// выбранный размер блока
    pub block_size: usize,
    /// оценки для всех кандидатов в порядке возрастания размера блока
    pub estimates: Vec<SizeEstimate>,
}

impl Optimized
{
    /// оценка для выбранного размера блока
    pub fn best(&self) -> &SizeEstimate
    {
        &self.estimates[(self.block_size.trailing_zeros() - MIN_BLOCK_BITS) as usize]
    }

    /// оценка для заданного размера блока, если он проверялся
    pub fn estimate_for(&self, block_size: usize) -> Option<&SizeEstimate>
    {
        self.estimates.iter().find(|e| e.block_size == block_size)
    }
}

/// перебрать размеры блока 2^1 ..= 2^16 и выбрать тот, при котором таблицы занимают меньше всего страниц.
/// при равенстве выигрывает меньший размер блока
pub fn search<R: Record>(encoded: &[R]) -> Result<Optimized, PrepareError>
{
    let mut estimates = Vec::with_capacity((MAX_BLOCK_BITS - MIN_BLOCK_BITS + 1) as usize);

    for bits in MIN_BLOCK_BITS ..= MAX_BLOCK_BITS {
        let block_size = 1usize << bits;

        let blocks = partition(encoded, block_size)?;
        let (stage1, stage2) = dedupe(&blocks);
        let size = estimate(block_size, stage1.len(), stage2.len(), R::BYTES);

        debug!(
            block_size,
            stage2_blocks = size.stage2_blocks,
            stage1_item_bytes = size.stage1_item_bytes,
            stage1_bytes = size.stage1_bytes,
            stage2_bytes = size.stage2_bytes,
            total = size.total(),
            "оценка размера таблиц"
        );

        estimates.push(size);
    }

    let best = (1 .. estimates.len()).fold(0, |best, i| match estimates[i].total() < estimates[best].total() {
        true => i,
        false => best,
    });

    let block_size = estimates[best].block_size;

    info!(block_size, total = estimates[best].total(), "выбран размер блока");

    Ok(Optimized {
        block_size,
        estimates,
    })
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn candidates()
    {
        let values = vec![0i8; 1 << 17];
        let optimized = search(&values).unwrap();

        assert_eq!(optimized.estimates.len(), 16);
        assert_eq!(optimized.estimates[0].block_size, 2);
        assert_eq!(optimized.estimates[15].block_size, 65536);
        assert_eq!(optimized.best().block_size, optimized.block_size);
    }

    #[test]
    fn non_divisible_domain()
    {
        let values = vec![0i8; 1000];

        assert!(matches!(
            search(&values),
            Err(PrepareError::NonDivisibleDomain { domain: 1000, block_size: 16 })
        ));
    }
}
