/// размер страницы памяти, до которого выравнивается каждый массив
pub const PAGE_SIZE: usize = 4096;

/// оценка занимаемой памяти для одного размера блока
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeEstimate
{
    pub block_size: usize,
    /// количество уникальных блоков
    pub stage2_blocks: usize,
    /// размер элемента stage1: 1, 2, 4 или 8 байт
    pub stage1_item_bytes: usize,
    pub stage1_bytes: usize,
    pub stage2_bytes: usize,
}

impl SizeEstimate
{
    #[inline]
    pub fn total(&self) -> usize
    {
        self.stage1_bytes + self.stage2_bytes
    }
}

/// округление вверх до целого числа страниц
#[inline]
pub fn page_align(bytes: usize) -> usize
{
    bytes.div_ceil(PAGE_SIZE) * PAGE_SIZE
}

/// наименьший размер целого (степень двойки байт), в который помещаются индексы 0 .. stage2_blocks - 1
pub fn stage1_item_bytes(stage2_blocks: usize) -> usize
{
    let bits = match stage2_blocks {
        0 | 1 => 0,
        n => (usize::BITS - (n - 1).leading_zeros()) as usize,
    };

    bits.div_ceil(8).max(1).next_power_of_two()
}

/// оценка памяти для stage1 из stage1_len элементов и stage2 из stage2_blocks блоков
pub fn estimate(block_size: usize, stage1_len: usize, stage2_blocks: usize, record_bytes: usize) -> SizeEstimate
{
    let stage1_item_bytes = stage1_item_bytes(stage2_blocks);

    SizeEstimate {
        block_size,
        stage2_blocks,
        stage1_item_bytes,
        stage1_bytes: page_align(stage1_len * stage1_item_bytes),
        stage2_bytes: page_align(stage2_blocks * block_size * record_bytes),
    }
}
