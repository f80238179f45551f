use unicode_tables_source::hangul;

use super::TwoStageTable;
use crate::encode::DecompositionRecord;

/// таблица декомпозиций вместе с массивом, на который ссылаются записи с length > 1
#[derive(Debug, Clone)]
pub struct DecompositionTable
{
    pub table: TwoStageTable<DecompositionRecord>,
    pub mapping: Vec<u32>,
    /// код типа канонической декомпозиции
    pub canonical: i8,
    /// код типа для слогов хангыль
    pub hangul: i8,
}

impl DecompositionTable
{
    /// запись о декомпозиции кодпоинта
    #[inline]
    pub fn record(&self, code: u32) -> DecompositionRecord
    {
        self.table.get(code)
    }

    /// декомпозиция кодпоинта (один уровень, без рекурсии).
    /// если compat = false, декомпозиции совместимости не учитываются
    pub fn decompose(&self, code: u32, compat: bool) -> Option<Vec<u32>>
    {
        let record = self.record(code);
        let kind = record.kind();

        if record.length() == 0 {
            return None;
        }

        if !compat && kind != self.canonical && kind != self.hangul {
            return None;
        }

        if kind == self.hangul {
            return hangul::decompose(code);
        }

        match record.length() {
            1 => Some(vec![record.data()]),
            length => {
                let offset = record.data() as usize;
                self.mapping.get(offset .. offset + length as usize).map(<[u32]>::to_vec)
            }
        }
    }
}
