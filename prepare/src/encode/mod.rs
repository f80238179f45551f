use std::fmt::Debug;
use std::hash::Hash;

use crate::PrepareError;

pub mod decomposition;
pub mod enumeration;

pub use decomposition::{DecompositionEncoder, DecompositionRecord};
pub use enumeration::EnumEncoder;

/// запись фиксированной ширины, хранящаяся в блоках таблицы второго уровня
pub trait Record: Copy + Eq + Hash + Debug
{
    /// размер записи в байтах
    const BYTES: usize;

    /// код значения свойства, None - у кодпоинта нет значения
    fn symbol(self) -> Option<i8>;
}

impl Record for i8
{
    const BYTES: usize = 1;

    #[inline]
    fn symbol(self) -> Option<i8>
    {
        Some(self)
    }
}

/// кодирование значения свойства кодпоинта в запись фиксированной ширины
pub trait EncodeProperty<V>
{
    type Output: Record;

    fn encode(&mut self, code: u32, value: &V) -> Result<Self::Output, PrepareError>;
}

/// закодировать значения свойства для всех кодпоинтов, индекс в массиве - кодпоинт
pub fn encode_all<E, V>(encoder: &mut E, values: &[V]) -> Result<Vec<E::Output>, PrepareError>
where
    E: EncodeProperty<V>,
{
    values
        .iter()
        .enumerate()
        .map(|(code, value)| encoder.encode(code as u32, value))
        .collect()
}
