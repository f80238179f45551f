use super::{EncodeProperty, Record};
use crate::classify::decomposition::{DecompositionValue, HANGUL, NONE};
use crate::symbols::SymbolTable;
use crate::PrepareError;

/// количество бит под тип декомпозиции (знаковое значение)
pub const TYPE_BITS: u32 = 6;
/// количество бит под длину декомпозиции
pub const LENGTH_BITS: u32 = 5;
/// количество бит под кодпоинт / смещение в массиве декомпозиций
pub const DATA_BITS: u32 = 21;

pub const MIN_TYPE: i8 = -(1 << (TYPE_BITS - 1));
pub const MAX_TYPE: i8 = (1 << (TYPE_BITS - 1)) - 1;
pub const MAX_LENGTH: u32 = (1 << LENGTH_BITS) - 1;
pub const MAX_DATA: u32 = (1 << DATA_BITS) - 1;

/// запись о декомпозиции, упакованная в 32 бита:
///
/// | биты   | поле   |                                                              |
/// |--------|--------|--------------------------------------------------------------|
/// | 0..6   | type   | тип декомпозиции: -1 - hangul, 0 - каноническая, 1.. - теги  |
/// | 6..11  | length | длина декомпозиции, 0 - декомпозиции нет                     |
/// | 11..32 | data   | кодпоинт (length = 1) или смещение в массиве (length > 1)    |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecompositionRecord(u32);

impl DecompositionRecord
{
    /// кодпоинт без декомпозиции
    pub const EMPTY: Self = Self(0);

    /// упаковать запись, проверяя, что значения помещаются в свои поля
    pub fn pack(code: u32, kind: i8, length: usize, data: u32) -> Result<Self, PrepareError>
    {
        if !(MIN_TYPE ..= MAX_TYPE).contains(&kind) {
            return Err(overflow(code, "type", i64::from(kind), i64::from(MAX_TYPE)));
        }

        if length > MAX_LENGTH as usize {
            return Err(overflow(code, "length", length as i64, i64::from(MAX_LENGTH)));
        }

        if data > MAX_DATA {
            return Err(overflow(code, "data", i64::from(data), i64::from(MAX_DATA)));
        }

        let kind = (kind as u32) & ((1 << TYPE_BITS) - 1);

        Ok(Self(kind | (length as u32) << TYPE_BITS | data << (TYPE_BITS + LENGTH_BITS)))
    }

    /// тип декомпозиции
    #[inline]
    pub fn kind(self) -> i8
    {
        // расширяем знак 6-битного поля
        ((self.0 << (32 - TYPE_BITS)) as i32 >> (32 - TYPE_BITS)) as i8
    }

    #[inline]
    pub fn length(self) -> u32
    {
        (self.0 >> TYPE_BITS) & MAX_LENGTH
    }

    #[inline]
    pub fn data(self) -> u32
    {
        self.0 >> (TYPE_BITS + LENGTH_BITS)
    }
}

impl Record for DecompositionRecord
{
    const BYTES: usize = 4;

    #[inline]
    fn symbol(self) -> Option<i8>
    {
        match self.length() {
            0 => None,
            _ => Some(self.kind()),
        }
    }
}

/// кодирование декомпозиций. декомпозиции длиннее одного кодпоинта
/// дописываются в общий массив, в записи хранится смещение
pub struct DecompositionEncoder<'a>
{
    symbols: &'a SymbolTable,
    mapping: Vec<u32>,
}

impl<'a> DecompositionEncoder<'a>
{
    pub fn new(symbols: &'a SymbolTable) -> Self
    {
        Self {
            symbols,
            mapping: vec![],
        }
    }

    /// массив декомпозиций, на который ссылаются записи с length > 1
    pub fn into_mapping(self) -> Vec<u32>
    {
        self.mapping
    }
}

impl<'a> EncodeProperty<Option<DecompositionValue>> for DecompositionEncoder<'a>
{
    type Output = DecompositionRecord;

    fn encode(&mut self, code: u32, value: &Option<DecompositionValue>) -> Result<DecompositionRecord, PrepareError>
    {
        let value = match value {
            Some(value) => value,
            None => return Ok(DecompositionRecord::EMPTY),
        };

        let (tag, codes) = match value {
            // слоги хангыль раскладываются алгоритмически при поиске, длина LV
            DecompositionValue::Hangul => {
                return DecompositionRecord::pack(code, self.symbols.require(HANGUL)?, 2, 0);
            }
            DecompositionValue::Mapping { tag, codes } => (tag, codes),
        };

        let kind = match tag {
            Some(tag) => self.symbols.require(tag.name())?,
            None => self.symbols.require(NONE)?,
        };

        match codes.len() {
            0 => Err(PrepareError::EmptyDecomposition { code }),
            1 => DecompositionRecord::pack(code, kind, 1, codes[0]),
            length => {
                let offset = u32::try_from(self.mapping.len()).unwrap_or(u32::MAX);
                let record = DecompositionRecord::pack(code, kind, length, offset)?;

                self.mapping.extend_from_slice(codes);

                Ok(record)
            }
        }
    }
}

fn overflow(code: u32, field: &'static str, value: i64, max: i64) -> PrepareError
{
    PrepareError::EncodingOverflow {
        code,
        field,
        value,
        max,
    }
}
