use unicode_tables_source::properties::DecompositionTag;
use unicode_tables_source::{hangul, UnicodeData, CODEPOINTS_COUNT};

use crate::symbols::SymbolTable;
use crate::PrepareError;

/// тип для слогов хангыль, декомпозиция вычисляется алгоритмически
pub const HANGUL: &str = "hangul";
/// тип канонической декомпозиции
pub const NONE: &str = "none";

/// код, зарезервированный за слогами хангыль
pub const HANGUL_CODE: i8 = -1;

/// декомпозиция кодпоинта
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecompositionValue
{
    /// декомпозиция из UnicodeData.txt
    Mapping
    {
        tag: Option<DecompositionTag>,
        codes: Vec<u32>,
    },
    /// слог хангыль без явной декомпозиции
    Hangul,
}

/// декомпозиция для каждого кодпоинта, None - декомпозиции нет
pub fn classify(unicode: &UnicodeData) -> Vec<Option<DecompositionValue>>
{
    (0 .. CODEPOINTS_COUNT as u32)
        .map(|code| match unicode.decomposition(code) {
            Some(decomposition) => Some(DecompositionValue::Mapping {
                tag: decomposition.tag,
                codes: decomposition.codes.clone(),
            }),
            None if hangul::is_syllable(code) => Some(DecompositionValue::Hangul),
            None => None,
        })
        .collect()
}

/// hangul = -1, none = 0, далее теги в порядке UAX #44: font = 1 ..= compat = 16
pub fn symbols() -> Result<SymbolTable, PrepareError>
{
    let mut symbols = SymbolTable::new();

    symbols.reserve(HANGUL, HANGUL_CODE)?;
    symbols.register(NONE)?;

    for tag in DecompositionTag::ALL {
        symbols.register(tag.name())?;
    }

    Ok(symbols)
}
