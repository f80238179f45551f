use std::collections::HashSet;

use unicode_tables_source::properties::GeneralCategory;
use unicode_tables_source::{PropertySets, PropertyValues, UnicodeData, CODEPOINTS_COUNT};

use super::overrides::{FULLWIDTH_OFFSET, HYPHENS, LEGACY_PUNCTUATION, LEGACY_PUNCTUATION_SET, MID_LETTERS};
use super::PropertyAssignment;
use crate::symbols::SymbolTable;
use crate::PrepareError;

/// значение для кодпоинтов, которым свойство не назначено (код 0)
pub const NONE: &str = "None";

pub const LETTER: &str = "Letter";
pub const NUMBER: &str = "Number";
pub const OTHER: &str = "Other";
pub const PUNCTUATION: &str = "Punctuation";
pub const SYMBOL: &str = "Symbol";
pub const WHITE_SPACE: &str = "White_Space";
pub const HYPHEN: &str = "Hyphen";
pub const MID_LETTER: &str = "MidLetter";

/// значения, которые выводятся из категорий и не должны встречаться в WordBreakProperty.txt
const DERIVED: [&str; 6] = [LETTER, NUMBER, OTHER, PUNCTUATION, SYMBOL, WHITE_SPACE];

/// исходные данные для классификации
pub struct WordBreakSources<'a>
{
    pub unicode: &'a UnicodeData,
    /// auxiliary/WordBreakProperty.txt
    pub word_break: &'a PropertyValues,
    /// PropList.txt
    pub prop_list: &'a PropertySets,
    /// DerivedCoreProperties.txt
    pub derived_core: &'a PropertySets,
}

/// Word_Break для каждого кодпоинта. кодпоинты без явного значения классифицируются по категории
pub fn classify<'a>(sources: &WordBreakSources<'a>) -> Result<PropertyAssignment<'a>, PrepareError>
{
    // пробелы и игнорируемые по умолчанию кодпоинты считаем пробельными
    let white_space = union(sources.prop_list, "White_Space", sources.derived_core, "Default_Ignorable_Code_Point");

    // устаревшая пунктуация должна относиться к категориям пунктуации
    for code in LEGACY_PUNCTUATION.iter().flat_map(|&code| [code, code + FULLWIDTH_OFFSET]) {
        let gc = sources.unicode.category(code);

        if !gc.is_punctuation() {
            return Err(PrepareError::NotPunctuation { code, category: gc.abbr() });
        }
    }

    let mut values: Vec<Option<&'a str>> = Vec::with_capacity(CODEPOINTS_COUNT);

    for code in 0 .. CODEPOINTS_COUNT as u32 {
        let value = match sources.word_break.get(code) {
            Some(value) => Some(value),
            None if white_space.contains(&code) => Some(WHITE_SPACE),
            None => by_category(code, sources.unicode.category(code)),
        };

        values.push(value);
    }

    for &code in HYPHENS.iter() {
        values[code as usize] = Some(HYPHEN);
    }

    for &code in MID_LETTERS.iter() {
        values[code as usize] = Some(MID_LETTER);
    }

    values
        .into_iter()
        .enumerate()
        .map(|(code, value)| value.ok_or(PrepareError::UnclassifiedCodepoint { code: code as u32 }))
        .collect()
}

/// таблица значений: None = 0, далее все значения в порядке сортировки названий
pub fn symbols(word_break: &PropertyValues) -> Result<SymbolTable, PrepareError>
{
    let mut names: Vec<&str> = word_break.names().collect();

    if let Some(name) = names.iter().find(|&&name| DERIVED.contains(&name)) {
        return Err(PrepareError::DuplicateSymbol { name: name.to_string() });
    }

    names.extend(DERIVED);

    for name in [HYPHEN, MID_LETTER] {
        if !names.contains(&name) {
            names.push(name);
        }
    }

    names.sort_unstable();

    let mut symbols = SymbolTable::new();
    symbols.register(NONE)?;

    for name in names {
        symbols.register(name)?;
    }

    Ok(symbols)
}

/// значение по категории символа
fn by_category(code: u32, gc: GeneralCategory) -> Option<&'static str>
{
    use GeneralCategory::*;

    let value = match gc {
        Control | Format | Surrogate | PrivateUse | Unassigned => OTHER,
        LowercaseLetter | ModifierLetter | OtherLetter | TitlecaseLetter | UppercaseLetter | LetterNumber => LETTER,
        DecimalNumber | OtherNumber => NUMBER,
        gc if gc.is_punctuation() => PUNCTUATION,
        gc if gc.is_symbol() => SYMBOL,
        _ => return None,
    };

    match value == PUNCTUATION && LEGACY_PUNCTUATION_SET.contains(&code) {
        true => Some(SYMBOL),
        false => Some(value),
    }
}

fn union(a: &PropertySets, a_name: &str, b: &PropertySets, b_name: &str) -> HashSet<u32>
{
    let mut result = HashSet::new();

    for set in [a.get(a_name), b.get(b_name)].into_iter().flatten() {
        result.extend(set.iter().copied());
    }

    result
}
