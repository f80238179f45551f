use std::collections::HashSet;

use unicode_tables_source::properties::GeneralCategory;
use unicode_tables_source::{PropertySets, PropertyValues, UnicodeData, CODEPOINTS_COUNT};

use super::overrides::{EMOJI_TEXT_PRESENTATION_SET, INTERLINEAR_ANNOTATIONS};
use super::PropertyAssignment;
use crate::symbols::SymbolTable;
use crate::PrepareError;

/// не отображается: управляющие, неназначенные, суррогаты, разделители строк
pub const NONE: &str = "None";
/// игнорируемые по умолчанию (Default_Ignorable_Code_Point)
pub const IGNORABLE: &str = "Ignorable";
/// комбинирующие и форматирующие символы
pub const MARK: &str = "Mark";
pub const NARROW: &str = "Narrow";
/// ширина зависит от контекста (East_Asian_Width = A)
pub const AMBIGUOUS: &str = "Ambiguous";
pub const WIDE: &str = "Wide";
pub const EMOJI: &str = "Emoji";

/// значения в порядке возрастания кодов. порядок важен: от "невидимых" к широким
pub const CHARWIDTH_NAMES: [&str; 7] = [NONE, IGNORABLE, MARK, NARROW, AMBIGUOUS, WIDE, EMOJI];

/// исходные данные для классификации
pub struct CharwidthSources<'a>
{
    pub unicode: &'a UnicodeData,
    /// EastAsianWidth.txt
    pub east_asian_width: &'a PropertyValues,
    /// emoji-data.txt
    pub emoji: &'a PropertySets,
    /// DerivedCoreProperties.txt
    pub derived_core: &'a PropertySets,
}

/// ширина символа при отображении для каждого кодпоинта
///
/// приоритет правил:
///     1. Default_Ignorable_Code_Point -> Ignorable
///     2. Emoji, кроме эмодзи с текстовым представлением -> Emoji
///     3. Cf, Me, Mn, кроме символов аннотаций -> Mark
///     4. Cc, Cn, Co, Cs, Zl, Zp и символы аннотаций -> None
///     5. East_Asian_Width: F, W -> Wide; H, Na, N -> Narrow; A -> Ambiguous; иначе Narrow
pub fn classify(sources: &CharwidthSources) -> PropertyAssignment<'static>
{
    use GeneralCategory::*;

    let empty = HashSet::new();

    let ignorable = sources.derived_core.get("Default_Ignorable_Code_Point").unwrap_or(&empty);
    let emoji = sources.emoji.get("Emoji").unwrap_or(&empty);

    (0 .. CODEPOINTS_COUNT as u32)
        .map(|code| {
            if ignorable.contains(&code) {
                return IGNORABLE;
            }

            if emoji.contains(&code) && !EMOJI_TEXT_PRESENTATION_SET.contains(&code) {
                return EMOJI;
            }

            if INTERLINEAR_ANNOTATIONS.contains(&code) {
                return NONE;
            }

            match sources.unicode.category(code) {
                Format | EnclosingMark | NonspacingMark => MARK,
                Control | Unassigned | PrivateUse | Surrogate | LineSeparator | ParagraphSeparator => NONE,
                _ => by_east_asian_width(sources.east_asian_width.get(code)),
            }
        })
        .collect()
}

/// таблица значений в фиксированном порядке
pub fn symbols() -> Result<SymbolTable, PrepareError>
{
    SymbolTable::from_names(CHARWIDTH_NAMES)
}

fn by_east_asian_width(eaw: Option<&str>) -> &'static str
{
    match eaw {
        Some("F" | "W") => WIDE,
        Some("H" | "Na" | "N") => NARROW,
        Some("A") => AMBIGUOUS,
        _ => NARROW,
    }
}
