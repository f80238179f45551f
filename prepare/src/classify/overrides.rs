//! списки исключений, составленные вручную. они привязаны к версии Unicode,
//! при обновлении данных UCD их нужно проверить заново

use std::collections::HashSet;

/// версия Unicode, для которой проверены списки
pub const OVERRIDES_UNICODE_VERSION: &str = "10.0.0";

/// смещение полноширинных вариантов ASCII (U+FF01 ..= U+FF5E)
pub const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// знаки, которые исторически считаются пунктуацией, но в тексте ведут себя как символы: # % & @
pub const LEGACY_PUNCTUATION: [u32; 4] = [0x0023, 0x0025, 0x0026, 0x0040];

/// Word_Break = Hyphen (по умолчанию это Punctuation)
pub const HYPHENS: [u32; 13] = [
    0x002D, // HYPHEN-MINUS
    0x058A, // ARMENIAN HYPHEN
    0x05BE, // HEBREW PUNCTUATION MAQAF
    0x1400, // CANADIAN SYLLABICS HYPHEN
    0x1806, // MONGOLIAN TODO SOFT HYPHEN
    0x2010, // HYPHEN
    0x2011, // NON-BREAKING HYPHEN
    0x2E17, // DOUBLE OBLIQUE HYPHEN
    0x2E1A, // HYPHEN WITH DIAERESIS
    0x2E40, // DOUBLE HYPHEN
    0x30A0, // KATAKANA-HIRAGANA DOUBLE HYPHEN
    0xFE63, // SMALL HYPHEN-MINUS
    0xFF0D, // FULLWIDTH HYPHEN-MINUS
];

/// дополнительные MidLetter, UAX #29 допускает такую настройку
pub const MID_LETTERS: [u32; 4] = [
    0x055A, // ARMENIAN APOSTROPHE
    0x0F0B, // TIBETAN MARK INTERSYLLABIC TSHEG
    0x201B, // SINGLE HIGH-REVERSED-9 QUOTATION MARK
    0x30FB, // KATAKANA MIDDLE DOT
];

/// эмодзи, которые по умолчанию отображаются как текст (так делает macOS)
pub const EMOJI_TEXT_PRESENTATION: [u32; 33] = [
    // number sign, asterisk
    0x0023, 0x002A,
    // digit zero .. digit nine
    0x0030, 0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037, 0x0038, 0x0039,
    // copyright, registered
    0x00A9, 0x00AE,
    // double exclamation, exclamation question mark
    0x203C, 0x2049,
    // trade mark
    0x2122,
    // arrows
    0x2194, 0x2195, 0x2196, 0x2197, 0x2198, 0x2199,
    // black, white small square
    0x25AA, 0x25AB,
    // play, reverse button
    0x25B6, 0x25C0,
    // male, female sign
    0x2640, 0x2642,
    // spade, club, heart, diamond suit
    0x2660, 0x2663, 0x2665, 0x2666,
];

/// символы аннотаций (interlinear annotation anchor / separator / terminator) не занимают места
pub const INTERLINEAR_ANNOTATIONS: [u32; 3] = [0xFFF9, 0xFFFA, 0xFFFB];

lazy_static! {
    /// устаревшая пунктуация вместе с полноширинными вариантами
    pub static ref LEGACY_PUNCTUATION_SET: HashSet<u32> = LEGACY_PUNCTUATION
        .iter()
        .flat_map(|&code| [code, code + FULLWIDTH_OFFSET])
        .collect();

    pub static ref EMOJI_TEXT_PRESENTATION_SET: HashSet<u32> = EMOJI_TEXT_PRESENTATION.iter().copied().collect();
}
