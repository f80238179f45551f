//! небольшие фрагменты файлов UCD для тестов

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use unicode_tables_prepare::classify::charwidth::CharwidthSources;
use unicode_tables_prepare::classify::word_break::WordBreakSources;
use unicode_tables_prepare::config::*;
use unicode_tables_source::{parse_dense, parse_sets, parse_unicode_data, PropertySets, PropertyValues, UnicodeData};

pub const UNICODE_DATA_TEXT: &str = "\
0000;<control>;Cc;0;BN;;;;;N;NULL;;;;
0009;<control>;Cc;0;S;;;;;N;CHARACTER TABULATION;;;;
000A;<control>;Cc;0;B;;;;;N;LINE FEED (LF);;;;
000D;<control>;Cc;0;B;;;;;N;CARRIAGE RETURN (CR);;;;
0020;SPACE;Zs;0;WS;;;;;N;;;;;
0023;NUMBER SIGN;Po;0;ET;;;;;N;;;;;
0025;PERCENT SIGN;Po;0;ET;;;;;N;;;;;
0026;AMPERSAND;Po;0;ON;;;;;N;;;;;
0027;APOSTROPHE;Po;0;ON;;;;;N;APOSTROPHE-QUOTE;;;;
002D;HYPHEN-MINUS;Pd;0;ES;;;;;N;;;;;
0030;DIGIT ZERO;Nd;0;EN;;0;0;0;N;;;;;
0031;DIGIT ONE;Nd;0;EN;;1;1;1;N;;;;;
0032;DIGIT TWO;Nd;0;EN;;2;2;2;N;;;;;
003A;COLON;Po;0;CS;;;;;N;;;;;
0040;COMMERCIAL AT;Po;0;ON;;;;;N;;;;;
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0042;LATIN CAPITAL LETTER B;Lu;0;L;;;;;N;;;;0062;
00A0;NO-BREAK SPACE;Zs;0;CS;<noBreak> 0020;;;;N;NON-BREAKING SPACE;;;;
00BD;VULGAR FRACTION ONE HALF;No;0;ON;<fraction> 0031 2044 0032;;;1/2;N;FRACTION ONE HALF;;;;
00C0;LATIN CAPITAL LETTER A WITH GRAVE;Lu;0;L;0041 0300;;;;N;LATIN CAPITAL LETTER A GRAVE;;;00E0;
0300;COMBINING GRAVE ACCENT;Mn;230;NSM;;;;;N;NON-SPACING GRAVE;;;;
200B;ZERO WIDTH SPACE;Cf;0;BN;;;;;N;;;;;
2028;LINE SEPARATOR;Zl;0;WS;;;;;N;;;;;
2044;FRACTION SLASH;Sm;0;CS;;;;;N;;;;;
4E00;<CJK Ideograph, First>;Lo;0;L;;;;;N;;;;;
9FEA;<CJK Ideograph, Last>;Lo;0;L;;;;;N;;;;;
AC00;<Hangul Syllable, First>;Lo;0;L;;;;;N;;;;;
D7A3;<Hangul Syllable, Last>;Lo;0;L;;;;;N;;;;;
FF03;FULLWIDTH NUMBER SIGN;Po;0;ET;<wide> 0023;;;;N;;;;;
FF05;FULLWIDTH PERCENT SIGN;Po;0;ET;<wide> 0025;;;;N;;;;;
FF06;FULLWIDTH AMPERSAND;Po;0;ON;<wide> 0026;;;;N;;;;;
FF0D;FULLWIDTH HYPHEN-MINUS;Pd;0;ES;<wide> 002D;;;;N;;;;;
FF20;FULLWIDTH COMMERCIAL AT;Po;0;ON;<wide> 0040;;;;N;;;;;
FFF9;INTERLINEAR ANNOTATION ANCHOR;Cf;0;ON;;;;;N;;;;;
1F600;GRINNING FACE;So;0;ON;;;;;N;;;;;
";

pub const WORD_BREAK_TEXT: &str = "\
# WordBreakProperty-10.0.0.txt

000A          ; LF # Cc       <control-000A>
000D          ; CR # Cc       <control-000D>
0027          ; Single_Quote # Po       APOSTROPHE
0030..0039    ; Numeric # Nd  [10] DIGIT ZERO..DIGIT NINE
003A          ; MidLetter # Po       COLON
0041..005A    ; ALetter # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
00C0          ; ALetter # L&       LATIN CAPITAL LETTER A WITH GRAVE
0300..036F    ; Extend # Mn [112] COMBINING GRAVE ACCENT..COMBINING LATIN SMALL LETTER X
";

pub const PROP_LIST_TEXT: &str = "\
# PropList-10.0.0.txt

0009..000D    ; White_Space # Cc   [5] <control-0009>..<control-000D>
0020          ; White_Space # Zs       SPACE
00A0          ; White_Space # Zs       NO-BREAK SPACE
2028          ; White_Space # Zl       LINE SEPARATOR
002D          ; Dash # Pd       HYPHEN-MINUS
";

pub const DERIVED_CORE_TEXT: &str = "\
# DerivedCoreProperties-10.0.0.txt

0041..005A    ; Alphabetic # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
200B          ; Default_Ignorable_Code_Point # Cf       ZERO WIDTH SPACE
0300..036F    ; Grapheme_Extend # Mn [112] COMBINING GRAVE ACCENT..COMBINING LATIN SMALL LETTER X
094D          ; InCB; Linker # Mn       DEVANAGARI SIGN VIRAMA
";

pub const EAST_ASIAN_WIDTH_TEXT: &str = "\
# EastAsianWidth-10.0.0.txt

0000..001F;N     # Cc    [32] <control-0000>..<control-001F>
0020;Na          # Zs         SPACE
0021..007E;Na    # ...
00A0;N           # Zs         NO-BREAK SPACE
00BD;A           # No         VULGAR FRACTION ONE HALF
00C0;N           # Lu         LATIN CAPITAL LETTER A WITH GRAVE
0300..036F;A     # Mn   [112] COMBINING GRAVE ACCENT..COMBINING LATIN SMALL LETTER X
200B;N           # Cf         ZERO WIDTH SPACE
2028;N           # Zl         LINE SEPARATOR
4E00..9FFF;W     # Lo [20992] CJK UNIFIED IDEOGRAPH-4E00..CJK UNIFIED IDEOGRAPH-9FFF
AC00..D7A3;W     # Lo [11172] HANGUL SYLLABLE GA..HANGUL SYLLABLE HIH
FF01..FF60;F     # ...
FFF9..FFFB;N     # Cf     [3] INTERLINEAR ANNOTATION ANCHOR..INTERLINEAR ANNOTATION TERMINATOR
1F600;W          # So         GRINNING FACE
";

pub const EMOJI_TEXT: &str = "\
# emoji-data.txt

0023          ; Emoji                # 1.1  [1] (#️)       number sign
0030..0039    ; Emoji                # 1.1 [10] (0️..9️)    digit zero..digit nine
1F600         ; Emoji                # 6.1  [1] (😀)       grinning face
1F600         ; Emoji_Presentation   # 6.1  [1] (😀)       grinning face
";

/// разобранные фрагменты UCD
pub struct Fixture
{
    pub unicode: UnicodeData,
    pub word_break: PropertyValues,
    pub prop_list: PropertySets,
    pub derived_core: PropertySets,
    pub east_asian_width: PropertyValues,
    pub emoji: PropertySets,
}

impl Fixture
{
    pub fn load() -> Self
    {
        Self::with_word_break(WORD_BREAK_TEXT)
    }

    /// фрагменты с другим WordBreakProperty.txt
    pub fn with_word_break(word_break: &str) -> Self
    {
        Self::new(UNICODE_DATA_TEXT, word_break)
    }

    /// фрагменты с другими UnicodeData.txt и WordBreakProperty.txt
    pub fn new(unicode_data: &str, word_break: &str) -> Self
    {
        Self {
            unicode: parse_unicode_data(unicode_data).unwrap(),
            word_break: parse_dense("WordBreakProperty.txt", word_break).unwrap(),
            prop_list: parse_sets("PropList.txt", PROP_LIST_TEXT).unwrap(),
            derived_core: parse_sets("DerivedCoreProperties.txt", DERIVED_CORE_TEXT).unwrap(),
            east_asian_width: parse_dense("EastAsianWidth.txt", EAST_ASIAN_WIDTH_TEXT).unwrap(),
            emoji: parse_sets("emoji-data.txt", EMOJI_TEXT).unwrap(),
        }
    }

    pub fn word_break_sources(&self) -> WordBreakSources<'_>
    {
        WordBreakSources {
            unicode: &self.unicode,
            word_break: &self.word_break,
            prop_list: &self.prop_list,
            derived_core: &self.derived_core,
        }
    }

    pub fn charwidth_sources(&self) -> CharwidthSources<'_>
    {
        CharwidthSources {
            unicode: &self.unicode,
            east_asian_width: &self.east_asian_width,
            emoji: &self.emoji,
            derived_core: &self.derived_core,
        }
    }
}

/// каталог данных с фрагментами UCD, разложенными по тем же путям, что и настоящие файлы
pub fn data_dir(name: &str) -> PathBuf
{
    let dir = std::env::temp_dir().join(format!("unicode_tables_{}_{}", name, std::process::id()));

    let files = [
        (UNICODE_DATA, UNICODE_DATA_TEXT),
        (PROP_LIST, PROP_LIST_TEXT),
        (DERIVED_CORE_PROPERTIES, DERIVED_CORE_TEXT),
        (EAST_ASIAN_WIDTH, EAST_ASIAN_WIDTH_TEXT),
        (WORD_BREAK_PROPERTY, WORD_BREAK_TEXT),
        (EMOJI_DATA, EMOJI_TEXT),
    ];

    for (relative, text) in files {
        write(&dir.join(relative), text);
    }

    dir
}

fn write(path: &Path, text: &str)
{
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}
