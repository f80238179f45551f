pub mod hangul;
pub mod properties;
pub mod property;
pub mod unicode;

mod error;

pub use error::SourceError;

pub use property::parse_dense;
pub use property::parse_sets;
pub use property::read_dense;
pub use property::read_sets;
pub use property::PropertySets;
pub use property::PropertyValues;

pub use unicode::parse_unicode_data;
pub use unicode::read_unicode_data;
pub use unicode::UnicodeData;

/// последний кодпоинт Unicode
pub const UNICODE_MAX: u32 = 0x10FFFF;

/// количество кодпоинтов U+0000 ..= U+10FFFF
pub const CODEPOINTS_COUNT: usize = UNICODE_MAX as usize + 1;
