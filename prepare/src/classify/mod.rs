//! правила, по которым из свойств UCD получается значение свойства для каждого кодпоинта

pub mod charwidth;
pub mod decomposition;
pub mod overrides;
pub mod word_break;

/// значение перечислимого свойства для каждого кодпоинта U+0000 ..= U+10FFFF
pub type PropertyAssignment<'a> = Vec<&'a str>;
