use thiserror::Error;
use unicode_tables_source::SourceError;

/// ошибки генерации таблиц. любая из них прерывает генерацию, частичный результат не записывается
#[derive(Debug, Error)]
pub enum PrepareError
{
    /// ошибка чтения исходных данных UCD
    #[error(transparent)]
    Source(#[from] SourceError),

    /// после применения всех правил кодпоинт остался без значения свойства
    #[error("кодпоинт U+{code:04X} не классифицирован")]
    UnclassifiedCodepoint
    {
        code: u32,
    },

    /// устаревшая пунктуация (# % & @ и полноширинные варианты) вне категорий пунктуации
    #[error("U+{code:04X} имеет категорию {category}, ожидается пунктуация")]
    NotPunctuation
    {
        code: u32,
        category: &'static str,
    },

    /// декомпозиция с тегом, но без кодпоинтов
    #[error("U+{code:04X}: пустая декомпозиция")]
    EmptyDecomposition
    {
        code: u32,
    },

    /// кодов i8 не хватает на все значения свойства
    #[error("значению {name:?} не хватает кода, допустимо не более {max} значений")]
    TooManySymbols
    {
        name: String,
        max: usize,
    },

    /// значение не помещается в отведенное ему поле записи
    #[error("U+{code:04X}: значение {field} = {value} превышает допустимое {max}")]
    EncodingOverflow
    {
        code: u32,
        field: &'static str,
        value: i64,
        max: i64,
    },

    /// размер области определения не делится на размер блока
    #[error("{domain} кодпоинтов невозможно разбить на блоки по {block_size}")]
    NonDivisibleDomain
    {
        domain: usize,
        block_size: usize,
    },

    /// значение свойства отсутствует в таблице символов
    #[error("значение свойства {name:?} не зарегистрировано")]
    UnknownSymbol
    {
        name: String,
    },

    /// название или код значения свойства уже зарегистрированы
    #[error("значение свойства {name:?} уже зарегистрировано")]
    DuplicateSymbol
    {
        name: String,
    },

    /// ошибка записи результата
    #[error("ошибка записи: {0}")]
    Io(#[from] std::io::Error),
}
