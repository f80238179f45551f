use thiserror::Error;

mod decomposition;
mod general_category;

pub use decomposition::Decomposition;
pub use decomposition::DecompositionTag;
pub use general_category::GeneralCategory;

/// значение свойства не распознано
#[derive(Debug, PartialEq, Error)]
pub enum PropertiesError
{
    #[error("неизвестное значение свойства: {0:?}")]
    UnknownPropertyValue(String),
    #[error("некорректный код в декомпозиции: {0:?}")]
    InvalidCode(String),
}
