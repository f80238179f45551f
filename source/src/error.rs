use std::path::PathBuf;

use thiserror::Error;

/// ошибки чтения и разбора файлов UCD
#[derive(Debug, Error)]
pub enum SourceError
{
    /// файл не удалось прочитать
    #[error("не удалось прочитать {}: {source}", path.display())]
    Io
    {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// строка не соответствует формату `CODE[..CODE] ; NAME [# comment]` (или формату UnicodeData.txt)
    #[error("{file}:{line}: некорректная запись: {reason}")]
    MalformedInputRecord
    {
        file: String,
        line: usize,
        reason: String,
    },

    /// кодпоинту уже назначено другое значение свойства
    #[error("{file}: U+{code:04X} уже имеет значение {first}, повторно назначается {second}")]
    DuplicateAssignment
    {
        file: String,
        code: u32,
        first: String,
        second: String,
    },
}

impl SourceError
{
    pub(crate) fn malformed(file: &str, line: usize, reason: impl Into<String>) -> Self
    {
        Self::MalformedInputRecord {
            file: file.to_owned(),
            line,
            reason: reason.into(),
        }
    }
}
