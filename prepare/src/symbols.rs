use std::collections::HashMap;

use crate::PrepareError;

/// таблица значений перечислимого свойства: название -> небольшое целое.
/// коды назначаются подряд начиная с 0 в порядке регистрации, отрицательные коды можно только зарезервировать
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable
{
    /// названия и коды в порядке регистрации
    entries: Vec<(String, i8)>,
    index: HashMap<String, i8>,
    /// код, который получит следующее значение
    next: i16,
}

impl SymbolTable
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// таблица из списка названий, коды 0, 1, 2, ...
    pub fn from_names<I, S>(names: I) -> Result<Self, PrepareError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut symbols = Self::new();

        for name in names {
            symbols.register(name.as_ref())?;
        }

        Ok(symbols)
    }

    /// зарегистрировать значение со следующим по порядку кодом
    pub fn register(&mut self, name: &str) -> Result<i8, PrepareError>
    {
        let code = i8::try_from(self.next).map_err(|_| PrepareError::TooManySymbols {
            name: name.to_owned(),
            max: i8::MAX as usize + 1,
        })?;

        self.insert(name, code)?;
        self.next += 1;

        Ok(code)
    }

    /// зарезервировать за значением отрицательный код (например, -1 для hangul)
    pub fn reserve(&mut self, name: &str, code: i8) -> Result<(), PrepareError>
    {
        match code < 0 {
            true => self.insert(name, code),
            false => Err(PrepareError::DuplicateSymbol { name: name.to_owned() }),
        }
    }

    /// код значения
    #[inline]
    pub fn code(&self, name: &str) -> Option<i8>
    {
        self.index.get(name).copied()
    }

    /// код значения, отсутствие значения - ошибка
    pub fn require(&self, name: &str) -> Result<i8, PrepareError>
    {
        self.code(name).ok_or_else(|| PrepareError::UnknownSymbol { name: name.to_owned() })
    }

    /// значения в порядке возрастания кодов
    pub fn iter(&self) -> impl Iterator<Item = (&str, i8)>
    {
        let mut entries: Vec<(&str, i8)> = self.entries.iter().map(|(name, code)| (name.as_str(), *code)).collect();
        entries.sort_by_key(|&(_, code)| code);

        entries.into_iter()
    }

    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }

    fn insert(&mut self, name: &str, code: i8) -> Result<(), PrepareError>
    {
        if self.index.contains_key(name) || self.entries.iter().any(|&(_, c)| c == code) {
            return Err(PrepareError::DuplicateSymbol { name: name.to_owned() });
        }

        self.entries.push((name.to_owned(), code));
        self.index.insert(name.to_owned(), code);

        Ok(())
    }
}
