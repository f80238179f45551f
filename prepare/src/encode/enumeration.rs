use super::EncodeProperty;
use crate::symbols::SymbolTable;
use crate::PrepareError;

/// значение перечислимого свойства кодируется своим кодом из таблицы символов
pub struct EnumEncoder<'a>
{
    symbols: &'a SymbolTable,
}

impl<'a> EnumEncoder<'a>
{
    pub fn new(symbols: &'a SymbolTable) -> Self
    {
        Self { symbols }
    }
}

impl<'a, 'v> EncodeProperty<&'v str> for EnumEncoder<'a>
{
    type Output = i8;

    #[inline]
    fn encode(&mut self, _: u32, value: &&'v str) -> Result<i8, PrepareError>
    {
        self.symbols.require(value)
    }
}
