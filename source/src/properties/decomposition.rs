use super::PropertiesError;

/// декомпозиция
/// берется из UCD: 6 колонка UnicodeData.txt, например `<compat> 0020 0308`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition
{
    /// кодпоинты декомпозиции
    pub codes: Vec<u32>,
    /// тег декомпозиции совместимости, у канонической декомпозиции тега нет
    pub tag: Option<DecompositionTag>,
}

impl TryFrom<&str> for Decomposition
{
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        let value = value.trim();

        let (tag, codes) = match value.starts_with('<') {
            true => match value.split_once('>') {
                Some((tag, codes)) => (Some(DecompositionTag::try_from(&value[.. tag.len() + 1])?), codes),
                None => return Err(PropertiesError::UnknownPropertyValue(value.to_owned())),
            },
            false => (None, value),
        };

        if codes.trim().is_empty() {
            return Err(PropertiesError::InvalidCode(value.to_owned()));
        }

        let codes = codes
            .split_whitespace()
            .map(|v| u32::from_str_radix(v, 16).map_err(|_| PropertiesError::InvalidCode(v.to_owned())))
            .collect::<Result<Vec<u32>, _>>()?;

        Ok(Self { codes, tag })
    }
}

/// тег декомпозиции совместимости
/// берется из UCD: 6 колонка UnicodeData.txt
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum DecompositionTag
{
    /// вариант шрифта
    Font,
    /// неразрывная версия пробела или дефиса
    NoBreak,
    /// начальная форма представления (арабский)
    Initial,
    /// средняя форма представления (арабский)
    Medial,
    /// конечная форма представления (арабский)
    Final,
    /// изолированная форма представления (арабский)
    Isolated,
    /// окруженная форма
    Circle,
    /// надстрочная форма
    Super,
    /// подстрочная форма
    Sub,
    /// вертикальная форма представления
    Vertical,
    /// широкий (зэнкаку) вариант символа
    Wide,
    /// узкий (ханкаку) вариант символа
    Narrow,
    /// малая форма (совместимость с CNS 11643)
    Small,
    /// вариант шрифта в квадрате CJK
    Square,
    /// обыкновенная дробь
    Fraction,
    /// прочие случаи совместимости
    Compat,
}

impl DecompositionTag
{
    /// все теги в порядке, принятом в UAX #44 (Table 14)
    pub const ALL: [DecompositionTag; 16] = [
        Self::Font,
        Self::NoBreak,
        Self::Initial,
        Self::Medial,
        Self::Final,
        Self::Isolated,
        Self::Circle,
        Self::Super,
        Self::Sub,
        Self::Vertical,
        Self::Wide,
        Self::Narrow,
        Self::Small,
        Self::Square,
        Self::Fraction,
        Self::Compat,
    ];

    /// название тега без угловых скобок
    pub fn name(&self) -> &'static str
    {
        match self {
            Self::Font => "font",
            Self::NoBreak => "noBreak",
            Self::Initial => "initial",
            Self::Medial => "medial",
            Self::Final => "final",
            Self::Isolated => "isolated",
            Self::Circle => "circle",
            Self::Super => "super",
            Self::Sub => "sub",
            Self::Vertical => "vertical",
            Self::Wide => "wide",
            Self::Narrow => "narrow",
            Self::Small => "small",
            Self::Square => "square",
            Self::Fraction => "fraction",
            Self::Compat => "compat",
        }
    }
}

impl TryFrom<&str> for DecompositionTag
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(tag: &str) -> Result<Self, Self::Error>
    {
        let name = tag
            .strip_prefix('<')
            .and_then(|tag| tag.strip_suffix('>'))
            .ok_or_else(|| PropertiesError::UnknownPropertyValue(tag.to_owned()))?;

        Self::ALL
            .iter()
            .find(|t| t.name() == name)
            .copied()
            .ok_or_else(|| PropertiesError::UnknownPropertyValue(tag.to_owned()))
    }
}

impl core::fmt::Display for DecompositionTag
{
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "<{}>", self.name())
    }
}
