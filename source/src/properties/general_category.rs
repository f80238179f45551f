use super::PropertiesError;

/// основная категория символа (General Category, GC)
/// берется из UCD: третья колонка UnicodeData.txt
///
/// группы категорий, на которые опираются классификаторы:
///     L (Lu, Ll, Lt, Lm, Lo) - буквы
///     M (Mn, Mc, Me) - комбинирующие символы
///     N (Nd, Nl, No) - цифры, числовые символы
///     P (Pc, Pd, Ps, Pe, Pi, Pf, Po) - знаки препинания
///     S (Sm, Sc, Sk, So) - символы
///     Z (Zs, Zl, Zp) - разделители
///     C (Cc, Cf, Cs, Co, Cn) - служебные и неназначенные
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum GeneralCategory
{
    /// Cn - кодпоинт не назначен
    /// используется для кодпоинтов, отсутствующих в UnicodeData.txt
    #[default]
    Unassigned,

    /// Lu
    UppercaseLetter,
    /// Ll
    LowercaseLetter,
    /// Lt
    TitlecaseLetter,
    /// Lm
    ModifierLetter,
    /// Lo
    OtherLetter,

    /// Mn - комбинирующий маркер, не занимающий места
    NonspacingMark,
    /// Mc
    SpacingMark,
    /// Me - охватывающий маркер
    EnclosingMark,

    /// Nd
    DecimalNumber,
    /// Nl
    LetterNumber,
    /// No
    OtherNumber,

    /// Zs
    SpaceSeparator,
    /// Zl
    LineSeparator,
    /// Zp
    ParagraphSeparator,

    /// Cc - управляющие символы C0 и C1
    Control,
    /// Cf - символы форматирования
    Format,
    /// Cs
    Surrogate,
    /// Co
    PrivateUse,

    /// Pc
    ConnectorPunctuation,
    /// Pd
    DashPunctuation,
    /// Ps
    OpenPunctuation,
    /// Pe
    ClosePunctuation,
    /// Pi
    InitialPunctuation,
    /// Pf
    FinalPunctuation,
    /// Po
    OtherPunctuation,

    /// Sm
    MathSymbol,
    /// Sc
    CurrencySymbol,
    /// Sk
    ModifierSymbol,
    /// So
    OtherSymbol,
}

impl GeneralCategory
{
    /// двухбуквенное обозначение категории
    pub fn abbr(&self) -> &'static str
    {
        match self {
            Self::Unassigned => "Cn",
            Self::UppercaseLetter => "Lu",
            Self::LowercaseLetter => "Ll",
            Self::TitlecaseLetter => "Lt",
            Self::ModifierLetter => "Lm",
            Self::OtherLetter => "Lo",
            Self::NonspacingMark => "Mn",
            Self::SpacingMark => "Mc",
            Self::EnclosingMark => "Me",
            Self::DecimalNumber => "Nd",
            Self::LetterNumber => "Nl",
            Self::OtherNumber => "No",
            Self::SpaceSeparator => "Zs",
            Self::LineSeparator => "Zl",
            Self::ParagraphSeparator => "Zp",
            Self::Control => "Cc",
            Self::Format => "Cf",
            Self::Surrogate => "Cs",
            Self::PrivateUse => "Co",
            Self::ConnectorPunctuation => "Pc",
            Self::DashPunctuation => "Pd",
            Self::OpenPunctuation => "Ps",
            Self::ClosePunctuation => "Pe",
            Self::InitialPunctuation => "Pi",
            Self::FinalPunctuation => "Pf",
            Self::OtherPunctuation => "Po",
            Self::MathSymbol => "Sm",
            Self::CurrencySymbol => "Sc",
            Self::ModifierSymbol => "Sk",
            Self::OtherSymbol => "So",
        }
    }

    /// знаки препинания (P)
    #[inline]
    pub fn is_punctuation(&self) -> bool
    {
        matches!(
            self,
            Self::ConnectorPunctuation
                | Self::DashPunctuation
                | Self::OpenPunctuation
                | Self::ClosePunctuation
                | Self::InitialPunctuation
                | Self::FinalPunctuation
                | Self::OtherPunctuation
        )
    }

    /// символы (S)
    #[inline]
    pub fn is_symbol(&self) -> bool
    {
        matches!(
            self,
            Self::MathSymbol | Self::CurrencySymbol | Self::ModifierSymbol | Self::OtherSymbol
        )
    }
}

impl TryFrom<&str> for GeneralCategory
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        Ok(match abbr {
            "Cn" | "" => Self::Unassigned,
            "Lu" => Self::UppercaseLetter,
            "Ll" => Self::LowercaseLetter,
            "Lt" => Self::TitlecaseLetter,
            "Lm" => Self::ModifierLetter,
            "Lo" => Self::OtherLetter,
            "Mn" => Self::NonspacingMark,
            "Mc" => Self::SpacingMark,
            "Me" => Self::EnclosingMark,
            "Nd" => Self::DecimalNumber,
            "Nl" => Self::LetterNumber,
            "No" => Self::OtherNumber,
            "Zs" => Self::SpaceSeparator,
            "Zl" => Self::LineSeparator,
            "Zp" => Self::ParagraphSeparator,
            "Cc" => Self::Control,
            "Cf" => Self::Format,
            "Cs" => Self::Surrogate,
            "Co" => Self::PrivateUse,
            "Pc" => Self::ConnectorPunctuation,
            "Pd" => Self::DashPunctuation,
            "Ps" => Self::OpenPunctuation,
            "Pe" => Self::ClosePunctuation,
            "Pi" => Self::InitialPunctuation,
            "Pf" => Self::FinalPunctuation,
            "Po" => Self::OtherPunctuation,
            "Sm" => Self::MathSymbol,
            "Sc" => Self::CurrencySymbol,
            "Sk" => Self::ModifierSymbol,
            "So" => Self::OtherSymbol,
            _ => return Err(PropertiesError::UnknownPropertyValue(abbr.to_owned())),
        })
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn abbreviations()
    {
        for abbr in ["Lu", "Nl", "Zp", "Cs", "Pi", "So", "Cn"] {
            let gc = GeneralCategory::try_from(abbr).unwrap();
            assert_eq!(gc.abbr(), abbr);
        }

        assert_eq!(GeneralCategory::try_from(""), Ok(GeneralCategory::Unassigned));
        assert!(GeneralCategory::try_from("Xx").is_err());
    }

    #[test]
    fn groups()
    {
        assert!(GeneralCategory::DashPunctuation.is_punctuation());
        assert!(!GeneralCategory::DashPunctuation.is_symbol());
        assert!(GeneralCategory::ModifierSymbol.is_symbol());
        assert!(!GeneralCategory::LetterNumber.is_punctuation());
    }
}
