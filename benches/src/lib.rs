use unicode_tables_source::{hangul, CODEPOINTS_COUNT};

/// искусственное значение перечислимого свойства для всех кодпоинтов: похоже на настоящие данные -
/// пестрая латиница, длинные однородные диапазоны CJK и хангыль, пустые верхние плоскости
pub fn synthetic_assignment() -> Vec<i8>
{
    (0 .. CODEPOINTS_COUNT as u32).map(synthetic_value).collect()
}

fn synthetic_value(code: u32) -> i8
{
    match code {
        0 ..= 0x7F => (code % 7) as i8,
        0x80 ..= 0x2FFF => ((code >> 3) % 5) as i8,
        0x4E00 ..= 0x9FFF => 5,
        code if hangul::is_syllable(code) => 6,
        0xE000 ..= 0xF8FF => 1,
        0x1F300 ..= 0x1F64F => ((code >> 4) % 2 + 5) as i8,
        0x20000 ..= 0x2FFFF => 5,
        _ => 0,
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn covers_domain()
    {
        let values = synthetic_assignment();

        assert_eq!(values.len(), CODEPOINTS_COUNT);
        assert_eq!(values[0x4E2D], 5);
        assert_eq!(values[0xAC00], 6);
        assert_eq!(values[0x10FFFF], 0);
    }
}
