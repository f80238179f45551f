// алгоритмическая декомпозиция слогов хангыль, Unicode 3.12 Conjoining Jamo Behavior.
// в UnicodeData.txt слоги записаны одним диапазоном без декомпозиции

/// начало блока слогов хангыль
pub const S_BASE: u32 = 0xAC00;
/// начало блока ведущих согласных чамо
pub const L_BASE: u32 = 0x1100;
/// начало блока гласных чамо
pub const V_BASE: u32 = 0x1161;
/// завершающие согласные начинаются с T_BASE + 1, индекс 0 - слог без завершающей согласной
pub const T_BASE: u32 = 0x11A7;
/// количество ведущих согласных
pub const L_COUNT: u32 = 19;
/// количество гласных
pub const V_COUNT: u32 = 21;
/// количество вариантов завершающей согласной, включая её отсутствие
pub const T_COUNT: u32 = 28;
/// количество гласных * количество завершающих согласных
pub const N_COUNT: u32 = V_COUNT * T_COUNT;
/// количество слогов хангыль
pub const S_COUNT: u32 = L_COUNT * N_COUNT;

/// является ли кодпоинт слогом хангыль (U+AC00 ..= U+D7A3)
#[inline]
pub fn is_syllable(code: u32) -> bool
{
    code.wrapping_sub(S_BASE) < S_COUNT
}

/// декомпозиция слога: LV или LVT
pub fn decompose(code: u32) -> Option<Vec<u32>>
{
    if !is_syllable(code) {
        return None;
    }

    let s = code - S_BASE;

    let l = L_BASE + s / N_COUNT;
    let v = V_BASE + (s % N_COUNT) / T_COUNT;
    let t = s % T_COUNT;

    Some(match t {
        0 => vec![l, v],
        _ => vec![l, v, T_BASE + t],
    })
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn syllables()
    {
        assert_eq!(decompose(0xAC00), Some(vec![0x1100, 0x1161]));
        assert_eq!(decompose(0xAC01), Some(vec![0x1100, 0x1161, 0x11A8]));
        assert_eq!(decompose(0xD7A3), Some(vec![0x1112, 0x1175, 0x11C2]));
        assert_eq!(decompose(0xD7A4), None);
        assert_eq!(decompose(0xABFF), None);
    }
}
