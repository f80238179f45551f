use std::collections::BTreeMap;
use std::path::Path;

use crate::properties::{Decomposition, GeneralCategory};
use crate::property::read;
use crate::{SourceError, CODEPOINTS_COUNT, UNICODE_MAX};

/// количество колонок в строке UnicodeData.txt
const UNICODE_DATA_FIELDS: usize = 15;

/// свойства из UnicodeData.txt, необходимые для составления таблиц
#[derive(Debug, Clone)]
pub struct UnicodeData
{
    /// категория каждого кодпоинта, для отсутствующих в файле - Cn
    categories: Vec<GeneralCategory>,
    /// явно указанные декомпозиции
    decompositions: BTreeMap<u32, Decomposition>,
}

impl UnicodeData
{
    /// категория кодпоинта
    #[inline]
    pub fn category(&self, code: u32) -> GeneralCategory
    {
        self.categories.get(code as usize).copied().unwrap_or_default()
    }

    /// декомпозиция кодпоинта, если она указана в UnicodeData.txt
    #[inline]
    pub fn decomposition(&self, code: u32) -> Option<&Decomposition>
    {
        self.decompositions.get(&code)
    }

    /// все декомпозиции в порядке возрастания кодпоинтов
    pub fn decompositions(&self) -> impl Iterator<Item = (u32, &Decomposition)>
    {
        self.decompositions.iter().map(|(&code, d)| (code, d))
    }
}

/// разбор UnicodeData.txt
pub fn parse_unicode_data(text: &str) -> Result<UnicodeData, SourceError>
{
    let file = "UnicodeData.txt";

    let mut data = UnicodeData {
        categories: vec![GeneralCategory::Unassigned; CODEPOINTS_COUNT],
        decompositions: BTreeMap::new(),
    };

    // начало диапазона вида <CJK Ideograph, First> .. <CJK Ideograph, Last>
    let mut range_start: Option<(u32, &str)> = None;

    for (number, line) in text.lines().enumerate() {
        let line_number = number + 1;

        if line.trim().is_empty() {
            continue;
        }

        let props: Vec<&str> = line.split(';').collect();

        if props.len() != UNICODE_DATA_FIELDS {
            return Err(SourceError::malformed(
                file,
                line_number,
                format!("ожидается {} колонок, получено {}", UNICODE_DATA_FIELDS, props.len()),
            ));
        }

        let code = u32::from_str_radix(props[0], 16)
            .ok()
            .filter(|&code| code <= UNICODE_MAX)
            .ok_or_else(|| SourceError::malformed(file, line_number, format!("некорректный код {:?}", props[0])))?;

        let name = props[1];

        let gc = GeneralCategory::try_from(props[2])
            .map_err(|e| SourceError::malformed(file, line_number, e.to_string()))?;

        // диапазоны: CJK, хангыль, тангутский, суррогаты, области для приватного использования
        if let Some(range_name) = name.strip_prefix('<').and_then(|n| n.strip_suffix(", First>")) {
            range_start = Some((code, range_name));
            data.categories[code as usize] = gc;

            continue;
        }

        if let Some(range_name) = name.strip_prefix('<').and_then(|n| n.strip_suffix(", Last>")) {
            let first = match range_start.take() {
                Some((first, first_name)) if first_name == range_name && first <= code => first,
                _ => {
                    return Err(SourceError::malformed(
                        file,
                        line_number,
                        format!("конец диапазона {:?} без начала", range_name),
                    ))
                }
            };

            data.categories[first as usize ..= code as usize].fill(gc);

            continue;
        }

        data.categories[code as usize] = gc;

        if !props[5].is_empty() {
            let decomposition = Decomposition::try_from(props[5])
                .map_err(|e| SourceError::malformed(file, line_number, e.to_string()))?;

            data.decompositions.insert(code, decomposition);
        }
    }

    if let Some((_, range_name)) = range_start {
        return Err(SourceError::malformed(
            file,
            text.lines().count(),
            format!("диапазон {:?} не закрыт", range_name),
        ));
    }

    Ok(data)
}

/// прочитать UnicodeData.txt
pub fn read_unicode_data(path: &Path) -> Result<UnicodeData, SourceError>
{
    parse_unicode_data(&read(path)?)
}
