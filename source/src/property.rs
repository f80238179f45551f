use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use tracing::trace;

use crate::{SourceError, CODEPOINTS_COUNT, UNICODE_MAX};

/// значения свойства, назначенные каждому кодпоинту не более одного раза
/// (EastAsianWidth.txt, WordBreakProperty.txt)
#[derive(Debug, Clone)]
pub struct PropertyValues
{
    /// названия значений в порядке появления в файле
    names: Vec<String>,
    /// индекс названия для каждого кодпоинта U+0000 ..= U+10FFFF
    codes: Vec<Option<u16>>,
}

impl PropertyValues
{
    /// значение свойства кодпоинта
    #[inline]
    pub fn get(&self, code: u32) -> Option<&str>
    {
        self.codes
            .get(code as usize)
            .copied()
            .flatten()
            .map(|i| self.names[i as usize].as_str())
    }

    /// названия всех встретившихся значений
    pub fn names(&self) -> impl Iterator<Item = &str>
    {
        self.names.iter().map(String::as_str)
    }
}

/// свойства, заданные множествами кодпоинтов (PropList.txt, DerivedCoreProperties.txt, emoji-data.txt)
pub type PropertySets = HashMap<String, HashSet<u32>>;

/// запись файла свойств: `CODE[..CODE] ; NAME`
struct PropertyRecord<'a>
{
    first: u32,
    last: u32,
    name: &'a str,
}

/// разбор файла, в котором кодпоинту соответствует одно значение
pub fn parse_dense(file: &str, text: &str) -> Result<PropertyValues, SourceError>
{
    let mut values = PropertyValues {
        names: vec![],
        codes: vec![None; CODEPOINTS_COUNT],
    };

    let mut index: HashMap<&str, u16> = HashMap::new();

    for (number, line) in text.lines().enumerate() {
        let record = match parse_record(file, number + 1, line)? {
            Some(record) => record,
            None => continue,
        };

        let name = match index.get(record.name) {
            Some(&name) => name,
            None => {
                let name = u16::try_from(values.names.len())
                    .map_err(|_| SourceError::malformed(file, number + 1, "слишком много значений свойства"))?;

                values.names.push(record.name.to_owned());
                index.insert(record.name, name);

                name
            }
        };

        for code in record.first ..= record.last {
            let slot = &mut values.codes[code as usize];

            match *slot {
                Some(existing) if existing != name => {
                    return Err(SourceError::DuplicateAssignment {
                        file: file.to_owned(),
                        code,
                        first: values.names[existing as usize].clone(),
                        second: record.name.to_owned(),
                    });
                }
                _ => *slot = Some(name),
            }
        }
    }

    Ok(values)
}

/// разбор файла, в котором кодпоинт может входить в несколько свойств
pub fn parse_sets(file: &str, text: &str) -> Result<PropertySets, SourceError>
{
    let mut sets = PropertySets::new();

    for (number, line) in text.lines().enumerate() {
        if let Some(record) = parse_record(file, number + 1, line)? {
            sets.entry(record.name.to_owned())
                .or_default()
                .extend(record.first ..= record.last);
        }
    }

    Ok(sets)
}

/// прочитать файл со значениями свойства
pub fn read_dense(path: &Path) -> Result<PropertyValues, SourceError>
{
    parse_dense(&path.display().to_string(), &read(path)?)
}

/// прочитать файл с множествами кодпоинтов
pub fn read_sets(path: &Path) -> Result<PropertySets, SourceError>
{
    parse_sets(&path.display().to_string(), &read(path)?)
}

pub(crate) fn read(path: &Path) -> Result<String, SourceError>
{
    fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_owned(),
        source,
    })
}

/// разбор строки файла свойств. пустые строки и комментарии пропускаются
fn parse_record<'a>(file: &str, line_number: usize, line: &'a str) -> Result<Option<PropertyRecord<'a>>, SourceError>
{
    let data = match line.split_once('#') {
        Some((data, _)) => data,
        None => line,
    }
    .trim();

    if data.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = data.split(';').map(str::trim).collect();

    // значения перечислимых подсвойств (например, `094D ; InCB; Linker`) - это не записи вида CODE ; NAME
    if fields.len() > 2 {
        trace!(file, line = line_number, "пропускаем запись с {} полями", fields.len());
        return Ok(None);
    }

    if fields.len() < 2 {
        return Err(SourceError::malformed(file, line_number, "ожидается CODE[..CODE] ; NAME"));
    }

    let (first, last) = parse_range(fields[0])
        .ok_or_else(|| SourceError::malformed(file, line_number, format!("некорректный диапазон {:?}", fields[0])))?;

    let name = fields[1];

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(SourceError::malformed(
            file,
            line_number,
            format!("некорректное название свойства {:?}", name),
        ));
    }

    Ok(Some(PropertyRecord { first, last, name }))
}

/// `CODE` или `CODE..CODE`
fn parse_range(range: &str) -> Option<(u32, u32)>
{
    let (first, last) = match range.split_once("..") {
        Some((first, last)) => (parse_code(first)?, parse_code(last)?),
        None => {
            let code = parse_code(range)?;
            (code, code)
        }
    };

    match first <= last {
        true => Some((first, last)),
        false => None,
    }
}

fn parse_code(code: &str) -> Option<u32>
{
    let code = code.trim();

    if code.is_empty() || !code.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    u32::from_str_radix(code, 16).ok().filter(|&code| code <= UNICODE_MAX)
}
