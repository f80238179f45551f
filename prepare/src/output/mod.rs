//! вывод таблиц в виде исходного кода на Rust, пригодного для include!()

use crate::encode::{DecompositionRecord, Record};
use crate::generator::Compiled;

use self::format::{format_rows, unsigned_type, INDENT};

pub mod format;
pub mod stats;

/// количество элементов stage1 в строке
const STAGE1_PER_LINE: usize = 16;
/// количество элементов дополнительного массива в строке
const MAPPING_PER_LINE: usize = 8;

/// запись, которую можно вывести литералом
pub trait EmitRecord: Record
{
    /// тип элемента stage2 в сгенерированном коде
    const RUST_TYPE: &'static str;
    /// количество записей в строке
    const PER_LINE: usize;
    /// определение типа записи, если это не примитив
    const DEFINITION: Option<&'static str> = None;
    /// выводится ли дополнительный массив кодпоинтов
    const MAPPING: bool = false;

    fn literal(&self) -> String;
}

impl EmitRecord for i8
{
    const RUST_TYPE: &'static str = "i8";
    const PER_LINE: usize = 16;

    fn literal(&self) -> String
    {
        self.to_string()
    }
}

impl EmitRecord for DecompositionRecord
{
    const RUST_TYPE: &'static str = "Decomposition";
    const PER_LINE: usize = 5;
    const DEFINITION: Option<&'static str> = Some(DECOMPOSITION_DEFINITION);
    const MAPPING: bool = true;

    fn literal(&self) -> String
    {
        format!("Decomposition::new({}, {}, 0x{:05X})", self.kind(), self.length(), self.data())
    }
}

/// упаковка записи в сгенерированном коде совпадает с DecompositionRecord
const DECOMPOSITION_DEFINITION: &str = "\
/// Decomposition record: 6-bit signed type, 5-bit length, 21-bit data.
/// data is the mapped code point when length == 1,
/// otherwise an offset into DECOMPOSITION_MAPPING.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Decomposition(u32);

impl Decomposition {
    pub const fn new(kind: i8, length: u32, data: u32) -> Self {
        Self((kind as u32 & 0x3F) | (length << 6) | (data << 11))
    }

    pub const fn kind(self) -> i8 {
        ((self.0 << 26) as i32 >> 26) as i8
    }

    pub const fn length(self) -> u32 {
        (self.0 >> 6) & 0x1F
    }

    pub const fn data(self) -> u32 {
        self.0 >> 11
    }
}
";

/// исходный код таблицы: константы значений, размер блока, stage1, stage2,
/// дополнительный массив (для декомпозиции) и функция поиска
pub fn emit<R: EmitRecord>(name: &str, compiled: &Compiled<R>) -> String
{
    let prefix = name.to_uppercase();
    let table = &compiled.table;
    let block_size = table.block_size;

    let mut output = String::new();

    output.push_str(&format!(
        "// This file is automatically generated by `prepare`. DO NOT EDIT!\n\
         //\n\
         // Source: Unicode Character Database, https://www.unicode.org/ucd/\n\
         // Lookup: {prefix}_STAGE2[{prefix}_STAGE1[code / {prefix}_BLOCK_SIZE]][code % {prefix}_BLOCK_SIZE]\n\n"
    ));

    for (symbol, code) in compiled.symbols.iter() {
        output.push_str(&format!("pub const {}_{}: i8 = {};\n", prefix, symbol.to_uppercase(), code));
    }

    output.push_str(&format!("\npub const {}_BLOCK_SIZE: usize = {};\n\n", prefix, block_size));

    if let Some(definition) = R::DEFINITION {
        output.push_str(definition);
        output.push('\n');
    }

    // stage1

    output.push_str(&format!(
        "pub static {}_STAGE1: [{}; {}] = [\n",
        prefix,
        unsigned_type(table.stage1_item_bytes()),
        table.stage1.len()
    ));
    output.push_str(&format_rows(
        table.stage1.iter().map(|index| index.to_string()),
        STAGE1_PER_LINE,
        INDENT,
        |i| Some(format!("U+{:04X}", i * block_size)),
    ));
    output.push_str("];\n\n");

    // stage2

    output.push_str(&format!(
        "pub static {}_STAGE2: [[{}; {}]; {}] = [\n",
        prefix,
        R::RUST_TYPE,
        block_size,
        table.blocks_count()
    ));

    let nested = INDENT.repeat(2);

    for (n, block) in table.blocks().enumerate() {
        output.push_str(&format!("{INDENT}/* block {n} */\n{INDENT}[\n"));
        output.push_str(&format_rows(block.iter().map(R::literal), R::PER_LINE, &nested, |_| None));
        output.push_str(&format!("{INDENT}],\n"));
    }

    output.push_str("];\n\n");

    // дополнительный массив

    if R::MAPPING {
        output.push_str(&format!("pub static {}_MAPPING: [u32; {}] = [\n", prefix, compiled.mapping.len()));
        output.push_str(&format_rows(
            compiled.mapping.iter().map(|code| format!("0x{:04X}", code)),
            MAPPING_PER_LINE,
            INDENT,
            |i| Some(format!("0x{:04X}", i)),
        ));
        output.push_str("];\n\n");
    }

    // поиск

    output.push_str(&format!(
        "/// Value for a code point, code must not exceed U+10FFFF.\n\
         #[inline]\n\
         pub fn {name}(code: u32) -> {record} {{\n\
         {INDENT}let code = code as usize;\n\
         {INDENT}let block = {prefix}_STAGE1[code / {prefix}_BLOCK_SIZE] as usize;\n\
         \n\
         {INDENT}{prefix}_STAGE2[block][code % {prefix}_BLOCK_SIZE]\n\
         }}\n",
        record = R::RUST_TYPE,
    ));

    output
}
