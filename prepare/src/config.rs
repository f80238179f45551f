use std::path::{Path, PathBuf};

use clap::Parser;

use crate::generator::Generator;

/// каталог с исходными данными по умолчанию
pub const DEFAULT_DATA_DIR: &str = "data";

pub const UNICODE_DATA: &str = "ucd/UnicodeData.txt";
pub const PROP_LIST: &str = "ucd/PropList.txt";
pub const DERIVED_CORE_PROPERTIES: &str = "ucd/DerivedCoreProperties.txt";
pub const EAST_ASIAN_WIDTH: &str = "ucd/EastAsianWidth.txt";
pub const WORD_BREAK_PROPERTY: &str = "ucd/auxiliary/WordBreakProperty.txt";
pub const EMOJI_DATA: &str = "emoji/emoji-data.txt";

/// аргументы командной строки
#[derive(Parser, Debug)]
#[command(name = "prepare")]
#[command(about = "Генерация двухуровневых таблиц поиска свойств Unicode")]
pub struct Args
{
    /// какую таблицу сгенерировать
    #[arg(value_enum)]
    pub generator: Generator,

    /// каталог с файлами UCD (ucd/...) и эмодзи (emoji/...)
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data: PathBuf,

    /// куда записать таблицы, по умолчанию - stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// параметры одного запуска генерации
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config
{
    pub generator: Generator,
    pub data: PathBuf,
    pub output: Option<PathBuf>,
}

impl Config
{
    pub fn new(generator: Generator, data: impl Into<PathBuf>) -> Self
    {
        Self {
            generator,
            data: data.into(),
            output: None,
        }
    }

    /// путь к файлу исходных данных относительно каталога данных
    pub fn path(&self, relative: &str) -> PathBuf
    {
        self.data.join(relative)
    }

    pub fn data_dir(&self) -> &Path
    {
        &self.data
    }
}

impl From<Args> for Config
{
    fn from(args: Args) -> Self
    {
        Self {
            generator: args.generator,
            data: args.data,
            output: args.output,
        }
    }
}
