use clap::ValueEnum;
use tracing::info;
use unicode_tables_source::{read_dense, read_sets, read_unicode_data, UnicodeData};

use crate::classify::charwidth::{self, CharwidthSources};
use crate::classify::decomposition::{self, HANGUL, NONE};
use crate::classify::word_break::{self, WordBreakSources};
use crate::config::*;
use crate::encode::{encode_all, DecompositionEncoder, DecompositionRecord, EnumEncoder, Record};
use crate::output::{self, stats, EmitRecord};
use crate::symbols::SymbolTable;
use crate::tables::{search, DecompositionTable, Optimized, TwoStageTable};
use crate::PrepareError;

/// генерируемая таблица
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Generator
{
    /// Word_Break с доопределенными по категориям значениями
    WordBreak,
    /// ширина символа при отображении
    Charwidth,
    /// декомпозиция (каноническая и совместимости)
    Decomposition,
}

impl Generator
{
    /// имя таблицы в сгенерированном коде
    pub fn name(self) -> &'static str
    {
        match self {
            Generator::WordBreak => "word_break",
            Generator::Charwidth => "charwidth",
            Generator::Decomposition => "decomposition",
        }
    }

    /// прочитать исходные данные, составить таблицу и вернуть ее текст
    pub fn run(self, config: &Config) -> Result<String, PrepareError>
    {
        info!(generator = self.name(), data = %config.data.display(), "генерация таблицы");

        let unicode = read_unicode_data(&config.path(UNICODE_DATA))?;

        let text = match self {
            Generator::WordBreak => {
                let word_break_property = read_dense(&config.path(WORD_BREAK_PROPERTY))?;
                let prop_list = read_sets(&config.path(PROP_LIST))?;
                let derived_core = read_sets(&config.path(DERIVED_CORE_PROPERTIES))?;

                let compiled = word_break(&WordBreakSources {
                    unicode: &unicode,
                    word_break: &word_break_property,
                    prop_list: &prop_list,
                    derived_core: &derived_core,
                })?;

                finish(self, &compiled)
            }
            Generator::Charwidth => {
                let east_asian_width = read_dense(&config.path(EAST_ASIAN_WIDTH))?;
                let emoji = read_sets(&config.path(EMOJI_DATA))?;
                let derived_core = read_sets(&config.path(DERIVED_CORE_PROPERTIES))?;

                let compiled = charwidth(&CharwidthSources {
                    unicode: &unicode,
                    east_asian_width: &east_asian_width,
                    emoji: &emoji,
                    derived_core: &derived_core,
                })?;

                finish(self, &compiled)
            }
            Generator::Decomposition => finish(self, &decomposition(&unicode)?),
        };

        Ok(text)
    }
}

/// таблица, готовая к выводу
#[derive(Debug, Clone)]
pub struct Compiled<R>
{
    pub symbols: SymbolTable,
    /// оценки размера для всех кандидатов и выбранный размер блока
    pub optimized: Optimized,
    pub table: TwoStageTable<R>,
    /// дополнительный массив кодпоинтов, только для декомпозиции
    pub mapping: Vec<u32>,
}

impl Compiled<DecompositionRecord>
{
    /// таблица для поиска декомпозиций в памяти
    pub fn into_table(self) -> Result<DecompositionTable, PrepareError>
    {
        Ok(DecompositionTable {
            canonical: self.symbols.require(NONE)?,
            hangul: self.symbols.require(HANGUL)?,
            table: self.table,
            mapping: self.mapping,
        })
    }
}

/// таблица Word_Break
pub fn word_break(sources: &WordBreakSources) -> Result<Compiled<i8>, PrepareError>
{
    let assignment = word_break::classify(sources)?;
    let symbols = word_break::symbols(sources.word_break)?;

    enumeration(symbols, &assignment)
}

/// таблица ширины символов
pub fn charwidth(sources: &CharwidthSources) -> Result<Compiled<i8>, PrepareError>
{
    let assignment = charwidth::classify(sources);

    enumeration(charwidth::symbols()?, &assignment)
}

/// таблица декомпозиций
pub fn decomposition(unicode: &UnicodeData) -> Result<Compiled<DecompositionRecord>, PrepareError>
{
    let values = decomposition::classify(unicode);
    let symbols = decomposition::symbols()?;

    let mut encoder = DecompositionEncoder::new(&symbols);
    let encoded = encode_all(&mut encoder, &values)?;
    let mapping = encoder.into_mapping();

    compile(symbols, &encoded, mapping)
}

fn enumeration(symbols: SymbolTable, assignment: &[&str]) -> Result<Compiled<i8>, PrepareError>
{
    let encoded = encode_all(&mut EnumEncoder::new(&symbols), assignment)?;

    compile(symbols, &encoded, vec![])
}

/// подобрать размер блока и составить таблицу
fn compile<R: Record>(symbols: SymbolTable, encoded: &[R], mapping: Vec<u32>) -> Result<Compiled<R>, PrepareError>
{
    let optimized = search(encoded)?;
    let table = TwoStageTable::build(encoded, optimized.block_size)?;

    Ok(Compiled {
        symbols,
        optimized,
        table,
        mapping,
    })
}

fn finish<R: EmitRecord>(generator: Generator, compiled: &Compiled<R>) -> String
{
    stats::report(generator.name(), compiled);

    output::emit(generator.name(), compiled)
}
