//! подготовка двухуровневых таблиц поиска свойств кодпоинтов: Word_Break, ширина символа, декомпозиция

#[macro_use]
extern crate lazy_static;

pub mod classify;
pub mod config;
pub mod encode;
pub mod generator;
pub mod output;
pub mod symbols;
pub mod tables;

mod error;

pub use config::{Args, Config};
pub use error::PrepareError;
pub use generator::Generator;
