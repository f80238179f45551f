use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use unicode_tables_prepare::{Args, Config, PrepareError};

fn main() -> ExitCode
{
    // stdout занят таблицами, журнал пишем в stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = Config::from(Args::parse());

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// текст таблиц полностью собирается в памяти, при ошибке ничего не записывается
fn run(config: &Config) -> Result<(), PrepareError>
{
    let text = config.generator.run(config)?;

    match &config.output {
        Some(path) => {
            fs::write(path, text)?;
            info!(output = %path.display(), "таблицы записаны");
        }
        None => io::stdout().lock().write_all(text.as_bytes())?,
    }

    Ok(())
}
