//! Shared plumbing of the command-line entry points: parameters arrive as a
//! JSON document on stdin, results leave as pretty JSON on stdout, logs go to
//! stderr.

use std::error::Error;
use std::io::{self, Read, Write};

use dotenv::dotenv;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;

/// Load `.env`, start logging on stderr and read the configuration.
pub fn init() -> Result<AppConfig, Box<dyn Error>> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();
    Ok(AppConfig::from_env()?)
}

pub fn parse_input<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

pub fn read_stdin<T: DeserializeOwned>() -> Result<T, Box<dyn Error>> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(parse_input(&input)?)
}

/// Pretty JSON followed by a newline.
pub fn render<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

pub fn write_stdout<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(render(value)?.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
