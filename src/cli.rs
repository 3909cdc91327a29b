use std::path::PathBuf;

use clap::Parser;

/// Default input path used when `--input` is omitted, matching the layout of
/// the short-URL service repository this tool seeds data for.
pub const DEFAULT_INPUT: &str = "backend/jmeter/testdata/test_urls.csv";
/// Default output path used when `--output` is omitted.
pub const DEFAULT_OUTPUT: &str = "backend/db/populate_test_data.sql";

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Generate a short_urls SQL seed script from CSV test data",
    long_about = None
)]
pub struct Cli {
    /// Input CSV file with id,url,short_code,created_at,update_at,access_count columns
    #[arg(short = 'i', long = "input", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
    /// Destination SQL script (overwritten if it exists)
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}
