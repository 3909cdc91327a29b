//! The CSV-to-SQL transform.
//!
//! Reads the whole dataset into memory, renders the script text, and only
//! then touches the output path. A failure while opening the input, mapping
//! the header, or reading a row therefore never leaves a partial or
//! truncated script behind.

use anyhow::{Context, Result};
use log::{debug, info};

use crate::{
    cli::Cli,
    io_utils,
    record::{ColumnMap, UrlRecord},
    sql,
};

pub fn execute(args: &Cli) -> Result<()> {
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    info!(
        "Generating SQL seed script from '{}'",
        args.input.display()
    );

    let records = read_records(args, delimiter, encoding)?;
    debug!("Collected {} record(s)", records.len());

    let script = sql::render_script(&records);
    io_utils::write_text_file(&args.output, &script)?;
    info!(
        "Seed script with {} row(s) written to {:?}",
        records.len(),
        args.output
    );
    Ok(())
}

fn read_records(
    args: &Cli,
    delimiter: u8,
    encoding: &'static encoding_rs::Encoding,
) -> Result<Vec<UrlRecord>> {
    let mut reader = io_utils::open_csv_reader_from_path(&args.input, delimiter)?;
    let headers = io_utils::reader_headers(&mut reader, encoding)?;
    let columns = ColumnMap::from_headers(&headers)
        .with_context(|| format!("Validating headers for {:?}", args.input))?;

    let mut records = Vec::new();
    for (row_idx, record) in reader.byte_records().enumerate() {
        // row_idx + 2: 1-based file line, accounting for the header row.
        let record =
            record.with_context(|| format!("Reading row {} in {:?}", row_idx + 2, args.input))?;
        let decoded = io_utils::decode_record(&record, encoding)?;
        let record = columns
            .extract(&decoded, row_idx + 2)
            .with_context(|| format!("Processing row {} in {:?}", row_idx + 2, args.input))?;
        records.push(record);
    }
    Ok(records)
}
