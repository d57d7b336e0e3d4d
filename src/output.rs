//! Output formatting and persistence for grade records.
//!
//! Supports pretty-printing, JSON serialization, and the two append-only
//! sinks: the tab-delimited results log and user-chosen CSV files. Both
//! sinks write one complete line per record in the same field order:
//! name, each score column, final score.

use anyhow::Result;
use tracing::debug;

use crate::record::GradeRecord;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Logs a grade record using Rust's debug pretty-print format.
pub fn print_pretty(record: &GradeRecord) {
    debug!("{:#?}", record);
}

/// Prints a grade record as pretty-printed JSON on stdout.
pub fn print_json(record: &GradeRecord) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}

/// Field sequence written to both sinks: name, each score column, final.
fn fields(record: &GradeRecord) -> Vec<String> {
    let mut out = Vec::with_capacity(record.scores.len() + 2);
    out.push(record.name.clone());
    out.extend(record.scores.iter().map(|s| s.to_string()));
    out.push(record.final_score.to_string());
    out
}

/// Serializes a record as one tab-delimited results-log line.
///
/// Fields are written bare with no quoting discipline, so a name containing
/// a tab corrupts its row. This is the log's historical format.
pub fn tab_line(record: &GradeRecord) -> String {
    format!("{}\n", fields(record).join("\t"))
}

/// Serializes a record as one comma-delimited CSV line.
///
/// Fields are quoted only when they contain a comma, quote, or newline, so
/// ordinary rows stay bare while a name like `Lee, Sam` still round-trips.
pub fn comma_line(record: &GradeRecord) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut writer = WriterBuilder::new().from_writer(&mut buf);
        writer.write_record(fields(record))?;
        writer.flush()?;
    }
    Ok(String::from_utf8(buf)?)
}

/// Appends a record to the tab-delimited results log.
///
/// Creates the file if it does not already exist. The file is opened,
/// written, and closed within this call.
pub fn append_tab_record(path: &str, record: &GradeRecord) -> Result<()> {
    debug!(path, "Appending results-log record");

    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    file.write_all(tab_line(record).as_bytes())?;

    Ok(())
}

/// Appends a record as a CSV row to a user-chosen file.
///
/// Creates the file if it does not already exist and never writes a header
/// row; the target is typically an existing spreadsheet export with its own
/// shape.
pub fn append_comma_record(path: &str, record: &GradeRecord) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    file.write_all(comma_line(record)?.as_bytes())?;

    Ok(())
}
