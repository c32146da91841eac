//! CSV reading and writing utilities for the accounts file format.
//!
//! The format is literal comma separated text: no quoting on either side,
//! and data lines may have any number of fields.

use serde::Serialize;
use std::io::{Read, Write};

/// Creates an iterator over the raw records of a reader.
/// The header is returned as an ordinary record; blank lines are skipped.
pub fn read_records<R>(reader: R) -> csv::StringRecordsIntoIter<R>
where
    R: Read,
{
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader)
        .into_records()
}

/// Splits a record into fields the way the file is meant to be read:
/// the line as a whole is trimmed, and trailing empty fields are dropped.
pub fn record_fields(record: &csv::StringRecord) -> Vec<&str> {
    let mut fields: Vec<&str> = record.iter().collect();
    if let Some(first) = fields.first_mut() {
        *first = first.trim_start();
    }
    if let Some(last) = fields.last_mut() {
        *last = last.trim_end();
    }
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

/// Writes an iterator of records to a CSV writer, header first.
/// Each record must implement Serialize. Fields are never quoted.
pub fn write_csv<T, W>(
    writer: W,
    records: impl Iterator<Item = T>,
    header: &[&str],
) -> csv::Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    wtr.write_record(header)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
