//! Record Extractor.
//!
//! Reads the vehicle export, normalizes the fields named by the
//! [`ColumnLayout`], and keeps the rows that pass the zone filter and carry
//! an identifier.

use crate::error::{DecodeError, TemplateError};
use crate::models::{ColumnLayout, ParserConfig, Record};
use crate::normalize::{title_case, upper};
use crate::processing::ZoneFilter;
use csv::{ReaderBuilder, StringRecord};
use itertools::Itertools;
use std::fs::File;
use std::io::{BufReader, Read};

/// Extract the records of the file named in `config`, in file order.
///
/// # Returns
/// * `Ok(Vec<Record>)` - normalized rows that passed both filters
/// * `Err(TemplateError::Io)` - the file cannot be opened or read
/// * `Err(TemplateError::Format | TemplateError::Quoting)` - the file is
///   not well-formed CSV
pub fn extract(config: &ParserConfig) -> Result<Vec<Record>, TemplateError> {
    log::info!(
        "#Start extract() file={} zone={}",
        config.path.display(),
        config.zone
    );
    let file = File::open(&config.path).map_err(|e| TemplateError::io(&config.path, e))?;

    let records = extract_from_reader(BufReader::new(file), &config.zone, &config.layout)
        .map_err(|e| TemplateError::from_decode(&config.path, e))?;

    if records.is_empty() {
        log::warn!(
            "No records with an identifier in {} for zone {}",
            config.path.display(),
            config.zone
        );
    } else {
        log::info!(
            "# Extracted {} records, zones: {}",
            records.len(),
            zones(&records)
        );
    }
    Ok(records)
}

/// Distinct zones of `records`, sorted and comma separated.
fn zones(records: &[Record]) -> String {
    records
        .iter()
        .map(|r| r.zone.as_str())
        .unique()
        .sorted()
        .join(", ")
}

/// Extract records from any CSV source. The first row is always skipped.
///
/// Rows may have any number of fields; a column missing from a short row
/// reads as empty. The whole input is read and its quoting checked before
/// any row is decoded.
pub fn extract_from_reader<R: Read>(
    mut reader: R,
    zone: &ZoneFilter,
    layout: &ColumnLayout,
) -> Result<Vec<Record>, DecodeError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    check_quoting(&data)?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data.as_slice());

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let record = record_from_row(&row, layout);

        if !zone.matches(&record.zone) {
            log::trace!("line {line}: zone '{}' filtered out", record.zone);
            continue;
        }
        if record.identifier.is_empty() {
            log::debug!(
                "line {line}: skipping {} {} without identifier",
                record.call_sign,
                record.city
            );
            continue;
        }
        records.push(record);
    }

    Ok(records)
}

#[derive(Clone, Copy)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Reject quoting that RFC 4180 forbids but the `csv` crate reads anyway:
/// a quote inside an unquoted field, text after a closing quote, and a
/// quoted field still open at end of input.
fn check_quoting(data: &[u8]) -> Result<(), DecodeError> {
    use QuoteState::*;

    let mut state = FieldStart;
    let mut line: u64 = 1;
    let mut opened_at: u64 = 1;
    for &byte in data {
        state = match (state, byte) {
            (Quoted, b'"') => QuoteInQuoted,
            (Quoted, _) => Quoted,
            (FieldStart, b'"') => {
                opened_at = line;
                Quoted
            }
            (Unquoted, b'"') => {
                return Err(DecodeError::Quoting {
                    line,
                    reason: "bare \" in unquoted field",
                })
            }
            (QuoteInQuoted, b'"') => Quoted,
            (_, b',' | b'\n' | b'\r') => FieldStart,
            (QuoteInQuoted, _) => {
                return Err(DecodeError::Quoting {
                    line,
                    reason: "extraneous character after closing quote",
                })
            }
            (FieldStart | Unquoted, _) => Unquoted,
        };
        if byte == b'\n' {
            line += 1;
        }
    }

    match state {
        Quoted => Err(DecodeError::Quoting {
            line: opened_at,
            reason: "unterminated quoted field",
        }),
        _ => Ok(()),
    }
}

fn record_from_row(row: &StringRecord, layout: &ColumnLayout) -> Record {
    let field = |column: usize| row.get(column).unwrap_or_default();

    Record {
        zone: upper(field(layout.zone)),
        call_sign: upper(field(layout.call_sign)),
        vehicle_type: field(layout.vehicle_type).trim().to_string(),
        city: upper(field(layout.city)),
        address: title_case(field(layout.address)),
        identifier: field(layout.identifier).trim().to_string(),
        network: field(layout.network).trim().to_string(),
    }
}
