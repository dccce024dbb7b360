//! Template Writer for the PingView bulk-add format.
//!
//! Every record becomes one block:
//!
//! ```text
//! Group: <call_sign> <city> <vehicle_type> - TGU: <identifier> - <address> - <zone>
//! <base>.1 GATEWAY
//! <base>.141 VOIP
//! <base>.10 PC
//!
//! ```

use super::terminal::{DiagnosticSink, ValidationWarning};
use crate::error::TemplateError;
use crate::models::{subnet_base, Record, PLACEHOLDER_BASE};
use crate::processing::{sort_records, SortPolicy};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Where the CLI writes the template unless told otherwise.
pub const DEFAULT_OUTPUT_PATH: &str = "out/template/pingview_template.txt";

/// Host suffixes and labels emitted under each group header.
const HOSTS: [(u8, &str); 3] = [(1, "GATEWAY"), (141, "VOIP"), (10, "PC")];

/// How the template is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateOptions {
    pub sort: SortPolicy,
    /// Append ` - <zone>` to every group header.
    pub zone_suffix: bool,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        TemplateOptions {
            sort: SortPolicy::ZoneCallSign,
            zone_suffix: true,
        }
    }
}

/// Outcome of [`write_template`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    /// Blocks written.
    pub written: usize,
    /// Blocks written with the placeholder base.
    pub warnings: usize,
}

/// Group header line, without line terminator.
pub fn render_header(record: &Record, zone_suffix: bool) -> String {
    let mut header = format!(
        "Group: {} {} {} - TGU: {} - {}",
        record.call_sign, record.city, record.vehicle_type, record.identifier, record.address
    );
    if zone_suffix {
        header.push_str(" - ");
        header.push_str(&record.zone);
    }
    header
}

/// Full block for one record, blank separator line included.
pub fn render_block(record: &Record, base: &str, zone_suffix: bool) -> String {
    let mut block = render_header(record, zone_suffix);
    block.push('\n');
    for (host, label) in HOSTS {
        block.push_str(&format!("{base}.{host} {label}\n"));
    }
    block.push('\n');
    block
}

/// Sort `records` and write one block per record to `path`.
///
/// The file is created or truncated. Each block is synced to disk before the
/// next one is written, so a failure leaves only complete blocks behind.
/// Records without a valid IPv4 network get [`PLACEHOLDER_BASE`] and a
/// warning on `sink`.
///
/// # Returns
/// * `Ok(WriteSummary)` - all blocks written
/// * `Err(TemplateError::Io)` - create, write or sync failed
pub fn write_template(
    mut records: Vec<Record>,
    path: &Path,
    options: &TemplateOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<WriteSummary, TemplateError> {
    log::info!(
        "#Start write_template() {} records to {} sort={:?}",
        records.len(),
        path.display(),
        options.sort
    );
    let mut file = File::create(path).map_err(|e| TemplateError::io(path, e))?;

    sort_records(&mut records, options.sort);

    let mut summary = WriteSummary::default();
    for record in &records {
        let base = match subnet_base(&record.network) {
            Some(base) => base,
            None => {
                sink.warn(ValidationWarning::invalid_network(record));
                summary.warnings += 1;
                PLACEHOLDER_BASE.to_string()
            }
        };

        let block = render_block(record, &base, options.zone_suffix);
        file.write_all(block.as_bytes())
            .and_then(|_| file.sync_all())
            .map_err(|e| TemplateError::io(path, e))?;
        summary.written += 1;
    }

    log::info!(
        "# Wrote {} blocks, {} with placeholder base",
        summary.written,
        summary.warnings
    );
    Ok(summary)
}
