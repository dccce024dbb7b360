// cargo watch -x 'fmt' -x 'run -- input.csv'

//! Convert a vehicle CSV export into a PingView bulk-add template.
//!
//! [`input::extract`] reads and normalizes the rows, [`output::write_template`]
//! sorts them and writes one block per vehicle.

pub mod cli;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod normalize;
pub mod output;
pub mod processing;

use models::ParserConfig;
use output::{DiagnosticSink, TemplateOptions, WriteSummary};
use std::path::Path;

pub use error::TemplateError;

/// Extract the records named by `config` and write the template to `output`.
///
/// The parent directory of `output` must already exist. Nothing is written
/// when extraction fails.
pub fn run(
    config: &ParserConfig,
    options: &TemplateOptions,
    output: &Path,
    sink: &mut dyn DiagnosticSink,
) -> Result<WriteSummary, TemplateError> {
    let records = input::extract(config)?;
    output::write_template(records, output, options, sink)
}
