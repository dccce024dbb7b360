//! Command-line argument definitions.

use crate::error::TemplateError;
use crate::models::{ColumnLayout, ParserConfig};
use crate::output::{TemplateOptions, DEFAULT_OUTPUT_PATH};
use crate::processing::{SortPolicy, ZONE_ALL};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// PingView Template Generator
///
/// Turns a vehicle CSV export into a PingView bulk-add template.
#[derive(Parser, Debug)]
#[command(name = "pingview-template", version, about, long_about = None)]
pub struct Args {
    /// CSV file to convert; its first row is treated as a header
    pub path: PathBuf,

    /// Zone to keep (case-insensitive), or "all"
    #[arg(default_value = ZONE_ALL)]
    pub zone: String,

    /// Template file to write; parent directories are created
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Block order in the template
    #[arg(long, value_enum, default_value = "zone-call-sign")]
    pub sort: SortArg,

    /// Leave the zone off the group header lines
    #[arg(long)]
    pub no_zone_suffix: bool,

    /// JSON file mapping fields to CSV columns
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Debug logging when no log4rs.yml is present
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command-line names for [`SortPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// By zone, then by call sign
    ZoneCallSign,
    /// By call sign only
    CallSign,
}

impl From<SortArg> for SortPolicy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::ZoneCallSign => SortPolicy::ZoneCallSign,
            SortArg::CallSign => SortPolicy::CallSign,
        }
    }
}

impl Args {
    pub fn parser_config(&self) -> Result<ParserConfig, TemplateError> {
        let layout = match &self.layout {
            Some(path) => ColumnLayout::from_json_file(path)?,
            None => ColumnLayout::default(),
        };
        Ok(ParserConfig::new(&self.path, &self.zone).with_layout(layout))
    }

    pub fn template_options(&self) -> TemplateOptions {
        TemplateOptions {
            sort: self.sort.into(),
            zone_suffix: !self.no_zone_suffix,
        }
    }
}
