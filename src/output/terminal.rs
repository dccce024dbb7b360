//! Console side channel: the run banner and per-record warnings.

use crate::models::Record;
use colored::Colorize;

/// A record written with the placeholder base because its network address
/// is missing or not IPv4. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub call_sign: String,
    pub city: String,
    pub network: String,
}

impl ValidationWarning {
    pub fn invalid_network(record: &Record) -> Self {
        ValidationWarning {
            call_sign: record.call_sign.clone(),
            city: record.city.clone(),
            network: record.network.clone(),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.network.is_empty() {
            write!(f, "missing network address for {} {}", self.call_sign, self.city)
        } else {
            write!(
                f,
                "invalid IPv4 network '{}' for {} {}",
                self.network, self.call_sign, self.city
            )
        }
    }
}

/// Receives warnings raised while the template is written.
pub trait DiagnosticSink {
    fn warn(&mut self, warning: ValidationWarning);
}

/// Collects warnings in memory.
impl DiagnosticSink for Vec<ValidationWarning> {
    fn warn(&mut self, warning: ValidationWarning) {
        self.push(warning);
    }
}

/// Prints warnings to stderr and logs them.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn warn(&mut self, warning: ValidationWarning) {
        log::warn!("{warning}");
        eprintln!("{} {warning}", "WARNING".on_red());
    }
}

/// Welcome text printed before a run.
pub fn banner(started: &str) -> String {
    let rule = "===================================";
    format!(
        "{title}\n{rule}\n\nUsage: pingview-template <path> [zone]\n\nExample: pingview-template input.csv laghi\n{rule}\nStarted {started}\n",
        title = "PingView Template Generator".bold(),
    )
}
