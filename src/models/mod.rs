//! Domain models for the PingView template converter.
//!
//! - [`Record`] - one normalized vehicle row
//! - [`ParserConfig`] - input path, zone filter and column layout
//! - [`ColumnLayout`] - which CSV column holds which field
//! - IPv4 helpers used to derive the host addresses of a record

mod config;
mod ipv4;
mod layout;
mod record;

pub use config::ParserConfig;
pub use ipv4::{is_valid_ipv4, subnet_base, PLACEHOLDER_BASE};
pub use layout::{ColumnLayout, LAYOUT_VERSION};
pub use record::Record;
