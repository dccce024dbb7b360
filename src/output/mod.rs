//! Output side of the converter.
//!
//! - [`template`] - Template Writer for the PingView bulk-add file
//! - [`terminal`] - banner and warning sink for the console

mod template;
mod terminal;

pub use template::{
    render_block, render_header, write_template, TemplateOptions, WriteSummary,
    DEFAULT_OUTPUT_PATH,
};
pub use terminal::{banner, ConsoleSink, DiagnosticSink, ValidationWarning};
