//! Parser configuration.

use super::ColumnLayout;
use crate::processing::ZoneFilter;
use std::path::PathBuf;

/// What to read and which rows to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// CSV file to read.
    pub path: PathBuf,
    /// Zone selection, see [`ZoneFilter`].
    pub zone: ZoneFilter,
    /// Column positions of the input.
    pub layout: ColumnLayout,
}

impl ParserConfig {
    /// Config with the built-in column layout.
    ///
    /// `zone` is the raw filter argument; `"all"` keeps every zone.
    pub fn new(path: impl Into<PathBuf>, zone: &str) -> Self {
        ParserConfig {
            path: path.into(),
            zone: ZoneFilter::new(zone),
            layout: ColumnLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: ColumnLayout) -> Self {
        self.layout = layout;
        self
    }
}
