//! CSV column layout.
//!
//! Exports feeding this tool have moved columns around between revisions, so
//! the position of every field is data, not code. The built-in layout is
//! version 1:
//!
//! | column | field        |
//! |--------|--------------|
//! | 0      | zone         |
//! | 1      | call sign    |
//! | 2      | vehicle type |
//! | 3      | (unused)     |
//! | 4      | address      |
//! | 5      | city         |
//! | 6      | identifier   |
//! | 7      | network      |

use crate::error::TemplateError;
use itertools::Itertools;
use serde::Deserialize;
use std::path::Path;

/// Layout version understood by this build.
pub const LAYOUT_VERSION: u32 = 1;

fn default_version() -> u32 {
    LAYOUT_VERSION
}

/// Zero-based column index for each field of a [`super::Record`].
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ColumnLayout {
    #[serde(default = "default_version")]
    pub version: u32,
    pub zone: usize,
    pub call_sign: usize,
    pub vehicle_type: usize,
    pub address: usize,
    pub city: usize,
    pub identifier: usize,
    pub network: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        ColumnLayout {
            version: LAYOUT_VERSION,
            zone: 0,
            call_sign: 1,
            vehicle_type: 2,
            address: 4,
            city: 5,
            identifier: 6,
            network: 7,
        }
    }
}

impl ColumnLayout {
    /// Parse a layout from JSON, e.g. `{"zone": 0, "call_sign": 1, ...}`.
    pub fn from_json(json: &str) -> Result<ColumnLayout, String> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        let layout: ColumnLayout = serde_path_to_error::deserialize(&mut deserializer)
            .map_err(|e| format!("path={} error={}", e.path(), e.inner()))?;
        layout.validate()?;
        Ok(layout)
    }

    /// Read and parse a JSON layout file.
    pub fn from_json_file(path: &Path) -> Result<ColumnLayout, TemplateError> {
        let json = std::fs::read_to_string(path).map_err(|e| TemplateError::io(path, e))?;
        let layout = ColumnLayout::from_json(&json).map_err(|reason| TemplateError::Layout {
            path: path.to_path_buf(),
            reason,
        })?;
        log::info!("Using column layout from {}: {layout:?}", path.display());
        Ok(layout)
    }

    /// `(field name, column)` pairs in record field order.
    pub fn columns(&self) -> [(&'static str, usize); 7] {
        [
            ("zone", self.zone),
            ("call_sign", self.call_sign),
            ("vehicle_type", self.vehicle_type),
            ("address", self.address),
            ("city", self.city),
            ("identifier", self.identifier),
            ("network", self.network),
        ]
    }

    fn validate(&self) -> Result<(), String> {
        if self.version != LAYOUT_VERSION {
            return Err(format!(
                "unsupported layout version {} (expected {LAYOUT_VERSION})",
                self.version
            ));
        }
        let shared = self
            .columns()
            .into_iter()
            .into_group_map_by(|(_, column)| *column)
            .into_iter()
            .filter(|(_, fields)| fields.len() > 1)
            .sorted_by_key(|(column, _)| *column)
            .map(|(column, fields)| {
                format!(
                    "column {column} used by {}",
                    fields.iter().map(|(name, _)| name).join(" and ")
                )
            })
            .join(", ");
        if !shared.is_empty() {
            return Err(shared);
        }
        Ok(())
    }
}
