//! Stable ordering of records before they are written.
//!
//! Comparison is plain byte order on the normalized strings, not locale
//! collation.

use crate::models::Record;
use std::cmp::Ordering;

/// Record field usable as a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Zone,
    CallSign,
}

impl SortKey {
    pub fn get(self, record: &Record) -> &str {
        match self {
            SortKey::Zone => &record.zone,
            SortKey::CallSign => &record.call_sign,
        }
    }
}

/// Order of the blocks in the template file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortPolicy {
    /// By zone, then by call sign.
    #[default]
    ZoneCallSign,
    /// By call sign only.
    CallSign,
}

impl SortPolicy {
    pub fn keys(self) -> &'static [SortKey] {
        match self {
            SortPolicy::ZoneCallSign => &[SortKey::Zone, SortKey::CallSign],
            SortPolicy::CallSign => &[SortKey::CallSign],
        }
    }

    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        self.keys()
            .iter()
            .map(|key| key.get(a).cmp(key.get(b)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

/// Sort in place; records with equal keys keep their relative order.
pub fn sort_records(records: &mut [Record], policy: SortPolicy) {
    records.sort_by(|a, b| policy.compare(a, b));
}
