//! Zone filter.

use crate::normalize::upper;

/// Filter argument that disables zone filtering.
pub const ZONE_ALL: &str = "all";

/// Which zones survive extraction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ZoneFilter {
    /// Keep every zone.
    #[default]
    All,
    /// Keep only this zone, already normalized with [`upper`].
    Only(String),
}

impl ZoneFilter {
    /// Build a filter from the raw command-line value.
    ///
    /// Only the exact sentinel `"all"` disables filtering, anything else is
    /// compared against the normalized zone of each record.
    pub fn new(raw: &str) -> Self {
        if raw == ZONE_ALL {
            ZoneFilter::All
        } else {
            ZoneFilter::Only(upper(raw))
        }
    }

    /// `zone` must already be normalized.
    pub fn matches(&self, zone: &str) -> bool {
        match self {
            ZoneFilter::All => true,
            ZoneFilter::Only(wanted) => wanted == zone,
        }
    }
}

impl std::fmt::Display for ZoneFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ZoneFilter::All => write!(f, "{ZONE_ALL}"),
            ZoneFilter::Only(zone) => write!(f, "{zone}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_passes_everything() {
        let filter = ZoneFilter::new("all");
        assert_eq!(filter, ZoneFilter::All);
        for zone in ["LAGHI", "PIANURA", "", "ALL"] {
            assert!(filter.matches(zone), "{zone} should pass");
        }
    }

    #[test]
    fn test_specific_zone_is_normalized() {
        let filter = ZoneFilter::new("  laghi ");
        assert_eq!(filter, ZoneFilter::Only("LAGHI".to_string()));
        assert!(filter.matches("LAGHI"));
        assert!(!filter.matches("PIANURA"));
        assert!(!filter.matches("LAGHI NORD"));
        assert!(!filter.matches(""));
    }

    #[test]
    fn test_accented_zone() {
        let filter = ZoneFilter::new("città");
        assert!(filter.matches("CITTÀ"));
    }

    #[test]
    fn test_sentinel_is_exact() {
        assert_eq!(ZoneFilter::new("ALL"), ZoneFilter::Only("ALL".to_string()));
        assert_eq!(ZoneFilter::new("all").to_string(), "all");
        assert_eq!(ZoneFilter::new("Nord").to_string(), "NORD");
    }
}
