//! Vehicle record model.

/// One qualifying input row after normalization.
///
/// Built only by [`crate::input::extract`]; `identifier` is never empty and
/// no field carries leading or trailing whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Operating zone, uppercase.
    pub zone: String,
    /// Radio call sign, uppercase.
    pub call_sign: String,
    /// Vehicle type, trimmed only.
    pub vehicle_type: String,
    /// City, uppercase.
    pub city: String,
    /// Street address, title case.
    pub address: String,
    /// TGU identifier of the on-board unit.
    pub identifier: String,
    /// Network address of the unit, expected to be IPv4.
    pub network: String,
}
