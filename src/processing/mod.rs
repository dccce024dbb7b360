//! Record processing between extraction and output:
//! - [`filter`] - zone selection
//! - [`sort`] - stable ordering of the template blocks

mod filter;
mod sort;

pub use filter::{ZoneFilter, ZONE_ALL};
pub use sort::{sort_records, SortKey, SortPolicy};
