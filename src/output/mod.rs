//! Report rendering and output
//!
//! Absent upstream attributes are replaced with fixed placeholder text here,
//! and only here; the traversal keeps them as `None`.

pub mod report;
pub mod table;

pub use report::write_csv;
pub use table::{SummaryRow, format_table};
