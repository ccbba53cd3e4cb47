//! Post-export summary table

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::report::UNKNOWN_APP;
use crate::export::ApplicationSummary;

/// Per-application summary line
#[derive(Debug, Clone, Tabled)]
pub struct SummaryRow {
    #[tabled(rename = "APPLICATION")]
    pub application: String,

    #[tabled(rename = "APP ID")]
    pub app_id: String,

    #[tabled(rename = "GROUPS")]
    pub groups: usize,

    #[tabled(rename = "ROWS")]
    pub rows: usize,
}

impl From<&ApplicationSummary> for SummaryRow {
    fn from(summary: &ApplicationSummary) -> Self {
        Self {
            application: summary
                .app_label
                .clone()
                .unwrap_or_else(|| UNKNOWN_APP.to_string()),
            app_id: summary.app_id.clone(),
            groups: summary.groups,
            rows: summary.memberships,
        }
    }
}

/// Format rows as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No applications found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}
