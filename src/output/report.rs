//! CSV access review report

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::export::AccessRecord;

pub const UNKNOWN_APP: &str = "Unknown App";
pub const UNKNOWN_GROUP: &str = "Unknown Group Name";
pub const UNKNOWN_USER: &str = "Unknown User";
pub const UNKNOWN_FIRST_NAME: &str = "Unknown First Name";
pub const UNKNOWN_LAST_NAME: &str = "Unknown Last Name";
pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_DIVISION: &str = "Unknown Division";
pub const UNKNOWN_DEPARTMENT: &str = "Unknown Department";
pub const UNKNOWN_MANAGER: &str = "Unknown Manager";
pub const UNKNOWN_TEAM: &str = "Unknown Team";

/// One fully rendered report line, fields in column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub application: String,
    pub application_id: String,
    pub group: String,
    pub group_id: String,
    pub user_login: String,
    pub user_full_name: String,
    pub title: String,
    pub division: String,
    pub department: String,
    pub manager: String,
    pub team: String,
}

impl ExportRow {
    /// Column headers in output order
    pub const HEADERS: [&'static str; 11] = [
        "Application",
        "Application ID",
        "Group",
        "Group ID",
        "User Login",
        "User Full Name",
        "Title",
        "Division",
        "Department",
        "Manager",
        "Team",
    ];
}

fn or_unknown(value: Option<&str>, placeholder: &str) -> String {
    value.unwrap_or(placeholder).to_string()
}

impl From<&AccessRecord> for ExportRow {
    fn from(record: &AccessRecord) -> Self {
        let user = &record.user;
        let full_name = format!(
            "{} {}",
            or_unknown(user.first_name.as_deref(), UNKNOWN_FIRST_NAME),
            or_unknown(user.last_name.as_deref(), UNKNOWN_LAST_NAME)
        );

        Self {
            application: or_unknown(record.app_label.as_deref(), UNKNOWN_APP),
            application_id: record.app_id.clone(),
            group: or_unknown(record.group_name.as_deref(), UNKNOWN_GROUP),
            group_id: record.group_id.clone(),
            user_login: or_unknown(user.login.as_deref(), UNKNOWN_USER),
            user_full_name: full_name,
            title: or_unknown(user.title.as_deref(), UNKNOWN_TITLE),
            division: or_unknown(user.division.as_deref(), UNKNOWN_DIVISION),
            department: or_unknown(user.department.as_deref(), UNKNOWN_DEPARTMENT),
            manager: or_unknown(user.manager.as_deref(), UNKNOWN_MANAGER),
            team: or_unknown(user.team.as_deref(), UNKNOWN_TEAM),
        }
    }
}

/// Render records as CSV (header first, records in the given order) into `writer`.
///
/// The header row is written even when there are no records.
pub fn write_records<W: Write>(writer: W, records: &[AccessRecord]) -> Result<()> {
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    out.write_record(ExportRow::HEADERS)?;
    for record in records {
        out.serialize(ExportRow::from(record))?;
    }
    out.flush()?;

    Ok(())
}

/// Write the report to `path`, replacing any existing file.
pub fn write_csv(path: &Path, records: &[AccessRecord]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_records(file, records)?;
    log::debug!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}
