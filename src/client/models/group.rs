//! Group models

use serde::Deserialize;

/// Group assignment entry from `/api/v1/apps/{appId}/groups`.
///
/// The assignment listing carries no group name; resolve it with a detail lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct AppGroupAssignment {
    /// Group ID
    pub id: String,
}

/// Group detail from `/api/v1/groups/{groupId}`.
///
/// The group ID is taken from the assignment, so the detail body may omit it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub profile: Option<GroupProfile>,
}

/// Group profile attributes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupProfile {
    #[serde(default)]
    pub name: Option<String>,
}

impl Group {
    /// Display name from the group profile, if present
    pub fn name(&self) -> Option<&str> {
        self.profile.as_ref().and_then(|p| p.name.as_deref())
    }
}
