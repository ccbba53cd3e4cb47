//! User models

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Group member from `/api/v1/groups/{groupId}/users`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    /// Profile attributes (optional)
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

/// User profile attributes used in the access review.
///
/// Custom attributes such as `division` or `team` are not guaranteed to be
/// strings in every org, so scalars are accepted and rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, deserialize_with = "lenient_string")]
    pub login: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub division: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub department: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub manager: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub team: Option<String>,
}

impl User {
    /// Profile attributes, or an empty profile when Okta omitted it
    pub fn profile(&self) -> UserProfile {
        self.profile.clone().unwrap_or_default()
    }
}

/// Accept any JSON scalar as an optional string; `null` stays absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_profile_fields() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "00u1",
                "status": "ACTIVE",
                "profile": {
                    "login": "jdoe@example.com",
                    "firstName": "Jane",
                    "lastName": "Doe",
                    "title": "Analyst",
                    "department": "Finance",
                    "email": "jdoe@example.com"
                }
            }"#,
        )
        .unwrap();

        let profile = user.profile();
        assert_eq!(profile.login.as_deref(), Some("jdoe@example.com"));
        assert_eq!(profile.first_name.as_deref(), Some("Jane"));
        assert_eq!(profile.last_name.as_deref(), Some("Doe"));
        assert_eq!(profile.title.as_deref(), Some("Analyst"));
        assert_eq!(profile.department.as_deref(), Some("Finance"));
        assert!(profile.division.is_none());
        assert!(profile.manager.is_none());
        assert!(profile.team.is_none());
    }

    #[test]
    fn test_user_without_profile() {
        let user: User = serde_json::from_str(r#"{"id":"00u2"}"#).unwrap();
        assert!(user.profile().login.is_none());
    }

    #[test]
    fn test_null_attributes_are_absent() {
        let user: User =
            serde_json::from_str(r#"{"profile":{"login":"x","manager":null}}"#).unwrap();
        assert!(user.profile().manager.is_none());
    }

    #[test]
    fn test_scalar_attributes_become_text() {
        let user: User =
            serde_json::from_str(r#"{"profile":{"login":"x","team":42,"division":true}}"#)
                .unwrap();

        let profile = user.profile();
        assert_eq!(profile.team.as_deref(), Some("42"));
        assert_eq!(profile.division.as_deref(), Some("true"));
    }
}
