//! Application models

use serde::Deserialize;

/// Application registered in the Okta org (`/api/v1/apps`)
#[derive(Debug, Clone, Deserialize)]
pub struct Application {
    /// Application ID
    pub id: String,

    /// Display label (optional)
    #[serde(default)]
    pub label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_ignores_unknown_fields() {
        let app: Application = serde_json::from_str(
            r#"{"id":"0oa1","name":"payroll_app","label":"Payroll","status":"ACTIVE","signOnMode":"SAML_2_0"}"#,
        )
        .unwrap();

        assert_eq!(app.id, "0oa1");
        assert_eq!(app.label.as_deref(), Some("Payroll"));
    }

    #[test]
    fn test_application_without_label() {
        let app: Application = serde_json::from_str(r#"{"id":"0oa2"}"#).unwrap();
        assert!(app.label.is_none());
    }
}
