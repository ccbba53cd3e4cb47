//! Mock Okta API client for testing
//!
//! Provides an in-memory implementation of [`OktaApi`] so the export
//! traversal can be tested without making real API calls.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::models::GroupProfile;
use super::{AppGroupAssignment, Application, Group, OktaApi, User};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure the org via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockOktaClient::new()
///     .with_app("0oa1", Some("Payroll"))
///     .with_group("0oa1", "00g1", Some("Finance Team"), vec![user]);
///
/// let apps = mock.list_apps().await?;
/// assert_eq!(apps.len(), 1);
/// ```
#[derive(Default)]
pub struct MockOktaClient {
    /// Applications returned from list_apps, in order
    apps: Vec<Application>,
    /// Group assignments per application ID
    app_groups: HashMap<String, Vec<AppGroupAssignment>>,
    /// Group details per group ID
    groups: HashMap<String, Group>,
    /// Members per group ID
    group_users: HashMap<String, Vec<User>>,
    /// Fail with a server error once this many calls have been made
    fail_after: Option<usize>,
    /// Calls made so far, in order (e.g. "get_group:00g1")
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockOktaClient {
    /// Create a new mock client with an empty org.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an application.
    pub fn with_app(mut self, id: &str, label: Option<&str>) -> Self {
        self.apps.push(Application {
            id: id.to_string(),
            label: label.map(str::to_string),
        });
        self
    }

    /// Assign a group to an application, registering its detail and members.
    pub fn with_group(
        mut self,
        app_id: &str,
        group_id: &str,
        name: Option<&str>,
        users: Vec<User>,
    ) -> Self {
        self.app_groups
            .entry(app_id.to_string())
            .or_default()
            .push(AppGroupAssignment {
                id: group_id.to_string(),
            });
        self.groups.insert(
            group_id.to_string(),
            Group {
                profile: Some(GroupProfile {
                    name: name.map(str::to_string),
                }),
            },
        );
        self.group_users.insert(group_id.to_string(), users);
        self
    }

    /// Return a server error for every call after `calls` successful ones.
    pub fn fail_after(mut self, calls: usize) -> Self {
        self.fail_after = Some(calls);
        self
    }

    /// Calls made so far, in order.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    /// Record a call and fail it if the configured threshold was reached.
    async fn record(&self, call: String) -> Result<()> {
        let mut calls = self.calls.lock().await;
        if let Some(threshold) = self.fail_after {
            if calls.len() >= threshold {
                return Err(ApiError::Status {
                    status: 500,
                    message: format!("mock failure on {}", call),
                }
                .into());
            }
        }
        calls.push(call);
        Ok(())
    }
}

#[async_trait]
impl OktaApi for MockOktaClient {
    async fn list_apps(&self) -> Result<Vec<Application>> {
        self.record("list_apps".to_string()).await?;
        Ok(self.apps.clone())
    }

    async fn list_app_groups(&self, app_id: &str) -> Result<Vec<AppGroupAssignment>> {
        self.record(format!("list_app_groups:{}", app_id)).await?;
        Ok(self.app_groups.get(app_id).cloned().unwrap_or_default())
    }

    async fn get_group(&self, group_id: &str) -> Result<Group> {
        self.record(format!("get_group:{}", group_id)).await?;
        self.groups
            .get(group_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("/api/v1/groups/{}", group_id)).into())
    }

    async fn list_group_users(&self, group_id: &str) -> Result<Vec<User>> {
        self.record(format!("list_group_users:{}", group_id)).await?;
        Ok(self.group_users.get(group_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_calls() {
        let mock = MockOktaClient::new()
            .with_app("0oa1", Some("Payroll"))
            .with_group("0oa1", "00g1", Some("Finance"), vec![User::default()]);

        assert_eq!(mock.list_apps().await.unwrap().len(), 1);
        assert_eq!(mock.list_app_groups("0oa1").await.unwrap().len(), 1);
        assert_eq!(mock.get_group("00g1").await.unwrap().name(), Some("Finance"));
        assert_eq!(mock.list_group_users("00g1").await.unwrap().len(), 1);

        assert_eq!(
            mock.calls().await,
            vec![
                "list_apps",
                "list_app_groups:0oa1",
                "get_group:00g1",
                "list_group_users:00g1"
            ]
        );
    }

    #[tokio::test]
    async fn test_mock_fail_after() {
        let mock = MockOktaClient::new().with_app("0oa1", None).fail_after(1);

        assert!(mock.list_apps().await.is_ok());
        assert!(mock.list_app_groups("0oa1").await.is_err());
    }

    #[tokio::test]
    async fn test_mock_unknown_group_not_found() {
        let mock = MockOktaClient::new();
        assert!(mock.get_group("00gX").await.is_err());
    }
}
