//! Okta API client

use async_trait::async_trait;

use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod models;
pub mod okta;
pub mod pagination;

#[cfg(test)]
pub use mock::MockOktaClient;
pub use models::{AppGroupAssignment, Application, Group, User};
pub use okta::OktaClient;

/// Read-only Okta API operations needed for an access review.
///
/// List operations follow pagination to the end and return every record in
/// server order.
#[async_trait]
pub trait OktaApi: Send + Sync {
    /// List all applications (`GET /api/v1/apps`)
    async fn list_apps(&self) -> Result<Vec<Application>>;

    /// List groups assigned to an application (`GET /api/v1/apps/{appId}/groups`)
    async fn list_app_groups(&self, app_id: &str) -> Result<Vec<AppGroupAssignment>>;

    /// Fetch a single group's detail (`GET /api/v1/groups/{groupId}`)
    async fn get_group(&self, group_id: &str) -> Result<Group>;

    /// List the members of a group (`GET /api/v1/groups/{groupId}/users`)
    async fn list_group_users(&self, group_id: &str) -> Result<Vec<User>>;
}
