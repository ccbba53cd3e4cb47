//! Access review traversal
//!
//! Walks applications → assigned groups → group members and produces one
//! [`AccessRecord`] per membership. The traversal is strictly sequential:
//! each request completes before the next one is issued, and the first error
//! aborts the whole run.
//!
//! Records keep absent upstream attributes as `None`; placeholder text is only
//! applied when the report is rendered (see [`crate::output`]).

use log::debug;

use crate::client::models::UserProfile;
use crate::client::{Application, Group, OktaApi, User};
use crate::error::Result;

/// One (application, group, user) membership
#[derive(Debug, Clone, PartialEq)]
pub struct AccessRecord {
    pub app_id: String,
    pub app_label: Option<String>,
    pub group_id: String,
    pub group_name: Option<String>,
    pub user: UserProfile,
}

/// Per-application totals gathered during the traversal
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationSummary {
    pub app_id: String,
    pub app_label: Option<String>,
    /// Number of groups assigned to the application
    pub groups: usize,
    /// Number of memberships exported for the application
    pub memberships: usize,
}

/// Result of a complete traversal
#[derive(Debug, Clone, Default)]
pub struct AccessReview {
    /// Memberships in traversal order
    pub records: Vec<AccessRecord>,
    /// Every visited application, including those without groups
    pub applications: Vec<ApplicationSummary>,
}

/// Receives traversal events, e.g. to drive a progress display.
///
/// Callbacks have no influence on the traversal itself.
pub trait ExportObserver {
    fn apps_loaded(&self, _count: usize) {}
    fn app_started(&self, _app: &Application, _groups: usize) {}
    fn group_started(&self, _group_id: &str, _group: &Group, _members: usize) {}
    fn member_exported(&self, _user: &User) {}
    fn group_finished(&self) {}
    fn app_finished(&self) {}
}

/// Observer that ignores every event
pub struct Silent;

impl ExportObserver for Silent {}

/// Collect every (application, group, user) membership visible to the client.
///
/// Order follows the API: applications as listed, groups as assigned, members
/// as listed. Duplicated memberships are kept; nothing is filtered.
pub async fn collect_access_review<C>(
    client: &C,
    observer: &dyn ExportObserver,
) -> Result<AccessReview>
where
    C: OktaApi + ?Sized,
{
    let apps = client.list_apps().await?;
    debug!("Found {} applications", apps.len());
    observer.apps_loaded(apps.len());

    let mut review = AccessReview::default();

    for app in &apps {
        let assignments = client.list_app_groups(&app.id).await?;
        debug!("Application {} has {} groups", app.id, assignments.len());
        observer.app_started(app, assignments.len());

        let mut summary = ApplicationSummary {
            app_id: app.id.clone(),
            app_label: app.label.clone(),
            groups: assignments.len(),
            memberships: 0,
        };

        for assignment in &assignments {
            // The assignment listing has no group name.
            let group = client.get_group(&assignment.id).await?;
            let users = client.list_group_users(&assignment.id).await?;
            debug!("Group {} has {} members", assignment.id, users.len());
            observer.group_started(&assignment.id, &group, users.len());

            for user in &users {
                review.records.push(AccessRecord {
                    app_id: app.id.clone(),
                    app_label: app.label.clone(),
                    group_id: assignment.id.clone(),
                    group_name: group.name().map(str::to_string),
                    user: user.profile(),
                });
                observer.member_exported(user);
            }

            summary.memberships += users.len();
            observer.group_finished();
        }

        review.applications.push(summary);
        observer.app_finished();
    }

    debug!(
        "Collected {} memberships across {} applications",
        review.records.len(),
        review.applications.len()
    );

    Ok(review)
}
