//! Okta API data models
//!
//! Only the fields the access review needs are modelled; everything else in
//! the upstream payloads is ignored.

mod app;
mod group;
mod user;

pub use app::Application;
pub use group::{AppGroupAssignment, Group};
#[cfg(test)]
pub use group::GroupProfile;
pub use user::{User, UserProfile};
