//! Okta API client implementation

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::pagination::next_link;
use super::{AppGroupAssignment, Application, Group, OktaApi, User};
use crate::config::Config;
use crate::error::{ApiError, Result};

/// Okta API client authenticating with a static `SSWS` token
pub struct OktaClient {
    http: HttpClient,
    base_url: String,
    api_token: String,
}

impl OktaClient {
    /// Create a new client for the org described by `config`
    pub fn new(config: &Config) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(concat!("okta-access-review/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_token: config.api_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue one authenticated GET, returning the decoded body and the next-page link
    async fn get_page<T: DeserializeOwned>(&self, url: &str) -> Result<(T, Option<String>)> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("SSWS {}", self.api_token))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, url, response).await.into());
        }

        let next = next_link(response.headers());
        let body = response.json::<T>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", url, e))
        })?;

        Ok((body, next))
    }

    /// Follow `next` links from `url` until the last page, concatenating every page.
    ///
    /// The first failing page aborts the whole fetch; nothing is returned partially.
    async fn get_all<T: DeserializeOwned + Send>(&self, url: String) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut pages = 0usize;
        let mut next = Some(url);

        while let Some(url) = next {
            let (page, link): (Vec<T>, _) = self.get_page(&url).await?;
            pages += 1;
            debug!("Page {} of {} returned {} records", pages, url, page.len());
            items.extend(page);
            next = link;
        }

        debug!("Fetched {} records in {} page(s)", items.len(), pages);
        Ok(items)
    }
}

/// Map a non-success response onto an API error
async fn status_error(status: StatusCode, url: &str, response: Response) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(url.to_string()),
        _ => {
            let message = response
                .text()
                .await
                .ok()
                .filter(|body| !body.trim().is_empty())
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unexpected status")
                        .to_string()
                });
            ApiError::Status {
                status: status.as_u16(),
                message,
            }
        }
    }
}

#[async_trait]
impl OktaApi for OktaClient {
    async fn list_apps(&self) -> Result<Vec<Application>> {
        self.get_all(self.url("/api/v1/apps")).await
    }

    async fn list_app_groups(&self, app_id: &str) -> Result<Vec<AppGroupAssignment>> {
        self.get_all(self.url(&format!("/api/v1/apps/{}/groups", app_id)))
            .await
    }

    async fn get_group(&self, group_id: &str) -> Result<Group> {
        let url = self.url(&format!("/api/v1/groups/{}", group_id));
        let (group, _) = self.get_page(&url).await?;
        Ok(group)
    }

    async fn list_group_users(&self, group_id: &str) -> Result<Vec<User>> {
        self.get_all(self.url(&format!("/api/v1/groups/{}/users", group_id)))
            .await
    }
}
