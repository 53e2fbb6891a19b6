// src/services/github.rs
use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, USER_AGENT},
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::{config::GithubCredentials, error::ServiceError};

pub const REPO_DESCRIPTION: &str = "Created by MCP UI on Vercel";

const API_VERSION: &str = "2022-11-28";
const CLIENT_AGENT: &str = concat!("mcp-chat-backend/", env!("CARGO_PKG_VERSION"));

/// Body of a "create a repository for the authenticated user" call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRepo {
    pub name: String,
    pub private: bool,
    pub auto_init: bool,
    pub description: String,
}

impl NewRepo {
    /// A private repository initialized with a README.
    pub fn private(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            private: true,
            auto_init: true,
            description: REPO_DESCRIPTION.to_string(),
        }
    }
}

/// A source-hosting platform that can create repositories.
/// Returns the browser URL of the new repository.
#[async_trait]
pub trait RepoHost: Send + Sync {
    async fn create_repo(
        &self,
        creds: &GithubCredentials<'_>,
        repo: &NewRepo,
    ) -> Result<String, ServiceError>;
}

#[derive(Deserialize)]
struct CreatedRepo {
    html_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    base_url: String,
}

impl GithubClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RepoHost for GithubClient {
    async fn create_repo(
        &self,
        creds: &GithubCredentials<'_>,
        repo: &NewRepo,
    ) -> Result<String, ServiceError> {
        let url = format!("{}/user/repos", self.base_url.trim_end_matches('/'));

        let response = self
            .http
            .post(&url)
            .bearer_auth(creds.token.expose_secret())
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .header(USER_AGENT, CLIENT_AGENT)
            .json(repo)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ServiceError::from_response(status.as_u16(), body));
        }

        let created: CreatedRepo = serde_json::from_str(&body)?;
        created
            .html_url
            .ok_or_else(|| ServiceError::Decode("repository response has no html_url".to_string()))
    }
}
