// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::dispatcher::Dispatcher;
use crate::services::github::GithubClient;
use crate::services::openai::OpenAiClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Wire the real GitHub and OpenAI clients around one shared HTTP client.
    pub fn from_config(config: AppConfig) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().build()?;
        let github = GithubClient::new(http.clone(), config.github_api_url.clone());
        let openai = OpenAiClient::new(http, config.openai_base_url.clone());
        Ok(Self::new(Dispatcher::new(
            config,
            Arc::new(github),
            Arc::new(openai),
        )))
    }
}
