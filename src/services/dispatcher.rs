// src/services/dispatcher.rs
use std::sync::Arc;

use crate::{
    config::AppConfig,
    message::Envelope,
    services::{
        classifier::{Classification, classify},
        github::{NewRepo, RepoHost},
        openai::{ChatCompletion, ChatMessage, CompletionRequest, Role},
    },
};

pub const EMPTY_INPUT: &str = "Please provide input.";
pub const GITHUB_NOT_CONFIGURED: &str =
    "GitHub agent not configured. Set GITHUB_TOKEN and GITHUB_USERNAME.";
pub const UNKNOWN_COMMAND: &str = "Unknown GitHub command. Try: 'github create repo <name>'";
pub const OPENAI_NOT_CONFIGURED: &str = "OPENAI_API_KEY not set.";
pub const NO_MODEL_RESPONSE: &str = "⚠️ No response from model.";
pub const ROUTE_ERROR: &str = "⚠️ Error in API route.";

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const TEMPERATURE: f64 = 0.4;

/// Performs the single external call a classification implies and turns
/// every outcome into an [`Envelope`].
pub struct Dispatcher {
    config: AppConfig,
    repo_host: Arc<dyn RepoHost>,
    completions: Arc<dyn ChatCompletion>,
}

impl Dispatcher {
    pub fn new(
        config: AppConfig,
        repo_host: Arc<dyn RepoHost>,
        completions: Arc<dyn ChatCompletion>,
    ) -> Self {
        Self {
            config,
            repo_host,
            completions,
        }
    }

    /// Classify `raw` and dispatch it.
    pub async fn handle(&self, raw: &str) -> Envelope {
        self.dispatch(classify(raw)).await
    }

    pub async fn dispatch(&self, classification: Classification) -> Envelope {
        match classification {
            Classification::Empty => Envelope::bad_request(EMPTY_INPUT),
            Classification::RepoCreate { name } => self.create_repo(name).await,
            Classification::UnknownCommand => Envelope::bad_request(UNKNOWN_COMMAND),
            Classification::Chat { text } => self.chat(text).await,
        }
    }

    async fn create_repo(&self, name: String) -> Envelope {
        let creds = match self.config.github() {
            Ok(creds) => creds,
            Err(e) => {
                tracing::warn!(error = %e, "repository command without GitHub credentials");
                return Envelope::bad_request(GITHUB_NOT_CONFIGURED);
            }
        };

        let repo = NewRepo::private(name);
        tracing::info!(repo = %repo.name, owner = creds.username, "creating repository");

        match self.repo_host.create_repo(&creds, &repo).await {
            Ok(url) => Envelope::ok(format!("✅ Repo created: {url}")),
            Err(e) => {
                tracing::error!(error = %e, repo = %repo.name, "repository creation failed");
                Envelope::internal(format!("❌ Failed: {}", e.reason()))
            }
        }
    }

    async fn chat(&self, text: String) -> Envelope {
        let creds = match self.config.openai() {
            Ok(creds) => creds,
            Err(e) => {
                tracing::warn!(error = %e, "chat message without OpenAI credentials");
                return Envelope::internal(OPENAI_NOT_CONFIGURED);
            }
        };

        let request = CompletionRequest {
            model: self.config.openai_model.clone(),
            temperature: TEMPERATURE,
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: Role::User,
                    content: text,
                },
            ],
        };

        match self.completions.complete(&creds, &request).await {
            Ok(reply) => {
                let reply = reply.trim();
                if reply.is_empty() {
                    Envelope::ok(NO_MODEL_RESPONSE)
                } else {
                    Envelope::ok(reply)
                }
            }
            Err(e) => {
                tracing::error!(error = %e, model = %request.model, "chat completion failed");
                Envelope::internal(ROUTE_ERROR)
            }
        }
    }
}
