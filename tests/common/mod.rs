#![allow(dead_code)]

use async_trait::async_trait;
use mcp_chat_backend::config::{AppConfig, GithubCredentials, OpenAiCredentials};
use mcp_chat_backend::error::ServiceError;
use mcp_chat_backend::services::dispatcher::Dispatcher;
use mcp_chat_backend::services::github::{NewRepo, RepoHost};
use mcp_chat_backend::services::openai::{ChatCompletion, CompletionRequest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Base URL of a loopback port with nothing listening on it.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn config(pairs: &[(&str, &str)]) -> AppConfig {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup(|k| vars.get(k).cloned())
}

pub fn full_config() -> AppConfig {
    config(&[
        ("OPENAI_API_KEY", "sk-test"),
        ("GITHUB_TOKEN", "ghp_test"),
        ("GITHUB_USERNAME", "octo"),
    ])
}

pub enum Script {
    Ok(String),
    Api(u16, &'static str),
    Decode(&'static str),
}

impl Script {
    fn run(&self) -> Result<String, ServiceError> {
        match self {
            Script::Ok(text) => Ok(text.clone()),
            Script::Api(status, body) => {
                Err(ServiceError::from_response(*status, body.to_string()))
            }
            Script::Decode(msg) => Err(ServiceError::Decode(msg.to_string())),
        }
    }
}

pub struct FakeRepoHost {
    script: Script,
    pub calls: Mutex<Vec<NewRepo>>,
}

impl FakeRepoHost {
    pub fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl RepoHost for FakeRepoHost {
    async fn create_repo(
        &self,
        _creds: &GithubCredentials<'_>,
        repo: &NewRepo,
    ) -> Result<String, ServiceError> {
        self.calls.lock().unwrap().push(repo.clone());
        self.script.run()
    }
}

pub struct FakeCompletion {
    script: Script,
    panic: bool,
    pub calls: Mutex<Vec<CompletionRequest>>,
}

impl FakeCompletion {
    pub fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            panic: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn panicking() -> Arc<Self> {
        Arc::new(Self {
            script: Script::Ok(String::new()),
            panic: true,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatCompletion for FakeCompletion {
    async fn complete(
        &self,
        _creds: &OpenAiCredentials<'_>,
        request: &CompletionRequest,
    ) -> Result<String, ServiceError> {
        self.calls.lock().unwrap().push(request.clone());
        if self.panic {
            panic!("completion backend exploded");
        }
        self.script.run()
    }
}

pub fn dispatcher(
    config: AppConfig,
    repo_host: &Arc<FakeRepoHost>,
    completions: &Arc<FakeCompletion>,
) -> Dispatcher {
    Dispatcher::new(config, repo_host.clone(), completions.clone())
}
