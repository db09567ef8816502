#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use portfolio_chat::config::Config;
use portfolio_chat::services::profile::Profile;
use portfolio_chat::services::provider::{ChatProvider, Completion, ProviderError, ProviderMessage};
use portfolio_chat::services::resolver::ReplyResolver;
use portfolio_chat::state::{AppState, SharedState};

/// What the scripted provider does when called.
#[derive(Clone, Debug)]
pub enum Script {
    Reply(Option<&'static str>),
    Status(u16, &'static str),
    Transport,
    Malformed,
    Panic,
}

pub struct ScriptedProvider {
    script: Script,
    calls: AtomicUsize,
    seen: Mutex<Vec<Vec<ProviderMessage>>>,
}

impl ScriptedProvider {
    pub fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_exchange(&self) -> Option<Vec<ProviderMessage>> {
        self.seen.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ChatProvider for ScriptedProvider {
    async fn send(&self, messages: &[ProviderMessage]) -> Result<Completion, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(messages.to_vec());
        match &self.script {
            Script::Reply(content) => Ok(Completion {
                content: content.map(String::from),
            }),
            Script::Status(status, body) => Err(ProviderError::Status {
                status: *status,
                body: body.to_string(),
            }),
            Script::Transport => Err(ProviderError::Transport("connection refused".into())),
            Script::Malformed => Err(ProviderError::Malformed("expected value at line 1".into())),
            Script::Panic => panic!("provider blew up"),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

pub fn keyed_config() -> Config {
    Config {
        api_key: Some("sk-test".to_string()),
        ..Config::default()
    }
}

pub fn resolver_with(config: Config, provider: Option<Arc<ScriptedProvider>>) -> ReplyResolver {
    ReplyResolver::new(
        Arc::new(config),
        Arc::new(Profile::default()),
        provider.map(|p| p as Arc<dyn ChatProvider>),
    )
}

pub fn state_with(config: Config, provider: Option<Arc<ScriptedProvider>>) -> SharedState {
    Arc::new(AppState::new(
        config,
        Profile::default(),
        provider.map(|p| p as Arc<dyn ChatProvider>),
    ))
}
