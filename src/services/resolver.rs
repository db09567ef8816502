// src/services/resolver.rs
//
// Turns a validated message into a ChatResponse. Every path ends in a reply:
// provider failures are answered with a mock reply plus a note.

use std::sync::Arc;

use tracing::{debug, error, warn};

use super::chatbot::mock_reply;
use super::profile::Profile;
use super::provider::{ChatProvider, Completion, ProviderError, ProviderMessage};
use crate::config::Config;
use crate::message::ChatResponse;

pub const QUOTA_NOTE: &str = "AI provider quota exceeded, showing demo reply.";
pub const SERVER_ERROR_NOTE: &str = "Server error, showing demo reply.";

pub fn provider_error_note(status: u16) -> String {
    format!("AI provider error ({status}), showing demo reply.")
}

/// Result of one guard: either it answered, or the next one gets a turn.
#[derive(Debug, PartialEq)]
pub enum Guard {
    Handled(ChatResponse),
    Pass,
}

pub type ProviderOutcome = Result<Completion, ProviderError>;

/// Checked before any network call.
pub type PreflightGuard = fn(&ReplyResolver, &str) -> Guard;

/// Checked against what the provider returned.
pub type OutcomeGuard = fn(&ReplyResolver, &str, &ProviderOutcome) -> Guard;

pub const PREFLIGHT_GUARDS: &[(&str, PreflightGuard)] = &[
    ("demo_mode", demo_mode),
    ("missing_credential", missing_credential),
];

pub const OUTCOME_GUARDS: &[(&str, OutcomeGuard)] = &[
    ("provider_fault", provider_fault),
    ("rate_limited", rate_limited),
    ("provider_status", provider_status),
    ("empty_completion", empty_completion),
];

#[derive(Clone)]
pub struct ReplyResolver {
    config: Arc<Config>,
    profile: Arc<Profile>,
    provider: Option<Arc<dyn ChatProvider>>,
}

impl ReplyResolver {
    pub fn new(
        config: Arc<Config>,
        profile: Arc<Profile>,
        provider: Option<Arc<dyn ChatProvider>>,
    ) -> Self {
        Self { config, profile, provider }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn mock(&self, message: &str) -> String {
        mock_reply(&self.profile, message)
    }

    /// Mock reply with the generic server-error note.
    pub fn server_error_reply(&self, message: &str) -> ChatResponse {
        ChatResponse::with_note(self.mock(message), SERVER_ERROR_NOTE)
    }

    pub fn system_instruction(&self) -> String {
        format!(
            "You are a concise assistant about {} and their portfolio.",
            self.profile.name
        )
    }

    /// The single-turn exchange sent to the provider.
    pub fn exchange(&self, message: &str) -> Vec<ProviderMessage> {
        vec![
            ProviderMessage::system(self.system_instruction()),
            ProviderMessage::user(message),
        ]
    }

    pub async fn resolve(&self, message: &str) -> ChatResponse {
        if let Some(response) = self.preflight(message) {
            return response;
        }

        let Some(provider) = &self.provider else {
            return ChatResponse::reply(self.mock(message));
        };

        debug!(provider = provider.name(), "calling provider");
        let outcome = provider.send(&self.exchange(message)).await;
        self.settle(message, outcome)
    }

    /// Runs the pre-call guards in order; `Some` means no call is needed.
    pub fn preflight(&self, message: &str) -> Option<ChatResponse> {
        PREFLIGHT_GUARDS
            .iter()
            .find_map(|(name, guard)| match guard(self, message) {
                Guard::Handled(response) => {
                    debug!(guard = *name, "answered before provider call");
                    Some(response)
                }
                Guard::Pass => None,
            })
    }

    /// Maps a provider outcome to the response the client sees.
    pub fn settle(&self, message: &str, outcome: ProviderOutcome) -> ChatResponse {
        let handled = OUTCOME_GUARDS
            .iter()
            .find_map(|(name, guard)| match guard(self, message, &outcome) {
                Guard::Handled(response) => {
                    debug!(guard = *name, "provider outcome replaced");
                    Some(response)
                }
                Guard::Pass => None,
            });

        match (handled, outcome) {
            (Some(response), _) => response,
            (None, Ok(Completion { content: Some(text) })) => ChatResponse::reply(text),
            // unreachable while empty_completion is in the list
            (None, _) => ChatResponse::reply(self.mock(message)),
        }
    }
}

fn demo_mode(resolver: &ReplyResolver, message: &str) -> Guard {
    if resolver.config.demo_mode {
        Guard::Handled(ChatResponse::reply(resolver.mock(message)))
    } else {
        Guard::Pass
    }
}

fn missing_credential(resolver: &ReplyResolver, message: &str) -> Guard {
    if resolver.config.api_key.is_none() || resolver.provider.is_none() {
        warn!("no provider credential configured; returning demo reply");
        Guard::Handled(ChatResponse::reply(resolver.mock(message)))
    } else {
        Guard::Pass
    }
}

fn provider_fault(resolver: &ReplyResolver, message: &str, outcome: &ProviderOutcome) -> Guard {
    match outcome {
        Err(err @ (ProviderError::Transport(_) | ProviderError::Malformed(_))) => {
            error!(error = %err, "provider call failed");
            Guard::Handled(resolver.server_error_reply(message))
        }
        _ => Guard::Pass,
    }
}

fn rate_limited(resolver: &ReplyResolver, message: &str, outcome: &ProviderOutcome) -> Guard {
    match outcome {
        Err(err) if err.is_rate_limited() => {
            error!(error = %err, "provider quota exhausted");
            Guard::Handled(ChatResponse::with_note(resolver.mock(message), QUOTA_NOTE))
        }
        _ => Guard::Pass,
    }
}

fn provider_status(resolver: &ReplyResolver, message: &str, outcome: &ProviderOutcome) -> Guard {
    match outcome {
        Err(err @ ProviderError::Status { status, .. }) => {
            error!(error = %err, "provider returned an error status");
            Guard::Handled(ChatResponse::with_note(
                resolver.mock(message),
                provider_error_note(*status),
            ))
        }
        _ => Guard::Pass,
    }
}

fn empty_completion(resolver: &ReplyResolver, message: &str, outcome: &ProviderOutcome) -> Guard {
    match outcome {
        Ok(Completion { content: Some(text) }) if !text.trim().is_empty() => Guard::Pass,
        Ok(_) => {
            warn!("provider reply was empty; returning demo reply");
            Guard::Handled(ChatResponse::reply(resolver.mock(message)))
        }
        Err(_) => Guard::Pass,
    }
}
