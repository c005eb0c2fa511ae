use std::sync::Arc;

use tracing::{info, warn};

use super::pending::PendingRequest;
use crate::client::Recommender;
use crate::domain::Domain;
use crate::error::ClientError;
use crate::input::InputBuffer;
use crate::state::InteractionState;

/// Text shown for any failed submission, whatever the underlying error kind.
pub const FAILURE_MESSAGE: &str = "Failed to generate recommendations. Please try again.";

/// Drives one recommendation form: Idle -> Loading -> Success | Failure.
pub struct DomainController {
    domain: Domain,
    client: Arc<dyn Recommender>,
    input: InputBuffer,
    state: InteractionState,
    pending: Option<PendingRequest>,
}

impl DomainController {
    pub fn new(domain: Domain, client: Arc<dyn Recommender>) -> Self {
        Self {
            domain,
            client,
            input: InputBuffer::new(),
            state: InteractionState::Idle,
            pending: None,
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputBuffer {
        &mut self.input
    }

    /// User-facing text for the current failure, if any.
    pub fn failure_message(&self) -> Option<&'static str> {
        self.state.error().map(|_| FAILURE_MESSAGE)
    }

    /// Replace the pending input with a preset example. Does not submit.
    pub fn use_example(&mut self, text: &str) {
        self.input.set(text);
    }

    /// Start a request for `raw_input`.
    ///
    /// Returns `false` without doing anything when the input is blank or a
    /// request is already in flight.
    pub fn submit(&mut self, raw_input: &str) -> bool {
        if raw_input.trim().is_empty() || self.is_loading() {
            return false;
        }

        self.state = InteractionState::Loading;
        self.pending = Some(PendingRequest::spawn(
            self.client.clone(),
            raw_input.to_string(),
            self.domain,
        ));
        true
    }

    /// Submit whatever is in the input buffer.
    pub fn submit_input(&mut self) -> bool {
        let text = self.input.as_str().to_string();
        self.submit(&text)
    }

    /// Apply the outcome of a finished request. Returns `true` if the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        let Some(outcome) = pending.try_take() else {
            return false;
        };
        self.pending = None;
        self.resolve(outcome);
        true
    }

    /// Wait for the in-flight request, if any, and apply its outcome.
    pub async fn wait(&mut self) {
        if let Some(mut pending) = self.pending.take() {
            let outcome = pending.finish().await;
            self.resolve(outcome);
        }
    }

    fn resolve(&mut self, outcome: Result<String, ClientError>) {
        self.state = match outcome {
            Ok(text) => {
                info!(domain = %self.domain, chars = text.chars().count(), "recommendations received");
                InteractionState::Success(text)
            }
            Err(err) => {
                warn!(domain = %self.domain, kind = err.kind(), error = %err, "recommendations failed");
                InteractionState::Failure(err)
            }
        };
    }
}
