use std::sync::Arc;

use tracing::{debug, warn};

use super::pending::PendingRequest;
use crate::client::Recommender;
use crate::domain::Domain;
use crate::error::ClientError;
use crate::input::InputBuffer;
use crate::page::Page;
use crate::state::{Author, ConversationMessage};

pub const GREETING: &str = "Hi! I'm your CultureSphere AI guide. I can help you navigate our cultural domains and find what resonates with your soul. What would you like to explore?";

/// Posted in place of a reply whenever a request fails.
pub const FALLBACK_REPLY: &str = "I'm having trouble connecting right now. Try exploring one of our cultural domains directly to discover your personalized recommendations!";

const PLATFORM_DESCRIPTION: &str = "CultureSphere AI helps users discover personalized recommendations across 6 domains: Music, Dining, Travel, Fashion, Learning, and Wellness. Users describe their tastes and moods and receive AI-powered lifestyle insights based on their cultural DNA.";

/// Build the prompt sent for one assistant turn.
pub fn build_assistant_prompt(page: Page, user_text: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str("You are a helpful AI guide for CultureSphere AI, a cultural intelligence platform.\n\n");
    prompt.push_str(&format!("Current page: {}\n", page.slug()));
    prompt.push_str(PLATFORM_DESCRIPTION);
    prompt.push_str("\n\n");
    prompt.push_str(&format!("User question: \"{}\"\n\n", user_text));
    prompt.push_str("Provide a helpful, friendly response about CultureSphere AI, its features, or how to use the platform. ");
    prompt.push_str("Keep responses concise (2-3 sentences) and encouraging. ");
    prompt.push_str("If asked about a specific domain, guide them toward exploring that section. Be warm and culturally aware.");

    prompt
}

/// The floating guide's conversation.
///
/// The transcript is append-only and starts with a greeting. Each user message
/// is followed by exactly one assistant message once its request resolves.
pub struct AssistantController {
    client: Arc<dyn Recommender>,
    messages: Vec<ConversationMessage>,
    input: InputBuffer,
    page: Page,
    pending: Option<PendingRequest>,
}

impl AssistantController {
    pub fn new(client: Arc<dyn Recommender>) -> Self {
        Self {
            client,
            messages: vec![ConversationMessage::new(Author::Assistant, GREETING)],
            input: InputBuffer::new(),
            page: Page::Home,
            pending: None,
        }
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    /// True while waiting for a reply ("AI is thinking...").
    pub fn is_composing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputBuffer {
        &mut self.input
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn set_page(&mut self, page: Page) {
        self.page = page;
    }

    /// Append the user's message and ask for a reply.
    ///
    /// Returns `false` without touching the transcript when the text is blank
    /// or a reply is still pending.
    pub fn send_message(&mut self, raw_text: &str) -> bool {
        if raw_text.trim().is_empty() || self.is_composing() {
            return false;
        }

        self.messages
            .push(ConversationMessage::new(Author::User, raw_text));
        self.input.clear();

        let prompt = build_assistant_prompt(self.page, raw_text);
        debug!(page = self.page.slug(), "asking assistant");
        self.pending = Some(PendingRequest::spawn(
            self.client.clone(),
            prompt,
            Domain::Assistant,
        ));
        true
    }

    pub fn send_input(&mut self) -> bool {
        let text = self.input.as_str().to_string();
        self.send_message(&text)
    }

    /// Append the reply if the pending request has finished.
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

    pub async fn wait(&mut self) {
        if let Some(mut pending) = self.pending.take() {
            let outcome = pending.finish().await;
            self.resolve(outcome);
        }
    }

    fn resolve(&mut self, outcome: Result<String, ClientError>) {
        let text = match outcome {
            Ok(reply) => reply,
            Err(err) => {
                warn!(kind = err.kind(), error = %err, "assistant reply failed");
                FALLBACK_REPLY.to_string()
            }
        };
        self.messages
            .push(ConversationMessage::new(Author::Assistant, text));
    }
}
