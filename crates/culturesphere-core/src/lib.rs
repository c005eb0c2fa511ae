pub mod client;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod hints;
pub mod input;
pub mod page;
pub mod state;
pub mod wander;

// Re-export main types for convenience
pub use client::{HealthStatus, RecommendationClient, Recommender};
pub use config::Config;
pub use controller::{AssistantController, DomainController};
pub use domain::{Domain, DomainContent};
pub use error::ClientError;
pub use hints::{Deck, HintRotator};
pub use input::InputBuffer;
pub use page::Page;
pub use state::{Author, ConversationMessage, InteractionState};
pub use wander::Wanderer;
