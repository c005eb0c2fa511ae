//! Request/response orchestration behind each page and the assistant.
//!
//! Controllers own at most one in-flight request. It runs as a spawned tokio
//! task; the owner collects the outcome with `poll()` from its event loop or
//! with `wait().await`.

pub mod assistant;
pub mod domain;
mod pending;

pub use assistant::AssistantController;
pub use domain::DomainController;
