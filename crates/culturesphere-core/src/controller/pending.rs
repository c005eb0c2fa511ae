use std::sync::Arc;

use futures_util::FutureExt;
use tokio::task::JoinHandle;

use crate::client::Recommender;
use crate::domain::Domain;
use crate::error::ClientError;

type Outcome = Result<String, ClientError>;

/// A recommendation call running on its own task.
///
/// Dropping it aborts the task, so a torn-down controller never sees the
/// result.
pub(crate) struct PendingRequest {
    handle: JoinHandle<Outcome>,
}

impl PendingRequest {
    pub(crate) fn spawn(client: Arc<dyn Recommender>, user_input: String, domain: Domain) -> Self {
        let handle = tokio::spawn(async move { client.send(&user_input, domain).await });
        Self { handle }
    }

    /// The outcome if the task has finished, without blocking.
    pub(crate) fn try_take(&mut self) -> Option<Outcome> {
        if !self.handle.is_finished() {
            return None;
        }
        (&mut self.handle).now_or_never().map(flatten)
    }

    pub(crate) async fn finish(&mut self) -> Outcome {
        flatten((&mut self.handle).await)
    }
}

impl Drop for PendingRequest {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn flatten(joined: Result<Outcome, tokio::task::JoinError>) -> Outcome {
    joined.unwrap_or_else(|e| Err(ClientError::Unknown(format!("request task failed: {e}"))))
}
