//! Where a chat session gets its assistant replies from.
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Error, Result};
use async_trait::async_trait;

use super::api::ApiClient;

pub const SIMULATED_REPLY: &str = "This is an AI response.";

#[async_trait]
pub trait ReplySource {
    async fn reply(&self, message: &str) -> Result<String, Error>;
}

pub type SharedReplySource = Arc<dyn ReplySource + Send + Sync + 'static>;

/// Replies locally with a canned message after a fixed delay without
/// contacting a server.
#[derive(Clone, Debug)]
pub struct SimulatedReply {
    delay: Duration,
}

impl SimulatedReply {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedReply {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl ReplySource for SimulatedReply {
    async fn reply(&self, _message: &str) -> Result<String, Error> {
        tokio::time::sleep(self.delay).await;
        Ok(SIMULATED_REPLY.to_string())
    }
}

/// Asks the server's conversation endpoint for each reply.
#[derive(Clone, Debug, Default)]
pub struct RemoteReply {
    client: ApiClient,
}

impl RemoteReply {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            client: ApiClient::new(api_base_url),
        }
    }
}

#[async_trait]
impl ReplySource for RemoteReply {
    async fn reply(&self, message: &str) -> Result<String, Error> {
        self.client.conversation(message).await
    }
}
