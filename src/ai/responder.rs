//! Reply generation for the conversation endpoint.
//!
//! A real deployment would call an inference service here. For now
//! the only implementation waits for a fixed delay and echoes the
//! user's message back in a template.
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Error, Result};
use async_trait::async_trait;

#[async_trait]
pub trait Responder {
    async fn respond(&self, message: &str) -> Result<String, Error>;
}

pub type SharedResponder = Arc<dyn Responder + Send + Sync + 'static>;

/// Stands in for an AI backend by replying with a fixed template
/// after `delay`.
#[derive(Clone, Debug)]
pub struct PlaceholderResponder {
    delay: Duration,
}

impl PlaceholderResponder {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for PlaceholderResponder {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

pub fn placeholder_reply(message: &str) -> String {
    format!(
        "You said: \"{}\". This is a placeholder AI response.",
        message
    )
}

#[async_trait]
impl Responder for PlaceholderResponder {
    async fn respond(&self, message: &str) -> Result<String, Error> {
        // Yield to the runtime instead of blocking the worker thread
        tokio::time::sleep(self.delay).await;
        Ok(placeholder_reply(message))
    }
}
