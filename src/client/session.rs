//! The state behind the chat screen: the message log, the text the
//! user is typing and the replies still on their way.
//!
//! A user message is appended as soon as it's submitted. Its reply
//! is produced on a spawned task and only lands in the log when the
//! owner of the session collects it with [`ConversationSession::next_reply`]
//! or [`ConversationSession::poll_replies`]. Replies are collected in
//! the order their messages were sent, so every reply follows the
//! message that triggered it.
use std::sync::Arc;

use anyhow::{Error, Result};
use futures::FutureExt;
use futures::StreamExt;
use futures::stream::FuturesOrdered;
use tokio::task::JoinHandle;

use super::models::{Message, Transcript};
use super::reply::SharedReplySource;

type PendingReply = JoinHandle<Result<String, Error>>;

pub struct ConversationSession {
    transcript: Transcript,
    input: String,
    source: SharedReplySource,
    pending: FuturesOrdered<PendingReply>,
}

impl ConversationSession {
    pub fn new(source: SharedReplySource) -> Self {
        Self {
            transcript: Transcript::new(),
            input: String::new(),
            source,
            pending: FuturesOrdered::new(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.transcript.messages()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Number of replies scheduled but not yet added to the log
    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    /// Send whatever is in the input buffer. Returns `false` and
    /// leaves everything untouched when the buffer is blank.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self) -> bool {
        if self.input.trim().is_empty() {
            return false;
        }

        let text = std::mem::take(&mut self.input);
        self.transcript.push(Message::user(&text));

        let source = Arc::clone(&self.source);
        self.pending
            .push_back(tokio::spawn(async move { source.reply(&text).await }));

        true
    }

    /// Wait for the oldest outstanding reply and append it. Returns
    /// `None` when nothing is pending. A failed reply appends nothing.
    pub async fn next_reply(&mut self) -> Option<Result<Message, Error>> {
        let joined = self.pending.next().await?;
        Some(self.append_reply(joined))
    }

    /// Append every reply that has already arrived, stopping at the
    /// first one still in flight. Returns how many were appended.
    pub fn poll_replies(&mut self) -> Result<usize, Error> {
        let mut appended = 0;
        while let Some(Some(joined)) = self.pending.next().now_or_never() {
            self.append_reply(joined)?;
            appended += 1;
        }
        Ok(appended)
    }

    /// Wait for every outstanding reply. Stops at the first failure.
    pub async fn settle(&mut self) -> Result<(), Error> {
        while let Some(reply) = self.next_reply().await {
            reply?;
        }
        Ok(())
    }

    fn append_reply(
        &mut self,
        joined: Result<Result<String, Error>, tokio::task::JoinError>,
    ) -> Result<Message, Error> {
        let text = joined??;
        let msg = Message::assistant(&text);
        self.transcript.push(msg.clone());
        Ok(msg)
    }
}
