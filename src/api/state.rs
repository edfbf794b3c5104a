use std::sync::Arc;

use crate::ai::{PlaceholderResponder, SharedResponder};
use crate::core::AppConfig;

pub struct AppState {
    // Generates replies for the conversation endpoint
    pub responder: SharedResponder,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let responder = Arc::new(PlaceholderResponder::new(config.reply_delay));
        Self::new_with_responder(responder)
    }

    pub fn new_with_responder(responder: SharedResponder) -> Self {
        Self { responder }
    }
}
