use std::sync::Arc;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::api::init_tracing;
use crate::client::{ConversationSession, RemoteReply, SharedReplySource, SimulatedReply, render};
use crate::core::AppConfig;

// Print every message added since the last call
fn show_new(session: &ConversationSession, shown: &mut usize) {
    for bubble in render(&session.messages()[*shown..]) {
        println!("{}", bubble);
    }
    *shown = session.messages().len();
}

pub async fn run(remote: bool, api_url: Option<String>) -> Result<()> {
    init_tracing();
    let mut rl = DefaultEditor::new()?;
    let config = AppConfig::default();

    let source: SharedReplySource = if remote {
        let url = api_url.unwrap_or(config.api_url);
        tracing::debug!("Using conversation endpoint at {}", url);
        Arc::new(RemoteReply::new(&url))
    } else {
        Arc::new(SimulatedReply::new(config.client_reply_delay))
    };

    let mut session = ConversationSession::new(source);
    let mut shown = 0;

    loop {
        // Replies keep arriving while the user types. Show whatever
        // landed since the last prompt; an empty line just refreshes.
        if let Err(err) = session.poll_replies() {
            println!("Error: {}", err);
        }
        show_new(&session, &mut shown);

        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                session.set_input(&line);
                if session.submit() {
                    rl.add_history_entry(line.as_str())?;
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    // Wait for anything still on its way before leaving
    while let Some(reply) = session.next_reply().await {
        if let Err(err) = reply {
            println!("Error: {}", err);
        }
    }
    show_new(&session, &mut shown);

    Ok(())
}
