//! Turns a message log into what the chat screen shows.
use std::fmt;

use super::models::{Message, Sender};

const WIDTH: usize = 72;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Start,
    End,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Bubble<'a> {
    pub text: &'a str,
    pub align: Align,
}

impl<'a> From<&'a Message> for Bubble<'a> {
    fn from(msg: &'a Message) -> Self {
        let align = match msg.sender {
            Sender::User => Align::End,
            Sender::Assistant => Align::Start,
        };
        Bubble {
            text: &msg.text,
            align,
        }
    }
}

impl fmt::Display for Bubble<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.align {
            Align::End => write!(f, "{:>width$}", format!("{} :you", self.text), width = WIDTH),
            Align::Start => write!(f, "ai: {}", self.text),
        }
    }
}

/// One bubble per message, in log order.
pub fn render(messages: &[Message]) -> Vec<Bubble<'_>> {
    messages.iter().map(Bubble::from).collect()
}
