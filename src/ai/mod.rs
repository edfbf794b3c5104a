pub mod responder;
pub use responder::{PlaceholderResponder, Responder, SharedResponder, placeholder_reply};
