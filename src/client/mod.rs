pub mod api;
pub mod models;
pub mod render;
pub mod reply;
pub mod session;

pub use api::ApiClient;
pub use models::{Message, Sender, Transcript};
pub use render::{Align, Bubble, render};
pub use reply::{RemoteReply, ReplySource, SharedReplySource, SimulatedReply};
pub use session::ConversationSession;
