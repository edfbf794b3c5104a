pub mod routes;
mod server;
pub use server::{GREETING, app, init_tracing, serve};
pub mod public;
mod state;
pub use state::AppState;
