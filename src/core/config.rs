use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// How long the conversation endpoint waits before replying
    pub reply_delay: Duration,
    /// How long the simulated client reply takes to arrive
    pub client_reply_delay: Duration,
    /// Base URL of a running server, used by the chat client
    pub api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let host = "127.0.0.1";
        let port = "3000";
        let reply_delay = duration_from_env("XROOT_REPLY_DELAY_MS", 500);
        let client_reply_delay = duration_from_env("XROOT_CLIENT_REPLY_DELAY_MS", 1000);
        let api_url = env::var("XROOT_API_URL").unwrap_or(format!("http://{}:{}", host, port));

        Self {
            reply_delay,
            client_reply_delay,
            api_url,
        }
    }
}

fn duration_from_env(key: &str, default_ms: u64) -> Duration {
    let millis = match env::var(key) {
        Ok(val) => val.trim().parse::<u64>().unwrap_or_else(|_| {
            tracing::warn!(
                "Ignoring invalid value for {}: {:?}, using {}ms",
                key,
                val,
                default_ms
            );
            default_ms
        }),
        Err(_) => default_ms,
    };
    Duration::from_millis(millis)
}
