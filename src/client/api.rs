//! HTTP client for a running X-ROOT server.
use anyhow::{Error, Result, anyhow};
use reqwest::Response;

use crate::api::public::ErrorResponse;
use crate::api::public::conversation::{ConversationRequest, ConversationResponse};
use crate::api::public::languages::Language;

#[derive(Clone, Debug)]
pub struct ApiClient {
    api_base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Send a message to the conversation endpoint and return the
    /// reply text.
    pub async fn conversation(&self, message: &str) -> Result<String, Error> {
        let url = format!("{}/api/conversation", self.api_base_url);
        let resp = self
            .client
            .post(&url)
            .json(&ConversationRequest::new(message))
            .send()
            .await?;
        let body: ConversationResponse = check_status(resp).await?.json().await?;
        Ok(body.response)
    }

    pub async fn languages(&self) -> Result<Vec<Language>, Error> {
        let url = format!("{}/api/languages", self.api_base_url);
        let resp = self.client.get(&url).send().await?;
        let languages = check_status(resp).await?.json().await?;
        Ok(languages)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new("http://127.0.0.1:3000")
    }
}

// Turn a non-success response into an error, preferring the `error`
// field the server sends for rejected input
async fn check_status(resp: Response) -> Result<Response, Error> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let reason = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.error)
        .unwrap_or(body);
    Err(anyhow!("Request failed with status {}: {}", status, reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[tokio::test]
    async fn it_returns_the_conversation_reply() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/conversation")
            .match_body(mockito::Matcher::Json(
                serde_json::json!({"message": "hola"}),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"response": "You said: \"hola\". This is a placeholder AI response."}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url());
        let reply = client.conversation("hola").await?;
        assert_eq!(
            reply,
            "You said: \"hola\". This is a placeholder AI response."
        );
        Ok(())
    }

    #[tokio::test]
    async fn it_surfaces_the_server_error_message() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/conversation")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "Message is required."}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url());
        let err = client.conversation("").await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("Message is required."));
        Ok(())
    }

    #[tokio::test]
    async fn it_lists_languages() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/languages")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id": "ko", "name": "Korean"}, {"id": "ja", "name": "Japanese"}]"#)
            .create_async()
            .await;

        // Trailing slash is tolerated
        let client = ApiClient::new(&format!("{}/", server.url()));
        let languages = client.languages().await?;
        assert_eq!(languages.len(), 2);
        assert_eq!(languages[0], Language::new("ko", "Korean"));
        Ok(())
    }
}
