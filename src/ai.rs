use crate::errors::{Error, Result};
use crate::models::AskResponse;
use reqwest::Client;

/// Forwards chat prompts to the external assistant and returns its reply
/// verbatim. No timeout or retry is applied.
#[derive(Clone)]
pub struct AskClient {
    http: Client,
    base_url: String,
}

impl AskClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn ask(&self, prompt: &str) -> Result<String> {
        let response = self
            .http
            .get(format!("{}/ask", self.base_url))
            .query(&[("prompt", prompt)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!("assistant responded with {status}")));
        }

        let reply: AskResponse = response.json().await?;
        Ok(reply.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_assistant_is_a_network_error() {
        let client = AskClient::new("http://127.0.0.1:1");
        let result = client.ask("how much did I spend?").await;
        assert!(matches!(result, Err(Error::Network(_))));
    }
}
