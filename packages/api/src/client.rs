//! Typed HTTP client for `/api/users`.
//!
//! Used by the Dioxus views in the browser (reqwest over `fetch`) and by native
//! callers alike. Every non-2xx response becomes [`ClientError::Status`] carrying
//! the server's `{"error"}` text, or the raw body when it is not JSON (the list
//! endpoint fails with plain text).

use serde::de::DeserializeOwned;
use store::{CreateUserRequest, ErrorBody, MessageBody, UpdateUserRequest, User};

use crate::USERS_PATH;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }

    /// A 404 on delete means the record is already gone.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[derive(Clone, Debug)]
pub struct UsersClient {
    http: reqwest::Client,
    base_url: String,
}

impl UsersClient {
    /// `base_url` is the server origin, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url, USERS_PATH)
    }

    pub async fn list(&self) -> Result<Vec<User>, ClientError> {
        let response = self.http.get(self.url()).send().await?;
        decode(response).await
    }

    pub async fn create(&self, name: &str) -> Result<User, ClientError> {
        let response = self
            .http
            .post(self.url())
            .json(&CreateUserRequest::new(name))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update(&self, id: i32, name: &str) -> Result<User, ClientError> {
        let response = self
            .http
            .put(self.url())
            .json(&UpdateUserRequest::new(id, name))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete(&self, id: i32) -> Result<MessageBody, ClientError> {
        let response = self
            .http
            .delete(self.url())
            .query(&[("id", id)])
            .send()
            .await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.error)
        .unwrap_or(body);
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = UsersClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url(), "http://localhost:8080/api/users");
    }

    #[test]
    fn test_not_found_detection() {
        let err = ClientError::Status {
            status: 404,
            message: "User not found".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "server returned 404: User not found");
    }
}
