use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};

use crate::api::error::Error;
use crate::api::http_sender::{DefaultSender, HttpSender};

const APPLICATION_JSON: &str = "application/json";

/// Client for the remote todo API.
///
/// Holds only the immutable base endpoint besides its transport, so one
/// instance is safe to share across concurrent callers. Each operation
/// issues exactly one request and performs no retries or local recovery.
pub struct ApiClient<S: HttpSender = DefaultSender> {
    pub(super) client: Client,
    pub(super) sender: S,
    pub(super) base_url: String,
}

impl ApiClient<DefaultSender> {
    pub fn new(base_url: &str) -> ApiClient<DefaultSender> {
        Self::with_sender(base_url, DefaultSender)
    }
}

impl<S: HttpSender> ApiClient<S> {
    pub fn with_sender(base_url: &str, sender: S) -> ApiClient<S> {
        ApiClient {
            client: Client::new(),
            sender,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(super) fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    pub(super) fn todo_url(&self, id: &str) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }

    pub(super) async fn send_get(&self, url: &str) -> Result<Response, Error> {
        debug!("GET {url}");
        let request = self.client.get(url).header(ACCEPT, APPLICATION_JSON);
        Ok(self.sender.send(request).await?)
    }

    pub(super) async fn send_delete(&self, url: &str) -> Result<Response, Error> {
        debug!("DELETE {url}");
        let request = self.client.delete(url).header(ACCEPT, APPLICATION_JSON);
        Ok(self.sender.send(request).await?)
    }

    pub(super) async fn send_post_json(&self, url: &str, payload: Vec<u8>) -> Result<Response, Error> {
        debug!("POST {url}");
        let request = self
            .client
            .post(url)
            .header(ACCEPT, APPLICATION_JSON)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .body(payload);
        Ok(self.sender.send(request).await?)
    }

    pub(super) async fn send_put_json(&self, url: &str, payload: Vec<u8>) -> Result<Response, Error> {
        debug!("PUT {url}");
        let request = self
            .client
            .put(url)
            .header(ACCEPT, APPLICATION_JSON)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .body(payload);
        Ok(self.sender.send(request).await?)
    }
}

/// Drains the body of a response outside the accepted status set and wraps
/// the observed status into the catch-all error variant.
pub(super) async fn unexpected_status(response: Response) -> Error {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Error::UnknownError { status, body }
}
