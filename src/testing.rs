//! In-memory transport for the facade tests.

use std::{collections::VecDeque, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;
use url::Url;

use crate::{
    prelude::*,
    result,
    transport::{Payload, Transport},
};

#[derive(Clone, Debug)]
pub struct Request {
    pub url: Url,

    /// `None` for downloads.
    pub payload: Option<Payload>,

    pub timeout: Duration,
}

/// Records the requests and answers them with the queued raw responses.
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<Request>>,
    responses: Mutex<VecDeque<(u16, Vec<u8>)>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a raw HTTP response.
    pub async fn respond(&self, status: u16, body: &Value) -> Result {
        self.responses.lock().await.push_back((status, serde_json::to_vec(body)?));
        Ok(())
    }

    /// Queue a successful API response.
    pub async fn respond_ok(&self, result: Value) -> Result {
        self.respond(200, &serde_json::json!({"ok": true, "result": result})).await
    }

    pub async fn respond_bytes(&self, body: &[u8]) {
        self.responses.lock().await.push_back((200, body.to_vec()));
    }

    pub async fn requests(&self) -> Vec<Request> {
        self.requests.lock().await.clone()
    }

    async fn next_response(&self) -> Result<(u16, Vec<u8>)> {
        self.responses
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| Error::Network("no response queued".to_owned()))
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post(&self, url: Url, payload: Payload, timeout: Duration) -> Result<Value> {
        self.requests.lock().await.push(Request { url, payload: Some(payload), timeout });
        let (status, body) = self.next_response().await?;
        result::parse(status, &body)
    }

    async fn get(&self, url: Url, timeout: Duration) -> Result<Vec<u8>> {
        self.requests.lock().await.push(Request { url, payload: None, timeout });
        let (_, body) = self.next_response().await?;
        Ok(body)
    }
}
