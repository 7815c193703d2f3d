//! Realtime Database Log
//!
//! Chat log on a hosted realtime database reached over its REST API.
//! `POST <root>/<path>.json` appends one message and answers with the
//! server-generated push key; push keys sort in arrival order, so they
//! serve as the log's sequence numbers.

use std::collections::BTreeMap;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use tableau_core::chat::{AppendLog, ChatEntry, Seq};
use tableau_core::RemoteSyncError;
use tracing::debug;

#[derive(Deserialize)]
struct PushReply {
    name: String,
}

pub struct RealtimeDbLog {
    client: reqwest::Client,
    url: String,
}

impl RealtimeDbLog {
    pub fn new(base_url: &str, path: &str) -> Self {
        let segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| utf8_percent_encode(s, NON_ALPHANUMERIC).to_string())
            .collect();
        Self {
            client: reqwest::Client::new(),
            url: format!("{}/{}.json", base_url.trim_end_matches('/'), segments.join("/")),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn transport(err: reqwest::Error) -> RemoteSyncError {
    RemoteSyncError::Transport(err.to_string())
}

async fn rejected(response: reqwest::Response) -> RemoteSyncError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    RemoteSyncError::Rejected(format!("{} {}", status, body.trim()))
}

#[async_trait(?Send)]
impl AppendLog for RealtimeDbLog {
    async fn append(&self, text: &str) -> Result<Seq, RemoteSyncError> {
        let response = self
            .client
            .post(&self.url)
            .json(&text)
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(rejected(response).await);
        }
        let reply: PushReply = response
            .json()
            .await
            .map_err(|e| RemoteSyncError::Decode(e.to_string()))?;
        debug!(key = %reply.name, "pushed chat message");
        Ok(Seq(reply.name))
    }

    async fn since(&self, after: Option<&Seq>) -> Result<Vec<ChatEntry>, RemoteSyncError> {
        let mut request = self.client.get(&self.url).query(&[("orderBy", "\"$key\"")]);
        if let Some(seq) = after {
            // startAt is inclusive; the known entry is dropped below
            request = request.query(&[("startAt", format!("\"{}\"", seq))]);
        }
        let response = request.send().await.map_err(transport)?;
        if !response.status().is_success() {
            return Err(rejected(response).await);
        }
        // An empty location comes back as `null`
        let entries: Option<BTreeMap<String, String>> = response
            .json()
            .await
            .map_err(|e| RemoteSyncError::Decode(e.to_string()))?;
        Ok(entries
            .unwrap_or_default()
            .into_iter()
            .map(|(key, text)| ChatEntry { seq: Seq(key), text })
            .filter(|entry| after.map_or(true, |a| entry.seq > *a))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encodes_path_segments() {
        let log = RealtimeDbLog::new("https://db.example.com/", "rooms/team chat");
        assert_eq!(log.url(), "https://db.example.com/rooms/team%20chat.json");
    }
}
