use crate::{ClientError, ClientResult, INCLUDED_FIELDS, RawEnvelope, RemoteSource};

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, RequestBuilder};
use roster_core::UserRecord;

/// HTTP client for a randomuser-compatible endpoint
pub struct RandomUserClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl RandomUserClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Endpoint URL (e.g., "https://randomuser.me/api/")
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, ReqwestClient::new())
    }

    /// Create a client around an existing reqwest client
    pub fn with_client(base_url: &str, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim().to_string(),
            client,
        }
    }

    /// GET for a page of `count` users. Query pairs already on `base_url` are kept.
    pub fn request(&self, count: u32) -> RequestBuilder {
        self.client.get(&self.base_url).query(&[
            ("results", count.to_string().as_str()),
            ("inc", INCLUDED_FIELDS),
            ("noinfo", ""),
        ])
    }
}

#[async_trait]
impl RemoteSource for RandomUserClient {
    async fn fetch_users(&self, count: u32) -> ClientResult<Vec<UserRecord>> {
        if count == 0 {
            return Err(ClientError::invalid_count());
        }

        debug!("GET {} (results={count})", self.base_url);

        let response = self.request(count).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::status(
                status.as_u16(),
                response.url().as_str(),
            ));
        }

        let body = response.text().await?;
        let envelope: RawEnvelope = serde_json::from_str(&body)?;
        let users = envelope.into_records();

        debug!("Fetched {} user(s)", users.len());
        Ok(users)
    }
}
