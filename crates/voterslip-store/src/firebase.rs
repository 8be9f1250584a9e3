//! Firebase Realtime Database REST client.
//!
//! ## Summary
//! Reads address `GET {base_url}/{node}[/{key}].json`, optionally carrying
//! the database secret as the `auth` query parameter. An HTTP 200 with a
//! literal `null` body means "no data at this path" and maps to `None`;
//! non-success statuses are errors.

use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;

use voterslip_core::config::StoreConfig;

use crate::error::{StoreError, StoreResult};
use crate::record::{NameIndex, PhoneKeySet, RawVoter, VoterMap};
use crate::store::{StoreFuture, VoterStore};

pub struct FirebaseStore {
    client: reqwest::Client,
    base_url: Url,
    auth_token: Option<String>,
    voters_node: String,
    name_index_node: String,
}

impl FirebaseStore {
    /// ## Summary
    /// Builds a store client from the `store` configuration section.
    ///
    /// ## Errors
    /// Returns an error if the base URL does not parse or the HTTP client
    /// cannot be constructed.
    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        let base_url = Url::parse(config.base_url.trim().trim_end_matches('/'))
            .map_err(|e| StoreError::BaseUrl(format!("{}: {e}", config.base_url)))?;

        if base_url.cannot_be_a_base() {
            return Err(StoreError::BaseUrl(config.base_url.clone()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(StoreError::Client)?;

        Ok(Self {
            client,
            base_url,
            auth_token: config.auth_token.clone(),
            voters_node: config.voters_node.clone(),
            name_index_node: config.name_index_node.clone(),
        })
    }

    fn node_url(&self, segments: &[&str]) -> StoreResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| StoreError::BaseUrl(self.base_url.to_string()))?;
            if let Some((last, init)) = segments.split_last() {
                path.extend(init);
                // The `.json` suffix selects the REST representation.
                path.push(&format!("{last}.json"));
            }
        }
        if let Some(token) = &self.auth_token {
            url.query_pairs_mut().append_pair("auth", token);
        }
        Ok(url)
    }

    async fn read<T: DeserializeOwned>(&self, segments: &[&str]) -> StoreResult<Option<T>> {
        let node = segments.join("/");
        let url = self.node_url(segments)?;

        tracing::debug!(node = %node, "Reading store node");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| StoreError::Http {
                node: node.clone(),
                source,
            })?;

        let body = response.text().await.map_err(|source| StoreError::Http {
            node: node.clone(),
            source,
        })?;

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|source| StoreError::Decode {
                node: node.clone(),
                source,
            })?;

        if value.is_null() {
            return Ok(None);
        }

        serde_json::from_value(value)
            .map(Some)
            .map_err(|source| StoreError::Decode { node, source })
    }
}

impl VoterStore for FirebaseStore {
    #[tracing::instrument(skip(self))]
    fn voter<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<RawVoter>> {
        Box::pin(async move { self.read(&[self.voters_node.as_str(), key]).await })
    }

    #[tracing::instrument(skip(self))]
    fn voters(&self) -> StoreFuture<'_, VoterMap> {
        Box::pin(async move {
            Ok(self
                .read::<VoterMap>(&[self.voters_node.as_str()])
                .await?
                .unwrap_or_default())
        })
    }

    #[tracing::instrument(skip(self))]
    fn name_index(&self) -> StoreFuture<'_, Option<NameIndex>> {
        Box::pin(async move { self.read(&[self.name_index_node.as_str()]).await })
    }

    #[tracing::instrument(skip(self))]
    fn name_index_entry<'a>(&'a self, name: &'a str) -> StoreFuture<'a, Option<PhoneKeySet>> {
        Box::pin(async move { self.read(&[self.name_index_node.as_str(), name]).await })
    }
}
