// Copyright (c) 2025 - Cowboy AI, Inc.
//! HTTP record store client
//!
//! Speaks the Firebase Realtime Database REST dialect:
//!
//! ```text
//! GET    {base}/{collection}.json        list, object keyed by id (or null)
//! GET    {base}/{collection}/{id}.json   single record (null when absent)
//! POST   {base}/{collection}.json        create, returns {"name": "<id>"}
//! PATCH  {base}/{collection}/{id}.json   partial merge
//! PUT    {base}/{collection}/{id}.json   full replace
//! DELETE {base}/{collection}/{id}.json   delete
//! ```
//!
//! Credentials are attached as the `auth` query parameter when configured;
//! acquiring them is the auth collaborator's job, not this client's.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::errors::{CatalogError, CatalogResult};

use super::{RawRecords, RecordStore};

/// Remote record store client
#[derive(Debug, Clone)]
pub struct HttpRecordStore {
    config: StoreConfig,
    client: Client,
}

impl HttpRecordStore {
    /// Create a client for the configured store
    pub fn new(config: StoreConfig) -> CatalogResult<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| CatalogError::Network(format!("failed to create HTTP client: {e}")))?;

        info!(
            base_url = %config.base_url,
            collection = %config.collection,
            "record store client ready"
        );

        Ok(Self { config, client })
    }

    /// Resource URL for the collection or a single record
    fn resource_url(&self, id: Option<&str>) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let mut url = match id {
            Some(id) => format!(
                "{base}/{}/{}.json",
                self.config.collection,
                urlencoding::encode(id)
            ),
            None => format!("{base}/{}.json", self.config.collection),
        };

        if let Some(token) = &self.config.auth {
            url.push_str("?auth=");
            url.push_str(&urlencoding::encode(token));
        }

        url
    }

    /// Read a JSON body from a checked response
    async fn read_json(response: Response) -> CatalogResult<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Network(format!(
                "store returned {status}: {body}"
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| CatalogError::MalformedData(format!("unreadable store response: {e}")))
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn list(&self) -> CatalogResult<RawRecords> {
        let url = self.resource_url(None);
        debug!(collection = %self.config.collection, "listing records");

        let response = self.client.get(&url).send().await?;
        match Self::read_json(response).await? {
            // an empty collection comes back as JSON null
            Value::Null => Ok(RawRecords::new()),
            Value::Object(records) => Ok(records),
            other => Err(CatalogError::MalformedData(format!(
                "expected id-keyed object from list, got {other}"
            ))),
        }
    }

    async fn get(&self, id: &str) -> CatalogResult<Option<Value>> {
        let url = self.resource_url(Some(id));
        debug!(%id, "fetching record");

        let response = self.client.get(&url).send().await?;
        match Self::read_json(response).await? {
            Value::Null => Ok(None),
            record => Ok(Some(record)),
        }
    }

    async fn create(&self, record: Value) -> CatalogResult<String> {
        let url = self.resource_url(None);
        debug!(collection = %self.config.collection, "creating record");

        let response = self.client.post(&url).json(&record).send().await?;
        let body = Self::read_json(response).await?;

        // the store mints the id and returns it as {"name": "<id>"}
        match body.get("name").and_then(Value::as_str) {
            Some(id) if !id.is_empty() => {
                debug!(%id, "record created");
                Ok(id.to_string())
            }
            _ => Err(CatalogError::MalformedData(format!(
                "create response carried no id: {body}"
            ))),
        }
    }

    async fn patch(&self, id: &str, fields: Value) -> CatalogResult<()> {
        let url = self.resource_url(Some(id));
        debug!(%id, "patching record");

        let response = self.client.patch(&url).json(&fields).send().await?;
        Self::read_json(response).await?;
        Ok(())
    }

    async fn put(&self, id: &str, record: Value) -> CatalogResult<()> {
        let url = self.resource_url(Some(id));
        debug!(%id, "replacing record");

        let response = self.client.put(&url).json(&record).send().await?;
        Self::read_json(response).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> CatalogResult<()> {
        let url = self.resource_url(Some(id));
        debug!(%id, "deleting record");

        let response = self.client.delete(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Network(format!(
                "store returned {status}: {body}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(config: StoreConfig) -> HttpRecordStore {
        HttpRecordStore::new(config).expect("client should build")
    }

    #[test]
    fn test_collection_url() {
        let store = store(StoreConfig::new("https://db.example.test/"));
        assert_eq!(
            store.resource_url(None),
            "https://db.example.test/cities.json"
        );
    }

    #[test]
    fn test_record_url_escapes_id() {
        let store = store(StoreConfig::new("https://db.example.test"));
        assert_eq!(
            store.resource_url(Some("a/b c")),
            "https://db.example.test/cities/a%2Fb%20c.json"
        );
    }

    #[test]
    fn test_auth_param_attached() {
        let store = store(StoreConfig::new("https://db.example.test").with_auth("t&k"));
        assert_eq!(
            store.resource_url(Some("c1")),
            "https://db.example.test/cities/c1.json?auth=t%26k"
        );
    }
}
