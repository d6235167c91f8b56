//! Read-only catalogs of connection, datastream and destination types
//!
//! Every type id the CRUD operations take comes from one of these listings.
//! The `query_*` lookups return the first page of matches; the
//! `query_all_*` variants walk every page.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::common::{null_as_default, Page, QueryParams};
use super::error::ApiError;
use super::path::ApiPath;
use super::Client;

const CONNECTION_TYPES: &str = "connection-types";
const DATASTREAM_TYPES: &str = "datastream-types";
const DESTINATION_TYPES: &str = "target-types";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionType {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub url: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub is_deprecated: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub logo_url: String,
    pub create_url: String,
    /// URL of this type's connection collection.
    pub connections: String,
}

/// Authorizations are listed from the connection type catalog.
pub type AuthorizationType = ConnectionType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatastreamType {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub url: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub is_deprecated: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub logo_url: String,
    pub create_url: String,
    pub datastreams: String,
    #[serde(default)]
    pub connection_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationType {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub url: String,
    #[serde(rename = "targets")]
    pub destinations: String,
}

impl Client {
    pub async fn query_connection_types(
        &self,
        search: &str,
    ) -> Result<Vec<ConnectionType>, ApiError> {
        self.query_first_page(CONNECTION_TYPES, search).await
    }

    pub async fn query_authorization_types(
        &self,
        search: &str,
    ) -> Result<Vec<AuthorizationType>, ApiError> {
        self.query_first_page(CONNECTION_TYPES, search).await
    }

    pub async fn query_datastream_types(
        &self,
        search: &str,
    ) -> Result<Vec<DatastreamType>, ApiError> {
        self.query_first_page(DATASTREAM_TYPES, search).await
    }

    pub async fn query_destination_types(
        &self,
        search: &str,
    ) -> Result<Vec<DestinationType>, ApiError> {
        self.query_first_page(DESTINATION_TYPES, search).await
    }

    pub async fn query_all_connection_types(
        &self,
        search: &str,
    ) -> Result<Vec<ConnectionType>, ApiError> {
        self.read_all(&ApiPath::root(CONNECTION_TYPES), Some(&QueryParams::search(search)))
            .await
    }

    pub async fn query_all_authorization_types(
        &self,
        search: &str,
    ) -> Result<Vec<AuthorizationType>, ApiError> {
        self.query_all_connection_types(search).await
    }

    pub async fn query_all_datastream_types(
        &self,
        search: &str,
    ) -> Result<Vec<DatastreamType>, ApiError> {
        self.read_all(&ApiPath::root(DATASTREAM_TYPES), Some(&QueryParams::search(search)))
            .await
    }

    pub async fn query_all_destination_types(
        &self,
        search: &str,
    ) -> Result<Vec<DestinationType>, ApiError> {
        self.read_all(&ApiPath::root(DESTINATION_TYPES), Some(&QueryParams::search(search)))
            .await
    }

    async fn query_first_page<T: DeserializeOwned>(
        &self,
        collection: &str,
        search: &str,
    ) -> Result<Vec<T>, ApiError> {
        let page: Option<Page<T>> = self
            .read(&ApiPath::root(collection), Some(&QueryParams::search(search)))
            .await?;

        let Some(page) = page else {
            return Ok(Vec::new());
        };
        if page.next.as_deref().is_some_and(|next| !next.is_empty()) {
            tracing::debug!(
                "{} search {:?} matched {} entries, returning the first {}",
                collection,
                search,
                page.count,
                page.results.len()
            );
        }
        Ok(page.results)
    }
}
