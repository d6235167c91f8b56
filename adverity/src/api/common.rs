//! Common types and utilities for the Adverity API

use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

/// One page of a paginated collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: i64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    pub fn add_optional<K: Into<String>, V: ToString>(mut self, key: K, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.params.push((key.into(), v.to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Replace the query of `url` with these parameters.
    pub fn apply(&self, url: &mut Url) {
        if self.params.is_empty() {
            url.set_query(None);
            return;
        }
        url.query_pairs_mut()
            .clear()
            .extend_pairs(self.params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }

    /// Query for the `*-types` catalog listings.
    pub fn search(term: &str) -> Self {
        Self::new().add("search", term)
    }
}

/// Deserialize a required field, mapping an explicit `null` to the type's default.
///
/// The API sends `null` for unset strings and ids on otherwise fully
/// populated objects.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
