//! Generic create/read/update/delete verbs over typed requests and responses

use reqwest::Method;
use serde::de::DeserializeOwned;
use std::any::type_name;
use std::collections::HashSet;

use super::common::{Page, QueryParams};
use super::error::ApiError;
use super::parameters::RequestBody;
use super::path::ApiPath;
use super::Client;

impl Client {
    /// POST `resource` to `path`. An empty response body yields `Ok(None)`.
    pub async fn create<Req, Resp>(
        &self,
        path: &ApiPath,
        resource: &Req,
        query: Option<&QueryParams>,
    ) -> Result<Option<Resp>, ApiError>
    where
        Req: RequestBody + ?Sized,
        Resp: DeserializeOwned,
    {
        let body = marshal("create", resource)?;
        let response = self
            .do_request(Method::POST, path, Some(body), query)
            .await?;
        unmarshal("create", &response)
    }

    pub async fn read<Resp>(
        &self,
        path: &ApiPath,
        query: Option<&QueryParams>,
    ) -> Result<Option<Resp>, ApiError>
    where
        Resp: DeserializeOwned,
    {
        let response = self.do_request(Method::GET, path, None, query).await?;
        unmarshal("read", &response)
    }

    /// PATCH `resource` to `path`; only the fields present in the body change.
    pub async fn update<Req, Resp>(
        &self,
        path: &ApiPath,
        resource: &Req,
        query: Option<&QueryParams>,
    ) -> Result<Option<Resp>, ApiError>
    where
        Req: RequestBody + ?Sized,
        Resp: DeserializeOwned,
    {
        let body = marshal("update", resource)?;
        let response = self
            .do_request(Method::PATCH, path, Some(body), query)
            .await?;
        unmarshal("update", &response)
    }

    /// DELETE `path`. The usual 204 reply has no body and yields `Ok(None)`.
    pub async fn delete<Resp>(
        &self,
        path: &ApiPath,
        query: Option<&QueryParams>,
    ) -> Result<Option<Resp>, ApiError>
    where
        Resp: DeserializeOwned,
    {
        let response = self.do_request(Method::DELETE, path, None, query).await?;
        unmarshal("delete", &response)
    }

    /// GET every page of a collection, following `next` links.
    ///
    /// Links must stay on the endpoint's origin; the token is never sent
    /// elsewhere. A link to a page already fetched ends the walk.
    pub async fn read_all<T>(
        &self,
        path: &ApiPath,
        query: Option<&QueryParams>,
    ) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let mut url = self.build_url(path, query)?;
        let mut visited = HashSet::new();
        let mut results = Vec::new();

        loop {
            let response = self.execute(Method::GET, url.clone(), None).await?;
            visited.insert(url);
            let Some(page) = unmarshal::<Page<T>>("read", &response)? else {
                break;
            };
            results.extend(page.results);

            url = match page.next.as_deref() {
                Some(next) if !next.is_empty() => self.resolve_page_link(next)?,
                _ => break,
            };
            if visited.contains(&url) {
                tracing::debug!("Page {} was already fetched, stopping", url);
                break;
            }
        }

        Ok(results)
    }

    fn resolve_page_link(&self, link: &str) -> Result<url::Url, ApiError> {
        let url = self.resolve(link)?;
        if url.origin() != self.endpoint().origin() {
            return Err(ApiError::ForeignPageLink(link.to_string()));
        }
        Ok(url)
    }
}

fn marshal<Req: RequestBody + ?Sized>(
    operation: &'static str,
    resource: &Req,
) -> Result<Vec<u8>, ApiError> {
    resource.to_body().map_err(|source| ApiError::Marshal {
        operation,
        type_name: type_name::<Req>(),
        source,
    })
}

fn unmarshal<Resp: DeserializeOwned>(
    operation: &'static str,
    body: &[u8],
) -> Result<Option<Resp>, ApiError> {
    if body.is_empty() {
        return Ok(None);
    }

    // Bodies can echo connection credentials; only their size is logged.
    tracing::debug!("API response body: {} bytes", body.len());

    serde_json::from_slice(body).map(Some).map_err(|source| {
        tracing::error!(
            "Failed to deserialize {} response into {}: {}",
            operation,
            type_name::<Resp>(),
            source
        );
        ApiError::Unmarshal {
            operation,
            type_name: type_name::<Resp>(),
            source,
        }
    })
}
