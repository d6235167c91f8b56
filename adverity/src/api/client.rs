use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use std::fmt;
use std::sync::Arc;
use url::Url;

use super::common::QueryParams;
use super::config::ClientConfig;
use super::error::ApiError;
use super::path::ApiPath;

pub const ALLOWED_METHODS: &[&str] = &["OPTIONS", "GET", "POST", "PUT", "PATCH", "DELETE"];
pub const EXPECTED_STATUS_CODES: &[u16] = &[200, 201, 202, 204];

const API_PATH: &str = "api";

/// Adverity API client
///
/// Cloning is cheap and clones share the transport, including its cookie
/// store. Build separate clients when independent sessions are needed.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    endpoint: Url,
    auth_header: String,
}

impl Client {
    /// Create a new API client with the default timeout
    pub fn new(instance_url: &str, auth_token: &str) -> Result<Self, ApiError> {
        Self::with_config(ClientConfig::new(instance_url, auth_token))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, ApiError> {
        let endpoint = api_endpoint(&config.instance_url)?;
        let http_client = config.build_http_client()?;

        tracing::info!("Building API client for {}", endpoint);

        Ok(Self {
            inner: Arc::new(ClientInner {
                http_client,
                endpoint,
                auth_header: format!("Token {}", config.auth_token),
            }),
        })
    }

    /// Base endpoint every relative path is resolved against, always ending in `/`.
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    pub(crate) fn build_url(
        &self,
        path: &ApiPath,
        query: Option<&QueryParams>,
    ) -> Result<Url, ApiError> {
        let mut url = self.resolve(&path.to_string())?;
        if let Some(query) = query {
            query.apply(&mut url);
        }
        Ok(url)
    }

    /// Resolve `link` (relative or absolute) against the endpoint.
    pub(crate) fn resolve(&self, link: &str) -> Result<Url, ApiError> {
        self.inner
            .endpoint
            .join(link)
            .map_err(|source| ApiError::InvalidLink {
                link: link.to_string(),
                source,
            })
    }

    /// Perform one authenticated exchange and return the raw response body.
    ///
    /// Fails before any network I/O when `method` is not one of
    /// [`ALLOWED_METHODS`], and after reading the body when the status is not
    /// one of [`EXPECTED_STATUS_CODES`].
    pub async fn do_request(
        &self,
        method: Method,
        path: &ApiPath,
        body: Option<Vec<u8>>,
        query: Option<&QueryParams>,
    ) -> Result<Vec<u8>, ApiError> {
        check_method(&method)?;
        let url = self.build_url(path, query)?;
        self.execute(method, url, body).await
    }

    pub(crate) async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, ApiError> {
        check_method(&method)?;

        tracing::debug!("{} {}", method, url);

        let mut request = self
            .inner
            .http_client
            .request(method, url)
            .header(AUTHORIZATION, &self.inner.auth_header);

        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        tracing::debug!("Response status: {}", status);

        if !EXPECTED_STATUS_CODES.contains(&status) {
            return Err(ApiError::UnexpectedStatus {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
                expected: EXPECTED_STATUS_CODES,
            });
        }

        Ok(bytes.to_vec())
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.inner.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

fn check_method(method: &Method) -> Result<(), ApiError> {
    if ALLOWED_METHODS.contains(&method.as_str()) {
        Ok(())
    } else {
        Err(ApiError::UnsupportedMethod {
            method: method.to_string(),
            allowed: ALLOWED_METHODS,
        })
    }
}

/// `<instance_url>/api/`. A bare host is taken to mean https.
fn api_endpoint(instance_url: &str) -> Result<Url, ApiError> {
    let mut url = match Url::parse(instance_url) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{}", instance_url))?
        }
        Err(e) => return Err(e.into()),
    };

    url.set_query(None);
    url.set_fragment(None);

    // The trailing empty segment keeps `api` when relative paths are joined on.
    url.path_segments_mut()
        .map_err(|_| ApiError::NotABaseUrl(instance_url.to_string()))?
        .pop_if_empty()
        .push(API_PATH)
        .push("");

    Ok(url)
}
