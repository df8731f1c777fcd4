use reqwest;
use serde;
use serde_json;
use serde_path_to_error;
use std::sync::Arc;
use std::time::Duration;
use thiserror;
use tracing;
use url::Url;

use crate::badges::BadgeService;
use crate::config::ClientConfig;
use crate::errors::{Envelope, ErrorList};
use crate::query;
use crate::shows::ShowService;
use crate::types::Locale;

pub const API_VERSION: &str = "3.0";

const HEADER_VERSION: &str = "X-BetaSeries-Version";
const HEADER_KEY: &str = "X-BetaSeries-Key";
const HEADER_TOKEN: &str = "X-BetaSeries-Token";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failure: {}", .0)]
    RequestFailure(reqwest::Error),
    #[error("request timed out: {}", .0)]
    Timeout(reqwest::Error),
    #[error("unexpected response: code={} body={}", .0, .1)]
    UnexpectedResponse(reqwest::StatusCode, String),
    #[error("invalid response envelope: {}", .0)]
    InvalidEnvelope(serde_json::Error),
    #[error("json decode error: {}", .0)]
    JsonDecode(serde_path_to_error::Error<serde_json::Error>),
    #[error("{}", .0)]
    Rejected(ErrorList),
    #[error("invalid endpoint url: {}", .0)]
    InvalidUrl(url::ParseError),
}

impl ApiError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout(_))
    }

    /// The server side errors, when the call was rejected by the API.
    pub fn rejection(&self) -> Option<&ErrorList> {
        match self {
            ApiError::Rejected(errors) => Some(errors),
            _ => None,
        }
    }

    fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err)
        } else {
            ApiError::RequestFailure(err)
        }
    }
}

/// Shared connection to the API. Cheap to clone, the underlying HTTP client
/// is reference counted.
#[derive(Clone)]
pub struct Client {
    http: Arc<reqwest::Client>,
    base_url: Url,
    user_agent: String,
    api_key: String,
    token: Option<String>,
    locale: Option<Locale>,
    timeout: Duration,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("has_token", &self.token.is_some())
            .field("locale", &self.locale)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Client {
    pub fn new(api_key: &str) -> Self {
        Self::from_config(ClientConfig::new(api_key))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            http: Arc::new(reqwest::Client::new()),
            base_url: with_trailing_slash(config.base_url),
            user_agent: config.user_agent,
            api_key: config.api_key,
            token: config.token,
            locale: config.locale,
            timeout: config.http_timeout,
        }
    }

    pub fn with_http_client(mut self, http: Arc<reqwest::Client>) -> Self {
        self.http = http;
        self
    }

    /// Endpoint paths are resolved under `base_url`, so a path prefix such as
    /// `https://proxy.example/betaseries` is kept.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = with_trailing_slash(base_url);
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Deadline applied to every call made through this client. For a single
    /// call with its own deadline, use a clone:
    /// `client.clone().with_timeout(Duration::from_secs(5)).shows().display(params)`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn locale(&self) -> Option<Locale> {
        self.locale
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn shows(&self) -> ShowService<'_> {
        ShowService::new(self)
    }

    pub fn badges(&self) -> BadgeService<'_> {
        BadgeService::new(self)
    }

    /// `path` is relative to the base url, e.g. `shows/display`.
    pub fn build_url<P: serde::Serialize>(&self, path: &str, params: &P) -> Result<Url, ApiError> {
        let mut url = self.base_url.join(path).map_err(ApiError::InvalidUrl)?;
        let query = query::encode_query(params, self.locale);
        if query.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(query.as_str()));
        }
        Ok(url)
    }

    /// Sends one call and decodes its body into `R`. Every parameter travels
    /// in the query string, whatever the method.
    pub async fn execute<P, R>(&self, method: reqwest::Method, path: &str, params: &P) -> Result<R, ApiError>
    where
        P: serde::Serialize,
        R: serde::de::DeserializeOwned,
    {
        let url = self.build_url(path, params)?;
        tracing::debug!(method = %method, url = %url, "sending request");

        let mut request = self.http
            .request(method.clone(), url)
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(HEADER_VERSION, API_VERSION)
            .header(HEADER_KEY, self.api_key.as_str())
            .timeout(self.timeout);
        if let Some(token) = &self.token {
            request = request.header(HEADER_TOKEN, token.as_str());
        }

        let res = request.send().await.map_err(ApiError::from_transport)?;
        let status = res.status();
        let body = res.text().await.map_err(ApiError::from_transport)?;
        tracing::debug!(method = %method, path, status = status.as_u16(), "received response");

        decode_response(status, body.as_str()).map_err(|err| {
            if let ApiError::Rejected(errors) = &err {
                tracing::warn!(method = %method, path, codes = ?errors.codes(), "request rejected by api");
            }
            err
        })
    }
}

// Url::join replaces the last path segment unless the base ends with a slash.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.cannot_be_a_base() && !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(path.as_str());
    }
    url
}

/// Errors in the body win over the payload and over the status code.
pub(crate) fn decode_response<R: serde::de::DeserializeOwned>(status: reqwest::StatusCode, body: &str) -> Result<R, ApiError> {
    let envelope: Result<Envelope, serde_json::Error> = serde_json::from_str(body);
    if let Ok(envelope) = &envelope {
        if !envelope.errors.is_empty() {
            return Err(ApiError::Rejected(envelope.errors.clone()));
        }
    }
    if !status.is_success() {
        return Err(ApiError::UnexpectedResponse(status, body.to_string()));
    }
    envelope.map_err(ApiError::InvalidEnvelope)?;

    let deserializer = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(deserializer).map_err(ApiError::JsonDecode)
}
