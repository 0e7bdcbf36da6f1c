//! Client layer: sends validation requests and maps HTTP outcomes to typed errors.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use url::Url;

use crate::domain::{
    AddressHint, ApiKey, PhoneNumberInput, VALIDATE_PHONE_PATH, ValidatePhone, ValidationError,
    ValidationResult,
};

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

/// Production host of the GenderAPI service.
pub const DEFAULT_BASE_URL: &str = "https://api.genderapi.io";

/// Statuses the service uses for its own failures or gateway timeouts.
const SERVER_ERROR_STATUSES: [u16; 5] = [500, 502, 503, 504, 408];

const DEFAULT_USER_AGENT: &str = concat!("phone-validator/", env!("CARGO_PKG_VERSION"));

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a Url,
        headers: HeaderMap,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a Url,
        headers: HeaderMap,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url.clone())
                .headers(headers)
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`PhoneValidatorClient`].
///
/// Every failed call returns one of these; there are no partial results.
pub enum PhoneValidatorError {
    /// The service answered 500, 502, 503, 504 or 408.
    #[error("server error or timeout: HTTP {status} - {body}")]
    ServerErrorOrTimeout { status: u16, body: String },

    /// The response body is not a JSON object.
    #[error("invalid response: {0}")]
    InvalidResponse(#[source] Box<dyn StdError + Send + Sync>),

    /// The HTTP exchange itself failed (DNS, connect, TLS, transport timeout, etc).
    #[error("request failed: {0}")]
    RequestFailed(#[source] Box<dyn StdError + Send + Sync>),

    /// Input was rejected before anything was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl PhoneValidatorError {
    /// HTTP status of a [`PhoneValidatorError::ServerErrorOrTimeout`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ServerErrorOrTimeout { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Clone)]
/// Builder for [`PhoneValidatorClient`].
///
/// Use this when you need a different base URL (staging, a proxy, a mock server), a timeout,
/// or your own `reqwest::Client`.
pub struct PhoneValidatorClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl fmt::Debug for PhoneValidatorClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneValidatorClientBuilder")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("http_client", &self.http_client.is_some())
            .finish()
    }
}

impl PhoneValidatorClientBuilder {
    /// Create a builder targeting [`DEFAULT_BASE_URL`].
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            http_client: None,
        }
    }

    /// Override the base URL. Requests go to `{base_url}/api/phone`; a path prefix is kept.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom client is supplied with [`Self::http_client`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom client is supplied with [`Self::http_client`].
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a preconfigured `reqwest::Client`, e.g. one shared with the rest of your application.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build a [`PhoneValidatorClient`].
    ///
    /// Fails with [`PhoneValidatorError::Validation`] for an empty API key or a bad base URL.
    pub fn build(self) -> Result<PhoneValidatorClient, PhoneValidatorError> {
        let api_key = ApiKey::new(self.api_key)?;
        let headers = request_headers(&api_key)?;
        let (base_url, endpoint) = resolve_endpoint(&self.base_url)?;

        let client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT));
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder
                    .build()
                    .map_err(|err| PhoneValidatorError::RequestFailed(Box::new(err)))?
            }
        };

        Ok(PhoneValidatorClient {
            base_url,
            endpoint,
            headers,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level client for the GenderAPI phone validation endpoint.
///
/// One call to [`PhoneValidatorClient::validate`] is one `POST {base_url}/api/phone`.
/// The client keeps no per-call state, so a single instance can be cloned and shared
/// across tasks.
pub struct PhoneValidatorClient {
    base_url: Url,
    endpoint: Url,
    headers: HeaderMap,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for PhoneValidatorClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneValidatorClient")
            .field("base_url", &self.base_url.as_str())
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl PhoneValidatorClient {
    /// Create a client for the production service.
    ///
    /// For more customization, use [`PhoneValidatorClient::builder`].
    pub fn new(api_key: impl Into<String>) -> Result<Self, PhoneValidatorError> {
        Self::builder(api_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: impl Into<String>) -> PhoneValidatorClientBuilder {
        PhoneValidatorClientBuilder::new(api_key)
    }

    /// Base URL this client was configured with.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL of the validation endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Validate and format a phone number.
    ///
    /// `address` is an optional hint (country code such as `US`, country name, or city);
    /// pass `""` for none.
    pub async fn validate(
        &self,
        number: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<ValidationResult, PhoneValidatorError> {
        let request = ValidatePhone::new(PhoneNumberInput::new(number)?, AddressHint::new(address));
        self.validate_request(request).await
    }

    /// Send a typed [`ValidatePhone`] request.
    ///
    /// Errors:
    /// - [`PhoneValidatorError::ServerErrorOrTimeout`] for HTTP 500, 502, 503, 504 and 408,
    /// - [`PhoneValidatorError::InvalidResponse`] when any other response is not a JSON object,
    /// - [`PhoneValidatorError::RequestFailed`] when the request could not be completed.
    ///
    /// Other 4xx statuses are not errors here: the service reports them with a JSON body,
    /// which is returned as the result.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "PhoneValidatorClient::validate",
            skip_all,
            fields(endpoint = %self.endpoint, has_address = !request.address().is_none())
        )
    )]
    pub async fn validate_request(
        &self,
        request: ValidatePhone,
    ) -> Result<ValidationResult, PhoneValidatorError> {
        let body = crate::transport::encode_validate_phone_body(&request)
            .map_err(|err| PhoneValidatorError::RequestFailed(Box::new(err)))?;

        let response = self
            .http
            .post_json(&self.endpoint, self.headers.clone(), body)
            .await
            .map_err(|err| {
                #[cfg(feature = "tracing")]
                warn!(error = %err, "phone validation request failed");
                PhoneValidatorError::RequestFailed(err)
            })?;

        if SERVER_ERROR_STATUSES.contains(&response.status) {
            #[cfg(feature = "tracing")]
            warn!(status = response.status, "phone validation server error or timeout");
            return Err(PhoneValidatorError::ServerErrorOrTimeout {
                status: response.status,
                body: response.body,
            });
        }

        let result = crate::transport::decode_validate_phone_response(&response.body)
            .map_err(|err| PhoneValidatorError::InvalidResponse(Box::new(err)))?;

        #[cfg(feature = "tracing")]
        debug!(status = response.status, fields = result.as_map().len(), "phone validated");

        Ok(result)
    }
}

fn request_headers(api_key: &ApiKey) -> Result<HeaderMap, ValidationError> {
    let mut authorization = HeaderValue::from_str(&format!("Bearer {}", api_key.expose()))
        .map_err(|_| ValidationError::InvalidHeaderValue {
            field: ApiKey::FIELD,
        })?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

fn resolve_endpoint(base_url: &str) -> Result<(Url, Url), ValidationError> {
    let input = base_url.trim();
    let invalid = |reason: String| ValidationError::InvalidBaseUrl {
        input: input.to_owned(),
        reason,
    };

    let base = Url::parse(input).map_err(|err| invalid(err.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", base.scheme())));
    }
    if base.query().is_some() || base.fragment().is_some() {
        return Err(invalid("must not contain a query or fragment".to_owned()));
    }

    let endpoint = format!("{}{}", base.as_str().trim_end_matches('/'), VALIDATE_PHONE_PATH);
    let endpoint = Url::parse(&endpoint).map_err(|err| invalid(err.to_string()))?;
    Ok((base, endpoint))
}
