//! YoBit REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::{Credentials, IncrementNonce, NonceCounter, NonceUpdatePolicy, sign_request};
use crate::error::YobitError;
use crate::rest::endpoints::{TRADE_API, YOBIT_BASE_URL};

/// Header carrying the API key.
pub const KEY_HEADER: &str = "key";
/// Header carrying the body signature.
pub const SIGN_HEADER: &str = "sign";

/// The YoBit REST API client.
///
/// Public market-data methods work without credentials. Trade API methods
/// sign every request with the configured credentials and a fresh nonce.
///
/// Clones share the same nonce counter, so they can be used from several
/// tasks at once without ever sending the same nonce twice.
///
/// # Example
///
/// ```rust,no_run
/// use yobit_api_client::rest::YobitRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = YobitRestClient::new()?;
///     let ticker = client.get_ticker(&["btc_usd", "eth_btc"]).await?;
///     println!("Ticker: {:?}", ticker);
///     Ok(())
/// }
/// ```
///
/// For the trade API, provide credentials:
///
/// ```rust,no_run
/// use yobit_api_client::auth::Credentials;
/// use yobit_api_client::rest::YobitRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = YobitRestClient::builder()
///         .credentials(Credentials::new("api_key", "api_secret"))
///         .build()?;
///
///     let info = client.get_account_info().await?;
///     println!("Account: {:?}", info);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct YobitRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<Credentials>>,
    nonce: Arc<NonceCounter>,
    settings: Arc<HttpSettings>,
    proxy: Option<String>,
}

/// A fully prepared trade API request.
///
/// `body` is the exact string that was signed and that is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// URL-encoded form body.
    pub body: String,
    /// Value of the `key` header.
    pub key: String,
    /// Value of the `sign` header: hex HMAC-SHA512 of `body`.
    pub sign: String,
    /// Nonce embedded in `body`.
    pub nonce: u64,
}

#[derive(Debug)]
struct HttpSettings {
    user_agent: String,
    timeout: Option<Duration>,
}

impl YobitRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`YobitRestClient::builder()`] to configure credentials for the trade API.
    pub fn new() -> Result<Self, YobitError> {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> YobitRestClientBuilder {
        YobitRestClientBuilder::new()
    }

    /// Return a client that sends its requests through `proxy`.
    ///
    /// The returned client shares credentials and nonce state with `self`,
    /// which makes it usable as a per-call proxy override.
    ///
    /// Each call builds a new HTTP client with its own connection pool.
    /// Keep the returned client around when sending several requests
    /// through the same proxy.
    pub fn with_proxy(&self, proxy: &str) -> Result<Self, YobitError> {
        Ok(Self {
            http_client: build_http_client(&self.settings, Some(proxy))?,
            proxy: Some(proxy.to_string()),
            ..self.clone()
        })
    }

    /// The proxy this client routes through, if any.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// The nonce counter shared by this client and its clones.
    pub fn nonce_counter(&self) -> &Arc<NonceCounter> {
        &self.nonce
    }

    /// Make a public GET request.
    pub(crate) async fn public_get<T>(&self, endpoint: &str) -> Result<T, YobitError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.http_client.get(&url).send().await?;
        self.parse_response(response).await
    }

    /// Make a public GET request with query parameters.
    pub(crate) async fn public_get_with_params<T, Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<T, YobitError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let query_string = serde_urlencoded::to_string(params)?;
        let url = if query_string.is_empty() {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.base_url, endpoint, query_string)
        };
        let response = self.http_client.get(&url).send().await?;
        self.parse_response(response).await
    }

    /// Nonce, encode and sign a trade API call without sending it.
    ///
    /// This consumes a nonce exactly like a sent request does.
    pub async fn sign_request<P>(&self, method: &str, params: &P) -> Result<SignedRequest, YobitError>
    where
        P: Serialize + ?Sized,
    {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(YobitError::MissingCredentials)?;

        // Encode first so a bad parameter set does not burn a nonce.
        let encoded_params = serde_urlencoded::to_string(params)?;
        let nonce = self.nonce.advance().await?;
        let body = build_form_body(method, &encoded_params, nonce)?;
        let sign = sign_request(credentials, &body)?;

        tracing::debug!(method, nonce, "signed trade API request");

        Ok(SignedRequest {
            body,
            key: credentials.api_key.clone(),
            sign,
            nonce,
        })
    }

    /// Make a signed trade API request.
    ///
    /// `params` are serialized in declaration order between `method` and
    /// `nonce`. The response is parsed into `T` as is: YoBit's `success` flag
    /// is not inspected here.
    pub async fn private_request<T, P>(&self, method: &str, params: &P) -> Result<T, YobitError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let signed = self.sign_request(method, params).await?;

        let url = format!("{}{}", self.base_url, TRADE_API);
        let response = self
            .http_client
            .post(&url)
            .header(KEY_HEADER, &signed.key)
            .header(SIGN_HEADER, &signed.sign)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(signed.body)
            .send()
            .await?;

        self.parse_response(response).await
    }

    /// Parse a response from the YoBit API.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, YobitError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(YobitError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Failed to parse YoBit response: {}", e);
            YobitError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
        })
    }
}

/// Build `method=<method>&<params>&nonce=<nonce>`.
fn build_form_body(method: &str, encoded_params: &str, nonce: u64) -> Result<String, YobitError> {
    let mut body = serde_urlencoded::to_string([("method", method)].as_slice())?;
    if !encoded_params.is_empty() {
        body.push('&');
        body.push_str(encoded_params);
    }
    body.push_str("&nonce=");
    body.push_str(&nonce.to_string());
    Ok(body)
}

fn build_http_client(
    settings: &HttpSettings,
    proxy: Option<&str>,
) -> Result<ClientWithMiddleware, YobitError> {
    let mut headers = HeaderMap::new();
    let header_value = HeaderValue::from_str(&settings.user_agent)
        .unwrap_or_else(|_| HeaderValue::from_static("yobit-api-client"));
    headers.insert(USER_AGENT, header_value);

    let mut builder = reqwest::Client::builder().default_headers(headers);
    if let Some(timeout) = settings.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(proxy) = proxy {
        builder = builder.proxy(reqwest::Proxy::all(proxy)?);
    }

    // No retry middleware: replaying a signed request would reuse its nonce.
    Ok(ClientBuilder::new(builder.build()?)
        .with(TracingMiddleware::default())
        .build())
}

impl std::fmt::Debug for YobitRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YobitRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .field("proxy", &self.proxy)
            .finish()
    }
}

/// Builder for [`YobitRestClient`].
pub struct YobitRestClientBuilder {
    base_url: String,
    credentials: Option<Credentials>,
    initial_nonce: Option<u64>,
    nonce_policy: Option<Arc<dyn NonceUpdatePolicy>>,
    nonce_counter: Option<Arc<NonceCounter>>,
    proxy: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl YobitRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: YOBIT_BASE_URL.to_string(),
            credentials: None,
            initial_nonce: None,
            nonce_policy: None,
            nonce_counter: None,
            proxy: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the credentials for trade API requests.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the nonce to count up from. Defaults to the current Unix time in seconds.
    pub fn initial_nonce(mut self, nonce: u64) -> Self {
        self.initial_nonce = Some(nonce);
        self
    }

    /// Set a custom nonce update policy. Defaults to [`IncrementNonce`].
    pub fn nonce_policy(mut self, policy: Arc<dyn NonceUpdatePolicy>) -> Self {
        self.nonce_policy = Some(policy);
        self
    }

    /// Use an existing nonce counter, e.g. one shared with another client
    /// for the same key. Overrides `initial_nonce` and `nonce_policy`.
    pub fn nonce_counter(mut self, counter: Arc<NonceCounter>) -> Self {
        self.nonce_counter = Some(counter);
        self
    }

    /// Route all requests through a proxy (`http://`, `https://` or `socks5://` URL).
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// Fails if the base URL or the proxy URL cannot be parsed.
    pub fn build(self) -> Result<YobitRestClient, YobitError> {
        url::Url::parse(&self.base_url)?;

        let settings = HttpSettings {
            user_agent: self
                .user_agent
                .unwrap_or_else(|| format!("yobit-api-client/{}", env!("CARGO_PKG_VERSION"))),
            timeout: self.timeout,
        };
        let http_client = build_http_client(&settings, self.proxy.as_deref())?;

        let nonce = match self.nonce_counter {
            Some(counter) => counter,
            None => {
                let policy = self.nonce_policy.unwrap_or_else(|| Arc::new(IncrementNonce));
                Arc::new(match self.initial_nonce {
                    Some(initial) => NonceCounter::new(initial, policy),
                    None => NonceCounter::starting_now(policy),
                })
            }
        };

        Ok(YobitRestClient {
            http_client,
            base_url: self.base_url,
            credentials: self.credentials.map(Arc::new),
            nonce,
            settings: Arc::new(settings),
            proxy: self.proxy,
        })
    }
}

impl Default for YobitRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
