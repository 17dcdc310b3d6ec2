//! Request executor shared by every API operation.
//!
//! A [`Client`] owns the configuration for one API principal: base URL, API key, rate limiter,
//! and HTTP transport. It is read-only after construction and safely callable from any number of
//! concurrent tasks; the limiter is the only shared mutable resource. Each logical operation
//! issues exactly one outbound HTTP call (none when permit acquisition is cancelled) and a
//! failed call is reported, never repeated.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	error::{ConfigError, DecodeError, ResponseStatusError},
	http::{ApiHttpClient, ApiRequest, RawResponse},
	limit::RateLimiter,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Production base URL of the OpenFIGI API.
pub const DEFAULT_BASE_URL: &str = "https://api.openfigi.com";
/// Request header carrying the API key.
pub const API_KEY_HEADER: &str = "X-OPENFIGI-APIKEY";

/// Executes typed operations against one OpenFIGI endpoint configuration.
///
/// Construct via [`Client::new`] for the default reqwest transport, or
/// [`Client::with_http_client`] to supply a custom [`ApiHttpClient`]. Every client instance owns
/// an independent [`RateLimiter`], so separate clients never cross-throttle each other.
#[derive(Clone)]
pub struct Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// HTTP transport used for every outbound request.
	pub http_client: Arc<C>,
	/// Token-bucket limiter consulted before every outbound request.
	pub limiter: RateLimiter,
	/// Base URL resource paths are joined onto.
	pub base_url: Url,
	api_key: String,
}
impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	///
	/// Starts from the production base URL and the documented keyed-client quota; use
	/// [`Client::with_base_url`] and [`Client::with_rate_limiter`] to override either.
	pub fn with_http_client(api_key: impl Into<String>, http_client: impl Into<Arc<C>>) -> Self {
		Self {
			http_client: http_client.into(),
			limiter: RateLimiter::with_default_quota(),
			base_url: Url::parse(DEFAULT_BASE_URL).expect("Default base URL is well-formed."),
			api_key: api_key.into(),
		}
	}

	/// Replaces the base URL, e.g. to aim at a sandbox or mock server.
	pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Result<Self> {
		self.base_url = Url::parse(base_url.as_ref())
			.map_err(|source| ConfigError::InvalidBaseUrl { source })?;

		Ok(self)
	}

	/// Replaces the rate limiter.
	pub fn with_rate_limiter(mut self, limiter: RateLimiter) -> Self {
		self.limiter = limiter;

		self
	}

	/// Executes one POST operation: permit, encode, dispatch, decode.
	pub(crate) async fn execute_post<T, B>(
		&self,
		cancel: &CancellationToken,
		path: &str,
		payload: &B,
	) -> Result<T>
	where
		T: DeserializeOwned,
		B: ?Sized + Serialize,
	{
		self.limiter.acquire(cancel).await?;

		let url = self.resource_url(path)?;
		let body =
			serde_json::to_vec(payload).map_err(|source| ConfigError::EncodeRequest { source })?;
		let request = self.authenticated(
			ApiRequest::post(url.clone(), body).with_header("content-type", "application/json"),
		);
		let response = self.dispatch(cancel, request).await?;

		decode_body(url, path, response)
	}

	/// Executes one GET operation: permit, dispatch, decode.
	pub(crate) async fn execute_get<T>(&self, cancel: &CancellationToken, path: &str) -> Result<T>
	where
		T: DeserializeOwned,
	{
		self.limiter.acquire(cancel).await?;

		let url = self.resource_url(path)?;
		let request = self.authenticated(ApiRequest::get(url.clone()));
		let response = self.dispatch(cancel, request).await?;

		decode_body(url, path, response)
	}

	fn resource_url(&self, path: &str) -> Result<Url> {
		self.base_url
			.join(path)
			.map_err(|source| ConfigError::InvalidResourcePath { source }.into())
	}

	fn authenticated(&self, request: ApiRequest) -> ApiRequest {
		// Keyless operation is allowed by the API, just at a lower quota.
		if self.api_key.is_empty() {
			request
		} else {
			request.with_header(API_KEY_HEADER, self.api_key.clone())
		}
	}

	async fn dispatch(
		&self,
		cancel: &CancellationToken,
		request: ApiRequest,
	) -> Result<RawResponse> {
		match cancel.run_until_cancelled(self.http_client.execute(request)).await {
			Some(response) => Ok(response?),
			None => Err(Error::Cancelled),
		}
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestHttpClient> {
	/// Creates a client backed by a default reqwest transport.
	pub fn new(api_key: impl Into<String>) -> Self {
		Self::with_http_client(api_key, ReqwestHttpClient::default())
	}
}
impl<C> Debug for Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("base_url", &self.base_url.as_str())
			.field("limiter", &self.limiter)
			.field("api_key_set", &!self.api_key.is_empty())
			.finish()
	}
}

/// Classifies a raw response into a typed value or a typed error.
///
/// Non-2xx statuses become [`ResponseStatusError`] without inspecting the body. A success status
/// with syntactically invalid JSON becomes [`DecodeError`]; valid JSON of an unrelated shape
/// decodes leniently into the target type's defaults. Leniency covers the shape only: the body
/// must be exactly one JSON document, so trailing bytes after it are a [`DecodeError`] too.
fn decode_body<T>(url: Url, path: &str, response: RawResponse) -> Result<T>
where
	T: DeserializeOwned,
{
	if !response.is_success() {
		return Err(ResponseStatusError { url, path: path.into(), status: response.status }.into());
	}

	let mut deserializer = serde_json::Deserializer::from_slice(&response.body);
	let decoded = serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| DecodeError { source, status: response.status })?;

	deserializer.end().map_err(|source| DecodeError {
		source: serde_path_to_error::Error::new(serde_path_to_error::Track::new().path(), source),
		status: response.status,
	})?;

	Ok(decoded)
}
