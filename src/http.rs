//! Transport primitives for authenticated API dispatch.
//!
//! The module exposes [`ApiHttpClient`] so downstream crates can integrate custom HTTP stacks:
//! the client prepares a complete [`ApiRequest`] (full URL, authentication header, payload) and
//! the transport's only job is to execute it and hand back the raw status + body. Network-level
//! failures must be surfaced verbatim as [`TransportError`] values; transports never retry.

// self
use crate::{_prelude::*, error::TransportError};

/// HTTP methods used by the OpenFIGI v3 API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiMethod {
	/// Used by the mapping-values enumeration endpoint.
	Get,
	/// Used by the filter, search, and mapping endpoints.
	Post,
}

/// Fully prepared wire request handed to an [`ApiHttpClient`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
	/// HTTP method for the target resource.
	pub method: ApiMethod,
	/// Complete URL (base URL + resource path) to dispatch against.
	pub url: Url,
	/// Header name/value pairs, already composed by the client.
	pub headers: Vec<(String, String)>,
	/// Encoded JSON payload; empty for GET requests.
	pub body: Vec<u8>,
}
impl ApiRequest {
	/// Creates a bodiless GET request for the given URL.
	pub fn get(url: Url) -> Self {
		Self { method: ApiMethod::Get, url, headers: Vec::new(), body: Vec::new() }
	}

	/// Creates a POST request carrying the given encoded payload.
	pub fn post(url: Url, body: Vec<u8>) -> Self {
		Self { method: ApiMethod::Post, url, headers: Vec::new(), body }
	}

	/// Appends a header pair.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));

		self
	}
}

/// Raw response produced by a transport before any classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
	/// Numeric HTTP status code.
	pub status: u16,
	/// Unparsed response body bytes.
	pub body: Vec<u8>,
}
impl RawResponse {
	/// Returns `true` when the status falls inside the 2xx success range.
	pub const fn is_success(&self) -> bool {
		matches!(self.status, 200..=299)
	}
}

/// Boxed future returned by [`ApiHttpClient::execute`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<RawResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing prepared API requests.
///
/// The trait is the crate's only dependency on an HTTP stack. Implementations must be
/// `Send + Sync + 'static` so one instance can sit behind `Arc` and serve any number of
/// concurrent callers; connection reuse is the transport's concern, not the client's.
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Executes the prepared request, propagating network failures as [`TransportError`].
	fn execute(&self, request: ApiRequest) -> TransportFuture<'_>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl std::ops::Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiHttpClient for ReqwestHttpClient {
	fn execute(&self, request: ApiRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let mut builder = match request.method {
				ApiMethod::Get => client.get(request.url),
				ApiMethod::Post => client.post(request.url).body(request.body),
			};

			for (name, value) in &request.headers {
				builder = builder.header(name.as_str(), value.as_str());
			}

			let response = builder.send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(TransportError::from)?.to_vec();

			Ok(RawResponse { status, body })
		})
	}
}
