//! Client-level error types shared across the request pipeline.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// The caller's cancellation token fired before the request completed; no HTTP call is in
	/// flight once this is returned.
	#[error("Request was cancelled before completion.")]
	Cancelled,
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The API answered with a status outside the success range.
	#[error(transparent)]
	Response(#[from] ResponseStatusError),
	/// The API answered with a success status but a body that is not valid JSON.
	#[error(transparent)]
	Decode(#[from] DecodeError),
}

/// Configuration and validation failures raised while assembling a request.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base URL cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Resource path cannot be joined onto the base URL.
	#[error("Resource path cannot be joined onto the base URL.")]
	InvalidResourcePath {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Rate limiter quota does not allow at least one request per window.
	#[error("Rate limiter quota must allow at least one request per non-zero window.")]
	InvalidQuota,
	/// Request payload could not be serialized to JSON.
	#[error("Request payload could not be serialized to JSON.")]
	EncodeRequest {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Transport-level failures (network, IO); never retried.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Non-2xx status answered by the API; the body is not inspected further.
///
/// The message is deterministic for a given URL and status so callers can match it exactly.
#[derive(Debug, ThisError)]
#[error("response error for {url}: unexpected status: {status}")]
pub struct ResponseStatusError {
	/// Full URL the request was issued against (base URL + resource path).
	pub url: Url,
	/// Resource path identifying the API operation.
	pub path: String,
	/// Numeric HTTP status code.
	pub status: u16,
}

/// Success status paired with a body that failed to parse as JSON; no partial result exists.
#[derive(Debug, ThisError)]
#[error("API returned malformed JSON.")]
pub struct DecodeError {
	/// Structured parsing failure, including the path at which decoding stopped.
	#[source]
	pub source: serde_path_to_error::Error<serde_json::Error>,
	/// HTTP status code of the response that carried the malformed body.
	pub status: u16,
}
