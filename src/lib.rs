//! Typed async client for the OpenFIGI financial-instrument lookup API, with rate-limited
//! dispatch, lenient JSON decoding, and deterministic typed errors.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod limit;
pub mod model;
pub mod obs;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{client::Client, http::ReqwestHttpClient, limit::RateLimiter};

	/// Client type alias used by reqwest-backed integration tests.
	pub type ReqwestTestClient = Client<ReqwestHttpClient>;

	/// Builds a rate limiter generous enough that tests never stall on permits.
	pub fn unthrottled_rate_limiter() -> RateLimiter {
		RateLimiter::new(10_000, Duration::from_secs(1))
			.expect("Failed to build unthrottled rate limiter for tests.")
	}

	/// Constructs a [`Client`] aimed at a mock server with an effectively unlimited quota.
	pub fn build_reqwest_test_client(base_url: &str, api_key: &str) -> ReqwestTestClient {
		Client::new(api_key)
			.with_base_url(base_url)
			.expect("Failed to parse mock server base URL for tests.")
			.with_rate_limiter(unthrottled_rate_limiter())
	}

	/// Constructs a [`Client`] aimed at a mock server with an explicit quota.
	pub fn build_throttled_test_client(
		base_url: &str,
		api_key: &str,
		limit: u32,
		window: Duration,
	) -> ReqwestTestClient {
		Client::new(api_key)
			.with_base_url(base_url)
			.expect("Failed to parse mock server base URL for tests.")
			.with_rate_limiter(
				RateLimiter::new(limit, window)
					.expect("Failed to build throttled rate limiter for tests."),
			)
	}
}

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
		time::Duration,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use tokio_util::sync::CancellationToken;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use tokio_util;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};
