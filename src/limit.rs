//! Client-side token-bucket rate limiting for outbound API calls.
//!
//! Every [`Client`](crate::client::Client) owns one [`RateLimiter`]; separate client instances
//! never cross-throttle each other. The limiter is the only shared mutable state in the request
//! pipeline, and its token accounting is synchronized internally so any number of concurrent
//! callers can wait on it independently.

// std
use std::num::NonZeroU32;
// crates.io
use governor::{
	Quota, RateLimiter as GovernorRateLimiter,
	clock::DefaultClock,
	state::{InMemoryState, direct::NotKeyed},
};
// self
use crate::{_prelude::*, error::ConfigError};

type DirectRateLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Default request quota: the documented OpenFIGI limit for keyed clients.
pub const DEFAULT_RATE_LIMIT: u32 = 25;
/// Default quota window paired with [`DEFAULT_RATE_LIMIT`].
pub const DEFAULT_RATE_WINDOW: Duration = Duration::from_secs(6);

/// Token-bucket limiter bounding the outbound request rate.
///
/// Permits replenish at a steady rate of `limit` per `window` with a burst ceiling of `limit`,
/// so throughput never exceeds the configured quota over any sliding window of the configured
/// interval. Cloning is cheap and shares the same bucket.
#[derive(Clone)]
pub struct RateLimiter {
	limiter: Arc<DirectRateLimiter>,
	limit: u32,
	window: Duration,
}
impl RateLimiter {
	/// Creates a limiter issuing at most `limit` permits over any `window`.
	///
	/// Fails with [`ConfigError::InvalidQuota`] when `limit` is zero or `window` is empty.
	pub fn new(limit: u32, window: Duration) -> Result<Self, ConfigError> {
		let burst = NonZeroU32::new(limit).ok_or(ConfigError::InvalidQuota)?;

		if window.is_zero() {
			return Err(ConfigError::InvalidQuota);
		}

		let period = Duration::from_secs_f64(window.as_secs_f64() / f64::from(limit));
		let quota = Quota::with_period(period).ok_or(ConfigError::InvalidQuota)?.allow_burst(burst);

		Ok(Self { limiter: Arc::new(GovernorRateLimiter::direct(quota)), limit, window })
	}

	/// Creates a limiter with the documented OpenFIGI keyed-client quota.
	pub fn with_default_quota() -> Self {
		Self::new(DEFAULT_RATE_LIMIT, DEFAULT_RATE_WINDOW)
			.expect("Default quota constants are non-zero.")
	}

	/// Waits until a permit is available or the caller's token is cancelled.
	///
	/// Returns [`Error::Cancelled`] immediately when `cancel` has already fired, without touching
	/// bucket state. A cancellation while suspended also yields [`Error::Cancelled`]; the permit
	/// is not consumed in either case.
	pub async fn acquire(&self, cancel: &CancellationToken) -> Result<()> {
		if cancel.is_cancelled() {
			return Err(Error::Cancelled);
		}

		match cancel.run_until_cancelled(self.limiter.until_ready()).await {
			Some(()) => Ok(()),
			None => Err(Error::Cancelled),
		}
	}

	/// Returns the configured permit count per window.
	pub const fn limit(&self) -> u32 {
		self.limit
	}

	/// Returns the configured quota window.
	pub const fn window(&self) -> Duration {
		self.window
	}
}
impl Debug for RateLimiter {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RateLimiter")
			.field("limit", &self.limit)
			.field("window", &self.window)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::time::Instant;
	// self
	use super::*;

	#[test]
	fn rejects_zero_limit_and_zero_window() {
		assert!(matches!(
			RateLimiter::new(0, Duration::from_secs(1)),
			Err(ConfigError::InvalidQuota)
		));
		assert!(matches!(RateLimiter::new(5, Duration::ZERO), Err(ConfigError::InvalidQuota)));
	}

	#[tokio::test]
	async fn acquire_returns_cancelled_for_spent_token() {
		let limiter =
			RateLimiter::new(1, Duration::from_secs(60)).expect("Quota should be valid.");
		let cancel = CancellationToken::new();

		cancel.cancel();

		assert!(matches!(limiter.acquire(&cancel).await, Err(Error::Cancelled)));
	}

	#[tokio::test]
	async fn acquire_unblocks_on_cancellation_mid_wait() {
		let limiter =
			RateLimiter::new(1, Duration::from_secs(60)).expect("Quota should be valid.");
		let cancel = CancellationToken::new();

		limiter.acquire(&cancel).await.expect("First permit should be granted from the burst.");

		let child = cancel.child_token();
		let waiter = {
			let limiter = limiter.clone();

			tokio::spawn(async move { limiter.acquire(&child).await })
		};

		tokio::time::sleep(Duration::from_millis(50)).await;
		cancel.cancel();

		let outcome = waiter.await.expect("Waiter task should not panic.");

		assert!(matches!(outcome, Err(Error::Cancelled)));
	}

	#[tokio::test]
	async fn sustained_rate_never_exceeds_quota() {
		let limiter =
			RateLimiter::new(2, Duration::from_millis(400)).expect("Quota should be valid.");
		let cancel = CancellationToken::new();
		let started = Instant::now();

		for _ in 0..4 {
			limiter.acquire(&cancel).await.expect("Permit should eventually be granted.");
		}

		// Burst of 2 is free; permits 3 and 4 must wait one replenish period (200 ms) each.
		assert!(started.elapsed() >= Duration::from_millis(350));
	}
}
