// std
use std::time::{Duration, Instant};
// crates.io
use httpmock::prelude::*;
// self
use openfigi_client::{
	_preludet::*, api::FILTER_RESOURCE_PATH, model::FilterRequest,
};

const API_KEY: &str = "4c1cd02c-0da0-49fa-9209-5a0e79f2a04a";
const EMPTY_PAGE: &str = "{\"data\":[],\"total\":0,\"next\":\"\"}";

#[tokio::test]
async fn cancelled_context_issues_no_http_call() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), API_KEY);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(FILTER_RESOURCE_PATH);
			then.status(200)
				.header("content-type", "application/json; charset=utf-8")
				.body(EMPTY_PAGE);
		})
		.await;
	let cancel = CancellationToken::new();

	cancel.cancel();

	let err = client
		.filter(&cancel, &FilterRequest::new())
		.await
		.expect_err("A spent token should short-circuit before any dispatch.");

	assert!(matches!(err, Error::Cancelled));

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn cancellation_mid_permit_wait_issues_no_second_call() {
	let server = MockServer::start_async().await;
	// One permit per minute: the first call drains the burst, the second waits.
	let client =
		build_throttled_test_client(&server.base_url(), API_KEY, 1, Duration::from_secs(60));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(FILTER_RESOURCE_PATH);
			then.status(200)
				.header("content-type", "application/json; charset=utf-8")
				.body(EMPTY_PAGE);
		})
		.await;

	client
		.filter(&CancellationToken::new(), &FilterRequest::new())
		.await
		.expect("First call should consume the burst permit.");

	let cancel = CancellationToken::new();
	let waiter = {
		let client = client.clone();
		let cancel = cancel.clone();

		tokio::spawn(async move { client.filter(&cancel, &FilterRequest::new()).await })
	};

	tokio::time::sleep(Duration::from_millis(100)).await;
	cancel.cancel();

	let outcome = waiter.await.expect("Waiter task should not panic.");

	assert!(matches!(outcome, Err(Error::Cancelled)));

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn cancellation_mid_flight_surfaces_cancelled() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), API_KEY);
	// The response is slow enough that cancellation always lands while the call is in flight.
	let _slow = server
		.mock_async(|when, then| {
			when.method(POST).path(FILTER_RESOURCE_PATH);
			then.status(200)
				.header("content-type", "application/json; charset=utf-8")
				.body(EMPTY_PAGE)
				.delay(Duration::from_secs(5));
		})
		.await;
	let started = Instant::now();
	let cancel = CancellationToken::new();
	let waiter = {
		let client = client.clone();
		let cancel = cancel.clone();

		tokio::spawn(async move { client.filter(&cancel, &FilterRequest::new()).await })
	};

	tokio::time::sleep(Duration::from_millis(100)).await;
	cancel.cancel();

	let outcome = waiter.await.expect("Waiter task should not panic.");

	assert!(matches!(outcome, Err(Error::Cancelled)));
	// The caller unblocks promptly instead of waiting out the response.
	assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn concurrent_callers_never_exceed_the_configured_rate() {
	let server = MockServer::start_async().await;
	// Two permits per 600 ms; four concurrent calls must spread across two windows.
	let window = Duration::from_millis(600);
	let client = build_throttled_test_client(&server.base_url(), API_KEY, 2, window);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(FILTER_RESOURCE_PATH);
			then.status(200)
				.header("content-type", "application/json; charset=utf-8")
				.body(EMPTY_PAGE);
		})
		.await;
	let started = Instant::now();
	let request = FilterRequest::new();
	let cancel = CancellationToken::new();
	let (a, b, c, d) = tokio::join!(
		client.filter(&cancel, &request),
		client.filter(&cancel, &request),
		client.filter(&cancel, &request),
		client.filter(&cancel, &request),
	);

	for outcome in [a, b, c, d] {
		outcome.expect("Each throttled call should eventually succeed.");
	}

	// Burst of 2 is free; calls 3 and 4 wait one replenish period (300 ms) each, so the batch
	// cannot finish inside a single window.
	assert!(started.elapsed() >= window - Duration::from_millis(50));

	mock.assert_calls_async(4).await;
}
