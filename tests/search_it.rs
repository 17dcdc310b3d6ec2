// crates.io
use httpmock::prelude::*;
// self
use openfigi_client::{
	_preludet::*, api::SEARCH_RESOURCE_PATH, model::SearchRequest,
};

const API_KEY: &str = "7d11ba3e-69b4-41cd-92de-0de61a2b547c";

#[tokio::test]
async fn search_decodes_data_and_continuation_token() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), API_KEY);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path(SEARCH_RESOURCE_PATH)
				.header("X-OPENFIGI-APIKEY", API_KEY)
				.json_body_includes("{\"query\":\"ibm\"}");
			then.status(200).header("content-type", "application/json; charset=utf-8").body(
				"{\"data\":[{\"figi\":\"BBG000BLNNH6\",\"ticker\":\"IBM\",\
				\"name\":\"INTL BUSINESS MACHINES CORP\"}],\"next\":\"c2VhcmNoLXBhZ2UtMg==\"}",
			);
		})
		.await;
	let response = client
		.search(&CancellationToken::new(), &SearchRequest::new("ibm").with_currency("USD"))
		.await
		.expect("Well-formed search response should decode.");

	assert_eq!(response.data.len(), 1);
	assert_eq!(response.data[0].figi, "BBG000BLNNH6");
	assert!(response.error.is_empty());
	assert_eq!(response.next, "c2VhcmNoLXBhZ2UtMg==");

	mock.assert_async().await;
}

#[tokio::test]
async fn search_passes_api_soft_errors_through() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), API_KEY);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(SEARCH_RESOURCE_PATH);
			then.status(200)
				.header("content-type", "application/json; charset=utf-8")
				.body("{\"data\":[],\"error\":\"Limit of requests per minute reached.\"}");
		})
		.await;
	let response = client
		.search(&CancellationToken::new(), &SearchRequest::new("ibm"))
		.await
		.expect("Soft errors ride inside a successful response.");

	assert!(response.data.is_empty());
	assert_eq!(response.error, "Limit of requests per minute reached.");
	assert!(!response.has_next());

	mock.assert_async().await;
}

#[tokio::test]
async fn search_maps_non_2xx_to_exact_response_error() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), API_KEY);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(SEARCH_RESOURCE_PATH);
			then.status(429).header("content-type", "application/json; charset=utf-8");
		})
		.await;
	let err = client
		.search(&CancellationToken::new(), &SearchRequest::new("ibm"))
		.await
		.expect_err("Non-2xx status should surface as a typed error.");

	assert_eq!(
		err.to_string(),
		format!(
			"response error for {}{}: unexpected status: 429",
			server.base_url(),
			SEARCH_RESOURCE_PATH,
		),
	);

	mock.assert_async().await;
}
