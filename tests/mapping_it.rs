// crates.io
use httpmock::prelude::*;
// self
use openfigi_client::{
	_preludet::*,
	api::{MAPPING_RESOURCE_PATH, MAPPING_VALUES_RESOURCE_PATH},
	model::{IdType, MappingJob, MappingKey},
};

const API_KEY: &str = "f51f40b9-6ad9-47cd-bfa0-9d86a43e2c13";

#[tokio::test]
async fn mapping_preserves_job_order_and_soft_errors() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), API_KEY);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path(MAPPING_RESOURCE_PATH)
				.header("X-OPENFIGI-APIKEY", API_KEY)
				.json_body(serde_json::json!([
					{ "idType": "ID_ISIN", "idValue": "US4592001014", "exchCode": "US" },
					{ "idType": "ID_ISIN", "idValue": "XX0000000000" },
				]));
			then.status(200).header("content-type", "application/json; charset=utf-8").body(
				"[{\"data\":[{\"figi\":\"BBG000BLNNH6\",\"ticker\":\"IBM\",\
				\"marketSector\":\"Equity\"}]},{\"error\":\"No identifier found.\"}]",
			);
		})
		.await;
	let jobs = vec![
		MappingJob::new(IdType::Isin, "US4592001014").with_exch_code("US"),
		MappingJob::new(IdType::Isin, "XX0000000000"),
	];
	let response = client
		.mapping(&CancellationToken::new(), &jobs)
		.await
		.expect("Well-formed mapping response should decode.");

	assert_eq!(response.len(), 2);
	assert_eq!(response[0].data[0].figi, "BBG000BLNNH6");
	assert!(response[0].error.is_empty());
	assert!(response[1].data.is_empty());
	assert_eq!(response[1].error, "No identifier found.");

	mock.assert_async().await;
}

#[tokio::test]
async fn mapping_maps_non_2xx_to_exact_response_error() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), API_KEY);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(MAPPING_RESOURCE_PATH);
			then.status(503).header("content-type", "application/json; charset=utf-8");
		})
		.await;
	let jobs = vec![MappingJob::new(IdType::Ticker, "IBM")];
	let err = client
		.mapping(&CancellationToken::new(), &jobs)
		.await
		.expect_err("Non-2xx status should surface as a typed error.");

	assert_eq!(
		err.to_string(),
		format!(
			"response error for {}{}: unexpected status: 503",
			server.base_url(),
			MAPPING_RESOURCE_PATH,
		),
	);

	mock.assert_async().await;
}

#[tokio::test]
async fn mapping_values_enumerates_one_property() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), API_KEY);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path(format!("{MAPPING_VALUES_RESOURCE_PATH}/marketSecDes"))
				.header("X-OPENFIGI-APIKEY", API_KEY);
			then.status(200)
				.header("content-type", "application/json; charset=utf-8")
				.body("{\"values\":[\"Equity\",\"Comdty\",\"Corp\",\"Curncy\"]}");
		})
		.await;
	let response = client
		.mapping_values(&CancellationToken::new(), MappingKey::MarketSecDes)
		.await
		.expect("Values enumeration should decode.");

	assert_eq!(response.values.len(), 4);
	assert_eq!(response.values[0], "Equity");
	assert!(response.error.is_empty());

	mock.assert_async().await;
}
