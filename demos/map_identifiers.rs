//! Demonstrates resolving a batch of ISINs to FIGI instruments against a local mock server,
//! including a per-job soft error.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use tokio_util::sync::CancellationToken;
// self
use openfigi_client::{
	api::MAPPING_RESOURCE_PATH,
	client::Client,
	model::{IdType, MappingJob},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let _batch = server
		.mock_async(|when, then| {
			when.method(POST).path(MAPPING_RESOURCE_PATH);
			then.status(200).header("content-type", "application/json").body(
				"[{\"data\":[{\"figi\":\"BBG000BLNNH6\",\"ticker\":\"IBM\"}]},\
				{\"error\":\"No identifier found.\"}]",
			);
		})
		.await;
	let client = Client::new("demo-api-key").with_base_url(server.base_url())?;
	let jobs = vec![
		MappingJob::new(IdType::Isin, "US4592001014").with_exch_code("US"),
		MappingJob::new(IdType::Isin, "XX0000000000"),
	];
	let results = client.mapping(&CancellationToken::new(), &jobs).await?;

	for (job, result) in jobs.iter().zip(&results) {
		if result.error.is_empty() {
			for instrument in &result.data {
				println!("{} -> {} ({})", job.id_value, instrument.figi, instrument.ticker);
			}
		} else {
			println!("{} -> soft error: {}", job.id_value, result.error);
		}
	}

	Ok(())
}
