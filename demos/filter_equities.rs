//! Demonstrates paging through NYSE common stocks with the filter endpoint against a local
//! mock server, so the demo runs without an OpenFIGI account.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use tokio_util::sync::CancellationToken;
// self
use openfigi_client::{
	api::FILTER_RESOURCE_PATH,
	client::Client,
	model::{FilterRequest, MarketSector},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let _page = server
		.mock_async(|when, then| {
			when.method(POST).path(FILTER_RESOURCE_PATH);
			then.status(200).header("content-type", "application/json").body(
				"{\"data\":[{\"figi\":\"BBG000BLNNH6\",\"ticker\":\"IBM\",\
				\"name\":\"INTL BUSINESS MACHINES CORP\",\"marketSector\":\"Equity\"}],\
				\"total\":1,\"next\":\"\"}",
			);
		})
		.await;
	let client = Client::new("demo-api-key").with_base_url(server.base_url())?;
	let request = FilterRequest::new()
		.with_security_type("Common Stock")
		.with_market_sec_des(MarketSector::Equity)
		.with_mic_code("XNYS");
	let cancel = CancellationToken::new();
	let mut page = client.filter(&cancel, &request).await?;

	println!("Matched {} instrument(s) in total.", page.total);

	loop {
		for instrument in &page.data {
			println!("{}  {}  {}", instrument.figi, instrument.ticker, instrument.name);
		}

		if !page.has_next() {
			break;
		}

		page = client.filter(&cancel, &request.clone().with_start(page.next)).await?;
	}

	Ok(())
}
