//! Search operation: free-text instrument lookups.

// self
use crate::{
	_prelude::*,
	api::SEARCH_RESOURCE_PATH,
	client::Client,
	http::ApiHttpClient,
	model::{SearchRequest, SearchResponse},
	obs::{self, OperationKind, RequestOutcome, RequestSpan},
};

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Searches instruments by free text, optionally narrowed by property restrictions.
	///
	/// Suspends until the rate limiter grants a permit, then issues exactly one
	/// `POST /v3/search`. Unlike [`filter`](Client::filter), the API reports no total count
	/// here; pagination is driven purely by the `next` continuation token.
	pub async fn search(
		&self,
		cancel: &CancellationToken,
		request: &SearchRequest,
	) -> Result<SearchResponse> {
		const KIND: OperationKind = OperationKind::Search;

		let span = RequestSpan::new(KIND, "search");

		obs::record_request_outcome(KIND, RequestOutcome::Attempt);

		let result = span
			.instrument(self.execute_post(cancel, SEARCH_RESOURCE_PATH, request))
			.await;

		match &result {
			Ok(_) => obs::record_request_outcome(KIND, RequestOutcome::Success),
			Err(_) => obs::record_request_outcome(KIND, RequestOutcome::Failure),
		}

		result
	}
}
