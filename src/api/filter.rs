//! Filter operation: criteria-driven instrument lookups with pagination.

// self
use crate::{
	_prelude::*,
	api::FILTER_RESOURCE_PATH,
	client::Client,
	http::ApiHttpClient,
	model::{FilterRequest, FilterResponse},
	obs::{self, OperationKind, RequestOutcome, RequestSpan},
};

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Looks up instruments matching all supplied filter criteria.
	///
	/// Suspends until the rate limiter grants a permit, then issues exactly one
	/// `POST /v3/filter`. When the returned page reports
	/// [`has_next`](FilterResponse::has_next), feed its `next` token back via
	/// [`FilterRequest::with_start`] to fetch the following page; `total` always reflects the
	/// full match count.
	pub async fn filter(
		&self,
		cancel: &CancellationToken,
		request: &FilterRequest,
	) -> Result<FilterResponse> {
		const KIND: OperationKind = OperationKind::Filter;

		let span = RequestSpan::new(KIND, "filter");

		obs::record_request_outcome(KIND, RequestOutcome::Attempt);

		let result = span
			.instrument(self.execute_post(cancel, FILTER_RESOURCE_PATH, request))
			.await;

		match &result {
			Ok(_) => obs::record_request_outcome(KIND, RequestOutcome::Success),
			Err(_) => obs::record_request_outcome(KIND, RequestOutcome::Failure),
		}

		result
	}
}
