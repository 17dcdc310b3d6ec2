//! Mapping operations: identifier-to-FIGI resolution and property-value enumeration.

// self
use crate::{
	_prelude::*,
	api::{MAPPING_RESOURCE_PATH, MAPPING_VALUES_RESOURCE_PATH},
	client::Client,
	http::ApiHttpClient,
	model::{MappingKey, MappingRequest, MappingResponse, MappingValuesResponse},
	obs::{self, OperationKind, RequestOutcome, RequestSpan},
};

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Resolves a batch of third-party identifiers to FIGI instruments.
	///
	/// Suspends until the rate limiter grants a permit, then issues exactly one
	/// `POST /v3/mapping` carrying the whole batch. The response holds one
	/// [`MappingResult`](crate::model::MappingResult) per job in submission order; per-job
	/// failures arrive as soft `error` strings, never as a typed error.
	pub async fn mapping(
		&self,
		cancel: &CancellationToken,
		request: &MappingRequest,
	) -> Result<MappingResponse> {
		const KIND: OperationKind = OperationKind::Mapping;

		let span = RequestSpan::new(KIND, "mapping");

		obs::record_request_outcome(KIND, RequestOutcome::Attempt);

		let result = span
			.instrument(self.execute_post(cancel, MAPPING_RESOURCE_PATH, request))
			.await;

		match &result {
			Ok(_) => obs::record_request_outcome(KIND, RequestOutcome::Success),
			Err(_) => obs::record_request_outcome(KIND, RequestOutcome::Failure),
		}

		result
	}

	/// Enumerates the server-accepted values for one enum-like request property.
	///
	/// Issues exactly one `GET /v3/mapping/values/<key>` after acquiring a permit.
	pub async fn mapping_values(
		&self,
		cancel: &CancellationToken,
		key: MappingKey,
	) -> Result<MappingValuesResponse> {
		const KIND: OperationKind = OperationKind::MappingValues;

		let span = RequestSpan::new(KIND, "mapping_values");
		let path = format!("{MAPPING_VALUES_RESOURCE_PATH}/{key}");

		obs::record_request_outcome(KIND, RequestOutcome::Attempt);

		let result = span.instrument(self.execute_get(cancel, &path)).await;

		match &result {
			Ok(_) => obs::record_request_outcome(KIND, RequestOutcome::Success),
			Err(_) => obs::record_request_outcome(KIND, RequestOutcome::Failure),
		}

		result
	}
}
