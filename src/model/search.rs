//! Search request/response types for `POST /v3/search`.

// self
use crate::{
	_prelude::*,
	model::{Instrument, MarketSector},
};

/// Criteria accepted by the search endpoint.
///
/// Search behaves like [`FilterRequest`](crate::model::FilterRequest) driven primarily by the
/// free-text `query`, with the same optional property restrictions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchRequest {
	/// Free-text query matched against instrument names and tickers.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub query: Option<String>,
	/// Continuation token from a previous page.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub start: Option<String>,
	/// Exchange code restriction.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub exch_code: Option<String>,
	/// Market Identifier Code (ISO 10383) restriction.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub mic_code: Option<String>,
	/// Currency restriction.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub currency: Option<String>,
	/// Market sector descriptor restriction.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub market_sec_des: Option<MarketSector>,
	/// Security type restriction.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub security_type: Option<String>,
	/// Whether unlisted equities are included in the result set.
	pub include_unlisted_equities: bool,
}
impl SearchRequest {
	/// Creates a search for the given free-text query.
	pub fn new(query: impl Into<String>) -> Self {
		Self { query: Some(query.into()), ..Default::default() }
	}

	/// Sets the continuation token for the next page.
	pub fn with_start(mut self, start: impl Into<String>) -> Self {
		self.start = Some(start.into());

		self
	}

	/// Restricts results to one exchange code.
	pub fn with_exch_code(mut self, exch_code: impl Into<String>) -> Self {
		self.exch_code = Some(exch_code.into());

		self
	}

	/// Restricts results to one Market Identifier Code.
	pub fn with_mic_code(mut self, mic_code: impl Into<String>) -> Self {
		self.mic_code = Some(mic_code.into());

		self
	}

	/// Restricts results to one currency.
	pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
		self.currency = Some(currency.into());

		self
	}

	/// Restricts results to one market sector.
	pub fn with_market_sec_des(mut self, sector: MarketSector) -> Self {
		self.market_sec_des = Some(sector);

		self
	}

	/// Restricts results to one security type.
	pub fn with_security_type(mut self, security_type: impl Into<String>) -> Self {
		self.security_type = Some(security_type.into());

		self
	}

	/// Includes unlisted equities in the result set.
	pub fn include_unlisted_equities(mut self) -> Self {
		self.include_unlisted_equities = true;

		self
	}
}

/// One page of search results.
///
/// The live API omits a total count on this endpoint; pagination is driven purely by `next`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
	/// Matched instruments in server order; may be empty.
	pub data: Vec<Instrument>,
	/// API-level soft error surfaced even on HTTP 200; passed through for the caller to inspect.
	pub error: String,
	/// Opaque continuation token; empty when the data set is exhausted.
	pub next: String,
}
impl SearchResponse {
	/// Returns `true` when a further page exists.
	pub fn has_next(&self) -> bool {
		!self.next.is_empty()
	}
}
