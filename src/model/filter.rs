//! Filter request/response types for `POST /v3/filter`.

// self
use crate::{
	_prelude::*,
	model::{Instrument, MarketSector, OptionType},
};

/// Criteria accepted by the filter endpoint; results match ALL supplied properties.
///
/// Unset fields are omitted from the wire payload. Construct with [`FilterRequest::new`] and the
/// `with_*` chainers, then page through results by feeding
/// [`FilterResponse::next`] back via [`FilterRequest::with_start`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterRequest {
	/// Free-text query matched against instrument names and tickers.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub query: Option<String>,
	/// Continuation token from a previous page; empty-handed requests start at page one.
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
	/// Alternative security type restriction.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub security_type2: Option<String>,
	/// Whether unlisted equities are included in the result set.
	pub include_unlisted_equities: bool,
	/// Option side restriction for derivative lookups.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub option_type: Option<OptionType>,
	/// US state code restriction for municipal instruments.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub state_code: Option<String>,
}
impl FilterRequest {
	/// Creates an empty filter matching every instrument.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the free-text query.
	pub fn with_query(mut self, query: impl Into<String>) -> Self {
		self.query = Some(query.into());

		self
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

	/// Restricts results to one alternative security type.
	pub fn with_security_type2(mut self, security_type2: impl Into<String>) -> Self {
		self.security_type2 = Some(security_type2.into());

		self
	}

	/// Includes unlisted equities in the result set.
	pub fn include_unlisted_equities(mut self) -> Self {
		self.include_unlisted_equities = true;

		self
	}

	/// Restricts derivative results to one option side.
	pub fn with_option_type(mut self, option_type: OptionType) -> Self {
		self.option_type = Some(option_type);

		self
	}

	/// Restricts municipal results to one US state code.
	pub fn with_state_code(mut self, state_code: impl Into<String>) -> Self {
		self.state_code = Some(state_code.into());

		self
	}
}

/// One page of filter results.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterResponse {
	/// Matched instruments in server order; may be empty.
	pub data: Vec<Instrument>,
	/// Total number of matches across all pages, not just this page's length.
	pub total: i64,
	/// API-level soft error surfaced even on HTTP 200; passed through for the caller to inspect.
	pub error: String,
	/// Opaque continuation token; empty when the data set is exhausted.
	pub next: String,
}
impl FilterResponse {
	/// Returns `true` when a further page exists.
	pub fn has_next(&self) -> bool {
		!self.next.is_empty()
	}
}
