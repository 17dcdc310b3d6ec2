//! Mapping request/response types for `POST /v3/mapping` and `GET /v3/mapping/values/<key>`.

// self
use crate::{
	_prelude::*,
	model::{Instrument, MarketSector},
};

/// Batch of mapping jobs submitted in one request; the wire format is a JSON array.
pub type MappingRequest = Vec<MappingJob>;
/// Per-job results in the same order as the submitted jobs.
pub type MappingResponse = Vec<MappingResult>;

/// Third-party identifier types accepted by the mapping endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdType {
	/// International Securities Identification Number.
	#[serde(rename = "ID_ISIN")]
	Isin,
	/// CUSIP (Committee on Uniform Securities Identification Procedures).
	#[serde(rename = "ID_CUSIP")]
	Cusip,
	/// CINS (CUSIP International Numbering System).
	#[serde(rename = "ID_CINS")]
	Cins,
	/// Stock Exchange Daily Official List number.
	#[serde(rename = "ID_SEDOL")]
	Sedol,
	/// German Wertpapierkennnummer.
	#[serde(rename = "ID_WERTPAPIER")]
	Wertpapier,
	/// Common code issued by Clearstream/Euroclear.
	#[serde(rename = "ID_COMMON")]
	Common,
	/// FIGI assigned to the instrument.
	#[serde(rename = "ID_BB_GLOBAL")]
	Figi,
	/// Composite-level FIGI.
	#[serde(rename = "COMPOSITE_ID_BB_GLOBAL")]
	CompositeFigi,
	/// Share-class-level FIGI.
	#[serde(rename = "ID_BB_GLOBAL_SHARE_CLASS_LEVEL")]
	ShareClassFigi,
	/// Security number description.
	#[serde(rename = "ID_BB_SEC_NUM_DES")]
	SecNumDes,
	/// Local exchange symbol.
	#[serde(rename = "ID_EXCH_SYMBOL")]
	ExchSymbol,
	/// Full exchange symbol, including suffixes.
	#[serde(rename = "ID_FULL_EXCHANGE_SYMBOL")]
	FullExchangeSymbol,
	/// Ticker.
	#[serde(rename = "TICKER")]
	Ticker,
	/// Ticker stripped of exchange-specific suffixes.
	#[serde(rename = "BASE_TICKER")]
	BaseTicker,
}

/// One identifier-to-FIGI mapping job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingJob {
	/// Kind of the supplied identifier.
	pub id_type: IdType,
	/// Identifier value to resolve.
	pub id_value: String,
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
}
impl MappingJob {
	/// Creates a job resolving `id_value` of kind `id_type`.
	pub fn new(id_type: IdType, id_value: impl Into<String>) -> Self {
		Self {
			id_type,
			id_value: id_value.into(),
			exch_code: None,
			mic_code: None,
			currency: None,
			market_sec_des: None,
			security_type: None,
			security_type2: None,
		}
	}

	/// Restricts resolution to one exchange code.
	pub fn with_exch_code(mut self, exch_code: impl Into<String>) -> Self {
		self.exch_code = Some(exch_code.into());

		self
	}

	/// Restricts resolution to one Market Identifier Code.
	pub fn with_mic_code(mut self, mic_code: impl Into<String>) -> Self {
		self.mic_code = Some(mic_code.into());

		self
	}

	/// Restricts resolution to one currency.
	pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
		self.currency = Some(currency.into());

		self
	}

	/// Restricts resolution to one market sector.
	pub fn with_market_sec_des(mut self, sector: MarketSector) -> Self {
		self.market_sec_des = Some(sector);

		self
	}

	/// Restricts resolution to one security type.
	pub fn with_security_type(mut self, security_type: impl Into<String>) -> Self {
		self.security_type = Some(security_type.into());

		self
	}
}

/// Outcome of one mapping job; soft failures arrive as `error`, not as a typed error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingResult {
	/// Instruments the identifier resolved to; empty when the job failed.
	pub data: Vec<Instrument>,
	/// Per-job soft error (e.g. "No identifier found."); empty on success.
	pub error: String,
	/// Per-job advisory message; empty when the server has nothing to add.
	pub warning: String,
}

/// Request properties whose accepted values can be enumerated via `GET /v3/mapping/values/<key>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MappingKey {
	/// Accepted identifier types.
	IdType,
	/// Accepted exchange codes.
	ExchCode,
	/// Accepted Market Identifier Codes.
	MicCode,
	/// Accepted currencies.
	Currency,
	/// Accepted market sector descriptors.
	MarketSecDes,
	/// Accepted security types.
	SecurityType,
	/// Accepted alternative security types.
	SecurityType2,
	/// Accepted US state codes.
	StateCode,
}
impl MappingKey {
	/// Returns the path segment the values endpoint expects.
	pub const fn as_str(self) -> &'static str {
		match self {
			MappingKey::IdType => "idType",
			MappingKey::ExchCode => "exchCode",
			MappingKey::MicCode => "micCode",
			MappingKey::Currency => "currency",
			MappingKey::MarketSecDes => "marketSecDes",
			MappingKey::SecurityType => "securityType",
			MappingKey::SecurityType2 => "securityType2",
			MappingKey::StateCode => "stateCode",
		}
	}
}
impl Display for MappingKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Accepted values for one enum-like request property.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingValuesResponse {
	/// Server-accepted values for the requested key.
	pub values: Vec<String>,
	/// API-level soft error; empty on success.
	pub error: String,
}
