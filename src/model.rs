//! Request/response value objects for the OpenFIGI v3 schema.
//!
//! Response types are deliberately lenient: every field carries a serde default, so a success
//! body whose shape is unrelated to the expected schema decodes to zero/empty values instead of
//! failing. Only syntactically invalid JSON is an error; see
//! [`DecodeError`](crate::error::DecodeError).

pub mod filter;
pub mod mapping;
pub mod search;

pub use filter::*;
pub use mapping::*;
pub use search::*;

// self
use crate::_prelude::*;

/// One matched financial instrument as returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Instrument {
	/// Twelve-character Financial Instrument Global Identifier.
	pub figi: String,
	/// Descriptive name of the instrument.
	pub name: String,
	/// Trading symbol.
	pub ticker: String,
	/// Exchange code the instrument trades on.
	pub exch_code: String,
	/// FIGI of the composite listing, when one exists.
	#[serde(rename = "compositeFIGI")]
	pub composite_figi: String,
	/// Security type of the instrument.
	pub security_type: String,
	/// Market sector the instrument belongs to.
	pub market_sector: String,
	/// FIGI shared by all instruments of the same share class.
	#[serde(rename = "shareClassFIGI")]
	pub share_class_figi: String,
	/// Alternative security type classification.
	pub security_type2: String,
	/// Free-form security description.
	pub security_description: String,
}

/// Market sector descriptor (`marketSecDes`) accepted by filter/search/mapping requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketSector {
	/// Equities.
	Equity,
	/// Commodities.
	#[serde(rename = "Comdty")]
	Commodity,
	/// Corporate bonds.
	#[serde(rename = "Corp")]
	Corporate,
	/// Currencies.
	#[serde(rename = "Curncy")]
	Currency,
	/// Government bonds.
	#[serde(rename = "Govt")]
	Government,
	/// Indices.
	Index,
	/// Money market instruments.
	#[serde(rename = "M-Mkt")]
	MoneyMarket,
	/// Mortgage-backed securities.
	#[serde(rename = "Mtge")]
	Mortgage,
	/// Municipal bonds.
	#[serde(rename = "Muni")]
	Municipal,
	/// Preferred shares.
	#[serde(rename = "Pfd")]
	Preferred,
}
impl MarketSector {
	/// Returns the exact wire spelling the API expects.
	pub const fn as_str(self) -> &'static str {
		match self {
			MarketSector::Equity => "Equity",
			MarketSector::Commodity => "Comdty",
			MarketSector::Corporate => "Corp",
			MarketSector::Currency => "Curncy",
			MarketSector::Government => "Govt",
			MarketSector::Index => "Index",
			MarketSector::MoneyMarket => "M-Mkt",
			MarketSector::Mortgage => "Mtge",
			MarketSector::Municipal => "Muni",
			MarketSector::Preferred => "Pfd",
		}
	}
}
impl Display for MarketSector {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Side of an option contract (`optionType`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
	/// Call options.
	Call,
	/// Put options.
	Put,
}
