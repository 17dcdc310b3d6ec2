//! Optional observability helpers for API operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `openfigi_client.request` with the
//!   `operation` and `stage` fields.
//! - Enable `metrics` to increment the `openfigi_client_request_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.
//!
//! Error values themselves are never logged; they propagate to the caller untouched.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// API operations observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
	/// Filter lookups.
	Filter,
	/// Free-text searches.
	Search,
	/// Identifier mapping batches.
	Mapping,
	/// Mapping-values enumeration.
	MappingValues,
}
impl OperationKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationKind::Filter => "filter",
			OperationKind::Search => "search",
			OperationKind::Mapping => "mapping",
			OperationKind::MappingValues => "mapping_values",
		}
	}
}
impl Display for OperationKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
