//! Optional observability helpers for token operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `jwt_helper.token` with the `op` and
//!   `stage` (call site) fields, plus `debug` events naming why a token was rejected.
//! - Enable `metrics` to increment [`TOKEN_TOTAL`] for every issued, parsed, or validated
//!   token (labeled by `op` + `outcome`) and [`TOKEN_REJECTIONS_TOTAL`] for every rejection
//!   (labeled by `op` + `reason`).
//!
//! Neither secrets nor raw tokens are ever recorded.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Token operations observed by the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenOp {
	/// Signing a new token.
	Issue,
	/// Verifying and decoding a token.
	Parse,
	/// Checking a token against an expected username.
	Validate,
}
impl TokenOp {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			TokenOp::Issue => "issue",
			TokenOp::Parse => "parse",
			TokenOp::Validate => "validate",
		}
	}
}
impl Display for TokenOp {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenOutcome {
	/// A token was signed.
	Issued,
	/// The token verified (and, for validation, matched and was unexpired).
	Valid,
	/// The token verified but had expired.
	Expired,
	/// The token was rejected.
	Invalid,
}
impl TokenOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			TokenOutcome::Issued => "issued",
			TokenOutcome::Valid => "valid",
			TokenOutcome::Expired => "expired",
			TokenOutcome::Invalid => "invalid",
		}
	}
}
impl Display for TokenOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
