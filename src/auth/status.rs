//! Per-token verdicts produced by verification.

// self
use crate::_prelude::*;

/// Verdict reached for a token at a given instant; evaluated fresh on every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenStatus {
	/// Signature verified and the expiration lies in the future.
	Valid,
	/// Signature verified but the expiration has passed or is missing.
	Expired,
	/// Token could not be decoded or its signature did not verify.
	Malformed,
}
impl TokenStatus {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			TokenStatus::Valid => "valid",
			TokenStatus::Expired => "expired",
			TokenStatus::Malformed => "malformed",
		}
	}

	/// Returns `true` only for [`TokenStatus::Valid`].
	pub const fn is_valid(self) -> bool {
		matches!(self, TokenStatus::Valid)
	}
}
impl Display for TokenStatus {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
