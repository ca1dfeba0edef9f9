// self
use crate::obs::{TokenOp, TokenOutcome};

/// Counts issued, parsed, and validated tokens, labeled by `op` + `outcome`.
pub const TOKEN_TOTAL: &str = "jwt_helper_token_total";
/// Counts rejected tokens, labeled by `op` + `reason`.
pub const TOKEN_REJECTIONS_TOTAL: &str = "jwt_helper_token_rejections_total";

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_token_outcome(op: TokenOp, outcome: TokenOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(TOKEN_TOTAL, "op" => op.as_str(), "outcome" => outcome.as_str())
			.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (op, outcome);
	}
}

/// Records why a token was turned away; `reason` is a stable label such as `expired`.
pub fn record_rejection(op: TokenOp, reason: &'static str) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(TOKEN_REJECTIONS_TOTAL, "op" => op.as_str(), "reason" => reason)
			.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (op, reason);
	}
}
