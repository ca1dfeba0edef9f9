// self
use crate::{_prelude::*, obs::TokenOp};

/// A span builder used by token operations.
#[derive(Clone, Debug)]
pub struct TokenSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl TokenSpan {
	/// Creates a new span tagged with the provided operation + stage.
	pub fn new(op: TokenOp, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("jwt_helper.token", op = op.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (op, stage);

			Self {}
		}
	}

	/// Enters the span for the rest of the calling scope.
	pub fn entered(self) -> TokenSpanGuard {
		#[cfg(feature = "tracing")]
		{
			TokenSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			TokenSpanGuard {}
		}
	}
}

/// RAII guard returned by [`TokenSpan::entered`].
pub struct TokenSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for TokenSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("TokenSpanGuard(..)")
	}
}

/// Emits a `debug` event naming why a token was rejected; the token itself is never logged.
pub fn trace_rejection(op: TokenOp, reason: &'static str) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(op = op.as_str(), reason, "Token rejected.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (op, reason);
	}
}
