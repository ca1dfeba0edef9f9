//! Error types shared by configuration, signing, and token parsing.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by fallible public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem; fatal at startup.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Token could not be signed.
	#[error(transparent)]
	Sign(#[from] SignError),
}

/// Configuration failures raised while building a [`TokenConfig`](crate::config::TokenConfig).
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Signing secret is empty or whitespace.
	#[error("Signing secret must not be empty.")]
	EmptySecret,
	/// Token lifetime is zero or negative.
	#[error("Token expiration must be positive, got {seconds} seconds.")]
	NonPositiveExpiration {
		/// Configured lifetime in seconds.
		seconds: i64,
	},
	/// Token lifetime is too large to add to the current clock.
	#[error("Token expiration of {seconds} seconds exceeds the supported range.")]
	ExpirationOutOfRange {
		/// Configured lifetime in seconds.
		seconds: i64,
	},
	/// Configuration document could not be parsed.
	#[error("Token configuration is malformed.")]
	Parse {
		/// Structured parsing failure, including the offending JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Signing failure reported by the underlying JWT library.
#[derive(Debug, ThisError)]
#[error("Token could not be signed: {message}.")]
pub struct SignError {
	message: String,
}
impl SignError {
	pub(crate) fn new(message: impl Into<String>) -> Self {
		Self { message: message.into() }
	}
}
impl From<jsonwebtoken::errors::Error> for SignError {
	fn from(e: jsonwebtoken::errors::Error) -> Self {
		Self::new(e.to_string())
	}
}

/// Named reasons a token is rejected by [`TokenService::parse_claims`](crate::service::TokenService::parse_claims).
///
/// The signing library's own error type never crosses the service boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ThisError)]
pub enum ParseError {
	/// Token structure, encoding, or payload could not be decoded.
	#[error("Token is malformed.")]
	Malformed,
	/// Signature does not match the configured secret.
	#[error("Token signature is invalid.")]
	InvalidSignature,
	/// Header names an algorithm other than HS512.
	#[error("Token uses an unsupported signing algorithm.")]
	UnsupportedAlgorithm,
}
impl ParseError {
	/// Returns a stable label suitable for log fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ParseError::Malformed => "malformed",
			ParseError::InvalidSignature => "invalid_signature",
			ParseError::UnsupportedAlgorithm => "unsupported_algorithm",
		}
	}
}
impl From<jsonwebtoken::errors::Error> for ParseError {
	fn from(e: jsonwebtoken::errors::Error) -> Self {
		use jsonwebtoken::errors::ErrorKind;

		match e.kind() {
			ErrorKind::InvalidSignature => ParseError::InvalidSignature,
			ErrorKind::InvalidAlgorithm
			| ErrorKind::InvalidAlgorithmName
			| ErrorKind::MissingAlgorithm => ParseError::UnsupportedAlgorithm,
			_ => ParseError::Malformed,
		}
	}
}
