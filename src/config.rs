//! Immutable token configuration validated once at startup.
//!
//! Hosts typically read the secret and lifetime from their own settings (environment,
//! property files) and hand them over here. A JSON document with the keys `secret` and
//! `expiration` (seconds) is accepted as well:
//!
//! ```
//! let config = jwt_helper::config::TokenConfig::from_json_str(
//! 	r#"{ "secret": "change-me", "expiration": 604800 }"#,
//! )
//! .expect("Example configuration should be valid.");
//!
//! assert_eq!(config.expiration().whole_days(), 7);
//! ```

// self
use crate::{_prelude::*, auth::SigningSecret, error::ConfigError};

/// Longest lifetime accepted; keeps `now + lifetime` well inside the representable range.
pub const MAX_EXPIRATION_SECONDS: i64 = 100 * 365 * 24 * 60 * 60;

#[derive(Deserialize)]
struct RawTokenConfig {
	secret: SigningSecret,
	expiration: i64,
}

/// Signing secret plus token lifetime, read-only after construction.
#[derive(Clone, Debug)]
pub struct TokenConfig {
	secret: SigningSecret,
	expiration: Duration,
}
impl TokenConfig {
	/// Validates and builds a configuration from a secret and a lifetime in seconds.
	pub fn new(secret: impl Into<String>, expiration_seconds: i64) -> Result<Self, ConfigError> {
		Self::validated(SigningSecret::new(secret), expiration_seconds)
	}

	/// Parses and validates a JSON configuration document.
	pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
		let mut deserializer = serde_json::Deserializer::from_str(json);

		Self::from_raw(&mut deserializer)
	}

	/// Parses and validates a JSON configuration document from raw bytes.
	pub fn from_json_slice(json: &[u8]) -> Result<Self, ConfigError> {
		let mut deserializer = serde_json::Deserializer::from_slice(json);

		Self::from_raw(&mut deserializer)
	}

	/// Shared signing secret.
	pub fn secret(&self) -> &SigningSecret {
		&self.secret
	}

	/// Lifetime added to the issuance instant of every token.
	pub fn expiration(&self) -> Duration {
		self.expiration
	}

	fn from_raw<'de, R>(deserializer: &mut serde_json::Deserializer<R>) -> Result<Self, ConfigError>
	where
		R: serde_json::de::Read<'de>,
	{
		let raw: RawTokenConfig = serde_path_to_error::deserialize(&mut *deserializer)
			.map_err(|source| ConfigError::Parse { source })?;

		Self::validated(raw.secret, raw.expiration)
	}

	fn validated(secret: SigningSecret, expiration_seconds: i64) -> Result<Self, ConfigError> {
		if secret.is_blank() {
			return Err(ConfigError::EmptySecret);
		}
		if expiration_seconds <= 0 {
			return Err(ConfigError::NonPositiveExpiration { seconds: expiration_seconds });
		}
		if expiration_seconds > MAX_EXPIRATION_SECONDS {
			return Err(ConfigError::ExpirationOutOfRange { seconds: expiration_seconds });
		}

		Ok(Self { secret, expiration: Duration::seconds(expiration_seconds) })
	}
}
