//! Token issuance and verification.
//!
//! [`TokenService`] signs a [`ClaimSet`] with HS512 into the compact
//! `header.payload.signature` form and reverses the process on every request. All methods
//! take `&self` and touch no shared mutable state, so one service can be shared across
//! request handlers without locking.
//!
//! Every per-token failure is converted into a named outcome at this boundary: parsing
//! returns [`ParseError`], readers return `None`, and checks return `false`. Missing or
//! unreadable expirations are treated as expired.

// crates.io
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
// self
use crate::{
	_prelude::*,
	auth::{Audience, ClaimSet, DeviceClass, TokenStatus, claims::WireClaims},
	config::TokenConfig,
	device::DeviceClassifier,
	error::{ParseError, SignError},
	obs::{self, TokenOp, TokenOutcome, TokenSpan},
};

const ALGORITHM: Algorithm = Algorithm::HS512;

/// Identity-store record the token subject is checked against.
pub trait Principal {
	/// Username on record for the authenticated principal.
	fn username(&self) -> &str;
}
impl Principal for str {
	fn username(&self) -> &str {
		self
	}
}
impl Principal for String {
	fn username(&self) -> &str {
		self
	}
}

/// Issues and verifies HS512-signed tokens for a fixed configuration.
#[derive(Clone)]
pub struct TokenService {
	config: TokenConfig,
	encoding_key: EncodingKey,
	decoding_key: DecodingKey,
	validation: Validation,
}
impl TokenService {
	/// Derives signing keys from a validated configuration.
	pub fn new(config: TokenConfig) -> Self {
		let encoding_key = EncodingKey::from_secret(config.secret().expose());
		let decoding_key = DecodingKey::from_secret(config.secret().expose());
		let mut validation = Validation::new(ALGORITHM);

		// Expiry and claim presence are judged by the readers below, not by the decoder.
		validation.required_spec_claims.clear();
		validation.validate_exp = false;
		validation.validate_nbf = false;
		validation.validate_aud = false;

		Self { config, encoding_key, decoding_key, validation }
	}

	/// Read-only configuration the service was built with.
	pub fn config(&self) -> &TokenConfig {
		&self.config
	}

	/// Issues a token for `username`, stamping the current clock as the creation time.
	pub fn issue(&self, username: &str, device: DeviceClass) -> Result<String> {
		self.issue_at(username, device, OffsetDateTime::now_utc())
	}

	/// Issues a token as if it were created at `now`; expiration is `now` plus the lifetime.
	pub fn issue_at(
		&self,
		username: &str,
		device: DeviceClass,
		now: OffsetDateTime,
	) -> Result<String> {
		let _guard = TokenSpan::new(TokenOp::Issue, "issue").entered();
		let claims =
			ClaimSet::issued(username, Audience::from(device), now, self.config.expiration());

		self.sign(&claims)
	}

	/// Issues a token using the host's device classifier on the request metadata.
	pub fn issue_for<M, C>(&self, username: &str, classifier: &C, metadata: &M) -> Result<String>
	where
		M: ?Sized,
		C: ?Sized + DeviceClassifier<M>,
	{
		self.issue(username, classifier.classify(metadata))
	}

	/// Signs an arbitrary claim set as-is.
	pub fn sign(&self, claims: &ClaimSet) -> Result<String> {
		let token = jsonwebtoken::encode(
			&Header::new(ALGORITHM),
			&WireClaims::from(claims),
			&self.encoding_key,
		)
		.map_err(SignError::from)?;

		obs::record_token_outcome(TokenOp::Issue, TokenOutcome::Issued);

		Ok(token)
	}

	/// Verifies the signature and decodes the claim set.
	pub fn parse_claims(&self, token: &str) -> Result<ClaimSet, ParseError> {
		let _guard = TokenSpan::new(TokenOp::Parse, "parse_claims").entered();

		match jsonwebtoken::decode::<WireClaims>(token, &self.decoding_key, &self.validation) {
			Ok(data) => {
				obs::record_token_outcome(TokenOp::Parse, TokenOutcome::Valid);

				Ok(ClaimSet::from(data.claims))
			},
			Err(e) => {
				let err = ParseError::from(e);

				reject(TokenOp::Parse, err.as_str());
				obs::record_token_outcome(TokenOp::Parse, TokenOutcome::Invalid);

				Err(err)
			},
		}
	}

	/// Username carried by a verified token, if any.
	pub fn username_of(&self, token: &str) -> Option<String> {
		self.parse_claims(token).ok()?.subject
	}

	/// Expiration instant of a verified token, if any.
	pub fn expiration_of(&self, token: &str) -> Option<OffsetDateTime> {
		self.parse_claims(token).ok()?.expiration
	}

	/// Audience label of a verified token, if any.
	pub fn audience_of(&self, token: &str) -> Option<Audience> {
		self.parse_claims(token).ok()?.audience
	}

	/// Returns `true` unless the token verifies and expires after the current instant.
	pub fn is_expired(&self, token: &str) -> bool {
		self.is_expired_at(token, OffsetDateTime::now_utc())
	}

	/// Returns `true` unless the token verifies and expires after `instant`.
	pub fn is_expired_at(&self, token: &str, instant: OffsetDateTime) -> bool {
		self.expiration_of(token).is_none_or(|expiration| expiration <= instant)
	}

	/// Classifies the token against the current clock.
	pub fn status(&self, token: &str) -> TokenStatus {
		self.status_at(token, OffsetDateTime::now_utc())
	}

	/// Classifies the token against `instant`.
	pub fn status_at(&self, token: &str, instant: OffsetDateTime) -> TokenStatus {
		match self.parse_claims(token) {
			Ok(claims) if claims.is_expired_at(instant) => TokenStatus::Expired,
			Ok(_) => TokenStatus::Valid,
			Err(_) => TokenStatus::Malformed,
		}
	}

	/// Returns `true` iff the token verifies, names `expected_username`, and has not expired.
	pub fn validate(&self, token: &str, expected_username: &str) -> bool {
		self.validate_at(token, expected_username, OffsetDateTime::now_utc())
	}

	/// [`validate`](Self::validate) against the username on an identity-store record.
	pub fn validate_principal<P>(&self, token: &str, principal: &P) -> bool
	where
		P: ?Sized + Principal,
	{
		self.validate(token, principal.username())
	}

	/// [`validate`](Self::validate) evaluated at `instant`.
	pub fn validate_at(
		&self,
		token: &str,
		expected_username: &str,
		instant: OffsetDateTime,
	) -> bool {
		let _guard = TokenSpan::new(TokenOp::Validate, "validate").entered();
		let outcome = match self.parse_claims(token) {
			Err(_) => TokenOutcome::Invalid,
			Ok(claims) if claims.subject.as_deref() != Some(expected_username) => {
				reject(TokenOp::Validate, "subject_mismatch");

				TokenOutcome::Invalid
			},
			Ok(claims) if claims.is_expired_at(instant) => {
				reject(TokenOp::Validate, "expired");

				TokenOutcome::Expired
			},
			Ok(_) => TokenOutcome::Valid,
		};

		obs::record_token_outcome(TokenOp::Validate, outcome);

		matches!(outcome, TokenOutcome::Valid)
	}
}
impl Debug for TokenService {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenService")
			.field("config", &self.config)
			.field("algorithm", &ALGORITHM)
			.finish()
	}
}

fn reject(op: TokenOp, reason: &'static str) {
	obs::trace_rejection(op, reason);
	obs::record_rejection(op, reason);
}
