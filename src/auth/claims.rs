//! Typed claim set carried by every token and its on-the-wire JSON form.
//!
//! The payload keeps the field names existing deployments already read: `sub` for the
//! username, `audience` for the client label, `created` as epoch milliseconds, and the
//! registered `exp` claim as epoch seconds.

// self
use crate::{_prelude::*, auth::Audience};

/// Decoded claims of a verified token.
///
/// Every field is optional because a correctly signed token may still omit claims; readers
/// treat a missing claim as absence rather than a failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimSet {
	/// Username the token was issued to (`sub`).
	pub subject: Option<String>,
	/// Client label recorded at issuance (`audience`).
	pub audience: Option<Audience>,
	/// Issuance instant (`created`), millisecond precision.
	pub created: Option<OffsetDateTime>,
	/// Expiration instant (`exp`), second precision.
	pub expiration: Option<OffsetDateTime>,
}
impl ClaimSet {
	/// Builds a complete claim set whose expiration is `created + lifetime`, truncated to the
	/// whole second the `exp` claim can carry.
	pub fn issued(
		subject: impl Into<String>,
		audience: Audience,
		created: OffsetDateTime,
		lifetime: Duration,
	) -> Self {
		let expiration = created.saturating_add(lifetime);
		let expiration =
			expiration.saturating_sub(Duration::nanoseconds(i64::from(expiration.nanosecond())));

		Self {
			subject: Some(subject.into()),
			audience: Some(audience),
			created: Some(created),
			expiration: Some(expiration),
		}
	}

	/// Returns `true` when the expiration is missing or not after `instant`.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		self.expiration.is_none_or(|expiration| expiration <= instant)
	}
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct WireClaims {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub(crate) sub: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub(crate) audience: Option<Audience>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub(crate) created: Option<i64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub(crate) exp: Option<i64>,
}
impl From<&ClaimSet> for WireClaims {
	fn from(claims: &ClaimSet) -> Self {
		Self {
			sub: claims.subject.clone(),
			audience: claims.audience,
			created: claims.created.map(unix_millis),
			exp: claims.expiration.map(OffsetDateTime::unix_timestamp),
		}
	}
}
impl From<WireClaims> for ClaimSet {
	// Out-of-range timestamps decode as missing claims, which readers treat as expired.
	fn from(wire: WireClaims) -> Self {
		Self {
			subject: wire.sub,
			audience: wire.audience,
			created: wire.created.and_then(from_unix_millis),
			expiration: wire.exp.and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok()),
		}
	}
}

fn unix_millis(instant: OffsetDateTime) -> i64 {
	instant.unix_timestamp_nanos().div_euclid(1_000_000) as i64
}

fn from_unix_millis(millis: i64) -> Option<OffsetDateTime> {
	OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()
}
