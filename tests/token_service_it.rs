// crates.io
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use rand::{Rng, distr::Alphanumeric};
use time::{Duration, OffsetDateTime, macros};
// self
use jwt_helper::{
	auth::{Audience, ClaimSet, DeviceClass, TokenStatus},
	config::TokenConfig,
	device::FixedDevice,
	error::ParseError,
	service::TokenService,
};

const SECRET: &str = "integration-secret";
const LIFETIME_SECONDS: i64 = 604_800;

fn service_with(secret: &str, seconds: i64) -> TokenService {
	let config = TokenConfig::new(secret, seconds)
		.expect("Failed to build token configuration for service tests.");

	TokenService::new(config)
}

fn service() -> TokenService {
	service_with(SECRET, LIFETIME_SECONDS)
}

fn issue(service: &TokenService, username: &str, device: DeviceClass) -> String {
	service.issue(username, device).expect("Issuing a token fixture should succeed.")
}

fn replace_segment(token: &str, index: usize, segment: &str) -> String {
	let mut parts: Vec<&str> = token.split('.').collect();

	parts[index] = segment;

	parts.join(".")
}

#[test]
fn username_round_trips_for_every_device_class() {
	let service = service();

	for device in [DeviceClass::Normal, DeviceClass::Tablet, DeviceClass::Mobile, DeviceClass::Other]
	{
		for username in ["alice", "bob@example.com", "张三", "with space", ""] {
			let token = issue(&service, username, device);

			assert_eq!(service.username_of(&token).as_deref(), Some(username));
		}
	}
}

#[test]
fn audience_follows_device_class() {
	let service = service();
	let cases = [
		(DeviceClass::Normal, Audience::Web),
		(DeviceClass::Tablet, Audience::Tablet),
		(DeviceClass::Mobile, Audience::Mobile),
		(DeviceClass::Other, Audience::Unknown),
	];

	for (device, audience) in cases {
		let token = issue(&service, "alice", device);
		let payload = token.split('.').nth(1).expect("Token should have a payload segment.");
		let json: serde_json::Value = serde_json::from_slice(
			&URL_SAFE_NO_PAD.decode(payload).expect("Payload segment should be base64url."),
		)
		.expect("Payload should be JSON.");

		assert_eq!(service.audience_of(&token), Some(audience));
		assert_eq!(json["audience"], audience.as_str());
		assert_eq!(json["sub"], "alice");
		assert!(json["created"].is_i64());
		assert!(json["exp"].is_i64());
	}
}

#[test]
fn classifier_drives_issued_audience() {
	let service = service();
	let by_agent = |agent: &str| {
		if agent.contains("Mobile") { DeviceClass::Mobile } else { DeviceClass::Normal }
	};
	let token = service
		.issue_for("alice", &by_agent, "Mozilla/5.0 (iPhone) Mobile/15E148")
		.expect("Issuing via a classifier should succeed.");

	assert_eq!(service.audience_of(&token), Some(Audience::Mobile));

	let token = service
		.issue_for("alice", &FixedDevice(DeviceClass::Tablet), &())
		.expect("Issuing via a fixed classifier should succeed.");

	assert_eq!(service.audience_of(&token), Some(Audience::Tablet));
}

#[test]
fn expiration_is_issuance_plus_lifetime() {
	let service = service();
	let before = OffsetDateTime::now_utc();
	let token = issue(&service, "alice", DeviceClass::Normal);
	let after = OffsetDateTime::now_utc();
	let expiration = service.expiration_of(&token).expect("Issued token should carry exp.");
	let lifetime = Duration::seconds(LIFETIME_SECONDS);

	// `exp` has whole-second resolution.
	assert!(expiration >= before + lifetime - Duration::seconds(1));
	assert!(expiration <= after + lifetime);

	let fixed = macros::datetime!(2024-02-29 23:59:59 UTC);
	let token = service
		.issue_at("alice", DeviceClass::Normal, fixed)
		.expect("Issuing at a fixed instant should succeed.");

	assert_eq!(service.expiration_of(&token), Some(fixed + lifetime));
}

#[test]
fn any_signature_edit_is_rejected() {
	let service = service();
	let token = issue(&service, "alice", DeviceClass::Normal);
	let signature = token.rsplit('.').next().expect("Token should have a signature segment.");

	for index in 0..signature.len() {
		let mut bytes = signature.as_bytes().to_vec();

		bytes[index] = if bytes[index] == b'A' { b'B' } else { b'A' };

		let forged = String::from_utf8(bytes).expect("Base64url alphabet should stay UTF-8.");
		let tampered = replace_segment(&token, 2, &forged);

		assert!(service.parse_claims(&tampered).is_err(), "Edit at {index} was accepted.");
		assert!(!service.validate(&tampered, "alice"));
	}

	let mut bytes = signature.as_bytes().to_vec();

	bytes[0] = if bytes[0] == b'A' { b'B' } else { b'A' };

	let tampered = replace_segment(
		&token,
		2,
		&String::from_utf8(bytes).expect("Base64url alphabet should stay UTF-8."),
	);

	assert_eq!(service.parse_claims(&tampered), Err(ParseError::InvalidSignature));
}

#[test]
fn forged_payload_with_original_signature_is_rejected() {
	let service = service();
	let token = issue(&service, "alice", DeviceClass::Normal);
	let payload = URL_SAFE_NO_PAD.encode(br#"{"sub":"admin","audience":"web","exp":99999999999}"#);
	let forged = replace_segment(&token, 1, &payload);

	assert_eq!(service.parse_claims(&forged), Err(ParseError::InvalidSignature));
	assert_eq!(service.username_of(&forged), None);
	assert!(!service.validate(&forged, "admin"));
}

#[test]
fn other_algorithms_are_rejected() {
	let service = service();
	let claims = serde_json::json!({ "sub": "alice", "exp": 99_999_999_999_i64 });
	let hs256 = jsonwebtoken::encode(
		&Header::new(Algorithm::HS256),
		&claims,
		&EncodingKey::from_secret(SECRET.as_bytes()),
	)
	.expect("Encoding an HS256 fixture should succeed.");

	assert_eq!(service.parse_claims(&hs256), Err(ParseError::UnsupportedAlgorithm));
	assert!(!service.validate(&hs256, "alice"));

	let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
	let unsigned = replace_segment(&replace_segment(&hs256, 0, &header), 2, "");

	assert!(service.parse_claims(&unsigned).is_err());
	assert!(!service.validate(&unsigned, "alice"));
}

#[test]
fn expired_tokens_fail_validation() {
	let service = service_with(SECRET, 3_600);
	let issued = OffsetDateTime::now_utc() - Duration::hours(2);
	let token = service
		.issue_at("alice", DeviceClass::Normal, issued)
		.expect("Issuing a back-dated token should succeed.");

	assert!(service.is_expired(&token));
	assert_eq!(service.status(&token), TokenStatus::Expired);
	assert!(!service.validate(&token, "alice"));
	assert_eq!(service.username_of(&token).as_deref(), Some("alice"));
	assert!(service.expiration_of(&token).is_some());
}

#[test]
fn fresh_tokens_validate_for_their_owner_only() {
	let service = service();
	let token = issue(&service, "alice", DeviceClass::Mobile);

	assert!(!service.is_expired(&token));
	assert_eq!(service.status(&token), TokenStatus::Valid);
	assert!(service.validate(&token, "alice"));
	assert!(service.validate_principal(&token, "alice"));
	assert!(service.validate_principal(&token, &String::from("alice")));
	assert!(!service.validate(&token, "Alice"));
	assert!(!service.validate(&token, ""));
}

#[test]
fn wrong_secret_is_rejected() {
	let issuer = service_with("secret-a", LIFETIME_SECONDS);
	let verifier = service_with("secret-b", LIFETIME_SECONDS);
	let token = issue(&issuer, "alice", DeviceClass::Normal);

	assert_eq!(verifier.parse_claims(&token), Err(ParseError::InvalidSignature));
	assert_eq!(verifier.username_of(&token), None);
	assert!(verifier.is_expired(&token));
	assert!(!verifier.validate(&token, "alice"));
	assert!(issuer.validate(&token, "alice"));
}

#[test]
fn garbage_input_never_validates() {
	let service = service();
	let mut rng = rand::rng();
	let mut inputs = vec![
		String::new(),
		".".into(),
		"..".into(),
		"a.b.c".into(),
		"not a token at all".into(),
	];

	for _ in 0..64 {
		let len = rng.random_range(0..200);
		let noise: String = (&mut rng).sample_iter(&Alphanumeric).take(len).map(char::from).collect();

		inputs.push(noise);
	}

	for input in &inputs {
		assert!(!service.validate(input, "alice"));
		assert!(service.is_expired(input));
		assert_eq!(service.username_of(input), None);
		assert_eq!(service.expiration_of(input), None);
		assert_eq!(service.status(input), TokenStatus::Malformed);
	}
}

#[test]
fn missing_claims_fail_closed() {
	let service = service();
	let now = OffsetDateTime::now_utc();
	let no_subject = service
		.sign(&ClaimSet {
			subject: None,
			audience: Some(Audience::Web),
			created: Some(now),
			expiration: Some(now + Duration::hours(1)),
		})
		.expect("Signing a claim set without subject should succeed.");

	assert!(service.parse_claims(&no_subject).is_ok());
	assert_eq!(service.username_of(&no_subject), None);
	assert!(!service.is_expired(&no_subject));
	assert!(!service.validate(&no_subject, "alice"));
	assert!(!service.validate(&no_subject, ""));

	let no_expiration = service
		.sign(&ClaimSet {
			subject: Some("alice".into()),
			audience: None,
			created: None,
			expiration: None,
		})
		.expect("Signing a claim set without expiration should succeed.");

	assert_eq!(service.username_of(&no_expiration).as_deref(), Some("alice"));
	assert_eq!(service.expiration_of(&no_expiration), None);
	assert!(service.is_expired(&no_expiration));
	assert_eq!(service.status(&no_expiration), TokenStatus::Expired);
	assert!(!service.validate(&no_expiration, "alice"));
}

#[test]
fn service_is_shareable_across_threads() {
	let service = std::sync::Arc::new(service());
	let handles: Vec<_> = (0..4)
		.map(|i| {
			let service = service.clone();

			std::thread::spawn(move || {
				let username = format!("user-{i}");
				let token = service
					.issue(&username, DeviceClass::Normal)
					.expect("Issuing from a worker thread should succeed.");

				service.validate(&token, &username)
			})
		})
		.collect();

	for handle in handles {
		assert!(handle.join().expect("Worker thread should not panic."));
	}
}
