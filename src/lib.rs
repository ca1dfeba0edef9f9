//! Stateless JWT helper: sign a username plus a coarse client audience into a time-limited
//! HS512 token, then verify it, read its claims, and check it against an expected user.
//!
//! ```
//! use jwt_helper::{auth::DeviceClass, config::TokenConfig, service::TokenService};
//!
//! let config = TokenConfig::new("change-me", 3_600).expect("Example configuration should be valid.");
//! let service = TokenService::new(config);
//! let token = service.issue("alice", DeviceClass::Normal).expect("Signing should succeed.");
//!
//! assert_eq!(service.username_of(&token).as_deref(), Some("alice"));
//! assert!(service.validate(&token, "alice"));
//! assert!(!service.validate(&token, "mallory"));
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod device;
pub mod error;
pub mod obs;
pub mod service;

mod _prelude {
	pub use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};

	pub use crate::error::Result;
}

#[cfg(test)] use {base64 as _, color_eyre as _, rand as _};
