//! Claim-domain types: device classes, audiences, claim sets, and signing secrets.

pub mod audience;
pub mod claims;
pub mod secret;
pub mod status;

pub use audience::*;
pub use claims::*;
pub use secret::*;
pub use status::*;
