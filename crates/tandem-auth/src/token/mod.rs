//! Session token encoding, decoding, and claims.

pub mod claims;
pub mod service;

pub use claims::SessionClaims;
pub use service::SessionTokenService;
