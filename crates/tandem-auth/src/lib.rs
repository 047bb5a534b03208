//! # tandem-auth
//!
//! Session token service (signed, time-bound, stateless) and credential
//! handling (Argon2id hashing, password/email policy).

pub mod password;
pub mod token;

pub use password::{CredentialPolicy, PasswordHasher};
pub use token::{SessionClaims, SessionTokenService};
