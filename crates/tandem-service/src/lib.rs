//! # tandem-service
//!
//! Business logic layer for Tandem. The auth service owns the
//! signup/login/onboarding workflow; the friend service owns the
//! request/accept state machine.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod friends;

pub use auth::{AuthService, AuthSession};
pub use context::RequestContext;
pub use friends::FriendService;
