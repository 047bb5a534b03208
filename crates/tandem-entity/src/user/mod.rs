//! User entity and its projections.

pub mod model;

pub use model::{CreateUser, OnboardingProfile, User, UserProfile, UserSummary};
