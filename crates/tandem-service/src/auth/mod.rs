//! Signup, login, and onboarding workflow.

pub mod service;

pub use service::{AuthService, AuthSession, LoginInput, OnboardingInput, SignupInput};
