//! Request DTOs with validation.
//!
//! Body fields are optional at the serde layer so that a missing field is a
//! workflow-level `InvalidInput` (with the message clients expect), not a
//! deserialization rejection.

use serde::{Deserialize, Serialize};
use validator::Validate;

use tandem_core::error::AppError;
use tandem_service::auth::{LoginInput, OnboardingInput, SignupInput};

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupRequest {
    /// Email address.
    pub email: Option<String>,
    /// Password (minimum length checked again by the credential policy).
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
    /// Display name.
    pub full_name: Option<String>,
}

impl From<SignupRequest> for SignupInput {
    fn from(req: SignupRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            full_name: req.full_name,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    /// Email address.
    pub email: Option<String>,
    /// Password.
    pub password: Option<String>,
}

impl From<LoginRequest> for LoginInput {
    fn from(req: LoginRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
        }
    }
}

/// Onboarding request body. All five fields are required non-empty; the
/// workflow reports which ones are missing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingRequest {
    /// Display name.
    pub full_name: Option<String>,
    /// Short self-description.
    pub bio: Option<String>,
    /// The language the user speaks natively.
    pub native_language: Option<String>,
    /// The language the user wants to practice.
    pub learning_language: Option<String>,
    /// Free-form location string.
    pub location: Option<String>,
}

impl From<OnboardingRequest> for OnboardingInput {
    fn from(req: OnboardingRequest) -> Self {
        Self {
            full_name: req.full_name,
            bio: req.bio,
            native_language: req.native_language,
            learning_language: req.learning_language,
            location: req.location,
        }
    }
}

/// Flattens validator output into a single `InvalidInput` error.
pub fn validation_error(errors: &validator::ValidationErrors) -> AppError {
    let message = errors
        .field_errors()
        .values()
        .flat_map(|field| field.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| "Invalid request".to_string());
    AppError::validation(message)
}
