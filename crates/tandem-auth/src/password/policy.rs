//! Credential policy: password length and email shape.

use tandem_core::config::auth::AuthConfig;
use tandem_core::error::AppError;

/// Validates new credentials against configured policy.
#[derive(Debug, Clone)]
pub struct CredentialPolicy {
    /// Minimum password length.
    min_length: usize,
}

impl CredentialPolicy {
    /// Creates a new policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against the length policy.
    pub fn validate_password(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.min_length
            )));
        }
        Ok(())
    }

    /// Validates that an email has a `local@domain.tld` shape.
    ///
    /// Accepts exactly one `@` with a non-empty local part and a domain
    /// containing a dot with non-empty labels; whitespace is rejected
    /// anywhere.
    pub fn validate_email(&self, email: &str) -> Result<(), AppError> {
        if is_valid_email(email) {
            Ok(())
        } else {
            Err(AppError::validation("Invalid email format"))
        }
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((name, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !name.is_empty() && !tld.is_empty()
}
