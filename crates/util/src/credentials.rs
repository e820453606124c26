//! In-memory credential check for the login screen.

use thiserror::Error;
use tracing::debug;

pub const DEMO_EMAIL: &str = "admin@locks.com.br";
pub const DEMO_PASSWORD: &str = "password";

/// Rejection reasons. The `Display` text is shown verbatim under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("Por favor, preencha e-mail e senha.")]
    MissingFields,
    #[error("E-mail ou senha inválidos.")]
    Mismatch,
}

/// Decides whether an email/password pair opens a session.
pub trait CredentialVerifier: Send + Sync + std::fmt::Debug {
    fn verify(&self, email: &str, password: &str) -> Result<(), CredentialError>;
}

/// Compares against a single fixed pair.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    email: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new(DEMO_EMAIL, DEMO_PASSWORD)
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, email: &str, password: &str) -> Result<(), CredentialError> {
        if email.is_empty() || password.is_empty() {
            return Err(CredentialError::MissingFields);
        }
        if email != self.email || password != self.password {
            debug!(email, "credential mismatch");
            return Err(CredentialError::Mismatch);
        }
        Ok(())
    }
}
