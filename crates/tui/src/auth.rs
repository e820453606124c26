//! Session gate in front of the dashboard shell.

use chrono::{DateTime, Local};
use safra_util::{CredentialError, CredentialVerifier};
use tracing::info;

/// Exposes the authenticated flag and the login/logout actions.
pub trait AuthGate: std::fmt::Debug {
    fn is_authenticated(&self) -> bool;
    fn login(&mut self, email: &str, password: &str) -> Result<(), CredentialError>;
    fn logout(&mut self);
}

#[derive(Debug, Clone)]
pub struct Session {
    pub email: String,
    pub started_at: DateTime<Local>,
}

/// In-memory session guarded by a [`CredentialVerifier`].
#[derive(Debug)]
pub struct SessionGate {
    verifier: Box<dyn CredentialVerifier>,
    session: Option<Session>,
}

impl SessionGate {
    pub fn new(verifier: Box<dyn CredentialVerifier>) -> Self {
        Self { verifier, session: None }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}

impl AuthGate for SessionGate {
    fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    fn login(&mut self, email: &str, password: &str) -> Result<(), CredentialError> {
        self.verifier.verify(email, password)?;
        info!(email, "session started");
        self.session = Some(Session {
            email: email.to_string(),
            started_at: Local::now(),
        });
        Ok(())
    }

    fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            let duration = Local::now() - session.started_at;
            info!(email = %session.email, seconds = duration.num_seconds(), "session ended");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safra_util::StaticCredentials;

    #[test]
    fn login_and_logout_toggle_authentication() {
        let mut gate = SessionGate::new(Box::new(StaticCredentials::default()));
        assert!(!gate.is_authenticated());
        gate.login("admin@locks.com.br", "password").expect("valid credentials");
        assert!(gate.is_authenticated());
        assert_eq!(gate.session().map(|s| s.email.as_str()), Some("admin@locks.com.br"));
        gate.logout();
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn failed_login_keeps_gate_closed() {
        let mut gate = SessionGate::new(Box::new(StaticCredentials::default()));
        assert_eq!(gate.login("admin@locks.com.br", "nope"), Err(CredentialError::Mismatch));
        assert!(!gate.is_authenticated());
    }
}
