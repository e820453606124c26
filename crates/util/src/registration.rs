//! Validation for the simulated account registration form.

use thiserror::Error;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Message shown once a registration passes validation. Nothing is stored.
pub const REGISTRATION_SUCCESS: &str = "Cadastro simulado com sucesso! Você seria redirecionado ou logado.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Todos os campos são obrigatórios.")]
    MissingFields,
    #[error("As senhas não coincidem.")]
    PasswordMismatch,
    #[error("A senha deve ter pelo menos 6 caracteres.")]
    PasswordTooShort,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Checks required fields first, then the confirmation, then the length.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        let fields = [&self.name, &self.email, &self.password, &self.confirm_password];
        if fields.iter().any(|field| field.is_empty()) {
            return Err(RegistrationError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(RegistrationError::PasswordTooShort);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            name: "Ana Souza".into(),
            email: "ana@example.com".into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(form("segredo", "segredo").validate(), Ok(()));
    }

    #[test]
    fn any_empty_field_fails_first() {
        let mut incomplete = form("abc", "xyz");
        incomplete.name.clear();
        assert_eq!(incomplete.validate(), Err(RegistrationError::MissingFields));
    }

    #[test]
    fn mismatch_is_checked_before_length() {
        assert_eq!(form("abc", "abd").validate(), Err(RegistrationError::PasswordMismatch));
        assert_eq!(form("abc", "abc").validate(), Err(RegistrationError::PasswordTooShort));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(form("çãõéíú", "çãõéíú").validate(), Ok(()));
    }
}
