pub mod config;
pub mod credentials;
pub mod paths;
pub mod registration;
pub mod search;
pub mod text;

pub use config::{ConfigError, ConfigInputs, ShellConfig};
pub use credentials::{CredentialError, CredentialVerifier, StaticCredentials};
pub use paths::{default_log_path, expand_tilde};
pub use registration::{MIN_PASSWORD_CHARS, REGISTRATION_SUCCESS, RegistrationError, RegistrationForm};
