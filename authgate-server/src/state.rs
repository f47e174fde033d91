use authgate_config::Config;
use authgate_credentials::{CredentialVerifier, Credentials};

/// Shared application state passed to every route handler.
pub struct AppState {
    pub verifier: CredentialVerifier,
}

impl AppState {
    pub fn new(verifier: CredentialVerifier) -> Self {
        Self { verifier }
    }

    /// Build state from resolved configuration.
    pub fn from_config(cfg: &Config) -> Self {
        let expected = Credentials::new(
            cfg.credentials.username.clone(),
            cfg.credentials.password.clone(),
        );
        Self::new(CredentialVerifier::new(expected))
    }
}
