//! Credential verification boundary used by the gateway service.
//!
//! Provides:
//! - `Credentials`: the expected username/password pair, injected at startup
//! - `CredentialVerifier`: accept/reject decisions over submitted pairs
//! - `Verdict`: the outcome of a verification

use serde::{Deserialize, Serialize};

/// The expected login pair. Always injected from configuration so tests can
/// substitute their own values without touching verifier logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[inline]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Outcome of a verification. Rejection is a normal result, not an error;
/// there is no failure path out of the verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    #[inline]
    pub fn is_accepted(self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Decides acceptance of submitted username/password pairs against the
/// configured expected pair.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    expected: Credentials,
}

impl CredentialVerifier {
    pub fn new(expected: Credentials) -> Self {
        Self { expected }
    }

    /// Accepted iff both fields equal the expected values exactly.
    /// Case-sensitive, no trimming; empty input is an ordinary mismatch.
    pub fn verify(&self, username: &str, password: &str) -> Verdict {
        if username == self.expected.username && password == self.expected.password {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> CredentialVerifier {
        CredentialVerifier::new(Credentials::new("admin", "123"))
    }

    #[test]
    fn accepts_exact_match_only() {
        let v = verifier();
        assert_eq!(v.verify("admin", "123"), Verdict::Accepted);
        assert_eq!(v.verify("admin", "wrong"), Verdict::Rejected);
        assert_eq!(v.verify("root", "123"), Verdict::Rejected);
        assert_eq!(v.verify("root", "wrong"), Verdict::Rejected);
    }

    #[test]
    fn match_is_case_sensitive_and_untrimmed() {
        let v = verifier();
        assert_eq!(v.verify("Admin", "123"), Verdict::Rejected);
        assert_eq!(v.verify("admin", "123 "), Verdict::Rejected);
        assert_eq!(v.verify(" admin", "123"), Verdict::Rejected);
    }

    #[test]
    fn empty_input_is_rejected_not_an_error() {
        let v = verifier();
        assert_eq!(v.verify("", ""), Verdict::Rejected);
        assert_eq!(v.verify("admin", ""), Verdict::Rejected);
        assert_eq!(v.verify("", "123"), Verdict::Rejected);
    }

    #[test]
    fn expected_pair_is_substitutable() {
        let v = CredentialVerifier::new(Credentials::new("svc", "hunter2"));
        assert_eq!(v.verify("svc", "hunter2"), Verdict::Accepted);
        assert_eq!(v.verify("admin", "123"), Verdict::Rejected);
    }

    #[test]
    fn verdict_helpers() {
        assert!(Verdict::Accepted.is_accepted());
        assert!(!Verdict::Rejected.is_accepted());
    }
}
