//! Admin credential checks.

use crate::config::AdminCredentials;

/// Decides whether a username/password pair may open an admin session
pub trait CredentialCheck {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A single configured username/password pair.
///
/// Surrounding whitespace on the submitted values is ignored.
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl From<&AdminCredentials> for StaticCredentials {
    fn from(credentials: &AdminCredentials) -> Self {
        Self::new(credentials.username.clone(), credentials.password.clone())
    }
}

impl CredentialCheck for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username.trim() == self.username && password.trim() == self.password
    }
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
