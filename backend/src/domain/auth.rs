//! Login credentials and the password comparison seam.
//!
//! Form values reach the credential store exactly as typed, blank ones
//! included; matching against stored users is exact and case-sensitive.

use zeroize::Zeroizing;

/// Username/password pair submitted by the login or add-user form.
///
/// # Examples
/// ```
/// use guest_desk::domain::LoginCredentials;
///
/// let creds = LoginCredentials::new("admin", "pw1");
/// assert_eq!(creds.username(), "admin");
/// assert_eq!(creds.password(), "pw1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Credentials from raw form inputs, unchanged.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Username exactly as submitted.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password exactly as submitted.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Strategy used by the credential store to persist and compare passwords.
///
/// Swapping the implementation (for a hashing scheme) does not change the
/// credential store's contract.
pub trait PasswordPolicy: Send + Sync {
    /// Value written to the user file for a newly registered password.
    fn stored_form(&self, password: &str) -> String;

    /// Whether `candidate` matches the `stored` value.
    fn matches(&self, stored: &str, candidate: &str) -> bool;
}

/// Stores and compares passwords as plaintext, as the user file always has.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextPasswords;

impl PasswordPolicy for PlaintextPasswords {
    fn stored_form(&self, password: &str) -> String {
        password.to_owned()
    }

    fn matches(&self, stored: &str, candidate: &str) -> bool {
        stored == candidate
    }
}
