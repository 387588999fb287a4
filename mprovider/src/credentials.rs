//! In-memory secret handling for caller-supplied credentials.
//!
//! ```rust
//! use mprovider::SecretString;
//!
//! let key = SecretString::new("sk-test");
//! assert_eq!(key.expose(), "sk-test");
//! assert_eq!(format!("{key:?}"), "[REDACTED]");
//! ```

#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        // SAFETY: zero bytes are valid UTF-8.
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_prints_secret() {
        let secret = SecretString::new("sk-live-123");
        assert!(!format!("{secret:?}").contains("sk-live"));
    }

    #[test]
    fn empty_secret_is_valid_state() {
        let secret = SecretString::default();
        assert!(secret.is_empty());
        assert_eq!(secret.expose(), "");
    }
}
