//! API credentials for the C3 exchange
//!
//! Implements the HMAC-SHA256 signature required by private endpoints.
//!
//! # Security
//!
//! Private keys are stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha256;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Environment variable holding the public key
pub const PUBLIC_KEY_ENV: &str = "C3_PUB_KEY";
/// Environment variable holding the private key
pub const PRIVATE_KEY_ENV: &str = "C3_PR_KEY";

/// API credentials for authenticated requests
///
/// Private keys are automatically zeroized when the Credentials are dropped,
/// preventing sensitive data from remaining in memory.
pub struct Credentials {
    /// Public key, sent in the `API-PublicKey` header
    public_key: String,
    /// Private key bytes (UTF-8 of the key string, zeroized on drop)
    private_key: SecretBox<Vec<u8>>,
}

impl Credentials {
    /// Create new credentials from a public key and a private key
    ///
    /// The private key is used verbatim as the HMAC key; it is not decoded.
    pub fn new(public_key: impl Into<String>, private_key: impl AsRef<str>) -> AuthResult<Self> {
        let public_key = public_key.into();
        let private_key = private_key.as_ref();

        if public_key.is_empty() {
            return Err(AuthError::InvalidCredentials(
                "public key is empty".to_string(),
            ));
        }
        // Sent verbatim as a header but whitespace-stripped when signed
        if public_key.chars().any(char::is_whitespace) {
            return Err(AuthError::InvalidCredentials(
                "public key contains whitespace".to_string(),
            ));
        }
        if private_key.is_empty() {
            return Err(AuthError::InvalidCredentials(
                "private key is empty".to_string(),
            ));
        }

        Ok(Self {
            public_key,
            private_key: SecretBox::new(Box::new(private_key.as_bytes().to_vec())),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `C3_PUB_KEY` and `C3_PR_KEY` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let public_key = std::env::var(PUBLIC_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(PUBLIC_KEY_ENV.to_string()))?;
        let private_key = std::env::var(PRIVATE_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(PRIVATE_KEY_ENV.to_string()))?;

        Self::new(public_key, private_key)
    }

    /// Get the public key
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Sign a message with HMAC-SHA256
    ///
    /// The message is signed as given; building the canonical form is the
    /// job of [`CanonicalMessage`](crate::CanonicalMessage).
    ///
    /// # Returns
    /// Lowercase hex-encoded signature (64 characters)
    pub fn sign(&self, message: &str) -> AuthResult<String> {
        let mut mac = HmacSha256::new_from_slice(self.private_key.expose_secret())
            .map_err(|e| AuthError::Signing(e.to_string()))?;
        mac.update(message.as_bytes());

        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBox with same content)
    fn clone(&self) -> Self {
        Self {
            public_key: self.public_key.clone(),
            private_key: SecretBox::new(Box::new(self.private_key.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.public_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("public_key", &format!("{}...", prefix))
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}
