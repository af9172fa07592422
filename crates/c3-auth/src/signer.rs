//! Canonical message construction and request signing
//!
//! Every private request is authenticated by signing one string:
//!
//! ```text
//! public_key + request_url + payload
//! ```
//!
//! concatenated without delimiters, then stripped of all whitespace.
//! `request_url` is scheme, host and path, plus the query string (with its
//! leading `?`) for GET requests or the `/{id}` suffix for DELETE requests.
//! `payload` is the compact JSON body of a POST request and empty otherwise.

use crate::credentials::Credentials;
use crate::error::AuthResult;
use std::fmt;
use tracing::trace;

/// Header carrying the public key
pub const PUBLIC_KEY_HEADER: &str = "API-PublicKey";
/// Header carrying the hex HMAC signature
pub const SIGNATURE_HEADER: &str = "API-Signature";

/// The exact string an HMAC signature is computed over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalMessage(String);

impl CanonicalMessage {
    /// Build the canonical message for a request
    pub fn new(public_key: &str, request_url: &str, payload: Option<&str>) -> Self {
        let payload = payload.unwrap_or_default();
        let mut message =
            String::with_capacity(public_key.len() + request_url.len() + payload.len());

        for part in [public_key, request_url, payload] {
            message.extend(part.chars().filter(|c| !c.is_whitespace()));
        }

        Self(message)
    }

    /// Get the message as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authentication headers for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// Value of `API-PublicKey`
    pub public_key: String,
    /// Value of `API-Signature`
    pub signature: String,
}

impl SignedHeaders {
    /// Header name/value pairs in the order they are attached
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (PUBLIC_KEY_HEADER, self.public_key.as_str()),
            (SIGNATURE_HEADER, self.signature.as_str()),
        ]
        .into_iter()
    }
}

/// Request signer for building authenticated requests
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    /// Get the public key
    pub fn public_key(&self) -> &str {
        self.credentials.public_key()
    }

    /// Build the canonical message for a request
    pub fn canonical_message(&self, request_url: &str, payload: Option<&str>) -> CanonicalMessage {
        CanonicalMessage::new(self.public_key(), request_url, payload)
    }

    /// Sign a request and return the headers to attach to it
    pub fn sign(&self, request_url: &str, payload: Option<&str>) -> AuthResult<SignedHeaders> {
        let message = self.canonical_message(request_url, payload);
        trace!(len = message.as_str().len(), "Signing canonical message");

        Ok(SignedHeaders {
            public_key: self.public_key().to_string(),
            signature: self.credentials.sign(message.as_str())?,
        })
    }
}
