//! Credentials and request signing for the C3 exchange API
//!
//! Private endpoints are authenticated with two headers: `API-PublicKey`
//! and `API-Signature`, where the signature is the lowercase hex
//! HMAC-SHA256 of a [`CanonicalMessage`] keyed by the private key.
//!
//! # Example
//!
//! ```no_run
//! use c3_auth::{Credentials, RequestSigner};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load credentials from environment
//!     let creds = Credentials::from_env()?;
//!
//!     let signer = RequestSigner::new(&creds);
//!     let headers = signer.sign("https://api.c3.exchange/api/wallets/balances", None)?;
//!     for (name, value) in headers.iter() {
//!         println!("{name}: {value}");
//!     }
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::{Credentials, PRIVATE_KEY_ENV, PUBLIC_KEY_ENV};
pub use error::{AuthError, AuthResult};
pub use signer::{
    CanonicalMessage, RequestSigner, SignedHeaders, PUBLIC_KEY_HEADER, SIGNATURE_HEADER,
};
