//! Random identifier generation.
//!
//! Short codes and authorization tokens are both drawn from the OS entropy
//! source. Neither is derived from a counter, so consecutive values reveal
//! nothing about each other. Uniqueness of short codes is enforced by the
//! `links` primary key, not here.

use base64::Engine as _;
use rand::Rng;

/// Length of random bytes before base64 encoding.
const CODE_LENGTH_BYTES: usize = 9;

/// Alphabet for authorization tokens.
const TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of a generated authorization token.
pub const TOKEN_LENGTH: usize = 48;

/// Generates a random short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character code.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Generates a random authorization token.
///
/// 48 alphanumeric characters, roughly 286 bits of entropy.
pub fn generate_token() -> String {
    let mut rng = rand::rng();

    (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..TOKEN_CHARSET.len());
            TOKEN_CHARSET[idx] as char
        })
        .collect()
}
