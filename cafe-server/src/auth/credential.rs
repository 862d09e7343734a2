//! Password hashing and verification
//!
//! PBKDF2-HMAC-SHA256 with a random 128-bit salt, 100 000 rounds and a
//! 256-bit derived key, encoded as a single PHC string. The plaintext is
//! never stored or logged.

use pbkdf2::password_hash::rand_core::OsRng;
use pbkdf2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use pbkdf2::{Params, Pbkdf2};

const ROUNDS: u32 = 100_000;
const OUTPUT_LENGTH: usize = 32;

/// Derive a verifiable hash record from a plaintext password
pub fn hash_password(password: &str) -> Result<String, pbkdf2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let params = Params {
        rounds: ROUNDS,
        output_length: OUTPUT_LENGTH,
    };
    let hash = Pbkdf2.hash_password_customized(
        password.as_bytes(),
        None,
        None,
        params,
        salt.as_salt(),
    )?;
    Ok(hash.to_string())
}

/// Verify a plaintext candidate against a stored hash record.
///
/// Fails closed: an unrecognized or malformed record returns false, never
/// an error. The comparison of derived keys is constant-time.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };
    Pbkdf2.verify_password(password.as_bytes(), &parsed).is_ok()
}
