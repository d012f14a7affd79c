//! Argon2 password hashing.
//!
//! Hashes are self-describing PHC strings, so verification reads the cost
//! parameters from the stored hash and works for any `Params` used at
//! registration time.

use argon2::{
    password_hash::{self, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, PasswordHash, Version,
};
use rand::rngs::OsRng;

pub use argon2::Params;

/// Hash `password` with a fresh random salt. `None` uses the argon2 defaults.
pub fn hash_password(password: &str, params: Option<&Params>) -> Result<String, password_hash::Error> {
    let argon = match params {
        Some(p) => Argon2::new(Algorithm::Argon2id, Version::V0x13, p.clone()),
        None => Argon2::default(),
    };
    let salt = SaltString::generate(&mut OsRng);
    Ok(argon.hash_password(password.as_bytes(), &salt)?.to_string())
}

/// Check `password` against a stored PHC hash.
///
/// A mismatch is `Ok(false)`; `Err` means the hash itself is unusable.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
pub(crate) fn fast_params() -> Params {
    Params::new(256, 1, 1, None).unwrap()
}
