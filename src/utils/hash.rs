use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hashes a quiz secret code with a fresh random salt.
///
/// The result is a PHC string, so salt and parameters travel with the hash.
pub fn hash_secret_code(secret_code: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(secret_code.as_bytes(), &salt)?
        .to_string();

    Ok(hash)
}

/// Checks a plaintext secret code against a stored hash.
///
/// A mismatch is `Ok(false)`; only an unparseable stored hash is an error.
pub fn verify_secret_code(
    secret_code: &str,
    stored_hash: &str,
) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(stored_hash)?;

    let result = Argon2::default().verify_password(secret_code.as_bytes(), &parsed_hash);

    match result {
        Ok(_) => Ok(true),
        Err(_) => Ok(false),
    }
}
