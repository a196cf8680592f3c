use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

/// Hash a plaintext password with a fresh random salt.
pub fn hash(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("password hashing failed: {e}"))?;
    Ok(hash.to_string())
}

/// Check a plaintext password against a stored hash. A mismatch is
/// `Ok(false)`; only a malformed stored hash is an error.
pub fn verify(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| anyhow::anyhow!("stored password hash is malformed: {e}"))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let password = "pw1";
        let hashed = hash(password).expect("hashing should succeed");
        assert_ne!(hashed, password);
        assert!(verify(password, &hashed).expect("verify should succeed"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hashed = hash("correct-horse-battery-staple").expect("hashing should succeed");
        assert!(!verify("Correct-horse-battery-staple", &hashed).expect("verify should not error"));
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        assert!(verify("anything", "not-a-valid-hash").is_err());
    }

    #[test]
    fn same_password_hashes_differently_each_time() {
        let a = hash("pw1").expect("hash");
        let b = hash("pw1").expect("hash");
        assert_ne!(a, b);
    }
}
