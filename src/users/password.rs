use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

/// One-way hash of a plaintext credential. The returned PHC string embeds
/// the algorithm parameters and a fresh salt, so it is all that needs to be
/// stored.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let digest = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(digest)
}

/// Constant-time check of a plaintext against a stored digest.
#[allow(dead_code)]
pub fn verify_password(plain: &str, digest: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(digest).map_err(|e| {
        error!(error = %e, "argon2 parse digest error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_never_the_plaintext() {
        let digest = hash_password("hunter22").expect("hashing should succeed");
        assert_ne!(digest, "hunter22");
        assert!(digest.starts_with("$argon2"));
    }

    #[test]
    fn same_plaintext_hashes_to_distinct_digests() {
        let a = hash_password("123456").expect("hashing should succeed");
        let b = hash_password("123456").expect("hashing should succeed");
        assert_ne!(a, b);
    }

    #[test]
    fn verify_roundtrip() {
        let digest = hash_password("s3cret-enough").expect("hashing should succeed");
        assert!(verify_password("s3cret-enough", &digest).expect("verify should succeed"));
        assert!(!verify_password("different", &digest).expect("verify should succeed"));
    }

    #[test]
    fn verify_errors_on_malformed_digest() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}
