//! Password hashing.
//!
//! SHA-256 over the UTF-8 password, stored as lowercase hex. This matches
//! the credential format the system has always used; existing user tables
//! keep working unchanged.

use sha2::{Digest, Sha256};

/// Hash a password into its stored form.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Check a password attempt against a stored hash.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    hash_password(password) == stored_hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_are_lowercase_hex_sha256() {
        // SHA-256("admin"), a well-known vector.
        assert_eq!(
            hash_password("admin"),
            "8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918"
        );
    }

    #[test]
    fn verification_matches_only_the_original_password() {
        let stored = hash_password("s3cret");
        assert!(verify_password("s3cret", &stored));
        assert!(!verify_password("s3cret ", &stored));
        assert!(!verify_password("other", &stored));
    }
}
