use sha2::{Digest, Sha256};

/// Hash a password, salted with the username.
pub fn hash_password(username: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(username.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn verify_password(username: &str, password: &str, stored_hash: &str) -> bool {
    hash_password(username, password) == stored_hash
}
