// Rust guideline compliant 2026-10-19

//! Content-derived issue identifiers.

use sha2::{Digest, Sha256};

/// Generates an issue ID from its creation data.
///
/// The ID is the lowercase hex SHA-256 digest of the timestamp, title,
/// creator and nonce. Callers bump `nonce` when an ID is already taken.
///
/// # Arguments
///
/// * `title` - Issue title
/// * `creator` - Creator name, empty if unknown
/// * `timestamp` - Unix timestamp of creation
/// * `nonce` - Collision counter, normally 0
///
/// # Returns
///
/// A 64 character hexadecimal ID.
#[must_use]
pub fn generate_id(title: &str, creator: &str, timestamp: i64, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(timestamp.to_le_bytes());
    hasher.update(title.as_bytes());
    hasher.update(creator.as_bytes());
    if nonce > 0 {
        hasher.update(nonce.to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}
