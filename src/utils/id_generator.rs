//! Link identifier generation.
//!
//! Identifiers are 12 random bytes rendered as 24 lowercase hex characters,
//! the same shape as document-store object ids.

/// Number of random bytes in an identifier.
const ID_LENGTH_BYTES: usize = 12;

/// Generates a random link identifier.
///
/// Uses `getrandom` for entropy and encodes the result as lowercase hex.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let id = generate_id();
/// assert_eq!(id.len(), 24);
/// assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_id() -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    hex::encode(buffer)
}
