//! Hash casing for retried submissions
//!
//! The service sometimes refuses a correct content hash in one casing and
//! accepts it in another, so retries resubmit the same hash re-cased.

use rand::Rng;

/// Casing of `hash` to send on attempt number `attempt` (0-based)
///
/// Attempt 0 is canonical lowercase. Later attempts flip every character to
/// lower or upper case independently with equal probability; consecutive
/// results are not guaranteed to differ.
pub fn mutate_casing<R: Rng + ?Sized>(hash: &str, attempt: u32, rng: &mut R) -> String {
    if attempt == 0 {
        return hash.to_ascii_lowercase();
    }

    hash.chars()
        .map(|c| {
            if rng.random_bool(0.5) {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}
