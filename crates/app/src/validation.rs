//! Bulk-result validation.

/// Check that a bulk lookup found exactly as many records as were requested.
///
/// # Errors
///
/// Returns the error produced by `error` when the lengths differ.
pub fn ensure_same_size<R, F, E>(
    requested: &[R],
    found: &[F],
    error: impl FnOnce() -> E,
) -> Result<(), E> {
    if requested.len() == found.len() {
        Ok(())
    } else {
        Err(error())
    }
}
