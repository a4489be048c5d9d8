use std::time::Duration;
pub use std::time::Instant;

/// Checks if a deadline was exceeded.
pub fn deadline_exceeded(deadline: Option<Instant>) -> bool {
    match deadline {
        Some(deadline) => Instant::now() > deadline,
        None => false,
    }
}

/// Converts a duration into a deadline.
pub fn duration_to_deadline(add: Duration) -> Option<Instant> {
    Instant::now().checked_add(add)
}
