//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Values are offset so they look like Discord snowflakes and never collide with the small
/// literal ids tests use for explicit fixtures.
///
/// # Returns
/// - `i64` - Next unique id
pub fn next_id() -> i64 {
    1_000_000 + COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst) as i64
}
