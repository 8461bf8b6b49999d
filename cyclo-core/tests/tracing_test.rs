//! Tests for tracing initialization.

use cyclo_core::tracing::init_tracing;

/// init_tracing is idempotent: repeated calls must not panic on the
/// already-installed global subscriber.
#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    init_tracing();
}
