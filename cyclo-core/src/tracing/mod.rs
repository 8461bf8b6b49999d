//! Tracing and logging for cyclo.

mod setup;

pub use setup::init_tracing;
