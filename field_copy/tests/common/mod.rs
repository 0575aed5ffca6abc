//! Shared test helpers

use field_copy::Error;

/// Route `tracing` output to the test writer; filter with `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Context of a failed copy
pub fn context<T>(result: &field_copy::Result<T>) -> Option<&Error> {
    result.as_ref().err().map(|report| report.current_context())
}
