//! Tracing subscriber setup shared by binaries and tests.

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

static TEST_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber for a binary.
///
/// The filter is taken from `RUST_LOG` when set, otherwise from the supplied
/// default directives (for example `"edm=info"`).
pub fn init_tracing(default_directives: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directives.into()))
        .with(fmt::layer())
        .init();
}

/// Initializes tracing for tests, once per test binary.
///
/// Uses the test writer so output is captured per test, and tolerates a
/// subscriber already being installed by another harness.
pub fn init_test_tracing() {
    TEST_TRACING.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "edm=debug".into()))
            .with(fmt::layer().with_test_writer())
            .try_init();
    });
}
