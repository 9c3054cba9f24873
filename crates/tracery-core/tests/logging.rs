//! Logging bootstrap tests.

use tracery_core::{Config, logging};

#[test]
fn test_init_twice_is_harmless() {
    logging::init_with(&Config::default().with_log_filter("warn"));
    logging::init();
    tracing::info!("still logging after a second init");
}
