//! Tracing setup tolerates any ERAD_LOG value and repeated calls.

use std::sync::Mutex;

use erad_core::tracing::init_tracing;

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_per_crate_directives_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("ERAD_LOG", "erad_simulation=debug,erad_fragility=warn");
    init_tracing();
    std::env::remove_var("ERAD_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    tracing::info!({ erad_core::tracing::metrics::TRIAL_COUNT } = 3u32, "still logging");
}

#[test]
fn test_garbage_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("ERAD_LOG", "=====not a filter");
    init_tracing();
    std::env::remove_var("ERAD_LOG");
}
