// One test only: the global logger can be installed once per process, so the
// failure, success and repeat cases must run in order.

use asana_client::logger::{LOG_FILE_NAME, initialize};

use log::LevelFilter;
use tempfile::TempDir;

/// **VALUE**: Verifies a failed setup can be retried, a successful one creates the
/// log file, and later calls are no-ops.
///
/// **WHY THIS MATTERS**: An application that first points at an unwritable directory
/// and then falls back to a writable one must end up with logging, not a silent
/// "already initialized".
///
/// **BUG THIS CATCHES**: Would catch the guard being set before installation succeeds,
/// and would catch the guard being removed (fern errors on a second global logger).
#[test]
fn given_failed_initialization_when_retried_then_succeeds_once() {
    let temp_dir = TempDir::new().unwrap();

    let failed = initialize(
        std::path::Path::new("/dev/null/not-a-directory"),
        LevelFilter::Debug,
    );
    let retried = initialize(temp_dir.path(), LevelFilter::Debug);
    let repeated = initialize(temp_dir.path(), LevelFilter::Debug);

    assert!(failed.is_err(), "unwritable log directory should fail");
    assert!(retried.is_ok(), "retry after failure should install: {retried:?}");
    assert!(temp_dir.path().join(LOG_FILE_NAME).exists());
    assert!(repeated.is_ok(), "second initialization should be a no-op");
}
