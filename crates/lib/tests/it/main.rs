/*! Integration tests for ctxmap.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - path: Tests for key ordering, normalization and subtree ranges
 * - map: Tests for the root map, views, copies, merges and dumping
 * - value: Tests for the Value payload and typed access
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("ctxmap=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod path;
mod value;
