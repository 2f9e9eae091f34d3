//! Path integration tests
//!
//! Tests for the key ordering, the normalizer and the subtree range finder
//! through the public `ctxmap::path` API.

mod ordering_tests;
mod range_tests;
