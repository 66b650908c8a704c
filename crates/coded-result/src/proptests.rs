//! Property-based tests for coded results.
