//! Property-based tests for fraction arithmetic.
