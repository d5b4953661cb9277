//! Execution semantics tests.
