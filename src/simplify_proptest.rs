//! Property-based tests for folder simplification.
//!
//! Random folder sets are drawn from a small directory alphabet so that
//! siblings, shared ancestors and mixed kinds come up often.
