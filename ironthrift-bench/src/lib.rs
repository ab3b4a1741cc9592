//! # IronThrift Bench
//!
//! Benchmarking utilities for IronThrift performance testing.

pub mod fixtures;
