//! Payload generator and benchmark utilities for checkdigit.
//!
//! This crate provides deterministic generation of payloads for
//! benchmarking and cross-checking `checkdigit-core`.

pub mod correctness;
pub mod generator;

pub use generator::{
    PayloadConfig, SizeTier, generate_bytes, generate_payloads, generate_valid_values,
};
