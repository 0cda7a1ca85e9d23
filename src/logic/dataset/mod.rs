//! Dataset Module - Synthetic Threat-Actor Data Generation
//!
//! Produces the toy training dataset the two model artifacts were fitted on:
//! four actor profiles with weighted IP/SSL distributions, saved as a
//! timestamped CSV for version control.

pub mod generator;
pub mod writer;

#[cfg(test)]
mod tests;

pub use generator::{generate, SyntheticSample, PROFILES};
pub use writer::save_csv;
