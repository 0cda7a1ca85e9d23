//! Core Logic - feature encoding, model registry, attribution, persistence

pub mod attribution;
pub mod dataset;
pub mod export;
pub mod features;
pub mod model;
