//! Result aggregation modules
//!
//! Collects the stage outputs into the final reconstruction result:
//! - Result types
//! - Metadata

pub mod result;
