//! Input loading
//!
//! The likelihood estimator is an external model; this crate only loads
//! its dumped activation curve.

pub mod activations;
