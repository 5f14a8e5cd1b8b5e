//! Automotive models.

pub mod engine;
