//! # Engine Specs
//!
//! A car engine specification model: torque, speed, bore, stroke, and
//! cylinder count, with engine displacement and horsepower derived from them.
//!
//! ## Crate layout
//!
//! - [`models`]: The engine entity and its [`twine_core::Model`] adapter.
//! - [`support`]: Supporting utilities used by models, such as type-level
//!   numeric constraints.
//! - [`report`]: Plain-text reports and the sample engine list used by the
//!   `engine-specs` binary.
//!
//! ## Validity
//!
//! An engine is always valid. Out-of-range numeric input is clamped rather
//! than rejected, and a missing company name becomes `"Unknown"`.
//! Derived quantities are computed at construction and afterwards only when
//! explicitly recomputed.

pub mod models;
pub mod report;
pub mod support;
