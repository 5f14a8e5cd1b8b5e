//! Car engine specification model.
//!
//! The entity lives in the internal `core` module and is re-exported here.
//! [`EngineModel`] is a [`twine_core::Model`] adapter that maps an
//! [`EngineSpec`] onto the [`Performance`] a freshly constructed [`Engine`]
//! reports.

mod core;

use std::convert::Infallible;

use twine_core::Model;

pub use self::core::{
    BoreSize, Cylinders, Engine, HorsepowerSource, MAX_BORE_MM, MAX_CYLINDERS, MAX_STROKE_MM,
    Speed, Stroke, Torque, UNKNOWN_COMPANY, formulas,
};

/// Raw, unclamped engine inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineSpec {
    pub company_name: Option<String>,
    /// Torque in lb-ft.
    pub torque: i32,
    /// Speed in RPM.
    pub speed: i32,
    /// Bore diameter in millimeters.
    pub bore_size: i32,
    /// Crankshaft stroke in millimeters.
    pub stroke: i32,
    pub num_cylinders: i32,
}

impl From<&EngineSpec> for Engine {
    fn from(spec: &EngineSpec) -> Self {
        Engine::new(
            spec.company_name.as_deref(),
            spec.torque,
            spec.speed,
            spec.bore_size,
            spec.stroke,
            spec.num_cylinders,
        )
    }
}

/// Derived quantities of a constructed engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Performance {
    /// Displacement in cubic centimeters.
    pub displacement_cc: f32,
    pub horsepower: f32,
}

impl From<&Engine> for Performance {
    fn from(engine: &Engine) -> Self {
        Self {
            displacement_cc: engine.engine_displacement(),
            horsepower: engine.horsepower(),
        }
    }
}

/// Evaluates engine specifications with construction-time semantics.
///
/// # Example
///
/// ```
/// use engine_specs::models::automotive::engine::{EngineModel, EngineSpec};
/// use twine_core::Model;
///
/// let spec = EngineSpec {
///     company_name: Some("OgCompany".into()),
///     torque: 100,
///     speed: 500,
///     bore_size: 80,
///     stroke: 90,
///     num_cylinders: 1,
/// };
/// let performance = EngineModel.call(&spec).unwrap();
/// assert!((performance.displacement_cc - 452.389_34).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineModel;

impl Model for EngineModel {
    type Input = EngineSpec;
    type Output = Performance;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(Performance::from(&Engine::from(input)))
    }
}
