//! Engine specification entity.
//!
//! An [`Engine`] stores five clamped integer specifications and two derived
//! quantities. Setters re-apply the clamp rules but never touch the derived
//! quantities; those change only through [`Engine::recompute_displacement`]
//! and [`Engine::recompute_horsepower`].

pub mod formulas;

use tracing::{debug, trace};

use crate::support::constraint::{ClosedRange, Constrained, NonNegative};

/// Company name used when none is given.
pub const UNKNOWN_COMPANY: &str = "Unknown";

/// Largest bore diameter in millimeters.
pub const MAX_BORE_MM: i32 = 100;

/// Largest crankshaft stroke in millimeters.
pub const MAX_STROKE_MM: i32 = 100;

/// Largest cylinder count.
pub const MAX_CYLINDERS: i32 = 8;

/// Torque in lb-ft, zero or greater.
pub type Torque = Constrained<i32, NonNegative>;

/// Speed in RPM, zero or greater.
pub type Speed = Constrained<i32, NonNegative>;

/// Bore diameter in millimeters, `0..=100`.
pub type BoreSize = Constrained<i32, ClosedRange<0, MAX_BORE_MM>>;

/// Crankshaft stroke in millimeters, `0..=100`.
pub type Stroke = Constrained<i32, ClosedRange<0, MAX_STROKE_MM>>;

/// Number of cylinders, `0..=8`.
pub type Cylinders = Constrained<i32, ClosedRange<0, MAX_CYLINDERS>>;

/// Which formula [`Engine::recompute_horsepower`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorsepowerSource {
    /// `torque * (speed / 5252)` using the stored torque and speed.
    Torque,
    /// `displacement / 15` using the stored displacement.
    Displacement,
}

impl HorsepowerSource {
    /// Maps a "use displacement" flag onto a source.
    #[must_use]
    pub fn from_displacement_flag(use_displacement: bool) -> Self {
        if use_displacement {
            Self::Displacement
        } else {
            Self::Torque
        }
    }
}

/// One engine configuration.
///
/// # Example
///
/// ```
/// use engine_specs::models::automotive::engine::{Engine, HorsepowerSource};
///
/// let mut engine = Engine::new(Some("OgCompany"), 100, 500, 80, 90, 1);
/// assert_eq!(engine.bore_size(), 80);
///
/// engine.set_bore_size(120);
/// assert_eq!(engine.bore_size(), 100);
///
/// engine.recompute_horsepower(HorsepowerSource::Torque);
/// assert!((engine.horsepower() - 9.520_183).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    company_name: String,
    torque: Torque,
    speed: Speed,
    bore_size: BoreSize,
    stroke: Stroke,
    num_cylinders: Cylinders,
    engine_displacement: f32,
    horsepower: f32,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            company_name: UNKNOWN_COMPANY.to_owned(),
            torque: Torque::clamped(0),
            speed: Speed::clamped(0),
            bore_size: BoreSize::clamped(0),
            stroke: Stroke::clamped(0),
            num_cylinders: Cylinders::clamped(0),
            engine_displacement: 0.0,
            horsepower: 0.0,
        }
    }
}

impl Engine {
    /// Creates an engine, clamping every numeric input into its valid range.
    ///
    /// Displacement is computed from the clamped geometry.
    /// Horsepower uses the torque formula when the raw `torque` and `speed`
    /// arguments are both nonzero, and the displacement formula otherwise.
    /// The torque formula itself is evaluated with the clamped values, so
    /// negative torque and speed yield zero horsepower.
    #[must_use]
    pub fn new(
        company_name: Option<&str>,
        torque: i32,
        speed: i32,
        bore_size: i32,
        stroke: i32,
        num_cylinders: i32,
    ) -> Self {
        let mut engine = Self {
            company_name: company_or_unknown(company_name),
            torque: Torque::clamped(torque),
            speed: Speed::clamped(speed),
            bore_size: BoreSize::clamped(bore_size),
            stroke: Stroke::clamped(stroke),
            num_cylinders: Cylinders::clamped(num_cylinders),
            engine_displacement: 0.0,
            horsepower: 0.0,
        };

        engine.engine_displacement = formulas::displacement_cc(
            engine.bore_size(),
            engine.stroke(),
            engine.num_cylinders(),
        );

        // Branch on the raw arguments, evaluate with the stored values.
        engine.horsepower = if torque != 0 && speed != 0 {
            formulas::horsepower_from_torque(engine.torque(), engine.speed())
        } else {
            formulas::horsepower_from_displacement(engine.engine_displacement)
        };

        debug!(
            company = %engine.company_name,
            displacement_cc = engine.engine_displacement,
            horsepower = engine.horsepower,
            "created engine"
        );
        engine
    }

    /// Recomputes displacement from the current bore, stroke, and cylinder count.
    pub fn recompute_displacement(&mut self) {
        self.engine_displacement =
            formulas::displacement_cc(self.bore_size(), self.stroke(), self.num_cylinders());
        trace!(
            displacement_cc = self.engine_displacement,
            "recomputed displacement"
        );
    }

    /// Recomputes horsepower from the chosen source.
    ///
    /// [`HorsepowerSource::Displacement`] reads the stored displacement, which
    /// may be stale if geometry changed since the last
    /// [`Engine::recompute_displacement`].
    pub fn recompute_horsepower(&mut self, source: HorsepowerSource) {
        self.horsepower = match source {
            HorsepowerSource::Torque => {
                formulas::horsepower_from_torque(self.torque(), self.speed())
            }
            HorsepowerSource::Displacement => {
                formulas::horsepower_from_displacement(self.engine_displacement)
            }
        };
        trace!(?source, horsepower = self.horsepower, "recomputed horsepower");
    }

    #[must_use]
    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    /// Sets the company name, falling back to `"Unknown"` for `None`.
    pub fn set_company_name(&mut self, company_name: Option<&str>) {
        self.company_name = company_or_unknown(company_name);
    }

    /// Torque in lb-ft.
    #[must_use]
    pub fn torque(&self) -> i32 {
        self.torque.into_inner()
    }

    /// Sets torque, clamping negative values to zero.
    pub fn set_torque(&mut self, torque: i32) {
        self.torque = Torque::clamped(torque);
    }

    /// Speed in RPM.
    #[must_use]
    pub fn speed(&self) -> i32 {
        self.speed.into_inner()
    }

    /// Sets speed, clamping negative values to zero.
    pub fn set_speed(&mut self, speed: i32) {
        self.speed = Speed::clamped(speed);
    }

    /// Bore diameter in millimeters.
    #[must_use]
    pub fn bore_size(&self) -> i32 {
        self.bore_size.into_inner()
    }

    /// Sets the bore, clamped to `0..=100` mm.
    pub fn set_bore_size(&mut self, bore_size: i32) {
        self.bore_size = BoreSize::clamped(bore_size);
    }

    /// Crankshaft stroke in millimeters.
    #[must_use]
    pub fn stroke(&self) -> i32 {
        self.stroke.into_inner()
    }

    /// Sets the stroke, clamped to `0..=100` mm.
    pub fn set_stroke(&mut self, stroke: i32) {
        self.stroke = Stroke::clamped(stroke);
    }

    #[must_use]
    pub fn num_cylinders(&self) -> i32 {
        self.num_cylinders.into_inner()
    }

    /// Sets the cylinder count, clamped to `0..=8`.
    pub fn set_num_cylinders(&mut self, num_cylinders: i32) {
        self.num_cylinders = Cylinders::clamped(num_cylinders);
    }

    /// Displacement in cubic centimeters as of the last computation.
    #[must_use]
    pub fn engine_displacement(&self) -> f32 {
        self.engine_displacement
    }

    /// Horsepower as of the last computation.
    #[must_use]
    pub fn horsepower(&self) -> f32 {
        self.horsepower
    }
}

fn company_or_unknown(company_name: Option<&str>) -> String {
    match company_name {
        Some(name) => name.to_owned(),
        None => {
            debug!("no company name given, using {UNKNOWN_COMPANY:?}");
            UNKNOWN_COMPANY.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn og_engine() -> Engine {
        Engine::new(Some("OgCompany"), 100, 500, 80, 90, 1)
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn default_engine() {
        let engine = Engine::default();
        assert_eq!(engine.company_name(), "Unknown");
        assert_eq!(engine.torque(), 0);
        assert_eq!(engine.speed(), 0);
        assert_eq!(engine.bore_size(), 0);
        assert_eq!(engine.stroke(), 0);
        assert_eq!(engine.num_cylinders(), 0);
        assert_eq!(engine.engine_displacement(), 0.0);
        assert_eq!(engine.horsepower(), 0.0);
    }

    #[test]
    fn parameterized_engine() {
        let engine = og_engine();
        assert_eq!(engine.company_name(), "OgCompany");
        assert_eq!(engine.torque(), 100);
        assert_eq!(engine.speed(), 500);
        assert_eq!(engine.bore_size(), 80);
        assert_eq!(engine.stroke(), 90);
        assert_eq!(engine.num_cylinders(), 1);
        assert_relative_eq!(engine.engine_displacement(), 452.389_34);
        // Nonzero torque and speed select the torque formula.
        assert_relative_eq!(engine.horsepower(), 9.520_183);
    }

    #[test]
    fn constructor_clamps_inputs() {
        let low = Engine::new(None, -100, -500, -80, -90, -1);
        assert_eq!(low.company_name(), "Unknown");
        assert_eq!(
            (low.torque(), low.speed(), low.bore_size(), low.stroke(), low.num_cylinders()),
            (0, 0, 0, 0, 0)
        );

        let high = Engine::new(Some("Engine48"), 400, 800, 120, 120, 10);
        assert_eq!(
            (high.torque(), high.speed(), high.bore_size(), high.stroke(), high.num_cylinders()),
            (400, 800, 100, 100, 8)
        );
        assert_relative_eq!(
            high.engine_displacement(),
            formulas::displacement_cc(100, 100, 8)
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn negative_torque_and_speed_take_torque_branch() {
        // Raw inputs are nonzero, so the torque formula runs on clamped zeros.
        let engine = Engine::new(Some("Engine00"), -100, -500, 80, 90, 1);
        assert!(engine.engine_displacement() > 0.0);
        assert_eq!(engine.horsepower(), 0.0);
    }

    #[test]
    fn zero_torque_or_speed_takes_displacement_branch() {
        let no_torque = Engine::new(Some("A"), 0, 500, 80, 90, 1);
        assert_relative_eq!(no_torque.horsepower(), 30.159_289_5);

        let no_speed = Engine::new(Some("B"), 100, 0, 80, 90, 1);
        assert_relative_eq!(no_speed.horsepower(), 30.159_289_5);
    }

    #[test]
    fn set_company_name() {
        let mut engine = og_engine();
        engine.set_company_name(None);
        assert_eq!(engine.company_name(), "Unknown");

        engine.set_company_name(Some("NewCompany"));
        assert_eq!(engine.company_name(), "NewCompany");
    }

    #[test]
    fn set_num_cylinders() {
        let mut engine = og_engine();
        engine.set_num_cylinders(-1);
        assert_eq!(engine.num_cylinders(), 0);

        engine.set_num_cylinders(10);
        assert_eq!(engine.num_cylinders(), 8);

        engine.set_num_cylinders(5);
        assert_eq!(engine.num_cylinders(), 5);
    }

    #[test]
    fn set_bore_size() {
        let mut engine = og_engine();
        engine.set_bore_size(50);
        assert_eq!(engine.bore_size(), 50);

        engine.set_bore_size(120);
        assert_eq!(engine.bore_size(), 100);

        engine.set_bore_size(-1);
        assert_eq!(engine.bore_size(), 0);
    }

    #[test]
    fn set_stroke() {
        let mut engine = og_engine();
        engine.set_stroke(101);
        assert_eq!(engine.stroke(), 100);

        engine.set_stroke(-90);
        assert_eq!(engine.stroke(), 0);

        engine.set_stroke(95);
        assert_eq!(engine.stroke(), 95);
    }

    #[test]
    fn set_torque_and_speed() {
        let mut engine = og_engine();
        engine.set_torque(-1);
        engine.set_speed(-1);
        assert_eq!((engine.torque(), engine.speed()), (0, 0));

        engine.set_torque(i32::MAX);
        engine.set_speed(7000);
        assert_eq!((engine.torque(), engine.speed()), (i32::MAX, 7000));
    }

    #[test]
    fn recompute_displacement_is_idempotent() {
        let mut engine = og_engine();
        engine.recompute_displacement();
        let first = engine.engine_displacement();
        engine.recompute_displacement();
        assert_relative_eq!(engine.engine_displacement(), first);
        assert_relative_eq!(first, 452.389_34);
    }

    #[test]
    fn recompute_horsepower_from_each_source() {
        let mut engine = og_engine();

        engine.recompute_horsepower(HorsepowerSource::Torque);
        assert_relative_eq!(engine.horsepower(), 9.520_183);

        engine.recompute_horsepower(HorsepowerSource::Displacement);
        assert_relative_eq!(engine.horsepower(), 30.159_289_5);
    }

    #[test]
    fn recompute_horsepower_uses_stored_values() {
        // Unlike construction, zero speed still selects the torque formula.
        let mut engine = og_engine();
        engine.set_speed(0);
        engine.recompute_horsepower(HorsepowerSource::Torque);
        assert_relative_eq!(engine.horsepower(), 0.0);
    }

    #[test]
    fn setters_leave_derived_values_stale() {
        let mut engine = og_engine();
        let displacement = engine.engine_displacement();
        let horsepower = engine.horsepower();

        engine.set_bore_size(100);
        engine.set_stroke(100);
        engine.set_num_cylinders(8);
        engine.set_torque(400);
        engine.set_speed(800);
        assert_relative_eq!(engine.engine_displacement(), displacement);
        assert_relative_eq!(engine.horsepower(), horsepower);

        // Displacement-sourced horsepower reads the stale displacement.
        engine.recompute_horsepower(HorsepowerSource::Displacement);
        assert_relative_eq!(engine.horsepower(), 30.159_289_5);

        engine.recompute_displacement();
        assert_relative_eq!(
            engine.engine_displacement(),
            formulas::displacement_cc(100, 100, 8)
        );
    }

    #[test]
    fn displacement_flag_maps_to_source() {
        assert_eq!(
            HorsepowerSource::from_displacement_flag(true),
            HorsepowerSource::Displacement
        );
        assert_eq!(
            HorsepowerSource::from_displacement_flag(false),
            HorsepowerSource::Torque
        );
    }
}
