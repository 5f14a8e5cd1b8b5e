//! Closed-form engine quantities.
//!
//! All results are single precision to match the stored engine fields.

use std::f64::consts::PI;

/// Torque (lb-ft) times speed (RPM) divided by this constant gives horsepower.
pub const HP_TORQUE_CONSTANT: f32 = 5252.0;

/// Approximate cubic centimeters of displacement per horsepower.
pub const CC_PER_HP: f32 = 15.0;

/// Swept volume of all cylinders in cubic centimeters.
///
/// Bore and stroke are given in millimeters and converted to centimeters.
/// The volume is evaluated in double precision and narrowed once at the end.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn displacement_cc(bore_mm: i32, stroke_mm: i32, num_cylinders: i32) -> f32 {
    let radius_cm = f64::from(bore_mm) / 10.0 / 2.0;
    let stroke_cm = f64::from(stroke_mm) / 10.0;
    (PI * radius_cm.powi(2) * stroke_cm * f64::from(num_cylinders)) as f32
}

/// Horsepower from torque (lb-ft) and speed (RPM): `torque * (speed / 5252)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn horsepower_from_torque(torque_lb_ft: i32, speed_rpm: i32) -> f32 {
    torque_lb_ft as f32 * (speed_rpm as f32 / HP_TORQUE_CONSTANT)
}

/// Horsepower approximated from displacement: `displacement / 15`.
#[must_use]
pub fn horsepower_from_displacement(displacement_cc: f32) -> f32 {
    displacement_cc / CC_PER_HP
}
