//! Plain-text engine reports.

use std::{
    fmt,
    io::{self, Write},
};

use crate::models::automotive::engine::Engine;

/// Inputs for the sample engines: one fully out of range, then four valid
/// configurations of increasing size (the last one saturating every limit).
const SAMPLES: [(&str, i32, i32, i32, i32, i32); 5] = [
    ("Engine00", -100, -500, -80, -90, -1),
    ("Engine15", 100, 500, 80, 90, 1),
    ("Engine26", 200, 600, 90, 95, 5),
    ("Engine37", 300, 700, 100, 100, 8),
    ("Engine48", 400, 800, 120, 120, 10),
];

/// Builds the fixed, ordered list of sample engines.
#[must_use]
pub fn sample_engines() -> Vec<Engine> {
    SAMPLES
        .iter()
        .map(|&(name, torque, speed, bore_size, stroke, num_cylinders)| {
            Engine::new(Some(name), torque, speed, bore_size, stroke, num_cylinders)
        })
        .collect()
}

/// Displays one engine as a block of `Label: value unit` lines.
///
/// Floats use their shortest round-trip form with at least one decimal place.
#[derive(Debug, Clone, Copy)]
pub struct EngineReport<'a>(pub &'a Engine);

impl fmt::Display for EngineReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let engine = self.0;
        writeln!(f, "Company Name: {}", engine.company_name())?;
        writeln!(f, "Torque: {} lb-ft", engine.torque())?;
        writeln!(f, "Speed: {} RPM", engine.speed())?;
        writeln!(f, "Cylinder Bore: {} mm", engine.bore_size())?;
        writeln!(f, "Crankshaft Stroke: {} mm", engine.stroke())?;
        writeln!(f, "Number of Cylinders: {}", engine.num_cylinders())?;
        writeln!(f, "Engine Displacement: {:?} cc", engine.engine_displacement())?;
        writeln!(f, "Horsepower: {:?} HP", engine.horsepower())
    }
}

/// Writes each engine's report followed by a blank line.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_report<W: Write>(out: &mut W, engines: &[Engine]) -> io::Result<()> {
    for engine in engines {
        writeln!(out, "{}", EngineReport(engine))?;
    }
    Ok(())
}
