// src/sampling/distribution.rs

use rand::Rng;

use crate::error::SimulationError;

/// Bounds of the uniform draw every table lookup starts from.
pub const DRAW_LOW: u32 = 1;
pub const DRAW_HIGH: u32 = 100;

/// What a matched band resolves to: either a fixed value, or a second
/// uniform draw from an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Fixed(u32),
    Uniform { low: u32, high: u32 },
}

/// One row of a lookup table: draws in `low..=high` resolve to `outcome`.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub low: u32,
    pub high: u32,
    pub outcome: Outcome,
}

impl Band {
    pub const fn new(low: u32, high: u32, outcome: Outcome) -> Self {
        Self { low, high, outcome }
    }
}

/// An ordered list of bands partitioning the draw span `[1, 100]`.
///
/// Bands must jointly and exactly cover the span; `validate` enforces this
/// so that `sample` can never fall off the end of a well-formed table.
#[derive(Debug, Clone)]
pub struct DistributionTable {
    bands: Vec<Band>,
}

impl DistributionTable {
    pub fn new(bands: Vec<Band>) -> Self {
        Self { bands }
    }

    /// Check that the bands tile `[1, 100]` in order with no gaps or
    /// overlaps, and that no band or uniform outcome is inverted.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let mut expected_low = DRAW_LOW;
        for band in &self.bands {
            if band.low > band.high {
                return Err(SimulationError::InvalidConfiguration(format!(
                    "band {}..={} is inverted",
                    band.low, band.high
                )));
            }
            if band.low != expected_low {
                return Err(SimulationError::InvalidConfiguration(format!(
                    "bands must tile the draw span: expected a band starting at {}, found {}",
                    expected_low, band.low
                )));
            }
            if let Outcome::Uniform { low, high } = band.outcome {
                if low > high {
                    return Err(SimulationError::InvalidConfiguration(format!(
                        "uniform outcome {}..={} is inverted",
                        low, high
                    )));
                }
            }
            expected_low = band.high + 1;
        }
        if expected_low != DRAW_HIGH + 1 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "bands cover the draw span only up to {}",
                expected_low - 1
            )));
        }
        Ok(())
    }

    /// Draw uniformly from `[1, 100]` and resolve it through the table.
    ///
    /// The scan takes the first band containing the draw. A draw no band
    /// covers is a misconfigured table and fails hard rather than returning
    /// a default.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<u32, SimulationError> {
        let draw = rng.gen_range(DRAW_LOW..=DRAW_HIGH);
        for band in &self.bands {
            if band.low <= draw && draw <= band.high {
                return Ok(match band.outcome {
                    Outcome::Fixed(value) => value,
                    Outcome::Uniform { low, high } => rng.gen_range(low..=high),
                });
            }
        }
        Err(SimulationError::TableCoverage(draw))
    }
}
