// Author: Dustin Pilgrim
// License: MIT

use crate::core::command::BrightnessCommand;

impl BrightnessCommand {
    /// Raw brightness target for this command, before any threshold is applied.
    ///
    /// Percentages are taken of `max` (truncating toward zero) and relative
    /// commands are then added to `current`. The result may be negative or
    /// exceed `max`.
    pub fn calculate(&self, current: u32, max: u32) -> i64 {
        let mut magnitude = self.magnitude;
        if self.percent {
            magnitude = magnitude.saturating_mul(i64::from(max)) / 100;
        }

        if self.is_relative() {
            magnitude.saturating_add(i64::from(current))
        } else {
            magnitude
        }
    }
}

/// Floor and ceiling resolved from the configured threshold commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub floor: i64,
    pub ceiling: i64,
}

impl Bounds {
    /// Thresholds are evaluated against a current brightness of 0, so a
    /// relative threshold is relative to nothing.
    pub fn resolve(floor: &BrightnessCommand, ceiling: &BrightnessCommand, max: u32) -> Self {
        Self {
            floor: floor.calculate(0, max),
            ceiling: ceiling.calculate(0, max),
        }
    }

    /// Ceiling is checked first, so it wins when the thresholds cross.
    pub fn clamp(&self, raw: i64) -> u32 {
        let bounded = if raw > self.ceiling {
            self.ceiling
        } else if raw < self.floor {
            self.floor
        } else {
            raw
        };

        bounded.clamp(0, i64::from(u32::MAX)) as u32
    }
}
