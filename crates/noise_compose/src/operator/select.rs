//! Boundary selection between two sources.
//!
//! [`Select`] reads a controller module and outputs its high source while the
//! controller lies inside `[minimum, maximum]`, and its low source otherwise.
//! A positive fall-off replaces the hard switch with an S-curve blend of
//! half-width `fall_off` centred on each bound.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::check_bounds;
use crate::error::Result;
use crate::math::{lerp, map_cubic_s_curve};
use crate::module::{Module, ModuleRef, Sources};

const LOW: usize = 0;
const HIGH: usize = 1;
const CONTROLLER: usize = 2;

/// Parameters for a select node.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectParams {
    /// Lower bound of the selection interval.
    pub minimum: f64,
    /// Upper bound of the selection interval.
    pub maximum: f64,
    /// Requested half-width of the transition at each bound.
    pub fall_off: f64,
}

impl Default for SelectParams {
    fn default() -> Self {
        Self {
            minimum: -1.0,
            maximum: 1.0,
            fall_off: 0.0,
        }
    }
}

/// Outputs one of two sources, chosen by where a controller's value falls
/// relative to `[minimum, maximum]`.
///
/// Slots: 0 = low source, 1 = high source, 2 = controller.
///
/// With a positive fall-off the interval is half-open: a controller value of
/// exactly `maximum + fall_off` selects the low source. If the fall-off is
/// smaller than the spacing of floats around the bounds, both transition bands
/// collapse and a controller equal to `maximum` already selects the low source,
/// unlike the inclusive hard switch used when the fall-off is zero.
#[derive(Clone, Debug)]
pub struct Select {
    sources: Sources<3>,
    minimum: f64,
    maximum: f64,
    fall_off: f64,
    raw_fall_off: f64,
}

impl Select {
    /// Creates a select with bounds `[-1, 1]`, no fall-off and empty slots.
    pub fn new() -> Self {
        let params = SelectParams::default();
        Self {
            sources: Sources::new(),
            minimum: params.minimum,
            maximum: params.maximum,
            fall_off: params.fall_off,
            raw_fall_off: params.fall_off,
        }
    }

    /// Creates a select with default parameters and all slots populated.
    pub fn with_sources(low: ModuleRef, high: ModuleRef, controller: ModuleRef) -> Self {
        Self {
            sources: Sources::from_modules([low, high, controller]),
            ..Self::new()
        }
    }

    /// Creates a fully configured select.
    ///
    /// Fails with [`crate::error::Error::InvalidBounds`] unless
    /// `params.minimum < params.maximum`.
    pub fn from_params(
        params: SelectParams,
        low: ModuleRef,
        high: ModuleRef,
        controller: ModuleRef,
    ) -> Result<Self> {
        let mut select = Self::with_sources(low, high, controller);
        select.set_bounds(params.minimum, params.maximum)?;
        select.set_fall_off(params.fall_off);
        Ok(select)
    }

    /// Current parameters, with the fall-off as last requested.
    pub fn params(&self) -> SelectParams {
        SelectParams {
            minimum: self.minimum,
            maximum: self.maximum,
            fall_off: self.raw_fall_off,
        }
    }

    /// Lower bound of the selection interval.
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Upper bound of the selection interval.
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Effective fall-off, never wider than half the selection interval.
    pub fn fall_off(&self) -> f64 {
        self.fall_off
    }

    /// Fall-off as last passed to [`Select::set_fall_off`], before clamping.
    pub fn raw_fall_off(&self) -> f64 {
        self.raw_fall_off
    }

    /// Requests a fall-off. Values wider than half the interval are clamped;
    /// the requested value is kept and re-applied whenever the bounds change.
    pub fn set_fall_off(&mut self, fall_off: f64) {
        self.raw_fall_off = fall_off;
        self.fall_off = clamp_fall_off(fall_off, self.minimum, self.maximum);
        if self.fall_off != fall_off && !fall_off.is_nan() {
            debug!(
                "Select fall-off {} clamped to {} for bounds [{}, {}].",
                fall_off, self.fall_off, self.minimum, self.maximum
            );
        }
    }

    /// Moves the lower bound. Fails if it would not stay below the maximum.
    pub fn set_minimum(&mut self, minimum: f64) -> Result<()> {
        self.set_bounds(minimum, self.maximum)
    }

    /// Moves the upper bound. Fails if it would not stay above the minimum.
    pub fn set_maximum(&mut self, maximum: f64) -> Result<()> {
        self.set_bounds(self.minimum, maximum)
    }

    /// Sets both bounds at once. Requires `minimum < maximum`; on failure the
    /// select is left unchanged.
    pub fn set_bounds(&mut self, minimum: f64, maximum: f64) -> Result<()> {
        check_bounds("Select", minimum, maximum)?;
        self.minimum = minimum;
        self.maximum = maximum;
        self.set_fall_off(self.raw_fall_off);
        Ok(())
    }

    /// Source output outside the interval (slot 0).
    pub fn low(&self) -> Option<&ModuleRef> {
        self.sources.get(LOW)
    }

    /// Source output inside the interval (slot 1).
    pub fn high(&self) -> Option<&ModuleRef> {
        self.sources.get(HIGH)
    }

    /// Module whose output picks the source (slot 2).
    pub fn controller(&self) -> Option<&ModuleRef> {
        self.sources.get(CONTROLLER)
    }

    /// Attaches the low source (slot 0).
    pub fn set_low(&mut self, module: ModuleRef) {
        self.sources.put(LOW, module);
    }

    /// Attaches the high source (slot 1).
    pub fn set_high(&mut self, module: ModuleRef) {
        self.sources.put(HIGH, module);
    }

    /// Attaches the controller (slot 2).
    pub fn set_controller(&mut self, module: ModuleRef) {
        self.sources.put(CONTROLLER, module);
    }

    /// Direct access to the three source slots.
    pub fn sources_mut(&mut self) -> &mut Sources<3> {
        &mut self.sources
    }
}

impl Default for Select {
    fn default() -> Self {
        Self::new()
    }
}

impl Select {
    fn smooth_select(
        &self,
        cv: f64,
        low: &dyn Module,
        high: &dyn Module,
        x: f64,
        y: f64,
        z: f64,
    ) -> f64 {
        let low_edge = self.minimum - self.fall_off;
        let low_far = self.minimum + self.fall_off;
        let high_near = self.maximum - self.fall_off;
        let high_edge = self.maximum + self.fall_off;

        if cv < low_edge {
            low.get_value(x, y, z)
        } else if cv < low_far {
            let a = map_cubic_s_curve((cv - low_edge) / (low_far - low_edge));
            lerp(low.get_value(x, y, z), high.get_value(x, y, z), a)
        } else if cv < high_near {
            high.get_value(x, y, z)
        } else if cv < high_edge {
            let a = map_cubic_s_curve((cv - high_near) / (high_edge - high_near));
            lerp(high.get_value(x, y, z), low.get_value(x, y, z), a)
        } else {
            low.get_value(x, y, z)
        }
    }
}

fn clamp_fall_off(requested: f64, minimum: f64, maximum: f64) -> f64 {
    let half_width = (maximum - minimum) / 2.0;
    if requested > half_width {
        half_width
    } else {
        requested
    }
}

impl Module for Select {
    fn get_value(&self, x: f64, y: f64, z: f64) -> f64 {
        let low = self.sources.require(LOW, "Select");
        let high = self.sources.require(HIGH, "Select");
        let controller = self.sources.require(CONTROLLER, "Select");

        let cv = controller.get_value(x, y, z);

        if self.fall_off > 0.0 {
            self.smooth_select(cv, low, high, x, y, z)
        } else if cv < self.minimum || cv > self.maximum {
            low.get_value(x, y, z)
        } else {
            high.get_value(x, y, z)
        }
    }

    fn source_count(&self) -> usize {
        self.sources.len()
    }

    fn source(&self, index: usize) -> Option<&ModuleRef> {
        self.sources.get(index)
    }
}
