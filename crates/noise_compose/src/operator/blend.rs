//! Controller-weighted blend of two sources.
use crate::math::lerp;
use crate::module::{Module, ModuleRef, Sources};

const A: usize = 0;
const B: usize = 1;
const CONTROLLER: usize = 2;

/// Linearly interpolates between two sources.
///
/// The controller output is mapped from `[-1, 1]` onto a weight in `[0, 1]`:
/// `-1` yields source 0, `1` yields source 1. Controller values outside that
/// range extrapolate.
///
/// Slots: 0 = first source, 1 = second source, 2 = controller.
#[derive(Clone, Debug, Default)]
pub struct Blend {
    sources: Sources<3>,
}

impl Blend {
    /// Creates a blend with all slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fully populated blend.
    pub fn with_sources(a: ModuleRef, b: ModuleRef, controller: ModuleRef) -> Self {
        Self {
            sources: Sources::from_modules([a, b, controller]),
        }
    }

    /// Module whose output drives the blend weight (slot 2).
    pub fn controller(&self) -> Option<&ModuleRef> {
        self.sources.get(CONTROLLER)
    }

    /// Attaches the source output at controller `-1` (slot 0).
    pub fn set_a(&mut self, module: ModuleRef) {
        self.sources.put(A, module);
    }

    /// Attaches the source output at controller `1` (slot 1).
    pub fn set_b(&mut self, module: ModuleRef) {
        self.sources.put(B, module);
    }

    /// Attaches the controller (slot 2).
    pub fn set_controller(&mut self, module: ModuleRef) {
        self.sources.put(CONTROLLER, module);
    }
}

impl Module for Blend {
    fn get_value(&self, x: f64, y: f64, z: f64) -> f64 {
        let a = self.sources.require(A, "Blend").get_value(x, y, z);
        let b = self.sources.require(B, "Blend").get_value(x, y, z);
        let cv = self.sources.require(CONTROLLER, "Blend").get_value(x, y, z);
        lerp(a, b, (cv + 1.0) / 2.0)
    }

    fn source_count(&self) -> usize {
        self.sources.len()
    }

    fn source(&self, index: usize) -> Option<&ModuleRef> {
        self.sources.get(index)
    }
}
