#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::module::Module;

/// Outputs the same value at every coordinate.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Const {
    value: f64,
}

impl Const {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}

impl Module for Const {
    #[inline]
    fn get_value(&self, _x: f64, _y: f64, _z: f64) -> f64 {
        self.value
    }
}
