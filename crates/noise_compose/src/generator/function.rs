use std::fmt;

use crate::module::Module;

/// Leaf module backed by a closure of the coordinates.
///
/// Handy for gradients, test fixtures, or wrapping a noise function from
/// another crate without writing a dedicated type.
pub struct FnModule<F> {
    f: F,
}

impl<F> FnModule<F>
where
    F: Fn(f64, f64, f64) -> f64 + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Module for FnModule<F>
where
    F: Fn(f64, f64, f64) -> f64 + Send + Sync,
{
    #[inline]
    fn get_value(&self, x: f64, y: f64, z: f64) -> f64 {
        (self.f)(x, y, z)
    }
}

impl<F> fmt::Debug for FnModule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnModule").finish_non_exhaustive()
    }
}
