//! Two-source arithmetic operators.
//!
//! Each operator evaluates both sources at the same coordinate and combines the
//! results with a single arithmetic operation. [`super::Subtract`] follows the
//! same shape.
use crate::module::{Module, ModuleRef, Sources};

macro_rules! binary_operator {
    ($(#[$doc:meta])* $name:ident, |$a:ident, $b:ident| $combine:expr) => {
        $(#[$doc])*
        #[derive(Clone, Debug, Default)]
        pub struct $name {
            sources: Sources<2>,
        }

        impl $name {
            /// Creates the operator with both slots empty.
            pub fn new() -> Self {
                Self::default()
            }

            /// Creates the operator with both slots populated.
            pub fn with_sources(lhs: ModuleRef, rhs: ModuleRef) -> Self {
                Self {
                    sources: Sources::from_modules([lhs, rhs]),
                }
            }

            /// First operand (slot 0).
            pub fn lhs(&self) -> Option<&ModuleRef> {
                self.sources.get(0)
            }

            /// Second operand (slot 1).
            pub fn rhs(&self) -> Option<&ModuleRef> {
                self.sources.get(1)
            }

            /// Attaches the first operand (slot 0).
            pub fn set_lhs(&mut self, module: ModuleRef) {
                self.sources.put(0, module);
            }

            /// Attaches the second operand (slot 1).
            pub fn set_rhs(&mut self, module: ModuleRef) {
                self.sources.put(1, module);
            }
        }

        impl Module for $name {
            #[inline]
            fn get_value(&self, x: f64, y: f64, z: f64) -> f64 {
                let $a = self.sources.require(0, stringify!($name)).get_value(x, y, z);
                let $b = self.sources.require(1, stringify!($name)).get_value(x, y, z);
                $combine
            }

            fn source_count(&self) -> usize {
                self.sources.len()
            }

            fn source(&self, index: usize) -> Option<&ModuleRef> {
                self.sources.get(index)
            }
        }
    };
}

binary_operator!(
    /// Outputs `lhs + rhs`.
    Add,
    |a, b| a + b
);

binary_operator!(
    /// Outputs `lhs * rhs`.
    Multiply,
    |a, b| a * b
);

binary_operator!(
    /// Outputs the smaller of the two source values.
    Min,
    |a, b| a.min(b)
);

binary_operator!(
    /// Outputs the larger of the two source values.
    Max,
    |a, b| a.max(b)
);

binary_operator!(
    /// Outputs `lhs` raised to the power of `rhs`.
    Power,
    |a, b| a.powf(b)
);
