//! Single-source modifiers.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::check_bounds;
use crate::error::Result;
use crate::module::{Module, ModuleRef, Sources};

const SOURCE: usize = 0;

macro_rules! unary_operator {
    ($(#[$doc:meta])* $name:ident, |$v:ident| $apply:expr) => {
        $(#[$doc])*
        #[derive(Clone, Debug, Default)]
        pub struct $name {
            sources: Sources<1>,
        }

        impl $name {
            /// Creates the modifier with an empty source slot.
            pub fn new() -> Self {
                Self::default()
            }

            /// Creates the modifier applied to `source`.
            pub fn with_source(source: ModuleRef) -> Self {
                Self {
                    sources: Sources::from_modules([source]),
                }
            }

            /// Attaches the source module.
            pub fn set_source(&mut self, module: ModuleRef) {
                self.sources.put(SOURCE, module);
            }
        }

        impl Module for $name {
            #[inline]
            fn get_value(&self, x: f64, y: f64, z: f64) -> f64 {
                let $v = self
                    .sources
                    .require(SOURCE, stringify!($name))
                    .get_value(x, y, z);
                $apply
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

unary_operator!(
    /// Outputs the absolute value of its source.
    Abs,
    |v| v.abs()
);

unary_operator!(
    /// Outputs the negated value of its source.
    Invert,
    |v| -v
);

/// Parameters for a clamp node.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClampParams {
    /// Minimum value to clamp to.
    pub min: f64,
    /// Maximum value to clamp to.
    pub max: f64,
}

impl Default for ClampParams {
    fn default() -> Self {
        Self {
            min: -1.0,
            max: 1.0,
        }
    }
}

/// Clamps its source to `[min, max]`.
#[derive(Clone, Debug, Default)]
pub struct Clamp {
    sources: Sources<1>,
    params: ClampParams,
}

impl Clamp {
    /// Creates the modifier with an empty source slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clamp applied to `source`.
    ///
    /// Fails with [`crate::error::Error::InvalidBounds`] unless `min < max`.
    pub fn with_source(source: ModuleRef, params: ClampParams) -> Result<Self> {
        check_bounds("Clamp", params.min, params.max)?;
        Ok(Self {
            sources: Sources::from_modules([source]),
            params,
        })
    }

    /// Current clamp bounds.
    pub fn params(&self) -> ClampParams {
        self.params
    }

    /// Replaces the clamp bounds. Requires `min < max`.
    pub fn set_bounds(&mut self, min: f64, max: f64) -> Result<()> {
        check_bounds("Clamp", min, max)?;
        self.params = ClampParams { min, max };
        Ok(())
    }

    /// Attaches the source module.
    pub fn set_source(&mut self, module: ModuleRef) {
        self.sources.put(SOURCE, module);
    }
}

impl Module for Clamp {
    #[inline]
    fn get_value(&self, x: f64, y: f64, z: f64) -> f64 {
        let v = self.sources.require(SOURCE, "Clamp").get_value(x, y, z);
        v.clamp(self.params.min, self.params.max)
    }

    fn source_count(&self) -> usize {
        self.sources.len()
    }

    fn source(&self, index: usize) -> Option<&ModuleRef> {
        self.sources.get(index)
    }
}

/// Parameters for a scale-bias node.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBiasParams {
    /// Factor applied to the source value.
    pub scale: f64,
    /// Offset added after scaling.
    pub bias: f64,
}

impl Default for ScaleBiasParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            bias: 0.0,
        }
    }
}

/// Outputs `source * scale + bias`.
#[derive(Clone, Debug, Default)]
pub struct ScaleBias {
    sources: Sources<1>,
    pub params: ScaleBiasParams,
}

impl ScaleBias {
    /// Creates the modifier with an empty source slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scale-bias applied to `source`.
    pub fn with_source(source: ModuleRef, params: ScaleBiasParams) -> Self {
        Self {
            sources: Sources::from_modules([source]),
            params,
        }
    }

    /// Attaches the source module.
    pub fn set_source(&mut self, module: ModuleRef) {
        self.sources.put(SOURCE, module);
    }
}

impl Module for ScaleBias {
    #[inline]
    fn get_value(&self, x: f64, y: f64, z: f64) -> f64 {
        let v = self.sources.require(SOURCE, "ScaleBias").get_value(x, y, z);
        v * self.params.scale + self.params.bias
    }

    fn source_count(&self) -> usize {
        self.sources.len()
    }

    fn source(&self, index: usize) -> Option<&ModuleRef> {
        self.sources.get(index)
    }
}
