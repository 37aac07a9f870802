#![forbid(unsafe_code)]
//! noise_compose: compose noise modules into 3D scalar fields.
//!
//! Modules:
//! - module: the evaluation contract, shared handles and fixed-arity source slots
//! - operator: nodes combining child outputs (select, blend, arithmetic, modifiers)
//! - generator: leaf modules for driving operator graphs
//! - math: S-curve and linear interpolation helpers
pub mod error;
pub mod generator;
pub mod math;
pub mod module;
pub mod operator;

/// Convenient re-exports for common types. Import with `use noise_compose::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::generator::{Const, FnModule};
    pub use crate::module::{module_ref, sample_at, validate, Module, ModuleRef, Sources};
    pub use crate::operator::{
        Abs, Add, Blend, Clamp, ClampParams, Invert, Max, Min, Multiply, Power, ScaleBias,
        ScaleBiasParams, Select, SelectParams, Subtract,
    };
}
