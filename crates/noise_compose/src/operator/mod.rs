//! Operator modules.
//!
//! Operators evaluate their sources at the requested coordinate and combine the
//! results. They keep no state between calls.
pub mod blend;
pub mod combine;
pub mod modifier;
pub mod select;
pub mod subtract;

pub use blend::Blend;
pub use combine::{Add, Max, Min, Multiply, Power};
pub use modifier::{Abs, Clamp, ClampParams, Invert, ScaleBias, ScaleBiasParams};
pub use select::{Select, SelectParams};
pub use subtract::Subtract;

use tracing::warn;

use crate::error::{Error, Result};

/// Rejects bounds unless `min < max`. NaN on either side is rejected too.
pub(crate) fn check_bounds(module: &str, min: f64, max: f64) -> Result<()> {
    if min < max {
        Ok(())
    } else {
        warn!("Rejected bounds [{}, {}] for {}.", min, max, module);
        Err(Error::InvalidBounds { min, max })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::generator::Const;
    use crate::module::{module_ref, ModuleRef};

    pub fn constant(value: f64) -> ModuleRef {
        module_ref(Const::new(value))
    }

    pub fn approx_eq(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }
}
