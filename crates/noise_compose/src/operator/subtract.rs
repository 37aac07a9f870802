//! Difference of two sources.
use crate::module::{Module, ModuleRef, Sources};

const LHS: usize = 0;
const RHS: usize = 1;

/// Outputs `lhs - rhs`.
#[derive(Clone, Debug, Default)]
pub struct Subtract {
    sources: Sources<2>,
}

impl Subtract {
    /// Creates a subtract with both slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a subtract outputting `lhs - rhs`.
    pub fn with_sources(lhs: ModuleRef, rhs: ModuleRef) -> Self {
        Self {
            sources: Sources::from_modules([lhs, rhs]),
        }
    }

    /// Minuend (slot 0).
    pub fn lhs(&self) -> Option<&ModuleRef> {
        self.sources.get(LHS)
    }

    /// Subtrahend (slot 1).
    pub fn rhs(&self) -> Option<&ModuleRef> {
        self.sources.get(RHS)
    }

    /// Attaches the minuend (slot 0).
    pub fn set_lhs(&mut self, module: ModuleRef) {
        self.sources.put(LHS, module);
    }

    /// Attaches the subtrahend (slot 1).
    pub fn set_rhs(&mut self, module: ModuleRef) {
        self.sources.put(RHS, module);
    }
}

impl Module for Subtract {
    #[inline]
    fn get_value(&self, x: f64, y: f64, z: f64) -> f64 {
        let lhs = self.sources.require(LHS, "Subtract");
        let rhs = self.sources.require(RHS, "Subtract");
        lhs.get_value(x, y, z) - rhs.get_value(x, y, z)
    }

    fn source_count(&self) -> usize {
        self.sources.len()
    }

    fn source(&self, index: usize) -> Option<&ModuleRef> {
        self.sources.get(index)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    use super::*;
    use crate::generator::FnModule;
    use crate::module::module_ref;
    use crate::operator::test_support::{approx_eq, constant};

    #[test]
    fn subtracts_constants() {
        let m = Subtract::with_sources(constant(0.5), constant(0.25));
        assert_eq!(m.get_value(0.0, 0.0, 0.0), 0.25);
        assert_eq!(m.source_count(), 2);
    }

    #[test]
    fn order_of_sources_matters() {
        let mut m = Subtract::new();
        m.set_lhs(constant(1.0));
        m.set_rhs(constant(4.0));
        assert_eq!(m.get_value(0.0, 0.0, 0.0), -3.0);
        assert_eq!(m.lhs().unwrap().get_value(0.0, 0.0, 0.0), 1.0);
        assert_eq!(m.rhs().unwrap().get_value(0.0, 0.0, 0.0), 4.0);
    }

    #[test]
    fn matches_pointwise_difference() {
        let a = module_ref(FnModule::new(|x, y, z| x * y - z));
        let b = module_ref(FnModule::new(|x, _, z| (x + z).sin()));
        let m = Subtract::with_sources(a.clone(), b.clone());

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let (x, y, z) = (
                rng.random::<f64>() * 100.0 - 50.0,
                rng.random::<f64>() * 100.0 - 50.0,
                rng.random::<f64>() * 100.0 - 50.0,
            );
            approx_eq(m.get_value(x, y, z), a.get_value(x, y, z) - b.get_value(x, y, z));
        }
    }

    #[test]
    #[should_panic(expected = "Subtract has no source module in slot 1")]
    fn evaluating_without_rhs_panics() {
        let mut m = Subtract::new();
        m.set_lhs(constant(1.0));
        m.get_value(0.0, 0.0, 0.0);
    }
}
