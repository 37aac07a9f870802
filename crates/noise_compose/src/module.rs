//! The module evaluation contract.
//!
//! Every node in a noise graph implements [`Module`]: a pure function from a 3D
//! coordinate to a scalar. Operators hold their children in a fixed-size
//! [`Sources`] array of shared [`ModuleRef`] handles, so one child may feed any
//! number of parents.
//!
//! Typical usage:
//! - Build leaves and operators, wrap them with [`module_ref`] once configured.
//! - Check the graph once with [`validate`], then evaluate with
//!   [`Module::get_value`] or [`sample_at`] from as many threads as needed.
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use glam::DVec3;
use tracing::debug;

use crate::error::{Error, Result};

/// Shared handle to a module in a graph.
///
/// Nodes only ever reach their children through these handles. Rewiring a node
/// needs `&mut` access, which is unavailable once the node itself is shared, so a
/// graph built from handles cannot contain a cycle.
pub type ModuleRef = Arc<dyn Module>;

/// A node producing a scalar value for every 3D coordinate.
pub trait Module: Send + Sync {
    /// Returns the output value at the given coordinates.
    ///
    /// # Panics
    ///
    /// Operators panic when a source slot their algorithm needs is empty.
    /// Use [`validate`] to check a graph up front.
    fn get_value(&self, x: f64, y: f64, z: f64) -> f64;

    /// Number of source slots. Fixed for a given module type.
    fn source_count(&self) -> usize {
        0
    }

    /// Returns the module in source slot `index`, if one is attached.
    fn source(&self, _index: usize) -> Option<&ModuleRef> {
        None
    }

    /// Short type name used in diagnostics.
    fn name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Wraps a configured module into a shareable [`ModuleRef`].
pub fn module_ref<M>(module: M) -> ModuleRef
where
    M: Module + 'static,
{
    Arc::new(module)
}

/// Evaluates `module` at `p`.
///
/// Accepts anything convertible into a [`DVec3`], including `[f64; 3]`,
/// `(f64, f64, f64)` and `mint::Vector3<f64>`.
#[inline]
pub fn sample_at<M>(module: &M, p: impl Into<DVec3>) -> f64
where
    M: Module + ?Sized,
{
    let p = p.into();
    module.get_value(p.x, p.y, p.z)
}

/// Checks that every source slot reachable from `root` is populated.
///
/// Shared children are visited once, so diamond-shaped graphs are walked in
/// linear time. Returns the first empty slot found as [`Error::MissingSource`].
pub fn validate(root: &dyn Module) -> Result<()> {
    check_sources(root)?;

    let mut seen: HashSet<*const ()> = HashSet::new();
    let mut stack: Vec<&ModuleRef> = (0..root.source_count())
        .filter_map(|i| root.source(i))
        .collect();

    while let Some(node) = stack.pop() {
        if !seen.insert(Arc::as_ptr(node) as *const ()) {
            continue;
        }
        check_sources(node.as_ref())?;
        stack.extend((0..node.source_count()).filter_map(|i| node.source(i)));
    }

    Ok(())
}

fn check_sources(node: &dyn Module) -> Result<()> {
    for index in 0..node.source_count() {
        if node.source(index).is_none() {
            let module = node.name();
            debug!("{} is missing source module {}.", module, index);
            return Err(Error::MissingSource { module, index });
        }
    }
    Ok(())
}

/// Fixed-size, position-addressed source slots of an operator.
///
/// The slot count `N` is the operator's arity and never changes. Each slot is
/// either empty or holds a shared handle to another module.
#[derive(Clone)]
pub struct Sources<const N: usize> {
    slots: [Option<ModuleRef>; N],
}

impl<const N: usize> Sources<N> {
    /// Creates a set of empty slots.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Creates fully populated slots.
    pub fn from_modules(modules: [ModuleRef; N]) -> Self {
        Self {
            slots: modules.map(Some),
        }
    }

    /// Number of slots.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` for a module without sources.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the module in slot `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&ModuleRef> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Attaches `module` to slot `index`, replacing any previous module.
    pub fn set(&mut self, index: usize, module: ModuleRef) -> Result<()> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(Error::SourceIndex { index, count: N })?;
        *slot = Some(module);
        Ok(())
    }

    /// Empties slot `index` and returns what it held.
    pub fn take(&mut self, index: usize) -> Option<ModuleRef> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Returns `true` when every slot is populated.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Returns the module in slot `index`.
    ///
    /// # Panics
    ///
    /// Panics when the slot is empty. `owner` names the module in the message.
    #[inline]
    #[track_caller]
    pub fn require(&self, index: usize, owner: &str) -> &dyn Module {
        match self.get(index) {
            Some(module) => module.as_ref(),
            None => panic!("{owner} has no source module in slot {index}"),
        }
    }

    // Const slot indices only; out of range is a bug in the operator.
    pub(crate) fn put(&mut self, index: usize, module: ModuleRef) {
        self.slots[index] = Some(module);
    }
}

impl<const N: usize> Default for Sources<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Sources<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.slots
                    .iter()
                    .map(|slot| slot.as_ref().map(|m| m.name())),
            )
            .finish()
    }
}
