//! Leaf modules.
//!
//! Coherent-noise primitives live outside this crate; any type implementing
//! [`crate::module::Module`] can be plugged in as a leaf. The generators here
//! cover constants and ad-hoc functions of the coordinates.
pub mod constant;
pub mod function;

pub use constant::Const;
pub use function::FnModule;
