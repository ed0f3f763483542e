//! Layout module orchestrator following the RSB module specification.
//!
//! Downstream crates import the engine types from here while the axis
//! solver and the engine implementation live in private modules.

mod axis;
mod core;

pub use axis::AxisState;
pub use core::GridLayout;
