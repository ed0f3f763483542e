//! Area module orchestrator following the RSB module specification.
//!
//! Named areas are rectangular spans of grid lines. Both textual grammars
//! (line-coordinate specs and the multi-line area grid) live in the private
//! `core` module.

mod core;

pub use core::{AreaSpan, parse_area_grid, parse_line_span};
