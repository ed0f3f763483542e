//! Track module orchestrator following the RSB module specification.
//!
//! A track is one row or column slot; its `TrackLength` says how the sizing
//! engine should resolve it to pixels.

mod core;

pub use core::{TrackLength, parse_track_list, repeat};
