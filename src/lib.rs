//! Pixel layout engine for two-dimensional grids of named areas.
//!
//! Row and column tracks are declared with CSS-grid-style lengths (`200px`,
//! `30%`, `2fr`, `auto`), areas are named spans of grid lines, and the engine
//! answers "what pixel rectangle does area X occupy" for any available size.
//! The modules follow the RSB `MODULE_SPEC` pattern: public orchestrator
//! modules re-export from private implementation files.

pub mod area;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod track;

pub use area::{AreaSpan, parse_area_grid, parse_line_span};
pub use error::{ErrorKind, GridError, Result};
pub use geometry::{Rect, Size};
pub use layout::{AxisState, GridLayout};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink, event_with_fields, json_kv,
};
pub use metrics::{LayoutMetrics, MetricSnapshot};
pub use track::{TrackLength, parse_track_list, repeat};
