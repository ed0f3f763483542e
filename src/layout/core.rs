use std::collections::HashMap;

use serde_json::json;

use crate::area::{AreaSpan, parse_area_grid, parse_line_span};
use crate::error::{GridError, Result};
use crate::geometry::{Rect, Size};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::LayoutMetrics;
use crate::track::{TrackLength, parse_track_list};

use super::axis::AxisState;

const LOG_TARGET: &str = "gridpanel::layout";

/// Two-axis grid layout engine.
///
/// Holds the column and row track lists plus the named-area table, and keeps
/// a derived [`AxisState`] per axis that is rebuilt whole whenever tracks,
/// areas, or the available size change. Rectangle lookups read the cumulative
/// offsets of those snapshots.
///
/// The engine is synchronous and does no internal locking; embed it behind a
/// single lock or confine it to one thread.
#[derive(Default)]
pub struct GridLayout {
    columns: Option<Vec<TrackLength>>,
    rows: Option<Vec<TrackLength>>,
    areas: HashMap<String, AreaSpan>,
    available: Option<Size>,
    column_axis: Option<AxisState>,
    row_axis: Option<AxisState>,
    metrics: LayoutMetrics,
    logger: Option<Logger>,
}

impl GridLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a logger; the engine emits one event per recompute and per
    /// atomic area replace. Failures never log, they propagate.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Replace the column track list.
    pub fn set_columns(&mut self, tracks: Vec<TrackLength>) {
        self.columns = Some(tracks);
        self.recompute();
    }

    /// Replace the column track list from text, e.g. `"200px auto 2fr"`.
    pub fn set_columns_text(&mut self, text: &str) -> Result<()> {
        let tracks = parse_track_list(text)?;
        self.set_columns(tracks);
        Ok(())
    }

    /// Replace the row track list.
    pub fn set_rows(&mut self, tracks: Vec<TrackLength>) {
        self.rows = Some(tracks);
        self.recompute();
    }

    /// Replace the row track list from text.
    pub fn set_rows_text(&mut self, text: &str) -> Result<()> {
        let tracks = parse_track_list(text)?;
        self.set_rows(tracks);
        Ok(())
    }

    /// Insert one named area with an explicit line span. Redefining an
    /// existing name fails and leaves the table untouched.
    pub fn define_area(&mut self, name: impl Into<String>, span: AreaSpan) -> Result<()> {
        let name = name.into();
        if self.areas.contains_key(&name) {
            return Err(GridError::DuplicateArea { name });
        }
        self.areas.insert(name, span);
        self.metrics.record_area_definitions(1);
        self.recompute();
        Ok(())
    }

    /// Insert one named area from line-coordinate specs, e.g.
    /// `define_area_spec("body", "0/2", "1")`.
    pub fn define_area_spec(
        &mut self,
        name: impl Into<String>,
        columns: &str,
        rows: &str,
    ) -> Result<()> {
        let (column_start, column_end) = parse_line_span(columns)?;
        let (row_start, row_end) = parse_line_span(rows)?;
        self.define_area(
            name,
            AreaSpan::new(column_start, column_end, row_start, row_end),
        )
    }

    /// Atomically replace the whole area table from a named-area grid.
    ///
    /// The grid must have one row per row track. On any parse failure the
    /// previous table is left exactly as it was.
    pub fn define_areas(&mut self, grid: &str) -> Result<()> {
        let row_count = self
            .rows
            .as_ref()
            .ok_or(GridError::TracksUndefined)?
            .len();
        let areas = parse_area_grid(grid, row_count)?;

        self.metrics.record_area_definitions(areas.len());
        self.emit(
            "areas_replaced",
            [
                json_kv("areas", json!(areas.len())),
                json_kv("rows", json!(row_count)),
            ],
        );
        self.areas = areas;
        self.recompute();
        Ok(())
    }

    /// Update the available pixel extent for both axes.
    pub fn set_available_size(&mut self, width: f32, height: f32) {
        self.available = Some(Size::new(width, height));
        self.recompute();
    }

    /// Pixel rectangle of a named area under the current tracks and size.
    pub fn area_rect(&self, name: &str) -> Result<Rect> {
        let (Some(column_axis), Some(row_axis)) = (&self.column_axis, &self.row_axis) else {
            return Err(GridError::TracksUndefined);
        };

        // Blank names are never in the table, so they fall out as not-found.
        let span = self
            .areas
            .get(name)
            .ok_or_else(|| GridError::AreaNotFound {
                name: name.to_string(),
            })?;

        let left = column_axis.line_position(span.column_start);
        let right = column_axis.line_position(span.column_end);
        let top = row_axis.line_position(span.row_start);
        let bottom = row_axis.line_position(span.row_end);

        Ok(Rect::new(left, top, right - left, bottom - top))
    }

    /// Span of a named area, independent of any pixel state.
    pub fn area_span(&self, name: &str) -> Option<AreaSpan> {
        self.areas.get(name).copied()
    }

    pub fn area_names(&self) -> impl Iterator<Item = &str> {
        self.areas.keys().map(String::as_str)
    }

    /// Solved column sizes, if tracks and an available size are in place.
    pub fn column_sizes(&self) -> Option<&[f32]> {
        self.column_axis.as_ref().map(AxisState::sizes)
    }

    /// Solved row sizes, if tracks and an available size are in place.
    pub fn row_sizes(&self) -> Option<&[f32]> {
        self.row_axis.as_ref().map(AxisState::sizes)
    }

    /// Cumulative column offsets of the current snapshot.
    pub fn column_offsets(&self) -> Option<&[f32]> {
        self.column_axis.as_ref().map(AxisState::offsets)
    }

    /// Cumulative row offsets of the current snapshot.
    pub fn row_offsets(&self) -> Option<&[f32]> {
        self.row_axis.as_ref().map(AxisState::offsets)
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Re-derive both axes from scratch. A no-op until both track lists and
    /// the available size are known; there is never a partial patch.
    fn recompute(&mut self) {
        let (Some(columns), Some(rows), Some(size)) =
            (self.columns.as_ref(), self.rows.as_ref(), self.available)
        else {
            return;
        };

        self.column_axis = Some(AxisState::solve(columns, size.width));
        self.row_axis = Some(AxisState::solve(rows, size.height));
        self.metrics.record_recompute(2);

        self.emit(
            "grid_recompute",
            [
                json_kv("columns", json!(columns.len())),
                json_kv("rows", json!(rows.len())),
                json_kv("areas", json!(self.areas.len())),
                json_kv("width", json!(size.width)),
                json_kv("height", json!(size.height)),
            ],
        );
    }

    fn emit(
        &self,
        message: &str,
        fields: impl IntoIterator<Item = (String, serde_json::Value)>,
    ) {
        if let Some(logger) = &self.logger {
            let event = event_with_fields(LogLevel::Debug, LOG_TARGET, message, fields);
            let _ = logger.log_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemorySink;

    const DASHBOARD_AREAS: &str = "header header right1 right1 right2\nbody . . . .\nbody . . . .";

    fn dashboard() -> GridLayout {
        let mut grid = GridLayout::new();
        grid.set_columns_text("200px auto 2fr auto auto").unwrap();
        grid.set_rows_text("30px auto auto").unwrap();
        grid.define_areas(DASHBOARD_AREAS).unwrap();
        grid.set_available_size(800.0, 600.0);
        grid
    }

    #[test]
    fn resolves_the_dashboard_rectangles() {
        let grid = dashboard();

        // Columns: 200 fixed, then 2fr takes the remaining 600; autos get 0.
        let header = grid.area_rect("header").unwrap();
        assert_eq!(header, Rect::new(0.0, 0.0, 200.0, 30.0));

        let body = grid.area_rect("body").unwrap();
        assert_eq!(body.left, 0.0);
        assert_eq!(body.top, 30.0);
        assert_eq!(body.width, 200.0);
        assert_eq!(body.height, 570.0);

        let right1 = grid.area_rect("right1").unwrap();
        assert_eq!(right1.left, 200.0);
        assert_eq!(right1.width, 600.0);
        assert_eq!(right1.height, 30.0);

        let right2 = grid.area_rect("right2").unwrap();
        assert_eq!(right2.left, 800.0);
        assert_eq!(right2.width, 0.0);
    }

    #[test]
    fn area_spans_match_the_grid_text() {
        let grid = dashboard();
        assert_eq!(grid.area_span("header"), Some(AreaSpan::new(0, 2, 0, 1)));
        assert_eq!(grid.area_span("right1"), Some(AreaSpan::new(2, 4, 0, 1)));
        assert_eq!(grid.area_span("right2"), Some(AreaSpan::new(4, 5, 0, 1)));
        assert_eq!(grid.area_span("body"), Some(AreaSpan::new(0, 1, 1, 3)));
        assert_eq!(grid.area_names().count(), 4);
    }

    #[test]
    fn unknown_and_blank_names_are_not_found() {
        let grid = dashboard();
        assert!(matches!(
            grid.area_rect("missing"),
            Err(GridError::AreaNotFound { .. })
        ));
        assert!(matches!(
            grid.area_rect("  "),
            Err(GridError::AreaNotFound { .. })
        ));
    }

    #[test]
    fn lookups_before_tracks_exist_fail() {
        let grid = GridLayout::new();
        assert!(matches!(
            grid.area_rect("header"),
            Err(GridError::TracksUndefined)
        ));

        let mut half = GridLayout::new();
        half.set_columns_text("1fr").unwrap();
        half.set_available_size(100.0, 100.0);
        assert!(matches!(
            half.area_rect("header"),
            Err(GridError::TracksUndefined)
        ));
    }

    #[test]
    fn redefining_an_area_fails_and_keeps_the_original() {
        let mut grid = dashboard();
        let before = grid.area_span("header").unwrap();

        let err = grid
            .define_area("header", AreaSpan::new(0, 5, 0, 3))
            .unwrap_err();
        assert!(matches!(err, GridError::DuplicateArea { .. }));
        assert_eq!(grid.area_span("header"), Some(before));
    }

    #[test]
    fn failed_grid_replace_keeps_the_previous_table() {
        let mut grid = dashboard();

        let err = grid
            .define_areas("a b a . .\n. . . . .\n. . . . .")
            .unwrap_err();
        assert!(matches!(err, GridError::NonContiguousRegion { .. }));

        assert_eq!(grid.area_names().count(), 4);
        assert!(grid.area_rect("header").is_ok());
    }

    #[test]
    fn grid_replace_requires_row_tracks() {
        let mut grid = GridLayout::new();
        assert!(matches!(
            grid.define_areas("a"),
            Err(GridError::TracksUndefined)
        ));
    }

    #[test]
    fn grid_replace_discards_the_old_table() {
        let mut grid = dashboard();
        grid.define_areas("top top top top top\nmain main main side side\nmain main main side side")
            .unwrap();

        assert!(grid.area_rect("header").is_err());
        let top = grid.area_rect("top").unwrap();
        assert_eq!(top, Rect::new(0.0, 0.0, 800.0, 30.0));
    }

    #[test]
    fn define_area_spec_parses_both_axes() {
        let mut grid = GridLayout::new();
        grid.set_columns_text("1fr 1fr 1fr 1fr").unwrap();
        grid.set_rows_text("1fr 1fr").unwrap();
        grid.define_area_spec("main", "1/3", "0").unwrap();
        grid.set_available_size(400.0, 200.0);

        let rect = grid.area_rect("main").unwrap();
        assert_eq!(rect, Rect::new(100.0, 0.0, 200.0, 100.0));
    }

    #[test]
    fn resize_matches_a_freshly_built_engine() {
        let mut resized = dashboard();
        resized.set_available_size(1024.0, 768.0);

        let mut fresh = GridLayout::new();
        fresh.set_columns_text("200px auto 2fr auto auto").unwrap();
        fresh.set_rows_text("30px auto auto").unwrap();
        fresh.define_areas(DASHBOARD_AREAS).unwrap();
        fresh.set_available_size(1024.0, 768.0);

        for name in ["header", "right1", "right2", "body"] {
            assert_eq!(resized.area_rect(name).unwrap(), fresh.area_rect(name).unwrap());
        }
        assert_eq!(resized.column_sizes(), fresh.column_sizes());
        assert_eq!(resized.row_sizes(), fresh.row_sizes());
        assert_eq!(resized.column_offsets(), fresh.column_offsets());
        assert_eq!(resized.row_offsets(), fresh.row_offsets());
    }

    #[test]
    fn track_changes_rebuild_the_axes() {
        let mut grid = dashboard();
        grid.set_columns(vec![TrackLength::Fraction(1.0), TrackLength::Fraction(1.0)]);

        assert_eq!(grid.column_sizes(), Some(&[400.0, 400.0][..]));
    }

    #[test]
    fn metrics_count_recomputes_and_definitions() {
        let grid = dashboard();
        let snapshot = grid.metrics().snapshot();

        // Recomputes fire only once tracks and size are all present: the
        // set_available_size call in dashboard() is the first.
        assert_eq!(snapshot.recomputes, 1);
        assert_eq!(snapshot.axis_solves, 2);
        assert_eq!(snapshot.area_definitions, 4);
    }

    #[test]
    fn recomputes_reach_an_attached_logger() {
        let sink = MemorySink::new();
        let mut grid = GridLayout::new().with_logger(Logger::new(sink.clone()));

        grid.set_columns_text("1fr").unwrap();
        grid.set_rows_text("1fr").unwrap();
        assert!(sink.is_empty());

        grid.set_available_size(100.0, 50.0);
        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message, "grid_recompute");
        assert_eq!(events[0].fields["width"], 100.0);
    }
}
