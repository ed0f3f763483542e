use thiserror::Error;

/// Unified result type for the gridpanel crate.
pub type Result<T> = std::result::Result<T, GridError>;

/// Coarse failure family, for callers that match on category rather than on
/// individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed track list, line spec, or area grid.
    Format,
    /// An area name was defined twice.
    DuplicateName,
    /// A lookup against missing state.
    NotFound,
}

/// Errors surfaced by the grid layout engine.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("invalid track length `{token}` at position {index}")]
    BadTrackLength { token: String, index: usize },
    #[error("invalid grid line spec `{spec}`: {reason}")]
    BadLineSpan { spec: String, reason: &'static str },
    #[error("area grid has {found} rows but the row axis defines {expected} tracks")]
    RowCountMismatch { expected: usize, found: usize },
    #[error("row {row} of the area grid has {found} cells, expected {expected}")]
    ColumnCountMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("area `{name}` on row {row} is not a contiguous region")]
    NonContiguousRegion { name: String, row: usize },
    #[error("area `{name}` on row {row} is shifted")]
    ShiftedRegion { name: String, row: usize },
    #[error("area `{name}` on row {row} spans {found} columns, expected {expected}")]
    RegionWidthMismatch {
        name: String,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("area `{name}` is already defined")]
    DuplicateArea { name: String },
    #[error("area `{name}` not found")]
    AreaNotFound { name: String },
    #[error("track definitions or available size missing; grid is unresolved")]
    TracksUndefined,
}

impl GridError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BadTrackLength { .. }
            | Self::BadLineSpan { .. }
            | Self::RowCountMismatch { .. }
            | Self::ColumnCountMismatch { .. }
            | Self::NonContiguousRegion { .. }
            | Self::ShiftedRegion { .. }
            | Self::RegionWidthMismatch { .. } => ErrorKind::Format,
            Self::DuplicateArea { .. } => ErrorKind::DuplicateName,
            Self::AreaNotFound { .. } | Self::TracksUndefined => ErrorKind::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_cover_the_three_families() {
        let format = GridError::BadTrackLength {
            token: "12qq".into(),
            index: 3,
        };
        assert_eq!(format.kind(), ErrorKind::Format);

        let duplicate = GridError::DuplicateArea {
            name: "header".into(),
        };
        assert_eq!(duplicate.kind(), ErrorKind::DuplicateName);

        assert_eq!(GridError::TracksUndefined.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn messages_carry_structured_context() {
        let err = GridError::ColumnCountMismatch {
            row: 2,
            expected: 5,
            found: 4,
        };
        assert_eq!(err.to_string(), "row 2 of the area grid has 4 cells, expected 5");
    }
}
