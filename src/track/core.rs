use crate::error::{GridError, Result};

/// Sizing rule for a single row or column track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackLength {
    /// Fixed size in pixels.
    Pixels(f32),
    /// Percentage of the available axis length.
    Percent(f32),
    /// Weighted share of the space left after fixed tracks, like CSS `fr`.
    Fraction(f32),
    /// Equal share of whatever remains once fractions are assigned.
    Auto,
}

impl TrackLength {
    /// Fraction weight contributed to the axis total; zero for other units.
    pub fn fraction_weight(&self) -> f32 {
        match self {
            Self::Fraction(weight) => *weight,
            _ => 0.0,
        }
    }
}

/// Build `n` identical tracks, e.g. `repeat(4, TrackLength::Fraction(1.0))`.
pub fn repeat(n: usize, track: TrackLength) -> Vec<TrackLength> {
    vec![track; n]
}

/// Parse a whitespace-separated track list such as `"200px auto 2fr"`.
///
/// Suffixes are matched in priority order: `px` (integer), `fr` (float),
/// `%` (float), then the literal `auto`. Anything else fails with the
/// offending token and its position. Magnitudes are not range-checked;
/// a negative length flows through to negative pixel sizes downstream.
pub fn parse_track_list(text: &str) -> Result<Vec<TrackLength>> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            parse_token(token).ok_or_else(|| GridError::BadTrackLength {
                token: token.to_string(),
                index,
            })
        })
        .collect()
}

fn parse_token(token: &str) -> Option<TrackLength> {
    if let Some(prefix) = token.strip_suffix("px") {
        prefix
            .parse::<i32>()
            .ok()
            .map(|pixels| TrackLength::Pixels(pixels as f32))
    } else if let Some(prefix) = token.strip_suffix("fr") {
        prefix.parse::<f32>().ok().map(TrackLength::Fraction)
    } else if let Some(prefix) = token.strip_suffix('%') {
        prefix.parse::<f32>().ok().map(TrackLength::Percent)
    } else if token == "auto" {
        Some(TrackLength::Auto)
    } else {
        None
    }
}
