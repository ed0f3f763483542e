use crate::track::TrackLength;

/// Solved pixel state for one axis: per-track sizes, cumulative offsets, and
/// the axis's total fraction weight.
///
/// A snapshot is derived whole from a track list plus an available length and
/// never patched afterwards; any input change produces a fresh snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisState {
    sizes: Vec<f32>,
    offsets: Vec<f32>,
    fraction_total: f32,
}

impl AxisState {
    /// Resolve every track on an axis to pixels.
    ///
    /// Pixels and Percent tracks are fixed first. Fraction tracks then split
    /// the remaining length by weight, and Auto tracks share equally in
    /// whatever is left after that. An over-committed axis (fixed tracks
    /// exceeding the available length) yields negative shares rather than an
    /// error.
    pub fn solve(tracks: &[TrackLength], available: f32) -> Self {
        let fraction_total: f32 = tracks.iter().map(TrackLength::fraction_weight).sum();

        let mut sizes = vec![0.0_f32; tracks.len()];
        let mut fixed = 0.0_f32;
        let mut auto_count = 0_usize;

        for (idx, track) in tracks.iter().enumerate() {
            let pixels = match track {
                TrackLength::Pixels(pixels) => *pixels,
                TrackLength::Percent(percent) => available * (percent / 100.0),
                TrackLength::Fraction(_) => 0.0,
                TrackLength::Auto => {
                    auto_count += 1;
                    0.0
                }
            };
            fixed += pixels;
            sizes[idx] = pixels;
        }

        let remaining = available - fixed;
        let mut after_fractions = remaining;

        if fraction_total != 0.0 {
            for (idx, track) in tracks.iter().enumerate() {
                if let TrackLength::Fraction(weight) = track {
                    let share = remaining * (weight / fraction_total);
                    sizes[idx] = share;
                    after_fractions -= share;
                }
            }
        }

        if auto_count > 0 {
            let share = after_fractions / auto_count as f32;
            for (idx, track) in tracks.iter().enumerate() {
                if matches!(track, TrackLength::Auto) {
                    sizes[idx] = share;
                }
            }
        }

        let mut offsets = Vec::with_capacity(sizes.len());
        let mut sum = 0.0_f32;
        for &size in &sizes {
            sum += size;
            offsets.push(sum);
        }

        Self {
            sizes,
            offsets,
            fraction_total,
        }
    }

    /// Per-track pixel sizes, in track order.
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Cumulative pixel offsets; `offsets()[i]` is the trailing edge of
    /// track `i`.
    pub fn offsets(&self) -> &[f32] {
        &self.offsets
    }

    pub fn fraction_total(&self) -> f32 {
        self.fraction_total
    }

    pub fn track_count(&self) -> usize {
        self.sizes.len()
    }

    /// Pixel position of a grid line; line 0 is the leading edge.
    /// Lines past the last track are out of range.
    pub fn line_position(&self, line: usize) -> f32 {
        if line == 0 { 0.0 } else { self.offsets[line - 1] }
    }
}
