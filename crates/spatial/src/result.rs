//! Resolution outcomes.

/// How a time series was obtained from the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMethod {
    /// Extracted directly from the nearest grid cell.
    Direct,
    /// Inverse-distance-weighted average of adjacent cells.
    Interpolated,
}

/// Outcome of resolving a climate index at a coordinate.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// A per-year series from the grid (tier 1 or 2).
    Series {
        /// Annual samples, missing entries preserved as `None`.
        values: Vec<Option<f64>>,
        /// Which grid tier produced the series.
        method: ResolveMethod,
    },
    /// A single scalar from the regional baseline table (tier 3).
    Baseline {
        /// The proxy value.
        value: f64,
        /// Name of the matched region.
        region: &'static str,
    },
}

impl Resolution {
    /// Collapses the resolution to a single representative value.
    ///
    /// For a series, restricts to the most recent `window` entries when at
    /// least that many exist, then averages the valid samples; returns
    /// `None` when the window holds no valid sample. A baseline passes its
    /// scalar through unchanged.
    pub fn recent_mean_value(&self, window: usize) -> Option<f64> {
        match self {
            Resolution::Series { values, .. } => recent_mean(values, window),
            Resolution::Baseline { value, .. } => Some(*value),
        }
    }
}

/// Mean of the valid samples in the trailing `window` of `values`.
///
/// Uses all entries when fewer than `window` exist. Returns `None` if the
/// restricted window contains no valid sample.
pub fn recent_mean(values: &[Option<f64>], window: usize) -> Option<f64> {
    let start = values.len().saturating_sub(window);
    let recent = &values[start..];

    let mut sum = 0.0;
    let mut n = 0usize;
    for v in recent.iter().flatten() {
        sum += v;
        n += 1;
    }

    if n == 0 { None } else { Some(sum / n as f64) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn recent_mean_uses_trailing_window() {
        // 35 entries: first 5 are large outliers that must be excluded by a
        // 30-entry window.
        let mut values: Vec<Option<f64>> = vec![Some(1000.0); 5];
        values.extend(std::iter::repeat_n(Some(2.0), 30));

        assert_abs_diff_eq!(recent_mean(&values, 30).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn recent_mean_uses_all_when_short() {
        let values = vec![Some(1.0), Some(2.0), Some(3.0)];
        assert_abs_diff_eq!(recent_mean(&values, 30).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn recent_mean_skips_missing_entries() {
        let values = vec![Some(10.0), None, Some(20.0), None];
        assert_abs_diff_eq!(recent_mean(&values, 30).unwrap(), 15.0, epsilon = 1e-12);
    }

    #[test]
    fn recent_mean_none_when_window_all_missing() {
        let mut values: Vec<Option<f64>> = vec![Some(5.0); 10];
        values.extend(std::iter::repeat_n(None, 30));
        assert_eq!(recent_mean(&values, 30), None);
    }

    #[test]
    fn recent_mean_empty_input() {
        assert_eq!(recent_mean(&[], 30), None);
    }

    #[test]
    fn baseline_passes_scalar_through() {
        let r = Resolution::Baseline {
            value: 34.0,
            region: "tropics",
        };
        assert_eq!(r.recent_mean_value(30), Some(34.0));
    }

    #[test]
    fn series_resolution_delegates_to_recent_mean() {
        let r = Resolution::Series {
            values: vec![Some(2.0), Some(4.0)],
            method: ResolveMethod::Direct,
        };
        assert_abs_diff_eq!(r.recent_mean_value(30).unwrap(), 3.0, epsilon = 1e-12);
    }
}
