use num_traits::Float;
use std::fmt::{Debug, Display};

/// Numeric type used for transition costs, heuristic estimates and path costs.
///
/// Implemented for [f32] (the default everywhere in this crate) and [f64].
/// [UNREACHABLE](Cost::UNREACHABLE) doubles as "no direct transition" in a cost table and
/// "no path found" in a [SearchResult](crate::search::SearchResult).
pub trait Cost: Float + Debug + Display + Send + Sync + 'static {
    /// Sentinel larger than any achievable finite path cost.
    const UNREACHABLE: Self;
    /// Cost of a single move between two open 4-adjacent cells.
    const UNIT: Self;
    /// Scores closer than this are considered equal during selection.
    const TIE_EPSILON: Self;

    fn from_f64(value: f64) -> Self;

    /// Converts a step count (such as a Manhattan distance) into a cost.
    fn from_steps(steps: usize) -> Self {
        Self::from_f64(steps as f64)
    }

    #[inline]
    fn is_unreachable(self) -> bool {
        self >= Self::UNREACHABLE
    }
}

impl Cost for f32 {
    const UNREACHABLE: f32 = f32::MAX;
    const UNIT: f32 = 1.0;
    const TIE_EPSILON: f32 = 1e-5;

    fn from_f64(value: f64) -> f32 {
        value as f32
    }
}

impl Cost for f64 {
    const UNREACHABLE: f64 = f64::MAX;
    const UNIT: f64 = 1.0;
    const TIE_EPSILON: f64 = 1e-5;

    fn from_f64(value: f64) -> f64 {
        value
    }
}
