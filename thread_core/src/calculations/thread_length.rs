//! # Thread Length Calculation
//!
//! Estimates how much thread a saddle-stitched seam consumes.
//!
//! ## Method
//!
//! For `n` holes at spacing `s` through leather of thickness `t`:
//!
//! ```text
//! horizontal = ceil((n - 1) * s * 2)     // each gap is crossed out and back
//! thickness  = round(n * t * 2)          // each hole is passed through twice
//! total      = horizontal + thickness + finishing
//! ```
//!
//! The horizontal term rounds up, the thickness term rounds to nearest.
//! Parameters with a zero hole count, spacing or thickness are invalid and
//! yield a total of `0` rather than an error.
//!
//! ## Example
//!
//! ```rust
//! use thread_core::calculations::thread_length::{calculate, CalculationParams, StitchLength};
//!
//! let params = CalculationParams {
//!     length: StitchLength::ByHoleCount { count: 10 },
//!     spacing_mm: 4.0,
//!     thickness_mm: 2.0,
//!     finishing_length_mm: 200,
//! };
//! assert_eq!(calculate(&params), 312);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Length of the seam, either as a hole count or as a distance to be pricked.
///
/// ## JSON Example
///
/// ```json
/// { "type": "ByDistance", "length_mm": 100, "spacing_mm": 4.5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StitchLength {
    /// Holes counted directly
    ByHoleCount { count: u32 },
    /// Seam length in millimeters, pricked at the given spacing
    ByDistance { length_mm: u32, spacing_mm: f64 },
}

impl StitchLength {
    /// Number of holes along the seam.
    ///
    /// For a distance this is `floor(length / spacing)`.
    pub fn hole_count(&self) -> u32 {
        match *self {
            StitchLength::ByHoleCount { count } => count,
            // `as` saturates, so a zero spacing yields u32::MAX instead of panicking
            StitchLength::ByDistance { length_mm, spacing_mm } => {
                (f64::from(length_mm) / spacing_mm).floor() as u32
            }
        }
    }
}

/// Inputs to a single thread length calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationParams {
    /// Seam length
    pub length: StitchLength,

    /// Distance between adjacent holes (mm)
    pub spacing_mm: f64,

    /// Leather thickness (mm)
    pub thickness_mm: f64,

    /// Extra thread for knotting and finishing (mm)
    pub finishing_length_mm: u32,
}

impl CalculationParams {
    /// True when hole count, spacing and thickness are all non-zero.
    ///
    /// This is the same rule that enables the Calculate action on the form.
    pub fn is_valid(&self) -> bool {
        self.length.hole_count() != 0 && self.spacing_mm != 0.0 && self.thickness_mm != 0.0
    }
}

/// Each term of a thread length result.
///
/// ## JSON Example
///
/// ```json
/// {
///   "hole_count": 10,
///   "horizontal_travel_mm": 72,
///   "thickness_travel_mm": 40,
///   "finishing_length_mm": 200,
///   "total_length_mm": 312
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadLengthBreakdown {
    /// Hole count used for the travel terms (at least 1)
    pub hole_count: u32,

    /// Thread running along the seam between holes (mm)
    pub horizontal_travel_mm: u32,

    /// Thread passing through the leather (mm)
    pub thickness_travel_mm: u32,

    /// Finishing allowance (mm)
    pub finishing_length_mm: u32,

    /// Sum of all terms (mm)
    pub total_length_mm: u32,
}

/// Work out every term of the thread length, or `None` for invalid parameters.
pub fn breakdown(params: &CalculationParams) -> Option<ThreadLengthBreakdown> {
    if !params.is_valid() {
        debug!(?params, "thread length parameters invalid");
        return None;
    }

    let hole_count = params.length.hole_count().max(1);

    // Ceiling on the full product; casts saturate at 0 for negative inputs
    let horizontal_travel_mm = (f64::from(hole_count - 1) * params.spacing_mm * 2.0).ceil() as u32;
    let thickness_travel_mm = (f64::from(hole_count) * params.thickness_mm * 2.0).round() as u32;

    let total_length_mm = horizontal_travel_mm
        .saturating_add(thickness_travel_mm)
        .saturating_add(params.finishing_length_mm);

    debug!(
        hole_count,
        horizontal_travel_mm, thickness_travel_mm, total_length_mm, "calculated thread length"
    );

    Some(ThreadLengthBreakdown {
        hole_count,
        horizontal_travel_mm,
        thickness_travel_mm,
        finishing_length_mm: params.finishing_length_mm,
        total_length_mm,
    })
}

/// Total thread length in millimeters, `0` for invalid parameters.
pub fn calculate(params: &CalculationParams) -> u32 {
    breakdown(params).map_or(0, |b| b.total_length_mm)
}
