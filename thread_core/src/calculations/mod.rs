//! # Calculations
//!
//! Pure calculation functions. Each one follows the pattern:
//!
//! - `*Params` - Input parameters (JSON-serializable)
//! - `calculate(params)` - Pure calculation function
//!
//! Invalid parameters produce a zero result rather than an error, so the
//! form layer can coerce unparseable text without any error path.
//!
//! ## Available Calculations
//!
//! - [`thread_length`] - Thread needed for a saddle-stitched seam

pub mod thread_length;

// Re-export commonly used types
pub use thread_length::{breakdown, calculate, CalculationParams, StitchLength, ThreadLengthBreakdown};
