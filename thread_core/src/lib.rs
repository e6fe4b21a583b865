//! # thread_core - Thread Length Calculation Engine
//!
//! `thread_core` is the computational heart of Stitchwise. Given a hole
//! count, a pricking iron spacing, leather thickness and a finishing
//! allowance, it works out how much thread a saddle-stitched seam needs.
//!
//! ## Design Philosophy
//!
//! - **Pure calculation**: the calculator is a plain function of its parameters
//! - **Silent coercion**: text that does not parse reads as zero, which
//!   disables Calculate instead of raising an error
//! - **Immutable snapshots**: every form edit produces a new [`FormState`]
//! - **JSON-First**: parameters, results and form snapshots serialize with serde
//!
//! ## Quick Start
//!
//! ```rust
//! use thread_core::FormModel;
//!
//! let mut model = FormModel::default();
//! model.set_hole_count_text("10");
//! model.set_thickness_text("2.0");
//! model.request_calculate();
//!
//! assert_eq!(model.state().total_length(), Some(312));
//! ```
//!
//! ## Modules
//!
//! - [`spacing`] - Catalog of pricking iron spacings
//! - [`decimal`] - Cleanup of raw numeric text
//! - [`calculations`] - Thread length calculation
//! - [`form`] - Immutable form snapshot and enablement rule
//! - [`model`] - Form model that owns the observable state
//! - [`state_cell`] - Latest-value cell with subscribers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod decimal;
pub mod errors;
pub mod form;
pub mod model;
pub mod spacing;
pub mod state_cell;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationParams, StitchLength, ThreadLengthBreakdown};
pub use errors::{ThreadError, ThreadResult};
pub use form::{FormDefaults, FormField, FormState};
pub use model::FormModel;
pub use spacing::IronSpacing;
