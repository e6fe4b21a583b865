//! # Form State
//!
//! Immutable snapshot of the thread length form. Every edit produces a new
//! snapshot; the "calculate enabled" flag is recomputed from the hole count,
//! spacing and thickness on every edit that touches them, so it can never
//! disagree with the fields.
//!
//! Text fields hold exactly what the user typed until a calculation runs,
//! at which point they are replaced by their cleaned form.
//!
//! ## Example
//!
//! ```rust
//! use thread_core::decimal::DecimalFormatter;
//! use thread_core::form::FormState;
//!
//! let state = FormState::default()
//!     .with_hole_count_text("10")
//!     .with_thickness_text("2.0");
//! assert!(state.is_calculate_enabled());
//!
//! let done = state.calculated(&DecimalFormatter);
//! assert_eq!(done.total_length(), Some(312));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::thread_length::{self, CalculationParams, StitchLength};
use crate::decimal::DecimalFormatter;
use crate::spacing::IronSpacing;

/// Initial values for a fresh form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    /// Iron selected when the form opens
    pub spacing: IronSpacing,

    /// Finishing length text pre-filled in the form (mm)
    pub finishing_length_text: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            spacing: IronSpacing::Mm4,
            finishing_length_text: "200".to_string(),
        }
    }
}

/// Input fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    HoleCount,
    Spacing,
    Thickness,
    FinishingLength,
}

impl FormField {
    /// Fields that must be non-zero before Calculate is enabled
    pub const GATING: [FormField; 3] = [FormField::HoleCount, FormField::Spacing, FormField::Thickness];

    /// Field caption for display
    pub fn label(&self) -> &'static str {
        match self {
            FormField::HoleCount => "Hole Count",
            FormField::Spacing => "Spacing (mm)",
            FormField::Thickness => "Thickness (mm)",
            FormField::FinishingLength => "Finishing Length (mm)",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of the thread length form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormState {
    hole_count_text: String,
    spacing: IronSpacing,
    thickness_text: String,
    finishing_length_text: String,
    total_length: Option<u32>,
    is_calculate_enabled: bool,
}

impl FormState {
    /// Empty form seeded from `defaults`.
    pub fn new(defaults: &FormDefaults) -> Self {
        Self {
            hole_count_text: String::new(),
            spacing: defaults.spacing,
            thickness_text: String::new(),
            finishing_length_text: defaults.finishing_length_text.clone(),
            total_length: None,
            is_calculate_enabled: false,
        }
        .refresh_enabled()
    }

    /// Hole count exactly as typed (cleaned after a calculation)
    pub fn hole_count_text(&self) -> &str {
        &self.hole_count_text
    }

    /// Selected iron
    pub fn spacing(&self) -> IronSpacing {
        self.spacing
    }

    /// Leather thickness text (mm)
    pub fn thickness_text(&self) -> &str {
        &self.thickness_text
    }

    /// Finishing length text (mm)
    pub fn finishing_length_text(&self) -> &str {
        &self.finishing_length_text
    }

    /// Result of the last calculation in millimeters, if one ran
    pub fn total_length(&self) -> Option<u32> {
        self.total_length
    }

    /// Whether hole count, spacing and thickness all read as non-zero
    pub fn is_calculate_enabled(&self) -> bool {
        self.is_calculate_enabled
    }

    /// Replace the hole count text and re-check enablement.
    pub fn with_hole_count_text(self, text: impl Into<String>) -> Self {
        Self {
            hole_count_text: text.into(),
            ..self
        }
        .refresh_enabled()
    }

    /// Replace the thickness text and re-check enablement.
    pub fn with_thickness_text(self, text: impl Into<String>) -> Self {
        Self {
            thickness_text: text.into(),
            ..self
        }
        .refresh_enabled()
    }

    /// Select another iron and re-check enablement.
    pub fn with_spacing(self, spacing: IronSpacing) -> Self {
        Self { spacing, ..self }.refresh_enabled()
    }

    /// The finishing length has no validity requirement and never changes
    /// whether Calculate is enabled.
    pub fn with_finishing_length_text(self, text: impl Into<String>) -> Self {
        Self {
            finishing_length_text: text.into(),
            ..self
        }
    }

    /// Clean every numeric field, then compute the total from the cleaned values.
    ///
    /// Runs whether or not Calculate is enabled; invalid input yields `Some(0)`.
    pub fn calculated(self, formatter: &DecimalFormatter) -> Self {
        let cleaned = Self {
            hole_count_text: formatter.cleanup(&self.hole_count_text, true),
            thickness_text: formatter.cleanup(&self.thickness_text, false),
            finishing_length_text: formatter.cleanup(&self.finishing_length_text, true),
            ..self
        };

        let total = thread_length::calculate(&cleaned.calculation_params());
        debug!(total, spacing = %cleaned.spacing, "form calculated");

        Self {
            total_length: Some(total),
            ..cleaned
        }
        .refresh_enabled()
    }

    /// Parameters parsed from the current text, with parse failures read as zero.
    pub fn calculation_params(&self) -> CalculationParams {
        CalculationParams {
            length: StitchLength::ByHoleCount {
                count: parse_hole_count(&self.hole_count_text),
            },
            spacing_mm: self.spacing.spacing_mm(),
            thickness_mm: parse_decimal(&self.thickness_text),
            finishing_length_mm: self.finishing_length_text.parse().unwrap_or(0),
        }
    }

    /// Gating fields whose current text reads as zero.
    ///
    /// Calculate is enabled exactly when this is empty.
    pub fn blocking_fields(&self) -> Vec<FormField> {
        FormField::GATING
            .into_iter()
            .filter(|field| match field {
                FormField::HoleCount => parse_hole_count(&self.hole_count_text) == 0,
                FormField::Spacing => self.spacing.spacing_mm() == 0.0,
                FormField::Thickness => parse_decimal(&self.thickness_text) == 0.0,
                FormField::FinishingLength => false,
            })
            .collect()
    }

    fn refresh_enabled(self) -> Self {
        let is_calculate_enabled = self.blocking_fields().is_empty();
        if is_calculate_enabled != self.is_calculate_enabled {
            debug!(is_calculate_enabled, "calculate availability changed");
        }
        Self {
            is_calculate_enabled,
            ..self
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(&FormDefaults::default())
    }
}

/// Best-effort hole count, `0` when the text is not a whole number.
///
/// Raw text may still carry a sign, which cleanup later drops, so the
/// magnitude is what counts. Anything that will not fit a `u32` reads as
/// `0`, the same value the calculation sees after cleanup.
fn parse_hole_count(text: &str) -> u32 {
    text.parse::<i64>()
        .ok()
        .and_then(|value| u32::try_from(value.unsigned_abs()).ok())
        .unwrap_or(0)
}

/// Best-effort decimal number, `0.0` when the text is not one.
///
/// Surrounding whitespace is ignored.
fn parse_decimal(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}
