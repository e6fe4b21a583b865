//! # Iron Spacing Catalog
//!
//! The fixed set of stitch spacings offered by common pricking irons, in
//! millimeters between adjacent holes.
//!
//! Labels keep the value exactly as listed (`2.0` stays `2.0`, `3.38` stays
//! `3.38`) followed by `" mm"`. They are formatted once, on first use.
//!
//! ## Example
//!
//! ```rust
//! use thread_core::spacing::IronSpacing;
//!
//! let iron = IronSpacing::default();
//! assert_eq!(iron.spacing_mm(), 4.0);
//! assert_eq!(iron.label(), "4.0 mm");
//!
//! let parsed: IronSpacing = "3.38 mm".parse().unwrap();
//! assert_eq!(parsed, IronSpacing::Mm3_38);
//! ```

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{ThreadError, ThreadResult};

/// Stitch spacing of a pricking iron.
///
/// Variants are declared in catalog order; [`IronSpacing::ALL`] relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IronSpacing {
    #[serde(rename = "2.0")]
    Mm2,
    #[serde(rename = "2.3")]
    Mm2_3,
    #[serde(rename = "2.45")]
    Mm2_45,
    #[serde(rename = "2.7")]
    Mm2_7,
    #[serde(rename = "3.0")]
    Mm3,
    #[serde(rename = "3.38")]
    Mm3_38,
    #[serde(rename = "3.85")]
    Mm3_85,
    /// 4.0 mm, the most common French-style iron
    #[default]
    #[serde(rename = "4.0")]
    Mm4,
    #[serde(rename = "4.3")]
    Mm4_3,
    #[serde(rename = "5.0")]
    Mm5,
    #[serde(rename = "5.2")]
    Mm5_2,
}

static LABELS: Lazy<[String; 11]> =
    Lazy::new(|| IronSpacing::ALL.map(|iron| format!("{:?} mm", iron.spacing_mm())));

impl IronSpacing {
    /// Every catalog spacing, smallest first (UI selection order)
    pub const ALL: [IronSpacing; 11] = [
        IronSpacing::Mm2,
        IronSpacing::Mm2_3,
        IronSpacing::Mm2_45,
        IronSpacing::Mm2_7,
        IronSpacing::Mm3,
        IronSpacing::Mm3_38,
        IronSpacing::Mm3_85,
        IronSpacing::Mm4,
        IronSpacing::Mm4_3,
        IronSpacing::Mm5,
        IronSpacing::Mm5_2,
    ];

    /// Distance between adjacent holes in millimeters
    pub fn spacing_mm(&self) -> f64 {
        match self {
            IronSpacing::Mm2 => 2.0,
            IronSpacing::Mm2_3 => 2.3,
            IronSpacing::Mm2_45 => 2.45,
            IronSpacing::Mm2_7 => 2.7,
            IronSpacing::Mm3 => 3.0,
            IronSpacing::Mm3_38 => 3.38,
            IronSpacing::Mm3_85 => 3.85,
            IronSpacing::Mm4 => 4.0,
            IronSpacing::Mm4_3 => 4.3,
            IronSpacing::Mm5 => 5.0,
            IronSpacing::Mm5_2 => 5.2,
        }
    }

    /// Display label, e.g. `"2.45 mm"`
    pub fn label(&self) -> &'static str {
        &LABELS[*self as usize]
    }

    /// Look up the catalog entry with exactly this spacing.
    pub fn from_mm(spacing_mm: f64) -> Option<IronSpacing> {
        Self::ALL
            .into_iter()
            .find(|iron| iron.spacing_mm() == spacing_mm)
    }
}

impl fmt::Display for IronSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IronSpacing {
    type Err = ThreadError;

    /// Accepts `"4"`, `"4.0"`, `"4,0"`, `"4.0 mm"` or `"4mm"`.
    fn from_str(s: &str) -> ThreadResult<Self> {
        let trimmed = s.trim();
        let number = trimmed
            .strip_suffix("mm")
            .or_else(|| trimmed.strip_suffix("MM"))
            .unwrap_or(trimmed)
            .trim()
            .replace(',', ".");

        number
            .parse::<f64>()
            .ok()
            .and_then(IronSpacing::from_mm)
            .ok_or_else(|| ThreadError::spacing_not_found(s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_size() {
        let values: Vec<f64> = IronSpacing::ALL.iter().map(|s| s.spacing_mm()).collect();
        assert_eq!(
            values,
            vec![2.0, 2.3, 2.45, 2.7, 3.0, 3.38, 3.85, 4.0, 4.3, 5.0, 5.2]
        );
    }

    #[test]
    fn test_labels_keep_value_as_given() {
        assert_eq!(IronSpacing::Mm2.label(), "2.0 mm");
        assert_eq!(IronSpacing::Mm2_45.label(), "2.45 mm");
        assert_eq!(IronSpacing::Mm3_38.label(), "3.38 mm");
        assert_eq!(IronSpacing::Mm5_2.label(), "5.2 mm");
        assert_eq!(IronSpacing::Mm4.to_string(), "4.0 mm");
    }

    #[test]
    fn test_label_index_matches_variant() {
        for iron in IronSpacing::ALL {
            assert_eq!(iron.label(), format!("{:?} mm", iron.spacing_mm()));
        }
    }

    #[test]
    fn test_default_is_four_mm() {
        assert_eq!(IronSpacing::default(), IronSpacing::Mm4);
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("4".parse::<IronSpacing>().unwrap(), IronSpacing::Mm4);
        assert_eq!("4.0 mm".parse::<IronSpacing>().unwrap(), IronSpacing::Mm4);
        assert_eq!(" 2,45mm ".parse::<IronSpacing>().unwrap(), IronSpacing::Mm2_45);
        assert_eq!("3.38".parse::<IronSpacing>().unwrap(), IronSpacing::Mm3_38);
    }

    #[test]
    fn test_parse_unknown_spacing() {
        let err = "7.5".parse::<IronSpacing>().unwrap_err();
        assert_eq!(err, ThreadError::spacing_not_found("7.5"));
        assert!("wide".parse::<IronSpacing>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&IronSpacing::Mm3_85).unwrap();
        assert_eq!(json, "\"3.85\"");
        let roundtrip: IronSpacing = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, IronSpacing::Mm3_85);
    }
}
