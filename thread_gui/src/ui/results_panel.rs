//! Results Panel
//!
//! Shows the total once Calculate has been pressed, with the along-seam,
//! through-leather and finishing terms underneath; empty before that.

use iced::widget::{column, text, Column};

use thread_core::calculations::{breakdown, ThreadLengthBreakdown};
use thread_core::FormState;

use crate::Message;

/// Render the calculation result, if any
pub fn view_results_panel(state: &FormState) -> Column<'_, Message> {
    let Some(total) = state.total_length() else {
        return Column::new();
    };

    let details = detail_lines(state)
        .into_iter()
        .flatten()
        .fold(Column::new().spacing(2), |col, line| {
            col.push(text(line).size(12).color([0.5, 0.5, 0.5]))
        });

    column![text(total_label(total)).size(16), details].spacing(8)
}

fn total_label(total_mm: u32) -> String {
    format!("Total Length: {} mm", total_mm)
}

/// Per-term lines for the current result.
///
/// `None` before a calculation, for an invalid form, or once the fields have
/// been edited so that they no longer produce the displayed total.
fn detail_lines(state: &FormState) -> Option<Vec<String>> {
    let total = state.total_length()?;
    let result = breakdown(&state.calculation_params())?;
    (result.total_length_mm == total).then(|| format_terms(&result))
}

fn format_terms(result: &ThreadLengthBreakdown) -> Vec<String> {
    vec![
        format!("Along seam: {} mm", result.horizontal_travel_mm),
        format!("Through leather: {} mm", result.thickness_travel_mm),
        format!("Finishing: {} mm", result.finishing_length_mm),
    ]
}
