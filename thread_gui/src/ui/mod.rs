//! UI module for the Stitchwise GUI
//!
//! # Panel Structure
//! - `input_panel` - Hole count, spacing, thickness and finishing length fields
//!   plus the Calculate button
//! - `results_panel` - Total thread length once a calculation has run

pub mod input_panel;
pub mod results_panel;

use iced::font::{self, Font};
use iced::widget::{column, container, scrollable, text};
use iced::{Alignment, Element, Length};

use thread_core::FormState;

use crate::Message;

/// Render the whole form for the given snapshot
pub fn view_form(state: &FormState) -> Element<'_, Message> {
    let heading = text("Thread Length Calculator").size(18).font(Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    });

    let content = column![
        heading,
        input_panel::view_input_panel(state),
        results_panel::view_results_panel(state),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .max_width(480.0)
    .padding([40, 20]);

    container(scrollable(content))
        .center_x(Length::Fill)
        .into()
}
