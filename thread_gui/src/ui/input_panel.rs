//! Input Panel
//!
//! One labeled field per form input and the Calculate button, which is only
//! pressable while the form reports Calculate as enabled.

use iced::widget::{button, column, pick_list, text, text_input, Column};
use iced::{Element, Length};

use thread_core::{FormField, FormState, IronSpacing};

use crate::Message;

/// Render the form fields and Calculate button
pub fn view_input_panel(state: &FormState) -> Column<'_, Message> {
    let spacing = pick_list(
        IronSpacing::ALL.to_vec(),
        Some(state.spacing()),
        Message::SpacingSelected,
    )
    .width(Length::Fill)
    .padding(8);

    let calculate = button(text("Calculate").width(Length::Fill).center())
        .width(Length::Fill)
        .padding(10)
        .on_press_maybe(state.is_calculate_enabled().then_some(Message::CalculatePressed));

    column![
        labeled_input(FormField::HoleCount, state.hole_count_text(), Message::HoleCountChanged),
        labeled(FormField::Spacing, spacing.into()),
        labeled_input(FormField::Thickness, state.thickness_text(), Message::ThicknessChanged),
        labeled_input(
            FormField::FinishingLength,
            state.finishing_length_text(),
            Message::FinishingLengthChanged,
        ),
        calculate,
    ]
    .spacing(16)
    .width(Length::Fill)
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    field: FormField,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let input = text_input("", value)
        .on_input(on_change)
        .width(Length::Fill)
        .padding(8);

    labeled(field, input.into())
}

fn labeled(field: FormField, widget: Element<'_, Message>) -> Element<'_, Message> {
    column![text(field.label()).size(12), widget]
        .spacing(4)
        .width(Length::Fill)
        .into()
}
