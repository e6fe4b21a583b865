//! # Stitchwise GUI Application
//!
//! Single-window thread length calculator built with Iced.
//!
//! The window is a thin view over [`FormModel`]: every widget event is
//! forwarded to the model unchanged, and the view is rebuilt from the
//! model's current [`thread_core::FormState`].

mod ui;

use iced::{window, Element, Size, Task};
use tracing::info;
use tracing_subscriber::EnvFilter;

use thread_core::{FormDefaults, FormModel, IronSpacing};

/// Events raised by the form widgets
#[derive(Debug, Clone)]
pub enum Message {
    HoleCountChanged(String),
    SpacingSelected(IronSpacing),
    ThicknessChanged(String),
    FinishingLengthChanged(String),
    CalculatePressed,
}

/// Application state
pub struct App {
    model: FormModel,
}

impl App {
    fn new() -> Self {
        Self {
            model: FormModel::new(&FormDefaults::default()),
        }
    }

    fn title(&self) -> String {
        "Thread Length Calculator".to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::HoleCountChanged(text) => self.model.set_hole_count_text(text),
            Message::SpacingSelected(spacing) => self.model.set_spacing(spacing),
            Message::ThicknessChanged(text) => self.model.set_thickness_text(text),
            Message::FinishingLengthChanged(text) => self.model.set_finishing_length_text(text),
            Message::CalculatePressed => {
                self.model.request_calculate();
                if let Some(total) = self.model.state().total_length() {
                    info!(total_mm = total, "thread length calculated");
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        ui::view_form(self.model.state())
    }
}

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Stitchwise");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .window(window::Settings {
            size: Size::new(420.0, 600.0),
            min_size: Some(Size::new(320.0, 480.0)),
            ..Default::default()
        })
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_drive_model() {
        let mut app = App::new();
        let _ = app.update(Message::HoleCountChanged("10".to_string()));
        let _ = app.update(Message::ThicknessChanged("2.0".to_string()));
        assert!(app.model.state().is_calculate_enabled());

        let _ = app.update(Message::CalculatePressed);
        assert_eq!(app.model.state().total_length(), Some(312));
    }

    #[test]
    fn test_spacing_selection() {
        let mut app = App::new();
        let _ = app.update(Message::SpacingSelected(IronSpacing::Mm2_7));
        let _ = app.update(Message::FinishingLengthChanged("150".to_string()));
        assert_eq!(app.model.state().spacing(), IronSpacing::Mm2_7);
        assert_eq!(app.model.state().finishing_length_text(), "150");
    }
}
