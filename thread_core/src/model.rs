//! # Form Model
//!
//! The single writer of the form state. Front ends forward raw input to the
//! four update operations and the Calculate action; views either read
//! [`FormModel::state`] or subscribe to be pushed every new snapshot.
//!
//! ## Example
//!
//! ```rust
//! use thread_core::model::FormModel;
//! use thread_core::spacing::IronSpacing;
//!
//! let mut model = FormModel::default();
//! model.set_hole_count_text("1");
//! model.set_spacing(IronSpacing::Mm3_38);
//! model.set_thickness_text("1.5");
//! model.set_finishing_length_text("0");
//! assert!(model.state().is_calculate_enabled());
//!
//! model.request_calculate();
//! assert_eq!(model.state().total_length(), Some(3));
//! ```

use tracing::debug;

use crate::decimal::DecimalFormatter;
use crate::form::{FormDefaults, FormState};
use crate::spacing::IronSpacing;
use crate::state_cell::{StateCell, SubscriptionId};

/// Owns the observable form state.
#[derive(Debug)]
pub struct FormModel {
    state: StateCell<FormState>,
    formatter: DecimalFormatter,
}

impl FormModel {
    /// Fresh form seeded from `defaults`.
    pub fn new(defaults: &FormDefaults) -> Self {
        Self {
            state: StateCell::new(FormState::new(defaults)),
            formatter: DecimalFormatter,
        }
    }

    /// Current snapshot
    pub fn state(&self) -> &FormState {
        self.state.get()
    }

    /// Receive the current snapshot now and every replacement after it.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&FormState) + 'static) -> SubscriptionId {
        self.state.subscribe(subscriber)
    }

    /// Stop pushing snapshots to `id`. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    /// Forward an edit of the hole count field.
    pub fn set_hole_count_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        debug!(text = %text, "hole count edited");
        self.state.update(|s| s.clone().with_hole_count_text(text));
    }

    /// Forward an edit of the thickness field.
    pub fn set_thickness_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        debug!(text = %text, "thickness edited");
        self.state.update(|s| s.clone().with_thickness_text(text));
    }

    /// Forward a spacing selection.
    pub fn set_spacing(&mut self, spacing: IronSpacing) {
        debug!(%spacing, "spacing selected");
        self.state.update(|s| s.clone().with_spacing(spacing));
    }

    /// Forward an edit of the finishing length field; never changes enablement.
    pub fn set_finishing_length_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        debug!(text = %text, "finishing length edited");
        self.state.update(|s| s.clone().with_finishing_length_text(text));
    }

    /// Clean the inputs and store the computed total in the state.
    pub fn request_calculate(&mut self) {
        let formatter = self.formatter;
        self.state.update(|s| s.clone().calculated(&formatter));
    }
}

impl Default for FormModel {
    fn default() -> Self {
        Self::new(&FormDefaults::default())
    }
}
