use serde::{Deserialize, Serialize};

use crate::{
    core::{
        cmd::Cmd, msg::form::FormMsg, state::text_area::TextAreaState,
        textarea_engine::TextAreaEngine,
    },
    domain::booking::{BookingDraft, BookingRecord},
};

/// The four text inputs of the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    Date,
    Time,
    Duration,
    Name,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Date,
        FormField::Time,
        FormField::Duration,
        FormField::Name,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Date => "Date (DD/MM/YYYY)",
            FormField::Time => "Time (HH:MM)",
            FormField::Duration => "Duration (hours)",
            FormField::Name => "Name",
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            FormField::Date => Some("e.g. 31/12/2023"),
            FormField::Time => Some("e.g. 14:30"),
            FormField::Duration | FormField::Name => None,
        }
    }
}

/// Focusable elements of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormFocus {
    Field(FormField),
    SubmitButton,
    BackButton,
}

impl Default for FormFocus {
    fn default() -> Self {
        FormFocus::Field(FormField::Date)
    }
}

impl FormFocus {
    const RING: [FormFocus; 6] = [
        FormFocus::Field(FormField::Date),
        FormFocus::Field(FormField::Time),
        FormFocus::Field(FormField::Duration),
        FormFocus::Field(FormField::Name),
        FormFocus::SubmitButton,
        FormFocus::BackButton,
    ];

    fn position(&self) -> usize {
        Self::RING
            .iter()
            .position(|focus| focus == self)
            .unwrap_or_default()
    }

    pub fn next(&self) -> Self {
        Self::RING[(self.position() + 1) % Self::RING.len()]
    }

    pub fn prev(&self) -> Self {
        Self::RING[(self.position() + Self::RING.len() - 1) % Self::RING.len()]
    }

    pub fn field(&self) -> Option<FormField> {
        match self {
            FormFocus::Field(field) => Some(*field),
            FormFocus::SubmitButton | FormFocus::BackButton => None,
        }
    }
}

/// Lifecycle of one form instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    /// The record was handed to the history; the confirmation is on screen
    Submitted(BookingRecord),
}

/// State of a booking form for one sport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingFormState {
    sport_type: String,
    date: TextAreaState,
    time: TextAreaState,
    duration: TextAreaState,
    name: TextAreaState,
    pub focus: FormFocus,
    phase: FormPhase,
}

impl BookingFormState {
    /// Fresh form for `sport_type`, taken verbatim
    pub fn new(sport_type: impl Into<String>) -> Self {
        Self {
            sport_type: sport_type.into(),
            date: TextAreaState::empty(),
            time: TextAreaState::empty(),
            duration: TextAreaState::with_content("1"),
            name: TextAreaState::empty(),
            focus: FormFocus::default(),
            phase: FormPhase::Editing,
        }
    }

    pub fn sport_type(&self) -> &str {
        &self.sport_type
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self.phase, FormPhase::Submitted(_))
    }

    pub fn field(&self, field: FormField) -> &TextAreaState {
        match field {
            FormField::Date => &self.date,
            FormField::Time => &self.time,
            FormField::Duration => &self.duration,
            FormField::Name => &self.name,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut TextAreaState {
        match field {
            FormField::Date => &mut self.date,
            FormField::Time => &mut self.time,
            FormField::Duration => &mut self.duration,
            FormField::Name => &mut self.name,
        }
    }

    pub fn focused_field(&self) -> Option<FormField> {
        self.focus.field()
    }

    pub fn draft(&self) -> BookingDraft<'_> {
        BookingDraft {
            date: self.date.content(),
            time: self.time.content(),
            duration: self.duration.content(),
            name: self.name.content(),
        }
    }

    /// All four fields are non-blank
    pub fn is_valid(&self) -> bool {
        self.draft().is_complete()
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.is_confirming() && self.is_valid()
    }

    /// Builds the record and enters the confirmation phase.
    /// Returns `None` when submission is not possible.
    pub fn submit(&mut self) -> Option<BookingRecord> {
        if !self.can_submit() {
            return None;
        }
        let record = self.draft().to_record(&self.sport_type);
        self.phase = FormPhase::Submitted(record.clone());
        Some(record)
    }

    /// Form-specific update function for focus and editing.
    /// Submission, activation and dismissal are routed by the coordinator.
    pub fn update(&mut self, msg: FormMsg, engine: &dyn TextAreaEngine) -> Vec<Cmd> {
        if self.is_confirming() {
            return vec![];
        }
        match msg {
            FormMsg::FocusNext => self.focus = self.focus.next(),
            FormMsg::FocusPrev => self.focus = self.focus.prev(),
            FormMsg::Focus(focus) => self.focus = focus,
            FormMsg::ProcessInput(key) => {
                if let Some(field) = self.focused_field() {
                    let next = self.field(field).apply_single_line(engine, &[key]);
                    *self.field_mut(field) = next;
                }
            }
            FormMsg::Paste(text) => {
                if let Some(field) = self.focused_field() {
                    let next = self.field(field).paste_single_line(engine, &text);
                    *self.field_mut(field) = next;
                }
            }
            FormMsg::SetField(field, content) => {
                *self.field_mut(field) = TextAreaState::with_content(content);
            }
            FormMsg::Activate | FormMsg::Submit | FormMsg::DismissConfirmation => {}
        }
        vec![]
    }
}
