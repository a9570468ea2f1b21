use crate::core::{cmd::Cmd, msg::navigation::NavMsg, state::form::BookingFormState};

/// Navigable destinations. The booking form owns its in-progress state,
/// so leaving the screen discards it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Main,
    BookingForm(BookingFormState),
    History,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Main => "Main",
            Screen::BookingForm(_) => "BookingForm",
            Screen::History => "History",
        }
    }

    /// Sport type of the booking form on screen, if any
    pub fn sport_type(&self) -> Option<&str> {
        match self {
            Screen::BookingForm(form) => Some(form.sport_type()),
            Screen::Main | Screen::History => None,
        }
    }
}

/// Navigation controller state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub screen: Screen,
}

impl NavigationState {
    pub fn is_main(&self) -> bool {
        matches!(self.screen, Screen::Main)
    }

    pub fn is_history(&self) -> bool {
        matches!(self.screen, Screen::History)
    }

    pub fn form(&self) -> Option<&BookingFormState> {
        match &self.screen {
            Screen::BookingForm(form) => Some(form),
            Screen::Main | Screen::History => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut BookingFormState> {
        match &mut self.screen {
            Screen::BookingForm(form) => Some(form),
            Screen::Main | Screen::History => None,
        }
    }

    /// Applies a transition. Transitions that do not start from the right
    /// screen are ignored.
    pub fn update(&mut self, msg: NavMsg) -> Vec<Cmd> {
        let next = match (&self.screen, msg) {
            (Screen::Main, NavMsg::OpenBookingForm(sport_type)) => {
                Screen::BookingForm(BookingFormState::new(sport_type))
            }
            (Screen::Main, NavMsg::OpenHistory) => Screen::History,
            (Screen::BookingForm(_) | Screen::History, NavMsg::Back) => Screen::Main,
            (screen, msg) => {
                log::debug!("Ignoring {msg:?} on {} screen", screen.name());
                return vec![];
            }
        };

        log::debug!("Navigating {} -> {}", self.screen.name(), next.name());
        self.screen = next;
        vec![Cmd::RequestRender]
    }
}
