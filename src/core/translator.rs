use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{
    msg::{
        catalog::CatalogMsg, form::FormMsg, history::HistoryMsg, navigation::NavMsg,
        system::SystemMsg, Msg,
    },
    raw_msg::RawMsg,
    state::{form::BookingFormState, navigation::Screen, AppState},
};
use crate::presentation::config::keybindings::Action;

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // User input - translate based on the screen on display
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => translate_paste(text, state),

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    match state.screen() {
        Screen::Main if state.catalog.search_focused => translate_search_keys(key),
        Screen::Main => translate_catalog_keys(key, state),
        Screen::BookingForm(form) if form.is_confirming() => translate_confirmation_keys(key),
        Screen::BookingForm(form) => translate_form_keys(key, form),
        Screen::History => translate_history_keys(key, state),
    }
}

/// Pasted text only lands in a focused text field
fn translate_paste(text: String, state: &AppState) -> Vec<Msg> {
    match state.screen() {
        Screen::Main if state.catalog.search_focused => {
            vec![Msg::Catalog(CatalogMsg::PasteSearch(text))]
        }
        Screen::BookingForm(form) if !form.is_confirming() && form.focused_field().is_some() => {
            vec![Msg::Form(FormMsg::Paste(text))]
        }
        _ => vec![],
    }
}

/// Key bindings while the search field has focus
fn translate_search_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
            vec![Msg::Catalog(CatalogMsg::BlurSearch)]
        }
        // Delegate all other input to the text-area engine
        _ => vec![Msg::Catalog(CatalogMsg::ProcessSearchInput(key))],
    }
}

fn translate_catalog_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match lookup_action(key, state) {
        Some(Action::Quit) => vec![Msg::System(SystemMsg::Quit)],
        Some(Action::Suspend) => vec![Msg::System(SystemMsg::Suspend)],
        Some(Action::Up) => vec![Msg::Catalog(CatalogMsg::CursorUp)],
        Some(Action::Down) => vec![Msg::Catalog(CatalogMsg::CursorDown)],
        Some(Action::Select) => vec![Msg::Catalog(CatalogMsg::SelectHighlighted)],
        Some(Action::Search) => vec![Msg::Catalog(CatalogMsg::FocusSearch)],
        Some(Action::OpenHistory) => vec![Msg::Catalog(CatalogMsg::ProfileClicked)],
        Some(Action::Back) if state.catalog.has_query() => {
            vec![Msg::Catalog(CatalogMsg::ClearQuery)]
        }
        Some(Action::Back) | None => vec![],
    }
}

/// The form is mostly text entry, so its keys are fixed rather than configurable
fn translate_form_keys(key: KeyEvent, form: &BookingFormState) -> Vec<Msg> {
    match key {
        KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => vec![Msg::Form(FormMsg::Submit)],

        KeyEvent {
            code: KeyCode::Esc, ..
        } => vec![Msg::Nav(NavMsg::Back)],

        KeyEvent {
            code: KeyCode::Tab | KeyCode::Down,
            ..
        } => vec![Msg::Form(FormMsg::FocusNext)],

        KeyEvent {
            code: KeyCode::BackTab | KeyCode::Up,
            ..
        } => vec![Msg::Form(FormMsg::FocusPrev)],

        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => vec![Msg::Form(FormMsg::Activate)],

        _ if form.focused_field().is_some() => vec![Msg::Form(FormMsg::ProcessInput(key))],

        _ => vec![],
    }
}

fn translate_confirmation_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => vec![Msg::Form(FormMsg::DismissConfirmation)],
        _ => vec![],
    }
}

fn translate_history_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match lookup_action(key, state) {
        Some(Action::Up) => vec![Msg::History(HistoryMsg::ScrollUp)],
        Some(Action::Down) => vec![Msg::History(HistoryMsg::ScrollDown)],
        Some(Action::Back) => vec![Msg::Nav(NavMsg::Back)],
        Some(Action::Quit) => vec![Msg::System(SystemMsg::Quit)],
        Some(Action::Suspend) => vec![Msg::System(SystemMsg::Suspend)],
        Some(Action::Select | Action::Search | Action::OpenHistory) | None => vec![],
    }
}

/// Looks up the action bound to a single key (flat mapping)
fn lookup_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    state.config.config.keybindings.get(&vec![key]).copied()
}
