use crate::core::{
    cmd::Cmd,
    msg::{catalog::CatalogMsg, form::FormMsg, navigation::NavMsg, system::SystemMsg, Msg},
    state::{form::FormFocus, AppState},
    textarea_engine::{NoopTextAreaEngine, TextAreaEngine},
};

/// Collaborators the update function needs but must not own
pub struct UpdateContext<'a> {
    pub text_area: &'a dyn TextAreaEngine,
}

impl Default for UpdateContext<'static> {
    fn default() -> Self {
        static NOOP: NoopTextAreaEngine = NoopTextAreaEngine;
        Self { text_area: &NOOP }
    }
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message.
/// Key-driven text edits are no-ops here; use [`update_with_context`] with a real engine.
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    update_with_context(msg, state, &UpdateContext::default())
}

pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Nav(nav_msg) => {
            let commands = navigate(&mut state, nav_msg);
            (state, commands)
        }

        Msg::Catalog(CatalogMsg::SelectHighlighted) => {
            // onSportSelected
            match state.catalog.highlighted() {
                Some(sport) => {
                    let commands =
                        navigate(&mut state, NavMsg::OpenBookingForm(sport.title.to_string()));
                    (state, commands)
                }
                None => (state, vec![]),
            }
        }

        Msg::Catalog(CatalogMsg::ProfileClicked) => {
            // onProfileClicked
            let commands = navigate(&mut state, NavMsg::OpenHistory);
            (state, commands)
        }

        Msg::Catalog(catalog_msg) => {
            if !state.nav.is_main() {
                return (state, vec![]);
            }
            let commands = state.catalog.update(catalog_msg, ctx.text_area);
            (state, commands)
        }

        Msg::Form(form_msg) => {
            let commands = update_form(&mut state, form_msg, ctx);
            (state, commands)
        }

        Msg::History(history_msg) => {
            let commands = state.history.update(history_msg);
            (state, commands)
        }
    }
}

/// Screen transitions, with the bookkeeping that goes with entering a screen.
/// Leaving Main clears the status line, so a booking notice lasts until the
/// next form or history visit.
fn navigate(state: &mut AppState, msg: NavMsg) -> Vec<Cmd> {
    let leaving_main = state.nav.is_main();
    let opening_history = matches!(msg, NavMsg::OpenHistory);
    let mut commands = state.nav.update(msg);
    if commands.is_empty() {
        return commands;
    }

    if opening_history {
        state.history.reset_scroll();
    }
    state.catalog.search_focused = false;
    if leaving_main {
        commands.extend(state.system.update(SystemMsg::ClearStatusMessage));
    }
    commands
}

fn update_form(state: &mut AppState, msg: FormMsg, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
    let Some(form) = state.nav.form_mut() else {
        return vec![];
    };

    match msg {
        FormMsg::Submit => submit_form(state),

        FormMsg::Activate => match form.focus {
            FormFocus::Field(_) => form.update(FormMsg::FocusNext, ctx.text_area),
            FormFocus::SubmitButton => submit_form(state),
            // onBack
            FormFocus::BackButton => navigate(state, NavMsg::Back),
        },

        FormMsg::DismissConfirmation => {
            if form.is_confirming() {
                navigate(state, NavMsg::Back)
            } else {
                vec![]
            }
        }

        other => form.update(other, ctx.text_area),
    }
}

/// onSubmit: the record is appended before the confirmation is shown
fn submit_form(state: &mut AppState) -> Vec<Cmd> {
    let Some(record) = state.nav.form_mut().and_then(|form| form.submit()) else {
        return vec![];
    };

    let status = format!("[Booked] {record}");
    let mut commands = state.history.append(record);
    commands.extend(state.system.update(SystemMsg::UpdateStatusMessage(status)));
    commands.push(Cmd::RequestRender);
    commands
}
