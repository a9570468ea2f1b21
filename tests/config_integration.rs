use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use booksport::{
    core::{
        msg::{catalog::CatalogMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
    },
    infrastructure::config::Config,
    presentation::config::keybindings::{parse_key_sequence, Action},
};

fn press(c: char) -> RawMsg {
    RawMsg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

#[test]
fn test_rebound_keys_drive_translation() -> color_eyre::Result<()> {
    let mut config = Config::embedded()?;
    let x = parse_key_sequence("<x>").map_err(|e| color_eyre::eyre::eyre!(e))?;
    let q = parse_key_sequence("<q>").map_err(|e| color_eyre::eyre::eyre!(e))?;
    config.keybindings.insert(x, Action::Quit);
    config.keybindings.insert(q, Action::OpenHistory);
    let state = AppState::new_with_config(config);

    assert_eq!(
        translate_raw_to_domain(press('x'), &state),
        vec![Msg::System(SystemMsg::Quit)]
    );
    assert_eq!(
        translate_raw_to_domain(press('q'), &state),
        vec![Msg::Catalog(CatalogMsg::ProfileClicked)]
    );
    Ok(())
}

#[test]
fn test_unbound_key_is_ignored_on_catalog() {
    let state = AppState::new_with_config(Config::embedded().unwrap_or_default());
    assert!(translate_raw_to_domain(press('z'), &state).is_empty());
}

#[test]
fn test_default_config_greets_guest() {
    let state = AppState::new_with_config(Config::default());
    assert_eq!(state.config.config.profile_name, "Guest");
    // Without bindings only the global keys work
    let ctrl_c = RawMsg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(
        translate_raw_to_domain(ctrl_c, &state),
        vec![Msg::System(SystemMsg::Quit)]
    );
    assert!(translate_raw_to_domain(press('p'), &state).is_empty());
}
