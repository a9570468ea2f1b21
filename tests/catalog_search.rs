use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use rstest::rstest;

use booksport::{
    core::{
        msg::{catalog::CatalogMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
        update::update,
    },
    domain::sport::{catalog, filter},
    infrastructure::config::Config,
    integration::runtime::Runtime,
};

fn titles_for(query: &str) -> Vec<&'static str> {
    filter(catalog(), query).into_iter().map(|s| s.title).collect()
}

#[rstest]
#[case("", vec!["Badminton", "Futsal", "Basket"])]
#[case("fut", vec!["Futsal"])]
#[case("FUTSAL", vec!["Futsal"])]
#[case("ba", vec!["Badminton", "Basket"])]
#[case("lapangan", vec!["Badminton", "Futsal", "Basket"])]
#[case("Lapangan Bas", vec!["Basket"])]
#[case("tennis", vec![])]
fn test_filter_matches_title_or_subtitle(#[case] query: &str, #[case] expected: Vec<&str>) {
    assert_eq!(titles_for(query), expected);
}

#[test]
fn test_filter_is_exactly_the_case_insensitive_matches() {
    for query in ["a", "N", "sal", "gan b", "x"] {
        let needle = query.to_lowercase();
        let expected: Vec<_> = catalog()
            .iter()
            .filter(|s| {
                s.title.to_lowercase().contains(&needle)
                    || s.subtitle.to_lowercase().contains(&needle)
            })
            .map(|s| s.title)
            .collect();
        assert_eq!(titles_for(query), expected, "query {query:?}");
    }
}

#[test]
fn test_query_change_clamps_cursor() {
    let state = AppState::default();
    let (state, _) = update(Msg::Catalog(CatalogMsg::CursorDown), state);
    let (state, _) = update(Msg::Catalog(CatalogMsg::CursorDown), state);
    assert_eq!(state.catalog.cursor(), 2);

    let (state, _) = update(Msg::Catalog(CatalogMsg::SetQuery("fut".into())), state);
    assert_eq!(state.catalog.cursor(), 0);
    assert_eq!(state.catalog.highlighted().map(|s| s.title), Some("Futsal"));
}

#[test]
fn test_select_with_no_match_stays_on_catalog() {
    let (state, _) = update(
        Msg::Catalog(CatalogMsg::SetQuery("tennis".into())),
        AppState::default(),
    );
    let (state, cmds) = update(Msg::Catalog(CatalogMsg::SelectHighlighted), state);
    assert!(state.nav.is_main());
    assert!(cmds.is_empty());
}

#[test]
fn test_typed_search_then_select() {
    let mut runtime = Runtime::new(AppState::new_with_config(
        Config::embedded().unwrap_or_default(),
    ));
    let key = |code| RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE));

    runtime.send_raw_msg(key(KeyCode::Char('/')));
    for c in "bask".chars() {
        runtime.send_raw_msg(key(KeyCode::Char(c)));
    }
    // Leave the search field, then book the highlighted entry
    runtime.send_raw_msg(key(KeyCode::Enter));
    runtime.send_raw_msg(key(KeyCode::Enter));
    runtime.process_all_messages();

    assert_eq!(runtime.state().screen().sport_type(), Some("Basket"));
}

#[test]
fn test_query_survives_round_trip_to_form() {
    let mut runtime = Runtime::new(AppState::new_with_config(
        Config::embedded().unwrap_or_default(),
    ));
    let key = |code| RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE));

    runtime.send_raw_msg(key(KeyCode::Char('/')));
    runtime.send_raw_msg(key(KeyCode::Char('b')));
    runtime.send_raw_msg(key(KeyCode::Esc));
    runtime.send_raw_msg(key(KeyCode::Down));
    runtime.send_raw_msg(key(KeyCode::Enter));
    runtime.send_raw_msg(key(KeyCode::Esc));
    runtime.process_all_messages();

    assert!(runtime.state().nav.is_main());
    assert_eq!(runtime.state().catalog.query(), "b");
    assert_eq!(runtime.state().catalog.cursor(), 1);

    // Back on the catalog with a query clears it
    runtime.send_raw_msg(key(KeyCode::Esc));
    runtime.process_all_messages();
    assert_eq!(runtime.state().catalog.query(), "");
}
