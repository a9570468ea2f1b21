use crate::{
    core::{
        cmd::Cmd, msg::catalog::CatalogMsg, state::text_area::TextAreaState,
        textarea_engine::TextAreaEngine,
    },
    domain::sport::{self, Sport},
};

/// Home screen state: the live search query and the list cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    pub query: TextAreaState,
    pub search_focused: bool,
    /// Index into the filtered list
    cursor: usize,
}

impl CatalogState {
    pub fn query(&self) -> &str {
        self.query.content()
    }

    pub fn has_query(&self) -> bool {
        !self.query().is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Sports matching the current query, recomputed on every call
    pub fn filtered(&self) -> Vec<&'static Sport> {
        sport::filter(sport::catalog(), self.query())
    }

    pub fn highlighted(&self) -> Option<&'static Sport> {
        self.filtered().get(self.cursor).copied()
    }

    fn clamp_cursor(&mut self) {
        let len = self.filtered().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    fn set_query(&mut self, query: TextAreaState) {
        if query != self.query {
            self.query = query;
            self.clamp_cursor();
        }
    }

    /// Catalog-specific update function.
    /// Selection and profile activation are routed by the coordinator because they navigate.
    pub fn update(&mut self, msg: CatalogMsg, engine: &dyn TextAreaEngine) -> Vec<Cmd> {
        match msg {
            CatalogMsg::FocusSearch => {
                self.search_focused = true;
            }
            CatalogMsg::BlurSearch => {
                self.search_focused = false;
            }
            CatalogMsg::ProcessSearchInput(key) => {
                if self.search_focused {
                    let next = self.query.apply_single_line(engine, &[key]);
                    self.set_query(next);
                }
            }
            CatalogMsg::PasteSearch(text) => {
                if self.search_focused {
                    let next = self.query.paste_single_line(engine, &text);
                    self.set_query(next);
                }
            }
            CatalogMsg::SetQuery(query) => {
                self.set_query(TextAreaState::with_content(query));
            }
            CatalogMsg::ClearQuery => {
                self.set_query(TextAreaState::empty());
            }
            CatalogMsg::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            CatalogMsg::CursorDown => {
                if self.cursor + 1 < self.filtered().len() {
                    self.cursor += 1;
                }
            }
            CatalogMsg::SelectHighlighted | CatalogMsg::ProfileClicked => {}
        }
        vec![]
    }
}
