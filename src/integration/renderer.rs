use color_eyre::eyre::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{core::state::AppState, infrastructure::tui, presentation::components::Components};

/// Draws the component tree into whichever terminal the runner owns
#[derive(Debug, Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            components: Components::new(),
        }
    }

    pub async fn render(
        &mut self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut ratatui::Frame<'_>| self.components.render(f, state);
        guard.draw(&mut draw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::infrastructure::{config::Config, tui::test::TestTui};

    #[tokio::test]
    async fn renderer_draws_catalog_into_test_tui() -> Result<()> {
        let test_tui = Arc::new(Mutex::new(TestTui::new(60, 24)?));
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = test_tui.clone();
        let state = AppState::new_with_config(Config::embedded()?);

        let mut renderer = Renderer::new();
        renderer.render(&tui, &state).await?;
        renderer.render(&tui, &state).await?;

        let guard = test_tui.lock().await;
        assert_eq!(guard.draw_count(), 2);
        assert!(guard.screen_lines()[0].contains("Welcome, Guest"));
        Ok(())
    }
}
