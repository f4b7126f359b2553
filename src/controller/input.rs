//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::Focus;
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let mut model = self.model.lock().await;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
                model.set_should_quit(true);
            }
            return Ok(());
        }

        // Help popup blocks everything else
        if model.is_help_popup_open() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1)) {
                model.hide_help_popup();
            }
            return Ok(());
        }

        // Keys that work regardless of focus
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                model.toggle_focus();
                return Ok(());
            }
            KeyCode::F(1) => {
                model.toggle_help_popup();
                return Ok(());
            }
            KeyCode::PageDown => {
                drop(model);
                self.advance_page().await;
                return Ok(());
            }
            KeyCode::PageUp => {
                drop(model);
                self.retreat_page().await;
                return Ok(());
            }
            KeyCode::Home => {
                drop(model);
                self.reset_home().await;
                return Ok(());
            }
            _ => {}
        }

        match model.focus() {
            Focus::Search => match key.code {
                KeyCode::Char(c) => {
                    drop(model);
                    self.append_to_search(c).await;
                }
                KeyCode::Backspace => {
                    drop(model);
                    self.backspace_search().await;
                }
                KeyCode::Esc => {
                    drop(model);
                    self.set_search_text("").await;
                }
                KeyCode::Enter | KeyCode::Down => {
                    model.set_focus(Focus::Grid);
                }
                _ => {}
            },
            Focus::Grid => match key.code {
                KeyCode::Left => model.move_selection(-1, 0),
                KeyCode::Right => model.move_selection(1, 0),
                KeyCode::Up => model.move_selection(0, -1),
                KeyCode::Down => model.move_selection(0, 1),
                // Next page
                KeyCode::Char('n') | KeyCode::Char('N') => {
                    drop(model);
                    self.advance_page().await;
                }
                // Previous page
                KeyCode::Char('p') | KeyCode::Char('P') => {
                    drop(model);
                    self.retreat_page().await;
                }
                // Home
                KeyCode::Char('h') | KeyCode::Char('H') => {
                    drop(model);
                    self.reset_home().await;
                }
                KeyCode::Char('/') | KeyCode::Esc => {
                    model.set_focus(Focus::Search);
                }
                KeyCode::Char('?') => {
                    model.toggle_help_popup();
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    model.set_should_quit(true);
                }
                _ => {}
            },
        }
        Ok(())
    }
}
