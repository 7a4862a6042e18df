// ABOUTME: Event handling system for keyboard input and view routing

use crate::app::state::{App, View};
use crate::components::wizard::WizardOutcome;
use crossterm::event::{KeyCode, KeyEvent};
use tracing::info;

/// Routes key events to the active view
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key(&self, app: &mut App, key: KeyEvent) {
        match app.state.current_view {
            View::Landing => self.handle_landing_key(app, key),
            View::Wizard => self.handle_wizard_key(app, key),
            View::Profiles => self.handle_profiles_key(app, key),
        }
    }

    fn handle_landing_key(&self, app: &mut App, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("quit requested");
                app.state.should_quit = true;
            }
            KeyCode::Char('w') | KeyCode::Enter => app.state.start_wizard(),
            KeyCode::Char('l') => {
                info!("opening profile listing");
                app.state.current_view = View::Profiles;
                app.start_profiles_fetch();
            }
            KeyCode::Down => {
                app.state.landing_scroll = app.state.landing_scroll.saturating_add(1);
            }
            KeyCode::Up => {
                app.state.landing_scroll = app.state.landing_scroll.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn handle_wizard_key(&self, app: &mut App, key: KeyEvent) {
        if app.state.wizard.handle_key(key) == WizardOutcome::Exit {
            info!("wizard exited to landing");
            app.state.current_view = View::Landing;
        }
    }

    fn handle_profiles_key(&self, app: &mut App, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                app.state.current_view = View::Landing;
            }
            KeyCode::Char('r') => app.start_profiles_fetch(),
            _ => {}
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
