// ABOUTME: Top-level layout dispatching the active view to its component

use ratatui::prelude::*;

use super::{LandingComponent, ProfileListComponent, WizardComponent};
use crate::app::{state::View, AppState};

pub struct LayoutComponent {
    landing: LandingComponent,
    wizard: WizardComponent,
    profile_list: ProfileListComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            landing: LandingComponent::new(),
            wizard: WizardComponent::new(),
            profile_list: ProfileListComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &mut AppState) {
        let area = frame.size();
        match state.current_view {
            View::Landing => self.landing.render(frame, area, state.landing_scroll),
            View::Wizard => self.wizard.render(frame, area, &state.wizard),
            View::Profiles => self.profile_list.render(frame, area, &state.profiles),
        }
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
