// ABOUTME: Portfolio builder wizard - controller state and step rendering

pub mod component;
pub mod state;

pub use component::WizardComponent;
pub use state::{
    BlockFormDraft, OnboardingDraft, PreviewState, SocialDraft, TabsDraft, WizardOutcome,
    WizardState, WizardStep,
};
