// ABOUTME: UI components for the TUI including landing, wizard, preview, and profile listing

pub mod landing;
pub mod layout;
pub mod preview;
pub mod profile_list;
pub mod wizard;

pub use landing::LandingComponent;
pub use layout::LayoutComponent;
pub use profile_list::ProfileListComponent;
pub use wizard::WizardComponent;
