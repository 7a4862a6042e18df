// ABOUTME: Application state, view switching, and the async profile query boundary

use crate::components::wizard::WizardState;
use crate::config::AppConfig;
use crate::models::ProfileRecord;
use crate::profiles::ProfileStoreClient;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Top-level screens of the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Marketing landing screen
    Landing,
    /// Portfolio builder wizard (includes the preview step)
    Wizard,
    /// Hosted profile listing
    Profiles,
}

/// Observable states of the profile listing query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfilesQuery {
    /// Query in flight; render a loading indicator
    Pending,
    /// Query resolved to a sequence of records
    Loaded(Vec<ProfileRecord>),
    /// Query failed; message shown with a retry affordance
    Failed(String),
}

/// Single-line text input with cursor support, char-boundary aware
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    value: String,
    /// Cursor position in characters (not bytes)
    cursor: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_value(value: &str) -> Self {
        Self {
            cursor: value.chars().count(),
            value: value.to_string(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(idx, _)| idx)
    }

    pub fn insert_char(&mut self, ch: char) {
        let idx = self.byte_index(self.cursor);
        self.value.insert(idx, ch);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.value.remove(idx);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let idx = self.byte_index(self.cursor);
            self.value.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Value with a visible cursor bar inserted, for rendering
    pub fn display_with_cursor(&self) -> String {
        let idx = self.byte_index(self.cursor);
        let (before, after) = self.value.split_at(idx);
        format!("{before}\u{2502}{after}")
    }
}

/// Shared application state rendered by the layout
pub struct AppState {
    pub current_view: View,
    pub should_quit: bool,
    pub landing_scroll: u16,
    pub wizard: WizardState,
    pub profiles: ProfilesQuery,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            current_view: View::Landing,
            should_quit: false,
            landing_scroll: 0,
            wizard: WizardState::new(),
            profiles: ProfilesQuery::Pending,
            config,
        }
    }

    /// Begin a fresh wizard session, discarding any previous portfolio
    pub fn start_wizard(&mut self) {
        info!("starting portfolio wizard session");
        self.wizard = WizardState::new();
        self.current_view = View::Wizard;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

type ProfilesResult = Result<Vec<ProfileRecord>, String>;

/// Application root owning the state and the async fetch channel
pub struct App {
    pub state: AppState,
    profiles_rx: Option<mpsc::UnboundedReceiver<ProfilesResult>>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(config),
            profiles_rx: None,
        }
    }

    /// Kick off the listing query on a background task. The TUI loop picks
    /// up the result via `poll_profiles` on its tick.
    pub fn start_profiles_fetch(&mut self) {
        self.state.profiles = ProfilesQuery::Pending;

        let client = match ProfileStoreClient::new(&self.state.config) {
            Ok(client) => client,
            Err(e) => {
                error!("failed to build profile store client: {e:#}");
                self.state.profiles = ProfilesQuery::Failed(format!("{e:#}"));
                return;
            }
        };

        let (tx, rx) = mpsc::unbounded_channel();
        self.profiles_rx = Some(rx);

        tokio::spawn(async move {
            let result = client.list_profiles().await.map_err(|e| format!("{e:#}"));
            let _ = tx.send(result);
        });
    }

    /// Drain the fetch channel; called once per TUI tick
    pub fn poll_profiles(&mut self) {
        let Some(rx) = self.profiles_rx.as_mut() else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(profiles)) => {
                info!(count = profiles.len(), "profile listing resolved");
                self.state.profiles = ProfilesQuery::Loaded(profiles);
                self.profiles_rx = None;
            }
            Ok(Err(message)) => {
                error!("profile listing failed: {message}");
                self.state.profiles = ProfilesQuery::Failed(message);
                self.profiles_rx = None;
            }
            Err(mpsc::error::TryRecvError::Empty) => {}
            Err(mpsc::error::TryRecvError::Disconnected) => {
                self.profiles_rx = None;
            }
        }
    }
}
