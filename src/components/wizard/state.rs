// ABOUTME: Wizard controller state - step cursor, portfolio data, and per-step drafts

use crate::app::state::InputField;
use crate::models::{
    BasicInfoUpdate, BlockType, ContentBlock, GalleryImage, MoveDirection, PortfolioData,
    SocialLink, Tab,
};
use tracing::{debug, info};

/// Steps of the portfolio wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Onboarding,
    Social,
    Tabs,
    Blocks,
    BlockForm,
    Preview,
}

impl WizardStep {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Onboarding => "Basics",
            Self::Social => "Social",
            Self::Tabs => "Tabs",
            Self::Blocks => "Content",
            Self::BlockForm => "Content",
            Self::Preview => "Preview",
        }
    }

    /// Progress position for the header dots (content picking and the block
    /// form share one slot)
    pub fn number(&self) -> usize {
        match self {
            Self::Onboarding => 1,
            Self::Social => 2,
            Self::Tabs => 3,
            Self::Blocks | Self::BlockForm => 4,
            Self::Preview => 5,
        }
    }

}

/// Outcome of a key press handled by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardOutcome {
    /// Stay inside the wizard
    Continue,
    /// Leave the wizard (Esc from the first step)
    Exit,
}

/// Onboarding draft: four basic-info fields, pushed upward on every keystroke
#[derive(Debug, Clone)]
pub struct OnboardingDraft {
    pub full_name: InputField,
    pub professional_title: InputField,
    pub bio: InputField,
    pub profile_image: InputField,
    pub focus: usize,
}

pub const ONBOARDING_FIELD_COUNT: usize = 4;

impl OnboardingDraft {
    fn seeded_from(data: &PortfolioData) -> Self {
        Self {
            full_name: InputField::from_value(&data.full_name),
            professional_title: InputField::from_value(&data.professional_title),
            bio: InputField::from_value(&data.bio),
            profile_image: InputField::from_value(&data.profile_image),
            focus: 0,
        }
    }

    pub fn focused_field_mut(&mut self) -> &mut InputField {
        match self.focus {
            0 => &mut self.full_name,
            1 => &mut self.professional_title,
            2 => &mut self.bio,
            _ => &mut self.profile_image,
        }
    }

    /// Continue gate: name and title non-empty after trim. The stored
    /// values themselves are not trimmed.
    pub fn can_continue(&self) -> bool {
        !self.full_name.is_blank() && !self.professional_title.is_blank()
    }

    fn as_update(&self) -> BasicInfoUpdate {
        BasicInfoUpdate {
            full_name: Some(self.full_name.value().to_string()),
            professional_title: Some(self.professional_title.value().to_string()),
            bio: Some(self.bio.value().to_string()),
            profile_image: Some(self.profile_image.value().to_string()),
        }
    }
}

/// One editable social row
#[derive(Debug, Clone, Default)]
pub struct SocialRow {
    pub platform: InputField,
    pub url: InputField,
}

/// Social draft: editable rows mirrored into the model on every change
#[derive(Debug, Clone)]
pub struct SocialDraft {
    pub rows: Vec<SocialRow>,
    pub row: usize,
    /// 0 = platform column, 1 = url column
    pub column: usize,
}

impl SocialDraft {
    fn seeded_from(links: &[SocialLink]) -> Self {
        let rows = if links.is_empty() {
            vec![SocialRow::default()]
        } else {
            links
                .iter()
                .map(|link| SocialRow {
                    platform: InputField::from_value(&link.platform),
                    url: InputField::from_value(&link.url),
                })
                .collect()
        };
        Self {
            rows,
            row: 0,
            column: 0,
        }
    }

    fn links(&self) -> Vec<SocialLink> {
        self.rows
            .iter()
            .map(|row| SocialLink {
                platform: row.platform.value().to_string(),
                url: row.url.value().to_string(),
            })
            .collect()
    }

    pub fn focused_field_mut(&mut self) -> &mut InputField {
        let row = &mut self.rows[self.row];
        if self.column == 0 {
            &mut row.platform
        } else {
            &mut row.url
        }
    }
}

/// Tabs step view state: selection plus an optional inline rename
#[derive(Debug, Clone, Default)]
pub struct TabsDraft {
    pub selected: usize,
    pub editing: Option<TabRename>,
}

#[derive(Debug, Clone)]
pub struct TabRename {
    pub tab_id: String,
    pub name: InputField,
}

/// One editable gallery image row
#[derive(Debug, Clone, Default)]
pub struct GalleryRow {
    pub url: InputField,
    pub alt: InputField,
}

/// Type-specific block form draft with validation-gated save
#[derive(Debug, Clone)]
pub enum BlockFormDraft {
    Gallery {
        rows: Vec<GalleryRow>,
        row: usize,
        /// 0 = url column, 1 = alt column
        column: usize,
    },
    Video {
        url: InputField,
        title: InputField,
        focus: usize,
    },
    Experience {
        title: InputField,
        company: InputField,
        period: InputField,
        description: InputField,
        image: InputField,
        focus: usize,
    },
}

pub const VIDEO_FIELD_COUNT: usize = 2;
pub const EXPERIENCE_FIELD_COUNT: usize = 5;

impl BlockFormDraft {
    pub fn new(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Gallery => Self::Gallery {
                rows: vec![GalleryRow::default()],
                row: 0,
                column: 0,
            },
            BlockType::Video => Self::Video {
                url: InputField::new(),
                title: InputField::new(),
                focus: 0,
            },
            BlockType::Experience => Self::Experience {
                title: InputField::new(),
                company: InputField::new(),
                period: InputField::new(),
                description: InputField::new(),
                image: InputField::new(),
                focus: 0,
            },
        }
    }

    /// Save gate per block type
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Gallery { rows, .. } => rows.iter().any(|row| !row.url.is_blank()),
            Self::Video { url, .. } => !url.is_blank(),
            Self::Experience { title, company, .. } => !title.is_blank() && !company.is_blank(),
        }
    }

    /// Build the content block this draft describes, applying the trim and
    /// empty-field policies. Returns None when the save gate is not met.
    pub fn build_block(&self) -> Option<ContentBlock> {
        if !self.is_valid() {
            return None;
        }
        match self {
            Self::Gallery { rows, .. } => {
                let images: Vec<GalleryImage> = rows
                    .iter()
                    .filter(|row| !row.url.is_blank())
                    .map(|row| GalleryImage {
                        url: row.url.value().trim().to_string(),
                        alt: row.alt.value().trim().to_string(),
                    })
                    .collect();
                Some(ContentBlock::Gallery { images })
            }
            Self::Video { url, title, .. } => Some(ContentBlock::Video {
                url: url.value().trim().to_string(),
                title: non_blank(title),
            }),
            Self::Experience {
                title,
                company,
                period,
                description,
                image,
                ..
            } => Some(ContentBlock::Experience {
                title: title.value().trim().to_string(),
                company: company.value().trim().to_string(),
                period: period.value().trim().to_string(),
                description: description.value().trim().to_string(),
                image: non_blank(image),
            }),
        }
    }

    pub fn focused_field_mut(&mut self) -> &mut InputField {
        match self {
            Self::Gallery { rows, row, column } => {
                let entry = &mut rows[*row];
                if *column == 0 {
                    &mut entry.url
                } else {
                    &mut entry.alt
                }
            }
            Self::Video { url, title, focus } => {
                if *focus == 0 {
                    url
                } else {
                    title
                }
            }
            Self::Experience {
                title,
                company,
                period,
                description,
                image,
                focus,
            } => match focus {
                0 => title,
                1 => company,
                2 => period,
                3 => description,
                _ => image,
            },
        }
    }
}

fn non_blank(field: &InputField) -> Option<String> {
    let trimmed = field.value().trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Preview projection state: a locally-selected tab, independent of the
/// wizard cursor
#[derive(Debug, Clone, Default)]
pub struct PreviewState {
    pub selected_tab_id: Option<String>,
}

impl PreviewState {
    /// Resolve the current tab: the local selection if it still exists,
    /// else the first tab.
    pub fn resolve_tab<'a>(&self, data: &'a PortfolioData) -> Option<&'a Tab> {
        self.selected_tab_id
            .as_deref()
            .and_then(|id| data.tab_by_id(id))
            .or_else(|| data.tabs.first())
    }

    pub fn select_neighbor(&mut self, data: &PortfolioData, forward: bool) {
        if data.tabs.is_empty() {
            return;
        }
        let current = self
            .resolve_tab(data)
            .map(|tab| tab.id.clone())
            .unwrap_or_default();
        let idx = data
            .tabs
            .iter()
            .position(|tab| tab.id == current)
            .unwrap_or(0);
        let next = if forward {
            (idx + 1) % data.tabs.len()
        } else {
            (idx + data.tabs.len() - 1) % data.tabs.len()
        };
        self.selected_tab_id = Some(data.tabs[next].id.clone());
    }
}

/// The wizard controller: owns the portfolio value and the step cursor.
/// Child views receive only their slice and report changes through the
/// operations below.
pub struct WizardState {
    pub step: WizardStep,
    pub selected_block_type: Option<BlockType>,
    pub current_tab_id: Option<String>,
    pub data: PortfolioData,
    pub onboarding: OnboardingDraft,
    pub social: SocialDraft,
    pub tabs_view: TabsDraft,
    pub picker_index: usize,
    pub block_form: Option<BlockFormDraft>,
    pub preview: PreviewState,
    /// Transient status line (publish confirmation, rejected actions)
    pub status: Option<String>,
}

impl WizardState {
    pub fn new() -> Self {
        let data = PortfolioData::new();
        let onboarding = OnboardingDraft::seeded_from(&data);
        let social = SocialDraft::seeded_from(&data.social_links);
        Self {
            step: WizardStep::Onboarding,
            selected_block_type: None,
            current_tab_id: None,
            data,
            onboarding,
            social,
            tabs_view: TabsDraft::default(),
            picker_index: 0,
            block_form: None,
            preview: PreviewState::default(),
            status: None,
        }
    }

    // --- controller operations ---

    /// Shallow-merge basic info into the portfolio
    pub fn update_basic_info(&mut self, update: BasicInfoUpdate) {
        self.data.merge_basic_info(update);
    }

    /// Replace the tab sequence wholesale
    pub fn update_tabs(&mut self, tabs: Vec<Tab>) {
        self.data.tabs = tabs;
    }

    /// Append a block to the tab with the given id, then return to the tabs
    /// step and clear the block cursors. An unknown id drops the block but
    /// follows the same transition.
    pub fn add_block_to_tab(&mut self, tab_id: &str, block: ContentBlock) -> bool {
        let added = self.data.add_block_to_tab(tab_id, block);
        self.step = WizardStep::Tabs;
        self.selected_block_type = None;
        self.current_tab_id = None;
        self.block_form = None;
        added
    }

    /// Pick a block type in the picker and open its form
    pub fn select_block_type(&mut self, block_type: BlockType) {
        debug!(?block_type, "block type selected");
        self.selected_block_type = Some(block_type);
        self.block_form = Some(BlockFormDraft::new(block_type));
        self.step = WizardStep::BlockForm;
    }

    /// Route an "Add Content" request for a tab to the block picker
    pub fn request_add_content(&mut self, tab_id: String) {
        self.current_tab_id = Some(tab_id);
        self.picker_index = 0;
        self.step = WizardStep::Blocks;
    }

    /// Block-form render guard: both cursors must be set
    pub fn block_form_context(&self) -> Option<(BlockType, &str)> {
        match (self.selected_block_type, self.current_tab_id.as_deref()) {
            (Some(block_type), Some(tab_id)) => Some((block_type, tab_id)),
            _ => None,
        }
    }

    // --- step transitions ---

    /// Onboarding -> Social, gated on the required fields
    pub fn continue_from_onboarding(&mut self) -> bool {
        if !self.onboarding.can_continue() {
            return false;
        }
        self.social = SocialDraft::seeded_from(&self.data.social_links);
        self.step = WizardStep::Social;
        true
    }

    /// Social -> Tabs; blank rows are filtered out of the model here
    pub fn continue_from_social(&mut self) {
        self.data.filter_blank_social_links();
        self.tabs_view = TabsDraft::default();
        self.step = WizardStep::Tabs;
    }

    pub fn back_to_onboarding(&mut self) {
        self.onboarding = OnboardingDraft::seeded_from(&self.data);
        self.step = WizardStep::Onboarding;
    }

    pub fn back_to_social(&mut self) {
        self.social = SocialDraft::seeded_from(&self.data.social_links);
        self.step = WizardStep::Social;
    }

    /// Tabs -> Preview; the preview defaults to the first tab
    pub fn finish_to_preview(&mut self) {
        self.preview = PreviewState {
            selected_tab_id: self.data.tabs.first().map(|tab| tab.id.clone()),
        };
        self.step = WizardStep::Preview;
    }

    pub fn back_to_tabs(&mut self) {
        self.block_form = None;
        self.step = WizardStep::Tabs;
    }

    /// Save the current block form. No-op unless the render guard holds and
    /// the draft passes its save gate.
    pub fn save_block_form(&mut self) -> bool {
        let Some((_, tab_id)) = self.block_form_context() else {
            return false;
        };
        let tab_id = tab_id.to_string();
        let Some(block) = self.block_form.as_ref().and_then(BlockFormDraft::build_block) else {
            return false;
        };
        info!(tab_id, block_type = ?block.block_type(), "saving content block");
        self.add_block_to_tab(&tab_id, block)
    }

    /// Publish stub: confirms synchronously, stores nothing, stays on preview
    pub fn publish(&mut self) {
        info!("publish requested (stub)");
        self.status = Some("Portfolio published!".to_string());
    }

    // --- key handling ---

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> WizardOutcome {
        use crossterm::event::{KeyCode, KeyModifiers};

        self.status = None;

        match self.step {
            WizardStep::Onboarding => {
                match key.code {
                    KeyCode::Esc => return WizardOutcome::Exit,
                    KeyCode::Enter => {
                        self.continue_from_onboarding();
                    }
                    KeyCode::Tab | KeyCode::Down => {
                        self.onboarding.focus = (self.onboarding.focus + 1) % ONBOARDING_FIELD_COUNT;
                    }
                    KeyCode::BackTab | KeyCode::Up => {
                        self.onboarding.focus = (self.onboarding.focus + ONBOARDING_FIELD_COUNT
                            - 1)
                            % ONBOARDING_FIELD_COUNT;
                    }
                    _ => {
                        edit_field(self.onboarding.focused_field_mut(), key);
                        // Two-phase commit: mirror the draft into the model
                        // on every keystroke
                        let update = self.onboarding.as_update();
                        self.update_basic_info(update);
                    }
                }
            }
            WizardStep::Social => match key.code {
                KeyCode::Esc => self.back_to_onboarding(),
                KeyCode::Enter => self.continue_from_social(),
                KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.social.rows.push(SocialRow::default());
                    self.social.row = self.social.rows.len() - 1;
                    self.social.column = 0;
                    self.sync_social();
                }
                KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    // Removing the last remaining row is disallowed
                    if self.social.rows.len() > 1 {
                        let row = self.social.row;
                        self.social.rows.remove(row);
                        self.social.row = row.min(self.social.rows.len() - 1);
                        self.sync_social();
                    }
                }
                KeyCode::Tab | KeyCode::BackTab => {
                    self.social.column = 1 - self.social.column;
                }
                KeyCode::Down => {
                    self.social.row = (self.social.row + 1).min(self.social.rows.len() - 1);
                }
                KeyCode::Up => {
                    self.social.row = self.social.row.saturating_sub(1);
                }
                _ => {
                    edit_field(self.social.focused_field_mut(), key);
                    self.sync_social();
                }
            },
            WizardStep::Tabs => return self.handle_tabs_key(key),
            WizardStep::Blocks => match key.code {
                KeyCode::Esc => self.back_to_tabs(),
                KeyCode::Down => {
                    self.picker_index = (self.picker_index + 1).min(BlockType::all().len() - 1);
                }
                KeyCode::Up => {
                    self.picker_index = self.picker_index.saturating_sub(1);
                }
                KeyCode::Enter => {
                    let block_type = BlockType::all()[self.picker_index];
                    self.select_block_type(block_type);
                }
                _ => {}
            },
            WizardStep::BlockForm => self.handle_block_form_key(key),
            WizardStep::Preview => match key.code {
                KeyCode::Esc | KeyCode::Char('e') => {
                    self.back_to_tabs();
                }
                KeyCode::Left => {
                    self.preview.select_neighbor(&self.data, false);
                }
                KeyCode::Right | KeyCode::Tab => {
                    self.preview.select_neighbor(&self.data, true);
                }
                KeyCode::Char('p') => self.publish(),
                _ => {}
            },
        }
        WizardOutcome::Continue
    }

    fn sync_social(&mut self) {
        self.data.social_links = self.social.links();
    }

    fn handle_tabs_key(&mut self, key: crossterm::event::KeyEvent) -> WizardOutcome {
        use crossterm::event::KeyCode;

        // Inline rename mode captures all input until committed or cancelled
        if let Some(rename) = self.tabs_view.editing.as_mut() {
            match key.code {
                KeyCode::Esc => {
                    self.tabs_view.editing = None;
                }
                KeyCode::Enter => {
                    let tab_id = rename.tab_id.clone();
                    let name = rename.name.value().to_string();
                    if self.data.rename_tab(&tab_id, &name) {
                        self.tabs_view.editing = None;
                    } else {
                        self.status = Some("Tab name cannot be empty".to_string());
                    }
                }
                _ => edit_field(&mut rename.name, key),
            }
            return WizardOutcome::Continue;
        }

        let tab_count = self.data.tabs.len();
        match key.code {
            KeyCode::Esc => self.back_to_social(),
            KeyCode::Down => {
                self.tabs_view.selected = (self.tabs_view.selected + 1).min(tab_count - 1);
            }
            KeyCode::Up => {
                self.tabs_view.selected = self.tabs_view.selected.saturating_sub(1);
            }
            KeyCode::Char('[') => {
                if self.data.move_tab(self.tabs_view.selected, MoveDirection::Up) {
                    self.tabs_view.selected -= 1;
                }
            }
            KeyCode::Char(']') => {
                if self.data.move_tab(self.tabs_view.selected, MoveDirection::Down) {
                    self.tabs_view.selected += 1;
                }
            }
            KeyCode::Char('a') => {
                self.data.add_tab();
                self.tabs_view.selected = self.data.tabs.len() - 1;
            }
            KeyCode::Char('d') => {
                let tab_id = self.data.tabs[self.tabs_view.selected].id.clone();
                if self.data.remove_tab(&tab_id) {
                    self.tabs_view.selected =
                        self.tabs_view.selected.min(self.data.tabs.len() - 1);
                } else {
                    self.status = Some("The last tab cannot be deleted".to_string());
                }
            }
            KeyCode::Char('r') => {
                let tab = &self.data.tabs[self.tabs_view.selected];
                self.tabs_view.editing = Some(TabRename {
                    tab_id: tab.id.clone(),
                    name: InputField::from_value(&tab.name),
                });
            }
            KeyCode::Enter | KeyCode::Char('c') => {
                let tab_id = self.data.tabs[self.tabs_view.selected].id.clone();
                self.request_add_content(tab_id);
            }
            KeyCode::Char('f') => self.finish_to_preview(),
            _ => {}
        }
        WizardOutcome::Continue
    }

    fn handle_block_form_key(&mut self, key: crossterm::event::KeyEvent) {
        use crossterm::event::{KeyCode, KeyModifiers};

        // Degenerate state: no form context, fall back to the tabs step
        if self.block_form_context().is_none() || self.block_form.is_none() {
            self.back_to_tabs();
            return;
        }

        match key.code {
            KeyCode::Esc => self.back_to_tabs(),
            KeyCode::Enter => {
                self.save_block_form();
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(BlockFormDraft::Gallery { rows, row, column }) =
                    self.block_form.as_mut()
                {
                    rows.push(GalleryRow::default());
                    *row = rows.len() - 1;
                    *column = 0;
                }
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(BlockFormDraft::Gallery { rows, row, .. }) = self.block_form.as_mut()
                {
                    // Keep at least one row in the form
                    if rows.len() > 1 {
                        rows.remove(*row);
                        *row = (*row).min(rows.len() - 1);
                    }
                }
            }
            KeyCode::Tab | KeyCode::Down => self.move_block_form_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.move_block_form_focus(false),
            _ => {
                if let Some(draft) = self.block_form.as_mut() {
                    edit_field(draft.focused_field_mut(), key);
                }
            }
        }
    }

    fn move_block_form_focus(&mut self, forward: bool) {
        let Some(draft) = self.block_form.as_mut() else {
            return;
        };
        match draft {
            BlockFormDraft::Gallery { rows, row, column } => {
                // Focus order walks url -> alt within a row, then the next row
                let positions = rows.len() * 2;
                let current = *row * 2 + *column;
                let next = if forward {
                    (current + 1) % positions
                } else {
                    (current + positions - 1) % positions
                };
                *row = next / 2;
                *column = next % 2;
            }
            BlockFormDraft::Video { focus, .. } => {
                *focus = cycle(*focus, VIDEO_FIELD_COUNT, forward);
            }
            BlockFormDraft::Experience { focus, .. } => {
                *focus = cycle(*focus, EXPERIENCE_FIELD_COUNT, forward);
            }
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

fn cycle(current: usize, len: usize, forward: bool) -> usize {
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

/// Apply an editing key to a single-line field
fn edit_field(field: &mut InputField, key: crossterm::event::KeyEvent) {
    use crossterm::event::{KeyCode, KeyModifiers};
    match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            field.insert_char(ch);
        }
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(wizard: &mut WizardState, text: &str) {
        for ch in text.chars() {
            wizard.handle_key(key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn test_onboarding_gate_requires_name_and_title() {
        let mut wizard = WizardState::new();
        assert!(!wizard.continue_from_onboarding());
        assert_eq!(wizard.step, WizardStep::Onboarding);

        type_text(&mut wizard, "Ada Lovelace");
        wizard.handle_key(key(KeyCode::Tab));
        type_text(&mut wizard, "Engineer");
        assert!(wizard.onboarding.can_continue());

        wizard.handle_key(key(KeyCode::Enter));
        assert_eq!(wizard.step, WizardStep::Social);
        assert_eq!(wizard.data.full_name, "Ada Lovelace");
        assert_eq!(wizard.data.professional_title, "Engineer");
    }

    #[test]
    fn test_onboarding_gate_trims_but_stores_untrimmed() {
        let mut wizard = WizardState::new();
        type_text(&mut wizard, "   ");
        assert!(!wizard.onboarding.can_continue());

        let mut wizard = WizardState::new();
        type_text(&mut wizard, " Ada ");
        wizard.handle_key(key(KeyCode::Tab));
        type_text(&mut wizard, "Engineer");
        wizard.handle_key(key(KeyCode::Enter));
        // Stored value keeps its surrounding whitespace
        assert_eq!(wizard.data.full_name, " Ada ");
    }

    #[test]
    fn test_social_keystrokes_mirror_into_model() {
        let mut wizard = ready_at_social();
        type_text(&mut wizard, "LinkedIn");
        assert_eq!(wizard.data.social_links[0].platform, "LinkedIn");

        wizard.handle_key(key(KeyCode::Tab));
        type_text(&mut wizard, "https://linkedin.com/in/ada");
        assert_eq!(
            wizard.data.social_links[0].url,
            "https://linkedin.com/in/ada"
        );
    }

    #[test]
    fn test_social_blank_row_filtered_on_continue() {
        let mut wizard = ready_at_social();
        assert_eq!(wizard.social.rows.len(), 1);
        wizard.handle_key(key(KeyCode::Enter));
        assert_eq!(wizard.step, WizardStep::Tabs);
        assert!(wizard.data.social_links.is_empty());
    }

    #[test]
    fn test_social_cannot_remove_last_row() {
        let mut wizard = ready_at_social();
        wizard.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
        assert_eq!(wizard.social.rows.len(), 1);

        wizard.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert_eq!(wizard.social.rows.len(), 2);
        wizard.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
        assert_eq!(wizard.social.rows.len(), 1);
    }

    #[test]
    fn test_block_form_guard_degenerate_state() {
        let mut wizard = ready_at_tabs();
        // Force the degenerate state: step says block-form but no cursors
        wizard.step = WizardStep::BlockForm;
        assert!(wizard.block_form_context().is_none());
        assert!(!wizard.save_block_form());

        // Any key in the degenerate state falls back to tabs
        wizard.step = WizardStep::BlockForm;
        wizard.handle_key(key(KeyCode::Char('x')));
        assert_eq!(wizard.step, WizardStep::Tabs);
    }

    #[test]
    fn test_block_form_guard_satisfied() {
        let mut wizard = ready_at_tabs();
        wizard.request_add_content("tab-1".to_string());
        wizard.select_block_type(BlockType::Video);
        let (block_type, tab_id) = wizard.block_form_context().expect("guard satisfied");
        assert_eq!(block_type, BlockType::Video);
        assert_eq!(tab_id, "tab-1");
    }

    #[test]
    fn test_gallery_save_filters_empty_url_rows() {
        let draft = BlockFormDraft::Gallery {
            rows: vec![
                GalleryRow {
                    url: InputField::from_value("a.jpg"),
                    alt: InputField::from_value("A"),
                },
                GalleryRow {
                    url: InputField::from_value(""),
                    alt: InputField::from_value("B"),
                },
            ],
            row: 0,
            column: 0,
        };
        let block = draft.build_block().expect("one valid row");
        match block {
            ContentBlock::Gallery { images } => {
                assert_eq!(
                    images,
                    vec![GalleryImage {
                        url: "a.jpg".to_string(),
                        alt: "A".to_string()
                    }]
                );
            }
            other => panic!("expected gallery, got {other:?}"),
        }
    }

    #[test]
    fn test_gallery_save_gate_needs_one_url() {
        let draft = BlockFormDraft::new(BlockType::Gallery);
        assert!(!draft.is_valid());
        assert!(draft.build_block().is_none());
    }

    #[test]
    fn test_video_title_omitted_when_blank() {
        let draft = BlockFormDraft::Video {
            url: InputField::from_value("  https://youtu.be/XYZ  "),
            title: InputField::from_value("   "),
            focus: 0,
        };
        match draft.build_block().unwrap() {
            ContentBlock::Video { url, title } => {
                assert_eq!(url, "https://youtu.be/XYZ");
                assert!(title.is_none());
            }
            other => panic!("expected video, got {other:?}"),
        }
    }

    #[test]
    fn test_save_block_returns_to_tabs_and_clears_cursors() {
        let mut wizard = ready_at_tabs();
        wizard.request_add_content("tab-1".to_string());
        assert_eq!(wizard.step, WizardStep::Blocks);

        wizard.select_block_type(BlockType::Experience);
        assert_eq!(wizard.step, WizardStep::BlockForm);

        type_text(&mut wizard, "Lead");
        wizard.handle_key(key(KeyCode::Tab));
        type_text(&mut wizard, "Acme");
        wizard.handle_key(key(KeyCode::Enter));

        assert_eq!(wizard.step, WizardStep::Tabs);
        assert!(wizard.selected_block_type.is_none());
        assert!(wizard.current_tab_id.is_none());
        assert_eq!(wizard.data.tabs[0].blocks.len(), 1);
    }

    #[test]
    fn test_add_block_unknown_tab_still_returns_to_tabs() {
        let mut wizard = ready_at_tabs();
        wizard.request_add_content("tab-gone".to_string());
        wizard.select_block_type(BlockType::Video);
        let added = wizard.add_block_to_tab(
            "tab-gone",
            ContentBlock::Video {
                url: "https://example.com".to_string(),
                title: None,
            },
        );
        assert!(!added);
        assert_eq!(wizard.step, WizardStep::Tabs);
        assert!(wizard.selected_block_type.is_none());
        assert!(wizard.current_tab_id.is_none());
        assert!(wizard.data.tabs.iter().all(|tab| tab.blocks.is_empty()));
    }

    #[test]
    fn test_cancel_block_form_discards_draft() {
        let mut wizard = ready_at_tabs();
        wizard.request_add_content("tab-1".to_string());
        wizard.select_block_type(BlockType::Video);
        type_text(&mut wizard, "https://youtu.be/XYZ");
        wizard.handle_key(key(KeyCode::Esc));
        assert_eq!(wizard.step, WizardStep::Tabs);
        assert!(wizard.block_form.is_none());
        assert!(wizard.data.tabs[0].blocks.is_empty());
    }

    #[test]
    fn test_preview_local_selection_leaves_cursor() {
        let mut wizard = ready_at_tabs();
        wizard.data.add_tab();
        wizard.finish_to_preview();
        assert_eq!(wizard.step, WizardStep::Preview);
        assert_eq!(wizard.preview.selected_tab_id.as_deref(), Some("tab-1"));

        wizard.handle_key(key(KeyCode::Right));
        assert_eq!(wizard.step, WizardStep::Preview);
        let selected = wizard.preview.selected_tab_id.clone().unwrap();
        assert_ne!(selected, "tab-1");

        // Back to edit returns to the tabs step
        wizard.handle_key(key(KeyCode::Esc));
        assert_eq!(wizard.step, WizardStep::Tabs);
    }

    #[test]
    fn test_publish_is_a_stub() {
        let mut wizard = ready_at_tabs();
        wizard.finish_to_preview();
        wizard.handle_key(key(KeyCode::Char('p')));
        assert_eq!(wizard.step, WizardStep::Preview);
        assert_eq!(wizard.status.as_deref(), Some("Portfolio published!"));
    }

    #[test]
    fn test_tab_rename_rejects_empty() {
        let mut wizard = ready_at_tabs();
        wizard.handle_key(key(KeyCode::Char('r')));
        // Clear the seeded name, then try to commit
        for _ in 0.."Work".len() {
            wizard.handle_key(key(KeyCode::Backspace));
        }
        wizard.handle_key(key(KeyCode::Enter));
        assert!(wizard.tabs_view.editing.is_some());
        assert_eq!(wizard.data.tabs[0].name, "Work");

        type_text(&mut wizard, "Projects");
        wizard.handle_key(key(KeyCode::Enter));
        assert!(wizard.tabs_view.editing.is_none());
        assert_eq!(wizard.data.tabs[0].name, "Projects");
    }

    #[test]
    fn test_update_tabs_replaces_sequence() {
        let mut wizard = ready_at_tabs();
        let mut tabs = wizard.data.tabs.clone();
        tabs.push(Tab::new("Side Projects".to_string()));
        wizard.update_tabs(tabs);
        assert_eq!(wizard.data.tabs.len(), 2);
        assert_eq!(wizard.data.tabs[1].name, "Side Projects");
    }

    #[test]
    fn test_esc_from_onboarding_exits_wizard() {
        let mut wizard = WizardState::new();
        assert_eq!(wizard.handle_key(key(KeyCode::Esc)), WizardOutcome::Exit);
    }

    fn ready_at_social() -> WizardState {
        let mut wizard = WizardState::new();
        type_text(&mut wizard, "Ada Lovelace");
        wizard.handle_key(key(KeyCode::Tab));
        type_text(&mut wizard, "Engineer");
        wizard.handle_key(key(KeyCode::Enter));
        assert_eq!(wizard.step, WizardStep::Social);
        wizard
    }

    fn ready_at_tabs() -> WizardState {
        let mut wizard = ready_at_social();
        wizard.handle_key(key(KeyCode::Enter));
        assert_eq!(wizard.step, WizardStep::Tabs);
        wizard
    }
}
