// ABOUTME: Wizard rendering - step progress header, per-step forms, navigation footer

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::state::{
    BlockFormDraft, OnboardingDraft, SocialDraft, TabsDraft, WizardState, WizardStep,
};
use crate::app::state::InputField;
use crate::components::preview;
use crate::models::BlockType;

// Color palette from TUI style guide
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);

/// The portfolio wizard component
pub struct WizardComponent;

impl WizardComponent {
    pub fn new() -> Self {
        Self
    }

    /// Main render function
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        frame.render_widget(Clear, area);

        let container = Block::default().style(Style::default().bg(DARK_BG));
        frame.render_widget(container, area);

        // Main layout: header, content, footer
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),  // Header with progress
                Constraint::Min(15),    // Main content
                Constraint::Length(3),  // Navigation footer
            ])
            .split(area);

        self.render_header(frame, layout[0], state);
        self.render_step_content(frame, layout[1], state);
        self.render_navigation(frame, layout[2], state);
    }

    /// Render the header with step progress
    fn render_header(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Progress indicator
            ])
            .split(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("✨ ", Style::default()),
            Span::styled(
                "Build Your Portfolio",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, header_layout[0]);

        self.render_progress(frame, header_layout[1], state);
    }

    /// Render step progress dots
    fn render_progress(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let steps = [
            WizardStep::Onboarding,
            WizardStep::Social,
            WizardStep::Tabs,
            WizardStep::Blocks,
            WizardStep::Preview,
        ];
        let current_idx = state.step.number() - 1;

        let mut spans = vec![Span::styled("  ", Style::default())];

        for (idx, step) in steps.iter().enumerate() {
            let (icon, style) = if idx < current_idx {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if idx == current_idx {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };

            spans.push(Span::styled(icon, style));
            spans.push(Span::styled(" ", Style::default()));
            spans.push(Span::styled(
                step.title(),
                if idx == current_idx {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));

            if idx < steps.len() - 1 {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        let progress = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(progress, area);
    }

    /// Render the main step content
    fn render_step_content(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        match state.step {
            WizardStep::Onboarding => self.render_onboarding(frame, area, &state.onboarding),
            WizardStep::Social => self.render_social(frame, area, &state.social),
            WizardStep::Tabs => self.render_tabs(frame, area, state),
            WizardStep::Blocks => self.render_block_picker(frame, area, state),
            WizardStep::BlockForm => self.render_block_form(frame, area, state),
            WizardStep::Preview => preview::render(frame, area, state),
        }
    }

    /// Render the basic-info form
    fn render_onboarding(&self, frame: &mut Frame, area: Rect, draft: &OnboardingDraft) {
        let block = step_panel(" Tell us about yourself ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let form = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(1),
            ])
            .split(inner);

        render_field(frame, form[0], "Full Name *", &draft.full_name, draft.focus == 0);
        render_field(
            frame,
            form[1],
            "Professional Title *",
            &draft.professional_title,
            draft.focus == 1,
        );
        render_field(frame, form[2], "Bio", &draft.bio, draft.focus == 2);
        render_field(
            frame,
            form[3],
            "Profile Image URL",
            &draft.profile_image,
            draft.focus == 3,
        );

        if !draft.can_continue() {
            let hint = Paragraph::new(Line::from(Span::styled(
                "Name and title are required to continue",
                Style::default().fg(MUTED_GRAY),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(hint, form[4]);
        }
    }

    /// Render the social links editor
    fn render_social(&self, frame: &mut Frame, area: Rect, draft: &SocialDraft) {
        let block = step_panel(" Social Links ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints: Vec<Constraint> =
            draft.rows.iter().map(|_| Constraint::Length(3)).collect();
        constraints.push(Constraint::Min(1));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints(constraints)
            .split(inner);

        for (idx, social_row) in draft.rows.iter().enumerate() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
                .split(rows[idx]);

            let focused_row = idx == draft.row;
            render_field(
                frame,
                columns[0],
                "Platform",
                &social_row.platform,
                focused_row && draft.column == 0,
            );
            render_field(
                frame,
                columns[1],
                "URL",
                &social_row.url,
                focused_row && draft.column == 1,
            );
        }

        let hint = Paragraph::new(Line::from(Span::styled(
            "Blank rows are dropped when you continue",
            Style::default().fg(MUTED_GRAY),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hint, rows[draft.rows.len()]);
    }

    /// Render the tab manager
    fn render_tabs(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let block = step_panel(" Portfolio Tabs ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let view: &TabsDraft = &state.tabs_view;

        let items: Vec<ListItem> = state
            .data
            .tabs
            .iter()
            .enumerate()
            .map(|(idx, tab)| {
                let selected = idx == view.selected;
                let marker = if selected { "▸ " } else { "  " };

                // Inline rename replaces the name while editing
                let name: String = match &view.editing {
                    Some(rename) if rename.tab_id == tab.id => rename.name.display_with_cursor(),
                    _ => tab.name.clone(),
                };

                let count = tab.blocks.len();
                let blocks_label = if count == 1 {
                    "1 block".to_string()
                } else {
                    format!("{count} blocks")
                };

                let style = if selected {
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(SOFT_WHITE)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(GOLD)),
                    Span::styled(name, style),
                    Span::styled(
                        format!("  ({blocks_label})"),
                        Style::default().fg(MUTED_GRAY),
                    ),
                ]))
            })
            .collect();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([Constraint::Min(5), Constraint::Length(1)])
            .split(inner);

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER)),
        );
        frame.render_widget(list, layout[0]);

        if let Some(status) = &state.status {
            let line = Paragraph::new(Line::from(Span::styled(
                status.as_str(),
                Style::default().fg(ERROR_RED),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(line, layout[1]);
        }
    }

    /// Render the block type picker
    fn render_block_picker(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let block = step_panel(" Add Content ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let tab_name = state
            .current_tab_id
            .as_deref()
            .and_then(|id| state.data.tab_by_id(id))
            .map_or("?", |tab| tab.name.as_str());

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([Constraint::Length(2), Constraint::Min(5)])
            .split(inner);

        let heading = Paragraph::new(Line::from(vec![
            Span::styled("Adding content to ", Style::default().fg(MUTED_GRAY)),
            Span::styled(tab_name, Style::default().fg(GOLD)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(heading, layout[0]);

        let items: Vec<ListItem> = BlockType::all()
            .iter()
            .enumerate()
            .map(|(idx, block_type)| {
                let selected = idx == state.picker_index;
                let marker = if selected { "▸ " } else { "  " };
                let title_style = if selected {
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(SOFT_WHITE)
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(marker, Style::default().fg(GOLD)),
                        Span::styled(block_type.title(), title_style),
                    ]),
                    Line::from(Span::styled(
                        format!("    {}", block_type.description()),
                        Style::default().fg(MUTED_GRAY),
                    )),
                ])
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER)),
        );
        frame.render_widget(list, layout[1]);
    }

    /// Render the type-specific block form
    fn render_block_form(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        // Guard: without both cursors there is nothing to render
        let Some((block_type, _)) = state.block_form_context() else {
            return;
        };
        let Some(draft) = &state.block_form else {
            return;
        };

        let title = format!(" {} ", block_type.title());
        let block = step_panel(&title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match draft {
            BlockFormDraft::Gallery { rows, row, column } => {
                let mut constraints: Vec<Constraint> =
                    rows.iter().map(|_| Constraint::Length(3)).collect();
                constraints.push(Constraint::Min(1));
                let layout = Layout::default()
                    .direction(Direction::Vertical)
                    .margin(2)
                    .constraints(constraints)
                    .split(inner);

                for (idx, image_row) in rows.iter().enumerate() {
                    let columns = Layout::default()
                        .direction(Direction::Horizontal)
                        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                        .split(layout[idx]);
                    let focused_row = idx == *row;
                    render_field(
                        frame,
                        columns[0],
                        "Image URL",
                        &image_row.url,
                        focused_row && *column == 0,
                    );
                    render_field(
                        frame,
                        columns[1],
                        "Alt Text",
                        &image_row.alt,
                        focused_row && *column == 1,
                    );
                }

                let hint = Paragraph::new(Line::from(Span::styled(
                    "At least one image URL is required",
                    Style::default().fg(MUTED_GRAY),
                )))
                .alignment(Alignment::Center);
                frame.render_widget(hint, layout[rows.len()]);
            }
            BlockFormDraft::Video { url, title, focus } => {
                let layout = Layout::default()
                    .direction(Direction::Vertical)
                    .margin(2)
                    .constraints([
                        Constraint::Length(3),
                        Constraint::Length(3),
                        Constraint::Min(1),
                    ])
                    .split(inner);
                render_field(frame, layout[0], "Video URL *", url, *focus == 0);
                render_field(frame, layout[1], "Title", title, *focus == 1);

                let hint = Paragraph::new(Line::from(Span::styled(
                    "YouTube and Vimeo links are embedded automatically",
                    Style::default().fg(MUTED_GRAY),
                )))
                .alignment(Alignment::Center);
                frame.render_widget(hint, layout[2]);
            }
            BlockFormDraft::Experience {
                title,
                company,
                period,
                description,
                image,
                focus,
            } => {
                let layout = Layout::default()
                    .direction(Direction::Vertical)
                    .margin(2)
                    .constraints([
                        Constraint::Length(3),
                        Constraint::Length(3),
                        Constraint::Length(3),
                        Constraint::Length(3),
                        Constraint::Length(3),
                    ])
                    .split(inner);
                render_field(frame, layout[0], "Job Title *", title, *focus == 0);
                render_field(frame, layout[1], "Company *", company, *focus == 1);
                render_field(frame, layout[2], "Period", period, *focus == 2);
                render_field(frame, layout[3], "Description", description, *focus == 3);
                render_field(frame, layout[4], "Company Image URL", image, *focus == 4);
            }
        }
    }

    /// Render the navigation footer with the keys for the current step
    fn render_navigation(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let hints: &[(&str, &str)] = match state.step {
            WizardStep::Onboarding => &[
                ("Tab", "next field"),
                ("Enter", "continue"),
                ("Esc", "exit"),
            ],
            WizardStep::Social => &[
                ("Ctrl+A", "add link"),
                ("Ctrl+D", "remove"),
                ("Tab", "column"),
                ("Enter", "continue"),
                ("Esc", "back"),
            ],
            WizardStep::Tabs => &[
                ("a", "add"),
                ("d", "delete"),
                ("r", "rename"),
                ("[/]", "move"),
                ("Enter", "add content"),
                ("f", "preview"),
                ("Esc", "back"),
            ],
            WizardStep::Blocks => &[("↑/↓", "select"), ("Enter", "choose"), ("Esc", "back")],
            WizardStep::BlockForm => &[
                ("Tab", "next field"),
                ("Enter", "save"),
                ("Esc", "cancel"),
            ],
            WizardStep::Preview => &[
                ("←/→", "switch tab"),
                ("p", "publish"),
                ("e", "back to edit"),
            ],
        };

        let mut spans = Vec::new();
        for (idx, (key, action)) in hints.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  │  ", Style::default().fg(SUBDUED_BORDER)));
            }
            spans.push(Span::styled(
                *key,
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {action}"),
                Style::default().fg(MUTED_GRAY),
            ));
        }

        let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(footer, inner);
    }
}

impl Default for WizardComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn step_panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(CORNFLOWER_BLUE))
        .style(Style::default().bg(PANEL_BG))
        .title(title.to_string())
        .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
}

/// Render a labelled single-line input, with the cursor bar when focused
fn render_field(frame: &mut Frame, area: Rect, label: &str, field: &InputField, focused: bool) {
    let border_style = if focused {
        Style::default().fg(GOLD)
    } else {
        Style::default().fg(SUBDUED_BORDER)
    };

    let value = if focused {
        field.display_with_cursor()
    } else {
        field.value().to_string()
    };

    let input = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().fg(SOFT_WHITE),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {label} "))
            .title_style(Style::default().fg(MUTED_GRAY)),
    );
    frame.render_widget(input, area);
}
