// ABOUTME: Published profile listing - loading, loaded, and failed query states

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::state::ProfilesQuery;
use crate::models::ProfileRecord;

const GOLD: Color = Color::Rgb(255, 215, 0);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);

/// Read-only listing of published profiles from the hosted store
pub struct ProfileListComponent;

impl ProfileListComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, query: &ProfilesQuery) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG))
            .title(" Published Profiles ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        match query {
            ProfilesQuery::Pending => self.render_loading(frame, inner),
            ProfilesQuery::Loaded(profiles) => self.render_profiles(frame, inner, profiles),
            ProfilesQuery::Failed(message) => self.render_failure(frame, inner, message),
        }
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect) {
        let loading = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Loading profiles...",
                Style::default().fg(GOLD),
            )),
            Line::from(""),
            Line::from(Span::styled("Please wait", Style::default().fg(MUTED_GRAY))),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(loading, area);
    }

    fn render_profiles(&self, frame: &mut Frame, area: Rect, profiles: &[ProfileRecord]) {
        if profiles.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No profiles published yet",
                    Style::default().fg(MUTED_GRAY),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Esc to go back",
                    Style::default().fg(MUTED_GRAY),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = profiles
            .iter()
            .map(|profile| {
                let mut lines = vec![Line::from(vec![
                    Span::styled(
                        profile.full_name.as_str(),
                        Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", profile.professional_title),
                        Style::default().fg(GOLD),
                    ),
                ])];
                if !profile.bio.trim().is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", profile.bio),
                        Style::default().fg(MUTED_GRAY),
                    )));
                }
                lines.push(Line::from(""));
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items);
        frame.render_widget(list, area);
    }

    fn render_failure(&self, frame: &mut Frame, area: Rect, message: &str) {
        let failure = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Could not load profiles",
                Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(MUTED_GRAY),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(MUTED_GRAY)),
                Span::styled("r", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
                Span::styled(" to retry or ", Style::default().fg(MUTED_GRAY)),
                Span::styled("Esc", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
                Span::styled(" to go back", Style::default().fg(MUTED_GRAY)),
            ]),
        ])
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(failure, area);
    }
}

impl Default for ProfileListComponent {
    fn default() -> Self {
        Self::new()
    }
}
