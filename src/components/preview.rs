// ABOUTME: Portfolio preview - pure projection of the draft rendered in a phone frame

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::components::wizard::WizardState;
use crate::models::{embed_url, ContentBlock, PortfolioData, Tab};
use crate::widgets::PhoneFrame;

const GOLD: Color = Color::Rgb(255, 215, 0);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const ACCENT_PURPLE: Color = Color::Rgb(167, 139, 250);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);

/// Render the preview step: phone chrome around the projected portfolio
pub fn render(frame: &mut Frame, area: Rect, state: &WizardState) {
    let Some(screen) = PhoneFrame::render(frame, area) else {
        let msg = Paragraph::new("Terminal too small for preview")
            .style(Style::default().fg(MUTED_GRAY))
            .alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    };

    let selected_tab = state.preview.resolve_tab(&state.data);
    let lines = portfolio_lines(&state.data, selected_tab);

    let mut text = lines;
    if let Some(status) = &state.status {
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            status.clone(),
            Style::default()
                .fg(SELECTION_GREEN)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let screen_inner = Rect {
        x: screen.x + 1,
        y: screen.y + 1,
        width: screen.width.saturating_sub(2),
        height: screen.height.saturating_sub(1),
    };
    let widget = Paragraph::new(text).alignment(Alignment::Left);
    frame.render_widget(widget, screen_inner);
}

/// Project the portfolio into display lines for the phone screen
fn portfolio_lines<'a>(data: &'a PortfolioData, selected: Option<&'a Tab>) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    // Header: avatar, name, title, bio
    let avatar = if data.profile_image.trim().is_empty() {
        format!("({})", initials(&data.full_name))
    } else {
        "[img]".to_string()
    };
    lines.push(Line::from(vec![
        Span::styled(avatar, Style::default().fg(ACCENT_PURPLE)),
        Span::raw(" "),
        Span::styled(
            display_name(data),
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        display_title(data),
        Style::default().fg(MUTED_GRAY),
    )));

    if !data.bio.trim().is_empty() {
        lines.push(Line::from(Span::styled(
            data.bio.as_str(),
            Style::default().fg(SOFT_WHITE),
        )));
    }

    if !data.social_links.is_empty() {
        let mut spans = Vec::new();
        for (idx, link) in data.social_links.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" · ", Style::default().fg(MUTED_GRAY)));
            }
            spans.push(Span::styled(
                link.platform.as_str(),
                Style::default().fg(ACCENT_PURPLE),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));

    // Tab bar with the local selection highlighted
    let mut tab_spans = Vec::new();
    for (idx, tab) in data.tabs.iter().enumerate() {
        if idx > 0 {
            tab_spans.push(Span::raw("  "));
        }
        let is_selected = selected.is_some_and(|s| s.id == tab.id);
        let style = if is_selected {
            Style::default()
                .fg(GOLD)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(MUTED_GRAY)
        };
        tab_spans.push(Span::styled(tab.name.as_str(), style));
    }
    lines.push(Line::from(tab_spans));
    lines.push(Line::from(""));

    // Content of the selected tab
    match selected {
        Some(tab) if !tab.blocks.is_empty() => {
            for (idx, block) in tab.blocks.iter().enumerate() {
                if idx > 0 {
                    lines.push(Line::from(""));
                }
                lines.extend(block_lines(block));
            }
        }
        _ => {
            lines.push(Line::from(Span::styled(
                "No content added yet",
                Style::default().fg(MUTED_GRAY),
            )));
        }
    }

    lines
}

/// Project one content block into display lines
fn block_lines(block: &ContentBlock) -> Vec<Line<'static>> {
    match block {
        ContentBlock::Gallery { images } => {
            let mut lines = vec![Line::from(Span::styled(
                "▦ Gallery".to_string(),
                Style::default().fg(GOLD),
            ))];
            for (idx, image) in images.iter().enumerate() {
                let url = gallery_image_url(&image.url, idx);
                let label = if image.alt.is_empty() {
                    url
                } else {
                    format!("{} ({url})", image.alt)
                };
                lines.push(Line::from(Span::styled(
                    format!("  • {label}"),
                    Style::default().fg(SOFT_WHITE),
                )));
            }
            lines
        }
        ContentBlock::Video { url, title } => {
            let mut lines = vec![Line::from(Span::styled(
                "▶ Video".to_string(),
                Style::default().fg(GOLD),
            ))];
            if let Some(title) = title {
                lines.push(Line::from(Span::styled(
                    format!("  {title}"),
                    Style::default().fg(SOFT_WHITE),
                )));
            }
            lines.push(Line::from(Span::styled(
                format!("  {}", embed_url(url)),
                Style::default().fg(MUTED_GRAY),
            )));
            lines
        }
        ContentBlock::Experience {
            title,
            company,
            period,
            description,
            image,
        } => {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("[{}] ", company_badge(company)),
                    Style::default().fg(ACCENT_PURPLE),
                ),
                Span::styled(
                    title.clone(),
                    Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                ),
            ])];
            let meta = if period.is_empty() {
                company.clone()
            } else {
                format!("{company} · {period}")
            };
            lines.push(Line::from(Span::styled(
                format!("  {meta}"),
                Style::default().fg(MUTED_GRAY),
            )));
            if !description.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {description}"),
                    Style::default().fg(SOFT_WHITE),
                )));
            }
            if let Some(image) = image {
                lines.push(Line::from(Span::styled(
                    format!("  {image}"),
                    Style::default().fg(MUTED_GRAY),
                )));
            }
            lines
        }
    }
}

/// Name shown in the header, with a placeholder before onboarding completes
pub fn display_name(data: &PortfolioData) -> &str {
    if data.full_name.trim().is_empty() {
        "Your Name"
    } else {
        &data.full_name
    }
}

pub fn display_title(data: &PortfolioData) -> &str {
    if data.professional_title.trim().is_empty() {
        "Your Title"
    } else {
        &data.professional_title
    }
}

/// Avatar initials: first letter of the first two words, uppercased
pub fn initials(full_name: &str) -> String {
    let letters: String = full_name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "UN".to_string()
    } else {
        letters
    }
}

/// Badge shown beside an experience entry: first two characters of the
/// company name, uppercased
pub fn company_badge(company: &str) -> String {
    let letters: String = company
        .trim()
        .chars()
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "??".to_string()
    } else {
        letters
    }
}

/// Gallery images with an empty URL fall back to a positional placeholder
pub fn gallery_image_url(url: &str, index: usize) -> String {
    if url.trim().is_empty() {
        format!("placeholder://portfolio-image-{index}")
    } else {
        url.to_string()
    }
}
