// ABOUTME: Marketing landing screen - hero, features, how-it-works, FAQ, pricing

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const GOLD: Color = Color::Rgb(255, 215, 0);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const ACCENT_PURPLE: Color = Color::Rgb(167, 139, 250);

const FEATURES: &[(&str, &str)] = &[
    (
        "Zero-Design Builder",
        "Answer a few questions; we handle the layout. It looks perfect on every screen, every time.",
    ),
    (
        "The Multimedia Vault",
        "Showcase YouTube reels, Figma prototypes, and Slide decks in one sleek, unified feed.",
    ),
    (
        "Lead Capture Pro",
        "A built-in Contact Me flow that turns visitors into clients.",
    ),
    (
        "Mobile-First Editing",
        "Snap a photo of your latest work and update your portfolio on the LRT ride home.",
    ),
];

const STEPS: &[(&str, &str, &str)] = &[
    (
        "01",
        "The Brain Dump",
        "Answer a few prompts about your experience and skills (Typeform style).",
    ),
    (
        "02",
        "The Content Drop",
        "Upload your best work. We automatically format your galleries and videos.",
    ),
    (
        "03",
        "The Live Preview",
        "See exactly how your site looks on a phone and desktop instantly.",
    ),
    (
        "04",
        "The Launch",
        "Pay RM 10 to get your custom link and go live to the world.",
    ),
];

const FAQS: &[(&str, &str)] = &[
    (
        "Why RM 10?",
        "We believe a professional presence shouldn't cost a fortune. RM 10 gets you a month of Pro access and a published page. It's less than a Starbucks latte.",
    ),
    (
        "Do I need to be a designer to make it look good?",
        "Not at all. Our structured layout system ensures that no matter what you upload, it follows high-end design principles automatically.",
    ),
    (
        "What happens after the first month?",
        "You can renew for just RM 8/month to keep your Pro tabs and custom URL active. If you stop, your basic info stays free, but Pro sections are hidden.",
    ),
    (
        "Can I use my own domain?",
        "Yes! Pro users can connect their own .com or .my domains easily.",
    ),
];

/// Marketing landing screen, scrollable with Up/Down
pub struct LandingComponent;

impl LandingComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, scroll: u16) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG))
            .title(" Pluck ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let paragraph = Paragraph::new(Self::lines())
            .alignment(Alignment::Left)
            .scroll((scroll, 0))
            .wrap(ratatui::widgets::Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }

    fn lines() -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        // Hero
        lines.push(Line::from(""));
        lines.push(centered(
            "Mobile-first • 5-minute setup • RM 10 to publish",
            Style::default().fg(ACCENT_PURPLE),
        ));
        lines.push(Line::from(""));
        lines.push(centered(
            "Your professional flex, built in 5 minutes.",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(""));
        lines.push(centered(
            "Stop sending messy folders. Create a high-converting, mobile-first",
            Style::default().fg(SOFT_WHITE),
        ));
        lines.push(centered(
            "portfolio that turns leads into clients.",
            Style::default().fg(SOFT_WHITE),
        ));
        lines.push(Line::from(""));
        lines.push(centered(
            "Press  w  to build your portfolio  ·  l  to browse published profiles",
            Style::default().fg(SELECTION_GREEN),
        ));
        lines.push(Line::from(""));

        // Features
        lines.push(section_title(
            "Everything you need to look premium — instantly.",
        ));
        lines.push(centered(
            "Answer a few prompts, drop in your best work, and share a link that actually converts.",
            Style::default().fg(MUTED_GRAY),
        ));
        lines.push(Line::from(""));
        for (title, body) in FEATURES {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(GOLD)),
                Span::styled(*title, Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {body}"),
                Style::default().fg(MUTED_GRAY),
            )));
        }
        lines.push(Line::from(""));

        // How it works
        lines.push(section_title("From brain dump → live link."));
        lines.push(centered(
            "A simple flow that feels like chatting — not building.",
            Style::default().fg(MUTED_GRAY),
        ));
        lines.push(Line::from(""));
        for (number, title, body) in STEPS {
            lines.push(Line::from(vec![
                Span::styled(format!("  {number} "), Style::default().fg(ACCENT_PURPLE)),
                Span::styled(*title, Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("     {body}"),
                Style::default().fg(MUTED_GRAY),
            )));
        }
        lines.push(Line::from(""));

        // FAQ
        lines.push(section_title("Short answers. No awkward surprises."));
        lines.push(Line::from(""));
        for (question, answer) in FAQS {
            lines.push(Line::from(vec![
                Span::styled("  ? ", Style::default().fg(GOLD)),
                Span::styled(*question, Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {answer}"),
                Style::default().fg(MUTED_GRAY),
            )));
            lines.push(Line::from(""));
        }

        lines.push(centered(
            "w start wizard  ·  l profiles  ·  ↑/↓ scroll  ·  q quit",
            Style::default().fg(MUTED_GRAY),
        ));

        lines
    }
}

impl Default for LandingComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn centered(text: &'static str, style: Style) -> Line<'static> {
    Line::from(Span::styled(text, style)).alignment(Alignment::Center)
}

fn section_title(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
}
