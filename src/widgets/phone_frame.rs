// ABOUTME: Simulated phone chrome - rounded frame, notch, side buttons, inner screen

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

const FRAME_GRAY: Color = Color::Rgb(55, 65, 81);
const SCREEN_BG: Color = Color::Rgb(17, 24, 39);

/// Maximum screen dimensions, keeping a roughly 9:19 phone aspect in cells
const MAX_SCREEN_WIDTH: u16 = 46;
const MAX_SCREEN_HEIGHT: u16 = 40;

/// Phone chrome around a portfolio screen. Rendering returns the inner
/// screen area for the caller to fill.
pub struct PhoneFrame;

impl PhoneFrame {
    /// Center the phone in `area` and draw the chrome. Returns the screen
    /// Rect, or None when the area is too small to show anything useful.
    pub fn render(frame: &mut Frame, area: Rect) -> Option<Rect> {
        if area.width < 12 || area.height < 8 {
            return None;
        }

        let width = (area.width.saturating_sub(4)).min(MAX_SCREEN_WIDTH + 2);
        let height = (area.height.saturating_sub(2)).min(MAX_SCREEN_HEIGHT + 2);

        let outer = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, outer);

        // Body with rounded corners stands in for the device casing
        let body = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(FRAME_GRAY))
            .style(Style::default().bg(SCREEN_BG));
        let screen = body.inner(outer);
        frame.render_widget(body, outer);

        Self::render_notch(frame, outer);
        Self::render_side_buttons(frame, outer);

        Some(screen)
    }

    /// Notch: a short dark bar centered on the top edge
    fn render_notch(frame: &mut Frame, outer: Rect) {
        let notch_width = (outer.width / 3).max(4);
        let notch = Rect {
            x: outer.x + (outer.width - notch_width) / 2,
            y: outer.y,
            width: notch_width,
            height: 1,
        };
        let bar = Block::default().style(Style::default().bg(FRAME_GRAY));
        frame.render_widget(bar, notch);
    }

    /// Volume buttons on the left edge, power on the right
    fn render_side_buttons(frame: &mut Frame, outer: Rect) {
        let button = Style::default().bg(FRAME_GRAY);

        for offset in [4u16, 7] {
            if outer.height > offset + 2 {
                let left = Rect {
                    x: outer.x,
                    y: outer.y + offset,
                    width: 1,
                    height: 2,
                };
                frame.render_widget(Block::default().style(button), left);
            }
        }

        if outer.height > 7 {
            let right = Rect {
                x: outer.x + outer.width - 1,
                y: outer.y + 5,
                width: 1,
                height: 3,
            };
            frame.render_widget(Block::default().style(button), right);
        }
    }
}
