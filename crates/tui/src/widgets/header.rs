//! Navigation header bar.

use crate::widgets::palette::Palette;
use pf_protocol::{Profile, Theme};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Height of the header including its border.
pub const HEADER_HEIGHT: u16 = 3;

/// Render the header: name, section links, theme and menu toggles.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    profile: &Profile,
    theme: Theme,
    menu_open: bool,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(palette.muted())
        .style(palette.base());

    let theme_icon = if theme.is_dark() { "☀" } else { "☾" };
    let menu_icon = if menu_open { "✕" } else { "≡" };

    let line = Line::from(vec![
        Span::styled(profile.name.clone(), palette.heading()),
        Span::raw("   "),
        Span::styled("[s]", palette.accent()),
        Span::raw(" Skills  "),
        Span::styled("[p]", palette.accent()),
        Span::raw(" Projects  "),
        Span::styled("[c]", palette.accent()),
        Span::raw(" Contact  "),
        Span::styled("[t]", palette.accent()),
        Span::raw(format!(" {theme_icon}  ")),
        Span::styled("[m]", palette.accent()),
        Span::raw(format!(" {menu_icon}")),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
