//! Popups drawn over the page: skill details and the mobile menu.

use crate::widgets::document::wrap;
use crate::widgets::palette::Palette;
use pf_protocol::{Section, SkillCategory, SkillProfile};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Rectangle of `percent_x` by `percent_y` centered in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

const NO_DETAILS: &str = "No details for this category yet.";

/// Lines of the skill detail popup.
pub fn skill_lines(
    skill: Option<&SkillProfile>,
    palette: &Palette,
    width: usize,
) -> Vec<Line<'static>> {
    let Some(skill) = skill else {
        return vec![Line::from(Span::styled(NO_DETAILS, palette.muted()))];
    };

    let mut lines: Vec<Line<'static>> = wrap(&skill.description, width)
        .into_iter()
        .map(Line::from)
        .collect();

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Skills", palette.heading())));
    for name in &skill.skills {
        lines.push(Line::from(vec![
            Span::styled("• ", palette.accent()),
            Span::raw(name.clone()),
        ]));
    }

    if !skill.projects.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Related Projects", palette.heading())));
        for project in &skill.projects {
            lines.push(Line::from(Span::styled(
                project.title.clone(),
                palette.accent(),
            )));
            for line in wrap(&project.description, width) {
                lines.push(Line::from(line));
            }
            lines.push(Line::from(Span::styled(
                format!("View Project: {}", project.repo),
                palette.muted(),
            )));
        }
    }

    lines
}

/// Render the detail popup for an open skill category.
///
/// A category without an entry in `skills.yaml` gets an empty popup.
pub fn render_skill_overlay(
    frame: &mut Frame,
    area: Rect,
    category: SkillCategory,
    skill: Option<&SkillProfile>,
    palette: &Palette,
) {
    let popup = centered_rect(70, 70, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", category.title()))
        .title_bottom(" Esc to close ")
        .border_style(palette.accent())
        .style(palette.base());

    let width = usize::from(block.inner(popup).width);
    let paragraph = Paragraph::new(skill_lines(skill, palette, width.max(1))).block(block);

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

/// Render the dropdown navigation menu at the top of `area`.
pub fn render_mobile_menu(frame: &mut Frame, area: Rect, palette: &Palette) {
    let links = [
        ('s', Section::Skills),
        ('p', Section::Projects),
        ('c', Section::Contact),
    ];
    let mut lines: Vec<Line> = links
        .into_iter()
        .map(|(key, section)| {
            Line::from(vec![
                Span::styled(format!("[{key}] "), palette.accent()),
                Span::raw(section.title()),
            ])
        })
        .collect();
    lines.push(Line::from(vec![
        Span::styled("[t] ", palette.accent()),
        Span::raw("Theme"),
    ]));

    let height = (lines.len() as u16 + 2).min(area.height);
    let menu = Rect {
        height,
        width: area.width.min(24),
        ..area
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Menu ")
        .border_style(palette.muted())
        .style(palette.base());

    frame.render_widget(Clear, menu);
    frame.render_widget(Paragraph::new(lines).block(block), menu);
}
