//! The scrollable page body.
//!
//! The whole page is laid out as one list of lines. Each section records
//! the line it starts on so navigation links can scroll straight to it.

use crate::widgets::contact_form::form_lines;
use crate::widgets::palette::Palette;
use pf_protocol::{FormField, PortfolioContent, Section, SkillCategory, UiSnapshot};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use ratatui::Frame;

/// Laid-out page body.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub lines: Vec<Line<'static>>,
    anchors: [usize; 4],
}

impl Document {
    /// First line of `section`.
    pub fn anchor(&self, section: Section) -> usize {
        self.anchors[section_index(section)]
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn mark(&mut self, section: Section) {
        self.anchors[section_index(section)] = self.lines.len();
    }

    fn push(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }
}

fn section_index(section: Section) -> usize {
    match section {
        Section::Profile => 0,
        Section::Skills => 1,
        Section::Projects => 2,
        Section::Contact => 3,
    }
}

/// Lay out all four sections for a body `width` columns wide.
pub fn build_document(
    content: &PortfolioContent,
    snapshot: &UiSnapshot,
    focus: Option<FormField>,
    palette: &Palette,
    width: u16,
) -> Document {
    let width = usize::from(width).max(10);
    let mut doc = Document::default();

    doc.mark(Section::Profile);
    doc.push(Span::styled(content.profile.name.clone(), palette.heading()));
    doc.push(Span::styled(content.profile.headline.clone(), palette.accent()));
    for line in wrap(&content.profile.bio, width) {
        doc.push(line);
    }
    doc.blank();

    doc.mark(Section::Skills);
    section_heading(&mut doc, Section::Skills, palette);
    // The grid dims while a category is open.
    let card_style = if snapshot.selected_skill.is_some() {
        palette.muted()
    } else {
        palette.base()
    };
    for (i, category) in SkillCategory::ALL.into_iter().enumerate() {
        let Some(skill) = content.skill(category) else {
            continue;
        };
        doc.push(Line::from(vec![
            Span::styled(format!("[{}] ", i + 1), palette.accent()),
            Span::styled(category.title(), palette.heading()),
        ]));
        for line in wrap(&skill.skills.join(" · "), width.saturating_sub(4)) {
            doc.push(Span::styled(format!("    {line}"), card_style));
        }
    }
    doc.blank();

    doc.mark(Section::Projects);
    section_heading(&mut doc, Section::Projects, palette);
    for project in &content.projects {
        doc.push(Span::styled(project.title.clone(), palette.heading()));
        for line in wrap(&project.description, width) {
            doc.push(line);
        }
        if !project.technologies.is_empty() {
            doc.push(Span::styled(project.technologies.join(", "), palette.accent()));
        }
        doc.push(Span::styled(format!("Code: {}", project.repo), palette.muted()));
        if let Some(live) = &project.live {
            doc.push(Span::styled(format!("Live Demo: {live}"), palette.muted()));
        }
        doc.blank();
    }

    doc.mark(Section::Contact);
    section_heading(&mut doc, Section::Contact, palette);
    doc.lines.extend(form_lines(snapshot, focus, palette, width));

    doc
}

fn section_heading(doc: &mut Document, section: Section, palette: &Palette) {
    doc.push(Span::styled(section.title(), palette.heading()));
    doc.blank();
}

/// Render `doc` scrolled down by `top` lines.
pub fn render_document(
    frame: &mut Frame,
    area: Rect,
    doc: &Document,
    top: usize,
    palette: &Palette,
) {
    let block = Block::default().borders(Borders::NONE).style(palette.base());
    let scroll = u16::try_from(top).unwrap_or(u16::MAX);

    let paragraph = Paragraph::new(doc.lines.clone())
        .block(block)
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);

    let visible = usize::from(area.height);
    if doc.len() > visible {
        let mut scrollbar_state = ScrollbarState::default()
            .content_length(doc.len())
            .viewport_content_length(visible)
            .position(top);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));

        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

/// Greedy word wrap on whitespace.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
