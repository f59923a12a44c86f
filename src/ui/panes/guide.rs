//! Guide pane: a short description of selection sort with its cost and stability

use crate::trace::narrative::guide;
use crate::trace::Locale;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub fn render_guide_pane(frame: &mut Frame, area: Rect, locale: Locale) {
    let guide = guide(locale);

    let block = Block::default()
        .title(" Guide ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let lines = vec![
        Line::styled(
            guide.title,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(guide.summary, Style::default().fg(DEFAULT_THEME.fg)),
        Line::from(vec![
            Span::styled("Complexity ", label),
            Span::styled(
                guide.complexity,
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Stability ", label),
            Span::styled(guide.stability, Style::default().fg(DEFAULT_THEME.fg)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
