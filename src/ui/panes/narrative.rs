//! Narrative pane: what the current step does, in words

use crate::trace::narrative::phase_label;
use crate::trace::{Locale, Phase, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Init => DEFAULT_THEME.primary,
        Phase::Comparing => DEFAULT_THEME.bar_compare,
        Phase::FoundNewMin => DEFAULT_THEME.bar_min,
        Phase::Swapping => DEFAULT_THEME.bar_swap,
        Phase::PassComplete => DEFAULT_THEME.success,
        Phase::Complete => DEFAULT_THEME.bar_done,
    }
}

/// `arr = [5, 3, 8]`
fn format_array(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("arr = [{}]", items.join(", "))
}

pub fn render_narrative_pane(frame: &mut Frame, area: Rect, step: &Step, locale: Locale) {
    let block = Block::default()
        .title(" Explanation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let badge = Span::styled(
        format!(" {} ", phase_label(step.phase, locale)),
        Style::default()
            .bg(phase_color(step.phase))
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    );

    let mut lines = vec![
        Line::from(badge),
        Line::default(),
        Line::styled(
            step.narrative(locale),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Line::default(),
        Line::styled(
            format_array(&step.array),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ];

    if let Some(min) = step.tentative_min {
        lines.push(Line::from(vec![
            Span::styled("min_idx = ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                min.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.bar_min)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
