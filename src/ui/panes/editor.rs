//! Data entry popup

use crate::input::Bounds;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Text being typed in and the last validation error, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataEditor {
    pub buffer: String,
    pub error: Option<String>,
}

impl DataEditor {
    pub fn new(buffer: String) -> Self {
        DataEditor {
            buffer,
            error: None,
        }
    }
}

/// A rect of `width` x `height` centered horizontally near the bottom of `area`
fn popup_area(area: Rect, height: u16) -> Rect {
    let width = area.width.saturating_sub(4).min(72);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + area.height.saturating_sub(height + 2),
        width,
        height,
    }
}

pub fn render_editor_popup(frame: &mut Frame, area: Rect, editor: &DataEditor, bounds: &Bounds) {
    let popup = popup_area(area, 6);

    let block = Block::default()
        .title(format!(
            " Data: {} numbers ({}-{}), comma separated ",
            bounds.len, bounds.min, bounds.max
        ))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let mut lines = vec![Line::from(vec![
        Span::styled("> ", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(editor.buffer.as_str(), Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled("▏", Style::default().fg(DEFAULT_THEME.secondary)),
    ])];

    if let Some(error) = &editor.error {
        lines.push(Line::default());
        lines.push(Line::styled(
            error.as_str(),
            Style::default().fg(DEFAULT_THEME.error),
        ));
    }

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        popup,
    );
}
