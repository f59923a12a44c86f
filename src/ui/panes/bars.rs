//! Bar chart of the array at the current step

use crate::trace::{Phase, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

/// How a single bar should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    Idle,
    Compare,
    /// The tentative minimum of the running pass
    Minimum,
    Swap,
    Settled,
    Done,
}

impl BarRole {
    fn color(self) -> Color {
        match self {
            BarRole::Idle => DEFAULT_THEME.bar_idle,
            BarRole::Compare => DEFAULT_THEME.bar_compare,
            BarRole::Minimum => DEFAULT_THEME.bar_min,
            BarRole::Swap => DEFAULT_THEME.bar_swap,
            BarRole::Settled => DEFAULT_THEME.success,
            BarRole::Done => DEFAULT_THEME.bar_done,
        }
    }
}

/// The minimum marker wins over focus everywhere except the final step.
pub fn bar_role(step: &Step, index: usize) -> BarRole {
    if step.phase != Phase::Complete && step.tentative_min == Some(index) {
        return BarRole::Minimum;
    }
    if !step.is_focused(index) {
        return BarRole::Idle;
    }
    match step.phase {
        Phase::Init => BarRole::Idle,
        Phase::Comparing | Phase::FoundNewMin => BarRole::Compare,
        Phase::Swapping => BarRole::Swap,
        Phase::PassComplete => BarRole::Settled,
        Phase::Complete => BarRole::Done,
    }
}

/// Render the array pane. Bar heights are scaled against `max_value`.
pub fn render_bars_pane(frame: &mut Frame, area: Rect, step: &Step, max_value: i64) {
    let block = Block::default()
        .title(" Array ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let bars: Vec<Bar> = step
        .array
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let role = bar_role(step, i);
            let color = role.color();
            let label = if role == BarRole::Minimum {
                Line::styled(
                    "Min",
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )
            } else {
                Line::styled(i.to_string(), Style::default().fg(DEFAULT_THEME.comment))
            };

            Bar::default()
                .value(u64::try_from(value).unwrap_or(0))
                .text_value(value.to_string())
                .label(label)
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    // Fill the pane width, one column of gap between bars
    let count = bars.len().max(1) as u16;
    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width.saturating_sub(count - 1) / count).clamp(1, 9);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(u64::try_from(max_value).unwrap_or(1).max(1));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::generate;

    #[test]
    fn test_roles_follow_phase() {
        let trace = generate(&[3, 1, 2]);

        let seed = trace.get(1).unwrap();
        assert_eq!(bar_role(seed, 0), BarRole::Minimum);
        assert_eq!(bar_role(seed, 1), BarRole::Idle);

        let compare = trace.get(2).unwrap();
        assert_eq!(compare.phase, Phase::Comparing);
        assert_eq!(bar_role(compare, 1), BarRole::Compare);
        assert_eq!(bar_role(compare, 0), BarRole::Minimum);

        let swap = trace.iter().find(|s| s.phase == Phase::Swapping).unwrap();
        assert_eq!(bar_role(swap, 0), BarRole::Swap);
        assert_eq!(bar_role(swap, 1), BarRole::Swap);

        let settled = trace
            .iter()
            .find(|s| s.phase == Phase::PassComplete)
            .unwrap();
        assert_eq!(bar_role(settled, 0), BarRole::Settled);
        assert_eq!(bar_role(settled, 2), BarRole::Idle);
    }

    #[test]
    fn test_complete_has_no_min_marker() {
        let trace = generate(&[2, 1]);
        let last = trace.last();
        assert!((0..2).all(|i| bar_role(last, i) == BarRole::Done));
    }
}
