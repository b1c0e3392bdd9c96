//! Input pane: partition/request text fields and the policy selector

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::alloc::FitPolicy;
use crate::ui::app::FocusedControl;
use crate::ui::textfield::TextField;
use crate::ui::theme::DEFAULT_THEME;

/// Render the input pane: three labelled rows, one per control.
pub fn render_controls_pane(
    frame: &mut Frame,
    area: Rect,
    partitions: &TextField,
    requests: &TextField,
    policy: FitPolicy,
    focus: FocusedControl,
) {
    let is_focused = focus != FocusedControl::Results;
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Input ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines = vec![
        field_row(
            " Memory partitions  ",
            partitions,
            focus == FocusedControl::Partitions,
        ),
        field_row(
            " Request sizes      ",
            requests,
            focus == FocusedControl::Requests,
        ),
        policy_row(policy, focus == FocusedControl::Policy),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn label_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

fn field_row<'a>(label: &'static str, field: &'a TextField, is_focused: bool) -> Line<'a> {
    let mut spans = vec![Span::styled(label, label_style(is_focused))];
    spans.extend(field.spans(is_focused));
    Line::from(spans)
}

fn policy_row(selected: FitPolicy, is_focused: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(" Algorithm          ", label_style(is_focused))];

    for policy in FitPolicy::ALL {
        let (marker, style) = if policy == selected {
            (
                "\u{25cf} ", // ●
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                "\u{25cb} ", // ○
                Style::default().fg(DEFAULT_THEME.comment),
            )
        };
        spans.push(Span::styled(marker, style));
        spans.push(Span::styled(policy.label(), style));
        spans.push(Span::raw("   "));
    }

    Line::from(spans)
}
