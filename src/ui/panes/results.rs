//! Allocation table pane
//!
//! One row per request: the request size, the serving partition's
//! remaining capacity (or `Not available`), and every partition's
//! capacity as of that request with the chosen cell highlighted. A final
//! highlighted row shows the remaining capacities after all requests.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

use crate::alloc::AllocationStep;
use crate::ui::theme::DEFAULT_THEME;

/// Render the allocation table pane.
pub fn render_results_pane(
    frame: &mut Frame,
    area: Rect,
    steps: &[AllocationStep],
    final_partitions: &[u32],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Allocation ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if steps.is_empty() {
        let placeholder = if final_partitions.is_empty() {
            "(no partitions)"
        } else {
            "(no requests)"
        };
        let paragraph = Paragraph::new(placeholder)
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));

    let mut all_items: Vec<ListItem> = Vec::with_capacity(steps.len() + 3);
    all_items.push(ListItem::new(header_line()));
    all_items.extend(steps.iter().map(|step| ListItem::new(step_line(step))));
    all_items.push(ListItem::new(""));
    all_items.push(ListItem::new(final_line(final_partitions)));

    // Clamp the scroll offset only if content exceeds the visible area.
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

fn header_line() -> Line<'static> {
    Line::from(Span::styled(
        format!(" {:<9}{:<14}{}", "Request", "Remaining", "Partitions"),
        Style::default().fg(DEFAULT_THEME.comment),
    ))
}

fn step_line(step: &AllocationStep) -> Line<'_> {
    let value_style = Style::default().fg(DEFAULT_THEME.fg);
    let chosen_style = Style::default()
        .bg(DEFAULT_THEME.success)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled(
        format!(" {:<9}", step.request),
        Style::default().fg(DEFAULT_THEME.secondary),
    )];

    match step.placement {
        Some(placement) => spans.push(Span::styled(
            format!("{:<14}", placement.remaining),
            value_style,
        )),
        None => spans.push(Span::styled(
            format!("{:<14}", "Not available"),
            Style::default().fg(DEFAULT_THEME.error),
        )),
    }

    let chosen = step.placement.map(|p| p.index);
    for (i, &capacity) in step.partitions.iter().enumerate() {
        let style = if chosen == Some(i) {
            chosen_style
        } else {
            value_style
        };
        spans.push(Span::styled(format!("{:<8}", capacity), style));
    }

    Line::from(spans)
}

fn final_line(final_partitions: &[u32]) -> Line<'_> {
    let mut spans = vec![Span::styled(
        format!(" {:<23}", "Remaining"),
        Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD),
    )];
    for &capacity in final_partitions {
        spans.push(Span::styled(
            format!("{:<8}", capacity),
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}
