use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::App;
use taskdeck_core::models::Timeframe;

/// Completion numbers for the selected window.
pub fn render_analytics(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let stats = app.stats();

    let sections = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Length(5),
        Constraint::Min(0),
    ])
    .split(area);

    // Window selector line
    let mut window_spans: Vec<Span> = vec![Span::styled(
        "  Window: ",
        Style::default().fg(palette.text_muted),
    )];
    for (i, timeframe) in Timeframe::ORDER.iter().enumerate() {
        let style = if *timeframe == app.timeframe {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_dim)
        };
        window_spans.push(Span::styled(timeframe.label(), style));
        if i + 1 < Timeframe::ORDER.len() {
            window_spans.push(Span::styled(" │ ", Style::default().fg(palette.border)));
        }
    }
    f.render_widget(Paragraph::new(Line::from(window_spans)), sections[0]);

    // Completion gauge
    let gauge_width = (area.width as usize).saturating_sub(12).min(40);
    let filled = gauge_width * stats.percent_complete as usize / 100;
    let mut gauge_lines: Vec<Line> = Vec::new();
    gauge_lines.push(Line::from(Span::styled(
        "  Completion",
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    )));
    gauge_lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("█".repeat(filled), Style::default().fg(palette.success)),
        Span::styled(
            "░".repeat(gauge_width.saturating_sub(filled)),
            Style::default().fg(palette.border),
        ),
        Span::styled(
            format!(" {}%", stats.percent_complete),
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(Paragraph::new(gauge_lines), sections[1]);

    // Counts table
    let mut count_lines: Vec<Line> = Vec::new();
    count_lines.push(Line::from(Span::styled(
        format!("  {:<12}{:>6}", "Tasks", "Count"),
        Style::default().fg(palette.text_muted),
    )));
    for (label, value, color) in [
        ("Created", stats.total, palette.text),
        ("Active", stats.active, palette.warning),
        ("Completed", stats.completed, palette.success),
    ] {
        count_lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<12}", label),
                Style::default().fg(palette.text),
            ),
            Span::styled(format!("{:>6}", value), Style::default().fg(color)),
        ]));
    }
    f.render_widget(Paragraph::new(count_lines), sections[2]);

    if stats.total == 0 {
        let note = Line::from(Span::styled(
            "  No tasks were created in this window.",
            Style::default().fg(palette.text_dim),
        ));
        f.render_widget(Paragraph::new(note), sections[3]);
    }
}
