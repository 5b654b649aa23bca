//! Shared render helpers used across views.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::app::App;
use crate::ui::notifications::NotificationLevel;
use crate::ui::theme::Palette;
use taskdeck_core::models::TabFilter;

/// Truncate a string to fit within a display width, adding ellipsis when cut.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target_width = max_width - 3;
    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > target_width {
            break;
        }
        result.push(c);
        width += char_width;
    }
    result.push_str("...");
    result
}

/// Keep the tail of a string that fits within a display width. Used for
/// input fields so the cursor end stays visible.
pub fn tail_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut width = 0;
    let mut chars: Vec<char> = Vec::new();
    for c in s.chars().rev() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > max_width {
            break;
        }
        chars.push(c);
        width += char_width;
    }
    chars.into_iter().rev().collect()
}

/// Centered rect for overlays, capped to the terminal size.
pub fn centered_rect(max_width: u16, max_height: u16, area: Rect) -> Rect {
    let width = max_width.min(area.width.saturating_sub(4));
    let height = max_height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Clear an overlay area and paint the panel background.
pub fn fill_panel(f: &mut Frame, area: Rect, palette: &Palette) {
    f.render_widget(Clear, area);
    let bg = Paragraph::new("").style(Style::default().bg(palette.bg_panel));
    f.render_widget(bg, area);
}

/// One line of tabs with per-tab counts, search indicator on the right.
pub fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let tasks = app.tasks.tasks();

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, tab) in TabFilter::ORDER.iter().enumerate() {
        let count = tasks.iter().filter(|t| tab.admits(t)).count();
        let text = format!("{} {} ({})", i + 1, tab.label(), count);
        let style = if *tab == app.tab {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_muted)
        };
        spans.push(Span::styled(text, style));
        if i + 1 < TabFilter::ORDER.len() {
            spans.push(Span::styled(" │ ", Style::default().fg(palette.border)));
        }
    }

    if app.searching || !app.search_query.is_empty() {
        let query = if app.searching {
            format!("  /{}█", app.search_query)
        } else {
            format!("  /{}", app.search_query)
        };
        spans.push(Span::styled(query, Style::default().fg(palette.warning)));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bg)),
        area,
    );
}

/// Bottom status line: notification or quit warning on the left, signed-in
/// user and theme on the right.
pub fn render_statusbar(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();

    let right_text = match app.session.profile() {
        Some(profile) => format!(
            " {} · {} ",
            profile.display_name(),
            app.prefs.display_mode().label()
        ),
        None => format!(" {} ", app.prefs.display_mode().label()),
    };
    let right_width = (right_text.width() + 1).min(area.width as usize) as u16;

    let chunks =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).split(area);

    let left = if app.pending_quit {
        Paragraph::new(" Press Ctrl+C again to quit").style(
            Style::default()
                .fg(palette.error)
                .bg(palette.bg_panel)
                .add_modifier(Modifier::BOLD),
        )
    } else if let Some(notification) = app.notifications.current() {
        let color = match notification.level {
            NotificationLevel::Info => palette.accent,
            NotificationLevel::Success => palette.success,
            NotificationLevel::Warning => palette.warning,
            NotificationLevel::Error => palette.error,
        };
        let available = (chunks[0].width as usize).saturating_sub(4);
        let message = truncate_with_ellipsis(&notification.message, available);
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} ", notification.level.icon()),
                Style::default().fg(color),
            ),
            Span::styled(message, Style::default().fg(color)),
        ]))
        .style(Style::default().bg(palette.bg_panel))
    } else {
        Paragraph::new("").style(Style::default().bg(palette.bg_panel))
    };
    f.render_widget(left, chunks[0]);

    let right = Paragraph::new(right_text)
        .style(Style::default().fg(palette.text_muted).bg(palette.bg_panel));
    f.render_widget(right, chunks[1]);
}

/// Context hint line above the statusbar.
pub fn render_hints(f: &mut Frame, area: Rect, palette: &Palette, hints: &[(&str, &str)]) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(palette.text_dim),
        ));
        if i + 1 < hints.len() {
            spans.push(Span::styled("  ·  ", Style::default().fg(palette.border)));
        }
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bg)),
        area,
    );
}

/// Labelled single-line input. Focused fields get an accent label and a
/// block cursor at the end of the text.
pub fn render_field(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    label: &str,
    value: &str,
    focused: bool,
    mask: bool,
) {
    let label_style = if focused {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text_muted)
    };
    let value_style = Style::default().fg(palette.text);

    let shown = if mask {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let label_text = format!(" {:<12} ", label);
    let available = (area.width as usize)
        .saturating_sub(label_text.width())
        .saturating_sub(2);
    let shown = tail_to_width(&shown, available);

    let mut spans = vec![
        Span::styled(label_text, label_style),
        Span::styled(shown, value_style),
    ];
    if focused {
        spans.push(Span::styled(" ", Style::default().bg(palette.accent)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
