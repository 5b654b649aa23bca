use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::components::{
    centered_rect, fill_panel, render_field, render_tab_bar, truncate_with_ellipsis,
};
use crate::ui::forms::{TaskField, TaskForm};
use crate::ui::theme::Palette;
use crate::ui::App;
use taskdeck_core::models::{TabFilter, Task};

pub fn render_tasks(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(area);

    render_tab_bar(f, rows[0], app);
    render_list(f, rows[2], app);
}

fn render_list(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let visible = app.visible_tasks();

    if visible.is_empty() {
        let message = empty_message(app);
        let line = Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(palette.text_muted),
        ));
        f.render_widget(Paragraph::new(line), area);
        return;
    }

    // Keep the selection on screen; once it passes the bottom the window
    // slides down with it.
    let height = area.height as usize;
    if height == 0 {
        return;
    }
    let offset = app.selected.saturating_sub(height.saturating_sub(1));

    for (row, (index, task)) in visible
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .enumerate()
    {
        let line_area = Rect::new(area.x, area.y + row as u16, area.width, 1);
        render_task_row(f, line_area, palette, task, index == app.selected);
    }
}

fn render_task_row(f: &mut Frame, area: Rect, palette: &Palette, task: &Task, selected: bool) {
    if selected {
        let bg = Paragraph::new("").style(Style::default().bg(palette.bg_selected));
        f.render_widget(bg, area);
    }
    let row_bg = if selected {
        Style::default().bg(palette.bg_selected)
    } else {
        Style::default()
    };

    let (checkbox, checkbox_style) = if task.completed {
        ("[x]", row_bg.fg(palette.success))
    } else {
        ("[ ]", row_bg.fg(palette.text_muted))
    };

    let mut title_style = row_bg.fg(palette.text);
    if task.completed {
        title_style = title_style
            .fg(palette.text_dim)
            .add_modifier(Modifier::CROSSED_OUT);
    }
    if selected {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let date = task.created_at.format("%b %e").to_string();
    let date_width = date.width() + 2;

    let mut used = 2 + checkbox.len() + 1;
    let title_max = (area.width as usize)
        .saturating_sub(used + date_width)
        .min(48);
    let title = truncate_with_ellipsis(&task.title, title_max);
    used += title.width();

    let mut spans = vec![
        Span::styled(format!("  {} ", checkbox), checkbox_style),
        Span::styled(title, title_style),
    ];

    if task.has_image() {
        let marker = " [img]";
        spans.push(Span::styled(marker, row_bg.fg(palette.accent)));
        used += marker.len();
    }

    if let Some(description) = &task.description {
        let room = (area.width as usize).saturating_sub(used + date_width + 3);
        if room > 4 {
            let text = truncate_with_ellipsis(description, room);
            used += text.width() + 3;
            spans.push(Span::styled(
                format!(" · {}", text),
                row_bg.fg(palette.text_muted),
            ));
        }
    }

    let padding = (area.width as usize).saturating_sub(used + date_width);
    spans.push(Span::styled(" ".repeat(padding), row_bg));
    spans.push(Span::styled(
        format!("{}  ", date),
        row_bg.fg(palette.text_dim),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn empty_message(app: &App) -> String {
    if app.loading_tasks {
        return "Loading tasks...".to_string();
    }
    if !app.search_query.is_empty() {
        return format!("No tasks match \"{}\"", app.search_query);
    }
    match app.tab {
        TabFilter::All => "No tasks yet. Press a to add your first.".to_string(),
        TabFilter::Active => "No active tasks.".to_string(),
        TabFilter::Completed => "Nothing completed yet.".to_string(),
    }
}

/// Create/edit overlay, drawn over whatever the tasks view shows.
pub fn render_task_form(f: &mut Frame, app: &App, form: &TaskForm, area: Rect) {
    let palette = app.palette();
    let height = if form.is_editing() { 9 } else { 11 };
    let rect = centered_rect(58, height, area);
    fill_panel(f, rect, palette);

    let block = Block::bordered()
        .title(format!(" {} ", form.title_label()))
        .border_style(Style::default().fg(palette.border_active))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(inner);

    render_field(
        f,
        rows[1],
        palette,
        "Title",
        &form.title,
        form.focus == TaskField::Title,
        false,
    );
    render_field(
        f,
        rows[3],
        palette,
        "Description",
        &form.description,
        form.focus == TaskField::Description,
        false,
    );
    if !form.is_editing() {
        render_field(
            f,
            rows[5],
            palette,
            "Image path",
            &form.image_path,
            form.focus == TaskField::Image,
            false,
        );
    }
}
