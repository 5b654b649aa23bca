use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::components::{centered_rect, fill_panel, render_field};
use crate::ui::forms::LoginField;
use crate::ui::App;

pub fn render_login(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let rect = centered_rect(48, 9, area);
    fill_panel(f, rect, palette);

    let block = Block::bordered()
        .title(" Sign in ")
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

    let form = &app.login_form;
    render_field(
        f,
        rows[1],
        palette,
        "Email",
        &form.email,
        form.focus == Some(LoginField::Email),
        false,
    );
    render_field(
        f,
        rows[3],
        palette,
        "Password",
        &form.password,
        form.focus == Some(LoginField::Password),
        true,
    );

    let hint = Line::from(vec![
        Span::styled(" No account? ", Style::default().fg(palette.text_dim)),
        Span::styled("Ctrl+N", Style::default().fg(palette.accent)),
        Span::styled(" to create one", Style::default().fg(palette.text_dim)),
    ]);
    f.render_widget(Paragraph::new(hint), rows[5]);
}
