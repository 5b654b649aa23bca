use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::components::{centered_rect, fill_panel, render_field};
use crate::ui::forms::ProfileField;
use crate::ui::App;

pub fn render_profile(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let rect = centered_rect(56, 13, area);
    fill_panel(f, rect, palette);

    let block = Block::bordered()
        .title(" Profile ")
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
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(inner);

    let form = &app.profile_form;
    render_field(
        f,
        rows[1],
        palette,
        "Username",
        &form.username,
        form.focus == Some(ProfileField::Username),
        false,
    );
    render_field(
        f,
        rows[3],
        palette,
        "Email",
        &form.email,
        form.focus == Some(ProfileField::Email),
        false,
    );
    render_field(
        f,
        rows[5],
        palette,
        "New password",
        &form.password,
        form.focus == Some(ProfileField::Password),
        true,
    );
    render_field(
        f,
        rows[7],
        palette,
        "Confirm",
        &form.confirm,
        form.focus == Some(ProfileField::Confirm),
        true,
    );

    let hint = Line::from(Span::styled(
        " Leave the password blank to keep the current one",
        Style::default().fg(palette.text_dim),
    ));
    f.render_widget(Paragraph::new(hint), rows[9]);
}
