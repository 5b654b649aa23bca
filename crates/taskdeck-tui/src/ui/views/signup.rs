use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::components::{centered_rect, fill_panel, render_field};
use crate::ui::forms::SignupField;
use crate::ui::App;
use taskdeck_core::validate::{PASSWORD_MIN_LEN, PASSWORD_SPECIAL_CHARS};

pub fn render_signup(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let rect = centered_rect(56, 13, area);
    fill_panel(f, rect, palette);

    let block = Block::bordered()
        .title(" Create account ")
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

    let form = &app.signup_form;
    render_field(
        f,
        rows[1],
        palette,
        "Username",
        &form.username,
        form.focus == Some(SignupField::Username),
        false,
    );
    render_field(
        f,
        rows[3],
        palette,
        "Email",
        &form.email,
        form.focus == Some(SignupField::Email),
        false,
    );
    render_field(
        f,
        rows[5],
        palette,
        "Password",
        &form.password,
        form.focus == Some(SignupField::Password),
        true,
    );
    render_field(
        f,
        rows[7],
        palette,
        "Confirm",
        &form.confirm,
        form.focus == Some(SignupField::Confirm),
        true,
    );

    let rules = Line::from(Span::styled(
        format!(
            " Password: {}+ chars, a number, one of {}",
            PASSWORD_MIN_LEN, PASSWORD_SPECIAL_CHARS
        ),
        Style::default().fg(palette.text_dim),
    ));
    f.render_widget(Paragraph::new(rules), rows[9]);
}
