use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;

use crate::actions::{self, ApiEvent};
use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, InputMode, Tui};

pub(crate) async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    let (api_tx, mut api_rx) = tokio::sync::mpsc::channel::<ApiEvent>(32);
    app.set_api_tx(api_tx);

    if app.session.is_authenticated() {
        actions::start_load_tasks(app);
    }

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                if app.pending_quit {
                                    app.quit();
                                } else {
                                    app.pending_quit = true;
                                }
                            } else {
                                app.pending_quit = false;
                                handle_key(app, key);
                            }
                        }
                        Event::Paste(text) => {
                            if app.input_mode == InputMode::Editing {
                                for c in text.chars().filter(|c| !c.is_control()) {
                                    app.enter_char(c);
                                }
                            }
                        }
                        _ => {}
                    }
                }
            }

            _ = tick_interval.tick() => {
                app.tick();
            }

            Some(event) = api_rx.recv() => {
                actions::handle_api_event(app, event);
            }
        }
    }
    Ok(())
}
