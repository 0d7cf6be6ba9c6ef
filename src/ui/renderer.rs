use crate::api::InventoryApi;
use crate::config::Config;
use crate::logger::Logger;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;
use tokio::time::Duration;

/// Set up the terminal, run the event loop and restore the terminal afterwards
pub async fn run_app(config: &Config, api: Arc<dyn InventoryApi>, logger: Logger) -> anyhow::Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    if config.ui.mouse_enabled {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(api, config.api.base_url.clone(), logger);
    let mut event_handler = EventHandler::new(Duration::from_millis(config.ui.tick_rate_ms));

    app.start();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;
        match event {
            EventType::Key(_) | EventType::Mouse(_) | EventType::Resize(_, _) => {
                app.handle_event(event);
                needs_render = true;
            }
            EventType::Tick => {
                // Finished tasks are only cleaned up while handling the tick
                let busy = app.active_task_count() > 0;
                app.handle_event(EventType::Tick);
                needs_render = busy;
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
