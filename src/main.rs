use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use law_aid::agent::AgentClient;
use law_aid::app::{App, AppState};
use law_aid::{config, log, ui};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = config::load_config()?;
    log::log_info(&format!("using agent at {}", cfg.backend_url));
    let agent = AgentClient::new(cfg.backend_url);

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = run_app(&mut terminal, &mut app, &agent).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    agent: &AgentClient,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(());
            }

            match key.code {
                KeyCode::Up => {
                    app.scroll_up();
                }
                KeyCode::Down => {
                    app.scroll_down();
                }
                KeyCode::Char(c) if !matches!(app.state, AppState::Loading) => {
                    app.push_char(c);
                }
                KeyCode::Backspace if !matches!(app.state, AppState::Loading) => {
                    app.pop_char();
                }
                KeyCode::Enter if app.can_submit() => {
                    let question = app.input.clone();
                    app.set_loading();
                    terminal.draw(|f| ui::render(f, app))?;

                    log::log_info(&format!("asked: {}", question));
                    match agent.ask(&question).await {
                        Ok(text) => {
                            app.set_answer(text);
                        }
                        Err(e) => {
                            log::log_error(&format!("ask failed: {e:#}"));
                            app.set_failure(format!("{e:#}"));
                        }
                    }
                }
                KeyCode::Esc => {
                    if app.input.is_empty() {
                        return Ok(());
                    }
                    app.clear_input();
                }
                _ => {}
            }
        }
    }
}
