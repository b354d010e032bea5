use crate::app::{App, AppState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // question box
            Constraint::Length(1),  // status line
            Constraint::Min(0),     // answer area
        ])
        .split(f.area());

    render_question(f, app, chunks[0]);
    render_status(f, app, chunks[1]);
    render_answer(f, app, chunks[2]);
}

fn render_question(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.state {
        AppState::Loading => "Thinking...".to_string(),
        _ => format!("{}_", app.input),
    };

    let style = match app.state {
        AppState::Input => Style::default().fg(Color::Green),
        AppState::Loading => Style::default().fg(Color::Yellow),
        AppState::Failed => Style::default().fg(Color::Red),
    };

    let question = Paragraph::new(text)
        .style(style)
        .block(
            Block::default()
                .title("⚖️ Ask your legal question")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(question, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match (&app.state, &app.failure) {
        (AppState::Loading, _) => ("Consulting the legal knowledge base...".to_string(), Color::Yellow),
        (AppState::Failed, Some(msg)) => (format!("Request failed: {msg}"), Color::Red),
        _ => ("Ready".to_string(), Color::Gray),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    f.render_widget(status, area);
}

fn render_answer(f: &mut Frame, app: &App, area: Rect) {
    let text = if app.answer.is_empty() {
        Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(
                "💡 Type your question and press Enter",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Example: \"What are the penalties for phishing under the IT Act 2000?\"",
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Esc clears (or quits when empty), ↑↓ to scroll, Ctrl+C to quit",
                Style::default().fg(Color::Gray),
            )),
        ])
    } else {
        // Text::from keeps the answer's own line breaks
        Text::from(app.answer.clone())
    };

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title("🧾 Answer")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll_offset, 0));

    f.render_widget(paragraph, area);
}
