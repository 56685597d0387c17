//! TUI rendering with ratatui

use super::app::App;
use crate::core::candidates::CODE_SPACE;
use crate::game::SessionState;
use crate::output::Tone;
use crate::output::formatters::create_progress_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_history(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔐 CODEBREAKER - 4 distinct digits, 0 to 8")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();

    let items: Vec<ListItem> = if history.is_empty() {
        vec![ListItem::new("No guesses yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        history
            .iter()
            .enumerate()
            .map(|(i, (guess, score))| {
                let peg_style = if score.is_perfect() {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Yellow)
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:>2}. ", i + 1)),
                    Span::styled(
                        guess.to_string(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(score.pegs(), peg_style),
                    Span::styled(
                        format!("  {score}"),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(4), // Candidates
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.valid_attempts();
    let max = app.session.max_attempts().get();
    let percent = u16::try_from((used * 100) / max).unwrap_or(100).min(100);

    let color = if app.session.remaining() <= 1 {
        Color::Red
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{used}/{max} used"));

    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(format!(
            "{} of {CODE_SPACE} codes still possible",
            app.candidates_count
        )),
        Line::from(format!(
            "Information needed: {:.2} bits",
            (app.candidates_count.max(1) as f64).log2()
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.tone {
                Tone::Info => Style::default().fg(Color::White),
                Tone::Notice => Style::default().fg(Color::Yellow),
                Tone::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                Tone::Failure => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.session.state() {
        SessionState::AwaitingGuess => (
            format!(" Round {} | Enter: submit  Ctrl-D: give up ", app.session.round()),
            Color::Yellow,
        ),
        SessionState::Won => (
            " 🎉 CODE BROKEN! 🎉 | 'n' new game, 'q' quit ".to_string(),
            Color::Green,
        ),
        SessionState::AttemptsExhausted | SessionState::InputTerminated => (
            " Game over | 'n' new game, 'q' quit ".to_string(),
            Color::Red,
        ),
    };

    let input = Paragraph::new(format!("> {}", app.input_buffer))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let bar = create_progress_bar(
        app.session.valid_attempts(),
        app.session.max_attempts().get(),
        10,
    );
    let trials = Paragraph::new(format!("Trials left: {} {bar}", app.session.remaining()))
        .alignment(Alignment::Center);
    f.render_widget(trials, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let average_text = app
        .stats
        .average_attempts()
        .map_or_else(|| "Avg guesses: -".to_string(), |avg| format!("Avg guesses: {avg:.1}"));
    let average = Paragraph::new(average_text).alignment(Alignment::Center);
    f.render_widget(average, chunks[2]);

    let help_text = if app.session.is_finished() {
        "q: Quit | n: New Game"
    } else {
        "q: Quit | Enter: Submit | Bksp: Delete"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
