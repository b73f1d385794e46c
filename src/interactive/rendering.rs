//! TUI rendering with ratatui
//!
//! Draws the guessing grid, the on-screen keyboard, and the status bar from
//! the game state. Render-only: nothing here mutates the game.

use super::app::{App, NoticeStyle};
use crate::core::{GamePhase, LetterStatus, MAX_ATTEMPTS, WORD_LEN};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    if let GamePhase::Failed(message) = app.game().phase() {
        render_fatal(f, message, f.area());
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Guess grid
            Constraint::Length(5),  // On-screen keyboard
            Constraint::Length(3),  // Notice area
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_notice(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

/// Full-screen terminal state for a failed word-list load
fn render_fatal(f: &mut Frame, message: &str, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "Unable to start the game",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'q' to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Red)),
    );
    f.render_widget(paragraph, area);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE - six tries to find the word")
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

fn tile_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Typing => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Empty => Style::default().fg(Color::DarkGray),
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(2 * MAX_ATTEMPTS);

    for row in 0..MAX_ATTEMPTS {
        let mut spans = Vec::with_capacity(2 * WORD_LEN);

        for col in 0..WORD_LEN {
            let tile = app.game().tile(row, col);
            let text = match tile.letter {
                Some(letter) => format!(" {letter} "),
                None => " · ".to_string(),
            };

            spans.push(Span::styled(text, tile_style(tile.status)));
            if col + 1 < WORD_LEN {
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn key_style(status: Option<LetterStatus>) -> Style {
    match status {
        Some(LetterStatus::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(LetterStatus::Present) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(LetterStatus::Absent) => Style::default().fg(Color::DarkGray),
        _ => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    const ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

    let keyboard = app.game().keyboard();
    let lines: Vec<Line> = ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| {
                    Span::styled(format!(" {letter} "), key_style(keyboard.status(letter)))
                })
                .collect();
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard_widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard_widget, area);
}

fn render_notice(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match app.notice() {
        Some(notice) => {
            let color = match notice.style {
                NoticeStyle::Info => Color::White,
                NoticeStyle::Success => Color::Green,
                NoticeStyle::Error => Color::Red,
            };
            (notice.text.clone(), color)
        }
        None => match app.game().phase() {
            GamePhase::Playing => (
                "Type a five-letter word and press Enter".to_string(),
                Color::DarkGray,
            ),
            _ => (String::new(), Color::White),
        },
    };

    let notice = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(notice, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(area);

    let attempt_text = match app.game().phase() {
        GamePhase::Playing => format!(
            "Attempt {}/{MAX_ATTEMPTS}",
            app.game().attempt_index() + 1
        ),
        GamePhase::Won => "Solved!".to_string(),
        GamePhase::Lost => "Out of guesses".to_string(),
        _ => String::new(),
    };
    let attempt = Paragraph::new(attempt_text).alignment(Alignment::Center);
    f.render_widget(attempt, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.game().phase() {
        GamePhase::Playing => "Enter: Submit | Backspace: Delete | Esc: Quit",
        GamePhase::Won | GamePhase::Lost => "n: New Game | q: Quit",
        _ => "q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
