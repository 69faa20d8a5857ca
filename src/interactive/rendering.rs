//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GameStatus, GuessResult, LetterMark, MAX_ATTEMPTS};
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

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MOTUS - Guess the Word")
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    if app.engine.status() == GameStatus::Idle {
        lines.push(Line::from("Choose a word length to begin."));
    } else {
        for result in app.engine.history() {
            lines.push(board_row(result));
        }

        // Current input row while guessing
        if app.input_mode == InputMode::Guessing {
            lines.push(input_row(app));
        }
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn board_row(result: &GuessResult) -> Line<'static> {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];

    for mark in result.marks() {
        let (text, style) = match mark {
            LetterMark::Correct(c) => (
                format!(" {} ", c.to_uppercase()),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            LetterMark::Present(c) => (
                format!(" {c} "),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ),
            LetterMark::Absent => (
                " · ".to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

fn input_row(app: &App) -> Line<'static> {
    let expected = app.engine.expected_len().unwrap_or(0);
    let mut spans: Vec<Span> = vec![Span::raw(" ")];

    let typed: Vec<char> = app.input_buffer.chars().collect();
    for i in 0..expected.max(typed.len()) {
        let text = typed
            .get(i)
            .map_or_else(|| " _ ".to_string(), |c| format!(" {} ", c.to_uppercase()));
        spans.push(Span::styled(
            text,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(5), // Session stats
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let attempts = app.engine.attempts();
    let ratio = f64::from(attempts) / f64::from(MAX_ATTEMPTS);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(if attempts >= MAX_ATTEMPTS - 2 {
            Color::Red
        } else {
            Color::Cyan
        }))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{attempts}/{MAX_ATTEMPTS}"));
    f.render_widget(gauge, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let played = app.stats.rounds_played;
    let won = app.stats.rounds_won;
    let rate = if played > 0 {
        (won as f64 / played as f64) * 100.0
    } else {
        0.0
    };

    let content = vec![
        Line::from(format!("Rounds played: {played}")),
        Line::from(format!("Rounds won:    {won}")),
        Line::from(format!("Win rate:      {rate:.0}%")),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(Span::styled(msg.text.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.input_mode {
        InputMode::LengthSelect => " Word length (5-9) ",
        InputMode::Guessing => " Your guess ",
        InputMode::RoundOver => " Round over ",
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = match app.input_mode {
        InputMode::LengthSelect => "Type a length and press Enter · q/Esc quit",
        InputMode::Guessing => "Type a word and press Enter · Esc quit",
        InputMode::RoundOver => "n new round · l new length · e definition · q quit",
    };

    let status = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
