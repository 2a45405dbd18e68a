//! TUI rendering with ratatui
//!
//! Screens for setup, play and the end-of-round summary.

use super::app::{App, MessageStyle, Screen, SetupField};
use crate::output::formatters::{gallows, masked_word};
use crate::session::{AccuracyTier, PowerUp, SessionState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    match app.screen {
        Screen::Setup => render_setup(f, app),
        Screen::Playing => render_game(f, app),
        Screen::Summary => render_summary(f, app),
    }
}

fn render_header(f: &mut Frame, area: Rect, title: &str) {
    let header = Paragraph::new(title)
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

// ---------- Setup screen ----------

fn render_setup(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Form
            Constraint::Length(7),  // Messages
            Constraint::Length(3),  // Help
        ])
        .split(f.area());

    render_header(f, chunks[0], "🎪 HANGMAN ARCADE - Game Setup");
    render_setup_form(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);

    let help = Paragraph::new("Tab/↓: next field | ←/→: change | Enter: start | Esc: quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

fn form_line<'a>(label: &'a str, value: String, selected: bool) -> Line<'a> {
    let marker = if selected { "▶ " } else { "  " };
    let style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(format!("{label:<14}"), style),
        Span::styled(value, style),
    ])
}

fn render_setup_form(f: &mut Frame, app: &App, area: Rect) {
    let name_value = if app.setup.player_name.is_empty() {
        "_".to_string()
    } else {
        format!("{}_", app.setup.player_name)
    };
    let length_value = app
        .setup
        .word_length
        .map_or_else(|| "any".to_string(), |len| len.to_string());
    let timed_value = if app.setup.timed {
        "on (90s)".to_string()
    } else {
        "off".to_string()
    };

    let field = app.setup.field;
    let content = vec![
        Line::from(""),
        form_line("Player name:", name_value, field == SetupField::Name),
        Line::from(""),
        form_line(
            "Theme:",
            format!("< {} >", app.selected_theme().name()),
            field == SetupField::Theme,
        ),
        Line::from(""),
        form_line("Word length:", length_value, field == SetupField::WordLength),
        Line::from(""),
        form_line(
            "Chances:",
            app.setup.chances.to_string(),
            field == SetupField::Chances,
        ),
        Line::from(""),
        form_line("Timed mode:", timed_value, field == SetupField::Timed),
    ];

    let form = Paragraph::new(content).block(
        Block::default()
            .title(" Settings ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(form, area);
}

// ---------- Playing screen ----------

fn render_game(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(4), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    let title = format!(
        "🎪 HANGMAN ARCADE - Good luck, {}!",
        app.session
            .state()
            .map_or("player", SessionState::player_name)
    );
    render_header(f, chunks[0], &title);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Gallows and word
            Constraint::Percentage(45), // Round info
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let Some(state) = app.session.state() else {
        return;
    };

    let mut lines: Vec<Line> = gallows(state.wrong_guesses(), state.max_wrong())
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();

    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            masked_word(&state.letter_slots()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );

    let board = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", app.selected_theme().name()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Accuracy gauge
            Constraint::Length(4), // Round status
            Constraint::Length(5), // Power-ups
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_accuracy_gauge(f, app, chunks[0]);
    render_round_status(f, app, chunks[1]);
    render_powerups(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_accuracy_gauge(f: &mut Frame, app: &App, area: Rect) {
    let accuracy = app.session.accuracy();
    let color = match AccuracyTier::from_percent(accuracy) {
        AccuracyTier::Low => Color::Red,
        AccuracyTier::Medium => Color::Yellow,
        AccuracyTier::High => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Accuracy ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(accuracy.clamp(0.0, 100.0) as u16)
        .label(format!("{accuracy:.0}%"));
    f.render_widget(gauge, area);
}

fn render_round_status(f: &mut Frame, app: &App, area: Rect) {
    let Some(state) = app.session.state() else {
        return;
    };

    let mut lines = vec![Line::from(format!(
        "Wrong guesses: {} / {}",
        state.wrong_guesses(),
        state.max_wrong()
    ))];

    if let Some(seconds) = app.session.remaining_seconds() {
        let style = if seconds <= 10 {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(
            format!("Time left: {seconds}s"),
            style,
        )));
    }

    let status = Paragraph::new(lines).block(
        Block::default()
            .title(" Round ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(status, area);
}

fn powerup_line(key: char, label: &str, used: bool, offered: bool) -> Line<'_> {
    let (status, style) = if !offered {
        ("locked", Style::default().fg(Color::DarkGray))
    } else if used {
        ("used", Style::default().fg(Color::DarkGray))
    } else {
        ("ready", Style::default().fg(Color::Green))
    };

    Line::from(vec![
        Span::styled(format!(" {key} "), Style::default().fg(Color::Cyan)),
        Span::raw(format!("{label:<18}")),
        Span::styled(status, style),
    ])
}

fn render_powerups(f: &mut Frame, app: &App, area: Rect) {
    let ledger = app.session.powerups();
    let lines = vec![
        powerup_line('1', "Reveal letter", ledger.is_used(PowerUp::Reveal), true),
        powerup_line(
            '2',
            "Remove wrong",
            ledger.is_used(PowerUp::RemoveWrong),
            true,
        ),
        powerup_line(
            '3',
            "Fifty-fifty",
            ledger.is_used(PowerUp::FiftyFifty),
            app.fifty_fifty_offered(),
        ),
    ];

    let powerups = Paragraph::new(lines).block(
        Block::default()
            .title(" Power-ups ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(powerups, area);
}

fn letter_span(letter: char, state: Option<&SessionState>) -> Span<'static> {
    let style = state.map_or_else(Style::default, |s| {
        if s.correct_letters().contains(&letter) {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else if s.wrong_letters().contains(&letter) {
            Style::default().fg(Color::Red)
        } else if s.eliminated_letters().contains(&letter) {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White)
        }
    });

    Span::styled(format!("{} ", letter.to_ascii_uppercase()), style)
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let state = app.session.state();

    let rows: [Vec<char>; 2] = [('a'..='m').collect(), ('n'..='z').collect()];
    let lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|&c| letter_span(c, state))
                    .collect::<Vec<_>>(),
            )
            .alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(5)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = if app.screen == Screen::Playing {
        "a-z: guess | 1/2/3: power-ups | Tab: hint | Esc: quit"
    } else {
        "Enter/n: play again | q: quit"
    };

    let theme_text = format!("Theme: {}", app.selected_theme().name());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let theme = Paragraph::new(theme_text).alignment(Alignment::Center);
    f.render_widget(theme, chunks[0]);

    let help = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

// ---------- Summary screen ----------

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}

fn render_summary(f: &mut Frame, app: &App) {
    let Some(summary) = app.session.final_summary() else {
        return;
    };

    let area = centered_rect(54, 12, f.area());

    let (title, title_color) = if summary.won {
        (format!("🎉 Congratulations, {}! 🎉", summary.player_name), Color::Green)
    } else {
        (format!("💀 Game Over, {}! 💀", summary.player_name), Color::Red)
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];

    if summary.won {
        lines.push(Line::from("You guessed the word!").alignment(Alignment::Center));
    } else {
        lines.push(
            Line::from(format!("The word was: \"{}\"", summary.word.to_uppercase()))
                .alignment(Alignment::Center),
        );
        lines.push(Line::from(format!("Meaning: {}", summary.hint)).alignment(Alignment::Center));
    }

    lines.push(Line::from(""));
    lines.push(
        Line::from(format!("🎯 Your Final Accuracy: {:.1}%", summary.accuracy))
            .alignment(Alignment::Center),
    );
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            "Enter/n: play again | q: quit",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    );

    let popup = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Round Over ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(title_color)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(popup, area);
}
