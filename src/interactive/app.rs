//! TUI application state and logic

use crate::session::{
    CHANCES_RANGE, DEFAULT_CHANCES, FIFTY_FIFTY_MAX_CHANCES, GameSession, PowerUp, PowerUpOutcome,
    SessionConfig, ThreadRandom, WORD_LENGTH_RANGE,
};
use crate::wordbank::Theme;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Which screen is on display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Playing,
    Summary,
}

/// Fields of the setup form, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    Name,
    Theme,
    WordLength,
    Chances,
    Timed,
}

impl SetupField {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Theme,
            Self::Theme => Self::WordLength,
            Self::WordLength => Self::Chances,
            Self::Chances => Self::Timed,
            Self::Timed => Self::Name,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Timed,
            Self::Theme => Self::Name,
            Self::WordLength => Self::Theme,
            Self::Chances => Self::WordLength,
            Self::Timed => Self::Chances,
        }
    }
}

/// Player-edited settings before a round starts
#[derive(Debug, Clone)]
pub struct SetupForm {
    pub player_name: String,
    pub theme_index: usize,
    pub word_length: Option<u8>,
    pub chances: u8,
    pub timed: bool,
    pub field: SetupField,
}

impl SetupForm {
    #[must_use]
    pub fn new(theme_index: usize) -> Self {
        Self {
            player_name: String::new(),
            theme_index,
            word_length: None,
            chances: DEFAULT_CHANCES,
            timed: false,
            field: SetupField::Name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub session: GameSession<ThreadRandom>,
    pub themes: Vec<Theme>,
    pub screen: Screen,
    pub setup: SetupForm,
    pub messages: Vec<Message>,
    pub hint_shown: bool,
    pub should_quit: bool,
    last_second: Instant,
}

impl App {
    /// Create the app with the embedded themes, starting on the setup screen
    #[must_use]
    pub fn new(themes: Vec<Theme>, initial_theme: usize) -> Self {
        Self {
            session: GameSession::new(ThreadRandom),
            themes,
            screen: Screen::Setup,
            setup: SetupForm::new(initial_theme),
            messages: vec![Message {
                text: "Enter your name, pick a theme, press Enter to play.".to_string(),
                style: MessageStyle::Info,
            }],
            hint_shown: false,
            should_quit: false,
            last_second: Instant::now(),
        }
    }

    /// The theme currently selected in the form
    #[must_use]
    pub fn selected_theme(&self) -> &Theme {
        &self.themes[self.setup.theme_index]
    }

    /// Whether fifty-fifty is offered for the configured difficulty
    #[must_use]
    pub fn fifty_fifty_offered(&self) -> bool {
        self.session
            .state()
            .is_some_and(|s| s.max_wrong() <= FIFTY_FIFTY_MAX_CHANCES)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Validate the form and start a round
    ///
    /// An empty player name blocks the start; that check belongs to the
    /// front end, the core happily accepts any name.
    pub fn start_round(&mut self) {
        if self.setup.player_name.trim().is_empty() {
            self.add_message("Please enter your name!", MessageStyle::Error);
            return;
        }

        let mut config = SessionConfig::new(self.setup.player_name.trim());
        config.word_length = self.setup.word_length;
        config.chances = Some(self.setup.chances);
        config.timed = self.setup.timed;

        let theme = self.themes[self.setup.theme_index].clone();
        self.session.configure(&theme, &config);

        self.screen = Screen::Playing;
        self.hint_shown = false;
        self.messages.clear();
        self.last_second = Instant::now();
        let name = self.setup.player_name.trim().to_string();
        self.add_message(&format!("Good luck, {name}!"), MessageStyle::Info);
    }

    fn handle_guess(&mut self, letter: char) {
        let letter = letter.to_ascii_lowercase();
        if self
            .session
            .state()
            .is_some_and(|s| s.is_letter_used(letter))
        {
            self.add_message(&format!("'{letter}' was already played"), MessageStyle::Info);
            return;
        }

        let outcome = self.session.guess(letter);
        if outcome.hit {
            self.add_message(
                &format!("'{letter}' is in the word!"),
                MessageStyle::Success,
            );
        } else {
            self.add_message(&format!("No '{letter}' in the word"), MessageStyle::Error);
        }

        if outcome.round_ended {
            self.screen = Screen::Summary;
        }
    }

    fn activate_powerup(&mut self, kind: PowerUp) {
        match self.session.activate(kind) {
            PowerUpOutcome::Revealed { letter, guess } => {
                self.add_message(&format!("Revealed '{letter}'"), MessageStyle::Success);
                if guess.round_ended {
                    self.screen = Screen::Summary;
                }
            }
            PowerUpOutcome::WrongGuessRemoved { wrong_guesses } => {
                self.add_message(
                    &format!("Wrong guess taken back ({wrong_guesses} now)"),
                    MessageStyle::Success,
                );
            }
            PowerUpOutcome::LettersEliminated { letters } => {
                let gone: String = letters.iter().collect();
                self.add_message(&format!("Disabled: {gone}"), MessageStyle::Success);
            }
            PowerUpOutcome::Unavailable => {
                self.add_message("Power-up not available", MessageStyle::Info);
            }
        }
    }

    fn show_hint(&mut self) {
        if self.hint_shown {
            return;
        }
        if let Some(state) = self.session.state() {
            let hint = state.hint().to_string();
            self.hint_shown = true;
            self.add_message(&format!("Hint: {hint}"), MessageStyle::Info);
        }
    }

    /// Advance the countdown when a wall-clock second has passed
    fn drive_timer(&mut self) {
        if self.screen != Screen::Playing || !self.setup.timed {
            return;
        }

        if self.last_second.elapsed() >= Duration::from_secs(1) {
            self.last_second = Instant::now();
            if self.session.tick() {
                self.add_message("Time's up!", MessageStyle::Error);
                self.screen = Screen::Summary;
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Setup => self.handle_setup_key(key),
            Screen::Playing => self.handle_playing_key(key),
            Screen::Summary => self.handle_summary_key(key),
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down => self.setup.field = self.setup.field.next(),
            KeyCode::BackTab | KeyCode::Up => self.setup.field = self.setup.field.previous(),
            KeyCode::Enter => self.start_round(),
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::Char(c) => match self.setup.field {
                SetupField::Name => {
                    if self.setup.player_name.len() < 20 && !c.is_control() {
                        self.setup.player_name.push(c);
                    }
                }
                SetupField::Timed if c == ' ' => self.setup.timed = !self.setup.timed,
                _ => {}
            },
            KeyCode::Backspace => {
                if self.setup.field == SetupField::Name {
                    self.setup.player_name.pop();
                }
            }
            _ => {}
        }
    }

    fn adjust_field(&mut self, delta: i8) {
        match self.setup.field {
            SetupField::Name => {}
            SetupField::Theme => {
                let count = self.themes.len();
                self.setup.theme_index = if delta < 0 {
                    (self.setup.theme_index + count - 1) % count
                } else {
                    (self.setup.theme_index + 1) % count
                };
            }
            SetupField::WordLength => {
                // Cycle: any length, then 4 through 10
                let (min, max) = (*WORD_LENGTH_RANGE.start() as u8, *WORD_LENGTH_RANGE.end() as u8);
                self.setup.word_length = match (self.setup.word_length, delta < 0) {
                    (None, false) => Some(min),
                    (None, true) => Some(max),
                    (Some(len), false) if len >= max => None,
                    (Some(len), false) => Some(len + 1),
                    (Some(len), true) if len <= min => None,
                    (Some(len), true) => Some(len - 1),
                };
            }
            SetupField::Chances => {
                let (min, max) = (*CHANCES_RANGE.start(), *CHANCES_RANGE.end());
                let next = self.setup.chances.saturating_add_signed(delta);
                self.setup.chances = next.clamp(min, max);
            }
            SetupField::Timed => self.setup.timed = !self.setup.timed,
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.show_hint(),
            KeyCode::Char('1') => self.activate_powerup(PowerUp::Reveal),
            KeyCode::Char('2') => self.activate_powerup(PowerUp::RemoveWrong),
            KeyCode::Char('3') => self.activate_powerup(PowerUp::FiftyFifty),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.handle_guess(c),
            _ => {}
        }
    }

    fn handle_summary_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') | KeyCode::Enter => {
                // Back to settings; the word history survives the round
                self.screen = Screen::Setup;
                self.messages.clear();
                self.add_message(
                    "Tweak your settings and press Enter for another round.",
                    MessageStyle::Info,
                );
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Short poll so the countdown keeps moving without key events
        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        app.drive_timer();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank;

    fn test_app() -> App {
        App::new(wordbank::all(), 1) // animals
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn empty_name_blocks_start() {
        let mut app = test_app();
        app.start_round();

        assert_eq!(app.screen, Screen::Setup);
        assert!(!app.session.is_active());
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("enter your name"))
        );
    }

    #[test]
    fn valid_form_starts_playing() {
        let mut app = test_app();
        app.setup.player_name = "Ada".to_string();
        app.start_round();

        assert_eq!(app.screen, Screen::Playing);
        assert!(app.session.is_active());
    }

    #[test]
    fn guessing_through_keys_reaches_summary() {
        let mut app = test_app();
        app.setup.player_name = "Ada".to_string();
        app.setup.word_length = Some(4); // forces "wolf"
        app.start_round();

        for c in ['w', 'o', 'l', 'f'] {
            app.handle_key(key(KeyCode::Char(c)));
        }

        assert_eq!(app.screen, Screen::Summary);
        assert!(app.session.final_summary().unwrap().won);
    }

    #[test]
    fn field_navigation_wraps() {
        let mut form = SetupForm::new(0);
        for _ in 0..5 {
            form.field = form.field.next();
        }
        assert_eq!(form.field, SetupField::Name);
        assert_eq!(SetupField::Name.previous(), SetupField::Timed);
    }

    #[test]
    fn chances_adjustment_clamped() {
        let mut app = test_app();
        app.setup.field = SetupField::Chances;

        for _ in 0..20 {
            app.adjust_field(1);
        }
        assert_eq!(app.setup.chances, *CHANCES_RANGE.end());

        for _ in 0..20 {
            app.adjust_field(-1);
        }
        assert_eq!(app.setup.chances, *CHANCES_RANGE.start());
    }

    #[test]
    fn word_length_cycles_through_none() {
        let mut app = test_app();
        app.setup.field = SetupField::WordLength;
        assert_eq!(app.setup.word_length, None);

        app.adjust_field(1);
        assert_eq!(app.setup.word_length, Some(4));

        app.adjust_field(-1);
        assert_eq!(app.setup.word_length, None);

        app.adjust_field(-1);
        assert_eq!(app.setup.word_length, Some(10));

        app.adjust_field(1);
        assert_eq!(app.setup.word_length, None);
    }

    #[test]
    fn hint_is_one_shot() {
        let mut app = test_app();
        app.setup.player_name = "Ada".to_string();
        app.start_round();

        app.handle_key(key(KeyCode::Tab));
        let hints = app
            .messages
            .iter()
            .filter(|m| m.text.starts_with("Hint:"))
            .count();
        assert_eq!(hints, 1);

        app.handle_key(key(KeyCode::Tab));
        let hints_after = app
            .messages
            .iter()
            .filter(|m| m.text.starts_with("Hint:"))
            .count();
        assert_eq!(hints_after, 1);
    }

    #[test]
    fn summary_returns_to_setup() {
        let mut app = test_app();
        app.setup.player_name = "Ada".to_string();
        app.setup.word_length = Some(4);
        app.start_round();
        for c in ['w', 'o', 'l', 'f'] {
            app.handle_key(key(KeyCode::Char(c)));
        }

        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.screen, Screen::Setup);
        // Name survives for the next round
        assert_eq!(app.setup.player_name, "Ada");
    }
}
