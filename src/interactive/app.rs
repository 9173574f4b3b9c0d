//! TUI application state and logic

use crate::engine::{ConfigField, Game, GameSnapshot, GameStatus, SubmitOutcome};
use crate::stats::StatsStore;
use crate::words::WordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long a rejected submission keeps the active row shaking
pub const SHAKE_DURATION: Duration = Duration::from_millis(600);

/// Poll interval; bounds how stale the shake indicator can get
const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// Application state
pub struct App<W: WordSource, S: StatsStore> {
    pub game: Game<W, S>,
    pub snapshot: GameSnapshot,
    pub shake_until: Option<Instant>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
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

impl<W: WordSource, S: StatsStore> App<W, S> {
    #[must_use]
    pub fn new(game: Game<W, S>) -> Self {
        let snapshot = game.snapshot();
        Self {
            game,
            snapshot,
            shake_until: None,
            messages: vec![
                Message {
                    text: "Welcome! Type letters, Enter submits, Backspace deletes.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Arrows resize the grid: ↑/↓ attempts, ←/→ word length.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Re-read the engine state after an operation
    fn refresh(&mut self) {
        self.snapshot = self.game.snapshot();
    }

    /// True while the rejected-submission indicator is active
    #[must_use]
    pub fn shaking(&self) -> bool {
        self.shake_until.is_some_and(|until| Instant::now() < until)
    }

    /// Clear the transient shake once its interval has elapsed
    pub fn tick(&mut self) {
        if self.shake_until.is_some_and(|until| Instant::now() >= until) {
            self.shake_until = None;
        }
    }

    pub fn press_letter(&mut self, ch: char) {
        self.game.press(ch);
        self.refresh();
    }

    pub fn delete_letter(&mut self) {
        self.game.delete();
        self.refresh();
    }

    pub fn submit_row(&mut self) {
        match self.game.submit() {
            SubmitOutcome::Won => {
                let attempts = self.game.snapshot().evaluations.len();
                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "🎊 SOLVED! 🎊",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            SubmitOutcome::Lost => {
                let target = self.game.target_word();
                self.add_message(
                    &format!("Out of attempts! The word was {target}."),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            SubmitOutcome::Rejected => {
                self.shake_until = Some(Instant::now() + SHAKE_DURATION);
                self.add_message("Not enough letters!", MessageStyle::Error);
            }
            SubmitOutcome::Accepted | SubmitOutcome::Ignored => {}
        }
        self.refresh();
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        self.shake_until = None;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        self.refresh();
    }

    /// Resize the attempt count; out-of-range steps are silently refused
    pub fn adjust_attempts(&mut self, delta: i64) {
        let value = self.snapshot.config.max_attempts() as i64 + delta;
        self.game.set_config(ConfigField::MaxAttempts, value);
        self.refresh();
        self.announce_grid();
    }

    /// Resize the word length; out-of-range steps are silently refused
    pub fn adjust_word_length(&mut self, delta: i64) {
        let value = self.snapshot.config.word_length() as i64 + delta;
        self.game.set_config(ConfigField::WordLength, value);
        self.refresh();
        self.announce_grid();
    }

    fn announce_grid(&mut self) {
        let config = self.snapshot.config;
        self.add_message(
            &format!(
                "Grid: {} attempts × {} letters",
                config.max_attempts(),
                config.word_length()
            ),
            MessageStyle::Info,
        );
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
}

/// Run the TUI application
///
/// Acquires the terminal (raw mode, alternate screen) on entry and
/// guarantees restoration on exit, so a crashed game never leaves the
/// shell unusable.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource, S: StatsStore>(app: App<W, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, W: WordSource, S: StatsStore>(
    terminal: &mut Terminal<B>,
    mut app: App<W, S>,
) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match app.snapshot.status {
                    GameStatus::Playing => match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.new_game();
                        }
                        KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char(c) => {
                            app.press_letter(c);
                        }
                        KeyCode::Backspace => {
                            app.delete_letter();
                        }
                        KeyCode::Enter => {
                            app.submit_row();
                        }
                        KeyCode::Up => app.adjust_attempts(1),
                        KeyCode::Down => app.adjust_attempts(-1),
                        KeyCode::Right => app.adjust_word_length(1),
                        KeyCode::Left => app.adjust_word_length(-1),
                        _ => {}
                    },
                    GameStatus::Won | GameStatus::Lost => match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('q') | KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('n') => {
                            app.new_game();
                        }
                        _ => {
                            // After game end, ignore other keys
                        }
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameConfig;
    use crate::stats::MemoryStore;
    use crate::words::SampledSource;

    fn test_app() -> App<SampledSource, MemoryStore> {
        // A single-word source makes the hidden target deterministic
        let game = Game::new(
            GameConfig::default(),
            SampledSource::new(["crate"]),
            MemoryStore::new(),
        );
        App::new(game)
    }

    fn type_word(app: &mut App<SampledSource, MemoryStore>, word: &str) {
        for ch in word.chars() {
            app.press_letter(ch);
        }
    }

    #[test]
    fn snapshot_tracks_engine_after_each_operation() {
        let mut app = test_app();
        type_word(&mut app, "tra");

        assert_eq!(app.snapshot.cursor.position, 3);

        app.delete_letter();
        assert_eq!(app.snapshot.cursor.position, 2);
    }

    #[test]
    fn rejected_submission_starts_the_shake() {
        let mut app = test_app();
        type_word(&mut app, "tra");

        app.submit_row();

        assert!(app.shaking());
        assert_eq!(app.snapshot.cursor.position, 3);
    }

    #[test]
    fn tick_clears_an_expired_shake() {
        let mut app = test_app();
        app.shake_until = Some(Instant::now() - Duration::from_millis(1));

        app.tick();

        assert!(app.shake_until.is_none());
        assert!(!app.shaking());
    }

    #[test]
    fn winning_submission_updates_messages_and_status() {
        let mut app = test_app();
        type_word(&mut app, "crate");
        app.submit_row();

        assert_eq!(app.snapshot.status, GameStatus::Won);
        assert!(app.messages.iter().any(|m| m.text.contains("Press 'n'")));
    }

    #[test]
    fn new_game_clears_shake_and_board() {
        let mut app = test_app();
        type_word(&mut app, "tra");
        app.submit_row();

        app.new_game();

        assert!(!app.shaking());
        assert_eq!(app.snapshot.cursor.position, 0);
        assert_eq!(app.snapshot.status, GameStatus::Playing);
    }

    #[test]
    fn grid_adjustments_go_through_the_controller() {
        let mut app = test_app();

        app.adjust_attempts(1);
        assert_eq!(app.snapshot.config.max_attempts(), 7);

        // Stepping past a bound is refused
        app.adjust_word_length(4);
        assert_eq!(app.snapshot.config.word_length(), 5);
    }
}
