//! TUI application state and logic

use crate::core::{WORD_LENGTH, Word};
use crate::session::{GameSession, GameState, GuessOutcome, GuessSource, SessionError};
use crate::solver::score_guess;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info, warn};

/// Messages kept on screen
const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App<R: Rng = StdRng> {
    pub session: GameSession<R>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub suggestion: Option<Suggestion>,
    /// Checkpoint highlighted in the history panel
    pub selected_checkpoint: usize,
    pub stats: Statistics,
    pub should_quit: bool,
    opening: Option<Word>,
    game_recorded: bool,
}

/// Optimizer hint for the current position
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub word: Word,
    pub expected_remaining: f64,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by guesses used; index 0 is unused
    pub guess_distribution: [usize; 7],
}

impl<R: Rng> App<R> {
    /// Wrap a session and start a random game
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot start a game.
    pub fn new(mut session: GameSession<R>) -> Result<Self, SessionError> {
        session.reset(None)?;

        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            suggestion: None,
            selected_checkpoint: 0,
            stats: Statistics::default(),
            should_quit: false,
            opening: None,
            game_recorded: false,
        };
        app.add_message("Welcome! Type a word and press Enter.", MessageStyle::Info);
        app.add_message(
            "Tab: hint | Ctrl-G: computer guess | Ctrl-U: undo",
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('g') => self.computer_guess(),
                KeyCode::Char('u') => self.undo_to_selected(),
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('r') => self.toggle_answer(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.type_char(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_guess(),
            KeyCode::Tab => self.hint(),
            KeyCode::Up => self.select_checkpoint(self.selected_checkpoint.saturating_sub(1)),
            KeyCode::Down => self.select_checkpoint(self.selected_checkpoint + 1),
            _ => {}
        }
    }

    pub fn type_char(&mut self, c: char) {
        if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    /// Submit the typed word as a player guess
    pub fn submit_guess(&mut self) {
        if self.input_buffer.len() != WORD_LENGTH {
            self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
            return;
        }

        let word = std::mem::take(&mut self.input_buffer);
        match self.session.guess(&word, GuessSource::User) {
            Ok(outcome) => self.after_guess(&outcome),
            Err(err) => {
                // Keep the word so it can be corrected
                self.input_buffer = word;
                self.report(&err);
            }
        }
    }

    /// Let the optimizer play the next guess
    pub fn computer_guess(&mut self) {
        let result = self.next_suggestion().and_then(|suggestion| {
            self.session
                .guess(suggestion.word.text(), GuessSource::Solver)
        });

        match result {
            Ok(outcome) => {
                self.input_buffer.clear();
                self.after_guess(&outcome);
            }
            Err(err) => self.report(&err),
        }
    }

    /// Show the optimizer's pick without playing it
    pub fn hint(&mut self) {
        if self.session.state().is_terminal() {
            self.add_message("Game is over. Ctrl-N for a new game.", MessageStyle::Info);
            return;
        }

        match self.next_suggestion() {
            Ok(suggestion) => {
                self.add_message(
                    &format!(
                        "Hint: {} ({:.1} expected remaining)",
                        suggestion.word, suggestion.expected_remaining
                    ),
                    MessageStyle::Info,
                );
                self.suggestion = Some(suggestion);
            }
            Err(err) => self.report(&err),
        }
    }

    /// Rewind to the highlighted checkpoint
    pub fn undo_to_selected(&mut self) {
        let index = self.selected_checkpoint;
        match self.session.undo_to(index) {
            Ok(()) => {
                self.suggestion = None;
                self.selected_checkpoint = self.session.guess_number();
                self.add_message(&format!("Back to guess {index}"), MessageStyle::Info);
            }
            Err(err) => self.report(&err),
        }
    }

    pub fn new_game(&mut self) {
        if let Err(err) = self.session.reset(None) {
            self.report(&err);
            return;
        }

        self.input_buffer.clear();
        self.suggestion = None;
        self.selected_checkpoint = 0;
        self.game_recorded = false;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn toggle_answer(&mut self) {
        let visible = self.session.toggle_answer_visibility();
        let text = match (visible, self.session.target()) {
            (true, Some(target)) => format!("Answer: {target}"),
            _ => "Answer hidden".to_string(),
        };
        self.add_message(&text, MessageStyle::Info);
    }

    /// Highlight a checkpoint, clamped to the history
    pub fn select_checkpoint(&mut self, index: usize) {
        self.selected_checkpoint = index.min(self.session.guess_number());
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn next_suggestion(&mut self) -> Result<Suggestion, SessionError> {
        // The opening position is the same every game
        let word = match (self.session.guess_number(), self.opening.clone()) {
            (0, Some(opening)) => opening,
            (0, None) => {
                let opening = self.session.suggest()?;
                self.opening = Some(opening.clone());
                opening
            }
            _ => self.session.suggest()?,
        };
        let expected_remaining = score_guess(&word, self.session.current_candidates());
        debug!(%word, expected_remaining, "Suggestion computed");

        Ok(Suggestion {
            word,
            expected_remaining,
        })
    }

    fn after_guess(&mut self, outcome: &GuessOutcome) {
        self.suggestion = None;
        self.selected_checkpoint = self.session.guess_number();

        match outcome.state {
            GameState::Won => {
                let celebration = match outcome.guess_number {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Ctrl-N for a new game or Esc to quit.", MessageStyle::Info);
            }
            GameState::Lost => {
                let answer = self
                    .session
                    .target()
                    .map_or_else(String::new, ToString::to_string);
                self.add_message(
                    &format!("Out of guesses! The answer was {answer}"),
                    MessageStyle::Error,
                );
            }
            GameState::NotStarted | GameState::InProgress => {
                self.add_message(
                    &format!("{} words remaining", outcome.candidates_after),
                    MessageStyle::Info,
                );
            }
        }

        if outcome.state.is_terminal() && !self.game_recorded {
            self.record_game(outcome);
        }
    }

    fn record_game(&mut self, outcome: &GuessOutcome) {
        self.game_recorded = true;
        self.stats.total_games += 1;
        if outcome.state == GameState::Won {
            self.stats.games_won += 1;
            if let Some(slot) = self.stats.guess_distribution.get_mut(outcome.guess_number) {
                *slot += 1;
            }
        }
        info!(
            state = ?outcome.state,
            guesses = outcome.guess_number,
            "Game finished"
        );
    }

    fn report(&mut self, err: &SessionError) {
        warn!(%err, "Action rejected");
        self.add_message(&err.to_string(), MessageStyle::Error);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

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

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
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
    use crate::wordlists::Vocabulary;
    use crate::wordlists::loader::words_from_slice;

    const WORDS: &[&str] = &["crane", "crate", "grate", "irate", "slate"];

    fn app() -> App {
        let words = words_from_slice(WORDS);
        let session = GameSession::with_seed(Vocabulary::new(words.clone(), words), 5).unwrap();
        let mut app = App::new(session).unwrap();
        app.session.reset(Some("crate")).unwrap();
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_is_uppercased_and_capped() {
        let mut app = app();
        type_word(&mut app, "sl4atexyz");
        assert_eq!(app.input_buffer, "SLATE");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "SLAT");
    }

    #[test]
    fn enter_submits_guess() {
        let mut app = app();
        type_word(&mut app, "slate");
        press(&mut app, KeyCode::Enter);

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.guess_number(), 1);
        assert_eq!(app.selected_checkpoint, 1);
    }

    #[test]
    fn short_or_unknown_words_are_rejected() {
        let mut app = app();
        type_word(&mut app, "sla");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.guess_number(), 0);

        app.input_buffer.clear();
        type_word(&mut app, "zzzzz");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.guess_number(), 0);
        assert_eq!(app.input_buffer, "ZZZZZ");
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn winning_updates_statistics_once() {
        let mut app = app();
        type_word(&mut app, "crate");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.state(), GameState::Won);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);

        // Undo and win again within the same game
        press(&mut app, KeyCode::Up);
        ctrl(&mut app, 'u');
        type_word(&mut app, "crate");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn hint_sets_suggestion() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);

        let suggestion = app.suggestion.clone().unwrap();
        assert!(suggestion.expected_remaining >= 1.0);
        assert_eq!(app.session.guess_number(), 0);
    }

    #[test]
    fn computer_guess_plays_to_a_win() {
        let mut app = app();
        while !app.session.state().is_terminal() {
            ctrl(&mut app, 'g');
        }
        assert_eq!(app.session.state(), GameState::Won);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn undo_to_selected_checkpoint() {
        let mut app = app();
        type_word(&mut app, "slate");
        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "irate");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.guess_number(), 2);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_checkpoint, 0);

        press(&mut app, KeyCode::Down);
        ctrl(&mut app, 'u');
        assert_eq!(app.session.guess_number(), 1);
        assert_eq!(app.selected_checkpoint, 1);
    }

    #[test]
    fn selection_is_clamped_to_history() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_checkpoint, 0);
    }

    #[test]
    fn new_game_and_answer_toggle() {
        let mut app = app();
        type_word(&mut app, "slate");
        press(&mut app, KeyCode::Enter);

        ctrl(&mut app, 'r');
        assert!(app.session.is_answer_visible());

        ctrl(&mut app, 'n');
        assert_eq!(app.session.guess_number(), 0);
        assert_eq!(app.session.state(), GameState::InProgress);
        assert_eq!(app.selected_checkpoint, 0);
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }
}
