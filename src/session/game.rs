//! Game session state machine
//!
//! Owns the hidden target and the checkpoint history, and runs the evaluator,
//! filter and optimizer for every guess.

use super::{Checkpoint, InitializationError, SessionError, StateError, ValidationError};
use crate::core::{Pattern, Word};
use crate::solver::{CandidateSet, filter_candidates, optimal_guess};
use crate::wordlists::Vocabulary;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Guesses allowed per game
pub const MAX_GUESSES: usize = 6;

static NO_CANDIDATES: CandidateSet = CandidateSet::new();

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Who submitted a guess
///
/// Player guesses must come from the guess vocabulary; solver guesses are
/// taken as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessSource {
    User,
    Solver,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub guess_number: usize,
    pub word: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub state: GameState,
}

impl GuessOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.pattern.is_perfect()
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.state.is_terminal()
    }
}

/// Read-only summary of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStatus {
    pub guess_number: usize,
    pub max_guesses: usize,
    /// The answer, only when visibility is switched on
    pub target: Option<Word>,
    pub show_answer: bool,
    pub candidates_count: usize,
    pub state: GameState,
}

impl GameStatus {
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.state.is_terminal()
    }
}

/// One puzzle game with undoable history
///
/// The random source is injected so games can be replayed from a seed.
/// Mutating operations take `&mut self`; share a session between threads
/// behind a `Mutex`.
pub struct GameSession<R: Rng = StdRng> {
    vocabulary: Vocabulary,
    rng: R,
    target: Option<Word>,
    show_answer: bool,
    checkpoints: Vec<Checkpoint>,
}

impl GameSession<StdRng> {
    /// Create a session seeded from the operating system
    ///
    /// # Errors
    /// Returns `InitializationError` if either vocabulary is empty.
    pub fn new(vocabulary: Vocabulary) -> Result<Self, SessionError> {
        Self::with_rng(vocabulary, StdRng::from_os_rng())
    }

    /// Create a session whose random targets are reproducible
    ///
    /// # Errors
    /// Returns `InitializationError` if either vocabulary is empty.
    pub fn with_seed(vocabulary: Vocabulary, seed: u64) -> Result<Self, SessionError> {
        Self::with_rng(vocabulary, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// Create a session drawing random targets from `rng`
    ///
    /// The session starts in [`GameState::NotStarted`]; call [`reset`](Self::reset).
    ///
    /// # Errors
    /// Returns `InitializationError` if either vocabulary is empty.
    #[instrument(skip_all, fields(targets = vocabulary.targets().len(), guesses = vocabulary.guesses().len()))]
    pub fn with_rng(vocabulary: Vocabulary, rng: R) -> Result<Self, SessionError> {
        if vocabulary.targets().is_empty() {
            return Err(InitializationError::EmptyTargetVocabulary.into());
        }
        if vocabulary.guesses().is_empty() {
            return Err(InitializationError::EmptyGuessVocabulary.into());
        }

        debug!("Session created");
        Ok(Self {
            vocabulary,
            rng,
            target: None,
            show_answer: false,
            checkpoints: Vec::new(),
        })
    }

    /// Start a new game
    ///
    /// Uses `target` when given (it must be a target-vocabulary word), otherwise
    /// draws one uniformly at random. History is reset to a single initial
    /// checkpoint holding the full target vocabulary.
    ///
    /// # Errors
    /// Returns `ValidationError` for a malformed target or one outside the
    /// target vocabulary; the current game is left untouched.
    #[instrument(skip(self))]
    pub fn reset(&mut self, target: Option<&str>) -> Result<&Word, SessionError> {
        let target = match target {
            Some(text) => {
                let word = Word::new(text)?;
                if !self.vocabulary.is_target(&word) {
                    return Err(ValidationError::NotInTargetVocabulary(word).into());
                }
                word
            }
            None => self
                .vocabulary
                .targets()
                .choose(&mut self.rng)
                .cloned()
                .ok_or(InitializationError::EmptyTargetVocabulary)?,
        };

        self.checkpoints.clear();
        self.checkpoints
            .push(Checkpoint::initial(self.vocabulary.all_targets()));
        info!(
            candidates = self.current_candidates().len(),
            "New game started"
        );
        debug!(%target, "Target chosen");

        Ok(self.target.insert(target))
    }

    /// Submit a guess
    ///
    /// Scores it against the target, narrows the candidates and appends a
    /// checkpoint. The game is won when the guess is the target and lost when
    /// the last allowed guess misses.
    ///
    /// # Errors
    /// - `ValidationError` for a malformed word, or a [`GuessSource::User`]
    ///   word outside the guess vocabulary
    /// - `StateError` when no game is in progress
    ///
    /// Nothing changes on error.
    #[instrument(skip(self), fields(guess_number = self.guess_number() + 1))]
    pub fn guess(&mut self, word: &str, source: GuessSource) -> Result<GuessOutcome, SessionError> {
        let word = Word::new(word)?;

        let state = self.state();
        if state != GameState::InProgress {
            return Err(match state {
                GameState::NotStarted => StateError::NotStarted,
                _ => StateError::GameOver(state),
            }
            .into());
        }

        if source == GuessSource::User && !self.vocabulary.is_guess(&word) {
            return Err(ValidationError::NotInGuessVocabulary(word).into());
        }

        let (Some(target), Some(previous)) = (&self.target, self.checkpoints.last()) else {
            return Err(StateError::NotStarted.into());
        };

        let pattern = Pattern::calculate(&word, target);
        let remaining = filter_candidates(previous.after(), &word, pattern);
        let checkpoint = Checkpoint::following(previous, word.clone(), pattern, remaining);

        let outcome = GuessOutcome {
            guess_number: checkpoint.index(),
            word,
            pattern,
            candidates_before: checkpoint.before().len(),
            candidates_after: checkpoint.after().len(),
            state: GameState::InProgress,
        };
        self.checkpoints.push(checkpoint);

        let outcome = GuessOutcome {
            state: self.state(),
            ..outcome
        };
        info!(
            word = %outcome.word,
            pattern = %outcome.pattern,
            before = outcome.candidates_before,
            after = outcome.candidates_after,
            state = ?outcome.state,
            "Guess accepted"
        );
        Ok(outcome)
    }

    /// Rewind to the checkpoint after guess `index` (0 = start of game)
    ///
    /// Later checkpoints are discarded. The state is recomputed from the
    /// remaining history, so rewinding out of a finished game resumes play.
    ///
    /// # Errors
    /// Returns `StateError::CheckpointOutOfRange` unless `index` is below the
    /// history length; nothing changes on error.
    #[instrument(skip(self))]
    pub fn undo_to(&mut self, index: usize) -> Result<(), SessionError> {
        let len = self.checkpoints.len();
        if index >= len {
            return Err(StateError::CheckpointOutOfRange { index, len }.into());
        }

        self.checkpoints.truncate(index + 1);
        info!(
            candidates = self.current_candidates().len(),
            state = ?self.state(),
            "Rewound"
        );
        Ok(())
    }

    /// Flip whether [`status`](Self::status) reveals the answer
    ///
    /// Returns the new setting.
    pub fn toggle_answer_visibility(&mut self) -> bool {
        self.show_answer = !self.show_answer;
        self.show_answer
    }

    /// The optimizer's pick for the current candidates
    ///
    /// # Errors
    /// Returns `StateError::NoCandidates` if no candidate is left.
    #[instrument(skip(self), fields(candidates = self.current_candidates().len()))]
    pub fn suggest(&self) -> Result<Word, SessionError> {
        let suggestion = optimal_guess(self.current_candidates(), self.vocabulary.guesses())
            .ok_or(StateError::NoCandidates)?;
        debug!(%suggestion, "Suggestion ready");
        Ok(suggestion)
    }

    /// Let the optimizer make the next guess
    ///
    /// # Errors
    /// Returns `StateError` if no candidate is left or the game is not in
    /// progress.
    pub fn play_suggestion(&mut self) -> Result<GuessOutcome, SessionError> {
        let state = self.state();
        if state.is_terminal() {
            return Err(StateError::GameOver(state).into());
        }
        let suggestion = self.suggest()?;
        self.guess(suggestion.text(), GuessSource::Solver)
    }

    /// Current state, derived from the history
    #[must_use]
    pub fn state(&self) -> GameState {
        let (Some(target), Some(last)) = (&self.target, self.checkpoints.last()) else {
            return GameState::NotStarted;
        };

        if last.word() == Some(target) {
            GameState::Won
        } else if last.index() >= MAX_GUESSES {
            GameState::Lost
        } else {
            GameState::InProgress
        }
    }

    /// Guesses made so far in this game
    #[must_use]
    pub fn guess_number(&self) -> usize {
        self.checkpoints.len().saturating_sub(1)
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        MAX_GUESSES
    }

    #[must_use]
    pub const fn is_answer_visible(&self) -> bool {
        self.show_answer
    }

    /// The hidden answer regardless of visibility
    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus {
            guess_number: self.guess_number(),
            max_guesses: MAX_GUESSES,
            target: self.target.clone().filter(|_| self.show_answer),
            show_answer: self.show_answer,
            candidates_count: self.current_candidates().len(),
            state: self.state(),
        }
    }

    /// Full history including the initial checkpoint
    #[must_use]
    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    /// Checkpoints from guess `index` onward
    #[must_use]
    pub fn history_since(&self, index: usize) -> &[Checkpoint] {
        self.checkpoints.get(index..).unwrap_or_default()
    }

    /// Checkpoints of the guesses made, without the initial one
    #[must_use]
    pub fn history(&self) -> &[Checkpoint] {
        self.history_since(1)
    }

    /// Candidates remaining after guess `index`
    #[must_use]
    pub fn candidates_at(&self, index: usize) -> Option<&CandidateSet> {
        self.checkpoints.get(index).map(Checkpoint::after)
    }

    /// Candidates remaining now (empty before the first game)
    #[must_use]
    pub fn current_candidates(&self) -> &CandidateSet {
        self.checkpoints
            .last()
            .map_or(&NO_CANDIDATES, Checkpoint::after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterOutcome::{Absent, Correct};
    use crate::wordlists::loader::words_from_slice;

    const SAMPLE: &[&str] = &["crane", "slate", "roate", "raise", "adieu"];
    const EXTRA_GUESSES: &[&str] = &[
        "audio", "house", "mouse", "phone", "stone", "about", "world", "would",
    ];

    fn vocabulary() -> Vocabulary {
        let mut guesses = words_from_slice(SAMPLE);
        guesses.extend(words_from_slice(EXTRA_GUESSES));
        Vocabulary::new(words_from_slice(SAMPLE), guesses)
    }

    fn session_with(target: &str) -> GameSession {
        let mut session = GameSession::with_seed(vocabulary(), 7).unwrap();
        session.reset(Some(target)).unwrap();
        session
    }

    #[test]
    fn new_session_has_not_started() {
        let session = GameSession::with_seed(vocabulary(), 1).unwrap();
        assert_eq!(session.state(), GameState::NotStarted);
        assert_eq!(session.guess_number(), 0);
        assert!(session.checkpoints().is_empty());
        assert!(session.current_candidates().is_empty());
    }

    #[test]
    fn guess_before_reset_is_a_state_error() {
        let mut session = GameSession::with_seed(vocabulary(), 1).unwrap();
        let err = session.guess("crane", GuessSource::User).unwrap_err();
        assert_eq!(err, SessionError::State(StateError::NotStarted));
    }

    #[test]
    fn empty_vocabularies_fail_initialization() {
        let no_targets = Vocabulary::new(Vec::new(), words_from_slice(SAMPLE));
        assert_eq!(
            GameSession::with_seed(no_targets, 1).err(),
            Some(SessionError::Initialization(
                InitializationError::EmptyTargetVocabulary
            ))
        );

        let no_guesses = Vocabulary::new(words_from_slice(SAMPLE), Vec::new());
        assert_eq!(
            GameSession::with_seed(no_guesses, 1).err(),
            Some(SessionError::Initialization(
                InitializationError::EmptyGuessVocabulary
            ))
        );
    }

    #[test]
    fn reset_starts_with_full_vocabulary() {
        let session = session_with("crane");
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.checkpoints().len(), 1);
        assert_eq!(session.current_candidates().len(), SAMPLE.len());
        assert!(session.history().is_empty());

        let start = &session.checkpoints()[0];
        assert_eq!(start.index(), 0);
        assert!(start.word().is_none());
        assert_eq!(start.before(), start.after());
    }

    #[test]
    fn random_reset_is_reproducible_from_seed() {
        let mut first = GameSession::with_seed(vocabulary(), 42).unwrap();
        let mut second = GameSession::with_seed(vocabulary(), 42).unwrap();

        for _ in 0..5 {
            let a = first.reset(None).unwrap().clone();
            let b = second.reset(None).unwrap().clone();
            assert_eq!(a, b);
            assert!(first.vocabulary().is_target(&a));
        }
    }

    #[test]
    fn reset_rejects_unknown_or_malformed_target() {
        let mut session = session_with("crane");
        session.guess("slate", GuessSource::User).unwrap();

        assert!(matches!(
            session.reset(Some("audio")),
            Err(SessionError::Validation(
                ValidationError::NotInTargetVocabulary(_)
            ))
        ));
        assert!(matches!(
            session.reset(Some("cran")),
            Err(SessionError::Validation(ValidationError::InvalidWord(_)))
        ));

        // The running game is untouched
        assert_eq!(session.guess_number(), 1);
        assert_eq!(session.target().map(Word::text), Some("CRANE"));
    }

    #[test]
    fn slate_against_crane_leaves_only_crane() {
        let mut session = session_with("crane");
        let outcome = session.guess("slate", GuessSource::User).unwrap();

        assert_eq!(
            outcome.pattern.outcomes(),
            &[Absent, Absent, Correct, Absent, Correct]
        );
        assert_eq!(outcome.guess_number, 1);
        assert_eq!(outcome.candidates_before, 5);
        assert_eq!(outcome.candidates_after, 1);
        assert_eq!(outcome.state, GameState::InProgress);

        let remaining: Vec<&str> = session.current_candidates().iter().map(Word::text).collect();
        assert_eq!(remaining, ["CRANE"]);
    }

    #[test]
    fn checkpoints_chain_before_and_after_sets() {
        let mut session = session_with("raise");
        session.guess("adieu", GuessSource::User).unwrap();
        session.guess("stone", GuessSource::User).unwrap();

        let checkpoints = session.checkpoints();
        for pair in checkpoints.windows(2) {
            assert_eq!(pair[1].before(), pair[0].after());
            assert_eq!(pair[1].index(), pair[0].index() + 1);
            assert!(pair[1].after().len() <= pair[1].before().len());
        }
    }

    #[test]
    fn user_guess_outside_vocabulary_is_rejected_without_change() {
        let mut session = session_with("crane");
        let err = session.guess("zzzzz", GuessSource::User).unwrap_err();

        assert!(matches!(
            err,
            SessionError::Validation(ValidationError::NotInGuessVocabulary(_))
        ));
        assert_eq!(session.guess_number(), 0);
        assert_eq!(session.checkpoints().len(), 1);
    }

    #[test]
    fn solver_guess_skips_vocabulary_check() {
        let mut session = session_with("crane");
        let outcome = session.guess("zzzzz", GuessSource::Solver).unwrap();
        assert_eq!(outcome.candidates_after, SAMPLE.len());
    }

    #[test]
    fn malformed_guess_is_a_validation_error() {
        let mut session = session_with("crane");
        assert!(matches!(
            session.guess("toolong", GuessSource::User),
            Err(SessionError::Validation(ValidationError::InvalidWord(_)))
        ));
    }

    #[test]
    fn exact_guess_wins_and_blocks_further_guesses() {
        let mut session = session_with("raise");
        session.guess("adieu", GuessSource::User).unwrap();
        let outcome = session.guess("raise", GuessSource::User).unwrap();

        assert!(outcome.is_correct());
        assert_eq!(outcome.state, GameState::Won);
        assert!(session.status().is_game_over());

        let err = session.guess("crane", GuessSource::User).unwrap_err();
        assert_eq!(err, SessionError::State(StateError::GameOver(GameState::Won)));
        assert_eq!(session.guess_number(), 2);
    }

    #[test]
    fn six_misses_lose() {
        let mut session = session_with("crane");
        let misses = ["audio", "house", "mouse", "phone", "stone", "about"];

        for (i, word) in misses.iter().enumerate() {
            let outcome = session.guess(word, GuessSource::User).unwrap();
            let expected = if i + 1 == MAX_GUESSES {
                GameState::Lost
            } else {
                GameState::InProgress
            };
            assert_eq!(outcome.state, expected);
        }

        assert_eq!(session.guess_number(), MAX_GUESSES);
        assert!(matches!(
            session.guess("crane", GuessSource::User),
            Err(SessionError::State(StateError::GameOver(GameState::Lost)))
        ));
    }

    #[test]
    fn undo_restores_candidates_and_guess_number() {
        let mut session = session_with("raise");
        session.guess("adieu", GuessSource::User).unwrap();

        let before_guess = session.current_candidates().clone();
        let index_before = session.guess_number();
        session.guess("stone", GuessSource::User).unwrap();

        session.undo_to(index_before).unwrap();
        assert_eq!(session.guess_number(), index_before);
        assert_eq!(session.current_candidates(), &before_guess);
        assert_eq!(session.checkpoints().len(), index_before + 1);
    }

    #[test]
    fn undo_out_of_finished_game_resumes_play() {
        let mut session = session_with("crane");
        session.guess("slate", GuessSource::User).unwrap();
        session.guess("crane", GuessSource::User).unwrap();
        assert_eq!(session.state(), GameState::Won);

        session.undo_to(1).unwrap();
        assert_eq!(session.state(), GameState::InProgress);
        session.guess("crane", GuessSource::User).unwrap();
        assert_eq!(session.state(), GameState::Won);

        // Rewinding to the winning checkpoint itself keeps the win
        session.undo_to(2).unwrap();
        assert_eq!(session.state(), GameState::Won);

        session.undo_to(0).unwrap();
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.current_candidates().len(), SAMPLE.len());
    }

    #[test]
    fn undo_out_of_range_fails_without_change() {
        let mut session = session_with("crane");
        session.guess("slate", GuessSource::User).unwrap();

        let err = session.undo_to(2).unwrap_err();
        assert_eq!(
            err,
            SessionError::State(StateError::CheckpointOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(session.guess_number(), 1);
    }

    #[test]
    fn answer_visibility_gates_status_target() {
        let mut session = session_with("crane");
        assert!(session.status().target.is_none());

        assert!(session.toggle_answer_visibility());
        assert_eq!(session.status().target.map(|w| w.to_string()), Some("CRANE".into()));

        assert!(!session.toggle_answer_visibility());
        assert!(session.status().target.is_none());
    }

    #[test]
    fn queries_report_history() {
        let mut session = session_with("raise");
        session.guess("adieu", GuessSource::User).unwrap();
        session.guess("stone", GuessSource::User).unwrap();

        let history = session.history_since(1);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].word().map(Word::text), Some("ADIEU"));
        assert_eq!(history[1].word().map(Word::text), Some("STONE"));
        assert!(session.history_since(5).is_empty());

        assert_eq!(session.candidates_at(0).map(CandidateSet::len), Some(SAMPLE.len()));
        assert_eq!(session.candidates_at(2), Some(session.current_candidates()));
        assert!(session.candidates_at(3).is_none());

        let status = session.status();
        assert_eq!(status.guess_number, 2);
        assert_eq!(status.max_guesses, MAX_GUESSES);
        assert_eq!(status.candidates_count, session.current_candidates().len());
    }

    #[test]
    fn solver_plays_to_a_win() {
        let mut session = session_with("roate");

        while !session.state().is_terminal() {
            let outcome = session.play_suggestion().unwrap();
            assert!(session.current_candidates().contains(&Word::new("roate").unwrap()));
            assert!(outcome.candidates_after <= outcome.candidates_before);
        }

        assert_eq!(session.state(), GameState::Won);
        assert!(matches!(
            session.play_suggestion(),
            Err(SessionError::State(StateError::GameOver(GameState::Won)))
        ));
    }

    #[test]
    fn suggestion_is_deterministic() {
        let session = session_with("crane");
        assert_eq!(session.suggest().unwrap(), session.suggest().unwrap());
    }
}
