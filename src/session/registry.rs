//! Session registry with inactivity timers
//!
//! Every session slot holds its game, the generation of its current timer and
//! the timer task handle. Arming a timer aborts the previous task and bumps the
//! generation; an expiry only removes the slot if the generation it was armed
//! with is still current. A timer that fires after being replaced, or after its
//! game ended, therefore finds a different generation (or no slot) and leaves
//! everything alone.

use super::SessionConfig;
use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::error::SessionError;
use crate::game::{Board, Game, GuessOutcome, Hint, Summary};
use crate::wordlists::WordSource;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Weak};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// What a freshly started game looks like
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartInfo {
    /// Attempts available (word length + 1)
    pub attempts: usize,
    pub length: usize,
    pub dictionary: String,
    pub board: Board,
}

/// Result of a hint request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintOutcome {
    Revealed(Hint),
    /// No guess has hit a letter of the target yet
    NothingRevealed,
}

/// Emitted when a game is dropped for inactivity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutNotice {
    pub session: String,
    /// Present if at least one guess had been made
    pub summary: Option<Summary>,
}

struct Session {
    game: Game,
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

impl Session {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

#[derive(Default)]
struct State {
    sessions: FxHashMap<String, Session>,
    next_generation: u64,
}

struct Shared {
    state: Mutex<State>,
    notices: mpsc::UnboundedSender<TimeoutNotice>,
}

impl Shared {
    /// Timer callback: drop the session if `generation` is still its live timer
    fn expire(&self, id: &str, generation: u64) {
        let summary = {
            let mut state = self.state.lock();
            match state.sessions.get(id) {
                Some(session) if session.generation == generation => {}
                Some(session) => {
                    debug!(session = %id, generation, current = session.generation, "stale timer ignored");
                    return;
                }
                None => {
                    debug!(session = %id, generation, "timer fired for concluded session");
                    return;
                }
            }

            let Some(session) = state.sessions.remove(id) else {
                return;
            };
            session.game.summary()
        };

        info!(session = %id, "game timed out");

        let notice = TimeoutNotice {
            session: id.to_string(),
            summary,
        };
        if self.notices.send(notice).is_err() {
            debug!(session = %id, "timeout receiver dropped");
        }
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        for session in self.state.get_mut().sessions.values_mut() {
            session.cancel_timer();
        }
    }
}

/// All running games, one per session id
///
/// Cloning is cheap and clones share the same sessions. Operations that arm a
/// timer spawn a Tokio task, so they must run inside a Tokio runtime.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use wordle_sessions::game::GuessOutcome;
/// use wordle_sessions::session::{SessionConfig, SessionRegistry};
/// use wordle_sessions::wordlists::{Dictionary, WordBank};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let words = WordBank::default()
///     .with_dictionary(Dictionary::new("CET4", [("crane", "a lifting machine")]));
/// let (registry, _timeouts) = SessionRegistry::new(SessionConfig::default(), Arc::new(words));
///
/// let info = registry.start("qq:1234", "CET4", 5).unwrap();
/// assert_eq!(info.attempts, 6);
///
/// let outcome = registry.guess("qq:1234", "CRANE").unwrap();
/// assert!(matches!(outcome, GuessOutcome::Win { .. }));
/// assert!(!registry.is_running("qq:1234"));
/// # }
/// ```
#[derive(Clone)]
pub struct SessionRegistry {
    shared: Arc<Shared>,
    words: Arc<dyn WordSource>,
    config: SessionConfig,
}

impl SessionRegistry {
    /// Create an empty registry
    ///
    /// Returns the registry and the receiving end of its timeout notices.
    #[must_use]
    pub fn new(
        config: SessionConfig,
        words: Arc<dyn WordSource>,
    ) -> (Self, mpsc::UnboundedReceiver<TimeoutNotice>) {
        let (notices, receiver) = mpsc::unbounded_channel();
        let shared = Arc::new(Shared {
            state: Mutex::new(State::default()),
            notices,
        });

        (
            Self {
                shared,
                words,
                config,
            },
            receiver,
        )
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Whether a game is running for `id`
    #[must_use]
    pub fn is_running(&self, id: &str) -> bool {
        self.shared.state.lock().sessions.contains_key(id)
    }

    /// Number of running games
    #[must_use]
    pub fn active_sessions(&self) -> usize {
        self.shared.state.lock().sessions.len()
    }

    /// Start a game for `id` with a random `length`-letter word from `dictionary`
    ///
    /// # Errors
    /// - `AlreadyRunning` if `id` has a game
    /// - `InvalidLength` unless 3 <= `length` <= 8
    /// - `UnknownDictionary` / `NoWordsForLength` if no target can be picked
    ///
    /// Nothing is stored and no timer is armed on failure.
    pub fn start(
        &self,
        id: &str,
        dictionary: &str,
        length: usize,
    ) -> Result<StartInfo, SessionError> {
        let mut state = self.shared.state.lock();

        if state.sessions.contains_key(id) {
            return Err(SessionError::AlreadyRunning);
        }

        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length) {
            return Err(SessionError::InvalidLength {
                length,
                min: MIN_WORD_LENGTH,
                max: MAX_WORD_LENGTH,
            });
        }

        if !self.words.has_dictionary(dictionary) {
            return Err(SessionError::UnknownDictionary(dictionary.to_string()));
        }

        let entry = self.words.pick_word(dictionary, length)?;
        let game = match Game::new(entry.word, entry.meaning) {
            Ok(game) if game.length() == length => game,
            _ => {
                warn!(dictionary, length, "word source returned an unplayable word");
                return Err(SessionError::NoWordsForLength {
                    dictionary: dictionary.to_string(),
                    length,
                });
            }
        };

        let info = StartInfo {
            attempts: game.max_attempts(),
            length: game.length(),
            dictionary: dictionary.to_string(),
            board: game.board(),
        };

        let mut session = Session {
            game,
            generation: 0,
            timer: None,
        };
        self.arm_timer(&mut state, id, &mut session);
        state.sessions.insert(id.to_string(), session);

        info!(session = %id, dictionary, length, "game started");
        Ok(info)
    }

    /// Submit a guess for the game running in `id`
    ///
    /// Any guess, accepted or rejected, counts as activity and restarts the
    /// inactivity timer. A win or loss removes the session before returning.
    ///
    /// # Errors
    /// `NoSuchSession` if no game is running for `id`.
    pub fn guess(&self, id: &str, raw: &str) -> Result<GuessOutcome, SessionError> {
        let mut state = self.shared.state.lock();
        let mut session = state
            .sessions
            .remove(id)
            .ok_or(SessionError::NoSuchSession)?;

        let outcome = session.game.submit_guess(raw, &*self.words);

        if outcome.is_terminal() {
            session.cancel_timer();
            info!(
                session = %id,
                won = matches!(outcome, GuessOutcome::Win { .. }),
                attempts = session.game.attempts_used(),
                "game finished"
            );
        } else {
            debug!(
                session = %id,
                accepted = outcome.consumed_attempt(),
                attempts = session.game.attempts_used(),
                "guess evaluated"
            );
            self.arm_timer(&mut state, id, &mut session);
            state.sessions.insert(id.to_string(), session);
        }

        Ok(outcome)
    }

    /// Current hint for the game running in `id`
    ///
    /// # Errors
    /// `NoSuchSession` if no game is running for `id`.
    pub fn hint(&self, id: &str) -> Result<HintOutcome, SessionError> {
        let mut state = self.shared.state.lock();
        let mut session = state
            .sessions
            .remove(id)
            .ok_or(SessionError::NoSuchSession)?;

        let hint = session.game.hint();
        debug!(session = %id, revealed = hint.revealed(), "hint requested");

        self.arm_timer(&mut state, id, &mut session);
        state.sessions.insert(id.to_string(), session);

        Ok(if hint.is_blank() {
            HintOutcome::NothingRevealed
        } else {
            HintOutcome::Revealed(hint)
        })
    }

    /// End the game running in `id`
    ///
    /// Returns a summary if at least one guess had been made.
    ///
    /// # Errors
    /// `NoSuchSession` if no game is running for `id`.
    pub fn stop(&self, id: &str) -> Result<Option<Summary>, SessionError> {
        let mut session = self
            .shared
            .state
            .lock()
            .sessions
            .remove(id)
            .ok_or(SessionError::NoSuchSession)?;

        session.cancel_timer();
        info!(session = %id, attempts = session.game.attempts_used(), "game stopped");

        Ok(session.game.summary())
    }

    /// Replace the session's timer with a fresh one under a new generation
    fn arm_timer(&self, state: &mut State, id: &str, session: &mut Session) {
        session.cancel_timer();

        state.next_generation += 1;
        let generation = state.next_generation;
        session.generation = generation;

        let shared: Weak<Shared> = Arc::downgrade(&self.shared);
        let timeout = self.config.inactivity_timeout;
        let deadline = Instant::now() + timeout;
        let id = id.to_string();

        debug!(session = %id, generation, ?timeout, "timer armed");
        session.timer = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if let Some(shared) = shared.upgrade() {
                shared.expire(&id, generation);
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Absent, Correct, Present};
    use crate::wordlists::{Dictionary, WordBank};
    use std::time::Duration;

    const TIMEOUT: Duration = Duration::from_secs(300);

    fn registry_with(target: &str) -> (SessionRegistry, mpsc::UnboundedReceiver<TimeoutNotice>) {
        let words = WordBank::default()
            .with_dictionary(Dictionary::new("CET4", [(target, "the answer")]))
            .with_dictionary(Dictionary::new("GRE", [("aloof", "distant")]))
            .with_allowed([
                "crane", "slate", "paper", "ghost", "bumpy", "fight", "dizzy", "mount", "pear",
            ]);
        SessionRegistry::new(
            SessionConfig::default().with_inactivity_timeout(TIMEOUT),
            Arc::new(words),
        )
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    fn generation_of(registry: &SessionRegistry, id: &str) -> u64 {
        registry.shared.state.lock().sessions[id].generation
    }

    #[tokio::test]
    async fn start_reports_board_and_attempts() {
        let (registry, _rx) = registry_with("CRANE");

        let info = registry.start("s1", "CET4", 5).unwrap();
        assert_eq!(info.attempts, 6);
        assert_eq!(info.length, 5);
        assert_eq!(info.dictionary, "CET4");
        assert_eq!(info.board.height(), 6);
        assert_eq!(info.board.filled_rows(), 0);
        assert!(registry.is_running("s1"));
    }

    #[tokio::test]
    async fn start_twice_is_rejected() {
        let (registry, _rx) = registry_with("CRANE");
        registry.start("s1", "CET4", 5).unwrap();

        assert_eq!(
            registry.start("s1", "CET4", 5),
            Err(SessionError::AlreadyRunning)
        );
        assert_eq!(registry.active_sessions(), 1);
    }

    #[tokio::test]
    async fn start_validates_length_and_dictionary() {
        let (registry, _rx) = registry_with("CRANE");

        assert_eq!(
            registry.start("s1", "CET4", 10),
            Err(SessionError::InvalidLength {
                length: 10,
                min: 3,
                max: 8
            })
        );
        assert_eq!(
            registry.start("s1", "CET4", 2),
            Err(SessionError::InvalidLength {
                length: 2,
                min: 3,
                max: 8
            })
        );
        assert_eq!(
            registry.start("s1", "NOPE", 5),
            Err(SessionError::UnknownDictionary("NOPE".into()))
        );
        assert_eq!(
            registry.start("s1", "CET4", 7),
            Err(SessionError::NoWordsForLength {
                dictionary: "CET4".into(),
                length: 7
            })
        );
        assert!(!registry.is_running("s1"));
        assert_eq!(registry.shared.state.lock().next_generation, 0);
    }

    #[tokio::test]
    async fn winning_guess_removes_session() {
        let (registry, _rx) = registry_with("CRANE");
        registry.start("s1", "CET4", 5).unwrap();

        let outcome = registry.guess("s1", "CRANE").unwrap();
        let GuessOutcome::Win { board, reveal } = outcome else {
            panic!("expected win, got {outcome:?}");
        };
        assert_eq!(reveal.word, "CRANE");
        assert_eq!(reveal.meaning, "the answer");
        assert!(board.rows()[0].iter().all(|cell| matches!(
            cell,
            crate::game::Cell::Letter {
                feedback: Correct,
                ..
            }
        )));
        assert!(!registry.is_running("s1"));
        assert_eq!(registry.guess("s1", "crane"), Err(SessionError::NoSuchSession));
    }

    #[tokio::test]
    async fn continue_uses_membership_presence() {
        let (registry, _rx) = registry_with("APPLE");
        registry.start("s1", "CET4", 5).unwrap();

        let outcome = registry.guess("s1", "PAPER").unwrap();
        let GuessOutcome::Continue { feedback, .. } = outcome else {
            panic!("expected continue, got {outcome:?}");
        };
        assert_eq!(
            feedback.letters(),
            &[Present, Present, Correct, Present, Absent]
        );
        assert!(registry.is_running("s1"));
    }

    #[tokio::test]
    async fn rejections_keep_the_session() {
        let (registry, _rx) = registry_with("APPLE");
        registry.start("s1", "CET4", 5).unwrap();

        assert!(matches!(
            registry.guess("s1", "pear").unwrap(),
            GuessOutcome::WrongLength {
                expected: 5,
                actual: 4
            }
        ));
        assert!(matches!(
            registry.guess("s1", "qwert").unwrap(),
            GuessOutcome::Illegal { .. }
        ));
        registry.guess("s1", "crane").unwrap();
        assert!(matches!(
            registry.guess("s1", "Crane").unwrap(),
            GuessOutcome::Duplicate { .. }
        ));

        let summary = registry.stop("s1").unwrap().unwrap();
        assert_eq!(summary.attempts_used, 1);
    }

    #[tokio::test]
    async fn running_out_of_attempts_is_a_loss() {
        let (registry, _rx) = registry_with("APPLE");
        registry.start("s1", "CET4", 5).unwrap();

        let misses = ["crane", "slate", "ghost", "bumpy", "fight", "dizzy"];
        for miss in &misses[..5] {
            assert!(matches!(
                registry.guess("s1", miss).unwrap(),
                GuessOutcome::Continue { .. }
            ));
        }

        let outcome = registry.guess("s1", misses[5]).unwrap();
        assert!(matches!(outcome, GuessOutcome::Loss { .. }));
        assert!(!registry.is_running("s1"));
    }

    #[tokio::test]
    async fn hint_before_guessing_reveals_nothing() {
        let (registry, _rx) = registry_with("APPLE");
        registry.start("s1", "CET4", 5).unwrap();

        assert_eq!(registry.hint("s1"), Ok(HintOutcome::NothingRevealed));

        registry.guess("s1", "dizzy").unwrap();
        registry.guess("s1", "mount").unwrap();
        assert_eq!(registry.hint("s1"), Ok(HintOutcome::NothingRevealed));

        registry.guess("s1", "paper").unwrap();
        let HintOutcome::Revealed(hint) = registry.hint("s1").unwrap() else {
            panic!("expected letters");
        };
        assert_eq!(hint.to_string(), "app*e");
    }

    #[tokio::test]
    async fn operations_on_missing_session() {
        let (registry, _rx) = registry_with("APPLE");
        assert_eq!(registry.guess("nobody", "apple"), Err(SessionError::NoSuchSession));
        assert_eq!(registry.hint("nobody"), Err(SessionError::NoSuchSession));
        assert_eq!(registry.stop("nobody"), Err(SessionError::NoSuchSession));
    }

    #[tokio::test]
    async fn stop_without_guesses_has_no_summary() {
        let (registry, _rx) = registry_with("APPLE");
        registry.start("s1", "CET4", 5).unwrap();

        assert_eq!(registry.stop("s1"), Ok(None));
        assert!(!registry.is_running("s1"));
        assert_eq!(registry.stop("s1"), Err(SessionError::NoSuchSession));
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let (registry, _rx) = registry_with("APPLE");
        registry.start("alice", "CET4", 5).unwrap();
        registry.start("bob", "GRE", 5).unwrap();

        registry.guess("alice", "crane").unwrap();
        assert!(matches!(
            registry.guess("bob", "aloof").unwrap(),
            GuessOutcome::Win { .. }
        ));

        assert!(registry.is_running("alice"));
        assert!(!registry.is_running("bob"));
        assert_eq!(registry.stop("alice").unwrap().unwrap().attempts_used, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn idle_session_times_out_once() {
        let (registry, mut rx) = registry_with("APPLE");
        registry.start("s1", "CET4", 5).unwrap();
        registry.guess("s1", "crane").unwrap();

        let notice = rx.recv().await.unwrap();
        assert_eq!(notice.session, "s1");
        let summary = notice.summary.unwrap();
        assert_eq!(summary.attempts_used, 1);
        assert_eq!(summary.board.filled_rows(), 1);
        assert!(!registry.is_running("s1"));

        tokio::time::advance(TIMEOUT * 3).await;
        settle().await;
        assert!(rx.try_recv().is_err());
        assert_eq!(registry.guess("s1", "slate"), Err(SessionError::NoSuchSession));
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_without_guesses_has_no_summary() {
        let (registry, mut rx) = registry_with("APPLE");
        registry.start("s1", "CET4", 5).unwrap();

        let notice = rx.recv().await.unwrap();
        assert_eq!(notice.session, "s1");
        assert!(notice.summary.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn activity_keeps_the_session_alive() {
        let (registry, mut rx) = registry_with("APPLE");
        registry.start("s1", "CET4", 5).unwrap();

        for word in ["crane", "slate", "ghost"] {
            tokio::time::advance(Duration::from_secs(200)).await;
            settle().await;
            registry.guess("s1", word).unwrap();
        }
        tokio::time::advance(Duration::from_secs(200)).await;
        settle().await;
        registry.hint("s1").unwrap();
        tokio::time::advance(Duration::from_secs(299)).await;
        settle().await;

        assert!(registry.is_running("s1"));
        assert!(rx.try_recv().is_err());

        tokio::time::advance(Duration::from_secs(2)).await;
        settle().await;
        assert_eq!(rx.try_recv().unwrap().session, "s1");
        assert!(!registry.is_running("s1"));
    }

    #[tokio::test(start_paused = true)]
    async fn idle_window_starts_at_the_activity() {
        let (registry, mut rx) = registry_with("APPLE");
        registry.start("s1", "CET4", 5).unwrap();

        // the timer task has not been polled yet
        tokio::time::advance(Duration::from_secs(200)).await;
        tokio::time::advance(Duration::from_secs(101)).await;
        settle().await;

        assert_eq!(rx.try_recv().unwrap().session, "s1");
        assert!(!registry.is_running("s1"));
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_session_never_times_out() {
        let (registry, mut rx) = registry_with("APPLE");
        registry.start("s1", "CET4", 5).unwrap();
        registry.stop("s1").unwrap();

        tokio::time::advance(TIMEOUT * 2).await;
        settle().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_generation_cannot_remove_a_session() {
        let (registry, mut rx) = registry_with("APPLE");
        registry.start("s1", "CET4", 5).unwrap();
        let first = generation_of(&registry, "s1");

        registry.guess("s1", "crane").unwrap();
        let second = generation_of(&registry, "s1");
        assert!(second > first);

        // a replaced timer that still manages to fire
        registry.shared.expire("s1", first);
        assert!(registry.is_running("s1"));
        assert!(rx.try_recv().is_err());

        registry.shared.expire("s1", second);
        assert!(!registry.is_running("s1"));
        assert_eq!(rx.try_recv().unwrap().session, "s1");
    }

    #[tokio::test(start_paused = true)]
    async fn old_timer_cannot_end_a_restarted_game() {
        let (registry, mut rx) = registry_with("APPLE");
        registry.start("s1", "CET4", 5).unwrap();
        let old = generation_of(&registry, "s1");
        registry.stop("s1").unwrap();

        registry.start("s1", "CET4", 5).unwrap();
        registry.shared.expire("s1", old);

        assert!(registry.is_running("s1"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn timed_out_game_can_be_restarted() {
        let (registry, mut rx) = registry_with("APPLE");
        registry.start("s1", "CET4", 5).unwrap();
        rx.recv().await.unwrap();

        assert!(registry.start("s1", "CET4", 5).is_ok());
        assert!(registry.is_running("s1"));
    }
}
