use std::time::Instant;

use crate::game::{Game, GameError, GameEvent, GameState, GuessOutcome, PassOutcome};
use crate::random::RandomSource;
use crate::runtime::SecondTimer;

/// A game plus the countdown timer that drives it.
///
/// The timer is armed when the game becomes active, disarmed as soon as it
/// is won or lost, and replaced on restart.
#[derive(Debug)]
pub struct Session<R: RandomSource> {
    game: Game<R>,
    timer: SecondTimer,
}

impl<R: RandomSource> Session<R> {
    pub fn new(game: Game<R>) -> Self {
        Self::with_timer(game, SecondTimer::default())
    }

    pub fn with_timer(game: Game<R>, timer: SecondTimer) -> Self {
        Self { game, timer }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn timer(&self) -> &SecondTimer {
        &self.timer
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.game.take_events()
    }

    pub fn start(&mut self, now: Instant) -> Result<(), GameError> {
        self.timer.disarm();
        let result = self.game.start();
        self.sync_timer(now);
        result
    }

    pub fn restart(&mut self, now: Instant) -> Result<(), GameError> {
        self.timer.disarm();
        let result = self.game.restart();
        self.sync_timer(now);
        result
    }

    pub fn submit_guess(&mut self, text: &str, now: Instant) -> Result<GuessOutcome, GameError> {
        let result = self.game.submit_guess(text);
        // a resolved guess gives the next word a full period
        if matches!(result, Ok(GuessOutcome::Correct | GuessOutcome::Wrong)) {
            self.timer.disarm();
        }
        self.sync_timer(now);
        result
    }

    pub fn pass_word(&mut self, now: Instant) -> Result<PassOutcome, GameError> {
        let result = self.game.pass_word();
        if result == Ok(PassOutcome::Passed) {
            self.timer.disarm();
        }
        self.sync_timer(now);
        result
    }

    pub fn next_hint(&mut self) {
        self.game.next_hint();
    }

    /// Feeds every second that elapsed up to `now` into the game.
    pub fn advance(&mut self, now: Instant) {
        let due = self.timer.poll(now);
        for _ in 0..due {
            if !self.game.is_active() {
                break;
            }
            self.game.tick();
        }
        self.sync_timer(now);
    }

    fn sync_timer(&mut self, now: Instant) {
        match (self.game.state(), self.timer.is_armed()) {
            (GameState::Active, false) => {
                tracing::debug!("countdown armed");
                self.timer.arm(now);
            }
            (GameState::Active, true) => {}
            (_, true) => {
                tracing::debug!(state = %self.game.state(), "countdown released");
                self.timer.disarm();
            }
            (_, false) => {}
        }
    }
}
