use crate::random::{RandomSource, ThreadRandom};
use crate::words::{normalize_guess, WordEntry, WordPool};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stage shown once the game is lost
pub const MAX_MASCOT_STAGE: u8 = 5;

/// Tunable numbers of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub lives: u8,
    pub seconds_per_word: u32,
    pub words_to_find: usize,
    pub max_passes: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            lives: 3,
            seconds_per_word: 30,
            words_to_find: 5,
            max_passes: 5,
        }
    }
}

impl Rules {
    /// Every value clamped to at least 1 so a game can always be played
    pub fn sanitized(self) -> Self {
        Self {
            lives: self.lives.max(1),
            seconds_per_word: self.seconds_per_word.max(1),
            words_to_find: self.words_to_find.max(1),
            max_passes: self.max_passes.max(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum GameState {
    NotStarted,
    Active,
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no word lists to draw a round from")]
    NoWordLists,
    #[error("guess is empty")]
    EmptyInput,
    #[error("all {max} passes have been used")]
    NoPassesRemaining { max: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// Notifications for the presentation layer, in the order they happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    HintChanged {
        hint: String,
        index: usize,
        total: usize,
    },
    LivesChanged(u8),
    TimerChanged(u32),
    PassesChanged {
        used: usize,
        max: usize,
    },
    FoundChanged {
        found: usize,
        target: usize,
    },
    MascotChanged(u8),
    Toast {
        kind: ToastKind,
        text: String,
    },
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Wrong,
    /// The game was not active
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    Passed,
    Ignored,
}

/// Counters of the round being played
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub remaining_words: Vec<WordEntry>,
    pub current_word_index: usize,
    pub current_hint_index: usize,
    pub found_count: usize,
    pub passed_count: usize,
    pub lives: u8,
    pub timer_seconds: u32,
    pub mascot_stage: u8,
}

/// The game controller: owns the pool, the round state and pending events
#[derive(Debug)]
pub struct Game<R: RandomSource = ThreadRandom> {
    pool: WordPool,
    rules: Rules,
    rng: R,
    state: GameState,
    session: SessionState,
    events: Vec<GameEvent>,
}

impl Game<ThreadRandom> {
    pub fn new(pool: WordPool, rules: Rules) -> Self {
        Self::with_random(pool, rules, ThreadRandom)
    }
}

impl<R: RandomSource> Game<R> {
    pub fn with_random(pool: WordPool, rules: Rules, rng: R) -> Self {
        Self {
            pool,
            rules: rules.sanitized(),
            rng,
            state: GameState::NotStarted,
            session: SessionState::default(),
            events: vec![],
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == GameState::Active
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Hands over every event recorded since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Draws a random list, shuffles it and resets every counter.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.pool.is_empty() {
            return Err(GameError::NoWordLists);
        }

        let list_idx = self.rng.pick(self.pool.word_lists.len());
        let list = &self.pool.word_lists[list_idx];
        let label = list.label(list_idx);
        let mut words = list.words.clone();
        self.rng.shuffle(&mut words);

        self.session = SessionState {
            remaining_words: words,
            lives: self.rules.lives,
            timer_seconds: self.rules.seconds_per_word,
            ..SessionState::default()
        };
        self.state = GameState::Active;

        tracing::info!(
            list = %label,
            words = self.session.remaining_words.len(),
            "round started"
        );

        self.events.push(GameEvent::Started);
        self.events.push(GameEvent::LivesChanged(self.session.lives));
        self.events
            .push(GameEvent::TimerChanged(self.session.timer_seconds));
        self.push_passes();
        self.push_found();
        self.events.push(GameEvent::MascotChanged(0));
        // a list without words cannot be played; the round is over at once
        if self.session.remaining_words.is_empty() {
            tracing::warn!(list = %label, "drawn list has no words");
            self.lose();
        } else {
            self.push_hint();
        }
        Ok(())
    }

    pub fn restart(&mut self) -> Result<(), GameError> {
        self.start()
    }

    pub fn current_word(&self) -> Option<&WordEntry> {
        self.session
            .remaining_words
            .get(self.session.current_word_index)
    }

    pub fn current_hint(&self) -> Option<&str> {
        self.current_word()
            .and_then(|w| w.hints.get(self.session.current_hint_index))
            .map(String::as_str)
    }

    pub fn next_hint(&mut self) {
        if !self.is_active() {
            return;
        }
        let Some(total) = self.current_word().map(|w| w.hints.len()) else {
            return;
        };
        let Some(next) = (self.session.current_hint_index + 1).checked_rem(total) else {
            return;
        };
        self.session.current_hint_index = next;
        self.push_hint();
    }

    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome, GameError> {
        if !self.is_active() {
            return Ok(GuessOutcome::Ignored);
        }

        let guess = normalize_guess(text);
        if guess.is_empty() {
            self.toast(ToastKind::Info, "Please enter a word".to_string());
            return Err(GameError::EmptyInput);
        }

        let Some(expected) = self.current_word().map(|w| w.word.clone()) else {
            return Ok(GuessOutcome::Ignored);
        };

        if guess == expected {
            self.handle_correct();
            Ok(GuessOutcome::Correct)
        } else {
            tracing::debug!(%guess, "wrong guess");
            self.lose_life("Wrong word!");
            Ok(GuessOutcome::Wrong)
        }
    }

    pub fn pass_word(&mut self) -> Result<PassOutcome, GameError> {
        if !self.is_active() || self.session.remaining_words.is_empty() {
            return Ok(PassOutcome::Ignored);
        }
        if self.session.passed_count >= self.rules.max_passes {
            self.toast(ToastKind::Error, "No passes left!".to_string());
            return Err(GameError::NoPassesRemaining {
                max: self.rules.max_passes,
            });
        }

        let passed = self
            .session
            .remaining_words
            .remove(self.session.current_word_index);
        self.session.passed_count += 1;
        tracing::debug!(word = %passed.word, passed = self.session.passed_count, "word passed");

        self.toast(
            ToastKind::Info,
            format!(
                "Word passed ({}/{})",
                self.session.passed_count, self.rules.max_passes
            ),
        );
        self.reset_timer();
        self.session.current_hint_index = 0;
        self.push_passes();

        if self.session.remaining_words.is_empty() {
            self.lose();
        } else {
            self.clamp_word_index();
            self.push_hint();
        }
        Ok(PassOutcome::Passed)
    }

    /// One second of the per-word countdown. Running out costs a life.
    pub fn tick(&mut self) {
        if !self.is_active() {
            return;
        }
        self.session.timer_seconds = self.session.timer_seconds.saturating_sub(1);
        if self.session.timer_seconds == 0 {
            self.lose_life("Time's up!");
        } else {
            self.events
                .push(GameEvent::TimerChanged(self.session.timer_seconds));
        }
    }

    fn handle_correct(&mut self) {
        let found = self
            .session
            .remaining_words
            .remove(self.session.current_word_index);
        self.session.found_count += 1;
        tracing::debug!(word = %found.word, found = self.session.found_count, "word found");

        self.toast(
            ToastKind::Success,
            format!("Correct! The word was \"{}\"", found.word),
        );
        self.reset_timer();
        self.session.current_hint_index = 0;
        self.push_found();

        // finding the last required word wins even when no word is left
        if self.session.found_count >= self.rules.words_to_find {
            self.win();
        } else if self.session.remaining_words.is_empty() {
            self.lose();
        } else {
            self.clamp_word_index();
            self.push_hint();
        }
    }

    fn lose_life(&mut self, reason: &str) {
        self.session.lives = self.session.lives.saturating_sub(1);
        self.session.mascot_stage = (self.session.mascot_stage + 1).min(MAX_MASCOT_STAGE);
        self.toast(ToastKind::Error, reason.to_string());
        self.events.push(GameEvent::LivesChanged(self.session.lives));
        self.events
            .push(GameEvent::MascotChanged(self.session.mascot_stage));
        self.reset_timer();

        if self.session.lives == 0 {
            self.lose();
        }
    }

    fn win(&mut self) {
        self.state = GameState::Won;
        tracing::info!(found = self.session.found_count, "game won");
        self.events.push(GameEvent::Won);
    }

    fn lose(&mut self) {
        self.state = GameState::Lost;
        self.session.mascot_stage = MAX_MASCOT_STAGE;
        tracing::info!(
            found = self.session.found_count,
            lives = self.session.lives,
            remaining = self.session.remaining_words.len(),
            "game lost"
        );
        self.events.push(GameEvent::MascotChanged(MAX_MASCOT_STAGE));
        self.events.push(GameEvent::Lost);
    }

    fn clamp_word_index(&mut self) {
        if self.session.current_word_index >= self.session.remaining_words.len() {
            self.session.current_word_index = 0;
        }
    }

    fn reset_timer(&mut self) {
        self.session.timer_seconds = self.rules.seconds_per_word;
        self.events
            .push(GameEvent::TimerChanged(self.session.timer_seconds));
    }

    fn toast(&mut self, kind: ToastKind, text: String) {
        self.events.push(GameEvent::Toast { kind, text });
    }

    fn push_hint(&mut self) {
        let total = self.current_word().map(|w| w.hints.len()).unwrap_or(0);
        if let Some(hint) = self.current_hint().map(str::to_string) {
            self.events.push(GameEvent::HintChanged {
                hint,
                index: self.session.current_hint_index,
                total,
            });
        }
    }

    fn push_passes(&mut self) {
        self.events.push(GameEvent::PassesChanged {
            used: self.session.passed_count,
            max: self.rules.max_passes,
        });
    }

    fn push_found(&mut self) {
        self.events.push(GameEvent::FoundChanged {
            found: self.session.found_count,
            target: self.rules.words_to_find,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{SeededRandom, Unshuffled};
    use crate::words::WordList;
    use assert_matches::assert_matches;

    fn list(name: &str, count: usize, hints: usize) -> WordList {
        WordList {
            name: Some(name.to_string()),
            words: (0..count)
                .map(|i| {
                    WordEntry::new(
                        format!("{name}{i}"),
                        (0..hints).map(|h| format!("{name}{i} hint {h}")).collect(),
                    )
                })
                .collect(),
        }
    }

    fn pool(lists: Vec<WordList>) -> WordPool {
        WordPool::new(lists).unwrap()
    }

    fn started(count: usize) -> Game<Unshuffled> {
        let mut game = Game::with_random(
            pool(vec![list("w", count, 3)]),
            Rules::default(),
            Unshuffled::default(),
        );
        game.start().unwrap();
        game
    }

    fn answer(game: &Game<Unshuffled>) -> String {
        game.current_word().unwrap().word.clone()
    }

    #[test]
    fn test_rules_default() {
        let rules = Rules::default();
        assert_eq!(rules.lives, 3);
        assert_eq!(rules.seconds_per_word, 30);
        assert_eq!(rules.words_to_find, 5);
        assert_eq!(rules.max_passes, 5);
    }

    #[test]
    fn test_rules_sanitized() {
        let rules = Rules {
            lives: 0,
            seconds_per_word: 0,
            words_to_find: 0,
            max_passes: 0,
        }
        .sanitized();
        assert_eq!(rules.lives, 1);
        assert_eq!(rules.seconds_per_word, 1);
        assert_eq!(rules.words_to_find, 1);
        assert_eq!(rules.max_passes, 1);
    }

    #[test]
    fn test_new_game_is_not_started() {
        let game = Game::new(pool(vec![list("a", 6, 2)]), Rules::default());
        assert_eq!(game.state(), GameState::NotStarted);
        assert!(game.current_hint().is_none());
    }

    #[test]
    fn test_start_resets_counters() {
        let game = started(6);
        let session = game.session();

        assert_eq!(game.state(), GameState::Active);
        assert_eq!(session.lives, 3);
        assert_eq!(session.timer_seconds, 30);
        assert_eq!(session.found_count, 0);
        assert_eq!(session.passed_count, 0);
        assert_eq!(session.current_word_index, 0);
        assert_eq!(session.current_hint_index, 0);
        assert_eq!(session.mascot_stage, 0);
        assert_eq!(session.remaining_words.len(), 6);
        assert_eq!(game.current_hint(), Some("w0 hint 0"));
    }

    #[test]
    fn test_start_without_lists_fails() {
        let mut game = Game::new(WordPool::default(), Rules::default());
        assert_eq!(game.start(), Err(GameError::NoWordLists));
        assert_eq!(game.state(), GameState::NotStarted);
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_start_picks_list_from_random_source() {
        let mut game = Game::with_random(
            pool(vec![list("a", 6, 1), list("b", 7, 1)]),
            Rules::default(),
            Unshuffled { list: 1 },
        );
        game.start().unwrap();
        assert_eq!(game.session().remaining_words.len(), 7);
        assert_eq!(answer(&game), "b0");
    }

    #[test]
    fn test_start_emits_initial_events() {
        let mut game = started(6);
        let events = game.take_events();

        assert_eq!(events.first(), Some(&GameEvent::Started));
        assert!(events.contains(&GameEvent::LivesChanged(3)));
        assert!(events.contains(&GameEvent::TimerChanged(30)));
        assert!(events.contains(&GameEvent::PassesChanged { used: 0, max: 5 }));
        assert!(events.contains(&GameEvent::FoundChanged {
            found: 0,
            target: 5
        }));
        assert_eq!(
            events.last(),
            Some(&GameEvent::HintChanged {
                hint: "w0 hint 0".to_string(),
                index: 0,
                total: 3
            })
        );
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_next_hint_cycles() {
        let mut game = started(6);
        assert_eq!(game.session().current_hint_index, 0);
        game.next_hint();
        assert_eq!(game.session().current_hint_index, 1);
        game.next_hint();
        assert_eq!(game.session().current_hint_index, 2);
        game.next_hint();
        assert_eq!(game.session().current_hint_index, 0);
        assert_eq!(game.current_hint(), Some("w0 hint 0"));
    }

    #[test]
    fn test_next_hint_ignored_before_start() {
        let mut game = Game::new(pool(vec![list("a", 6, 3)]), Rules::default());
        game.next_hint();
        assert_eq!(game.session().current_hint_index, 0);
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_correct_guess_is_normalized() {
        let mut game = started(6);
        game.next_hint();
        game.tick();

        let outcome = game.submit_guess("  W0 \n").unwrap();

        assert_eq!(outcome, GuessOutcome::Correct);
        let session = game.session();
        assert_eq!(session.found_count, 1);
        assert_eq!(session.remaining_words.len(), 5);
        assert_eq!(session.timer_seconds, 30);
        assert_eq!(session.current_hint_index, 0);
        assert!(session.remaining_words.iter().all(|w| w.word != "w0"));
        assert_eq!(game.state(), GameState::Active);
    }

    #[test]
    fn test_correct_guess_toast() {
        let mut game = started(6);
        game.take_events();
        game.submit_guess("w0").unwrap();
        let events = game.take_events();
        assert!(events.contains(&GameEvent::Toast {
            kind: ToastKind::Success,
            text: "Correct! The word was \"w0\"".to_string()
        }));
        assert!(events.contains(&GameEvent::FoundChanged {
            found: 1,
            target: 5
        }));
    }

    #[test]
    fn test_wrong_guess_costs_a_life() {
        let mut game = started(6);
        game.tick();
        game.tick();

        let outcome = game.submit_guess("nope").unwrap();

        assert_eq!(outcome, GuessOutcome::Wrong);
        let session = game.session();
        assert_eq!(session.lives, 2);
        assert_eq!(session.timer_seconds, 30);
        assert_eq!(session.remaining_words.len(), 6);
        assert_eq!(session.mascot_stage, 1);
        assert_eq!(game.state(), GameState::Active);
    }

    #[test]
    fn test_empty_guess_is_rejected_without_state_change() {
        let mut game = started(6);
        let before = game.session().clone();
        game.take_events();

        assert_eq!(game.submit_guess("   "), Err(GameError::EmptyInput));
        assert_eq!(game.session(), &before);
        assert_eq!(
            game.take_events(),
            vec![GameEvent::Toast {
                kind: ToastKind::Info,
                text: "Please enter a word".to_string()
            }]
        );
    }

    #[test]
    fn test_guess_ignored_when_not_active() {
        let mut game = Game::new(pool(vec![list("a", 6, 1)]), Rules::default());
        assert_eq!(game.submit_guess("a0"), Ok(GuessOutcome::Ignored));
        assert_eq!(game.submit_guess(""), Ok(GuessOutcome::Ignored));
    }

    #[test]
    fn test_three_wrong_guesses_lose() {
        let mut game = started(6);
        game.submit_guess("x").unwrap();
        game.submit_guess("y").unwrap();
        assert_eq!(game.state(), GameState::Active);
        game.submit_guess("z").unwrap();

        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.session().lives, 0);
        assert_eq!(game.session().mascot_stage, MAX_MASCOT_STAGE);
        assert!(game.take_events().contains(&GameEvent::Lost));

        // nothing moves after the game is over
        assert_eq!(game.submit_guess("w0"), Ok(GuessOutcome::Ignored));
        assert_eq!(game.session().found_count, 0);
    }

    #[test]
    fn test_five_correct_guesses_win_with_words_left() {
        let mut game = started(6);
        for found in 1..=5 {
            let word = answer(&game);
            assert_eq!(game.submit_guess(&word), Ok(GuessOutcome::Correct));
            assert_eq!(game.session().found_count, found);
        }

        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.session().remaining_words.len(), 1);
        assert!(game.take_events().contains(&GameEvent::Won));
    }

    #[test]
    fn test_last_word_found_still_wins() {
        let mut game = started(5);
        for _ in 0..5 {
            let word = answer(&game);
            game.submit_guess(&word).unwrap();
        }
        assert!(game.session().remaining_words.is_empty());
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn test_running_out_of_words_loses() {
        let mut game = started(6);
        for _ in 0..2 {
            game.pass_word().unwrap();
        }
        for _ in 0..4 {
            let word = answer(&game);
            game.submit_guess(&word).unwrap();
        }
        assert_eq!(game.session().found_count, 4);
        assert_eq!(game.state(), GameState::Lost);
    }

    #[test]
    fn test_index_wraps_after_removing_last_position() {
        let mut game = started(6);
        game.session.current_word_index = 5;
        game.submit_guess("w5").unwrap();
        assert_eq!(game.session().current_word_index, 0);
        assert_eq!(answer(&game), "w0");
    }

    #[test]
    fn test_pass_word() {
        let mut game = started(6);
        game.next_hint();
        game.take_events();

        assert_eq!(game.pass_word(), Ok(PassOutcome::Passed));

        let session = game.session();
        assert_eq!(session.passed_count, 1);
        assert_eq!(session.remaining_words.len(), 5);
        assert_eq!(session.current_hint_index, 0);
        assert_eq!(session.lives, 3);
        assert!(game.take_events().contains(&GameEvent::Toast {
            kind: ToastKind::Info,
            text: "Word passed (1/5)".to_string()
        }));
    }

    #[test]
    fn test_sixth_pass_is_rejected() {
        let mut game = started(10);
        for _ in 0..5 {
            assert_eq!(game.pass_word(), Ok(PassOutcome::Passed));
        }
        let before = game.session().clone();

        assert_matches!(
            game.pass_word(),
            Err(GameError::NoPassesRemaining { max: 5 })
        );
        assert_eq!(game.session(), &before);
        assert_eq!(game.session().passed_count, 5);
        assert_eq!(game.state(), GameState::Active);
    }

    #[test]
    fn test_passing_every_word_loses() {
        let mut game = Game::with_random(
            pool(vec![list("w", 3, 1)]),
            Rules::default(),
            Unshuffled::default(),
        );
        game.start().unwrap();
        for _ in 0..3 {
            game.pass_word().unwrap();
        }
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.pass_word(), Ok(PassOutcome::Ignored));
    }

    #[test]
    fn test_tick_counts_down() {
        let mut game = started(6);
        game.take_events();
        game.tick();
        assert_eq!(game.session().timer_seconds, 29);
        assert_eq!(game.take_events(), vec![GameEvent::TimerChanged(29)]);
    }

    #[test]
    fn test_timeout_acts_like_wrong_guess() {
        let mut game = started(6);
        for _ in 0..29 {
            game.tick();
        }
        assert_eq!(game.session().lives, 3);
        assert_eq!(game.session().timer_seconds, 1);

        game.take_events();
        game.tick();

        assert_eq!(game.session().lives, 2);
        assert_eq!(game.session().timer_seconds, 30);
        assert_eq!(game.session().remaining_words.len(), 6);
        let events = game.take_events();
        let lost_lives = events
            .iter()
            .filter(|e| matches!(e, GameEvent::LivesChanged(_)))
            .count();
        assert_eq!(lost_lives, 1);
        assert!(events.contains(&GameEvent::Toast {
            kind: ToastKind::Error,
            text: "Time's up!".to_string()
        }));
    }

    #[test]
    fn test_timeouts_can_lose_the_game() {
        let mut game = started(6);
        for _ in 0..90 {
            game.tick();
        }
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.session().lives, 0);

        game.tick();
        assert_eq!(game.session().timer_seconds, 30);
    }

    #[test]
    fn test_restart_after_loss() {
        let mut game = started(6);
        for _ in 0..3 {
            game.submit_guess("bad").unwrap();
        }
        assert_eq!(game.state(), GameState::Lost);

        game.restart().unwrap();

        assert_eq!(game.state(), GameState::Active);
        assert_eq!(game.session().lives, 3);
        assert_eq!(game.session().remaining_words.len(), 6);
        assert_eq!(game.session().mascot_stage, 0);
    }

    #[test]
    fn test_hintless_word_never_panics() {
        // literal pools skip validation
        let unchecked = WordPool {
            word_lists: vec![WordList {
                name: None,
                words: vec![WordEntry::new("cat", vec![])],
            }],
        };
        let mut game = Game::with_random(unchecked, Rules::default(), Unshuffled::default());
        game.start().unwrap();

        game.next_hint();

        assert_eq!(game.session().current_hint_index, 0);
        assert!(game.current_hint().is_none());
        assert_eq!(game.submit_guess("cat"), Ok(GuessOutcome::Correct));
    }

    #[test]
    fn test_start_on_empty_list_ends_the_round() {
        let unchecked = WordPool {
            word_lists: vec![WordList {
                name: Some("blank".to_string()),
                words: vec![],
            }],
        };
        let mut game = Game::with_random(unchecked, Rules::default(), Unshuffled::default());

        assert_eq!(game.start(), Ok(()));

        assert_eq!(game.state(), GameState::Lost);
        let events = game.take_events();
        assert!(events.contains(&GameEvent::Lost));
        assert!(!events
            .iter()
            .any(|e| matches!(e, GameEvent::HintChanged { .. })));

        let lives = game.session().lives;
        game.tick();
        assert_eq!(game.session().lives, lives);
        assert_eq!(game.pass_word(), Ok(PassOutcome::Ignored));
    }

    #[test]
    fn test_custom_rules() {
        let rules = Rules {
            lives: 1,
            seconds_per_word: 2,
            words_to_find: 1,
            max_passes: 1,
        };
        let mut game = Game::with_random(pool(vec![list("w", 6, 1)]), rules, Unshuffled::default());
        game.start().unwrap();
        game.pass_word().unwrap();
        assert_matches!(game.pass_word(), Err(GameError::NoPassesRemaining { max: 1 }));
        game.submit_guess("w1").unwrap();
        assert_eq!(game.state(), GameState::Won);

        game.restart().unwrap();
        game.tick();
        game.tick();
        assert_eq!(game.state(), GameState::Lost);
    }

    #[test]
    fn test_seeded_start_is_permutation() {
        let mut game = Game::with_random(
            pool(vec![list("w", 8, 2)]),
            Rules::default(),
            SeededRandom::new(42),
        );
        game.start().unwrap();
        let mut words: Vec<String> = game
            .session()
            .remaining_words
            .iter()
            .map(|w| w.word.clone())
            .collect();
        words.sort();
        let expected: Vec<String> = (0..8).map(|i| format!("w{i}")).collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn test_game_state_display() {
        assert_eq!(GameState::Active.to_string(), "Active");
        assert_eq!(ToastKind::Success.to_string(), "Success");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameError::NoPassesRemaining { max: 5 }.to_string(),
            "all 5 passes have been used"
        );
        assert_eq!(GameError::EmptyInput.to_string(), "guess is empty");
    }
}
