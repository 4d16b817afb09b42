use std::collections::HashSet;
use std::sync::Arc;

use crate::dictionary::Dictionary;
use crate::game::prompt;

/// Seconds on the clock for each prompt
pub const ROUND_DURATION_SECS: u32 = 15;
/// Free prompt skips per session
pub const MAX_PASSES: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Outcome of a word submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Accepted,
    Rejected,
}

/// Outcome of a pass request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    Passed,
    Denied,
}

/// One game session: the countdown state machine from the first prompt to
/// game over, and back through retry.
///
/// Every entry point is defined for both phases; calls made in the wrong
/// phase are no-ops that return the inert outcome. The session never ticks
/// itself — an external timer source drives [`Session::tick`] once per
/// elapsed second while the session is in [`Phase::Playing`].
pub struct Session {
    dictionary: Arc<Dictionary>,
    round_seconds: u32,
    max_passes: u32,
    phase: Phase,
    prompt: String,
    used_words: HashSet<String>,
    score: u32,
    passes_remaining: u32,
    time_remaining: u32,
}

impl Session {
    pub fn new(dictionary: Arc<Dictionary>, round_seconds: u32, max_passes: u32) -> Self {
        let prompt = prompt::generate(dictionary.prefixes());
        Self {
            dictionary,
            round_seconds,
            max_passes,
            phase: Phase::Playing,
            prompt,
            used_words: HashSet::new(),
            score: 0,
            passes_remaining: max_passes,
            time_remaining: round_seconds,
        }
    }

    /// Evaluate a submitted word against the current prompt.
    ///
    /// Accepted iff the normalized input is at least 3 characters, contains
    /// the prompt, is in the dictionary, and has not been used this session.
    /// A rejection carries no reason and changes no session state; clearing
    /// the typed input is the caller's concern.
    pub fn submit(&mut self, input: &str) -> Submission {
        if self.phase != Phase::Playing {
            return Submission::Rejected;
        }

        let word = input.trim().to_lowercase();
        if word.chars().count() < 3
            || !word.contains(self.prompt.as_str())
            || !self.dictionary.contains(&word)
            || self.used_words.contains(&word)
        {
            return Submission::Rejected;
        }

        self.used_words.insert(word);
        self.score += 1;
        self.next_round();
        Submission::Accepted
    }

    /// Trade one of the remaining passes for a fresh prompt
    pub fn pass(&mut self) -> PassOutcome {
        if self.phase != Phase::Playing || self.passes_remaining == 0 {
            return PassOutcome::Denied;
        }

        self.passes_remaining -= 1;
        self.next_round();
        PassOutcome::Passed
    }

    /// Advance the countdown by one second.
    ///
    /// Returns true exactly once per session: on the tick that reaches zero
    /// and ends the game. The caller uses that signal to release its timer
    /// and persist the final score.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.phase = Phase::GameOver;
            return true;
        }
        false
    }

    /// Start a fresh session after game over; no-op while still playing
    pub fn retry(&mut self) {
        if self.phase != Phase::GameOver {
            return;
        }

        self.score = 0;
        self.passes_remaining = self.max_passes;
        self.used_words.clear();
        self.phase = Phase::Playing;
        self.next_round();
    }

    fn next_round(&mut self) {
        self.prompt = prompt::generate(self.dictionary.prefixes());
        self.time_remaining = self.round_seconds;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn passes_remaining(&self) -> u32 {
        self.passes_remaining
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }
}
