//! Round/repetition state machine for one play-through.
//!
//! The engine does no I/O and owns no timers. A host drives it:
//!
//! ```text
//! Presenting ──reveal_choices──▶ AwaitingChoice ──record_answer──▶ Scored
//!     ▲                               ▲                              │
//!     │ (next round)                  │ (next repetition)            │
//!     └───────────────────────────────┴────────────advance───────────┘
//!                                                                    ▼
//!                                                        Complete (after last round)
//! ```
//!
//! Scoring and progression are separate calls so the host can run feedback
//! animation between `record_answer` and `advance`.

use rand::Rng;
use tracing::{debug, info};

use crate::game_engine::{
    error::{Error, Result},
    models::{Choice, Difficulty, Digit, Phase, REPETITIONS_PER_ROUND},
    sampling::shuffle,
    scoring::{score_percentage, RewardTier},
};

#[derive(Debug, Clone)]
pub struct SessionEngine {
    difficulty: Difficulty,
    target_sequence: Vec<Digit>,
    current_round_index: usize,
    current_repetition: usize,
    correct_count: u32,
    total_attempts: u32,
    phase: Phase,
}

impl SessionEngine {
    /// Start a play-through. Easy draws 5 distinct digits; Medium and Hard
    /// use a permutation of all ten.
    pub fn create<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        let mut digits = Digit::all().to_vec();
        shuffle(&mut digits, rng);
        digits.truncate(difficulty.total_rounds());

        debug!(%difficulty, targets = ?digits, "Created session");

        SessionEngine {
            difficulty,
            target_sequence: digits,
            current_round_index: 0,
            current_repetition: 0,
            correct_count: 0,
            total_attempts: 0,
            phase: Phase::Presenting,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn target_sequence(&self) -> &[Digit] {
        &self.target_sequence
    }

    pub fn total_rounds(&self) -> usize {
        self.target_sequence.len()
    }

    pub fn current_round_index(&self) -> usize {
        self.current_round_index
    }

    pub fn current_repetition(&self) -> usize {
        self.current_repetition
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn total_attempts(&self) -> u32 {
        self.total_attempts
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.current_round_index >= self.total_rounds()
    }

    /// True when the host should show the target alone before the choices.
    pub fn is_first_repetition_of_round(&self) -> bool {
        self.current_repetition == 0
    }

    pub fn current_target(&self) -> Result<Digit> {
        self.target_sequence
            .get(self.current_round_index)
            .copied()
            .ok_or(Error::SessionComplete)
    }

    /// The target-alone presentation is over; choices are now on screen.
    pub fn reveal_choices(&mut self) -> Result<()> {
        if self.is_complete() {
            return Err(Error::SessionComplete);
        }
        if self.phase == Phase::Presenting {
            self.phase = Phase::AwaitingChoice;
        }
        Ok(())
    }

    /// Score one selection. Returns whether it matched the current target.
    ///
    /// Only the counters change here; call [`advance`](Self::advance) to move on.
    /// Guarding against double submission is the host's job.
    pub fn record_answer(&mut self, selected: impl Into<Choice>) -> Result<bool> {
        let target = self.current_target()?;
        let is_correct = selected.into() == Choice::Digit(target);

        self.total_attempts += 1;
        if is_correct {
            self.correct_count += 1;
        }
        self.phase = Phase::Scored;
        Ok(is_correct)
    }

    /// Step to the next repetition, rolling into the next round after the last one.
    pub fn advance(&mut self) -> Result<Phase> {
        if self.is_complete() {
            return Err(Error::SessionComplete);
        }

        self.current_repetition += 1;
        if self.current_repetition >= REPETITIONS_PER_ROUND {
            self.current_repetition = 0;
            self.current_round_index += 1;
        }

        self.phase = if self.is_complete() {
            info!(
                score = self.score_percentage(),
                tier = self.reward_tier().units(),
                "Session complete"
            );
            Phase::Complete
        } else if self.is_first_repetition_of_round() {
            Phase::Presenting
        } else {
            Phase::AwaitingChoice
        };

        if let Some(target) = self.target_sequence.get(self.current_round_index) {
            debug!(
                "Round {}, Rep {}/{}, Target: {}",
                self.current_round_index + 1,
                self.current_repetition + 1,
                REPETITIONS_PER_ROUND,
                target
            );
        }
        Ok(self.phase)
    }

    pub fn score_percentage(&self) -> u32 {
        score_percentage(self.correct_count, self.total_attempts)
    }

    pub fn reward_tier(&self) -> RewardTier {
        RewardTier::from_percentage(self.score_percentage())
    }
}
