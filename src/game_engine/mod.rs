//! Core game engine - session progression, choice generation, and scoring.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | Shared types: digits, choices, difficulty, phases, requests |
//! | `sampling` | Fisher-Yates shuffle and sampling without replacement |
//! | `choices`  | `ChoiceSetGenerator` - target plus distractors, shuffled |
//! | `session`  | `SessionEngine` - round/repetition state machine |
//! | `scoring`  | Score percentage and reward tiers |
//! | `rewards`  | Unlockable reward collection and its gating rules |
//! | `play`     | `PlayThrough` - engine + seeded RNG for one game |
//! | `error`    | Crate error type |

pub mod choices;
pub mod error;
pub mod models;
pub mod play;
pub mod rewards;
pub mod sampling;
pub mod scoring;
pub mod session;

pub use choices::ChoiceSetGenerator;
pub use error::{Error, Result};
pub use models::{
    Choice, ChoiceSet, Difficulty, Digit, DistractorKind, Phase, SessionRequest,
    LETTER_ALPHABET, REPETITIONS_PER_ROUND,
};
pub use play::{PlayThrough, SessionSummary};
pub use rewards::{Reward, RewardCollection};
pub use scoring::{score_percentage, RewardTier, MAX_REWARD_TIER};
pub use session::SessionEngine;
