//! # digit_drill
//!
//! Session core for a digit-recognition matching game.
//!
//! A learner is shown a target digit (0-9) and picks it out of a set of
//! on-screen choices, three times per round, across several rounds. Final
//! accuracy earns a reward tier of zero to five units.
//!
//! The crate holds only the logic: sequencing, distractor generation, scoring
//! and reward tiers. Rendering, audio, timing and storage belong to the host,
//! which drives the engine with plain calls and reads back plain data.
//!
//! ## How it works
//!
//! 1. Build a [`SessionRequest`] with a difficulty and an optional RNG seed.
//! 2. [`PlayThrough::start`] picks the target sequence (5 distinct digits on
//!    Easy, all ten shuffled on Medium/Hard).
//! 3. On each repetition the host asks for [`PlayThrough::choices`], shows
//!    them, reports the pick via [`SessionEngine::record_answer`], and then
//!    calls [`SessionEngine::advance`] once its feedback animation is done.
//! 4. When [`SessionEngine::is_complete`] turns true, [`PlayThrough::summary`]
//!    gives the score percentage and [`RewardTier`].
//!
//! ## Quick start
//!
//! ```rust
//! use digit_drill::{Difficulty, PlayThrough, SessionRequest};
//!
//! let mut play = PlayThrough::start(SessionRequest::seeded(Difficulty::Easy, 42));
//!
//! while !play.engine().is_complete() {
//!     if play.engine().is_first_repetition_of_round() {
//!         // Host shows the target alone here.
//!         play.engine_mut().reveal_choices().unwrap();
//!     }
//!     let choices = play.choices().unwrap();
//!     let pick = choices.choices[0];
//!     play.engine_mut().record_answer(pick).unwrap();
//!     play.engine_mut().advance().unwrap();
//! }
//!
//! let summary = play.summary().unwrap();
//! println!("{}% - {} stars", summary.score_percentage, summary.reward_tier.units());
//! ```

pub mod game_engine;
pub mod host_view;

// Convenience re-exports so callers can use `digit_drill::PlayThrough`
// directly without reaching into `game_engine::`.
pub use game_engine::{
    Choice, ChoiceSet, ChoiceSetGenerator, Difficulty, Digit, Error, Phase, PlayThrough,
    Result, Reward, RewardCollection, RewardTier, SessionEngine, SessionRequest, SessionSummary,
};
pub use host_view::to_screen_state;

#[cfg(test)]
mod tests;
