//! Simulated play-through of all three difficulties.
//!
//! Run with: `cargo run --example demo`
//! Add `RUST_LOG=digit_drill=debug` to see the engine's round trace.
//!
//! This example drives the engine the way a UI host would:
//!
//! 1. **Presenting**: on the first repetition of a round the host shows the
//!    target alone, then calls `reveal_choices()`.
//! 2. **AwaitingChoice**: the host asks `PlayThrough::choices()` for a fresh
//!    set and waits for a pick. Here a "learner" picks the target 80% of
//!    the time.
//! 3. **Scored**: `record_answer()` updates the counters; the host would play
//!    feedback now, then call `advance()`.
//! 4. **Complete**: `summary()` gives the score and reward tier, which the
//!    reward collection uses to decide whether to offer an unlock.

use digit_drill::{
    to_screen_state, Choice, Difficulty, PlayThrough, RewardCollection, SessionRequest,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

fn play(difficulty: Difficulty, seed: u64, learner: &mut StdRng, rewards: &mut RewardCollection) {
    let mut game = PlayThrough::start(SessionRequest::seeded(difficulty, seed));
    let targets: Vec<String> = game.engine().target_sequence().iter().map(|d| d.to_string()).collect();

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  seed: {}  targets: {}", difficulty, seed, targets.join(" "));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    while !game.engine().is_complete() {
        let engine = game.engine();
        if engine.is_first_repetition_of_round() {
            println!("  Round {}: showing {}", engine.current_round_index() + 1, engine.current_target().unwrap());
            game.engine_mut().reveal_choices().unwrap();
        }

        let set = game.choices().unwrap();
        let pick = if learner.gen_bool(0.8) {
            Choice::Digit(set.target)
        } else {
            *set.iter().find(|&&c| !set.is_correct(c)).unwrap()
        };

        let labels: Vec<String> = set.iter().map(|c| c.to_string()).collect();
        let correct = game.engine_mut().record_answer(pick).unwrap();
        println!("    [{}]  picked {}  {}", labels.join(" "), pick, if correct { "✓" } else { "✗" });

        game.engine_mut().advance().unwrap();
    }

    let summary = game.summary().unwrap();
    println!();
    println!(
        "  Score: {}%  ({}/{})  Stars: {}",
        summary.score_percentage,
        summary.correct_count,
        summary.total_attempts,
        "⭐".repeat(summary.reward_tier.units() as usize)
    );
    println!("  Final screen: {}", to_screen_state(game.engine(), None));

    if rewards.can_unlock(summary.reward_tier, false, false) {
        if let Some(id) = rewards.random_locked(learner).map(|r| r.id) {
            if let Some(reward) = rewards.unlock(id) {
                println!("  Unlocked: {} ({})", reward.name, reward.filename);
            }
        }
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut learner = StdRng::seed_from_u64(7);
    let mut rewards = RewardCollection::new();

    for (difficulty, seed) in [(Difficulty::Easy, 42), (Difficulty::Medium, 43), (Difficulty::Hard, 44)] {
        play(difficulty, seed, &mut learner, &mut rewards);
    }

    println!("  Collection: {}/{}", rewards.unlocked_count(), rewards.total_count());
    println!("  Saved progress: {}", rewards.to_progress_json());
}
