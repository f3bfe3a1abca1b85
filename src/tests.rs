//! Crate-level tests for `digit_drill`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed gives the same targets and choices |
//! | Target sequence | Easy: 5 distinct digits; Medium/Hard: a permutation of 0-9 |
//! | Progression | Completion after exactly rounds × 3 advances |
//! | Choice sets | Target once, correct size, no duplicates across a whole game |
//! | Scoring | Fresh session is 0%; 3 of 4 is 75%; tier extremes |
//! | Walkthrough | Full Easy game driven the way a host would |

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_engine::{
    Choice, ChoiceSetGenerator, Difficulty, Digit, Phase, PlayThrough, RewardTier,
    SessionEngine, SessionRequest, MAX_REWARD_TIER, REPETITIONS_PER_ROUND,
};

// ── helpers ──────────────────────────────────────────────────────────────────

const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

fn all_difficulties() -> [Difficulty; 3] {
    [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
}

fn fresh(difficulty: Difficulty, seed: u64) -> SessionEngine {
    let mut rng = StdRng::seed_from_u64(seed);
    SessionEngine::create(difficulty, &mut rng)
}

/// Any digit other than `target`.
fn wrong_digit(target: Digit) -> Digit {
    Digit::new((target.value() + 1) % 10).unwrap()
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_play_through() {
    for difficulty in all_difficulties() {
        let mut a = PlayThrough::start(SessionRequest::seeded(difficulty, 12345));
        let mut b = PlayThrough::start(SessionRequest::seeded(difficulty, 12345));
        assert_eq!(a.engine().target_sequence(), b.engine().target_sequence());
        assert_eq!(a.choices().unwrap(), b.choices().unwrap(), "choices differ for {difficulty}");
    }
}

#[test]
fn different_seeds_produce_varied_sequences() {
    let mut same_count = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = fresh(Difficulty::Medium, seed);
        let b = fresh(Difficulty::Medium, seed + 500);
        if a.target_sequence() == b.target_sequence() {
            same_count += 1;
        }
    }
    assert!(same_count < 2, "Too many identical sequences ({same_count}/{pairs})");
}

#[test]
fn entropy_seed_produces_a_valid_session() {
    let mut play = PlayThrough::start(SessionRequest::new(Difficulty::Hard));
    assert_eq!(play.engine().total_rounds(), 10);
    assert_eq!(play.choices().unwrap().len(), 7);
}

// ── target sequence ──────────────────────────────────────────────────────────

#[test]
fn easy_sequence_is_five_distinct_digits() {
    for seed in SEEDS {
        let s = fresh(Difficulty::Easy, seed);
        let seq = s.target_sequence();
        assert_eq!(seq.len(), 5, "seed={seed}");
        let unique: HashSet<_> = seq.iter().collect();
        assert_eq!(unique.len(), 5, "Easy targets must not repeat (seed={seed})");
        assert!(seq.iter().all(|d| d.value() <= 9));
    }
}

#[test]
fn medium_and_hard_sequences_are_permutations() {
    for difficulty in [Difficulty::Medium, Difficulty::Hard] {
        for seed in SEEDS {
            let mut seq = fresh(difficulty, seed).target_sequence().to_vec();
            seq.sort();
            assert_eq!(seq, Digit::all().to_vec(), "{difficulty} seed={seed}");
        }
    }
}

#[test]
fn sequence_is_fixed_for_the_whole_session() {
    let mut s = fresh(Difficulty::Medium, 3);
    let before = s.target_sequence().to_vec();
    for _ in 0..7 {
        s.advance().unwrap();
    }
    assert_eq!(s.target_sequence(), before.as_slice());
}

// ── progression ──────────────────────────────────────────────────────────────

#[test]
fn completes_after_exactly_rounds_times_repetitions_advances() {
    for difficulty in all_difficulties() {
        let mut s = fresh(difficulty, 42);
        let steps = REPETITIONS_PER_ROUND * difficulty.total_rounds();
        for step in 0..steps {
            assert!(!s.is_complete(), "{difficulty} completed early at step {step}");
            s.advance().unwrap();
        }
        assert!(s.is_complete(), "{difficulty} not complete after {steps} advances");
    }
}

#[test]
fn only_first_repetition_presents_the_target() {
    let mut s = fresh(Difficulty::Hard, 8);
    let mut presenting = 0;
    while !s.is_complete() {
        if s.is_first_repetition_of_round() {
            assert_eq!(s.phase(), Phase::Presenting);
            presenting += 1;
        }
        s.advance().unwrap();
    }
    assert_eq!(presenting, 10);
}

// ── choice sets ──────────────────────────────────────────────────────────────

#[test]
fn every_choice_set_in_a_game_is_well_formed() {
    for difficulty in all_difficulties() {
        for seed in SEEDS {
            let mut play = PlayThrough::start(SessionRequest::seeded(difficulty, seed));
            while !play.engine().is_complete() {
                let target = play.engine().current_target().unwrap();
                let set = play.choices().unwrap();
                assert_eq!(set.target, target);
                assert_eq!(set.len(), difficulty.choice_count());
                let hits = set.iter().filter(|&&c| c == Choice::Digit(target)).count();
                assert_eq!(hits, 1, "{difficulty} seed={seed}");
                let unique: HashSet<_> = set.iter().collect();
                assert_eq!(unique.len(), set.len(), "{difficulty} seed={seed}");
                play.engine_mut().advance().unwrap();
            }
        }
    }
}

#[test]
fn choices_are_regenerated_each_repetition() {
    // Same target, fresh draw: across a round the sets should not all match.
    let mut varied = 0;
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let target = Digit::new(6).unwrap();
        let sets: Vec<_> = (0..REPETITIONS_PER_ROUND)
            .map(|_| ChoiceSetGenerator::generate(target, Difficulty::Medium, &mut rng).unwrap())
            .collect();
        if sets.windows(2).any(|w| w[0] != w[1]) {
            varied += 1;
        }
    }
    assert!(varied >= 4);
}

// ── scoring ──────────────────────────────────────────────────────────────────

#[test]
fn fresh_session_scores_zero() {
    let s = fresh(Difficulty::Easy, 1);
    assert_eq!(s.score_percentage(), 0);
    assert_eq!(s.reward_tier(), RewardTier(0));
}

#[test]
fn three_of_four_is_seventy_five_percent() {
    let mut s = fresh(Difficulty::Medium, 1);
    let target = s.current_target().unwrap();
    for _ in 0..3 {
        s.record_answer(target).unwrap();
    }
    s.record_answer(wrong_digit(target)).unwrap();
    assert_eq!(s.correct_count(), 3);
    assert_eq!(s.total_attempts(), 4);
    assert_eq!(s.score_percentage(), 75);
    assert_eq!(s.reward_tier().units(), 4);
}

#[test]
fn perfect_game_earns_max_tier() {
    let mut play = PlayThrough::start(SessionRequest::seeded(Difficulty::Hard, 5));
    while !play.engine().is_complete() {
        let target = play.engine().current_target().unwrap();
        play.engine_mut().record_answer(target).unwrap();
        play.engine_mut().advance().unwrap();
    }
    let summary = play.summary().unwrap();
    assert_eq!(summary.score_percentage, 100);
    assert_eq!(summary.reward_tier.units(), MAX_REWARD_TIER);
    assert_eq!(summary.total_attempts, 30);
}

#[test]
fn all_wrong_game_earns_nothing() {
    let mut play = PlayThrough::start(SessionRequest::seeded(Difficulty::Easy, 5));
    while !play.engine().is_complete() {
        play.engine_mut().record_answer(Choice::Letter('Z')).unwrap();
        play.engine_mut().advance().unwrap();
    }
    let summary = play.summary().unwrap();
    assert_eq!(summary.score_percentage, 0);
    assert!(!summary.reward_tier.earned_any());
}

// ── walkthrough ──────────────────────────────────────────────────────────────

#[test]
fn easy_walkthrough() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut s = SessionEngine::create(Difficulty::Easy, &mut rng);
    let first = s.target_sequence()[0];

    // Round 0, repetition 0: present the target alone.
    assert!(s.is_first_repetition_of_round());
    assert_eq!(s.current_target().unwrap(), first);
    s.reveal_choices().unwrap();

    let set = ChoiceSetGenerator::generate(first, Difficulty::Easy, &mut rng).unwrap();
    assert_eq!(set.len(), 3);
    assert!(set.is_correct(Choice::Digit(first)));
    assert_eq!(set.iter().filter(|c| matches!(c, Choice::Letter(_))).count(), 2);

    assert!(s.record_answer(first).unwrap());
    assert_eq!((s.correct_count(), s.total_attempts()), (1, 1));

    s.advance().unwrap();
    assert_eq!(s.current_repetition(), 1);
    assert!(!s.is_first_repetition_of_round());

    s.record_answer(first).unwrap();
    s.advance().unwrap();
    s.record_answer(wrong_digit(first)).unwrap();
    s.advance().unwrap();
    assert_eq!(s.current_round_index(), 1);
    assert_eq!(s.current_repetition(), 0);

    // Remaining 4 rounds: 12 more advances, 15 in total.
    for _ in 0..12 {
        assert!(!s.is_complete());
        s.advance().unwrap();
    }
    assert!(s.is_complete());
    assert_eq!(s.total_attempts(), 3);
    assert_eq!(s.score_percentage(), 67);
}
