//! Choice-set generation: the target digit plus distractors, shuffled.
//!
//! Easy mixes one digit with letters, so the learner only has to spot the
//! digit shape. Medium and Hard draw their distractors from the other nine
//! digits.

use rand::Rng;

use crate::game_engine::{
    error::Result,
    models::{Choice, ChoiceSet, Difficulty, Digit, DistractorKind, LETTER_ALPHABET},
    sampling::{sample, shuffle},
};

pub struct ChoiceSetGenerator;

impl ChoiceSetGenerator {
    /// Build the shuffled candidate set for `target` at `difficulty`.
    pub fn generate<R: Rng>(target: Digit, difficulty: Difficulty, rng: &mut R) -> Result<ChoiceSet> {
        let needed = difficulty.distractor_count();

        let distractors: Vec<Choice> = match difficulty.distractor_kind() {
            DistractorKind::Letters => sample(&LETTER_ALPHABET, needed, rng)?
                .into_iter()
                .map(Choice::Letter)
                .collect(),
            DistractorKind::Digits => {
                let others: Vec<Digit> = Digit::all().into_iter().filter(|&d| d != target).collect();
                sample(&others, needed, rng)?
                    .into_iter()
                    .map(Choice::Digit)
                    .collect()
            }
        };

        let mut choices = Vec::with_capacity(1 + needed);
        choices.push(Choice::Digit(target));
        choices.extend(distractors);
        shuffle(&mut choices, rng);

        Ok(ChoiceSet { target, choices })
    }
}
