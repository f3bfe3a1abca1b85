use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::game_engine::error::{Error, Result};

/// Choice-answer cycles played for each target before moving on.
pub const REPETITIONS_PER_ROUND: usize = 3;

/// Distractor letters for Easy mode. I, O and U are left out because they
/// read too much like 1, 0 and each other.
pub const LETTER_ALPHABET: [char; 23] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M',
    'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'X', 'Y', 'Z',
];

// ---------------------------------------------------------------------------
// Digit / choice primitives
// ---------------------------------------------------------------------------

/// A single decimal digit, 0..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Result<Self> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(Error::InvalidDigit(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// All ten digits in ascending order.
    pub fn all() -> [Digit; 10] {
        [0, 1, 2, 3, 4, 5, 6, 7, 8, 9].map(Digit)
    }
}

impl TryFrom<u8> for Digit {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Digit::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> u8 {
        d.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One on-screen candidate: the target digit, a distractor digit, or a
/// distractor letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Digit(Digit),
    Letter(char),
}

impl From<Digit> for Choice {
    fn from(d: Digit) -> Self {
        Choice::Digit(d)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Digit(d)  => write!(f, "{}", d),
            Choice::Letter(c) => write!(f, "{}", c),
        }
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistractorKind {
    Letters,
    Digits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Number of rounds (distinct targets) in a play-through.
    pub fn total_rounds(self) -> usize {
        match self {
            Difficulty::Easy                      => 5,
            Difficulty::Medium | Difficulty::Hard => 10,
        }
    }

    pub fn distractor_count(self) -> usize {
        match self {
            Difficulty::Easy   => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard   => 6,
        }
    }

    /// Size of every choice set: the target plus its distractors.
    pub fn choice_count(self) -> usize {
        1 + self.distractor_count()
    }

    pub fn distractor_kind(self) -> DistractorKind {
        match self {
            Difficulty::Easy                      => DistractorKind::Letters,
            Difficulty::Medium | Difficulty::Hard => DistractorKind::Digits,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy   => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard   => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Easy"   => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard"   => Ok(Difficulty::Hard),
            _ => Err(Error::UnknownDifficulty(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Session phase / request / choice set
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Target shown alone; first repetition of a round only.
    Presenting,
    AwaitingChoice,
    /// Answer recorded, feedback pending.
    Scored,
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Presenting     => "Presenting",
            Phase::AwaitingChoice => "AwaitingChoice",
            Phase::Scored         => "Scored",
            Phase::Complete       => "Complete",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    pub difficulty: Difficulty,
    /// `Some(seed)` makes the whole play-through reproducible.
    pub rng_seed: Option<u64>,
}

impl SessionRequest {
    /// Entropy-seeded request for `difficulty`.
    pub fn new(difficulty: Difficulty) -> Self {
        SessionRequest { difficulty, rng_seed: None }
    }

    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        SessionRequest { difficulty, rng_seed: Some(seed) }
    }
}

/// The candidates shown for one repetition, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSet {
    pub target: Digit,
    pub choices: Vec<Choice>,
}

impl ChoiceSet {
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Choice> {
        self.choices.iter()
    }

    /// Display position of the correct answer.
    pub fn correct_index(&self) -> Option<usize> {
        let target = Choice::Digit(self.target);
        self.choices.iter().position(|&c| c == target)
    }

    pub fn is_correct(&self, choice: Choice) -> bool {
        choice == Choice::Digit(self.target)
    }
}
