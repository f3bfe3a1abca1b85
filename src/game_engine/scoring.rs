use serde::{Deserialize, Serialize};

/// Highest reward tier a session can earn.
pub const MAX_REWARD_TIER: u8 = 5;

/// Accuracy as a whole percentage, rounded half-up.
///
/// Integer arithmetic: `(200c + t) / 2t` is `floor(100c/t + 0.5)`.
/// Returns 0 when nothing has been attempted.
pub fn score_percentage(correct: u32, attempts: u32) -> u32 {
    if attempts == 0 {
        return 0;
    }
    let c = u64::from(correct);
    let t = u64::from(attempts);
    ((200 * c + t) / (2 * t)) as u32
}

/// Number of reward units (stars) earned for a final accuracy.
///
/// Boundaries are strict: 0% earns nothing, 1-20% one unit, 21-40% two,
/// 41-60% three, 61-80% four, above 80% five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RewardTier(pub u8);

impl RewardTier {
    pub fn from_percentage(percentage: u32) -> Self {
        let units = match percentage {
            0            => 0,
            p if p > 80  => 5,
            p if p > 60  => 4,
            p if p > 40  => 3,
            p if p > 20  => 2,
            _            => 1,
        };
        RewardTier(units)
    }

    pub fn units(self) -> u8 {
        self.0
    }

    pub fn earned_any(self) -> bool {
        self.0 > 0
    }
}
