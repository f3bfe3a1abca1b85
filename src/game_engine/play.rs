use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::game_engine::{
    choices::ChoiceSetGenerator,
    error::Result,
    models::{ChoiceSet, SessionRequest},
    scoring::RewardTier,
    session::SessionEngine,
};

/// End-of-game figures for the rewards host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score_percentage: u32,
    pub reward_tier: RewardTier,
    pub correct_count: u32,
    pub total_attempts: u32,
}

/// One play-through: the engine plus the RNG that feeds its choice sets.
///
/// Built fresh for every game the host starts.
pub struct PlayThrough {
    engine: SessionEngine,
    rng: StdRng,
}

impl PlayThrough {
    pub fn start(request: SessionRequest) -> Self {
        let mut rng = match request.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let engine = SessionEngine::create(request.difficulty, &mut rng);
        PlayThrough { engine, rng }
    }

    pub fn engine(&self) -> &SessionEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SessionEngine {
        &mut self.engine
    }

    /// Fresh choices for the current target. Call again on every repetition.
    pub fn choices(&mut self) -> Result<ChoiceSet> {
        let target = self.engine.current_target()?;
        ChoiceSetGenerator::generate(target, self.engine.difficulty(), &mut self.rng)
    }

    /// Final figures; `None` until the last repetition has been advanced past.
    pub fn summary(&self) -> Option<SessionSummary> {
        if !self.engine.is_complete() {
            return None;
        }
        Some(SessionSummary {
            score_percentage: self.engine.score_percentage(),
            reward_tier: self.engine.reward_tier(),
            correct_count: self.engine.correct_count(),
            total_attempts: self.engine.total_attempts(),
        })
    }
}

impl From<SessionRequest> for PlayThrough {
    fn from(request: SessionRequest) -> Self {
        PlayThrough::start(request)
    }
}
