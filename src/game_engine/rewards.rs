//! Unlockable reward collection.
//!
//! Holds the reward catalogue and which entries the player has unlocked.
//! Persistence is left to the host: it stores the string from
//! [`RewardCollection::to_progress_json`] and hands it back on the next launch.

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::game_engine::scoring::RewardTier;

const CATALOGUE: [&str; 15] = [
    "luna", "stella", "aurora", "nova", "ginger", "sunny", "pixie", "rainbow",
    "snowflake", "starlight", "donna", "sparkle", "dreamy", "magic", "elsa",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: u32,
    pub name: String,
    /// Asset filename, e.g. "01_luna.jpg".
    pub filename: String,
}

fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None        => String::new(),
    }
}

fn catalogue() -> Vec<Reward> {
    CATALOGUE
        .iter()
        .enumerate()
        .map(|(i, &stem)| {
            let id = i as u32 + 1;
            Reward { id, name: capitalise(stem), filename: format!("{:02}_{}.jpg", id, stem) }
        })
        .collect()
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Progress {
    #[serde(default)]
    unlocked_ids: Vec<u32>,
}

#[derive(Debug, Clone)]
pub struct RewardCollection {
    rewards: Vec<Reward>,
    unlocked: BTreeSet<u32>,
}

impl RewardCollection {
    /// Full catalogue, nothing unlocked.
    pub fn new() -> Self {
        RewardCollection { rewards: catalogue(), unlocked: BTreeSet::new() }
    }

    /// Restore from saved progress. Unreadable progress starts a fresh
    /// collection; ids outside the catalogue are dropped.
    pub fn from_progress_json(saved: &str) -> Self {
        let mut collection = Self::new();
        match serde_json::from_str::<Progress>(saved) {
            Ok(progress) => {
                for id in progress.unlocked_ids {
                    collection.unlock(id);
                }
            }
            Err(e) => warn!("Could not load rewards progress: {}", e),
        }
        collection
    }

    pub fn to_progress_json(&self) -> String {
        json!({
            "unlockedIds": self.unlocked.iter().collect::<Vec<_>>(),
            "totalUnlocked": self.unlocked.len(),
        })
        .to_string()
    }

    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    pub fn is_unlocked(&self, id: u32) -> bool {
        self.unlocked.contains(&id)
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    pub fn total_count(&self) -> usize {
        self.rewards.len()
    }

    pub fn is_all_unlocked(&self) -> bool {
        self.unlocked.len() >= self.rewards.len()
    }

    pub fn can_unlock_more(&self) -> bool {
        !self.is_all_unlocked()
    }

    /// A uniformly chosen reward that is still locked.
    pub fn random_locked<R: Rng>(&self, rng: &mut R) -> Option<&Reward> {
        let locked: Vec<&Reward> = self.rewards.iter().filter(|r| !self.is_unlocked(r.id)).collect();
        if locked.is_empty() {
            return None;
        }
        Some(locked[rng.gen_range(0..locked.len())])
    }

    /// Mark `id` unlocked. `None` if the catalogue has no such reward.
    pub fn unlock(&mut self, id: u32) -> Option<&Reward> {
        let reward = self.rewards.iter().find(|r| r.id == id)?;
        self.unlocked.insert(id);
        Some(reward)
    }

    /// First-time players get one reward before their first game.
    pub fn offers_starter_reward(&self) -> bool {
        self.unlocked.is_empty()
    }

    /// Whether the end-of-game rewards screen is worth showing.
    pub fn should_show_rewards(&self, tier: RewardTier) -> bool {
        tier.earned_any() && self.can_unlock_more()
    }

    /// One unlock per rewards visit, earned by a non-zero tier or granted as
    /// the starter reward.
    pub fn can_unlock(&self, tier: RewardTier, starter_mode: bool, unlocked_this_visit: bool) -> bool {
        (tier.earned_any() || starter_mode) && self.can_unlock_more() && !unlocked_this_visit
    }
}

impl Default for RewardCollection {
    fn default() -> Self {
        Self::new()
    }
}
