use serde_json::{json, Value};

use crate::game_engine::{ChoiceSet, Phase, SessionEngine, REPETITIONS_PER_ROUND};

/// Render the choices as plain strings ("7", "K") in display order.
fn choice_labels(choices: &ChoiceSet) -> Value {
    Value::Array(choices.iter().map(|c| Value::String(c.to_string())).collect())
}

/// Round counter as the player sees it (1-based, capped at the last round).
fn round_display(engine: &SessionEngine) -> usize {
    (engine.current_round_index() + 1).min(engine.total_rounds())
}

/// Snapshot of what a UI host should put on screen right now.
///
/// Only numbers and structural data; any wording is the host's business.
/// `choices` is the set the host generated for the current repetition, if any.
pub fn to_screen_state(engine: &SessionEngine, choices: Option<&ChoiceSet>) -> Value {
    let phase = engine.phase();
    let complete = phase == Phase::Complete;

    let target = engine.current_target().ok().map(|d| d.value());
    let show_target_alone = phase == Phase::Presenting;

    let choices = match (complete, choices) {
        (false, Some(set)) => choice_labels(set),
        _                  => Value::Array(Vec::new()),
    };

    let result = if complete {
        json!({
            "score_percentage": engine.score_percentage(),
            "reward_tier":      engine.reward_tier().units(),
        })
    } else {
        Value::Null
    };

    json!({
        "phase":             phase.to_string(),
        "difficulty":        engine.difficulty().to_string(),
        "round":             round_display(engine),
        "total_rounds":      engine.total_rounds(),
        "repetition":        engine.current_repetition() + 1,
        "repetitions":       REPETITIONS_PER_ROUND,
        "target":            target,
        "show_target_alone": show_target_alone,
        "choices":           choices,
        "correct_count":     engine.correct_count(),
        "total_attempts":    engine.total_attempts(),
        "result":            result,
    })
}
