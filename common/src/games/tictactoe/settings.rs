use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::BotType;

/// Thresholds driving the session bookkeeping between rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRules {
    /// Player round wins that complete the challenge.
    pub wins_to_succeed: u32,
    /// Opponent wins (not broken by a player win) that wipe the player's wins.
    pub opponent_streak_to_reset: u32,
    /// Consecutive draws after which the player starts the next round.
    pub draws_to_go_first: u32,
}

impl Default for SessionRules {
    fn default() -> Self {
        Self {
            wins_to_succeed: 3,
            opponent_streak_to_reset: 3,
            draws_to_go_first: 5,
        }
    }
}

impl Validate for SessionRules {
    fn validate(&self) -> Result<(), String> {
        if self.wins_to_succeed == 0 {
            return Err("wins_to_succeed must be at least 1".to_string());
        }
        if self.opponent_streak_to_reset == 0 {
            return Err("opponent_streak_to_reset must be at least 1".to_string());
        }
        if self.draws_to_go_first == 0 {
            return Err("draws_to_go_first must be at least 1".to_string());
        }
        Ok(())
    }
}

pub struct TicTacToeSessionSettings {
    pub bot_type: BotType,
    pub rules: SessionRules,
}
