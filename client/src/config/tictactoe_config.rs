use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::{BotType, SessionRules};

const MAX_ROUND_PAUSE_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub bot_type: BotType,
    pub rules: SessionRules,
    /// Fixed seed for the opponent's random choices; fresh one per run if unset.
    #[serde(default)]
    pub seed: Option<u64>,
    pub round_pause_ms: u64,
    pub success_code: String,
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        self.rules.validate()?;
        if self.round_pause_ms > MAX_ROUND_PAUSE_MS {
            return Err(format!(
                "round_pause_ms must not exceed {}",
                MAX_ROUND_PAUSE_MS
            ));
        }
        if self.success_code.trim().is_empty() {
            return Err("success_code must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            bot_type: BotType::Imperfect,
            rules: SessionRules::default(),
            seed: None,
            round_pause_ms: 900,
            success_code: "NOSFERATU-1897".to_string(),
        }
    }
}
