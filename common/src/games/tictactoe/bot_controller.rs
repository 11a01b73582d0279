use crate::games::SessionRng;
use super::board::Board;
use super::error::EngineError;
use super::game_state::RoundState;
use super::imperfect::calculate_imperfect_move;
use super::minimax::calculate_minimax_move;
use super::types::{BotType, Mark, Outcome};
use super::win_detector::compute_outcome;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &RoundState) -> Self {
        Self {
            board: *state.board(),
            current_mark: state.current_mark(),
        }
    }
}

/// Picks a cell for `input.current_mark`. The returned index always refers to
/// an empty cell of `input.board`; the board itself is never modified.
pub fn calculate_move(
    bot_type: BotType,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<usize, EngineError> {
    if input.current_mark == Mark::Empty {
        return Err(EngineError::InvalidBoard(
            "the moving side must be X or O".to_string(),
        ));
    }

    let outcome = compute_outcome(&input.board);
    if outcome != Outcome::InProgress {
        return Err(EngineError::no_legal_move(outcome));
    }

    let chosen = match bot_type {
        BotType::Optimal => calculate_minimax_move(&input.board, input.current_mark),
        BotType::Imperfect => calculate_imperfect_move(&input.board, input.current_mark, rng),
    };

    chosen.ok_or(EngineError::no_legal_move(outcome))
}

pub fn select_move(
    board: &Board,
    ai_mark: Mark,
    bot_type: BotType,
    rng: &mut SessionRng,
) -> Result<usize, EngineError> {
    let input = BotInput {
        board: *board,
        current_mark: ai_mark,
    };
    calculate_move(bot_type, &input, rng)
}
