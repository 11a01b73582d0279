use super::board::{Board, get_available_moves};
use super::types::{Mark, Outcome};
use super::win_detector::compute_outcome;

/// Score of a win found right after the root move; every extra ply costs one.
pub const WIN_SCORE: i32 = 10;

/// Exact minimax. Ties go to the lowest cell index, so play is reproducible.
/// Returns `None` when `bot_mark` is empty or no cell is free.
pub fn calculate_minimax_move(board: &Board, bot_mark: Mark) -> Option<usize> {
    let opponent_mark = bot_mark.opponent()?;
    let mut board = *board;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in get_available_moves(&board) {
        let score = board.with_mark(index, bot_mark, |board| {
            minimax(board, false, bot_mark, opponent_mark, 0)
        });

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Value of the position for `bot_mark`, `depth` plies below the root move.
pub fn terminal_score(outcome: Outcome, bot_mark: Mark, depth: i32) -> Option<i32> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Draw => Some(0),
        won => Some(if won.winner() == Some(bot_mark) {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        }),
    }
}

fn minimax(
    board: &mut Board,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
    depth: i32,
) -> i32 {
    if let Some(score) = terminal_score(compute_outcome(board), bot_mark, depth) {
        return score;
    }

    let moves = get_available_moves(board);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            let eval = board.with_mark(index, bot_mark, |board| {
                minimax(board, false, bot_mark, opponent_mark, depth + 1)
            });
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in moves {
            let eval = board.with_mark(index, opponent_mark, |board| {
                minimax(board, true, bot_mark, opponent_mark, depth + 1)
            });
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
