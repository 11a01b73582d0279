//! Beatable opponent: shallow randomized minimax with a positional estimate at
//! the horizon, then a noisy pick among the near-best root moves.

use crate::games::SessionRng;
use super::board::{Board, CENTER, CORNERS, get_available_moves};
use super::minimax::{WIN_SCORE, terminal_score};
use super::types::Mark;
use super::win_detector::{LINES, compute_outcome};

/// Cells considered for the first move on an empty board.
pub const OPENING_CELLS: [usize; 5] = [0, 2, 4, 6, 8];

pub const MIN_DEPTH_LIMIT: i32 = 3;
pub const MAX_DEPTH_LIMIT: i32 = 5;

const CENTER_WEIGHT: f64 = 1.5;
const CORNER_WEIGHT: f64 = 0.6;
/// Indexed by how many marks one side has on a line the other side hasn't touched.
const OWN_LINE_WEIGHTS: [f64; 4] = [0.0, 0.5, 1.2, 3.0];
const OPPONENT_LINE_WEIGHTS: [f64; 4] = [0.0, 0.55, 1.3, 3.0];

const LEAF_NOISE: f64 = 0.5;
const CANDIDATE_JITTER: f64 = 0.8;
const NEAR_BEST_BAND: f64 = 1.5;
const SUBOPTIMAL_CHANCE: f64 = 0.25;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub index: usize,
    pub score: f64,
}

pub fn calculate_imperfect_move(
    board: &Board,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    let opponent_mark = bot_mark.opponent()?;
    let available_moves = get_available_moves(board);

    if available_moves.is_empty() {
        return None;
    }

    if board.is_empty() {
        return rng.choose(&OPENING_CELLS).copied();
    }

    let depth_limit = draw_depth_limit(rng);
    let mut search = Search {
        bot_mark,
        opponent_mark,
        depth_limit,
        rng,
    };

    let mut board = *board;
    let mut candidates = Vec::with_capacity(available_moves.len());
    for index in available_moves {
        let score = board.with_mark(index, bot_mark, |board| search.score(board, false, 0));
        let jitter: f64 = search.rng.random_range(-CANDIDATE_JITTER..=CANDIDATE_JITTER);
        candidates.push(Candidate {
            index,
            score: score + jitter,
        });
    }

    pick_candidate(&candidates, search.rng)
}

/// Plies below the root move after which the search falls back to
/// `evaluate_position`.
fn draw_depth_limit(rng: &mut SessionRng) -> i32 {
    rng.random_range(MIN_DEPTH_LIMIT..=MAX_DEPTH_LIMIT)
}

/// Picks uniformly from the moves within `NEAR_BEST_BAND` of the best score.
/// Now and then it deliberately restricts the pick to the band members that
/// are strictly worse than the best.
pub fn pick_candidate(candidates: &[Candidate], rng: &mut SessionRng) -> Option<usize> {
    let best = candidates
        .iter()
        .map(|c| c.score)
        .fold(f64::NEG_INFINITY, f64::max);

    let band: Vec<&Candidate> = candidates
        .iter()
        .filter(|c| c.score >= best - NEAR_BEST_BAND)
        .collect();

    let below_best: Vec<usize> = band
        .iter()
        .filter(|c| c.score < best)
        .map(|c| c.index)
        .collect();

    if rng.chance(SUBOPTIMAL_CHANCE) && !below_best.is_empty() {
        return rng.choose(&below_best).copied();
    }

    let band_moves: Vec<usize> = band.iter().map(|c| c.index).collect();
    rng.choose(&band_moves).copied()
}

/// Positional estimate from `bot_mark`'s point of view, without noise.
pub fn evaluate_position(board: &Board, bot_mark: Mark, opponent_mark: Mark) -> f64 {
    let cells = board.cells();
    let ownership = |mark: Mark| {
        if mark == bot_mark {
            1.0
        } else if mark == opponent_mark {
            -1.0
        } else {
            0.0
        }
    };

    let mut score = CENTER_WEIGHT * ownership(cells[CENTER]);
    for corner in CORNERS {
        score += CORNER_WEIGHT * ownership(cells[corner]);
    }

    for line in LINES {
        let own = line.iter().filter(|&&i| cells[i] == bot_mark).count();
        let opponent = line.iter().filter(|&&i| cells[i] == opponent_mark).count();
        if opponent == 0 {
            score += OWN_LINE_WEIGHTS[own];
        }
        if own == 0 {
            score -= OPPONENT_LINE_WEIGHTS[opponent];
        }
    }

    score
}

struct Search<'a> {
    bot_mark: Mark,
    opponent_mark: Mark,
    depth_limit: i32,
    rng: &'a mut SessionRng,
}

impl Search<'_> {
    fn score(&mut self, board: &mut Board, is_maximizing: bool, depth: i32) -> f64 {
        if let Some(score) = terminal_score(compute_outcome(board), self.bot_mark, depth) {
            return f64::from(score);
        }

        if depth >= self.depth_limit {
            let noise: f64 = self.rng.random_range(-LEAF_NOISE..=LEAF_NOISE);
            return evaluate_position(board, self.bot_mark, self.opponent_mark) + noise;
        }

        let mut moves = get_available_moves(board);
        self.rng.shuffle(&mut moves);

        // best a child can do is win (or lose) on the very next ply
        let bound = f64::from(WIN_SCORE - (depth + 1));

        if is_maximizing {
            let mut max_eval = f64::NEG_INFINITY;
            for index in moves {
                let eval = board.with_mark(index, self.bot_mark, |board| {
                    self.score(board, false, depth + 1)
                });
                max_eval = max_eval.max(eval);
                if max_eval >= bound {
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = f64::INFINITY;
            for index in moves {
                let eval = board.with_mark(index, self.opponent_mark, |board| {
                    self.score(board, true, depth + 1)
                });
                min_eval = min_eval.min(eval);
                if min_eval <= -bound {
                    break;
                }
            }
            min_eval
        }
    }
}
