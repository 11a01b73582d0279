mod board;
mod bot_controller;
mod error;
mod game_state;
mod imperfect;
mod minimax;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_CELLS, BOARD_SIDE, Board, CENTER, CORNERS, get_available_moves};
pub use bot_controller::{BotInput, calculate_move, select_move};
pub use error::EngineError;
pub use game_state::RoundState;
pub use imperfect::{Candidate, OPENING_CELLS, calculate_imperfect_move, evaluate_position, pick_candidate};
pub use minimax::{WIN_SCORE, calculate_minimax_move, terminal_score};
pub use session::{Participant, RoundReport, RoundResult, SessionStats};
pub use settings::{SessionRules, TicTacToeSessionSettings};
pub use types::{BotType, Mark, Outcome, WinningLine};
pub use win_detector::{LINES, check_win, check_win_with_line, compute_outcome};
