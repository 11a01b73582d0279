use super::board::{BOARD_CELLS, Board};
use super::types::{Mark, Outcome, WinningLine};
use super::win_detector::{check_win_with_line, compute_outcome};

/// One round on a fresh board. Marks alternate starting with `first_mark`.
#[derive(Debug, Clone)]
pub struct RoundState {
    board: Board,
    current_mark: Mark,
    status: Outcome,
    last_move: Option<usize>,
}

impl RoundState {
    pub fn new(first_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            current_mark: first_mark,
            status: Outcome::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> Outcome {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<Outcome, String> {
        if self.status != Outcome::InProgress {
            return Err("Round is already over".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        if index >= BOARD_CELLS {
            return Err("Position out of bounds".to_string());
        }

        self.board.place(index, mark)?;
        self.last_move = Some(index);
        self.status = compute_outcome(&self.board);

        if self.status == Outcome::InProgress {
            self.switch_turn();
        }

        Ok(self.status)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }
}
