use std::fmt;
use std::str::FromStr;

use super::error::EngineError;
use super::types::Mark;

pub const BOARD_SIDE: usize = 3;
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// 3x3 grid, cells indexed 0..9 row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_codes(codes: &[u8]) -> Result<Self, EngineError> {
        let marks = codes
            .iter()
            .map(|&code| {
                Mark::from_code(code)
                    .ok_or_else(|| EngineError::InvalidBoard(format!("unknown cell code {}", code)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(marks.as_slice())
    }

    pub fn cells(&self) -> &[Mark; BOARD_CELLS] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Mark::Empty)
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), String> {
        if index >= BOARD_CELLS {
            return Err(format!("Cell {} is out of bounds", index));
        }
        if mark == Mark::Empty {
            return Err("Cannot place an empty mark".to_string());
        }
        if self.cells[index] != Mark::Empty {
            return Err(format!("Cell {} is already marked", index));
        }
        self.cells[index] = mark;
        Ok(())
    }

    /// Puts `mark` on `index`, runs `f`, then restores whatever was there.
    /// The search code relies on this to explore lines without copying.
    pub(crate) fn with_mark<T>(
        &mut self,
        index: usize,
        mark: Mark,
        f: impl FnOnce(&mut Board) -> T,
    ) -> T {
        let previous = self.cells[index];
        self.cells[index] = mark;
        let result = f(self);
        self.cells[index] = previous;
        result
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

impl TryFrom<&[Mark]> for Board {
    type Error = EngineError;

    fn try_from(marks: &[Mark]) -> Result<Self, Self::Error> {
        let cells: [Mark; BOARD_CELLS] = marks.try_into().map_err(|_| {
            EngineError::InvalidBoard(format!(
                "expected {} cells, got {}",
                BOARD_CELLS,
                marks.len()
            ))
        })?;
        Ok(Self { cells })
    }
}

impl From<[Mark; BOARD_CELLS]> for Board {
    fn from(cells: [Mark; BOARD_CELLS]) -> Self {
        Self { cells }
    }
}

/// Parses nine cell symbols (`X`, `O`, and `.`/`_`/`-` for empty); whitespace
/// and `|` separators are ignored.
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| {
                Mark::from_symbol(c)
                    .ok_or_else(|| EngineError::InvalidBoard(format!("unknown cell symbol {:?}", c)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(marks.as_slice())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = row.iter().map(|m| m.symbol().to_string()).collect();
            write!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_moves_ascending() {
        let board: Board = "X.O ... O.X".parse().unwrap();
        assert_eq!(get_available_moves(&board), vec![1, 3, 4, 5, 7]);
        assert_eq!(get_available_moves(&Board::new()), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let result: Result<Board, _> = "XO.".parse();
        assert!(matches!(result, Err(EngineError::InvalidBoard(_))));
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let result: Result<Board, _> = "XOZ......".parse();
        assert!(matches!(result, Err(EngineError::InvalidBoard(_))));
    }

    #[test]
    fn test_from_codes() {
        let board = Board::from_codes(&[1, 1, 0, 2, 2, 0, 0, 0, 0]).unwrap();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(4), Some(Mark::O));
        assert!(matches!(
            Board::from_codes(&[0, 3, 0, 0, 0, 0, 0, 0, 0]),
            Err(EngineError::InvalidBoard(_))
        ));
        assert!(matches!(
            Board::from_codes(&[0; 10]),
            Err(EngineError::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_bounds() {
        let mut board = Board::new();
        assert!(board.place(4, Mark::X).is_ok());
        assert!(board.place(4, Mark::O).is_err());
        assert!(board.place(9, Mark::O).is_err());
        assert!(board.place(0, Mark::Empty).is_err());
        assert_eq!(get_available_moves(&board).len(), BOARD_CELLS - 1);
    }

    #[test]
    fn test_with_mark_restores_cell() {
        let mut board = Board::new();
        let seen = board.with_mark(2, Mark::O, |b| b.get(2));
        assert_eq!(seen, Some(Mark::O));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_rows() {
        let board: Board = "XO. .X. ..O".parse().unwrap();
        assert_eq!(board.to_string(), "X|O|.\n.|X|.\n.|.|O");
    }
}
