use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            '.' | '_' | '-' => Some(Mark::Empty),
            _ => None,
        }
    }

    /// Numeric cell encoding: 0 empty, 1 X, 2 O.
    pub fn from_code(code: u8) -> Option<Mark> {
        match code {
            0 => Some(Mark::Empty),
            1 => Some(Mark::X),
            2 => Some(Mark::O),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl Outcome {
    pub fn won_by(mark: Mark) -> Option<Outcome> {
        match mark {
            Mark::X => Some(Outcome::XWon),
            Mark::O => Some(Outcome::OWon),
            Mark::Empty => None,
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::XWon => Some(Mark::X),
            Outcome::OWon => Some(Mark::O),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self != Outcome::InProgress
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::InProgress => "in progress",
            Outcome::XWon => "won by X",
            Outcome::OWon => "won by O",
            Outcome::Draw => "drawn",
        };
        f.write_str(text)
    }
}

/// Move-selection strategy of the scripted opponent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotType {
    /// Full-depth minimax, first best cell in index order.
    #[default]
    Optimal,
    /// Depth-limited, jittered search that sometimes settles for a worse move.
    Imperfect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }
}
