mod tictactoe_runner;

pub use tictactoe_runner::{RunnerOptions, TicTacToeRunner};
