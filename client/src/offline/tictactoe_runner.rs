use std::io::{BufRead, Write};
use std::time::Duration;

use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    BOARD_CELLS, BotInput, Mark, Outcome, Participant, RoundResult, RoundState, SessionStats,
    TicTacToeSessionSettings, calculate_move,
};
use tictactoe_common::{debug_log, log};

use crate::ui::{HELP, render_board, render_stats};

pub const PLAYER_MARK: Mark = Mark::X;
pub const OPPONENT_MARK: Mark = Mark::O;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Place(usize),
    ResetRound,
    ResetAll,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    match trimmed {
        "r" | "R" => return Ok(Command::ResetRound),
        "a" | "A" => return Ok(Command::ResetAll),
        "h" | "H" | "?" => return Ok(Command::Help),
        "q" | "Q" => return Ok(Command::Quit),
        _ => {}
    }
    match trimmed.parse::<usize>() {
        Ok(cell) if (1..=BOARD_CELLS).contains(&cell) => Ok(Command::Place(cell - 1)),
        Ok(cell) => Err(format!("There is no cell {}. Pick 1-{}.", cell, BOARD_CELLS)),
        Err(_) => Err(format!("Unknown command {:?}. Type h for help.", trimmed)),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rounds_played: u32,
    pub successes: u32,
    pub stats: SessionStats,
}

pub struct RunnerOptions {
    pub settings: TicTacToeSessionSettings,
    pub round_pause: Duration,
    pub success_code: String,
}

/// Round loop between a human on `input` and the scripted opponent. Runs until
/// `q` or end of input.
pub struct TicTacToeRunner<R, W> {
    input: R,
    output: W,
    options: RunnerOptions,
    rng: SessionRng,
    stats: SessionStats,
    round: RoundState,
    summary: RunSummary,
}

impl<R: BufRead, W: Write> TicTacToeRunner<R, W> {
    pub fn new(options: RunnerOptions, rng: SessionRng, input: R, output: W) -> Self {
        Self {
            input,
            output,
            options,
            rng,
            stats: SessionStats::new(),
            round: RoundState::new(OPPONENT_MARK),
            summary: RunSummary::default(),
        }
    }

    pub fn run(mut self) -> Result<RunSummary, String> {
        log!(
            "Session started: {:?} opponent, seed {}",
            self.options.settings.bot_type,
            self.rng.seed()
        );

        self.start_round()?;

        let mut line = String::new();
        loop {
            self.write("> ")?;
            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| format!("Failed to read input: {}", e))?;
            if read == 0 {
                break;
            }

            match parse_command(&line) {
                Ok(Command::Place(index)) => self.handle_player_move(index)?,
                Ok(Command::ResetRound) => {
                    self.say("The board is wiped clean.")?;
                    self.start_round()?;
                }
                Ok(Command::ResetAll) => {
                    self.stats = self.stats.reset_all();
                    log!("Scores reset by player");
                    self.say("All scores are reset.")?;
                    self.start_round()?;
                }
                Ok(Command::Help) => self.write(HELP)?,
                Ok(Command::Quit) => break,
                Err(message) => self.say(&message)?,
            }
        }

        log!(
            "Session ended after {} rounds, {} successes",
            self.summary.rounds_played,
            self.summary.successes
        );
        self.summary.stats = self.stats;
        Ok(self.summary)
    }

    fn start_round(&mut self) -> Result<(), String> {
        let first_mark = match self.stats.first_to_move {
            Participant::Player => PLAYER_MARK,
            Participant::Opponent => OPPONENT_MARK,
        };
        self.round = RoundState::new(first_mark);
        debug_log!("New round, {:?} moves first", self.stats.first_to_move);

        let stats_line = render_stats(&self.stats, &self.options.settings.rules);
        self.say(&stats_line)?;

        if first_mark == OPPONENT_MARK {
            self.say("Dracula goes first…")?;
            self.opponent_turn()
        } else {
            self.show_board()?;
            self.say("Your move.")
        }
    }

    fn handle_player_move(&mut self, index: usize) -> Result<(), String> {
        if !self.round.board().is_valid_move(index) {
            return self.say(&format!("Cell {} is already taken.", index + 1));
        }
        if let Err(message) = self.round.place_mark(PLAYER_MARK, index) {
            return self.say(&message);
        }
        debug_log!("Player took cell {}", index);

        let status = self.round.status();
        if status.is_terminal() {
            self.show_board()?;
            return self.finish_round(status);
        }
        self.opponent_turn()
    }

    fn opponent_turn(&mut self) -> Result<(), String> {
        let input = BotInput::from_game_state(&self.round);
        let index = calculate_move(self.options.settings.bot_type, &input, &mut self.rng)
            .map_err(|e| format!("Opponent failed to move: {}", e))?;
        debug_log!("Dracula took cell {}", index);

        let status = self.round.place_mark(OPPONENT_MARK, index)?;
        self.show_board()?;

        if status.is_terminal() {
            return self.finish_round(status);
        }
        self.say("Your move.")
    }

    fn finish_round(&mut self, outcome: Outcome) -> Result<(), String> {
        let Some(result) = RoundResult::from_outcome(outcome, PLAYER_MARK) else {
            return Ok(());
        };

        let rules = self.options.settings.rules;
        let (stats, report) = self.stats.apply_round(result, &rules);
        self.stats = stats;
        self.summary.rounds_played += 1;
        log!("Round {} finished: {:?}", self.summary.rounds_played, result);

        match result {
            RoundResult::PlayerWon => self.say("You won this round!")?,
            RoundResult::OpponentWon => self.say("Dracula wins this round…")?,
            RoundResult::Draw => self.say("It's a draw.")?,
        }

        if report.player_wins_reset {
            self.say("Your wins have been reset!")?;
        }

        if report.success {
            self.summary.successes += 1;
            log!("Challenge completed");
            let code = self.options.success_code.clone();
            self.say(&format!(
                "You have bested Dracula {} times. The secret is yours: {}",
                rules.wins_to_succeed, code
            ))?;
        }

        if report.player_goes_first {
            self.say("Your stubbornness earns you the first move.")?;
        }

        if !self.options.round_pause.is_zero() {
            std::thread::sleep(self.options.round_pause);
        }
        self.start_round()
    }

    fn show_board(&mut self) -> Result<(), String> {
        let board = render_board(self.round.board());
        self.say(&board)
    }

    fn say(&mut self, message: &str) -> Result<(), String> {
        writeln!(self.output, "{}", message).map_err(|e| format!("Failed to write output: {}", e))
    }

    fn write(&mut self, text: &str) -> Result<(), String> {
        write!(self.output, "{}", text)
            .and_then(|_| self.output.flush())
            .map_err(|e| format!("Failed to write output: {}", e))
    }
}
