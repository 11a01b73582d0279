use tictactoe_common::games::tictactoe::{BOARD_SIDE, Board, Mark, SessionRules, SessionStats};

pub const INTRO: &str = "\
The castle gates creak open. Candles gutter in a cold draft.
A tall figure in a black cape gestures at a board scratched into the table.

  \"Good evening. Three victories and you may leave with the secret.
   Lose three times in a row and we begin again... from nothing.\"
";

pub const HELP: &str = "\
Commands:
  1-9  place your mark (cells are numbered left to right, top to bottom)
  r    reset the board
  a    reset all scores
  h    show this help
  q    quit
";

pub fn cell_label(board: &Board, index: usize) -> String {
    match board.get(index) {
        Some(Mark::Empty) | None => (index + 1).to_string(),
        Some(mark) => mark.symbol().to_string(),
    }
}

pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = (0..BOARD_SIDE)
        .map(|row| {
            let cells: Vec<String> = (0..BOARD_SIDE)
                .map(|col| format!(" {} ", cell_label(board, row * BOARD_SIDE + col)))
                .collect();
            cells.join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

pub fn render_stats(stats: &SessionStats, rules: &SessionRules) -> String {
    format!(
        "You: {}  Dracula: {}  Draw streak: {}/{}",
        stats.player_wins,
        stats.opponent_wins,
        stats.displayed_draw_streak(rules),
        rules.draws_to_go_first
    )
}
