use super::settings::SessionRules;
use super::types::{Mark, Outcome};

/// Who places the first mark of a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Participant {
    Player,
    #[default]
    Opponent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundResult {
    PlayerWon,
    OpponentWon,
    Draw,
}

impl RoundResult {
    /// `None` while the round is still being played.
    pub fn from_outcome(outcome: Outcome, player_mark: Mark) -> Option<Self> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Draw => Some(RoundResult::Draw),
            won if won.winner() == Some(player_mark) => Some(RoundResult::PlayerWon),
            _ => Some(RoundResult::OpponentWon),
        }
    }
}

/// What the round just finished triggered, for the caller to announce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundReport {
    /// Player reached the win target; counters were started over.
    pub success: bool,
    /// Opponent streak wiped the player's wins.
    pub player_wins_reset: bool,
    /// Draw streak has earned the player the first move.
    pub player_goes_first: bool,
}

/// Counters carried from round to round. Only `apply_round` and `reset_all`
/// produce new values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub player_wins: u32,
    pub opponent_wins: u32,
    pub draw_streak: u32,
    pub opponent_streak: u32,
    pub first_to_move: Participant,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset_all(self) -> Self {
        Self::default()
    }

    pub fn displayed_draw_streak(&self, rules: &SessionRules) -> u32 {
        self.draw_streak.min(rules.draws_to_go_first)
    }

    pub fn apply_round(self, result: RoundResult, rules: &SessionRules) -> (Self, RoundReport) {
        let mut stats = self;
        let mut report = RoundReport::default();

        match result {
            RoundResult::PlayerWon => {
                stats.player_wins += 1;
                stats.opponent_streak = 0;
                stats.draw_streak = 0;
                if stats.player_wins >= rules.wins_to_succeed {
                    report.success = true;
                    return (Self::default(), report);
                }
            }
            RoundResult::OpponentWon => {
                stats.opponent_wins += 1;
                stats.opponent_streak += 1;
                stats.draw_streak = 0;
                if stats.opponent_streak >= rules.opponent_streak_to_reset {
                    stats.player_wins = 0;
                    stats.opponent_streak = 0;
                    report.player_wins_reset = true;
                }
            }
            RoundResult::Draw => {
                stats.draw_streak += 1;
            }
        }

        stats.first_to_move = if stats.draw_streak >= rules.draws_to_go_first {
            report.player_goes_first = true;
            Participant::Player
        } else {
            Participant::Opponent
        };

        (stats, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_all(results: &[RoundResult]) -> (SessionStats, RoundReport) {
        let rules = SessionRules::default();
        let mut stats = SessionStats::new();
        let mut report = RoundReport::default();
        for &result in results {
            (stats, report) = stats.apply_round(result, &rules);
        }
        (stats, report)
    }

    #[test]
    fn test_from_outcome() {
        assert_eq!(RoundResult::from_outcome(Outcome::XWon, Mark::X), Some(RoundResult::PlayerWon));
        assert_eq!(RoundResult::from_outcome(Outcome::OWon, Mark::X), Some(RoundResult::OpponentWon));
        assert_eq!(RoundResult::from_outcome(Outcome::Draw, Mark::O), Some(RoundResult::Draw));
        assert_eq!(RoundResult::from_outcome(Outcome::InProgress, Mark::O), None);
    }

    #[test]
    fn test_opponent_starts_by_default() {
        assert_eq!(SessionStats::new().first_to_move, Participant::Opponent);
    }

    #[test]
    fn test_three_player_wins_succeed_and_reset() {
        use RoundResult::*;
        let (stats, report) = apply_all(&[PlayerWon, Draw, OpponentWon, PlayerWon]);
        assert_eq!(stats.player_wins, 2);
        assert!(!report.success);

        let (stats, report) = apply_all(&[PlayerWon, Draw, OpponentWon, PlayerWon, PlayerWon]);
        assert!(report.success);
        assert_eq!(stats, SessionStats::default());
    }

    #[test]
    fn test_opponent_streak_wipes_player_wins() {
        use RoundResult::*;
        let (stats, report) = apply_all(&[PlayerWon, PlayerWon, OpponentWon, OpponentWon, OpponentWon]);
        assert!(report.player_wins_reset);
        assert_eq!(stats.player_wins, 0);
        assert_eq!(stats.opponent_wins, 3);
        assert_eq!(stats.opponent_streak, 0);
    }

    #[test]
    fn test_player_win_breaks_opponent_streak() {
        use RoundResult::*;
        let (stats, report) = apply_all(&[OpponentWon, OpponentWon, PlayerWon, OpponentWon]);
        assert!(!report.player_wins_reset);
        assert_eq!(stats.player_wins, 1);
        assert_eq!(stats.opponent_streak, 1);
    }

    #[test]
    fn test_draws_do_not_break_opponent_streak() {
        use RoundResult::*;
        let (stats, report) = apply_all(&[PlayerWon, OpponentWon, Draw, OpponentWon, Draw, OpponentWon]);
        assert!(report.player_wins_reset);
        assert_eq!(stats.player_wins, 0);
    }

    #[test]
    fn test_five_draws_give_player_first_move() {
        use RoundResult::*;
        let (stats, report) = apply_all(&[Draw, Draw, Draw, Draw]);
        assert_eq!(stats.first_to_move, Participant::Opponent);
        assert!(!report.player_goes_first);

        let (stats, report) = apply_all(&[Draw, Draw, Draw, Draw, Draw]);
        assert_eq!(stats.first_to_move, Participant::Player);
        assert!(report.player_goes_first);

        let (stats, _) = apply_all(&[Draw, Draw, Draw, Draw, Draw, Draw, Draw]);
        assert_eq!(stats.first_to_move, Participant::Player);
        assert_eq!(stats.displayed_draw_streak(&SessionRules::default()), 5);
        assert_eq!(stats.draw_streak, 7);
    }

    #[test]
    fn test_decisive_round_ends_draw_streak() {
        use RoundResult::*;
        let (stats, _) = apply_all(&[Draw, Draw, Draw, Draw, Draw, OpponentWon]);
        assert_eq!(stats.draw_streak, 0);
        assert_eq!(stats.first_to_move, Participant::Opponent);

        let (stats, _) = apply_all(&[Draw, Draw, Draw, Draw, Draw, PlayerWon]);
        assert_eq!(stats.draw_streak, 0);
        assert_eq!(stats.first_to_move, Participant::Opponent);
    }

    #[test]
    fn test_reset_all() {
        use RoundResult::*;
        let (stats, _) = apply_all(&[PlayerWon, Draw, Draw, Draw, Draw, Draw]);
        assert_eq!(stats.first_to_move, Participant::Player);
        assert_eq!(stats.reset_all(), SessionStats::default());
    }

    #[test]
    fn test_custom_rules() {
        let rules = SessionRules {
            wins_to_succeed: 1,
            opponent_streak_to_reset: 1,
            draws_to_go_first: 1,
        };
        let (stats, report) = SessionStats::new().apply_round(RoundResult::Draw, &rules);
        assert!(report.player_goes_first);
        let (_, report) = stats.apply_round(RoundResult::PlayerWon, &rules);
        assert!(report.success);
    }
}
