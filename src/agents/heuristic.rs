use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SessionError;
use crate::game::{Board, Player, Slot, COLS, ROWS};

use super::{Agent, AgentKind};

/// Column ordering for strategic placement: center outward.
pub const PREFERRED_COLUMNS: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];

/// The computer opponent: a bounded greedy heuristic, not a game-tree search.
///
/// Columns are chosen by four tiers evaluated in strict order; the first tier
/// producing a candidate wins:
///
/// 1. take an immediate win (ascending column scan),
/// 2. block the opponent's immediate win (ascending column scan),
/// 3. create an open three, preferring central columns,
/// 4. fall back to a uniform draw among the legal columns.
///
/// Tiers 1–2 are a correctness guarantee (never miss a one-move win or
/// loss-prevention); tier 3 is a shallow proxy for building toward a forced
/// win; tier 4 guarantees a legal move is always returned. Every probe runs
/// on a value copy of the board, discarded after the test.
pub struct HeuristicAgent {
    player: Player,
    rng: StdRng,
}

impl HeuristicAgent {
    /// Opponent with OS-seeded fallback randomness.
    pub fn new(player: Player) -> Self {
        HeuristicAgent {
            player,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Opponent with a fixed fallback seed. This RNG is independent of the
    /// session's first-mover coin flip, so tests can pin one without
    /// perturbing the other.
    pub fn seeded(player: Player, seed: u64) -> Self {
        HeuristicAgent {
            player,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

/// First column (ascending) where dropping `slot` completes four in a row,
/// if any. Shared by the win and block tiers.
fn winning_column(board: &Board, slot: Slot) -> Option<usize> {
    for col in 0..COLS {
        if board.is_column_full(col) {
            continue;
        }
        let mut probe = *board;
        if probe.drop_piece(col, slot).is_ok() && probe.has_four_in_a_row(slot) {
            return Some(col);
        }
    }
    None
}

/// First column in center-out preference order where dropping `slot` creates
/// an open three, if any.
fn developing_column(board: &Board, slot: Slot) -> Option<usize> {
    for &col in &PREFERRED_COLUMNS {
        if board.is_column_full(col) {
            continue;
        }
        let mut probe = *board;
        if probe.drop_piece(col, slot).is_ok() && has_open_three(&probe, slot) {
            return Some(col);
        }
    }
    None
}

/// Check for an open three: three consecutive `slot` cells along any axis
/// with an in-bounds empty extension cell at either end of the window.
pub fn has_open_three(board: &Board, slot: Slot) -> bool {
    if slot == Slot::Empty {
        return false;
    }

    // Horizontal
    for row in 0..ROWS {
        for col in 0..=COLS - 3 {
            if (0..3).all(|i| board.slot(row, col + i) == slot) {
                if col > 0 && board.slot(row, col - 1) == Slot::Empty {
                    return true;
                }
                if col + 3 < COLS && board.slot(row, col + 3) == Slot::Empty {
                    return true;
                }
            }
        }
    }

    // Vertical
    for col in 0..COLS {
        for row in 0..=ROWS - 3 {
            if (0..3).all(|i| board.slot(row + i, col) == slot) {
                if row > 0 && board.slot(row - 1, col) == Slot::Empty {
                    return true;
                }
                if row + 3 < ROWS && board.slot(row + 3, col) == Slot::Empty {
                    return true;
                }
            }
        }
    }

    // Diagonal, descending
    for row in 0..=ROWS - 3 {
        for col in 0..=COLS - 3 {
            if (0..3).all(|i| board.slot(row + i, col + i) == slot) {
                if row > 0 && col > 0 && board.slot(row - 1, col - 1) == Slot::Empty {
                    return true;
                }
                if row + 3 < ROWS && col + 3 < COLS && board.slot(row + 3, col + 3) == Slot::Empty
                {
                    return true;
                }
            }
        }
    }

    // Diagonal, ascending
    for row in 2..ROWS {
        for col in 0..=COLS - 3 {
            if (0..3).all(|i| board.slot(row - i, col + i) == slot) {
                if row + 1 < ROWS && col > 0 && board.slot(row + 1, col - 1) == Slot::Empty {
                    return true;
                }
                if row >= 3 && col + 3 < COLS && board.slot(row - 3, col + 3) == Slot::Empty {
                    return true;
                }
            }
        }
    }

    false
}

impl Agent for HeuristicAgent {
    fn player(&self) -> Player {
        self.player
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Computer
    }

    fn choose_column(&mut self, board: &Board) -> Result<usize, SessionError> {
        let own = self.player.slot();
        let opp = self.player.opponent().slot();

        // Tier 1: take the win
        if let Some(col) = winning_column(board, own) {
            return Ok(col);
        }

        // Tier 2: deny the opponent's win
        if let Some(col) = winning_column(board, opp) {
            return Ok(col);
        }

        // Tier 3: build an open three, center first
        if let Some(col) = developing_column(board, own) {
            return Ok(col);
        }

        // Tier 4: any legal column, uniformly
        let legal = board.legal_columns();
        assert!(!legal.is_empty(), "no legal columns available");
        Ok(legal[self.rng.random_range(0..legal.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop_all(board: &mut Board, moves: &[(usize, Slot)]) {
        for &(col, slot) in moves {
            board.drop_piece(col, slot).unwrap();
        }
    }

    fn choose(agent: &mut HeuristicAgent, board: &Board) -> usize {
        agent.choose_column(board).unwrap()
    }

    // --- Tier 1 ---

    #[test]
    fn takes_horizontal_win() {
        let mut board = Board::new();
        drop_all(
            &mut board,
            &[
                (0, Slot::Red),
                (0, Slot::Yellow),
                (1, Slot::Red),
                (1, Slot::Yellow),
                (2, Slot::Red),
                (2, Slot::Yellow),
            ],
        );
        // Only column 3 completes red's bottom-row run
        let mut agent = HeuristicAgent::new(Player::Red);
        assert_eq!(choose(&mut agent, &board), 3);
    }

    #[test]
    fn takes_vertical_win() {
        let mut board = Board::new();
        drop_all(
            &mut board,
            &[
                (5, Slot::Yellow),
                (5, Slot::Yellow),
                (5, Slot::Yellow),
                (0, Slot::Red),
                (1, Slot::Red),
            ],
        );
        let mut agent = HeuristicAgent::new(Player::Yellow);
        assert_eq!(choose(&mut agent, &board), 5);
    }

    #[test]
    fn win_tier_prefers_lowest_column() {
        let mut board = Board::new();
        // Red can win at either end of the run 2..4; ascending scan takes 1
        drop_all(
            &mut board,
            &[
                (2, Slot::Red),
                (3, Slot::Red),
                (4, Slot::Red),
                (2, Slot::Yellow),
                (3, Slot::Yellow),
            ],
        );
        let mut agent = HeuristicAgent::new(Player::Red);
        assert_eq!(choose(&mut agent, &board), 1);
    }

    // --- Tier 2 ---

    #[test]
    fn blocks_opponent_win() {
        let mut board = Board::new();
        // Yellow threatens column 3; red has no win of its own
        drop_all(
            &mut board,
            &[
                (0, Slot::Yellow),
                (1, Slot::Yellow),
                (2, Slot::Yellow),
                (6, Slot::Red),
                (6, Slot::Red),
            ],
        );
        let mut agent = HeuristicAgent::new(Player::Red);
        assert_eq!(choose(&mut agent, &board), 3);
    }

    #[test]
    fn prefers_own_win_over_block() {
        let mut board = Board::new();
        // Red threatens column 3 on the bottom row, yellow threatens
        // column 3 one row up; red must take the win, not "block"
        drop_all(
            &mut board,
            &[
                (0, Slot::Red),
                (0, Slot::Yellow),
                (1, Slot::Red),
                (1, Slot::Yellow),
                (2, Slot::Red),
                (2, Slot::Yellow),
            ],
        );
        let mut agent = HeuristicAgent::new(Player::Red);
        let col = choose(&mut agent, &board);
        assert_eq!(col, 3);

        let mut after = board;
        after.drop_piece(col, Slot::Red).unwrap();
        assert!(after.has_four_in_a_row(Slot::Red));
    }

    #[test]
    fn blocks_vertical_threat() {
        let mut board = Board::new();
        drop_all(
            &mut board,
            &[
                (6, Slot::Red),
                (6, Slot::Red),
                (6, Slot::Red),
                (0, Slot::Yellow),
            ],
        );
        let mut agent = HeuristicAgent::new(Player::Yellow);
        assert_eq!(choose(&mut agent, &board), 6);
    }

    // --- Tier 3 ---

    #[test]
    fn develops_toward_open_three() {
        let mut board = Board::new();
        // Red at bottom of columns 2 and 4: dropping column 3 makes an open
        // three (2,3,4 with both ends free); no wins or blocks exist
        drop_all(&mut board, &[(2, Slot::Red), (4, Slot::Red), (6, Slot::Yellow)]);
        let mut agent = HeuristicAgent::new(Player::Red);
        assert_eq!(choose(&mut agent, &board), 3);
    }

    #[test]
    fn development_prefers_center() {
        let mut board = Board::new();
        // Both column 0 (run 0,1,2) and column 3 (run 1,2,3) would create an
        // open three; the center-out preference order must pick 3
        drop_all(&mut board, &[(1, Slot::Red), (2, Slot::Red), (6, Slot::Yellow)]);
        let mut agent = HeuristicAgent::new(Player::Red);
        assert_eq!(choose(&mut agent, &board), 3);
    }

    // --- Tier 4 ---

    #[test]
    fn fallback_is_legal_on_empty_board() {
        // Empty board: no win, block, or open three is possible, so the
        // uniform fallback fires; every draw must be legal
        let mut agent = HeuristicAgent::new(Player::Yellow);
        let board = Board::new();
        for _ in 0..100 {
            let col = choose(&mut agent, &board);
            assert!(col < COLS);
        }
    }

    #[test]
    fn fallback_avoids_full_columns() {
        let mut board = Board::new();
        // Alternating fills that leave only columns 5 and 6 open and admit
        // no win, block, or open three
        for col in 0..5 {
            for i in 0..ROWS {
                let slot = if (i / 2 + col) % 2 == 0 {
                    Slot::Red
                } else {
                    Slot::Yellow
                };
                board.drop_piece(col, slot).unwrap();
            }
        }
        let mut agent = HeuristicAgent::new(Player::Red);
        for _ in 0..50 {
            let col = choose(&mut agent, &board);
            assert!(col == 5 || col == 6, "chose full column {col}");
        }
    }

    #[test]
    fn seeded_fallback_is_deterministic() {
        let board = Board::new();
        let mut a = HeuristicAgent::seeded(Player::Red, 42);
        let mut b = HeuristicAgent::seeded(Player::Red, 42);
        for _ in 0..20 {
            assert_eq!(choose(&mut a, &board), choose(&mut b, &board));
        }
    }

    // --- Open three scan ---

    #[test]
    fn open_three_horizontal_both_ends() {
        let mut board = Board::new();
        drop_all(&mut board, &[(2, Slot::Red), (3, Slot::Red), (4, Slot::Red)]);
        assert!(has_open_three(&board, Slot::Red));
    }

    #[test]
    fn open_three_vertical() {
        let mut board = Board::new();
        drop_all(&mut board, &[(0, Slot::Red), (0, Slot::Red), (0, Slot::Red)]);
        assert!(has_open_three(&board, Slot::Red));
    }

    #[test]
    fn blocked_three_is_not_open() {
        let mut board = Board::new();
        drop_all(
            &mut board,
            &[
                (0, Slot::Yellow),
                (1, Slot::Red),
                (2, Slot::Red),
                (3, Slot::Red),
                (4, Slot::Yellow),
            ],
        );
        assert!(!has_open_three(&board, Slot::Red));
    }

    #[test]
    fn edge_three_with_one_open_end_counts() {
        let mut board = Board::new();
        // Run at columns 0..2: the left end is out of bounds, the right end
        // (column 3) is empty
        drop_all(&mut board, &[(0, Slot::Red), (1, Slot::Red), (2, Slot::Red)]);
        assert!(has_open_three(&board, Slot::Red));
    }

    #[test]
    fn open_three_ascending_diagonal() {
        let mut board = Board::new();
        // Red staircase at (5,0), (4,1), (3,2); (2,3) is an in-bounds empty
        // extension
        drop_all(
            &mut board,
            &[
                (0, Slot::Red),
                (1, Slot::Yellow),
                (1, Slot::Red),
                (2, Slot::Yellow),
                (2, Slot::Yellow),
                (2, Slot::Red),
            ],
        );
        assert!(has_open_three(&board, Slot::Red));
    }

    #[test]
    fn no_open_three_on_empty_board() {
        let board = Board::new();
        assert!(!has_open_three(&board, Slot::Red));
        assert!(!has_open_three(&board, Slot::Empty));
    }
}
