use super::board::{Board, Line, LINE_LEN};
use super::player::{Player, PlayerId, Roster, TurnCursor};
use crate::config::GameConfig;
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Won(PlayerId),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

/// Why a drop had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropStatus {
    Continues,
    Won(PlayerId),
    Tied,
    Rejected(Rejection),
}

/// Outcome of a single [`GameHandle::drop_piece`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropResult {
    /// Landing row; `None` when the drop was rejected.
    pub row: Option<usize>,
    pub column: usize,
    /// The player who dropped, or whose turn it still is after a rejection.
    pub player: PlayerId,
    pub status: DropStatus,
}

impl DropResult {
    pub fn is_rejected(&self) -> bool {
        matches!(self.status, DropStatus::Rejected(_))
    }
}

/// One game session: board, players, whose turn it is, and how it ended.
#[derive(Debug, Clone, PartialEq)]
pub struct GameHandle {
    board: Board,
    roster: Roster,
    turn: TurnCursor,
    status: GameStatus,
    winning_line: Option<Line>,
    move_count: usize,
}

impl GameHandle {
    /// Start a game on an empty `height` x `width` board.
    pub fn new(height: usize, width: usize, roster: Roster) -> Result<Self, GameError> {
        if height == 0 || width == 0 || (height < LINE_LEN && width < LINE_LEN) {
            return Err(GameError::InvalidDimensions { height, width });
        }

        log::info!(
            "new {}x{} game with {} players",
            height,
            width,
            roster.len()
        );

        Ok(GameHandle {
            board: Board::new(height, width),
            turn: TurnCursor::new(roster.len()),
            roster,
            status: GameStatus::Running,
            winning_line: None,
            move_count: 0,
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        let roster = Roster::from_colors(&config.players)?;
        Self::new(config.height, config.width, roster)
    }

    /// Clear the board and hand the first turn back to the first player.
    pub fn restart(&mut self) {
        self.board = Board::new(self.board.rows(), self.board.cols());
        self.turn.reset();
        self.status = GameStatus::Running;
        self.winning_line = None;
        self.move_count = 0;
        log::info!("game restarted");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Whose turn it is. Once the game is over this stays on the player
    /// who made the final drop.
    pub fn current_player(&self) -> PlayerId {
        self.turn.current()
    }

    pub fn current_player_info(&self) -> &Player {
        self.player(self.current_player())
    }

    /// Look up a player of this game.
    ///
    /// Ids handed out by this session are always valid; foreign ids panic.
    pub fn player(&self, id: PlayerId) -> &Player {
        self.roster
            .get(id)
            .unwrap_or_else(|| panic!("player {} is not in this game", id.index()))
    }

    pub fn winning_line(&self) -> Option<&Line> {
        self.winning_line.as_ref()
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Columns that can still take a piece; empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_game_over() {
            return Vec::new();
        }
        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A win is checked before a full board, so a winning drop that fills
    /// the last cell counts as a win. Rejected drops change nothing.
    pub fn drop_piece(&mut self, column: usize) -> DropResult {
        let player = self.current_player();

        if self.is_game_over() {
            return self.reject(column, Rejection::GameOver);
        }
        if column >= self.board.cols() {
            return self.reject(column, Rejection::InvalidColumn);
        }
        let Some(row) = self.board.find_drop_row(column) else {
            return self.reject(column, Rejection::ColumnFull);
        };

        if let Err(err) = self.board.place_piece(row, column, player) {
            log::error!("drop into column {column} failed: {err}");
            return self.reject(column, Rejection::ColumnFull);
        }
        self.move_count += 1;

        let status = if let Some(line) = self.board.winning_line_through(row, column, player) {
            self.winning_line = Some(line);
            self.status = GameStatus::Won(player);
            log::info!(
                "player {} won after {} moves",
                self.player(player),
                self.move_count
            );
            DropStatus::Won(player)
        } else if self.board.is_full() {
            self.status = GameStatus::Tied;
            log::info!("tie after {} moves", self.move_count);
            DropStatus::Tied
        } else {
            self.turn.advance();
            DropStatus::Continues
        };

        DropResult {
            row: Some(row),
            column,
            player,
            status,
        }
    }

    fn reject(&self, column: usize, reason: Rejection) -> DropResult {
        log::debug!("drop into column {column} rejected: {reason:?}");
        DropResult {
            row: None,
            column,
            player: self.current_player(),
            status: DropStatus::Rejected(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::tests::{board_from, DRAW_ROWS};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const A: PlayerId = PlayerId(0);
    const B: PlayerId = PlayerId(1);

    fn two_player() -> GameHandle {
        GameHandle::new(6, 7, Roster::two_player("red", "yellow").unwrap()).unwrap()
    }

    fn play(game: &mut GameHandle, columns: &[usize]) -> DropResult {
        let mut last = None;
        for &col in columns {
            let result = game.drop_piece(col);
            assert!(!result.is_rejected(), "drop into {col} rejected: {result:?}");
            last = Some(result);
        }
        last.expect("at least one move")
    }

    /// Column order that fills a 6x7 board into the `DRAW_ROWS` pattern.
    const DRAW_SEQUENCE: [usize; 14] = [2, 0, 3, 1, 6, 4, 0, 5, 1, 2, 4, 3, 5, 6];

    #[test]
    fn test_initial_state() {
        let game = two_player();
        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(game.current_player(), A);
        assert_eq!(game.current_player_info().color(), "red");
        assert!(!game.is_game_over());
        assert_eq!(game.legal_columns().len(), 7);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let roster = Roster::two_player("red", "yellow").unwrap();
        assert_eq!(
            GameHandle::new(3, 3, roster.clone()),
            Err(GameError::InvalidDimensions {
                height: 3,
                width: 3
            })
        );
        assert!(GameHandle::new(0, 7, roster.clone()).is_err());
        assert!(GameHandle::new(4, 1, roster).is_ok());
    }

    #[test]
    fn test_from_config_rejects_single_player() {
        let config = GameConfig {
            players: vec!["red".into()],
            ..GameConfig::default()
        };
        assert_eq!(
            GameHandle::from_config(&config),
            Err(GameError::InvalidPlayerCount { count: 1 })
        );
    }

    #[test]
    fn test_drop_reports_landing_row_and_switches_player() {
        let mut game = two_player();
        let result = game.drop_piece(3);
        assert_eq!(
            result,
            DropResult {
                row: Some(5),
                column: 3,
                player: A,
                status: DropStatus::Continues,
            }
        );
        assert_eq!(game.board().get(5, 3), Some(A));
        assert_eq!(game.current_player(), B);

        assert_eq!(game.drop_piece(3).row, Some(4));
        assert_eq!(game.board().get(4, 3), Some(B));
    }

    #[test]
    fn test_full_column_is_rejected_without_effect() {
        let mut game = two_player();
        play(&mut game, &[0, 0, 0, 0, 0, 0]);
        let board_before = game.board().clone();
        let player_before = game.current_player();

        let result = game.drop_piece(0);
        assert_eq!(result.status, DropStatus::Rejected(Rejection::ColumnFull));
        assert_eq!(result.row, None);
        assert_eq!(result.player, player_before);
        assert_eq!(game.board(), &board_before);
        assert_eq!(game.current_player(), player_before);
        assert_eq!(game.move_count(), 6);
        assert!(!game.legal_columns().contains(&0));
    }

    #[test]
    fn test_invalid_column_is_rejected() {
        let mut game = two_player();
        let result = game.drop_piece(7);
        assert_eq!(result.status, DropStatus::Rejected(Rejection::InvalidColumn));
        assert_eq!(game.current_player(), A);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_turn_order_cycles_through_three_players() {
        let roster = Roster::three_player("red", "yellow").unwrap();
        let mut game = GameHandle::new(6, 7, roster).unwrap();
        let mut order = Vec::new();
        for col in 0..6 {
            order.push(game.drop_piece(col).player.index());
        }
        assert_eq!(order, vec![0, 1, 2, 0, 1, 2]);
        assert_eq!(game.current_player(), A);
    }

    #[test]
    fn test_turn_order_cycles_through_two_players() {
        let mut game = two_player();
        play(&mut game, &[0, 1]);
        assert_eq!(game.current_player(), A);
    }

    #[test]
    fn test_horizontal_win_on_bottom_row() {
        let mut game = two_player();
        // A: 0, 1, 2, 3 on row 5; B stacks on top of A's first three.
        let result = play(&mut game, &[0, 0, 1, 1, 2, 2, 3]);

        assert_eq!(result.status, DropStatus::Won(A));
        assert_eq!(result.row, Some(5));
        assert_eq!(game.status(), GameStatus::Won(A));
        assert!(game.board().check_win(A));
        assert!(!game.board().check_win(B));
        assert_eq!(
            game.winning_line().unwrap().cells,
            [(5, 0), (5, 1), (5, 2), (5, 3)]
        );
        // Cursor stays on the winner.
        assert_eq!(game.current_player(), A);
    }

    #[test]
    fn test_vertical_win_for_second_player() {
        let mut game = two_player();
        let result = play(&mut game, &[0, 6, 1, 6, 0, 6, 1, 6]);
        assert_eq!(result.status, DropStatus::Won(B));
        assert_eq!(game.winning_line().unwrap().cells[0], (2, 6));
    }

    #[test]
    fn test_no_drops_after_win() {
        let mut game = two_player();
        play(&mut game, &[0, 0, 1, 1, 2, 2, 3]);
        let board_before = game.board().clone();

        let result = game.drop_piece(4);
        assert_eq!(result.status, DropStatus::Rejected(Rejection::GameOver));
        assert_eq!(game.board(), &board_before);
        assert_eq!(game.status(), GameStatus::Won(A));
        assert!(game.legal_columns().is_empty());
    }

    #[test]
    fn test_full_board_without_line_is_a_tie() {
        let mut game = two_player();
        for _ in 0..3 {
            for &col in &DRAW_SEQUENCE {
                let result = game.drop_piece(col);
                assert!(matches!(
                    result.status,
                    DropStatus::Continues | DropStatus::Tied
                ));
            }
        }

        assert_eq!(game.status(), GameStatus::Tied);
        assert_eq!(game.board(), &board_from(&DRAW_ROWS));
        assert!(!game.board().check_win(A));
        assert!(!game.board().check_win(B));
        assert_eq!(game.move_count(), 42);
        assert_eq!(
            game.drop_piece(0).status,
            DropStatus::Rejected(Rejection::GameOver)
        );
    }

    #[test]
    fn test_win_on_last_cell_beats_tie() {
        let roster = Roster::two_player("red", "yellow").unwrap();
        let mut game = GameHandle::new(4, 3, roster).unwrap();
        let result = play(&mut game, &[0, 2, 0, 2, 1, 2, 1, 0, 0, 1, 1, 2]);

        assert!(game.board().is_full());
        assert_eq!(result.status, DropStatus::Won(B));
        assert_eq!(game.status(), GameStatus::Won(B));
    }

    #[test]
    fn test_restart_clears_board_and_status() {
        let mut game = two_player();
        play(&mut game, &[0, 0, 1, 1, 2, 2, 3]);
        game.restart();

        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(game.current_player(), A);
        assert_eq!(game.board(), &Board::new(6, 7));
        assert_eq!(game.winning_line(), None);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.roster().len(), 2);
    }

    #[test]
    fn test_incremental_check_matches_full_scan() {
        let mut rng = StdRng::seed_from_u64(7);
        for players in [2, 3] {
            let colors: Vec<String> = (0..players).map(|i| format!("color{i}")).collect();
            for _ in 0..200 {
                let mut game =
                    GameHandle::new(6, 7, Roster::from_colors(&colors).unwrap()).unwrap();
                while !game.is_game_over() {
                    let legal = game.legal_columns();
                    let col = legal[rng.random_range(0..legal.len())];
                    let result = game.drop_piece(col);

                    for (id, _) in game.roster().iter() {
                        let full_scan = game.board().check_win(id);
                        let expected = result.status == DropStatus::Won(id);
                        assert_eq!(full_scan, expected, "board: {:?}", game.board());
                    }
                    if result.status == DropStatus::Tied {
                        assert!(game.board().is_full());
                    }
                }
            }
        }
    }
}
