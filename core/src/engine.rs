use serde::{Deserialize, Serialize};

use crate::*;

/// Whose turn it is and whether someone has already won.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    current_player: Player,
    game_over: bool,
    winner: Option<Player>,
}

impl GameState {
    pub const fn initial() -> Self {
        Self {
            current_player: Player::PlayerOne,
            game_over: false,
            winner: None,
        }
    }

    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub const fn winner(&self) -> Option<Player> {
        self.winner
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Derived summary of the game for presentation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    /// Every column is full and nobody won. Drops keep failing with
    /// [`DropError::ColumnFull`]; the engine itself is not marked over.
    Stalemate,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won(_) | Self::Stalemate)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    state: GameState,
    winning_line: Option<WinningLine>,
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: GameState::initial(),
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn game_state(&self) -> GameState {
        self.state
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn winner(&self) -> Option<Player> {
        self.state.winner
    }

    /// Cells of the run that ended the game, if it has been won.
    pub fn winning_line(&self) -> Option<&[Coord2]> {
        self.winning_line.as_deref()
    }

    /// Panics if `coords` is off the board; use [`GameEngine::get`] for unchecked input.
    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self.board.cell_at(coords)
    }

    pub fn get(&self, coords: Coord2) -> Option<CellState> {
        self.board.get(coords)
    }

    pub fn lowest_empty_row(&self, column: Coord) -> Option<Coord> {
        self.board.lowest_empty_row(column)
    }

    pub fn move_count(&self) -> u8 {
        self.board.piece_count()
    }

    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Columns a drop would currently succeed in.
    pub fn valid_columns(&self) -> impl Iterator<Item = Coord> + '_ {
        let open = !self.state.game_over;
        (0..COLUMNS).filter(move |&column| open && !self.board.is_column_full(column))
    }

    pub fn status(&self) -> GameStatus {
        match self.state.winner {
            Some(player) => GameStatus::Won(player),
            None if self.board.is_full() => GameStatus::Stalemate,
            None => GameStatus::InProgress,
        }
    }

    pub fn drop_piece(&mut self, column: i32) -> Result<DropOutcome> {
        let column = validate_column(column)?;
        self.check_not_over()?;

        let row = self
            .board
            .lowest_empty_row(column)
            .ok_or(DropError::ColumnFull)?;
        let player = self.state.current_player;
        self.board.place((row, column), player.marker());

        if let Some(line) = self.find_win((row, column)) {
            self.state.game_over = true;
            self.state.winner = Some(player);
            self.winning_line = Some(line);
            Ok(DropOutcome::Win {
                player,
                row,
                column,
            })
        } else {
            let next = player.other();
            self.state.current_player = next;
            Ok(DropOutcome::Continue(next))
        }
    }

    /// Whether the piece at `(row, column)` completes four in a row in any direction.
    pub fn check_win(&self, row: Coord, column: Coord) -> bool {
        self.find_win((row, column)).is_some()
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.state = GameState::initial();
        self.winning_line = None;
    }

    fn find_win(&self, coords: Coord2) -> Option<WinningLine> {
        Direction::ALL
            .into_iter()
            .find_map(|direction| self.board.winning_run(coords, direction))
    }

    fn check_not_over(&self) -> Result<()> {
        if self.state.game_over {
            Err(DropError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_column(column: i32) -> Result<Coord> {
    Coord::try_from(column)
        .ok()
        .filter(|&column| column < COLUMNS)
        .ok_or(DropError::InvalidColumn)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plays `columns` in order, asserting none of the drops fail.
    fn play(engine: &mut GameEngine, columns: &[i32]) -> DropOutcome {
        let mut last = None;
        for &column in columns {
            last = Some(engine.drop_piece(column).unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn first_drop_lands_on_bottom_row() {
        for column in 0..COLUMNS {
            let mut engine = GameEngine::new();
            engine.drop_piece(column.into()).unwrap();
            assert_eq!(engine.cell_at((5, column)), CellState::PlayerOne);
            assert_eq!(engine.lowest_empty_row(column), Some(4));
        }
    }

    #[test]
    fn column_fills_bottom_up_then_rejects() {
        let mut engine = GameEngine::new();

        for expected_row in (0..ROWS).rev() {
            assert_eq!(engine.lowest_empty_row(2), Some(expected_row));
            engine.drop_piece(2).unwrap();
            assert!(!engine.cell_at((expected_row, 2)).is_empty());
        }

        let before = engine.clone();
        assert_eq!(engine.drop_piece(2), Err(DropError::ColumnFull));
        assert_eq!(engine, before);
    }

    #[test]
    fn turns_alternate_after_non_winning_drops() {
        let mut engine = GameEngine::new();

        assert_eq!(
            engine.drop_piece(0).unwrap(),
            DropOutcome::Continue(Player::PlayerTwo)
        );
        assert_eq!(
            engine.drop_piece(0).unwrap(),
            DropOutcome::Continue(Player::PlayerOne)
        );
        assert_eq!(engine.current_player(), Player::PlayerOne);
    }

    #[test]
    fn horizontal_win_reports_landing_cell() {
        let mut engine = GameEngine::new();

        let outcome = play(&mut engine, &[0, 6, 1, 6, 2, 5, 3]);

        assert_eq!(
            outcome,
            DropOutcome::Win {
                player: Player::PlayerOne,
                row: 5,
                column: 3,
            }
        );
        assert!(engine.is_game_over());
        assert_eq!(engine.current_player(), Player::PlayerOne);
        assert_eq!(
            engine.winning_line(),
            Some(&[(5, 0), (5, 1), (5, 2), (5, 3)][..])
        );
    }

    #[test]
    fn vertical_win_on_fourth_stacked_piece() {
        let mut engine = GameEngine::new();

        let outcome = play(&mut engine, &[3, 4, 3, 4, 3, 4, 3]);

        assert_eq!(
            outcome,
            DropOutcome::Win {
                player: Player::PlayerOne,
                row: 2,
                column: 3,
            }
        );
    }

    #[test]
    fn drop_after_win_is_rejected() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[3, 4, 3, 4, 3, 4, 3]);

        let before = engine.clone();
        assert_eq!(engine.drop_piece(0), Err(DropError::GameAlreadyOver));
        assert_eq!(engine, before);
    }

    #[test]
    fn invalid_column_is_checked_before_game_over() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[3, 4, 3, 4, 3, 4, 3]);

        assert_eq!(engine.drop_piece(7), Err(DropError::InvalidColumn));
    }

    #[test]
    fn out_of_range_columns_do_not_mutate() {
        let mut engine = GameEngine::new();
        engine.drop_piece(1).unwrap();
        let before = engine.clone();

        for column in [-1, 7, i32::MIN, i32::MAX, 256] {
            assert_eq!(engine.drop_piece(column), Err(DropError::InvalidColumn));
        }
        assert_eq!(engine, before);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[3, 4, 3, 4, 3, 4, 3]);

        engine.reset();

        assert_eq!(engine, GameEngine::new());
        assert_eq!(engine.current_player(), Player::PlayerOne);
        assert!(!engine.is_game_over());
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.winning_line(), None);
        assert_eq!(engine.status(), GameStatus::InProgress);
    }

    #[test]
    #[should_panic]
    fn cell_at_panics_off_board() {
        GameEngine::new().cell_at((ROWS, 0));
    }

    #[test]
    fn get_returns_none_off_board() {
        let engine = GameEngine::new();
        assert_eq!(engine.get((ROWS, 0)), None);
        assert_eq!(engine.get((0, COLUMNS)), None);
    }

    #[test]
    fn check_win_ignores_empty_cells() {
        let engine = GameEngine::new();
        assert!(!engine.check_win(5, 3));
    }

    #[test]
    fn valid_columns_close_when_game_ends() {
        let mut engine = GameEngine::new();
        for _ in 0..ROWS {
            engine.drop_piece(0).unwrap();
        }
        assert!(engine.valid_columns().eq(1..COLUMNS));

        play(&mut engine, &[3, 4, 3, 4, 3, 4, 3]);
        assert_eq!(engine.valid_columns().count(), 0);
    }
}
