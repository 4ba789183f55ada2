use crate::error::ConfigError;
use crate::types::{Mark, Position};

/// A square grid of marks plus the run length required to win on it.
///
/// Cloning has value semantics; search code snapshots the board freely
/// without aliasing the live game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    win_length: usize,
    cells: Vec<Vec<Mark>>,
}

impl Board {
    pub fn new(size: usize, win_length: usize) -> Result<Self, ConfigError> {
        if size < 3 {
            return Err(ConfigError::BoardTooSmall(size));
        }
        if win_length < 3 {
            return Err(ConfigError::WinLengthTooShort(win_length));
        }
        if win_length > size {
            return Err(ConfigError::WinLengthExceedsBoard { win_length, size });
        }

        Ok(Self {
            size,
            win_length,
            cells: vec![vec![Mark::Empty; size]; size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    /// Writes a mark. Legality is the rules engine's job; overwriting a
    /// non-empty cell is a caller defect.
    pub fn set(&mut self, row: usize, col: usize, mark: Mark) {
        debug_assert!(
            self.cells[row][col] == Mark::Empty,
            "cell ({row}, {col}) is already marked"
        );
        self.cells[row][col] = mark;
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    /// Full snapshot for rendering.
    pub fn cells(&self) -> &[Vec<Mark>] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_starts_empty() {
        let board = Board::new(4, 3).unwrap();
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(board.get(row, col), Mark::Empty);
            }
        }
        assert_eq!(board.size(), 4);
        assert_eq!(board.win_length(), 3);
        assert_eq!(board.cells().len(), 4);
    }

    #[test]
    fn test_new_rejects_small_board() {
        assert_eq!(Board::new(2, 3).unwrap_err(), ConfigError::BoardTooSmall(2));
    }

    #[test]
    fn test_new_rejects_short_win_length() {
        assert_eq!(
            Board::new(5, 2).unwrap_err(),
            ConfigError::WinLengthTooShort(2)
        );
    }

    #[test]
    fn test_new_rejects_win_length_exceeding_size() {
        assert_eq!(
            Board::new(3, 4).unwrap_err(),
            ConfigError::WinLengthExceedsBoard {
                win_length: 4,
                size: 3
            }
        );
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(3, 3).unwrap();
        board.set(1, 2, Mark::X);
        assert_eq!(board.get(1, 2), Mark::X);
        assert_eq!(board.get(2, 1), Mark::Empty);
    }

    #[test]
    fn test_available_moves_row_major() {
        let mut board = Board::new(3, 3).unwrap();
        board.set(0, 0, Mark::X);
        board.set(1, 1, Mark::O);

        let moves = board.available_moves();
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0], Position::new(0, 1));
        assert_eq!(moves[1], Position::new(0, 2));
        assert_eq!(moves[2], Position::new(1, 0));
        assert_eq!(moves[3], Position::new(1, 2));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(3, 3).unwrap();
        assert!(!board.is_full());
        for row in 0..3 {
            for col in 0..3 {
                board.set(row, col, Mark::X);
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::new(3, 3).unwrap();
        let snapshot = board.clone();
        board.set(0, 0, Mark::X);
        assert_eq!(snapshot.get(0, 0), Mark::Empty);
    }
}
