use crate::board::Board;
use crate::types::{GameOutcome, Mark, Position, WinningLine};

// Axis families through a cell, in reporting order: horizontal, vertical,
// diagonal down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

pub fn is_legal_move(board: &Board, row: usize, col: usize) -> bool {
    board.in_bounds(row, col) && board.get(row, col) == Mark::Empty
}

/// Anchored detection: true iff the mark at (row, col) completes a run of
/// `win_length` along one of the four axes through that cell. Only lines
/// through the last move can have just become winning.
pub fn check_win_through(board: &Board, row: usize, col: usize, mark: Mark) -> bool {
    if mark == Mark::Empty || board.get(row, col) != mark {
        return false;
    }

    for (dr, dc) in DIRECTIONS {
        let count =
            1 + run_length(board, row, col, dr, dc, mark) + run_length(board, row, col, -dr, -dc, mark);
        if count >= board.win_length() {
            return true;
        }
    }

    false
}

fn run_length(board: &Board, row: usize, col: usize, dr: isize, dc: isize, mark: Mark) -> usize {
    let size = board.size() as isize;
    let mut count = 0;
    let mut r = row as isize + dr;
    let mut c = col as isize + dc;
    while r >= 0 && c >= 0 && r < size && c < size && board.get(r as usize, c as usize) == mark {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Reports the first completed run through (row, col): axes in reporting
/// order, window starts scanned in increasing order along each axis.
pub fn winning_line_through(board: &Board, row: usize, col: usize) -> Option<WinningLine> {
    let mark = board.get(row, col);
    if mark == Mark::Empty {
        return None;
    }

    let size = board.size() as isize;
    let len = board.win_length() as isize;

    for (dr, dc) in DIRECTIONS {
        for back in (0..len).rev() {
            let start_r = row as isize - dr * back;
            let start_c = col as isize - dc * back;
            let end_r = start_r + dr * (len - 1);
            let end_c = start_c + dc * (len - 1);
            if start_r < 0 || start_c < 0 || start_r >= size || start_c >= size {
                continue;
            }
            if end_r < 0 || end_c < 0 || end_r >= size || end_c >= size {
                continue;
            }

            let filled = (0..len).all(|i| {
                board.get((start_r + dr * i) as usize, (start_c + dc * i) as usize) == mark
            });
            if filled {
                let cells = (0..len)
                    .map(|i| {
                        Position::new((start_r + dr * i) as usize, (start_c + dc * i) as usize)
                    })
                    .collect();
                return Some(WinningLine { mark, cells });
            }
        }
    }

    None
}

/// Unanchored full scan, used where no last-move anchor exists (minimax
/// recursion). Same axis order as the anchored path.
pub fn check_winner_full(board: &Board) -> Option<Mark> {
    for row in 0..board.size() {
        for col in 0..board.size() {
            let mark = board.get(row, col);
            if mark == Mark::Empty {
                continue;
            }
            for (dr, dc) in DIRECTIONS {
                if window_filled(board, row, col, dr, dc, mark) {
                    return Some(mark);
                }
            }
        }
    }
    None
}

fn window_filled(board: &Board, row: usize, col: usize, dr: isize, dc: isize, mark: Mark) -> bool {
    let size = board.size() as isize;
    let last = (board.win_length() - 1) as isize;

    let end_r = row as isize + dr * last;
    let end_c = col as isize + dc * last;
    if end_r < 0 || end_c < 0 || end_r >= size || end_c >= size {
        return false;
    }

    (1..=last).all(|i| board.get((row as isize + dr * i) as usize, (col as isize + dc * i) as usize) == mark)
}

pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner_full(board).is_none()
}

/// Classifies the board right after `last_move` was applied.
pub fn classify(board: &Board, last_move: Position) -> GameOutcome {
    let mark = board.get(last_move.row, last_move.col);

    if let Some(winning_line) = winning_line_through(board, last_move.row, last_move.col) {
        return GameOutcome::Win {
            player: mark,
            winning_line,
        };
    }

    if is_draw(board) {
        return GameOutcome::Draw;
    }

    let Some(next_to_move) = mark.opponent() else {
        unreachable!("classify called with an empty last-move cell");
    };
    GameOutcome::InProgress { next_to_move }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session_rng::SessionRng;

    fn board_with(size: usize, win_length: usize, marks: &[(usize, usize, Mark)]) -> Board {
        let mut board = Board::new(size, win_length).unwrap();
        for &(row, col, mark) in marks {
            board.set(row, col, mark);
        }
        board
    }

    #[test]
    fn test_legal_move_flips_after_set() {
        let mut board = Board::new(3, 3).unwrap();
        assert!(is_legal_move(&board, 1, 1));
        board.set(1, 1, Mark::X);
        assert!(!is_legal_move(&board, 1, 1));
        assert!(!is_legal_move(&board, 3, 0));
    }

    #[test]
    fn test_horizontal_win_through() {
        let board = board_with(
            4,
            3,
            &[(2, 0, Mark::X), (2, 1, Mark::X), (2, 2, Mark::X)],
        );
        assert!(check_win_through(&board, 2, 1, Mark::X));
        assert!(!check_win_through(&board, 2, 1, Mark::O));
    }

    #[test]
    fn test_vertical_win_through() {
        let board = board_with(
            4,
            3,
            &[(0, 3, Mark::O), (1, 3, Mark::O), (2, 3, Mark::O)],
        );
        assert!(check_win_through(&board, 2, 3, Mark::O));
    }

    #[test]
    fn test_diagonal_down_right_win_through() {
        let board = board_with(
            4,
            4,
            &[
                (0, 0, Mark::X),
                (1, 1, Mark::X),
                (2, 2, Mark::X),
                (3, 3, Mark::X),
            ],
        );
        assert!(check_win_through(&board, 1, 1, Mark::X));
    }

    #[test]
    fn test_diagonal_down_left_win_through() {
        let board = board_with(
            4,
            3,
            &[(1, 3, Mark::O), (2, 2, Mark::O), (3, 1, Mark::O)],
        );
        assert!(check_win_through(&board, 2, 2, Mark::O));
    }

    #[test]
    fn test_no_win_below_run_length() {
        let board = board_with(5, 4, &[(0, 0, Mark::X), (0, 1, Mark::X), (0, 2, Mark::X)]);
        assert!(!check_win_through(&board, 0, 1, Mark::X));
        assert_eq!(check_winner_full(&board), None);
    }

    #[test]
    fn test_winning_line_reports_horizontal_before_vertical() {
        // Both a row and a column complete through (1, 1).
        let board = board_with(
            3,
            3,
            &[
                (1, 0, Mark::X),
                (1, 1, Mark::X),
                (1, 2, Mark::X),
                (0, 1, Mark::X),
                (2, 1, Mark::X),
            ],
        );
        let line = winning_line_through(&board, 1, 1).unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(
            line.cells,
            vec![
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(1, 2)
            ]
        );
    }

    #[test]
    fn test_winning_line_cells_cover_run_length() {
        let board = board_with(
            5,
            4,
            &[
                (1, 1, Mark::O),
                (2, 2, Mark::O),
                (3, 3, Mark::O),
                (4, 4, Mark::O),
            ],
        );
        let line = winning_line_through(&board, 3, 3).unwrap();
        assert_eq!(line.cells.len(), 4);
        assert_eq!(line.start(), Position::new(1, 1));
        assert_eq!(line.end(), Position::new(4, 4));
    }

    #[test]
    fn test_full_scan_finds_win_without_anchor() {
        let board = board_with(
            4,
            3,
            &[(3, 0, Mark::O), (3, 1, Mark::O), (3, 2, Mark::O)],
        );
        assert_eq!(check_winner_full(&board), Some(Mark::O));
    }

    #[test]
    fn test_anchored_agrees_with_full_scan_on_random_playouts() {
        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            let mut board = Board::new(5, 4).unwrap();
            let mut mover = Mark::X;

            loop {
                let moves = board.available_moves();
                if moves.is_empty() {
                    break;
                }
                let pos = moves[rng.random_range(0..moves.len())];
                board.set(pos.row, pos.col, mover);

                let anchored = check_win_through(&board, pos.row, pos.col, mover);
                let full = check_winner_full(&board) == Some(mover);
                assert_eq!(
                    anchored, full,
                    "detection paths disagree at ({}, {}) with seed {}",
                    pos.row, pos.col, seed
                );

                if anchored {
                    break;
                }
                mover = mover.opponent().unwrap();
            }
        }
    }

    #[test]
    fn test_classify_win() {
        let board = board_with(
            3,
            3,
            &[
                (0, 0, Mark::X),
                (0, 1, Mark::X),
                (0, 2, Mark::X),
                (1, 0, Mark::O),
                (1, 1, Mark::O),
            ],
        );
        match classify(&board, Position::new(0, 2)) {
            GameOutcome::Win {
                player,
                winning_line,
            } => {
                assert_eq!(player, Mark::X);
                assert_eq!(winning_line.cells.len(), 3);
            }
            other => panic!("expected a win, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_full_board_without_winner_is_draw() {
        // X O X / X O O / O X X
        let board = board_with(
            3,
            3,
            &[
                (0, 0, Mark::X),
                (0, 1, Mark::O),
                (0, 2, Mark::X),
                (1, 0, Mark::X),
                (1, 1, Mark::O),
                (1, 2, Mark::O),
                (2, 0, Mark::O),
                (2, 1, Mark::X),
                (2, 2, Mark::X),
            ],
        );
        assert!(is_draw(&board));
        assert_eq!(classify(&board, Position::new(2, 2)), GameOutcome::Draw);
    }

    #[test]
    fn test_classify_in_progress_hands_turn_to_opponent() {
        let board = board_with(3, 3, &[(0, 0, Mark::X)]);
        assert_eq!(
            classify(&board, Position::new(0, 0)),
            GameOutcome::InProgress {
                next_to_move: Mark::O
            }
        );
    }
}
