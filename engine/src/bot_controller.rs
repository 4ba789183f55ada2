use crate::board::Board;
use crate::session_rng::SessionRng;
use crate::types::{Difficulty, Mark, Position};
use crate::win_detector::{check_win_through, check_winner_full};

const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Picks a move for the computer. The board is never mutated; candidate
/// probes and search plies run on cheap clones. Returns `None` only when no
/// empty cell exists, which the session rules out before calling.
pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    ai_mark: Mark,
    human_mark: Mark,
    rng: &mut SessionRng,
) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => random_move(board, rng),
        // A coin flip between the full strategy and a blind move, even when a
        // block is mandatory.
        Difficulty::Medium => {
            if rng.random_bool() {
                hard_move(board, ai_mark, human_mark, rng)
            } else {
                random_move(board, rng)
            }
        }
        Difficulty::Hard => hard_move(board, ai_mark, human_mark, rng),
    }
}

fn random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let moves = board.available_moves();
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.random_range(0..moves.len())])
}

fn hard_move(
    board: &Board,
    ai_mark: Mark,
    human_mark: Mark,
    rng: &mut SessionRng,
) -> Option<Position> {
    // The classic 3x3 game tree is small enough to solve exactly every call.
    // Anything larger takes the heuristic cascade instead.
    if board.size() == 3 {
        return minimax_move(board, ai_mark, human_mark);
    }

    let moves = board.available_moves();
    if moves.is_empty() {
        return None;
    }

    if let Some(pos) = find_winning_move(board, ai_mark, &moves) {
        return Some(pos);
    }
    if let Some(pos) = find_winning_move(board, human_mark, &moves) {
        return Some(pos);
    }
    if let Some(pos) = find_fork_move(board, ai_mark, &moves) {
        return Some(pos);
    }
    if let Some(pos) = find_fork_move(board, human_mark, &moves) {
        return Some(pos);
    }
    if let Some(pos) = center_move(board) {
        return Some(pos);
    }
    if let Some(pos) = opposite_corner_move(board, human_mark) {
        return Some(pos);
    }
    if let Some(pos) = empty_corner_move(board) {
        return Some(pos);
    }
    if let Some(pos) = empty_edge_move(board) {
        return Some(pos);
    }
    random_move(board, rng)
}

fn place(board: &Board, pos: Position, mark: Mark) -> Board {
    let mut next = board.clone();
    next.set(pos.row, pos.col, mark);
    next
}

fn find_winning_move(board: &Board, mark: Mark, moves: &[Position]) -> Option<Position> {
    moves.iter().copied().find(|&pos| {
        let probe = place(board, pos, mark);
        check_win_through(&probe, pos.row, pos.col, mark)
    })
}

/// First cell (row-major) whose placement leaves `mark` with two or more
/// one-move-from-winning lines at once.
fn find_fork_move(board: &Board, mark: Mark, moves: &[Position]) -> Option<Position> {
    moves.iter().copied().find(|&pos| {
        let probe = place(board, pos, mark);
        count_threat_lines(&probe, mark) >= 2
    })
}

/// Number of windows holding exactly `win_length - 1` of `mark` and exactly
/// one empty cell.
fn count_threat_lines(board: &Board, mark: Mark) -> usize {
    let size = board.size() as isize;
    let len = board.win_length() as isize;
    let mut threats = 0;

    for (dr, dc) in DIRECTIONS {
        for row in 0..size {
            for col in 0..size {
                let end_r = row + dr * (len - 1);
                let end_c = col + dc * (len - 1);
                if end_r < 0 || end_c < 0 || end_r >= size || end_c >= size {
                    continue;
                }

                let mut own = 0;
                let mut empty = 0;
                for i in 0..len {
                    match board.get((row + dr * i) as usize, (col + dc * i) as usize) {
                        Mark::Empty => empty += 1,
                        m if m == mark => own += 1,
                        _ => {}
                    }
                }
                if own == len - 1 && empty == 1 {
                    threats += 1;
                }
            }
        }
    }

    threats
}

fn center_move(board: &Board) -> Option<Position> {
    if board.size() % 2 == 0 {
        return None;
    }
    let center = board.size() / 2;
    if board.get(center, center) == Mark::Empty {
        Some(Position::new(center, center))
    } else {
        None
    }
}

// Fixed corner order: top-left, top-right, bottom-left, bottom-right.
fn corners(board: &Board) -> [Position; 4] {
    let last = board.size() - 1;
    [
        Position::new(0, 0),
        Position::new(0, last),
        Position::new(last, 0),
        Position::new(last, last),
    ]
}

fn opposite_corner_move(board: &Board, human_mark: Mark) -> Option<Position> {
    let last = board.size() - 1;
    corners(board).into_iter().find_map(|corner| {
        let opposite = Position::new(last - corner.row, last - corner.col);
        if board.get(corner.row, corner.col) == human_mark
            && board.get(opposite.row, opposite.col) == Mark::Empty
        {
            Some(opposite)
        } else {
            None
        }
    })
}

fn empty_corner_move(board: &Board) -> Option<Position> {
    corners(board)
        .into_iter()
        .find(|&pos| board.get(pos.row, pos.col) == Mark::Empty)
}

fn empty_edge_move(board: &Board) -> Option<Position> {
    let last = board.size() - 1;
    board.available_moves().into_iter().find(|&pos| {
        let on_border = pos.row == 0 || pos.row == last || pos.col == 0 || pos.col == last;
        let is_corner = (pos.row == 0 || pos.row == last) && (pos.col == 0 || pos.col == last);
        on_border && !is_corner
    })
}

/// Exhaustive search for the 3x3 game. First-found maximum in row-major
/// candidate order keeps the result deterministic.
fn minimax_move(board: &Board, ai_mark: Mark, human_mark: Mark) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;

    for pos in board.available_moves() {
        let next = place(board, pos, ai_mark);
        let score = minimax_score(&next, ai_mark, human_mark, 0, false);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((pos, score)),
        }
    }

    best.map(|(pos, _)| pos)
}

/// Scores a position: computer win is 10 - depth, opponent win depth - 10,
/// exhausted board 0. The depth term prefers faster wins and slower losses.
fn minimax_score(
    board: &Board,
    ai_mark: Mark,
    human_mark: Mark,
    depth: i32,
    maximizing: bool,
) -> i32 {
    if let Some(winner) = check_winner_full(board) {
        return if winner == ai_mark { 10 - depth } else { depth - 10 };
    }
    if board.is_full() {
        return 0;
    }

    let mover = if maximizing { ai_mark } else { human_mark };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in board.available_moves() {
        let next = place(board, pos, mover);
        let score = minimax_score(&next, ai_mark, human_mark, depth + 1, !maximizing);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
