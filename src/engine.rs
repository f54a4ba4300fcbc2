//! Main AI engine: the move-selection policy
//!
//! Sequences cheap exact checks before the expensive search:
//!
//! 1. **Opening**: center or a random cell next to it while the board has
//!    at most a few stones
//! 2. **Immediate win**: complete our own five
//! 3. **Forced block**: take the opponent's completing cell
//! 4. **Alpha-Beta**: fixed-depth negamax over pruned candidates
//!
//! # Example
//!
//! ```
//! use gobang::{AIEngine, Board, Stone};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::new();
//!
//! board.apply_move(7, 7, Stone::Black).unwrap();
//!
//! // AI responds as White
//! if let Some(pos) = engine.get_move(&board, Stone::White) {
//!     board.apply_move(i32::from(pos.row), i32::from(pos.col), Stone::White).unwrap();
//! }
//! ```

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, MoveError, Pos, Stone, BOARD_SIZE};
use crate::eval::PatternScore;
use crate::rules::is_winning_move;
use crate::search::{SearchResult, Searcher};

/// Default search depth in plies. Depth trades strength for latency; it is
/// a fixed constant per engine, not adaptive.
pub const SEARCH_DEPTH: i8 = 2;

/// Default stone-count threshold for the opening heuristic.
pub const OPENING_MOVES: u32 = 3;

/// Engine configuration.
///
/// `seed` fixes the opening tie-break RNG so tests can assert a
/// deterministic outcome; `None` seeds from entropy. The deeper search
/// never consults the RNG — its ties break on first-encountered order.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Search depth in plies
    pub depth: i8,
    /// Use the opening heuristic while at most this many stones are on the board
    pub opening_moves: u32,
    /// RNG seed for opening tie-breaks
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: SEARCH_DEPTH,
            opening_moves: OPENING_MOVES,
            seed: None,
        }
    }
}

/// Which phase of the selection policy produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Opening heuristic (center or a neighbor of center)
    Opening,
    /// Move completing our own five
    ImmediateWin,
    /// Block of the opponent's completing cell
    Defense,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move selection with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Evaluation score associated with the move
    pub score: i32,
    /// Phase of the selection policy that produced the move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of search nodes visited
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn opening(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type: SearchType::Opening,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn immediate_win(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: PatternScore::FIVE,
            search_type: SearchType::ImmediateWin,
            time_ms,
            nodes: 1,
        }
    }

    #[inline]
    fn defense(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type: SearchType::Defense,
            time_ms,
            nodes: 1,
        }
    }

    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Main AI engine.
///
/// Holds the searcher and the opening RNG; one instance serves a whole
/// game. The engine never keeps board state of its own — every call takes
/// the current board and the side to move.
pub struct AIEngine {
    searcher: Searcher,
    depth: i8,
    opening_moves: u32,
    rng: SmallRng,
}

impl AIEngine {
    /// Create an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with a custom configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use gobang::{AIEngine, EngineConfig};
    ///
    /// let engine = AIEngine::with_config(EngineConfig {
    ///     depth: 4,
    ///     seed: Some(42),
    ///     ..EngineConfig::default()
    /// });
    /// assert_eq!(engine.depth(), 4);
    /// ```
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self {
            searcher: Searcher::new(),
            depth: config.depth,
            opening_moves: config.opening_moves,
            rng,
        }
    }

    /// Get the best move for the given position.
    ///
    /// Convenience wrapper over `get_move_with_stats`.
    ///
    /// # Returns
    ///
    /// The chosen move, or `None` if no legal move exists (full board).
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Select the best move, failing explicitly on a full board.
    ///
    /// # Errors
    ///
    /// `NoLegalMove` when no empty cell remains — the game is over.
    pub fn select_move(&mut self, board: &Board, color: Stone) -> Result<Pos, MoveError> {
        self.get_move(board, color).ok_or(MoveError::NoLegalMove)
    }

    /// Get the best move with selection statistics.
    ///
    /// # Selection Priority
    ///
    /// 1. Opening heuristic while the board holds at most `opening_moves`
    ///    stones (too few for any five threat, so the forcing checks are
    ///    skipped too; falls through to search if center and its ring are
    ///    all taken)
    /// 2. Immediate winning move for `color`
    /// 3. Block of the opponent's immediate win
    /// 4. Fixed-depth alpha-beta search
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, color: Stone) -> MoveResult {
        let start = Instant::now();

        if board.stone_count() <= self.opening_moves {
            if let Some(pos) = self.opening_move(board) {
                return MoveResult::opening(pos, start.elapsed().as_millis() as u64);
            }
        } else {
            // Our own win takes priority over blocking
            if let Some(pos) = self.find_winning_move(board, color) {
                return MoveResult::immediate_win(pos, start.elapsed().as_millis() as u64);
            }
            if let Some(pos) = self.find_winning_move(board, color.opponent()) {
                return MoveResult::defense(pos, start.elapsed().as_millis() as u64);
            }
        }

        let result = self.searcher.search(board, color, self.depth);
        MoveResult::from_search(result, start.elapsed().as_millis() as u64)
    }

    /// Opening-phase move: the center cell, or a uniformly random empty
    /// cell of the 8 surrounding it. `None` when all nine are taken.
    fn opening_move(&mut self, board: &Board) -> Option<Pos> {
        let center = Pos::center();
        if board.is_empty(center) {
            return Some(center);
        }

        let mut ring = Vec::with_capacity(8);
        for dr in -1i32..=1 {
            for dc in -1i32..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = i32::from(center.row) + dr;
                let c = i32::from(center.col) + dc;
                // The ring around (7, 7) is always in bounds on a 15x15 board
                debug_assert!(Pos::is_valid(r, c));
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let pos = Pos::new(r as u8, c as u8);
                if board.is_empty(pos) {
                    ring.push(pos);
                }
            }
        }

        if ring.is_empty() {
            None
        } else {
            Some(ring[self.rng.gen_range(0..ring.len())])
        }
    }

    /// Find a move that completes five-in-a-row for `color`.
    ///
    /// Scans empty cells in row-major order on a scratch board, placing and
    /// retracting a stone at each; the first completing cell wins. Called
    /// on the real (non-simulated) board only.
    fn find_winning_move(&self, board: &Board, color: Stone) -> Option<Pos> {
        let mut work = board.clone();
        for r in 0..BOARD_SIZE as u8 {
            for c in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(r, c);
                if !work.is_empty(pos) {
                    continue;
                }
                work.place_stone(pos, color);
                let wins = is_winning_move(&work, pos, color);
                work.remove_stone(pos);
                if wins {
                    return Some(pos);
                }
            }
        }
        None
    }

    /// Set the search depth in plies.
    pub fn set_depth(&mut self, depth: i8) {
        self.depth = depth;
    }

    /// Get the current search depth.
    #[must_use]
    pub fn depth(&self) -> i8 {
        self.depth
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
