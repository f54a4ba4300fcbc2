//! Pattern scores for Gobang evaluation
//!
//! These constants define the scoring weights for line shapes. An end is
//! "open" when the cell just beyond the run is in-bounds and empty; a short
//! run blocked on both ends scores nothing.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - immediate win
    pub const FIVE: i32 = 100_000;

    /// Open four: _OOOO_ (two ways to complete)
    pub const OPEN_FOUR: i32 = 10_000;
    /// Closed four: XOOOO_ or _OOOOX (one way to complete)
    pub const CLOSED_FOUR: i32 = 1_000;

    /// Open three: _OOO_ (becomes an open four if not blocked)
    pub const OPEN_THREE: i32 = 1_000;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i32 = 100;

    /// Open two: _OO_ (room to grow)
    pub const OPEN_TWO: i32 = 100;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: i32 = 10;
}
