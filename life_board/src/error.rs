use thiserror::Error;

/// Errors surfaced by board operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A coordinate fell outside `[0, side)` on at least one axis.
    ///
    /// Invalid coordinates are rejected rather than clamped or ignored, so
    /// that an off-by-one in a caller (e.g. a preset coordinate list) fails
    /// loudly instead of silently corrupting the simulation.
    #[error("coordinate ({x}, {y}) is outside the {side}x{side} board")]
    OutOfRangeCoordinate { x: usize, y: usize, side: usize },
}
