pub mod cozy;

use cozy_chess::{Color, Piece, Square};

pub use cozy::CozyGame;

/// Rules oracle the search walks. Implementations own the position and are
/// mutated in place: every `apply_move` must be matched by an `undo_move` of the
/// same move, in strict LIFO order.
pub trait Rules {
    type Move: Copy + PartialEq + std::fmt::Debug;

    /// Legal moves from the current position. The order fixes child order and
    /// therefore every tie-break in the search.
    fn legal_moves(&self, out: &mut Vec<Self::Move>);
    fn apply_move(&mut self, mv: Self::Move);
    fn undo_move(&mut self, mv: Self::Move);
    /// Side to move has no legal moves and is in check.
    fn is_checkmate(&self) -> bool;
    fn is_draw(&self) -> bool;
    fn side_to_move(&self) -> Color;
    /// Human-readable move text for logs.
    fn move_text(&self, mv: Self::Move) -> String { format!("{:?}", mv) }
    /// Visit every occupied square.
    fn for_each_piece<F: FnMut(Square, Piece, Color)>(&self, f: F);
}
