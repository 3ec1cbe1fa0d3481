use cozy_chess::{Board, Color, File, Move, Piece, Square};
use crate::board::Rules;
use crate::error::EngineError;

/// A cozy-chess board plus the undo stack needed for in-place make/undo and
/// repetition detection. Moves played before the search (e.g. from a UCI
/// `position ... moves` line) stay on the stack so repetitions against game
/// history are seen as draws.
#[derive(Clone, Debug)]
pub struct CozyGame {
    board: Board,
    history: Vec<(Board, Move)>,
}

impl Default for CozyGame {
    fn default() -> Self { Self::startpos() }
}

impl CozyGame {
    pub fn startpos() -> Self {
        Self { board: Board::default(), history: Vec::new() }
    }

    pub fn from_fen(fen: &str) -> Result<Self, EngineError> {
        Board::from_fen(fen, false)
            .map(|b| Self { board: b, history: Vec::new() })
            .map_err(|e| EngineError::Fen(format!("{fen}: {e:?}")))
    }

    pub fn board(&self) -> &Board { &self.board }

    /// Number of moves on the undo stack.
    pub fn ply(&self) -> usize { self.history.len() }

    pub fn find_move_uci(&self, mv_uci: &str) -> Option<Move> {
        let mut found = None;
        self.board.generate_moves(|moves| {
            for m in moves {
                if move_to_uci(&self.board, m) == mv_uci || format!("{}", m) == mv_uci { found = Some(m); break; }
            }
            found.is_some()
        });
        found
    }

    pub fn make_move_uci(&mut self, mv_uci: &str) -> Result<Move, EngineError> {
        let m = self.find_move_uci(mv_uci).ok_or_else(|| EngineError::IllegalMove(mv_uci.to_string()))?;
        self.apply_move(m);
        Ok(m)
    }

    pub fn set_from_fen_and_moves(fen: Option<&str>, moves: &[String]) -> Result<Self, EngineError> {
        let mut game = match fen { Some(f) => Self::from_fen(f)?, None => Self::startpos() };
        for m in moves { game.make_move_uci(m)?; }
        Ok(game)
    }

    /// Standard UCI text for a legal move in the current position.
    pub fn uci(&self, mv: Move) -> String { move_to_uci(&self.board, mv) }

    pub fn has_legal_moves(&self) -> bool {
        self.board.generate_moves(|moves| !moves.is_empty())
    }

    fn is_repetition(&self) -> bool {
        let key = self.board.hash();
        // Only positions since the last capture or pawn move can recur.
        let window = (self.board.halfmove_clock() as usize).min(self.history.len());
        self.history.iter().rev().take(window).any(|(b, _)| b.hash() == key)
    }

    fn is_insufficient_material(&self) -> bool {
        let b = &self.board;
        let heavy = b.pieces(Piece::Pawn) | b.pieces(Piece::Rook) | b.pieces(Piece::Queen);
        if !heavy.is_empty() { return false; }
        let knights = b.pieces(Piece::Knight).into_iter().count();
        let bishops: Vec<Square> = b.pieces(Piece::Bishop).into_iter().collect();
        if knights + bishops.len() <= 1 { return true; }
        knights == 0 && bishops.iter().all(|&sq| is_dark(sq) == is_dark(bishops[0]))
    }
}

fn is_dark(sq: Square) -> bool {
    (sq.file() as usize + sq.rank() as usize) % 2 == 0
}

/// cozy-chess encodes castling as king-takes-own-rook; UCI wants the king's
/// destination square.
pub fn move_to_uci(board: &Board, mv: Move) -> String {
    let stm = board.side_to_move();
    if board.piece_on(mv.from) == Some(Piece::King) && board.color_on(mv.to) == Some(stm) {
        let file = if (mv.to.file() as usize) > (mv.from.file() as usize) { File::G } else { File::C };
        let to = Square::new(file, mv.from.rank());
        return format!("{}{}", mv.from, to);
    }
    format!("{}", mv)
}

impl Rules for CozyGame {
    type Move = Move;

    fn legal_moves(&self, out: &mut Vec<Move>) {
        out.clear();
        self.board.generate_moves(|moves| { out.extend(moves); false });
    }

    fn apply_move(&mut self, mv: Move) {
        let prev = self.board.clone();
        self.board.play_unchecked(mv);
        self.history.push((prev, mv));
    }

    fn undo_move(&mut self, mv: Move) {
        match self.history.pop() {
            Some((prev, played)) => {
                debug_assert_eq!(played, mv, "undo out of LIFO order");
                self.board = prev;
            }
            None => debug_assert!(false, "undo with empty history"),
        }
    }

    fn is_checkmate(&self) -> bool {
        !self.board.checkers().is_empty() && !self.has_legal_moves()
    }

    fn is_draw(&self) -> bool {
        if self.board.checkers().is_empty() && !self.has_legal_moves() { return true; }
        if self.board.halfmove_clock() >= 100 { return true; }
        self.is_insufficient_material() || self.is_repetition()
    }

    fn side_to_move(&self) -> Color { self.board.side_to_move() }

    fn move_text(&self, mv: Move) -> String { self.uci(mv) }

    fn for_each_piece<F: FnMut(Square, Piece, Color)>(&self, mut f: F) {
        for sq in self.board.occupied() {
            if let (Some(p), Some(c)) = (self.board.piece_on(sq), self.board.color_on(sq)) {
                f(sq, p, c);
            }
        }
    }
}
