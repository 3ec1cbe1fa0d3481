// Make/undo perft over any rules oracle. Exercises the same apply/undo pairing
// the search relies on, so a mismatch shows up as a wrong node count.
use crate::board::Rules;

pub fn perft<G: Rules>(game: &mut G, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let mut moves = Vec::new();
    game.legal_moves(&mut moves);
    if depth == 1 { return moves.len() as u64; }
    let mut nodes = 0u64;
    for mv in moves {
        game.apply_move(mv);
        nodes += perft(game, depth - 1);
        game.undo_move(mv);
    }
    nodes
}
