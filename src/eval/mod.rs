pub mod pst;

use crate::board::Rules;
use crate::config::EvalParams;

pub const LOSS: f64 = -1.0;
pub const DRAW: f64 = 0.0;

/// Table sum from the side to move's perspective, in table units.
pub fn material_pst_cp<G: Rules>(game: &G) -> i32 {
    let stm = game.side_to_move();
    let mut sum = 0i32;
    game.for_each_piece(|sq, piece, color| {
        let v = pst::value(piece, sq, color);
        sum += if color == stm { v } else { -v };
    });
    sum
}

/// Heuristic score in [-ceiling, ceiling], side to move perspective. tanh
/// saturates in f64, so the bound itself is reachable.
pub fn heuristic<G: Rules>(game: &G, params: &EvalParams) -> f64 {
    let stm = game.side_to_move();
    let mut sum = 0.0f64;
    game.for_each_piece(|sq, piece, color| {
        let sign = if color == stm { params.scale } else { -params.scale };
        sum += pst::value(piece, sq, color) as f64 * sign;
    });
    sum.tanh() * params.ceiling
}

/// Leaf score in [-1, 1] for the side to move. Exact -1 for being mated and
/// exact 0 for a draw; everything else goes through the squashed heuristic.
pub fn evaluate<G: Rules>(game: &G, params: &EvalParams) -> f64 {
    if game.is_checkmate() { return LOSS; }
    if game.is_draw() { return DRAW; }
    heuristic(game, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CozyGame;

    #[test]
    fn startpos_is_balanced() {
        let g = CozyGame::startpos();
        assert_eq!(material_pst_cp(&g), 0);
        assert!(evaluate(&g, &EvalParams::default()).abs() < 1e-9);
    }

    #[test]
    fn score_flips_with_side_to_move() {
        let w = CozyGame::from_fen("k7/8/8/8/3N4/8/8/7K w - - 0 1").unwrap();
        let b = CozyGame::from_fen("k7/8/8/8/3N4/8/8/7K b - - 0 1").unwrap();
        let p = EvalParams::default();
        assert!(heuristic(&w, &p) > 0.0);
        assert!((heuristic(&w, &p) + heuristic(&b, &p)).abs() < 1e-12);
    }

    #[test]
    fn heuristic_stays_under_ceiling() {
        // Three queens and two rooks against a bare king saturate tanh.
        let g = CozyGame::from_fen("8/8/8/7k/8/8/QQQRR3/K7 w - - 0 1").unwrap();
        let p = EvalParams::default();
        let s = heuristic(&g, &p);
        assert!(s > 0.79 && s <= p.ceiling, "score {s}");
        assert!(s < 1.0);
    }
}
