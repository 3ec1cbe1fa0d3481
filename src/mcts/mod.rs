//! Time-bounded UCT search with a static leaf evaluator in place of rollouts.

pub mod tree;

use log::{debug, log_enabled, trace, Level};

use crate::board::Rules;
use crate::clock::Clock;
use crate::config::SearchParams;
use crate::eval;

pub use tree::{uct, Node, NodeId, Tree};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    pub best_move: Option<M>,
    /// Mean score of the chosen child, from the mover's perspective.
    pub mean_score: f64,
    pub iterations: u64,
    pub root_visits: u32,
    pub tree_nodes: usize,
    pub elapsed_ms: u64,
}

/// Moves applied on the way down. Each iteration pops them one by one while
/// backpropagating; anything still held on drop (an unwinding evaluator) is
/// undone in LIFO order so the caller's position is always restored.
struct Line<'a, G: Rules> {
    game: &'a mut G,
    played: Vec<G::Move>,
}

impl<'a, G: Rules> Line<'a, G> {
    fn new(game: &'a mut G) -> Self { Self { game, played: Vec::new() } }

    fn game(&self) -> &G { &*self.game }

    fn play(&mut self, mv: G::Move) {
        self.game.apply_move(mv);
        self.played.push(mv);
    }

    fn unplay(&mut self) {
        if let Some(mv) = self.played.pop() { self.game.undo_move(mv); }
    }
}

impl<G: Rules> Drop for Line<'_, G> {
    fn drop(&mut self) {
        while let Some(mv) = self.played.pop() { self.game.undo_move(mv); }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Searcher {
    params: SearchParams,
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self { Self { params } }

    pub fn params(&self) -> &SearchParams { &self.params }

    /// Pick a move for the side to move. `game` is walked in place and is back
    /// in its starting state on return. Returns no move only when the root has
    /// no legal moves.
    pub fn choose_move<G: Rules, C: Clock>(&self, game: &mut G, clock: &C) -> SearchResult<G::Move> {
        self.search(game, clock).1
    }

    /// Like `choose_move` but hands back the tree as well.
    pub fn search<G: Rules, C: Clock>(&self, game: &mut G, clock: &C) -> (Tree<G::Move>, SearchResult<G::Move>) {
        let budget_ms = self.params.budget_ms(clock.remaining_ms());
        let mut tree = Tree::new();
        let mut moves: Vec<G::Move> = Vec::with_capacity(64);
        let mut iterations = 0u64;

        // Run first, check after: at least one iteration always completes, so
        // the root is expanded even with a zero budget.
        loop {
            self.iterate(&mut tree, game, &mut moves);
            iterations += 1;
            if self.params.max_iterations.map_or(false, |max| iterations >= max) { break; }
            if clock.elapsed_ms() >= budget_ms { break; }
        }

        let best = tree.best_child(NodeId::ROOT).map(|id| tree.get(id));
        let result = SearchResult {
            best_move: best.and_then(|n| n.mv()),
            mean_score: best.map_or(0.0, |n| n.mean()),
            iterations,
            root_visits: tree.root().visits(),
            tree_nodes: tree.len(),
            elapsed_ms: clock.elapsed_ms(),
        };
        debug!(
            "mcts: budget={}ms iterations={} nodes={} best={:?} mean={:.4} elapsed={}ms",
            budget_ms, result.iterations, result.tree_nodes, result.best_move, result.mean_score, result.elapsed_ms
        );
        if log_enabled!(Level::Trace) {
            let table = tree.statistics_string(NodeId::ROOT, self.params.exploration, |m| game.move_text(m));
            trace!("root children:\n{}", table);
        }
        (tree, result)
    }

    /// One selection / expansion / evaluation / backpropagation cycle. `moves`
    /// is scratch space for move generation.
    pub fn iterate<G: Rules>(&self, tree: &mut Tree<G::Move>, game: &mut G, moves: &mut Vec<G::Move>) {
        let mut path = vec![NodeId::ROOT];
        let mut line = Line::new(game);

        let mut node = NodeId::ROOT;
        while let Some(child) = tree.select_child(node, self.params.exploration) {
            if let Some(mv) = tree.get(child).mv() { line.play(mv); }
            path.push(child);
            node = child;
        }

        // A position with no legal moves stays a leaf and is re-scored each
        // time it is reached.
        line.game().legal_moves(moves);
        if !moves.is_empty() { tree.expand(node, moves); }

        let mut score = eval::evaluate(line.game(), &self.params.eval);

        // Each node stores value for the side that moved into it, one ply
        // above the side whose turn it is there: flip before recording.
        for &id in path.iter().rev() {
            if id != NodeId::ROOT { line.unplay(); }
            score = -score;
            tree.record(id, score);
        }
    }
}
