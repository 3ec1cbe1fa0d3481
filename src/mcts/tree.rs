//! Arena-backed search tree. Nodes are only ever appended; the whole arena is
//! dropped with the tree at the end of a decision.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    fn index(self) -> usize { self.0 as usize }
}

/// One position reached from the root. `score` is the running sum of
/// backpropagated values from the perspective of the side that played `mv`.
#[derive(Clone, Debug)]
pub struct Node<M> {
    mv: Option<M>,
    children: Vec<NodeId>,
    visits: u32,
    score: f64,
}

impl<M: Copy> Node<M> {
    fn new(mv: Option<M>) -> Self {
        // visits starts at 1 so the mean is defined before any backprop.
        Self { mv, children: Vec::new(), visits: 1, score: 0.0 }
    }

    /// Move leading here; `None` only for the root.
    pub fn mv(&self) -> Option<M> { self.mv }
    pub fn children(&self) -> &[NodeId] { &self.children }
    pub fn visits(&self) -> u32 { self.visits }
    pub fn score(&self) -> f64 { self.score }

    #[inline]
    pub fn mean(&self) -> f64 { self.score / self.visits as f64 }

    pub fn is_leaf(&self) -> bool { self.children.is_empty() }
}

/// UCT value of a child: mean plus `c * sqrt(2 ln N / n)`.
#[inline]
pub fn uct(mean: f64, parent_visits: u32, child_visits: u32, c: f64) -> f64 {
    mean + c * (2.0 * (parent_visits as f64).ln() / child_visits as f64).sqrt()
}

/// Left-to-right scan keeping the first strict maximum. `Iterator::max_by`
/// keeps the last one, which would change every tie-break.
fn first_max<I: Iterator<Item = (NodeId, f64)>>(it: I) -> Option<NodeId> {
    let mut best: Option<(NodeId, f64)> = None;
    for (id, v) in it {
        if best.map_or(true, |(_, bv)| v > bv) { best = Some((id, v)); }
    }
    best.map(|(id, _)| id)
}

#[derive(Clone, Debug)]
pub struct Tree<M> {
    nodes: Vec<Node<M>>,
}

impl<M: Copy> Default for Tree<M> {
    fn default() -> Self { Self::new() }
}

impl<M: Copy> Tree<M> {
    pub fn new() -> Self { Self { nodes: vec![Node::new(None)] } }

    pub fn root(&self) -> &Node<M> { &self.nodes[0] }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node<M> { &self.nodes[id.index()] }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<M>> { self.nodes.iter() }

    /// Attach one child per move, in the given order. Only valid on a leaf.
    pub fn expand(&mut self, id: NodeId, moves: &[M]) {
        debug_assert!(self.nodes[id.index()].is_leaf(), "expanding an expanded node");
        let first = self.nodes.len() as u32;
        self.nodes.extend(moves.iter().map(|&m| Node::new(Some(m))));
        self.nodes[id.index()].children = (first..first + moves.len() as u32).map(NodeId).collect();
    }

    /// Child with the highest UCT value, or `None` for a leaf.
    pub fn select_child(&self, id: NodeId, c: f64) -> Option<NodeId> {
        let parent = &self.nodes[id.index()];
        first_max(parent.children.iter().map(|&ch| {
            let n = self.get(ch);
            (ch, uct(n.mean(), parent.visits, n.visits, c))
        }))
    }

    /// Child with the highest mean score; exploration plays no part.
    pub fn best_child(&self, id: NodeId) -> Option<NodeId> {
        first_max(self.nodes[id.index()].children.iter().map(|&ch| (ch, self.get(ch).mean())))
    }

    pub fn record(&mut self, id: NodeId, value: f64) {
        let n = &mut self.nodes[id.index()];
        n.visits += 1;
        n.score += value;
    }
}

impl<M: Copy> Tree<M> {
    /// Table of the most visited children of `id`, for logging. `fmt` renders
    /// a move as it should be read, e.g. UCI text.
    pub fn statistics_string<F: Fn(M) -> String>(&self, id: NodeId, c: f64, fmt: F) -> String {
        let mut s = String::from("|   move   |     N     |     Q     |    UCT    |\n");
        let parent = self.get(id);
        let mut sorted: Vec<NodeId> = parent.children.clone();
        sorted.sort_by(|a, b| self.get(*b).visits.cmp(&self.get(*a).visits));
        for ch in sorted.iter().take(10) {
            let n = self.get(*ch);
            let mv = n.mv.map(&fmt).unwrap_or_default();
            s.push_str(&format!(
                "|{:^10}|{:^11}|{:^11.4}|{:^11.4}|\n",
                mv, n.visits, n.mean(), uct(n.mean(), parent.visits, n.visits, c)
            ));
        }
        s
    }
}
