use petgraph::graphmap::UnGraphMap;
use petgraph::unionfind::UnionFind;
use petgraph::visit::Dfs;

use crate::event::{MergeEvent, MergeKind};
use crate::pair::Pair;
use crate::partition::Partition;
use crate::point::PointId;
use crate::point_set::PointSet;

/// Connects the points of a [`PointSet`] one edge at a time, closest pair first, and tracks the resulting components.
///
/// The tracker starts with every point in its own component and a cursor at 0.
/// Edges are only ever added, so components only ever merge.
///
/// Internally, component identity lives in a disjoint-set forest keyed by [`PointId`], with union by rank.
/// Paths are compressed only while applying edges, where `union` walks to both roots;
/// [`Self::partition`] reads roots through the non-compressing `find` so it can take `&self`.
/// Alongside it, the undirected graph of applied edges records which points have been connected at all,
/// which is what decides the newly attached point of a [`MergeEvent`].
pub struct ComponentTracker<'a> {
    points: &'a PointSet,
    forest: UnionFind<usize>,
    adjacency: UnGraphMap<PointId, f32>,
    // number of sorted pairs applied so far
    cursor: usize,
    components: usize,
}

impl<'a> ComponentTracker<'a> {
    /// Construct a tracker over `points` with no edges applied.
    pub fn new(points: &'a PointSet) -> Self {
        Self {
            points,
            forest: UnionFind::new(points.len()),
            adjacency: UnGraphMap::new(),
            cursor: 0,
            components: points.len(),
        }
    }

    /// The point set this tracker connects.
    pub fn points(&self) -> &'a PointSet {
        self.points
    }

    /// How many edges of the sorted sequence have been applied.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// How many edges are left to apply.
    pub fn remaining(&self) -> usize {
        self.points.pair_count() - self.cursor
    }

    /// The current number of components, without materializing them.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Whether `point` is an endpoint of at least one applied edge.
    ///
    /// Keyed by identity, not coordinates: a duplicate of a connected point is not connected itself.
    pub fn is_connected(&self, point: PointId) -> bool {
        self.adjacency.contains_node(point)
    }

    /// Discard every applied edge, returning to one singleton component per point.
    pub fn reset(&mut self) {
        self.forest = UnionFind::new(self.points.len());
        self.adjacency.clear();
        self.cursor = 0;
        self.components = self.points.len();
    }

    /// The current partition, grouped by forest root.
    pub fn partition(&self) -> Partition {
        Partition::from_labels(
            (0..self.points.len()).map(|index| self.forest.find(index)),
            self.points.len(),
        )
    }

    /// The current partition, recomputed by a depth-first reachability sweep over the applied edges.
    ///
    /// Always equal to [`Self::partition`]; useful to cross-check the forest.
    pub fn sweep(&self) -> Partition {
        let mut visited = vec![false; self.points.len()];
        let mut components = Vec::new();

        for start in self.points.ids() {
            if visited[start.index()] {
                continue;
            }

            // points without edges are not in the graph at all
            if !self.adjacency.contains_node(start) {
                visited[start.index()] = true;
                components.push(vec![start]);
                continue;
            }

            let mut component = Vec::new();
            let mut dfs = Dfs::new(&self.adjacency, start);
            while let Some(point) = dfs.next(&self.adjacency) {
                visited[point.index()] = true;
                component.push(point);
            }
            components.push(component);
        }

        Partition::from_components(components)
    }

    /// Apply exactly the first `n` sorted edges and return the resulting partition.
    ///
    /// `n` may go up or down between calls; a count beyond the number of pairs is clamped.
    /// Moving forward consumes from the current cursor, moving back replays from nothing.
    /// Either way the result is the same as building from scratch.
    pub fn build_from_first_n_edges(&mut self, n: usize) -> Partition {
        let target = n.min(self.points.pair_count());
        if target < self.cursor {
            log::trace!("rewinding from {} to {} edges", self.cursor, target);
            self.reset();
        }

        self.advance_to(target);
        self.partition()
    }

    /// Consume edges until the cursor reaches `target`, clamped to the number of pairs.
    ///
    /// Never rewinds; a target behind the cursor does nothing.
    pub fn advance_to(&mut self, target: usize) {
        let points = self.points;
        let pairs = points.all_pairs_sorted();
        let target = target.min(pairs.len());
        while self.cursor < target {
            self.apply(pairs[self.cursor]);
        }
    }

    /// Apply the next unconsumed edge and report how it changed the partition.
    ///
    /// When no edge is left, nothing changes and the event is [`MergeKind::Exhausted`] with no points named.
    pub fn step(&mut self) -> MergeEvent {
        let Some(pair) = self.next_pair() else {
            return MergeEvent::exhausted(self.partition());
        };

        let (kind, newly_attached, attached_to) = self.apply(pair);
        log::debug!(
            "component count: {} nodes: {}:{} ({})",
            self.components, newly_attached, attached_to, kind
        );

        MergeEvent {
            edge: Some(pair),
            kind,
            newly_attached: Some(newly_attached),
            attached_to: Some(attached_to),
            partition: self.partition(),
        }
    }

    /// Step until every point belongs to one component, returning the event of the edge that unified them.
    ///
    /// Continues from the current cursor.
    /// Returns `None` if there was at most one component to begin with, or if the edges ran out first.
    pub fn step_until_unified(&mut self) -> Option<MergeEvent> {
        if self.components <= 1 {
            return None;
        }

        while let Some(pair) = self.next_pair() {
            let (kind, newly_attached, attached_to) = self.apply(pair);
            log::trace!("component count: {} nodes: {}:{}", self.components, newly_attached, attached_to);

            if self.components == 1 {
                return Some(MergeEvent {
                    edge: Some(pair),
                    kind,
                    newly_attached: Some(newly_attached),
                    attached_to: Some(attached_to),
                    partition: self.partition(),
                });
            }
        }

        None
    }

    fn next_pair(&self) -> Option<Pair> {
        self.points.all_pairs_sorted().get(self.cursor).copied()
    }

    /// Apply `pair` as the edge at the cursor, returning the merge kind and `(newly_attached, attached_to)`.
    fn apply(&mut self, pair: Pair) -> (MergeKind, PointId, PointId) {
        let (a, b) = (pair.first(), pair.second());

        // membership must be read before the edge goes in.
        // keyed by PointId, so two records with equal coordinates are tracked separately
        let a_existed = self.adjacency.contains_node(a);
        let b_existed = self.adjacency.contains_node(b);

        self.adjacency.add_edge(a, b, pair.distance());
        let joined = self.forest.union(a.index(), b.index());
        if joined {
            self.components -= 1;
        }
        self.cursor += 1;

        match (a_existed, b_existed) {
            (true, false) => (MergeKind::Attached, b, a),
            (false, true) => (MergeKind::Attached, a, b),
            // no unique newcomer; name the first endpoint
            (false, false) => (MergeKind::Formed, a, b),
            (true, true) => (if joined { MergeKind::Bridged } else { MergeKind::Redundant }, a, b),
        }
    }
}
