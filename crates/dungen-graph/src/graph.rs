//! Dense index-addressed graph engine.
//!
//! Vertices are plain `usize` indices in `[0, vertex_count())`; every
//! index below the count refers to a live vertex. Removal is O(degree)
//! via swap-with-last: the final vertex moves into the freed slot and
//! every half-edge that pointed at the old last index is rewritten.
//! Undirected edges are stored as a symmetric pair of half-edges, one
//! in each endpoint's adjacency list.

use crate::error::GraphError;

/// One directed half of an undirected edge.
#[derive(Debug, Clone, PartialEq)]
struct HalfEdge<E> {
    to: usize,
    data: E,
}

/// Index-addressed undirected graph with an edge payload slot.
///
/// Use `E = ()` for unweighted graphs. Parallel edges are not
/// deduplicated; callers that need a simple graph check
/// [`contains_edge`](Self::contains_edge) before inserting.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<E> {
    adjacency: Vec<Vec<HalfEdge<E>>>,
    half_edges: usize,
}

impl<E> Default for Graph<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Graph<E> {
    pub fn new() -> Self {
        Self {
            adjacency: Vec::new(),
            half_edges: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges (half the stored half-edges).
    pub fn edge_count(&self) -> usize {
        self.half_edges / 2
    }

    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.half_edges = 0;
    }

    /// Append a vertex and return its index.
    pub fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    pub fn contains_vertex(&self, v: usize) -> bool {
        v < self.adjacency.len()
    }

    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        self.contains_vertex(u)
            && self.contains_vertex(v)
            && self.adjacency[u].iter().any(|h| h.to == v)
    }

    /// Remove both half-edges of `u -- v`.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        if !self.contains_edge(u, v) || !self.contains_edge(v, u) {
            return Err(GraphError::EdgeNotFound(u, v));
        }
        self.remove_half_edge(u, v);
        self.remove_half_edge(v, u);
        Ok(())
    }

    /// Remove a vertex and every edge incident to it.
    ///
    /// If `v` is not the last index, the last vertex is relocated into
    /// its slot and all half-edges referring to the old last index are
    /// patched to the new one.
    pub fn remove_vertex(&mut self, v: usize) -> Result<(), GraphError> {
        if !self.contains_vertex(v) {
            return Err(GraphError::VertexNotFound(v));
        }

        while let Some(to) = self.adjacency[v].first().map(|h| h.to) {
            self.remove_edge(v, to)?;
        }

        let last = self.adjacency.len() - 1;
        if v != last {
            let moved_neighbors: Vec<usize> =
                self.adjacency[last].iter().map(|h| h.to).collect();
            for from in moved_neighbors {
                for half in &mut self.adjacency[from] {
                    if half.to == last {
                        half.to = v;
                    }
                }
            }
            self.adjacency.swap(v, last);
        }
        self.adjacency.pop();
        Ok(())
    }

    /// Indices of `v`'s currently valid neighbors.
    ///
    /// Half-edges to out-of-range targets are skipped rather than
    /// surfaced; the mutation paths keep such edges from existing, so
    /// the filter is a read-side guarantee only.
    pub fn neighbors(
        &self,
        v: usize,
    ) -> Result<impl Iterator<Item = usize> + '_, GraphError> {
        if !self.contains_vertex(v) {
            return Err(GraphError::VertexNotFound(v));
        }
        let count = self.adjacency.len();
        Ok(self.adjacency[v]
            .iter()
            .map(|h| h.to)
            .filter(move |&t| t < count))
    }

    pub fn vertices(&self) -> std::ops::Range<usize> {
        0..self.adjacency.len()
    }

    /// Payload of edge `u -- v`.
    pub fn edge_data(&self, u: usize, v: usize) -> Result<&E, GraphError> {
        if !self.contains_vertex(u) {
            return Err(GraphError::VertexNotFound(u));
        }
        if !self.contains_vertex(v) {
            return Err(GraphError::VertexNotFound(v));
        }
        self.adjacency[u]
            .iter()
            .find(|h| h.to == v)
            .map(|h| &h.data)
            .ok_or(GraphError::EdgeNotFound(u, v))
    }

    /// Every undirected edge exactly once.
    ///
    /// For vertex `v` in index order, a half-edge to `n` is emitted
    /// only when `n <= v`; the symmetric half covers the other
    /// direction, so no pair is reported twice.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, &E)> {
        self.adjacency.iter().enumerate().flat_map(|(v, halves)| {
            halves
                .iter()
                .filter(move |h| h.to <= v)
                .map(move |h| (v, h.to, &h.data))
        })
    }

    fn remove_half_edge(&mut self, from: usize, to: usize) {
        if let Some(idx) = self.adjacency[from].iter().position(|h| h.to == to) {
            self.adjacency[from].swap_remove(idx);
            self.half_edges -= 1;
        }
    }
}

impl<E: Clone> Graph<E> {
    /// Insert an undirected edge carrying `data`.
    pub fn add_edge(&mut self, u: usize, v: usize, data: E) -> Result<(), GraphError> {
        if !self.contains_vertex(u) {
            return Err(GraphError::VertexNotFound(u));
        }
        if !self.contains_vertex(v) {
            return Err(GraphError::VertexNotFound(v));
        }
        self.adjacency[u].push(HalfEdge {
            to: v,
            data: data.clone(),
        });
        self.adjacency[v].push(HalfEdge { to: u, data });
        self.half_edges += 2;
        Ok(())
    }

    /// Replace the payload of edge `u -- v` by removing and
    /// re-inserting both half-edges.
    pub fn set_edge_data(&mut self, u: usize, v: usize, data: E) -> Result<(), GraphError> {
        self.remove_edge(u, v)?;
        self.add_edge(u, v, data)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_add_vertices_are_dense() {
        let mut g: Graph<()> = Graph::new();
        assert_eq!(g.add_vertex(), 0);
        assert_eq!(g.add_vertex(), 1);
        assert_eq!(g.add_vertex(), 2);
        assert_eq!(g.vertex_count(), 3);
        assert!(g.contains_vertex(2));
        assert!(!g.contains_vertex(3));
    }

    #[test]
    fn test_remove_vertex_drops_incident_edges() {
        let mut g: Graph<()> = Graph::new();
        for _ in 0..3 {
            g.add_vertex();
        }
        g.add_edge(0, 1, ()).unwrap();
        g.add_edge(1, 2, ()).unwrap();

        g.remove_vertex(1).unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 0);
        assert!(g.neighbors(0).unwrap().next().is_none());
    }

    #[test]
    fn test_swap_delete_patches_half_edges() {
        let mut g: Graph<()> = Graph::new();
        for _ in 0..4 {
            g.add_vertex();
        }
        g.add_edge(0, 3, ()).unwrap();
        g.add_edge(2, 3, ()).unwrap();

        // Removing 1 relocates vertex 3 into slot 1; the edges must
        // follow it.
        g.remove_vertex(1).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert!(g.contains_edge(0, 1));
        assert!(g.contains_edge(2, 1));
        assert!(!g.contains_vertex(3));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_edges_enumerates_each_pair_once() {
        let mut g: Graph<u8> = Graph::new();
        for _ in 0..4 {
            g.add_vertex();
        }
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(1, 2, 2).unwrap();
        g.add_edge(2, 3, 3).unwrap();
        g.add_edge(0, 3, 4).unwrap();

        let mut pairs: Vec<(usize, usize)> = g
            .edges()
            .map(|(u, v, _)| (u.min(v), u.max(v)))
            .collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![(0, 1), (0, 3), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_edge_data_replacement() {
        let mut g: Graph<u32> = Graph::new();
        g.add_vertex();
        g.add_vertex();
        g.add_edge(0, 1, 9).unwrap();
        assert_eq!(g.edge_data(0, 1).unwrap(), &9);
        assert_eq!(g.edge_data(1, 0).unwrap(), &9);

        g.set_edge_data(0, 1, 12).unwrap();
        assert_eq!(g.edge_data(1, 0).unwrap(), &12);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_missing_vertex_and_edge_errors() {
        let mut g: Graph<()> = Graph::new();
        assert_eq!(g.remove_vertex(0), Err(GraphError::VertexNotFound(0)));
        g.add_vertex();
        g.add_vertex();
        assert_eq!(g.remove_edge(0, 1), Err(GraphError::EdgeNotFound(0, 1)));
        assert_eq!(g.add_edge(0, 5, ()), Err(GraphError::VertexNotFound(5)));
        assert_eq!(g.edge_data(0, 1), Err(GraphError::EdgeNotFound(0, 1)));
    }

    #[test]
    fn test_edges_on_random_graph() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(400);
        let mut g: Graph<u32> = Graph::new();
        for _ in 0..100 {
            g.add_vertex();
        }

        let mut inserted = 0;
        while inserted < 300 {
            let u = rng.gen_range(0..100);
            let v = rng.gen_range(0..100);
            if u != v && !g.contains_edge(u, v) {
                g.add_edge(u, v, 1).unwrap();
                inserted += 1;
            }
        }

        let edges: Vec<(usize, usize)> = g
            .edges()
            .map(|(u, v, _)| (u.min(v), u.max(v)))
            .collect();
        let unique: HashSet<(usize, usize)> = edges.iter().copied().collect();
        assert_eq!(edges.len(), 300);
        assert_eq!(unique.len(), 300);
        assert_eq!(g.edge_count(), 300);

        // Removals stay consistent with the enumeration.
        let sample: Vec<(usize, usize)> = edges.iter().copied().take(50).collect();
        for (u, v) in sample {
            g.remove_edge(u, v).unwrap();
        }
        assert_eq!(g.edge_count(), 250);
        assert_eq!(g.edges().count(), 250);
    }

    #[test]
    fn test_clear_resets_counts() {
        let mut g: Graph<()> = Graph::new();
        g.add_vertex();
        g.add_vertex();
        g.add_edge(0, 1, ()).unwrap();
        g.clear();
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    proptest! {
        /// After any mutation sequence, surfaced neighbors are valid
        /// indices and the edge enumeration is duplicate-free and
        /// consistent with the edge count.
        #[test]
        fn prop_mutations_preserve_invariants(
            ops in proptest::collection::vec((0u8..4, 0usize..64, 0usize..64), 1..150)
        ) {
            let mut g: Graph<u32> = Graph::new();

            for (op, a, b) in ops {
                match op {
                    0 => {
                        g.add_vertex();
                    }
                    1 => {
                        if g.vertex_count() > 0 {
                            let v = a % g.vertex_count();
                            g.remove_vertex(v).unwrap();
                        }
                    }
                    2 => {
                        if g.vertex_count() > 0 {
                            let u = a % g.vertex_count();
                            let v = b % g.vertex_count();
                            if u != v && !g.contains_edge(u, v) {
                                g.add_edge(u, v, 1).unwrap();
                            }
                        }
                    }
                    _ => {
                        if g.vertex_count() > 0 {
                            let u = a % g.vertex_count();
                            let v = b % g.vertex_count();
                            if g.contains_edge(u, v) {
                                g.remove_edge(u, v).unwrap();
                            }
                        }
                    }
                }

                let count = g.vertex_count();
                for v in g.vertices() {
                    for n in g.neighbors(v).unwrap() {
                        prop_assert!(n < count);
                        prop_assert!(g.contains_edge(n, v));
                    }
                }

                let edges: Vec<(usize, usize)> = g
                    .edges()
                    .map(|(u, v, _)| (u.min(v), u.max(v)))
                    .collect();
                let unique: HashSet<(usize, usize)> = edges.iter().copied().collect();
                prop_assert_eq!(edges.len(), unique.len());
                prop_assert_eq!(edges.len(), g.edge_count());
            }
        }
    }
}
