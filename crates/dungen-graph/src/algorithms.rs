//! Spanning-tree and shortest-path algorithms.
//!
//! All three operate on [`KeyedGraph`]'s public surface only; none of
//! them reach into the index engine.

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use rand::Rng;

use crate::error::GraphError;
use crate::keyed::KeyedGraph;
use crate::queue::MinPriorityQueue;

/// Queue key standing in for +infinity when seeding relaxation.
const INFINITY: u32 = u32::MAX;

/// Minimum spanning tree of a weighted graph, grown from `root`
/// (Prim's algorithm).
///
/// Every vertex of the input appears in the result; for a connected
/// input the result has exactly `vertex_count() - 1` edges, each
/// weighted like the input edge it came from. Ties are broken by heap
/// order, so the answer is *a* minimum tree, not a canonical one.
/// Vertices unreachable from `root` are left isolated.
pub fn minimum_spanning_tree<V>(
    graph: &KeyedGraph<V, u32>,
    root: &V,
) -> Result<KeyedGraph<V, u32>, GraphError>
where
    V: Eq + Hash + Clone,
{
    if !graph.contains_vertex(root) {
        return Err(GraphError::KeyNotFound);
    }

    let mut tree: KeyedGraph<V, u32> = KeyedGraph::new();
    let mut queue = MinPriorityQueue::new();
    let mut best_key: HashMap<V, u32> = HashMap::new();
    let mut parent: HashMap<V, V> = HashMap::new();
    let mut pending: HashSet<V> = HashSet::new();

    queue.insert(root.clone(), 0);
    best_key.insert(root.clone(), 0);
    for v in graph.vertices() {
        tree.add_vertex(v.clone())?;
        pending.insert(v.clone());
        if v != root {
            queue.insert(v.clone(), INFINITY);
            best_key.insert(v.clone(), INFINITY);
        }
    }

    while !queue.is_empty() {
        let (v, key) = queue.extract_min()?;
        pending.remove(&v);

        // The root has no parent, and unreachable vertices never get
        // one; everything else contributes the edge that won its key.
        if let Some(p) = parent.get(&v) {
            tree.add_edge(p, &v, key)?;
        }

        for n in graph.neighbors(&v)? {
            if !pending.contains(n) {
                continue;
            }
            let weight = *graph.edge_data(&v, n)?;
            if weight < best_key[n] {
                best_key.insert(n.clone(), weight);
                parent.insert(n.clone(), v.clone());
                queue.try_update(n, weight)?;
            }
        }
    }

    Ok(tree)
}

/// Breadth-first shortest path between two vertices of an unweighted
/// graph.
///
/// Returns the vertex sequence from `from` to `to` inclusive, or an
/// empty vector when `to` is unreachable — an absent path is a valid
/// result, not an error. Unknown endpoints are errors.
pub fn shortest_path<V, E>(
    graph: &KeyedGraph<V, E>,
    from: &V,
    to: &V,
) -> Result<Vec<V>, GraphError>
where
    V: Eq + Hash + Clone,
{
    if !graph.contains_vertex(from) || !graph.contains_vertex(to) {
        return Err(GraphError::KeyNotFound);
    }
    if from == to {
        return Ok(vec![from.clone()]);
    }

    let mut frontier: VecDeque<V> = VecDeque::new();
    let mut seen: HashSet<V> = HashSet::new();
    let mut predecessor: HashMap<V, V> = HashMap::new();

    frontier.push_back(from.clone());
    seen.insert(from.clone());

    while let Some(current) = frontier.pop_front() {
        for neighbor in graph.neighbors(&current)? {
            if seen.contains(neighbor) {
                continue;
            }
            seen.insert(neighbor.clone());
            predecessor.insert(neighbor.clone(), current.clone());

            if neighbor == to {
                let mut path = vec![to.clone()];
                let mut cursor = to;
                while let Some(prev) = predecessor.get(cursor) {
                    path.push(prev.clone());
                    cursor = prev;
                }
                path.reverse();
                return Ok(path);
            }
            frontier.push_back(neighbor.clone());
        }
    }

    Ok(Vec::new())
}

/// Randomized spanning tree of the component containing `start`,
/// grown by backtracking depth-first walk.
///
/// An explicit stack holds the walk; at every step one unvisited
/// neighbor of the stack top is chosen uniformly at random and pushed,
/// and exhausted vertices are popped. A component of `n` reachable
/// vertices yields exactly `n - 1` traversal edges. This is the
/// maze-carving primitive; it makes no minimality promises.
pub fn random_spanning_tree<V, E, R>(
    graph: &KeyedGraph<V, E>,
    start: &V,
    rng: &mut R,
) -> Result<Vec<(V, V)>, GraphError>
where
    V: Eq + Hash + Clone,
    R: Rng,
{
    if !graph.contains_vertex(start) {
        return Err(GraphError::KeyNotFound);
    }

    let mut visited: HashSet<V> = HashSet::new();
    let mut stack: Vec<V> = vec![start.clone()];
    let mut edges: Vec<(V, V)> = Vec::new();

    while let Some(current) = stack.last().cloned() {
        visited.insert(current.clone());

        let candidates: Vec<&V> = graph
            .neighbors(&current)?
            .filter(|n| !visited.contains(*n))
            .collect();

        if candidates.is_empty() {
            stack.pop();
        } else {
            let next = candidates[rng.gen_range(0..candidates.len())].clone();
            edges.push((current, next.clone()));
            stack.push(next);
        }
    }

    Ok(edges)
}
