//! Graph primitives the family constructors are built on: deterministic
//! builders for the classical families plus the two randomized samplers
//! (uniform labeled spanning tree, near-uniform regular graph).

use std::collections::HashSet;

use petgraph::graph::NodeIndex;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::GenerationError;
use crate::graph::model::{from_edge_list, graph_with_nodes, BenchGraph};

pub fn path_graph(n: usize) -> BenchGraph {
    from_edge_list(n, (1..n).map(|v| (v - 1, v)))
}

/// Cycle on `n >= 3` vertices; callers validate the bound.
pub fn cycle_graph(n: usize) -> BenchGraph {
    from_edge_list(n, (0..n).map(|v| (v, (v + 1) % n)))
}

pub fn complete_graph(n: usize) -> BenchGraph {
    from_edge_list(n, crate::graph::model::vertex_pairs(n))
}

/// Complete bipartite graph with parts `0..p` and `p..p+q`.
pub fn complete_bipartite_graph(p: usize, q: usize) -> BenchGraph {
    let mut graph = graph_with_nodes(p + q);
    for u in 0..p {
        for v in p..p + q {
            graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
        }
    }
    graph
}

/// Uniformly random labeled tree on `n` vertices.
///
/// Draws a random Prüfer sequence and decodes it with the linear-time
/// pointer scan, so every one of the `n^(n-2)` labeled trees is equally
/// likely.
pub fn random_spanning_tree<R: Rng>(n: usize, rng: &mut R) -> BenchGraph {
    let mut graph = graph_with_nodes(n);
    if n < 2 {
        return graph;
    }

    let prufer: Vec<usize> = (0..n - 2).map(|_| rng.gen_range(0..n)).collect();
    let mut degree = vec![1usize; n];
    for &v in &prufer {
        degree[v] += 1;
    }

    let mut ptr = 0;
    while degree[ptr] != 1 {
        ptr += 1;
    }
    let mut leaf = ptr;

    for &v in &prufer {
        graph.add_edge(NodeIndex::new(leaf), NodeIndex::new(v), ());
        degree[v] -= 1;
        if degree[v] == 1 && v < ptr {
            leaf = v;
        } else {
            ptr += 1;
            while degree[ptr] != 1 {
                ptr += 1;
            }
            leaf = ptr;
        }
    }
    graph.add_edge(NodeIndex::new(leaf), NodeIndex::new(n - 1), ());
    graph
}

/// Random `d`-regular graph via the pairing model with stuck-detection
/// (Steger-Wormald style): pair off degree stubs in random order, keeping a
/// pairing only when it creates neither a self-loop nor a parallel edge,
/// and restart the whole pairing once a round makes no progress.
///
/// Callers validate `d >= 1`, `d < n` and the handshake parity `d * n`
/// even; this sampler only reports exhaustion of its retry budget.
pub fn random_regular_graph<R: Rng>(
    n: usize,
    d: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<BenchGraph, GenerationError> {
    for _ in 0..max_attempts {
        if let Some(edges) = try_stub_pairing(n, d, rng) {
            return Ok(from_edge_list(n, edges));
        }
    }
    Err(GenerationError::ConstructionExhausted {
        family: "regular",
        nodes: n,
        attempts: max_attempts,
    })
}

fn try_stub_pairing<R: Rng>(n: usize, d: usize, rng: &mut R) -> Option<Vec<(usize, usize)>> {
    let mut stubs: Vec<usize> = (0..n).flat_map(|v| std::iter::repeat(v).take(d)).collect();
    let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(n * d / 2);
    let mut edges = Vec::with_capacity(n * d / 2);

    while !stubs.is_empty() {
        stubs.shuffle(rng);
        let mut leftover = Vec::new();
        let mut progressed = false;
        for pair in stubs.chunks(2) {
            let (u, v) = (pair[0], pair[1]);
            if u != v && seen.insert((u.min(v), u.max(v))) {
                edges.push((u, v));
                progressed = true;
            } else {
                leftover.push(u);
                leftover.push(v);
            }
        }
        if !progressed {
            return None;
        }
        stubs = leftover;
    }
    Some(edges)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    use super::*;
    use crate::graph::model::{degree_sequence, is_connected};

    fn rng() -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(7)
    }

    #[test]
    fn path_shape() {
        let graph = path_graph(5);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(degree_sequence(&graph), vec![1, 1, 2, 2, 2]);
        assert!(is_connected(&graph));
    }

    #[test]
    fn cycle_shape() {
        let graph = cycle_graph(6);
        assert_eq!(graph.edge_count(), 6);
        assert!(degree_sequence(&graph).iter().all(|&d| d == 2));
    }

    #[test]
    fn complete_bipartite_shape() {
        let graph = complete_bipartite_graph(2, 3);
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(degree_sequence(&graph), vec![2, 2, 2, 3, 3]);
    }

    #[test]
    fn spanning_tree_is_a_tree() {
        let mut rng = rng();
        for n in [1usize, 2, 3, 10, 40] {
            let tree = random_spanning_tree(n, &mut rng);
            assert_eq!(tree.node_count(), n);
            assert_eq!(tree.edge_count(), n.saturating_sub(1));
            assert!(is_connected(&tree));
        }
    }

    #[test]
    fn regular_sampler_hits_exact_degrees() {
        let mut rng = rng();
        for (n, d) in [(8usize, 3usize), (10, 4), (6, 5)] {
            let graph = random_regular_graph(n, d, 200, &mut rng).expect("sampler succeeds");
            assert_eq!(graph.node_count(), n);
            assert!(degree_sequence(&graph).iter().all(|&deg| deg == d));
        }
    }
}
