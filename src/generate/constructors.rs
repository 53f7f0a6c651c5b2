//! Family-specific constructors. Each one validates its parameters before
//! drawing any randomness, then either builds the graph directly or runs a
//! bounded randomized search.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;
use rand::seq::{index, SliceRandom};
use rand::Rng;

use crate::error::GenerationError;
use crate::graph::builders;
use crate::graph::model::{edge_list, from_edge_list, graph_with_nodes, vertex_pairs, BenchGraph};

/// Rounds of shuffle-and-greedy-fill before regular-bipartite construction
/// gives up.
pub const REGULAR_BIPARTITE_ATTEMPTS: usize = 100;

/// Restarts of the stub-pairing sampler before regular construction gives up.
pub const REGULAR_SAMPLER_ATTEMPTS: usize = 200;

fn ensure(
    condition: bool,
    family: &'static str,
    reason: &str,
) -> Result<(), GenerationError> {
    if condition {
        Ok(())
    } else {
        Err(GenerationError::invalid(family, reason))
    }
}

fn ensure_density(family: &'static str, density: f64) -> Result<(), GenerationError> {
    ensure(
        (0.0..=1.0).contains(&density),
        family,
        "density must be between 0 and 1",
    )
}

pub fn path(n: usize) -> Result<BenchGraph, GenerationError> {
    ensure(n >= 1, "path", "at least 1 vertex is required")?;
    Ok(builders::path_graph(n))
}

pub fn cycle(n: usize) -> Result<BenchGraph, GenerationError> {
    ensure(n >= 3, "cycle", "at least 3 vertices are required")?;
    Ok(builders::cycle_graph(n))
}

pub fn complete(n: usize) -> Result<BenchGraph, GenerationError> {
    ensure(n >= 1, "complete", "at least 1 vertex is required")?;
    Ok(builders::complete_graph(n))
}

/// Complete bipartite graph over a uniformly random split `p + (n - p)`.
pub fn complete_bipartite<R: Rng>(n: usize, rng: &mut R) -> Result<BenchGraph, GenerationError> {
    ensure(n >= 2, "complete_bipartite", "at least 2 vertices are required")?;
    let p = rng.gen_range(1..n);
    Ok(builders::complete_bipartite_graph(p, n - p))
}

pub fn tree<R: Rng>(n: usize, rng: &mut R) -> Result<BenchGraph, GenerationError> {
    ensure(n >= 1, "tree", "at least 1 vertex is required")?;
    Ok(builders::random_spanning_tree(n, rng))
}

/// Random bipartition with independent per-pair edge inclusion; the edge
/// count is stochastic, so there is no retry loop.
pub fn bipartite<R: Rng>(
    n: usize,
    density: f64,
    rng: &mut R,
) -> Result<BenchGraph, GenerationError> {
    ensure(n >= 2, "bipartite", "at least 2 vertices are required")?;
    ensure_density("bipartite", density)?;

    let mut vertices: Vec<usize> = (0..n).collect();
    vertices.shuffle(rng);
    let split = rng.gen_range(1..n);
    let (left, right) = vertices.split_at(split);

    let mut graph = graph_with_nodes(n);
    for &u in left {
        for &v in right {
            if rng.gen_bool(density) {
                graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
            }
        }
    }
    Ok(graph)
}

pub fn regular<R: Rng>(n: usize, d: usize, rng: &mut R) -> Result<BenchGraph, GenerationError> {
    ensure(d >= 1, "regular", "degree must be at least 1")?;
    ensure(d < n, "regular", "degree must be below the vertex count")?;
    ensure(
        (d * n) % 2 == 0,
        "regular",
        "degree times vertex count must be even",
    )?;
    builders::random_regular_graph(n, d, REGULAR_SAMPLER_ATTEMPTS, rng)
}

/// Randomized greedy degree-constrained sampler over the cross pairs of two
/// fixed equal halves. A single greedy pass over a random pair order does
/// not guarantee exact regularity, hence the accept-or-discard retry loop.
pub fn regular_bipartite<R: Rng>(
    n: usize,
    d: usize,
    rng: &mut R,
) -> Result<BenchGraph, GenerationError> {
    ensure(n >= 2, "regular_bipartite", "at least 2 vertices are required")?;
    ensure(
        n % 2 == 0,
        "regular_bipartite",
        "the vertex count must be even to split into equal halves",
    )?;
    ensure(d >= 1, "regular_bipartite", "degree must be at least 1")?;
    ensure(
        d <= n / 2,
        "regular_bipartite",
        "degree must not exceed half the vertex count",
    )?;

    let half = n / 2;
    let mut pairs = Vec::with_capacity(half * half);
    for u in 0..half {
        for v in half..n {
            pairs.push((u, v));
        }
    }

    for _ in 0..REGULAR_BIPARTITE_ATTEMPTS {
        pairs.shuffle(rng);
        let mut degrees = vec![0usize; n];
        let mut edges = Vec::with_capacity(half * d);
        for &(u, v) in &pairs {
            if degrees[u] < d && degrees[v] < d {
                degrees[u] += 1;
                degrees[v] += 1;
                edges.push((u, v));
            }
        }
        if degrees.iter().all(|&deg| deg == d) {
            return Ok(from_edge_list(n, edges));
        }
    }

    Err(GenerationError::ConstructionExhausted {
        family: "regular_bipartite",
        nodes: n,
        attempts: REGULAR_BIPARTITE_ATTEMPTS,
    })
}

/// Erdős–Rényi-style graph with an exact edge count: the target is
/// `round(density * max_edges)` and that many pairs are drawn uniformly
/// without replacement. Connectivity is not guaranteed.
pub fn random<R: Rng>(n: usize, density: f64, rng: &mut R) -> Result<BenchGraph, GenerationError> {
    ensure(n >= 1, "random", "at least 1 vertex is required")?;
    ensure_density("random", density)?;

    let pairs = vertex_pairs(n);
    let target = (density * pairs.len() as f64).round() as usize;
    let chosen = index::sample(rng, pairs.len(), target);
    Ok(from_edge_list(n, chosen.into_iter().map(|k| pairs[k])))
}

/// Connected graph: a random spanning tree guarantees connectivity, then an
/// extra-edge budget of `round(density * (max_edges - (n - 1)))` pairs is
/// drawn uniformly from the non-tree pairs.
pub fn random_connected<R: Rng>(
    n: usize,
    density: f64,
    rng: &mut R,
) -> Result<BenchGraph, GenerationError> {
    ensure(n >= 1, "random_connected", "at least 1 vertex is required")?;
    ensure_density("random_connected", density)?;

    let mut graph = builders::random_spanning_tree(n, rng);
    let tree_edges: HashSet<(usize, usize)> = edge_list(&graph).into_iter().collect();
    let spare: Vec<(usize, usize)> = vertex_pairs(n)
        .into_iter()
        .filter(|pair| !tree_edges.contains(pair))
        .collect();

    let budget = (density * spare.len() as f64).round() as usize;
    for k in index::sample(rng, spare.len(), budget) {
        let (u, v) = spare[k];
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }
    Ok(graph)
}

/// Grow a cactus one attachment at a time: either hang a pendant vertex off
/// a random placed vertex or close a new cycle through a fresh chain. Every
/// cycle consists of fresh vertices plus one attachment point, so no two
/// cycles ever share an edge. The placed counter strictly increases, which
/// bounds the loop at `n` iterations.
pub fn cactus<R: Rng>(n: usize, rng: &mut R) -> Result<BenchGraph, GenerationError> {
    ensure(n >= 1, "cactus", "at least 1 vertex is required")?;

    let mut graph = graph_with_nodes(n);
    let mut placed = 1usize;
    while placed < n {
        let attach = rng.gen_range(0..placed);
        let remaining = n - placed;
        if remaining >= 2 && rng.gen_bool(0.5) {
            let len = rng.gen_range(2..=remaining);
            graph.add_edge(NodeIndex::new(attach), NodeIndex::new(placed), ());
            for v in placed..placed + len - 1 {
                graph.add_edge(NodeIndex::new(v), NodeIndex::new(v + 1), ());
            }
            graph.add_edge(NodeIndex::new(placed + len - 1), NodeIndex::new(attach), ());
            placed += len;
        } else {
            graph.add_edge(NodeIndex::new(attach), NodeIndex::new(placed), ());
            placed += 1;
        }
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    use super::*;
    use crate::graph::model::{degree, degree_sequence, is_connected, max_edges};

    fn rng() -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(1729)
    }

    #[test]
    fn cycle_needs_three_vertices() {
        assert!(matches!(
            cycle(2),
            Err(GenerationError::InvalidParameters { family: "cycle", .. })
        ));
    }

    #[test]
    fn complete_bipartite_covers_all_cross_pairs() {
        let mut rng = rng();
        for _ in 0..20 {
            let graph = complete_bipartite(7, &mut rng).unwrap();
            let p = degree(&graph, 0);
            // part sizes p and 7 - p, every cross pair present
            assert_eq!(graph.edge_count(), p * (7 - p));
        }
    }

    #[test]
    fn bipartite_rejects_bad_density() {
        let mut rng = rng();
        assert!(matches!(
            bipartite(6, 1.5, &mut rng),
            Err(GenerationError::InvalidParameters { family: "bipartite", .. })
        ));
    }

    #[test]
    fn odd_handshake_is_rejected_before_sampling() {
        let mut rng = rng();
        assert!(matches!(
            regular(5, 3, &mut rng),
            Err(GenerationError::InvalidParameters { family: "regular", .. })
        ));
    }

    #[test]
    fn regular_meets_exact_degree() {
        let mut rng = rng();
        let graph = regular(10, 3, &mut rng).unwrap();
        assert!(degree_sequence(&graph).iter().all(|&d| d == 3));
    }

    #[test]
    fn regular_bipartite_four_by_two_is_forced() {
        // only K(2,2) fits, so the first greedy pass must already succeed
        let mut rng = rng();
        let graph = regular_bipartite(4, 2, &mut rng).unwrap();
        assert_eq!(graph.edge_count(), 4);
        assert!(degree_sequence(&graph).iter().all(|&d| d == 2));
        assert!(!graph.contains_edge(NodeIndex::new(0), NodeIndex::new(1)));
        assert!(!graph.contains_edge(NodeIndex::new(2), NodeIndex::new(3)));
    }

    #[test]
    fn regular_bipartite_validations() {
        let mut rng = rng();
        assert!(matches!(
            regular_bipartite(5, 2, &mut rng),
            Err(GenerationError::InvalidParameters { .. })
        ));
        assert!(matches!(
            regular_bipartite(6, 4, &mut rng),
            Err(GenerationError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn regular_bipartite_halves_have_exact_degrees() {
        let mut rng = rng();
        for _ in 0..10 {
            let graph = regular_bipartite(12, 3, &mut rng).unwrap();
            for v in 0..12 {
                assert_eq!(degree(&graph, v), 3);
            }
            // no edge inside either half
            for u in 0..6 {
                for v in (u + 1)..6 {
                    assert!(!graph.contains_edge(NodeIndex::new(u), NodeIndex::new(v)));
                    assert!(!graph.contains_edge(NodeIndex::new(u + 6), NodeIndex::new(v + 6)));
                }
            }
        }
    }

    #[test]
    fn random_has_exact_edge_count() {
        let mut rng = rng();
        for density in [0.0, 0.25, 0.5, 1.0] {
            let graph = random(12, density, &mut rng).unwrap();
            let expected = (density * max_edges(12) as f64).round() as usize;
            assert_eq!(graph.edge_count(), expected);
        }
    }

    #[test]
    fn random_connected_is_connected_with_budgeted_edges() {
        let mut rng = rng();
        for density in [0.0, 0.3, 1.0] {
            let graph = random_connected(15, density, &mut rng).unwrap();
            assert!(is_connected(&graph));
            let spare = max_edges(15) - 14;
            let expected = 14 + (density * spare as f64).round() as usize;
            assert_eq!(graph.edge_count(), expected);
        }
    }

    #[test]
    fn random_connected_single_vertex() {
        let mut rng = rng();
        let graph = random_connected(1, 0.5, &mut rng).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn cactus_single_vertex() {
        let mut rng = rng();
        let graph = cactus(1, &mut rng).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn cactus_places_every_vertex() {
        let mut rng = rng();
        for n in [2usize, 3, 7, 25] {
            let graph = cactus(n, &mut rng).unwrap();
            assert_eq!(graph.node_count(), n);
            assert!(is_connected(&graph));
            // tree lower bound, edge-disjoint-cycles upper bound
            assert!(graph.edge_count() >= n - 1);
            assert!(graph.edge_count() <= 2 * (n - 1));
        }
    }
}
