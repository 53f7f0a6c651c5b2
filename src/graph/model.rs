use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

/// All generated graphs are simple undirected graphs with contiguous
/// vertex identifiers `0..n` and no payload on vertices or edges.
pub type BenchGraph = UnGraph<(), ()>;

/// A graph with `n` vertices and no edges.
pub fn graph_with_nodes(n: usize) -> BenchGraph {
    let mut graph = BenchGraph::with_capacity(n, 0);
    for _ in 0..n {
        graph.add_node(());
    }
    graph
}

/// Build a graph over `n` vertices from an unordered edge list.
///
/// Vertices absent from the list still exist as isolated vertices, which
/// `petgraph`'s `from_edges` would not guarantee.
pub fn from_edge_list(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> BenchGraph {
    let mut graph = graph_with_nodes(n);
    for (u, v) in edges {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }
    graph
}

pub fn degree(graph: &BenchGraph, vertex: usize) -> usize {
    graph.neighbors(NodeIndex::new(vertex)).count()
}

/// Sorted multiset of vertex degrees.
pub fn degree_sequence(graph: &BenchGraph) -> Vec<usize> {
    let mut degrees: Vec<usize> = graph
        .node_indices()
        .map(|v| graph.neighbors(v).count())
        .collect();
    degrees.sort_unstable();
    degrees
}

pub fn is_connected(graph: &BenchGraph) -> bool {
    petgraph::algo::connected_components(graph) <= 1
}

/// Undirected edges as `(low, high)` vertex id pairs.
pub fn edge_list(graph: &BenchGraph) -> Vec<(usize, usize)> {
    graph
        .edge_references()
        .map(|edge| {
            let u = edge.source().index();
            let v = edge.target().index();
            (u.min(v), u.max(v))
        })
        .collect()
}

/// All unordered vertex pairs of an `n`-vertex graph, in lexicographic order.
pub fn vertex_pairs(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(max_edges(n));
    for u in 0..n {
        for v in (u + 1)..n {
            pairs.push((u, v));
        }
    }
    pairs
}

/// Maximum number of edges of a simple graph on `n` vertices.
pub fn max_edges(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edge_list_keeps_isolated_vertices() {
        let graph = from_edge_list(4, [(0, 1)]);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(degree_sequence(&graph), vec![0, 0, 1, 1]);
    }

    #[test]
    fn connectivity_of_small_graphs() {
        assert!(is_connected(&from_edge_list(1, [])));
        assert!(is_connected(&from_edge_list(3, [(0, 1), (1, 2)])));
        assert!(!is_connected(&from_edge_list(3, [(0, 1)])));
    }

    #[test]
    fn vertex_pair_count_matches_max_edges() {
        for n in 0..8 {
            assert_eq!(vertex_pairs(n).len(), max_edges(n));
        }
    }
}
