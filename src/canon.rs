//! Canonical-form oracle, delegated entirely to nauty via `nauty-pet`.

use nauty_pet::graph::CanonGraph;
use petgraph::Undirected;

use crate::graph::model::BenchGraph;

/// Opaque, hashable witness of a graph's isomorphism class.
///
/// Two graphs have equal keys exactly when nauty assigns them the same
/// canonical labelling; the deduplication engine relies on nothing beyond
/// `Eq + Hash`.
pub type CanonicalKey = CanonGraph<(), (), Undirected>;

pub fn canonical_key(graph: &BenchGraph) -> CanonicalKey {
    CanonGraph::from(graph.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::from_edge_list;

    #[test]
    fn relabeled_triangles_share_a_key() {
        let a = from_edge_list(4, [(0, 1), (1, 2), (2, 0)]);
        let b = from_edge_list(4, [(3, 1), (1, 0), (0, 3)]);
        assert_eq!(canonical_key(&a), canonical_key(&b));
    }

    #[test]
    fn path_and_star_differ() {
        let path = from_edge_list(4, [(0, 1), (1, 2), (2, 3)]);
        let star = from_edge_list(4, [(0, 1), (0, 2), (0, 3)]);
        assert_ne!(canonical_key(&path), canonical_key(&star));
    }
}
