//! The relabeling transform behind isomorphic groups.

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::GenerationError;
use crate::generate::{GenerationRequest, GraphGroup};
use crate::graph::model::{graph_with_nodes, BenchGraph};

/// Apply a uniformly random vertex permutation, returning a new graph.
///
/// The source graph is only borrowed, so it can seed any number of further
/// independent relabelings.
pub fn shuffle_labels<R: Rng>(graph: &BenchGraph, rng: &mut R) -> BenchGraph {
    let n = graph.node_count();
    let mut permutation: Vec<usize> = (0..n).collect();
    permutation.shuffle(rng);

    let mut relabeled = graph_with_nodes(n);
    for edge in graph.edge_references() {
        relabeled.add_edge(
            NodeIndex::new(permutation[edge.source().index()]),
            NodeIndex::new(permutation[edge.target().index()]),
            (),
        );
    }
    relabeled
}

/// One constructed original followed by `group_size - 1` independent
/// relabelings of it. Fails only when the constructor does.
pub fn build_isomorphic_group<R: Rng>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<GraphGroup, GenerationError> {
    let original = request
        .topology
        .build(request.nodes, request.density, request.degree, rng)?;

    let copies: Vec<BenchGraph> = (1..request.group_size)
        .map(|_| shuffle_labels(&original, rng))
        .collect();

    let mut members = Vec::with_capacity(request.group_size);
    members.push(original);
    members.extend(copies);

    Ok(GraphGroup {
        request: request.clone(),
        members,
    })
}
