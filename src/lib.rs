//! Labeled graph dataset generation for benchmarking graph-isomorphism
//! algorithms.
//!
//! For every node count in a sweep the tool emits an *isomorphic* group
//! (one structure plus independently relabeled copies) and a
//! *non-isomorphic* group (pairwise structurally distinct graphs of the
//! same family, deduplicated through nauty canonical forms), written one
//! graph6 line per graph.

pub mod canon;
pub mod dataset;
pub mod error;
pub mod generate;
pub mod graph;

pub use canon::{canonical_key, CanonicalKey};
pub use dataset::{DatasetAssembler, SweepRequest, SweepSummary};
pub use error::GenerationError;
pub use generate::{
    build_group, build_isomorphic_group, build_non_isomorphic_group, shuffle_labels,
    GenerationRequest, GraphGroup, GroupMode, Topology,
};
pub use graph::model::BenchGraph;
pub use graph::serialization::{graph6_string, parse_graph6, Graph6Writer};
