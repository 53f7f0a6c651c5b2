pub mod constructors;
pub mod dedup;
pub mod relabel;
pub mod topology;

use rand::Rng;

pub use dedup::{build_non_isomorphic_group, MIN_GROUP_SIZE, NON_ISOMORPHIC_ATTEMPTS};
pub use relabel::{build_isomorphic_group, shuffle_labels};
pub use topology::Topology;

use crate::error::GenerationError;
use crate::graph::model::BenchGraph;

/// Whether a group's members are meant to be mutually isomorphic or
/// pairwise structurally distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupMode {
    Isomorphic,
    NonIsomorphic,
}

impl GroupMode {
    /// Subdirectory the assembler writes this mode's files into.
    pub fn dir_name(&self) -> &'static str {
        match self {
            GroupMode::Isomorphic => "isomorphic",
            GroupMode::NonIsomorphic => "non_isomorphic",
        }
    }
}

/// Everything one group build needs. Immutable once constructed; the sweep
/// derives one request per node count.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub topology: Topology,
    pub nodes: usize,
    pub density: f64,
    pub degree: usize,
    pub group_size: usize,
    pub mode: GroupMode,
}

/// An ordered set of graphs produced for one request. In isomorphic mode
/// the untouched original comes first.
#[derive(Debug)]
pub struct GraphGroup {
    pub request: GenerationRequest,
    pub members: Vec<BenchGraph>,
}

impl GraphGroup {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Build a group according to the request's mode.
pub fn build_group<R: Rng>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<GraphGroup, GenerationError> {
    match request.mode {
        GroupMode::Isomorphic => relabel::build_isomorphic_group(request, rng),
        GroupMode::NonIsomorphic => dedup::build_non_isomorphic_group(request, rng),
    }
}
