use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::GenerationError;
use crate::generate::constructors;
use crate::graph::model::BenchGraph;

/// The closed set of supported graph families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    Path,
    Cycle,
    Complete,
    CompleteBipartite,
    Tree,
    Bipartite,
    Regular,
    RegularBipartite,
    Random,
    RandomConnected,
    Cactus,
}

impl Topology {
    pub const ALL: [Topology; 11] = [
        Topology::Path,
        Topology::Cycle,
        Topology::Complete,
        Topology::CompleteBipartite,
        Topology::Tree,
        Topology::Bipartite,
        Topology::Regular,
        Topology::RegularBipartite,
        Topology::Random,
        Topology::RandomConnected,
        Topology::Cactus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::Path => "path",
            Topology::Cycle => "cycle",
            Topology::Complete => "complete",
            Topology::CompleteBipartite => "complete_bipartite",
            Topology::Tree => "tree",
            Topology::Bipartite => "bipartite",
            Topology::Regular => "regular",
            Topology::RegularBipartite => "regular_bipartite",
            Topology::Random => "random",
            Topology::RandomConnected => "random_connected",
            Topology::Cactus => "cactus",
        }
    }

    /// Dispatch to the family's constructor. `density` and `degree` are
    /// ignored by families that do not use them.
    pub fn build<R: Rng>(
        &self,
        n: usize,
        density: f64,
        degree: usize,
        rng: &mut R,
    ) -> Result<BenchGraph, GenerationError> {
        match self {
            Topology::Path => constructors::path(n),
            Topology::Cycle => constructors::cycle(n),
            Topology::Complete => constructors::complete(n),
            Topology::CompleteBipartite => constructors::complete_bipartite(n, rng),
            Topology::Tree => constructors::tree(n, rng),
            Topology::Bipartite => constructors::bipartite(n, density, rng),
            Topology::Regular => constructors::regular(n, degree, rng),
            Topology::RegularBipartite => constructors::regular_bipartite(n, degree, rng),
            Topology::Random => constructors::random(n, density, rng),
            Topology::RandomConnected => constructors::random_connected(n, density, rng),
            Topology::Cactus => constructors::cactus(n, rng),
        }
    }
}

impl FromStr for Topology {
    type Err = GenerationError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Topology::ALL
            .iter()
            .copied()
            .find(|topology| topology.as_str() == tag)
            .ok_or_else(|| GenerationError::UnsupportedTopology(tag.to_string()))
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for topology in Topology::ALL {
            assert_eq!(Topology::from_str(topology.as_str()).unwrap(), topology);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = Topology::from_str("moebius_kantor").unwrap_err();
        assert!(matches!(err, GenerationError::UnsupportedTopology(tag) if tag == "moebius_kantor"));
    }
}
