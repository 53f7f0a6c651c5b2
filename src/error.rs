use thiserror::Error;

/// Failure modes of the generation engine.
///
/// All variants are raised by leaf components and propagate unchanged up to
/// the dataset sweep, where a failed node count is reported and skipped.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Parameters that can never produce a valid graph of the requested
    /// family, detected before any randomness is drawn.
    #[error("invalid parameters for {family} graph: {reason}")]
    InvalidParameters {
        family: &'static str,
        reason: String,
    },

    /// A bounded randomized search ran out of attempts without meeting the
    /// family's structural contract.
    #[error("failed to build a {family} graph on {nodes} vertices within {attempts} attempts")]
    ConstructionExhausted {
        family: &'static str,
        nodes: usize,
        attempts: usize,
    },

    /// Deduplication could not collect at least two structurally distinct
    /// graphs within its attempt ceiling.
    #[error(
        "collected only {collected} structurally distinct {family} graph(s) on {nodes} vertices \
         within {attempts} attempts"
    )]
    InsufficientDiversity {
        family: &'static str,
        nodes: usize,
        attempts: usize,
        collected: usize,
    },

    /// A family tag that no constructor is registered for.
    #[error("unknown topology: {0}")]
    UnsupportedTopology(String),
}

impl GenerationError {
    pub fn invalid(family: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            family,
            reason: reason.into(),
        }
    }
}
