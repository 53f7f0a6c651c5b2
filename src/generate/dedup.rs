//! Canonical-form deduplication behind non-isomorphic groups.

use std::collections::HashSet;

use rand::Rng;

use crate::canon::{canonical_key, CanonicalKey};
use crate::error::GenerationError;
use crate::generate::{GenerationRequest, GraphGroup};

/// Constructor invocations before a non-isomorphic group build gives up.
pub const NON_ISOMORPHIC_ATTEMPTS: usize = 30;

/// Smallest non-isomorphic group worth writing; below this the build is
/// rejected as [`GenerationError::InsufficientDiversity`].
pub const MIN_GROUP_SIZE: usize = 2;

/// Collect up to `group_size` structurally distinct graphs within the
/// default attempt ceiling.
///
/// An under-filled group is accepted as long as it holds at least
/// [`MIN_GROUP_SIZE`] members; some families simply do not have
/// `group_size` distinct structures at small vertex counts.
pub fn build_non_isomorphic_group<R: Rng>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<GraphGroup, GenerationError> {
    build_with_attempt_ceiling(request, NON_ISOMORPHIC_ATTEMPTS, rng)
}

/// Same as [`build_non_isomorphic_group`] with an explicit attempt ceiling.
pub fn build_with_attempt_ceiling<R: Rng>(
    request: &GenerationRequest,
    max_attempts: usize,
    rng: &mut R,
) -> Result<GraphGroup, GenerationError> {
    let mut members = Vec::with_capacity(request.group_size);
    let mut seen: HashSet<CanonicalKey> = HashSet::with_capacity(request.group_size);

    for _ in 0..max_attempts {
        if members.len() >= request.group_size {
            break;
        }
        let candidate =
            request
                .topology
                .build(request.nodes, request.density, request.degree, rng)?;
        if seen.insert(canonical_key(&candidate)) {
            members.push(candidate);
        }
    }

    if members.len() < MIN_GROUP_SIZE {
        return Err(GenerationError::InsufficientDiversity {
            family: request.topology.as_str(),
            nodes: request.nodes,
            attempts: max_attempts,
            collected: members.len(),
        });
    }

    Ok(GraphGroup {
        request: request.clone(),
        members,
    })
}
