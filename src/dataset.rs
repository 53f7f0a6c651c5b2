//! The node-count sweep: build one group per size, hand it to the graph6
//! writer, and isolate failures so a bad size never aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use log::{info, warn};
use rand::Rng;

use crate::generate::{build_group, GenerationRequest, GroupMode, Topology};
use crate::graph::serialization::Graph6Writer;

pub const DATASET_EXTENSION: &str = "g6";

/// The CLI-facing sweep description; one [`GenerationRequest`] is derived
/// from it per node count.
#[derive(Debug, Clone)]
pub struct SweepRequest {
    pub topology: Topology,
    pub density: f64,
    pub degree: usize,
    pub group_size: usize,
    pub start: usize,
    pub end: usize,
    pub step: usize,
}

impl SweepRequest {
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.start..=self.end).step_by(self.step.max(1))
    }

    fn request_for(&self, nodes: usize, mode: GroupMode) -> GenerationRequest {
        GenerationRequest {
            topology: self.topology,
            nodes,
            density: self.density,
            degree: self.degree,
            group_size: self.group_size,
            mode,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SweepSummary {
    pub written: usize,
    pub skipped: usize,
}

/// Owns the output root and the per-mode directory layout
/// (`<root>/<isomorphic|non_isomorphic>/<n>.g6`).
#[derive(Debug, Clone)]
pub struct DatasetAssembler {
    root: PathBuf,
}

impl DatasetAssembler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Sweep every requested size for one mode. Generation or I/O trouble
    /// at a single size is reported and skipped; the sweep itself only
    /// fails when the output directory cannot be prepared at all.
    pub fn run<R: Rng>(
        &self,
        sweep: &SweepRequest,
        mode: GroupMode,
        rng: &mut R,
    ) -> Result<SweepSummary> {
        ensure!(sweep.step >= 1, "sweep step must be at least 1");
        ensure!(sweep.group_size >= 1, "set size must be at least 1");

        let dir = self.root.join(mode.dir_name());
        fs::create_dir_all(&dir).with_context(|| format!("create output directory {:?}", dir))?;

        let mut summary = SweepSummary::default();
        for nodes in sweep.sizes() {
            let request = sweep.request_for(nodes, mode);
            match write_group(&dir, &request, rng) {
                Ok(written) => {
                    info!(
                        "{}: wrote {} {} graph(s) with {} vertices",
                        mode.dir_name(),
                        written,
                        request.topology,
                        nodes
                    );
                    summary.written += 1;
                }
                Err(err) => {
                    warn!(
                        "{}: skipping {} vertices ({} density {} degree {}): {err:#}",
                        mode.dir_name(),
                        nodes,
                        request.topology,
                        request.density,
                        request.degree
                    );
                    summary.skipped += 1;
                }
            }
        }
        Ok(summary)
    }
}

fn write_group<R: Rng>(dir: &Path, request: &GenerationRequest, rng: &mut R) -> Result<usize> {
    let group = build_group(request, rng)?;
    let path = dir.join(format!("{}.{}", request.nodes, DATASET_EXTENSION));
    Graph6Writer::write_group(&path, &group.members)?;
    Ok(group.len())
}
