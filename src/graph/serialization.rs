//! graph6 single-line encoding, the on-disk format of every dataset file.
//!
//! The format packs the upper triangle of the adjacency matrix into 6-bit
//! groups offset by 63, prefixed with the vertex count (one byte up to 62
//! vertices, a `~`-marked 18-bit form above that). See McKay's formats.txt
//! for the authoritative description.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use petgraph::graph::NodeIndex;

use crate::graph::model::{graph_with_nodes, BenchGraph};

const OFFSET: u8 = 63;
const LONG_FORM_MARKER: u8 = b'~';
const MAX_SHORT_NODES: usize = 62;
const MAX_LONG_NODES: usize = 258_047;

/// Encode a graph as a graph6 line (without trailing newline).
pub fn graph6_string(graph: &BenchGraph) -> String {
    let n = graph.node_count();
    let mut bytes = Vec::with_capacity(4 + n * n / 12);

    if n <= MAX_SHORT_NODES {
        bytes.push(OFFSET + n as u8);
    } else {
        // 18-bit big-endian vertex count, 6 bits per byte
        bytes.push(LONG_FORM_MARKER);
        bytes.push(OFFSET + ((n >> 12) & 0x3f) as u8);
        bytes.push(OFFSET + ((n >> 6) & 0x3f) as u8);
        bytes.push(OFFSET + (n & 0x3f) as u8);
    }

    let mut group = 0u8;
    let mut filled = 0u8;
    for j in 1..n {
        for i in 0..j {
            group <<= 1;
            if graph.contains_edge(NodeIndex::new(i), NodeIndex::new(j)) {
                group |= 1;
            }
            filled += 1;
            if filled == 6 {
                bytes.push(OFFSET + group);
                group = 0;
                filled = 0;
            }
        }
    }
    if filled > 0 {
        bytes.push(OFFSET + (group << (6 - filled)));
    }

    // all bytes are in 63..=126 by construction
    String::from_utf8(bytes).unwrap_or_default()
}

/// Decode one graph6 line back into a graph. Used by tests and by anyone
/// consuming the datasets this tool writes.
pub fn parse_graph6(line: &str) -> Result<BenchGraph> {
    let bytes = line.trim_end().as_bytes();
    if bytes.is_empty() {
        bail!("empty graph6 line");
    }

    let (n, payload) = if bytes[0] == LONG_FORM_MARKER {
        if bytes.len() < 4 {
            bail!("truncated graph6 vertex count");
        }
        let n = (decode_byte(bytes[1])? << 12)
            | (decode_byte(bytes[2])? << 6)
            | decode_byte(bytes[3])?;
        (n, &bytes[4..])
    } else {
        (decode_byte(bytes[0])?, &bytes[1..])
    };
    if n > MAX_LONG_NODES {
        bail!("graph6 vertex count {n} out of supported range");
    }

    let mut graph = graph_with_nodes(n);
    let mut bit = 0usize;
    for j in 1..n {
        for i in 0..j {
            let byte = payload
                .get(bit / 6)
                .copied()
                .with_context(|| format!("graph6 payload too short for {n} vertices"))?;
            let group = decode_byte(byte)?;
            if group & (1 << (5 - bit % 6)) != 0 {
                graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
            }
            bit += 1;
        }
    }
    Ok(graph)
}

fn decode_byte(byte: u8) -> Result<usize> {
    if !(OFFSET..=OFFSET + 63).contains(&byte) {
        bail!("invalid graph6 byte {byte:#x}");
    }
    Ok((byte - OFFSET) as usize)
}

/// Writes a graph group as one `.g6` file, one encoded member per line.
pub struct Graph6Writer;

impl Graph6Writer {
    pub fn write_group(path: &Path, graphs: &[BenchGraph]) -> Result<()> {
        let file =
            File::create(path).with_context(|| format!("create dataset file {:?}", path))?;
        let mut writer = BufWriter::new(file);
        for graph in graphs {
            writeln!(writer, "{}", graph6_string(graph))
                .with_context(|| format!("write dataset file {:?}", path))?;
        }
        Ok(())
    }
}
