//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR is optimized for iteration over neighbors, which is exactly what
//! PageRank needs during power iteration. Document ids are interned to dense
//! node indices so the rank buffers can be plain vectors.

use super::builder::LinkGraph;
use crate::types::DocId;
use rustc_hash::FxHashMap;

/// A directed, unweighted graph in Compressed Sparse Row format
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Document id for each node, in ascending order
    pub ids: Vec<DocId>,
}

impl CsrGraph {
    /// Convert a [`LinkGraph`] into CSR format
    ///
    /// Nodes are numbered in sorted id order and each row is sorted, so the
    /// layout (and every rank computed over it) is the same from run to run.
    pub fn from_link_graph(graph: &LinkGraph) -> Self {
        let mut ids: Vec<DocId> = graph.keys().cloned().collect();
        ids.sort_unstable();

        let index: FxHashMap<&str, u32> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i as u32))
            .collect();

        let num_nodes = ids.len();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::with_capacity(graph.values().map(|s| s.len()).sum());
        row_ptr.push(0);

        for id in &ids {
            let start = col_idx.len();
            if let Some(links) = graph.get(id) {
                // Targets outside the key set can't be ranked; self-loops are
                // dropped so a page linking only to itself stays dangling
                col_idx.extend(
                    links
                        .iter()
                        .filter(|l| *l != id)
                        .filter_map(|l| index.get(l.as_str()).copied()),
                );
            }
            col_idx[start..].sort_unstable();
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            ids,
        }
    }

    /// Iterate over out-neighbors of a node
    pub fn neighbors(&self, node: u32) -> &[u32] {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        &self.col_idx[start..end]
    }

    /// Get the out-degree of a node
    pub fn degree(&self, node: u32) -> usize {
        self.row_ptr[node as usize + 1] - self.row_ptr[node as usize]
    }

    /// Find a node by document id (binary search over the sorted ids)
    pub fn node(&self, id: &str) -> Option<u32> {
        self.ids
            .binary_search_by(|probe| probe.as_str().cmp(id))
            .ok()
            .map(|i| i as u32)
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Get the total number of directed edges
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Find dangling nodes (nodes with no outgoing edges)
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.degree(n) == 0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            ids: Vec::new(),
        }
    }
}
