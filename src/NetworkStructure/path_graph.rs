//! # Path Graph Module
//!
//! ## Aim
//! Substances of a reaction network are connected by directed "transfer paths"
//! (start substance, intermediate, end substance, tag). This module assembles those paths
//! into a derived directed graph: every path is a node and an arc p1 -> p2 exists iff p1 ends
//! at the substance where p2 starts.
//!
//! ## Main Data Structures and Logic
//! - `TransferPath<T>`: one path, the tag `T` is carried through unchanged
//! - `SubstancePaths<T>`: positive (directed) and negative (bidirectional) paths of one substance
//! - `PathCatalogue<T>`: substance name -> its paths
//! - `PathGraph<T>`: petgraph `DiGraph` with paths as node weights
//!
//! A negative path (A,k,B) is not the same path as (B,k,A), so each negative path
//! contributes both directions as two distinct nodes.
//!
//! ## Usage
//! ```rust, ignore
//! let graph = PathGraph::from_catalogue(&catalogue);
//! for cycle in graph.valid_cycles().take(100) {
//!     println!("{:?}", cycle);
//! }
//! ```
use log::{debug, info};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::Hash;

/// directed transfer relation between two substances
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TransferPath<T = u32> {
    pub start: String,
    /// intermediate label (complex or reaction the path runs through)
    pub via: String,
    pub end: String,
    pub tag: T,
}

impl<T: Clone> TransferPath<T> {
    pub fn new(start: &str, via: &str, end: &str, tag: T) -> Self {
        Self {
            start: start.to_string(),
            via: via.to_string(),
            end: end.to_string(),
            tag,
        }
    }
    /// same path walked from end to start
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end.clone(),
            via: self.via.clone(),
            end: self.start.clone(),
            tag: self.tag.clone(),
        }
    }
}

/// paths recorded for one substance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstancePaths<T = u32> {
    #[serde(alias = "p_paths", default = "Vec::new")]
    pub positive_paths: Vec<TransferPath<T>>,
    #[serde(alias = "n_paths", default = "Vec::new")]
    pub negative_paths: Vec<TransferPath<T>>,
}

impl<T> Default for SubstancePaths<T> {
    fn default() -> Self {
        Self {
            positive_paths: Vec::new(),
            negative_paths: Vec::new(),
        }
    }
}

pub type PathCatalogue<T = u32> = BTreeMap<String, SubstancePaths<T>>;

/// directed graph with transfer paths as nodes, immutable once built
#[derive(Debug, Clone)]
pub struct PathGraph<T = u32> {
    graph: DiGraph<TransferPath<T>, ()>,
    index_of: HashMap<TransferPath<T>, NodeIndex>,
}

impl<T> PathGraph<T>
where
    T: Clone + Ord + Hash,
{
    /// builds the path graph of a catalogue
    pub fn from_catalogue(catalogue: &PathCatalogue<T>) -> Self {
        // BTreeSet both deduplicates and fixes the node order
        let mut paths: BTreeSet<TransferPath<T>> = BTreeSet::new();
        for substance_paths in catalogue.values() {
            for path in substance_paths.positive_paths.iter() {
                paths.insert(path.clone());
            }
            for path in substance_paths.negative_paths.iter() {
                paths.insert(path.clone());
                paths.insert(path.reversed());
            }
        }
        Self::from_paths(paths)
    }

    /// builds the path graph from already directed paths
    pub fn from_paths<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = TransferPath<T>>,
    {
        let paths: BTreeSet<TransferPath<T>> = paths.into_iter().collect();
        let mut graph: DiGraph<TransferPath<T>, ()> =
            DiGraph::with_capacity(paths.len(), paths.len());
        let mut index_of = HashMap::with_capacity(paths.len());
        // start substance -> paths beginning there
        let mut path_starts: HashMap<&str, Vec<NodeIndex>> = HashMap::new();
        for path in paths.iter() {
            let idx = graph.add_node(path.clone());
            index_of.insert(path.clone(), idx);
            path_starts.entry(path.start.as_str()).or_default().push(idx);
        }
        for path in paths.iter() {
            let source = index_of[path];
            if let Some(targets) = path_starts.get(path.end.as_str()) {
                for &target in targets {
                    graph.add_edge(source, target, ());
                }
            } else {
                debug!("no path starts at '{}', path is a dead end", path.end);
            }
        }
        info!(
            "path graph built: {} paths, {} arcs",
            graph.node_count(),
            graph.edge_count()
        );
        Self { graph, index_of }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains(&self, path: &TransferPath<T>) -> bool {
        self.index_of.contains_key(path)
    }

    /// all paths in node order
    pub fn paths(&self) -> impl Iterator<Item = &TransferPath<T>> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// paths that may follow `path`, empty if `path` is not in the graph
    pub fn successors(&self, path: &TransferPath<T>) -> Vec<&TransferPath<T>> {
        match self.index_of.get(path) {
            Some(&idx) => {
                let mut next: Vec<&TransferPath<T>> = self
                    .graph
                    .neighbors(idx)
                    .map(|n| &self.graph[n])
                    .collect();
                next.sort();
                next
            }
            None => Vec::new(),
        }
    }

    /// every arc as a pair of paths
    pub fn arcs(&self) -> impl Iterator<Item = (&TransferPath<T>, &TransferPath<T>)> {
        self.graph.edge_indices().filter_map(move |e| {
            self.graph
                .edge_endpoints(e)
                .map(|(a, b)| (&self.graph[a], &self.graph[b]))
        })
    }

    /// underlying petgraph graph
    pub fn graph(&self) -> &DiGraph<TransferPath<T>, ()> {
        &self.graph
    }
}
