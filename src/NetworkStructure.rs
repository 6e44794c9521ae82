/// eng
/// Extraction of the arcs of a bipartite complex/reaction graph, grouped by complex.
/// Node roles are given explicitly when the graph is built; for graphs coming without roles
/// there is a fallback that recovers them from the naming convention of reaction nodes
/// (w1, w2, ...).
/// # Examples
/// ```
/// use ReactNet::NetworkStructure::bipartite_edges::BipartiteNetwork;
/// let mut network = BipartiteNetwork::new();
/// network.add_complex("A").unwrap();
/// network.add_complex("B").unwrap();
/// network.add_reaction("w1").unwrap();
/// network.add_arc("A", "w1").unwrap();
/// network.add_arc("w1", "B").unwrap();
/// let edges = network.complex_edges();
/// assert_eq!(edges["A"], vec![("A".to_string(), "w1".to_string())]);
/// assert!(edges["B"].is_empty());
/// ```
pub mod bipartite_edges;
/// Path graph: transfer paths between substances are nodes, an arc joins a path to every path
/// starting where it ends. Negative (bidirectional) paths give two directed paths.
/// # Examples
/// ```
/// use ReactNet::NetworkStructure::path_graph::{PathCatalogue, PathGraph, SubstancePaths, TransferPath};
/// let mut catalogue: PathCatalogue = PathCatalogue::new();
/// catalogue.insert(
///     "A".to_string(),
///     SubstancePaths {
///         positive_paths: vec![TransferPath::new("A", "w1", "B", 1)],
///         negative_paths: vec![],
///     },
/// );
/// catalogue.insert(
///     "B".to_string(),
///     SubstancePaths {
///         positive_paths: vec![TransferPath::new("B", "w2", "A", 1)],
///         negative_paths: vec![],
///     },
/// );
/// let graph = PathGraph::from_catalogue(&catalogue);
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.valid_cycles().count(), 1);
/// ```
pub mod path_graph;
/// lazy Johnson enumeration of elementary cycles of a petgraph `DiGraph`
pub mod simple_cycles;
/// valid cycles of a path graph: no substance begins two paths of the same cycle
pub mod valid_cycles;
/// eng
/// Lumped reactant and product matrices (LPA) of a system with a slow/fast partition of species.
/// # Examples
/// ```
/// use nalgebra::DMatrix;
/// use ReactNet::NetworkStructure::lpa_matrices::lpa_alpha_beta;
/// let alpha = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
/// let beta = DMatrix::from_row_slice(3, 2, &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
/// let lumped = lpa_alpha_beta(&alpha, &beta, &[0]).unwrap();
/// assert_eq!(lumped.fast_indices, vec![1, 2]);
/// assert_eq!(lumped.alpha.shape(), (4, 4));
/// ```
pub mod lpa_matrices;
/// All cliques of an undirected graph, memory bounded (Zhang et al. 2005).
/// # Examples
/// ```
/// use std::collections::{BTreeMap, BTreeSet};
/// use ReactNet::NetworkStructure::all_cliques::all_cliques;
/// let mut graph: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
/// graph.insert("a", BTreeSet::from(["b", "c"]));
/// graph.insert("b", BTreeSet::from(["a", "c"]));
/// graph.insert("c", BTreeSet::from(["a", "b"]));
/// assert_eq!(all_cliques(&graph).count(), 7);
/// ```
pub mod all_cliques;

#[cfg(test)]
mod path_graph_tests;
