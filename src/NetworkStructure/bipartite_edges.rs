//! # Bipartite Complex/Reaction Graph
//!
//! ## Aim
//! A reaction network drawn as a directed bipartite graph: complexes point to the reactions
//! consuming them, reactions point to the complexes they produce. Downstream path construction
//! needs, for every complex, the arcs leaving it.
//!
//! ## Main Data Structures and Logic
//! - `NodeRole`: complex or reaction, fixed when a node is added
//! - `BipartiteNetwork`: petgraph `DiGraph` of `NetworkNode`s, rejects arcs between nodes of one role
//! - `ReactionNaming`: naming convention of reaction nodes (prefix + positive integer, `w1`, `w2`, ...)
//!
//! Graphs that come as bare arcs carry no roles. `from_untagged_arcs` two-colours every connected
//! component and orients the colouring by the naming convention: the probe node (`w1` by default)
//! must be present, and every other component needs at least one node named like a reaction.
//! Anything else is reported as an error instead of being guessed.
use log::{info, warn};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeRole {
    Complex,
    Reaction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub name: String,
    pub role: NodeRole,
}

#[derive(Debug, Error)]
pub enum BipartiteError {
    #[error("unknown node '{0}'")]
    UnknownNode(String),
    #[error("node '{0}' is already present with the other role")]
    RoleConflict(String),
    #[error("arc {from} -> {to} joins two nodes of the same role")]
    SameRoleArc { from: String, to: String },
    #[error("graph is not bipartite: odd cycle through '{0}'")]
    NotBipartite(String),
    #[error(
        "probe node '{probe}' is neither among complexes nor among reactions: reaction nodes are expected to be named '{prefix}1', '{prefix}2', ..."
    )]
    ProbeMissing { probe: String, prefix: String },
    #[error("cannot tell complexes from reactions in the component of '{0}': no node is named like a reaction")]
    AmbiguousRoles(String),
    #[error("invalid reaction naming pattern: {0}")]
    InvalidNamingPattern(#[from] regex::Error),
}

/// naming convention of reaction nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionNaming {
    pub prefix: String,
    /// reaction node that must exist in every untagged graph
    pub probe: String,
}

impl Default for ReactionNaming {
    fn default() -> Self {
        Self {
            prefix: "w".to_string(),
            probe: "w1".to_string(),
        }
    }
}

impl ReactionNaming {
    /// `^<prefix>[1-9][0-9]*$`
    pub fn pattern(&self) -> Result<Regex, regex::Error> {
        Regex::new(&format!("^{}[1-9][0-9]*$", regex::escape(&self.prefix)))
    }
}

#[derive(Debug, Clone, Default)]
pub struct BipartiteNetwork {
    graph: DiGraph<NetworkNode, ()>,
    index_of: HashMap<String, NodeIndex>,
}

impl BipartiteNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    fn add_node(&mut self, name: &str, role: NodeRole) -> Result<NodeIndex, BipartiteError> {
        if let Some(&idx) = self.index_of.get(name) {
            if self.graph[idx].role != role {
                return Err(BipartiteError::RoleConflict(name.to_string()));
            }
            return Ok(idx);
        }
        let idx = self.graph.add_node(NetworkNode {
            name: name.to_string(),
            role,
        });
        self.index_of.insert(name.to_string(), idx);
        Ok(idx)
    }

    pub fn add_complex(&mut self, name: &str) -> Result<NodeIndex, BipartiteError> {
        self.add_node(name, NodeRole::Complex)
    }

    pub fn add_reaction(&mut self, name: &str) -> Result<NodeIndex, BipartiteError> {
        self.add_node(name, NodeRole::Reaction)
    }

    /// arc between two existing nodes of different roles
    pub fn add_arc(&mut self, from: &str, to: &str) -> Result<(), BipartiteError> {
        let source = *self
            .index_of
            .get(from)
            .ok_or_else(|| BipartiteError::UnknownNode(from.to_string()))?;
        let target = *self
            .index_of
            .get(to)
            .ok_or_else(|| BipartiteError::UnknownNode(to.to_string()))?;
        if self.graph[source].role == self.graph[target].role {
            return Err(BipartiteError::SameRoleArc {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        self.graph.add_edge(source, target, ());
        Ok(())
    }

    pub fn role_of(&self, name: &str) -> Option<NodeRole> {
        self.index_of.get(name).map(|&idx| self.graph[idx].role)
    }

    fn names_with_role(&self, role: NodeRole) -> BTreeSet<String> {
        self.graph
            .node_weights()
            .filter(|node| node.role == role)
            .map(|node| node.name.clone())
            .collect()
    }

    pub fn complexes(&self) -> BTreeSet<String> {
        self.names_with_role(NodeRole::Complex)
    }

    pub fn reactions(&self) -> BTreeSet<String> {
        self.names_with_role(NodeRole::Reaction)
    }

    /// arcs leaving every complex, in the order they were added;
    /// complexes without outgoing arcs map to an empty list
    pub fn complex_edges(&self) -> BTreeMap<String, Vec<(String, String)>> {
        let mut edges: BTreeMap<String, Vec<(String, String)>> = self
            .complexes()
            .into_iter()
            .map(|c| (c, Vec::new()))
            .collect();
        for arc in self.graph.edge_references() {
            let source = &self.graph[arc.source()];
            if source.role != NodeRole::Complex {
                continue;
            }
            if let Some(list) = edges.get_mut(&source.name) {
                list.push((source.name.clone(), self.graph[arc.target()].name.clone()));
            }
        }
        edges
    }

    pub fn graph(&self) -> &DiGraph<NetworkNode, ()> {
        &self.graph
    }

    /// recovers node roles of a graph given only by its arcs
    pub fn from_untagged_arcs(
        arcs: &[(String, String)],
        naming: &ReactionNaming,
    ) -> Result<Self, BipartiteError> {
        let pattern = naming.pattern()?;
        let mut adjacency: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for (from, to) in arcs {
            adjacency.entry(from.as_str()).or_default().insert(to.as_str());
            adjacency.entry(to.as_str()).or_default().insert(from.as_str());
        }
        if !adjacency.contains_key(naming.probe.as_str()) {
            return Err(BipartiteError::ProbeMissing {
                probe: naming.probe.clone(),
                prefix: naming.prefix.clone(),
            });
        }

        let mut colour: HashMap<&str, bool> = HashMap::new();
        let mut roles: BTreeMap<&str, NodeRole> = BTreeMap::new();
        for &start in adjacency.keys() {
            if colour.contains_key(start) {
                continue;
            }
            // breadth first two-colouring of one connected component
            let mut component = vec![start];
            let mut queue = VecDeque::from([start]);
            colour.insert(start, false);
            while let Some(node) = queue.pop_front() {
                let side = colour[node];
                for &nbr in adjacency[node].iter() {
                    match colour.get(nbr) {
                        Some(&other) if other == side => {
                            return Err(BipartiteError::NotBipartite(nbr.to_string()));
                        }
                        Some(_) => {}
                        None => {
                            colour.insert(nbr, !side);
                            component.push(nbr);
                            queue.push_back(nbr);
                        }
                    }
                }
            }
            let anchor = if component.contains(&naming.probe.as_str()) {
                naming.probe.as_str()
            } else {
                match component.iter().copied().find(|n| pattern.is_match(n)) {
                    Some(anchor) => anchor,
                    None => return Err(BipartiteError::AmbiguousRoles(start.to_string())),
                }
            };
            let reaction_side = colour[anchor];
            for &node in component.iter() {
                let role = if colour[node] == reaction_side {
                    NodeRole::Reaction
                } else {
                    NodeRole::Complex
                };
                if role == NodeRole::Complex && pattern.is_match(node) {
                    warn!("'{}' is named like a reaction but sits among complexes", node);
                }
                roles.insert(node, role);
            }
        }

        let mut network = Self::new();
        for (&name, &role) in roles.iter() {
            network.add_node(name, role)?;
        }
        for (from, to) in arcs {
            network.add_arc(from, to)?;
        }
        info!(
            "roles recovered: {} complexes, {} reactions",
            network.complexes().len(),
            network.reactions().len()
        );
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arcs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    fn small_network() -> BipartiteNetwork {
        // A + B -> C via w1, C -> A via w2
        let mut network = BipartiteNetwork::new();
        for c in ["A", "B", "C"] {
            network.add_complex(c).unwrap();
        }
        network.add_reaction("w1").unwrap();
        network.add_reaction("w2").unwrap();
        network.add_arc("A", "w1").unwrap();
        network.add_arc("B", "w1").unwrap();
        network.add_arc("w1", "C").unwrap();
        network.add_arc("C", "w2").unwrap();
        network.add_arc("w2", "A").unwrap();
        network
    }

    #[test]
    fn test_complex_edges() {
        let network = small_network();
        let edges = network.complex_edges();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges["A"], arcs(&[("A", "w1")]));
        assert_eq!(edges["B"], arcs(&[("B", "w1")]));
        assert_eq!(edges["C"], arcs(&[("C", "w2")]));
        assert!(!edges.contains_key("w1"));
    }

    #[test]
    fn test_complex_without_outgoing_arcs() {
        let mut network = small_network();
        network.add_complex("D").unwrap();
        network.add_arc("w2", "D").unwrap();
        let edges = network.complex_edges();
        assert!(edges["D"].is_empty());
    }

    #[test]
    fn test_arc_errors() {
        let mut network = small_network();
        assert!(matches!(
            network.add_arc("A", "B"),
            Err(BipartiteError::SameRoleArc { .. })
        ));
        assert!(matches!(
            network.add_arc("A", "w9"),
            Err(BipartiteError::UnknownNode(name)) if name == "w9"
        ));
        assert!(matches!(
            network.add_reaction("A"),
            Err(BipartiteError::RoleConflict(_))
        ));
    }

    #[test]
    fn test_roles_from_untagged_arcs() {
        let untagged = arcs(&[
            ("A", "w1"),
            ("B", "w1"),
            ("w1", "C"),
            ("C", "w2"),
            ("w2", "A"),
        ]);
        let network =
            BipartiteNetwork::from_untagged_arcs(&untagged, &ReactionNaming::default()).unwrap();
        assert_eq!(network.complexes(), small_network().complexes());
        assert_eq!(network.reactions(), small_network().reactions());
        assert_eq!(network.complex_edges(), small_network().complex_edges());
    }

    #[test]
    fn test_second_component_oriented_by_naming() {
        let untagged = arcs(&[("A", "w1"), ("w1", "B"), ("X", "w7"), ("w7", "Y")]);
        let network =
            BipartiteNetwork::from_untagged_arcs(&untagged, &ReactionNaming::default()).unwrap();
        assert_eq!(network.role_of("w7"), Some(NodeRole::Reaction));
        assert_eq!(network.role_of("X"), Some(NodeRole::Complex));
    }

    #[test]
    fn test_missing_probe() {
        let untagged = arcs(&[("A", "r1"), ("r1", "B")]);
        let result = BipartiteNetwork::from_untagged_arcs(&untagged, &ReactionNaming::default());
        assert!(matches!(result, Err(BipartiteError::ProbeMissing { .. })));
        let naming = ReactionNaming {
            prefix: "r".to_string(),
            probe: "r1".to_string(),
        };
        let network = BipartiteNetwork::from_untagged_arcs(&untagged, &naming).unwrap();
        assert_eq!(network.reactions().len(), 1);
    }

    #[test]
    fn test_ambiguous_component_and_odd_cycle() {
        let untagged = arcs(&[("A", "w1"), ("X", "Y")]);
        let result = BipartiteNetwork::from_untagged_arcs(&untagged, &ReactionNaming::default());
        assert!(matches!(result, Err(BipartiteError::AmbiguousRoles(_))));

        let odd = arcs(&[("A", "w1"), ("w1", "B"), ("B", "A")]);
        let result = BipartiteNetwork::from_untagged_arcs(&odd, &ReactionNaming::default());
        assert!(matches!(result, Err(BipartiteError::NotBipartite(_))));
    }

    #[test]
    fn test_naming_pattern() {
        let pattern = ReactionNaming::default().pattern().unwrap();
        assert!(pattern.is_match("w1"));
        assert!(pattern.is_match("w120"));
        assert!(!pattern.is_match("w0"));
        assert!(!pattern.is_match("ww1"));
        assert!(!pattern.is_match("CO2"));
    }
}
