//! Lazy enumeration of the elementary (simple) cycles of a directed graph.
//!
//! Johnson's circuit search: the graph is split into strongly connected components,
//! every component is searched for circuits through one start node, then the start node
//! is removed and the components of the rest are queued again. Blocked sets keep each
//! search linear in the number of circuits it finds.
//!
//! Cycles are open node sequences: the start node is NOT repeated at the end.
//! Self-loops come out first as one-node cycles.
use log::debug;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};

/// producer of simple cycles, all search state lives here between calls of `next`
pub struct SimpleCycles<'g, N, E> {
    graph: &'g DiGraph<N, E>,
    self_loops: Vec<NodeIndex>,
    components: Vec<Vec<NodeIndex>>,
    search: Option<CircuitSearch>,
}

impl<'g, N, E> SimpleCycles<'g, N, E> {
    pub fn new(graph: &'g DiGraph<N, E>) -> Self {
        // reversed so that popping yields them in index order
        let self_loops: Vec<NodeIndex> = graph
            .node_indices()
            .rev()
            .filter(|&n| graph.contains_edge(n, n))
            .collect();
        let all: Vec<NodeIndex> = graph.node_indices().collect();
        let components = nontrivial_components(graph, &all);
        debug!(
            "cycle search: {} self-loops, {} strongly connected components",
            self_loops.len(),
            components.len()
        );
        Self {
            graph,
            self_loops,
            components,
            search: None,
        }
    }
}

impl<'g, N, E> Iterator for SimpleCycles<'g, N, E> {
    type Item = Vec<NodeIndex>;

    fn next(&mut self) -> Option<Vec<NodeIndex>> {
        if let Some(node) = self.self_loops.pop() {
            return Some(vec![node]);
        }
        loop {
            if let Some(search) = self.search.as_mut() {
                if let Some(cycle) = search.next_circuit(self.graph) {
                    return Some(cycle);
                }
                // every circuit through the start node is found, drop it and go on
                let finished = self.search.take()?;
                let rest: Vec<NodeIndex> = finished
                    .members
                    .iter()
                    .copied()
                    .filter(|&n| n != finished.start)
                    .collect();
                self.components
                    .extend(nontrivial_components(self.graph, &rest));
                continue;
            }
            let component = self.components.pop()?;
            self.search = Some(CircuitSearch::new(self.graph, component));
        }
    }
}

/// circuits through one start node inside one strongly connected component
struct CircuitSearch {
    start: NodeIndex,
    members: HashSet<NodeIndex>,
    path: Vec<NodeIndex>,
    blocked: HashSet<NodeIndex>,
    closed: HashSet<NodeIndex>,
    blocked_by: HashMap<NodeIndex, HashSet<NodeIndex>>,
    stack: Vec<(NodeIndex, Vec<NodeIndex>)>,
}

impl CircuitSearch {
    fn new<N, E>(graph: &DiGraph<N, E>, component: Vec<NodeIndex>) -> Self {
        let members: HashSet<NodeIndex> = component.iter().copied().collect();
        // components are never empty
        let start = component.iter().copied().min().unwrap_or_default();
        let first_neighbors = inner_neighbors(graph, &members, start);
        Self {
            start,
            members,
            path: vec![start],
            blocked: HashSet::from([start]),
            closed: HashSet::new(),
            blocked_by: HashMap::new(),
            stack: vec![(start, first_neighbors)],
        }
    }

    fn next_circuit<N, E>(&mut self, graph: &DiGraph<N, E>) -> Option<Vec<NodeIndex>> {
        let CircuitSearch {
            start,
            members,
            path,
            blocked,
            closed,
            blocked_by,
            stack,
        } = self;
        while let Some((this_node, neighbors)) = stack.last_mut() {
            let this_node = *this_node;
            let mut found = None;
            if let Some(next_node) = neighbors.pop() {
                if next_node == *start {
                    found = Some(path.clone());
                    closed.extend(path.iter().copied());
                } else if !blocked.contains(&next_node) {
                    path.push(next_node);
                    stack.push((next_node, inner_neighbors(graph, members, next_node)));
                    closed.remove(&next_node);
                    blocked.insert(next_node);
                    continue;
                }
            }
            let exhausted = stack.last().is_some_and(|(_, n)| n.is_empty());
            if exhausted {
                if closed.contains(&this_node) {
                    unblock(this_node, blocked, blocked_by);
                } else {
                    for nbr in inner_neighbors(graph, members, this_node) {
                        blocked_by.entry(nbr).or_default().insert(this_node);
                    }
                }
                stack.pop();
                path.pop();
            }
            if found.is_some() {
                return found;
            }
        }
        None
    }
}

fn unblock(
    node: NodeIndex,
    blocked: &mut HashSet<NodeIndex>,
    blocked_by: &mut HashMap<NodeIndex, HashSet<NodeIndex>>,
) {
    let mut to_unblock = vec![node];
    while let Some(n) = to_unblock.pop() {
        if blocked.remove(&n) {
            if let Some(waiting) = blocked_by.get_mut(&n) {
                to_unblock.extend(waiting.drain());
            }
        }
    }
}

/// successors of `node` inside `members`, self-loops excluded
fn inner_neighbors<N, E>(
    graph: &DiGraph<N, E>,
    members: &HashSet<NodeIndex>,
    node: NodeIndex,
) -> Vec<NodeIndex> {
    let mut neighbors: Vec<NodeIndex> = graph
        .neighbors(node)
        .filter(|n| *n != node && members.contains(n))
        .collect();
    neighbors.sort();
    neighbors.dedup();
    neighbors
}

/// strongly connected components with more than one node of the subgraph induced by `nodes`
fn nontrivial_components<N, E>(graph: &DiGraph<N, E>, nodes: &[NodeIndex]) -> Vec<Vec<NodeIndex>> {
    let members: HashSet<NodeIndex> = nodes.iter().copied().collect();
    let mut sub: DiGraph<NodeIndex, ()> = DiGraph::with_capacity(nodes.len(), 0);
    let mut local: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(nodes.len());
    for &n in nodes {
        local.insert(n, sub.add_node(n));
    }
    for &n in nodes {
        for m in inner_neighbors(graph, &members, n) {
            sub.add_edge(local[&n], local[&m], ());
        }
    }
    let mut components: Vec<Vec<NodeIndex>> = tarjan_scc(&sub)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .map(|scc| {
            let mut original: Vec<NodeIndex> = scc.into_iter().map(|i| sub[i]).collect();
            original.sort();
            original
        })
        .collect();
    components.sort();
    components
}
