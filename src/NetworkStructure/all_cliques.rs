//! # Enumeration of All Cliques
//!
//! Produces every clique (of every size) of an undirected graph, following the candidate
//! sublist scheme of Zhang et al. (2005), "Genome-Scale Computational Approaches to
//! Memory-Intensive Applications in Systems Biology", SC 2005, doi: 10.1109/SC.2005.29.
//!
//! Nodes are ranked by their `Ord`. A candidate sublist is a clique found so far (`base`) and
//! the nodes adjacent to all of it that rank after its last node (`candidates`). Sublists are
//! expanded first in first out; a clique that can grow by exactly one node is emitted together
//! with its only extension instead of being queued again. Only live sublists are kept, each is
//! dropped once expanded, so memory stays low even when the number of cliques is huge.
//!
//! Self-loops and parallel edges are ignored, the graph is read as undirected.
//!
//! ```rust, ignore
//! let graph: BTreeMap<&str, BTreeSet<&str>> = ...;
//! for clique in all_cliques(&graph) {
//!     println!("{:?}", clique);
//! }
//! ```
use log::debug;
use petgraph::graphmap::{NodeTrait, UnGraphMap};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// an undirected graph given by its nodes and a neighbour lookup
pub trait NeighborLookup {
    type Node: Ord + Clone;
    fn node_list(&self) -> Vec<Self::Node>;
    fn neighbors_of(&self, node: &Self::Node) -> Vec<Self::Node>;
}

impl<N: Ord + Clone> NeighborLookup for BTreeMap<N, BTreeSet<N>> {
    type Node = N;
    fn node_list(&self) -> Vec<N> {
        self.keys().cloned().collect()
    }
    fn neighbors_of(&self, node: &N) -> Vec<N> {
        self.get(node)
            .map(|nbrs| nbrs.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl<N: Ord + Clone + Hash> NeighborLookup for HashMap<N, HashSet<N>> {
    type Node = N;
    fn node_list(&self) -> Vec<N> {
        self.keys().cloned().collect()
    }
    fn neighbors_of(&self, node: &N) -> Vec<N> {
        self.get(node)
            .map(|nbrs| nbrs.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl<N: NodeTrait, E> NeighborLookup for UnGraphMap<N, E> {
    type Node = N;
    fn node_list(&self) -> Vec<N> {
        self.nodes().collect()
    }
    fn neighbors_of(&self, node: &N) -> Vec<N> {
        self.neighbors(*node).collect()
    }
}

/// clique found so far and the nodes that may still extend it, all as node ranks
#[derive(Debug, Clone)]
struct CandidateSublist {
    base: Vec<usize>,
    candidates: Vec<usize>,
}

/// lazy producer of all cliques of one graph
#[derive(Debug, Clone)]
pub struct AllCliques<N> {
    /// rank -> node
    order: Vec<N>,
    /// rank -> ranks of neighbours ranked after it, ascending
    greater: Vec<Vec<usize>>,
    next_single: usize,
    sublists: VecDeque<CandidateSublist>,
    current: Option<(CandidateSublist, usize)>,
    pending: VecDeque<Vec<usize>>,
    max_size: Option<usize>,
}

impl<N: Ord + Clone> AllCliques<N> {
    pub fn new<G>(graph: &G) -> Self
    where
        G: NeighborLookup<Node = N>,
    {
        let mut nodes: BTreeSet<N> = graph.node_list().into_iter().collect();
        let mut edges: Vec<(N, N)> = Vec::new();
        for node in graph.node_list() {
            for nbr in graph.neighbors_of(&node) {
                if nbr != node {
                    nodes.insert(nbr.clone());
                    edges.push((node.clone(), nbr));
                }
            }
        }
        let order: Vec<N> = nodes.into_iter().collect();
        let rank_of: BTreeMap<&N, usize> = order.iter().enumerate().map(|(i, n)| (n, i)).collect();
        let mut greater: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); order.len()];
        for (a, b) in edges.iter() {
            let (ra, rb) = (rank_of[a], rank_of[b]);
            let (low, high) = if ra < rb { (ra, rb) } else { (rb, ra) };
            greater[low].insert(high);
        }
        let greater: Vec<Vec<usize>> = greater
            .into_iter()
            .map(|set| set.into_iter().collect())
            .collect();
        let sublists: VecDeque<CandidateSublist> = greater
            .iter()
            .enumerate()
            .map(|(rank, nbrs)| CandidateSublist {
                base: vec![rank],
                candidates: nbrs.clone(),
            })
            .collect();
        debug!(
            "clique enumeration over {} nodes and {} edges",
            order.len(),
            greater.iter().map(Vec::len).sum::<usize>()
        );
        Self {
            order,
            greater,
            next_single: 0,
            sublists,
            current: None,
            pending: VecDeque::new(),
            max_size: None,
        }
    }

    /// stop growing cliques beyond `max_size` nodes
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// candidate sublists still waiting in the queue
    pub fn queued_sublists(&self) -> usize {
        self.sublists.len()
    }

    fn allows(&self, size: usize) -> bool {
        self.max_size.is_none_or(|k| size <= k)
    }

    fn to_nodes(&self, ranks: &[usize]) -> Vec<N> {
        ranks.iter().map(|&r| self.order[r].clone()).collect()
    }

    /// expands one candidate of the current sublist, false when the queue is exhausted
    fn expand_next(&mut self) -> bool {
        loop {
            if self.current.is_none() {
                match self.sublists.pop_front() {
                    Some(sublist) => self.current = Some((sublist, 0)),
                    None => return false,
                }
            }
            let Some((sublist, pos)) = self.current.as_mut() else {
                return false;
            };
            if *pos >= sublist.candidates.len() {
                self.current = None;
                continue;
            }
            let added = sublist.candidates[*pos];
            *pos += 1;
            let new_candidates = intersect_sorted(&self.greater[added], &sublist.candidates);
            let mut base = sublist.base.clone();
            base.push(added);

            if !self.allows(base.len()) {
                continue;
            }
            match new_candidates.len() {
                0 => self.pending.push_back(base),
                1 => {
                    let mut extended = base.clone();
                    extended.push(new_candidates[0]);
                    self.pending.push_back(base);
                    if self.allows(extended.len()) {
                        self.pending.push_back(extended);
                    }
                }
                _ => {
                    if self.allows(base.len() + 1) {
                        self.sublists.push_back(CandidateSublist {
                            base: base.clone(),
                            candidates: new_candidates,
                        });
                    }
                    self.pending.push_back(base);
                }
            }
            return true;
        }
    }
}

impl<N: Ord + Clone> Iterator for AllCliques<N> {
    type Item = Vec<N>;

    fn next(&mut self) -> Option<Vec<N>> {
        loop {
            if let Some(ranks) = self.pending.pop_front() {
                return Some(self.to_nodes(&ranks));
            }
            if self.next_single < self.order.len() {
                let rank = self.next_single;
                self.next_single += 1;
                if self.allows(1) {
                    return Some(vec![self.order[rank].clone()]);
                }
                continue;
            }
            if !self.expand_next() {
                return None;
            }
        }
    }
}

/// all cliques of `graph`, singletons first
pub fn all_cliques<G>(graph: &G) -> AllCliques<G::Node>
where
    G: NeighborLookup,
{
    AllCliques::new(graph)
}

fn intersect_sorted(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut common = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] < b[j] {
            i += 1;
        } else if a[i] > b[j] {
            j += 1;
        } else {
            common.push(a[i]);
            i += 1;
            j += 1;
        }
    }
    common
}
