//! # Valid Cycles of a Path Graph
//!
//! A cycle of the path graph is *valid* when, throughout the cycle, every substance is the
//! beginning of at most one path. The validator walks the simple cycles of the graph lazily and
//! keeps only the valid ones, so a caller can stop after any number of cycles.
use crate::NetworkStructure::path_graph::{PathGraph, TransferPath};
use crate::NetworkStructure::simple_cycles::SimpleCycles;
use log::{debug, info};
use std::collections::HashSet;
use std::hash::Hash;

/// true if no substance starts more than one path of the cycle
pub fn is_valid_cycle<'a, T: 'a, I>(cycle: I) -> bool
where
    I: IntoIterator<Item = &'a TransferPath<T>>,
{
    let mut beginnings: HashSet<&str> = HashSet::new();
    for path in cycle {
        if !beginnings.insert(path.start.as_str()) {
            return false;
        }
    }
    true
}

/// lazy sequence of the valid cycles of one path graph
pub struct ValidCycles<'g, T> {
    graph: &'g PathGraph<T>,
    cycles: SimpleCycles<'g, TransferPath<T>, ()>,
    rejected: usize,
}

impl<'g, T> ValidCycles<'g, T> {
    /// number of simple cycles dropped so far
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl<'g, T> Iterator for ValidCycles<'g, T>
where
    T: Clone + Ord + Hash,
{
    type Item = Vec<TransferPath<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let inner = graph.graph();
        for cycle in self.cycles.by_ref() {
            let paths: Vec<&TransferPath<T>> = cycle.iter().map(|&idx| &inner[idx]).collect();
            if is_valid_cycle(paths.iter().copied()) {
                return Some(paths.into_iter().cloned().collect());
            }
            self.rejected += 1;
            debug!("cycle of {} paths rejected", paths.len());
        }
        None
    }
}

impl<T> PathGraph<T>
where
    T: Clone + Ord + Hash,
{
    /// every simple cycle of the graph as a sequence of paths, valid or not
    pub fn simple_cycles(&self) -> impl Iterator<Item = Vec<TransferPath<T>>> + '_ {
        let inner = self.graph();
        SimpleCycles::new(inner)
            .map(move |cycle| cycle.into_iter().map(|idx| inner[idx].clone()).collect())
    }

    /// valid cycles, produced one at a time; every call starts a fresh pass
    pub fn valid_cycles(&self) -> ValidCycles<'_, T> {
        ValidCycles {
            graph: self,
            cycles: SimpleCycles::new(self.graph()),
            rejected: 0,
        }
    }

    /// valid cycles gathered into a vector, at most `limit` of them if a limit is given
    pub fn collect_valid_cycles(&self, limit: Option<usize>) -> Vec<Vec<TransferPath<T>>> {
        let mut cycles = self.valid_cycles();
        let found: Vec<Vec<TransferPath<T>>> = match limit {
            Some(max) => cycles.by_ref().take(max).collect(),
            None => cycles.by_ref().collect(),
        };
        info!(
            "{} valid cycles collected, {} rejected on the way",
            found.len(),
            cycles.rejected()
        );
        found
    }
}
