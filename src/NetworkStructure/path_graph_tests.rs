/////////////////////////////////////////////////////////////////////////////////////////
// TESTS
/////////////////////////////////////////////////////////////////////////////////////////
use crate::NetworkStructure::path_graph::{PathCatalogue, PathGraph, SubstancePaths, TransferPath};
use crate::NetworkStructure::valid_cycles::is_valid_cycle;
use std::collections::BTreeSet;

fn path(start: &str, via: &str, end: &str) -> TransferPath<u32> {
    TransferPath::new(start, via, end, 1)
}

fn catalogue(entries: Vec<(&str, Vec<TransferPath>, Vec<TransferPath>)>) -> PathCatalogue {
    entries
        .into_iter()
        .map(|(substance, positive_paths, negative_paths)| {
            (
                substance.to_string(),
                SubstancePaths {
                    positive_paths,
                    negative_paths,
                },
            )
        })
        .collect()
}

#[test]
fn test_arcs_join_end_to_start() {
    let cat = catalogue(vec![
        ("A", vec![path("A", "w1", "B"), path("A", "w2", "C")], vec![]),
        ("B", vec![path("B", "w3", "C")], vec![]),
        ("C", vec![path("C", "w4", "A")], vec![]),
    ]);
    let graph = PathGraph::from_catalogue(&cat);
    assert_eq!(graph.node_count(), 4);
    // A->B : B->C ; A->C : C->A ; B->C : C->A ; C->A : A->B, A->C
    assert_eq!(graph.edge_count(), 5);
    for (from, to) in graph.arcs() {
        assert_eq!(from.end, to.start);
    }
    assert_eq!(
        graph.successors(&path("C", "w4", "A")),
        vec![&path("A", "w1", "B"), &path("A", "w2", "C")]
    );
}

#[test]
fn test_negative_path_gives_both_directions() {
    let cat = catalogue(vec![("A", vec![], vec![path("A", "w1", "B")])]);
    let graph = PathGraph::from_catalogue(&cat);
    assert_eq!(graph.node_count(), 2);
    assert!(graph.contains(&path("A", "w1", "B")));
    assert!(graph.contains(&path("B", "w1", "A")));
    assert_eq!(path("A", "w1", "B").reversed(), path("B", "w1", "A"));
    // the two directions follow each other
    assert_eq!(graph.edge_count(), 2);
    let cycles = graph.collect_valid_cycles(None);
    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].len(), 2);
}

#[test]
fn test_duplicates_are_one_node() {
    let cat = catalogue(vec![
        ("A", vec![path("A", "w1", "B")], vec![]),
        ("B", vec![path("A", "w1", "B")], vec![path("B", "w1", "A")]),
    ]);
    let graph = PathGraph::from_catalogue(&cat);
    // (A,w1,B) three times, (B,w1,A) once
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn test_tag_is_part_of_identity() {
    let graph = PathGraph::from_paths(vec![
        TransferPath::new("A", "w1", "B", 1u32),
        TransferPath::new("A", "w1", "B", 2u32),
    ]);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_isolated_path_stays_a_node() {
    let cat = catalogue(vec![
        ("A", vec![path("A", "w1", "B")], vec![]),
        ("B", vec![], vec![]),
    ]);
    let graph = PathGraph::from_catalogue(&cat);
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.successors(&path("A", "w1", "B")).is_empty());
    assert!(graph.successors(&path("Z", "w1", "B")).is_empty());
}

#[test]
fn test_empty_graph_has_no_cycles() {
    let graph: PathGraph<u32> = PathGraph::from_catalogue(&PathCatalogue::new());
    assert!(graph.is_empty());
    assert_eq!(graph.valid_cycles().count(), 0);
}

#[test]
fn test_invalid_two_cycle_is_excluded() {
    // both paths begin at A: loops at A and a 2-cycle between them
    let p1 = path("A", "w1", "A");
    let p2 = path("A", "w2", "A");
    // valid 2-cycle with distinct beginnings
    let q1 = path("B", "w3", "C");
    let q2 = path("C", "w4", "B");
    let graph = PathGraph::from_paths(vec![p1.clone(), p2.clone(), q1.clone(), q2.clone()]);

    let all: Vec<Vec<TransferPath>> = graph.simple_cycles().collect();
    assert_eq!(all.len(), 4);

    let valid: Vec<Vec<TransferPath>> = graph.valid_cycles().collect();
    let as_sets: BTreeSet<BTreeSet<TransferPath>> = valid
        .iter()
        .map(|c| c.iter().cloned().collect())
        .collect();
    assert_eq!(valid.len(), 3);
    assert!(as_sets.contains(&BTreeSet::from([q1.clone(), q2.clone()])));
    assert!(as_sets.contains(&BTreeSet::from([p1.clone()])));
    assert!(as_sets.contains(&BTreeSet::from([p2.clone()])));
    assert!(!as_sets.contains(&BTreeSet::from([p1, p2])));
}

#[test]
fn test_every_valid_cycle_has_unique_beginnings() {
    // A <-> B <-> C with negative paths, plus a shortcut A -> C
    let cat = catalogue(vec![
        ("A", vec![path("A", "w5", "C")], vec![path("A", "w1", "B")]),
        ("B", vec![], vec![path("B", "w2", "C")]),
        ("C", vec![], vec![]),
    ]);
    let graph = PathGraph::from_catalogue(&cat);
    let all: Vec<Vec<TransferPath>> = graph.simple_cycles().collect();
    let valid: Vec<Vec<TransferPath>> = graph.valid_cycles().collect();
    assert!(!valid.is_empty());
    assert!(valid.len() < all.len());
    for cycle in valid.iter() {
        let starts: Vec<&str> = cycle.iter().map(|p| p.start.as_str()).collect();
        let unique: BTreeSet<&str> = starts.iter().copied().collect();
        assert_eq!(starts.len(), unique.len());
        assert!(is_valid_cycle(cycle));
        // closed walk
        for (i, p) in cycle.iter().enumerate() {
            assert_eq!(p.end, cycle[(i + 1) % cycle.len()].start);
        }
    }
    let invalid = all.iter().filter(|c| !is_valid_cycle(c.iter())).count();
    assert_eq!(invalid + valid.len(), all.len());
}

#[test]
fn test_limit_and_fresh_passes() {
    let cat = catalogue(vec![
        ("A", vec![], vec![path("A", "w1", "B"), path("A", "w2", "C")]),
        ("B", vec![], vec![path("B", "w3", "C")]),
    ]);
    let graph = PathGraph::from_catalogue(&cat);
    let first: Vec<Vec<TransferPath>> = graph.valid_cycles().collect();
    let second: Vec<Vec<TransferPath>> = graph.valid_cycles().collect();
    assert_eq!(first, second);
    assert!(first.len() > 1);
    assert_eq!(graph.collect_valid_cycles(Some(1)), first[..1].to_vec());
    // rebuilding from the same input gives the same sequence
    let rebuilt = PathGraph::from_catalogue(&cat);
    assert_eq!(rebuilt.collect_valid_cycles(None), first);
}

#[test]
fn test_catalogue_from_json() {
    let json = r#"{
        "A": {"p_paths": [{"start": "A", "via": "w1", "end": "B", "tag": 2}], "n_paths": []},
        "B": {"positive_paths": [{"start": "B", "via": "w2", "end": "A", "tag": 3}]}
    }"#;
    let cat: PathCatalogue = serde_json::from_str(json).unwrap();
    assert_eq!(cat["A"].positive_paths[0].tag, 2);
    assert!(cat["B"].negative_paths.is_empty());
    let graph = PathGraph::from_catalogue(&cat);
    assert_eq!(graph.valid_cycles().count(), 1);
}

#[test]
fn test_paths_in_sorted_order() {
    let graph = PathGraph::from_paths(vec![path("C", "w1", "A"), path("A", "w2", "B")]);
    let listed: Vec<&TransferPath> = graph.paths().collect();
    assert_eq!(listed, vec![&path("A", "w2", "B"), &path("C", "w1", "A")]);
}
