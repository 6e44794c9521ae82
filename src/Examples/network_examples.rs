use crate::settings::AnalysisSettings;

/// runs one demonstration task
/// 0 - complex edges of a bipartite network, roles given and recovered from names
/// 1 - path graph and its valid cycles
/// 2 - lumped (LPA) stoichiometric matrices
/// 3 - all cliques of a small graph
pub fn network_examples(task: usize, settings: &AnalysisSettings) {
    match task {
        0 => {
            // BIPARTITE COMPLEX/REACTION GRAPH
            use crate::NetworkStructure::bipartite_edges::BipartiteNetwork;
            // A + B -> C (w1), C -> A + B (w2), C -> D (w3)
            let arcs: Vec<(String, String)> = vec![
                ("A+B", "w1"),
                ("w1", "C"),
                ("C", "w2"),
                ("w2", "A+B"),
                ("C", "w3"),
                ("w3", "D"),
            ]
            .into_iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();
            match BipartiteNetwork::from_untagged_arcs(&arcs, &settings.naming) {
                Ok(network) => {
                    println!("complexes: {:?}", network.complexes());
                    println!("reactions: {:?}", network.reactions());
                    for (complex, edges) in network.complex_edges() {
                        println!("{} -> {:?}", complex, edges);
                    }
                }
                Err(e) => println!("roles could not be recovered: {}", e),
            }
        }
        1 => {
            // PATH GRAPH AND VALID CYCLES
            use crate::NetworkStructure::path_graph::{
                PathCatalogue, PathGraph, SubstancePaths, TransferPath,
            };
            let mut catalogue: PathCatalogue = PathCatalogue::new();
            catalogue.insert(
                "A".to_string(),
                SubstancePaths {
                    positive_paths: vec![TransferPath::new("A", "w1", "C", 1)],
                    negative_paths: vec![TransferPath::new("A", "w2", "B", 1)],
                },
            );
            catalogue.insert(
                "B".to_string(),
                SubstancePaths {
                    positive_paths: vec![],
                    negative_paths: vec![TransferPath::new("B", "w3", "C", 2)],
                },
            );
            catalogue.insert(
                "C".to_string(),
                SubstancePaths {
                    positive_paths: vec![TransferPath::new("C", "w4", "A", 1)],
                    negative_paths: vec![],
                },
            );
            let graph = PathGraph::from_catalogue(&catalogue);
            println!(
                "path graph: {} paths, {} arcs",
                graph.node_count(),
                graph.edge_count()
            );
            for cycle in settings.collect_valid_cycles(&graph) {
                let shown: Vec<String> = cycle
                    .iter()
                    .map(|p| format!("{}-[{}]->{}", p.start, p.via, p.end))
                    .collect();
                println!("valid cycle: {}", shown.join(", "));
            }
        }
        2 => {
            // LUMPED STOICHIOMETRIC MATRICES
            use crate::NetworkStructure::lpa_matrices::lpa_alpha_beta;
            use nalgebra::DMatrix;
            // substances S, E, ES, P ; S + E -> ES, ES -> S + E, ES -> P + E
            #[rustfmt::skip]
            let alpha = DMatrix::from_row_slice(4, 3, &[
                1.0, 0.0, 0.0,
                1.0, 0.0, 0.0,
                0.0, 1.0, 1.0,
                0.0, 0.0, 0.0,
            ]);
            #[rustfmt::skip]
            let beta = DMatrix::from_row_slice(4, 3, &[
                0.0, 1.0, 0.0,
                0.0, 1.0, 1.0,
                1.0, 0.0, 0.0,
                0.0, 0.0, 1.0,
            ]);
            match lpa_alpha_beta(&alpha, &beta, &[0, 3]) {
                Ok(lumped) => lumped.pretty_print(),
                Err(e) => println!("LPA failed: {}", e),
            }
        }
        3 => {
            // ALL CLIQUES
            use std::collections::{BTreeMap, BTreeSet};
            let edges = [("a", "b"), ("a", "c"), ("b", "c"), ("c", "d"), ("b", "d"), ("d", "e")];
            let mut graph: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
            for (x, y) in edges {
                graph.entry(x).or_default().insert(y);
                graph.entry(y).or_default().insert(x);
            }
            for clique in settings.clique_enumerator(&graph) {
                println!("clique: {:?}", clique);
            }
        }
        _ => println!("no such example: {}", task),
    }
}
