#![no_main]

use libfuzzer_sys::fuzz_target;
use netscope::prelude::*;

/// First byte is the node count, then `(source, target, weight)` byte triples.
fn decode(data: &[u8]) -> Option<DirectedGraph<(), f64>> {
    let (&count, rest) = data.split_first()?;
    let nodes = usize::from(count % 16) + 1;
    let edges: Vec<(usize, usize, f64)> = rest
        .chunks_exact(3)
        .map(|c| {
            (
                usize::from(c[0]) % nodes,
                usize::from(c[1]) % nodes,
                f64::from(c[2] as i8) / 4.0,
            )
        })
        .collect();
    DirectedGraph::from_weighted_edges(nodes, &edges).ok()
}

fuzz_target!(|data: &[u8]| {
    let Some(graph) = decode(data) else {
        return;
    };
    let weight = |e| graph.weight(e);
    let source = NodeId::new(0);
    let nodes = graph.node_count();

    for directed in [true, false] {
        let bfs = breadth_first_search(&graph, source, directed, |_, _, _| true).unwrap();
        let dfs = depth_first_search(&graph, source, directed, |_, _, _| true).unwrap();
        assert_eq!(bfs.visited().len(), dfs.visited().len());

        let bellman_ford = find_shortest_path(&graph, source, directed, weight).unwrap();
        let all_pairs = find_all_pair_shortest_path(&graph, directed, weight).unwrap();
        if bellman_ford.has_negative_cycle() {
            assert!(all_pairs.has_negative_cycle());
        }

        for t in 0..nodes {
            let target = NodeId::new(t);
            assert_eq!(
                bfs.has_path_to(target).unwrap(),
                bfs.distance_to(target).unwrap().is_finite()
            );
            if !bellman_ford.has_negative_cycle() {
                assert_eq!(
                    bellman_ford.has_path_to(target).unwrap(),
                    bellman_ford.distance_to(target).unwrap().is_finite()
                );
                assert_eq!(
                    bellman_ford.has_path_to(target).unwrap(),
                    bfs.has_path_to(target).unwrap()
                );
            }
        }

        if let Ok(dijkstra) = find_path(&graph, source, directed, weight) {
            for t in 0..nodes {
                let target = NodeId::new(t);
                assert_eq!(
                    dijkstra.has_path_to(target).unwrap(),
                    bfs.has_path_to(target).unwrap()
                );
            }
        }

        let _ = get_hits_scores(&graph, directed).unwrap();
        if let Ok(pagerank) = get_pageranks(&graph, weight, directed) {
            let total: f64 = pagerank.scores().values().iter().sum();
            assert!((total - 1.0).abs() < 1e-6);
        }

        match compute_all(&graph, directed, weight) {
            Ok(stats) => {
                let diameter = stats.diameter().unwrap();
                for (_, ecc) in stats.eccentricity_map().unwrap().iter() {
                    assert!(ecc <= diameter);
                }
            }
            Err(err) => assert!(matches!(err, Error::NegativeCycle { .. })),
        }
    }

    let kruskal = find_kruskal_tree(&graph, weight).unwrap();
    let prim = find_prim_tree(&graph, weight).unwrap();
    assert_eq!(kruskal.edges().len() + kruskal.tree_count(), nodes);
    if kruskal.tree_count() == 1 {
        assert!((kruskal.weight() - prim.weight()).abs() < 1e-9);
    }
});
