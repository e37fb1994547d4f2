use crabgraph::{
    algo::{
        bellman_ford_shortest_distances, bellman_ford_shortest_paths, dijkstra_shortest_distances,
        dijkstra_shortest_paths, find_negative_cycle, Predecessors, Weight,
    },
    AdjacencyList, EdgeDescriptor, EdgeValues,
};





// CLRS figure 24.6: s, t, x, y, z indexed 0..4; source s.
fn clrs() -> Vec<Vec<(usize, i64)>> {
    vec![
        vec![(1, 10), (3, 5)],
        vec![(2, 1), (3, 2)],
        vec![(4, 4)],
        vec![(1, 3), (2, 9), (4, 2)],
        vec![(2, 6), (0, 7)],
    ]
}

fn weight(g: &Vec<Vec<(usize, i64)>>, e: &EdgeDescriptor<usize>) -> i64 {
    *g.edge_value(e).unwrap()
}



#[test]
fn dijkstra_clrs_distances_and_tree() {
    let g = clrs();
    let mut distances = [0i64; 5];
    let mut predecessor = [usize::MAX; 5];
    dijkstra_shortest_paths(&g, &[0], weight, &mut distances, Predecessors::Out(&mut predecessor))
        .unwrap();
    assert_eq!(distances, [0, 8, 9, 5, 7]);

    // Walking the predecessor chain from any vertex reproduces its distance.
    for v in 1..5 {
        let mut cost = 0;
        let mut current = v;
        while current != 0 {
            let p = predecessor[current];
            cost += weight(&g, &g.find_vertex_edge(&p, &current).unwrap());
            current = p;
        }
        assert_eq!(cost, distances[v]);
    }
}

#[test]
fn bellman_ford_matches_dijkstra_without_negative_cycles() {
    let g = clrs();
    let mut dijkstra = [0i64; 5];
    dijkstra_shortest_distances(&g, &[0], weight, &mut dijkstra).unwrap();
    let mut bellman_ford = [0i64; 5];
    let witness = bellman_ford_shortest_distances(&g, &[0], weight, &mut bellman_ford).unwrap();
    assert_eq!(witness, None);
    assert_eq!(dijkstra, bellman_ford);
}

#[test]
fn bellman_ford_negative_cycle_witness_and_extraction() {
    // 0 -> 1 -> 2 -> 0 with total weight -1.
    let g: Vec<Vec<(usize, i64)>> = vec![vec![(1, 1)], vec![(2, 1)], vec![(0, -3)]];
    let mut distances = [0i64; 3];
    let mut predecessor = [usize::MAX; 3];
    let witness = bellman_ford_shortest_paths(
        &g,
        &[0],
        weight,
        &mut distances,
        Predecessors::Out(&mut predecessor),
    )
    .unwrap();
    assert!(witness.is_some());

    let mut cycle = Vec::new();
    find_negative_cycle(&predecessor, &witness, &mut cycle);
    let mut members = cycle.clone();
    members.sort_unstable();
    assert_eq!(members, vec![0, 1, 2]);

    // The listed cycle really is a cycle, and its weight is negative.
    let total: i64 = cycle
        .iter()
        .zip(cycle.iter().cycle().skip(1))
        .map(|(&v, &u)| weight(&g, &g.find_vertex_edge(&u, &v).unwrap()))
        .sum();
    assert_eq!(total, -1);
}

#[test]
fn unreached_vertices_keep_the_infinite_distance() {
    let g: Vec<Vec<(usize, i64)>> = vec![vec![(1, 2)], vec![], vec![(0, 1)]];
    let mut distances = [0i64; 3];
    dijkstra_shortest_distances(&g, &[0], weight, &mut distances).unwrap();
    assert_eq!(distances[2], i64::INFINITE);
    let mut distances = [0i64; 3];
    bellman_ford_shortest_distances(&g, &[0], weight, &mut distances).unwrap();
    assert_eq!(distances[2], i64::INFINITE);
}

#[test]
fn multi_source_runs_agree_between_the_two_algorithms() {
    let g: Vec<Vec<(usize, i64)>> = vec![
        vec![(1, 7)],
        vec![(2, 7)],
        vec![],
        vec![(2, 1), (0, 1)],
    ];
    let mut dijkstra = [0i64; 4];
    dijkstra_shortest_distances(&g, &[0, 3], weight, &mut dijkstra).unwrap();
    let mut bellman_ford = [0i64; 4];
    bellman_ford_shortest_distances(&g, &[0, 3], weight, &mut bellman_ford).unwrap();
    assert_eq!(dijkstra, bellman_ford);
    assert_eq!(dijkstra[2], 1);
}
