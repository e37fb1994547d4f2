use crabgraph::{
    algo::{
        articulation_points, biconnected_components, connected_components, kruskal,
        maximal_independent_set, prim, strongly_connected_components, triangle_count, Predecessors,
    },
    views::edgelist_with,
    EdgeData, EdgeValues,
};
use std::collections::BTreeSet;





fn undirected(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut g = vec![Vec::new(); n];
    for &(u, v) in edges {
        g[u].push(v);
        g[v].push(u);
    }
    g
}

fn undirected_weighted(n: usize, edges: &[(usize, usize, u64)]) -> Vec<Vec<(usize, u64)>> {
    let mut g = vec![Vec::new(); n];
    for &(u, v, w) in edges {
        g[u].push((v, w));
        g[v].push((u, w));
    }
    g
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * ARTICULATION & BICONNECTIVITY                                                     *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



#[test]
fn path_graph_articulation_points() {
    let g = undirected(4, &[(0, 1), (1, 2), (2, 3)]);
    let mut points = Vec::new();
    articulation_points(&g, &mut points);
    assert_eq!(points, vec![1, 2]);
}

#[test]
fn articulation_points_are_the_multi_component_vertices() {
    // Two triangles joined at 2, plus a pendant vertex on 4.
    let g = undirected(6, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2), (4, 5)]);
    let mut points = Vec::new();
    articulation_points(&g, &mut points);
    let mut components = Vec::new();
    biconnected_components(&g, &mut components);

    for vid in 0..6 {
        let appearances = components.iter().filter(|members| members.contains(&vid)).count();
        assert_eq!(points.contains(&vid), appearances > 1);
    }
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * SPANNING TREES                                                                    *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



#[test]
fn kruskal_on_a_chorded_cycle() {
    let g = undirected_weighted(4, &[(0, 1, 4), (1, 2, 8), (2, 3, 7), (3, 0, 9), (0, 2, 2), (1, 3, 5)]);
    let edges: Vec<EdgeData<usize, u64>> =
        edgelist_with(&g, |g, e| *g.edge_value(e).unwrap()).collect();
    let mut tree = Vec::new();
    let (total, components) = kruskal(&edges, &mut tree);
    assert_eq!(total, 11);
    assert_eq!(components, 1);
    let picked: BTreeSet<(usize, usize)> = tree
        .iter()
        .map(|e| (e.source_id.min(e.target_id), e.source_id.max(e.target_id)))
        .collect();
    assert_eq!(picked, BTreeSet::from([(0, 2), (0, 1), (1, 3)]));
}

#[test]
fn kruskal_and_prim_grow_trees_of_equal_weight() {
    let g = undirected_weighted(
        6,
        &[(0, 1, 3), (1, 2, 5), (2, 3, 1), (3, 4, 6), (4, 5, 2), (5, 0, 4), (1, 4, 2), (2, 5, 7)],
    );
    let edges: Vec<EdgeData<usize, u64>> =
        edgelist_with(&g, |g, e| *g.edge_value(e).unwrap()).collect();
    let mut tree = Vec::new();
    let (kruskal_total, components) = kruskal(&edges, &mut tree);
    assert_eq!(components, 1);
    // A spanning tree of a connected graph has V - 1 edges.
    assert_eq!(tree.len(), 5);

    let mut weights = [0u64; 6];
    prim(
        &g,
        &0,
        |g, e| *g.edge_value(e).unwrap(),
        Predecessors::None,
        &mut weights,
    )
    .unwrap();
    let prim_total: u64 = (1..6).map(|v| weights[v]).sum();
    assert_eq!(kruskal_total, prim_total);
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * COMPONENTS                                                                        *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



#[test]
fn weak_and_strong_components_coincide_on_symmetric_storage() {
    let g = undirected(5, &[(0, 1), (1, 2), (3, 4)]);
    let mut weak = [0usize; 5];
    let weak_count = connected_components(&g, &mut weak).unwrap();
    let mut strong = [0usize; 5];
    let strong_count = strongly_connected_components(&g, &mut strong).unwrap();
    assert_eq!(weak_count, 2);
    assert_eq!(strong_count, 2);
    for a in 0..5 {
        for b in 0..5 {
            assert_eq!(weak[a] == weak[b], strong[a] == strong[b]);
        }
    }
}

#[test]
fn kruskal_component_count_matches_connected_components() {
    let g = undirected_weighted(5, &[(0, 1, 1), (1, 2, 2), (3, 4, 3)]);
    let edges: Vec<EdgeData<usize, u64>> =
        edgelist_with(&g, |g, e| *g.edge_value(e).unwrap()).collect();
    let mut tree = Vec::new();
    let (_, from_kruskal) = kruskal(&edges, &mut tree);

    let unweighted = undirected(5, &[(0, 1), (1, 2), (3, 4)]);
    let mut component = [0usize; 5];
    let from_sweep = connected_components(&unweighted, &mut component).unwrap();
    assert_eq!(from_kruskal, from_sweep);
    // V - k tree edges for k components.
    assert_eq!(tree.len(), 5 - from_kruskal);
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * LOCAL STRUCTURE                                                                   *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



#[test]
fn triangle_count_over_sorted_adjacency() {
    let mut g: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); 4];
    for &(u, v) in &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 0)] {
        g[u].insert(v);
        g[v].insert(u);
    }
    assert_eq!(triangle_count(&g), 2);
}

#[test]
fn independent_set_members_block_all_their_neighbors() {
    let g = undirected(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)]);
    let mut members = Vec::new();
    let count = maximal_independent_set(&g, &0, &mut members).unwrap();
    assert_eq!(count, members.len());
    for &u in &members {
        for &v in &members {
            assert!(u == v || !g[u].contains(&v));
        }
    }
    for candidate in 0..6 {
        assert!(
            members.contains(&candidate) || g[candidate].iter().any(|t| members.contains(t))
        );
    }
}
