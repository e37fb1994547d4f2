use crabgraph::{
    algo::{breadth_first_search, topological_sort},
    views::{
        edges_dfs, topological_sort as topological_sort_view, topological_sort_safe, vertices_bfs,
        CancelSearch, DfsEdgeKind,
    },
    Visitor,
};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * BFS LEVEL ORDER                                                                   *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



#[test]
fn bfs_visits_the_tree_level_by_level() {
    // 0 -> {1, 2}, 1 -> {3, 4}, 2 -> {5}.
    let g: Vec<Vec<usize>> = vec![vec![1, 2], vec![3, 4], vec![5], vec![], vec![], vec![]];
    let mut view = vertices_bfs(&g, &0);
    let mut levels: Vec<Vec<usize>> = Vec::new();
    while let Some(record) = view.next() {
        let depth = view.depth();
        if levels.len() <= depth {
            levels.push(Vec::new());
        }
        levels[depth].push(record.id);
    }
    assert_eq!(levels, vec![vec![0], vec![1, 2], vec![3, 4, 5]]);
}

#[test]
fn bfs_view_and_bfs_algorithm_agree_on_levels() {
    struct Depths {
        parent: Vec<usize>,
        depth: Vec<usize>,
    }
    impl Visitor<Vec<Vec<usize>>> for Depths {
        fn on_tree_edge(&mut self, _g: &Vec<Vec<usize>>, e: &crabgraph::EdgeDescriptor<usize>) {
            self.parent[*e.target_id()] = *e.source_id();
            self.depth[*e.target_id()] = self.depth[*e.source_id()] + 1;
        }
    }

    let g: Vec<Vec<usize>> = vec![vec![1, 2], vec![3, 4], vec![5], vec![], vec![], vec![]];
    let mut visitor = Depths { parent: vec![0; 6], depth: vec![0; 6] };
    breadth_first_search(&g, &0, &mut visitor).unwrap();

    let mut view = vertices_bfs(&g, &0);
    while let Some(record) = view.next() {
        assert_eq!(view.depth(), visitor.depth[record.id]);
    }
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * DFS CLASSIFICATION                                                                *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



#[test]
fn every_reachable_edge_is_classified_exactly_once() {
    let g: Vec<Vec<usize>> = vec![vec![1, 2], vec![2, 3], vec![0], vec![3]];
    let crossed: Vec<_> = edges_dfs(&g, &0).collect();
    let reachable_edges: usize = g.iter().map(|targets| targets.len()).sum();
    assert_eq!(crossed.len(), reachable_edges);
    let backs = crossed.iter().filter(|(kind, _)| *kind == DfsEdgeKind::Back).count();
    // 2 -> 0 closes the only plain cycle; 3 -> 3 is a self-loop, also a back edge.
    assert_eq!(backs, 2);
}

#[test]
fn back_edges_exist_exactly_on_cyclic_graphs() {
    let acyclic: Vec<Vec<usize>> = vec![vec![1, 2], vec![3], vec![3], vec![]];
    assert!(edges_dfs(&acyclic, &0).all(|(kind, _)| kind != DfsEdgeKind::Back));
    let cyclic: Vec<Vec<usize>> = vec![vec![1], vec![2], vec![0]];
    assert!(edges_dfs(&cyclic, &0).any(|(kind, _)| kind == DfsEdgeKind::Back));
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * TOPOLOGICAL SORT                                                                  *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



fn position(order: &[usize], vid: usize) -> usize {
    order.iter().position(|&other| other == vid).unwrap()
}

#[test]
fn diamond_sorts_topologically() {
    // 0 -> {1, 2}, 1 -> 3, 2 -> 3.
    let g: Vec<Vec<usize>> = vec![vec![1, 2], vec![3], vec![3], vec![]];
    let mut order = Vec::new();
    assert!(topological_sort(&g, &mut order));
    assert_eq!(order.len(), 4);
    for vid in 0..4 {
        assert_eq!(order.iter().filter(|&&other| other == vid).count(), 1);
    }
    assert!(position(&order, 0) < position(&order, 1));
    assert!(position(&order, 0) < position(&order, 2));
    assert!(position(&order, 1) < position(&order, 3));
    assert!(position(&order, 2) < position(&order, 3));
}

#[test]
fn view_and_algorithm_produce_consistent_orders() {
    let g: Vec<Vec<usize>> = vec![vec![2], vec![2], vec![3, 4], vec![], vec![]];
    let mut from_algorithm = Vec::new();
    assert!(topological_sort(&g, &mut from_algorithm));
    let from_view: Vec<usize> = topological_sort_view(&g).map(|record| record.id).collect();
    for (uid, targets) in g.iter().enumerate() {
        for &vid in targets {
            assert!(position(&from_algorithm, uid) < position(&from_algorithm, vid));
            assert!(position(&from_view, uid) < position(&from_view, vid));
        }
    }
}

#[test]
fn safe_view_returns_a_cycle_witness() {
    let g: Vec<Vec<usize>> = vec![vec![1], vec![2], vec![1], vec![]];
    let witness = topological_sort_safe(&g).err().unwrap();
    // The reported vertex closes the back edge of the cycle {1, 2}.
    assert!(witness == 1 || witness == 2);
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * CANCELLATION                                                                      *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



#[test]
fn cancel_all_yields_nothing_further() {
    let g: Vec<Vec<usize>> = vec![vec![1, 2], vec![3, 4], vec![5], vec![], vec![], vec![]];
    let mut view = vertices_bfs(&g, &0);
    view.next().unwrap();
    view.next().unwrap();
    view.cancel(CancelSearch::CancelAll);
    assert!(view.next().is_none());
    assert_eq!(view.num_visited(), 2);
}

#[test]
fn cancel_branch_excludes_all_descendants_of_the_cancelled_vertex() {
    // 1's descendants are {3, 4, 6}; 6 stays reachable only through 4.
    let g: Vec<Vec<usize>> =
        vec![vec![1, 2], vec![3, 4], vec![5], vec![], vec![6], vec![], vec![]];
    let mut view = vertices_bfs(&g, &0);
    let mut yielded = Vec::new();
    while let Some(record) = view.next() {
        if record.id == 1 {
            view.cancel(CancelSearch::CancelBranch);
        }
        yielded.push(record.id);
    }
    assert_eq!(yielded, vec![0, 1, 2, 5]);
}

#[test]
fn num_visited_counts_steps_not_construction() {
    let g: Vec<Vec<usize>> = vec![vec![1], vec![]];
    let view = vertices_bfs(&g, &0);
    assert_eq!(view.num_visited(), 0);
    let mut view = view;
    view.next().unwrap();
    assert_eq!(view.num_visited(), 1);
}
