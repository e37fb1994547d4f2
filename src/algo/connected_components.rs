use std::collections::VecDeque;
use fixedbitset::FixedBitSet;
use crate::{
    algo::check_distances_len,
    errors::GraphResult,
    BidirectionalAdjacencyList, IndexAdjacencyList, IndexId,
};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * WEAK CONNECTIVITY                                                                 *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Connected components
///
/// ## Description
/// Label every vertex of an undirected graph (stored as symmetric  half-edge  pairs)
/// with the ID of its connected component: one breadth-first  sweep  of  the  whole
/// graph. Component IDs are consecutive integers starting at 0, assigned in the order
/// the components are first touched.
///
/// ## Arguments
/// * `g` : `&GraphType` - the graph; its edge relation is taken  as-is,  so  for  a
/// meaningful *weak* connectivity the storage must be symmetric.
/// * `component` : `&mut [usize]` - output, sized at least `num_vertices`; entry  `v`
/// receives the component ID of vertex `v`.
///
/// ## Returns
/// * `GraphResult<usize>` - the number of components, or  `Err(GraphError)`  with
/// kind [`OutOfRange`][crate::GraphErrorKind::OutOfRange] if `component` is  too
/// small.
///
/// ## Complexity
/// Time: O(|V| + |E|). Space: O(|V|).
pub fn connected_components<GraphType>(g: &GraphType, component: &mut [usize]) -> GraphResult<usize>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    const FUNCTION_PATH: &str = "algo::connected_components";
    let n = g.num_vertices();
    check_distances_len(component, n, FUNCTION_PATH)?;

    let mut visited = FixedBitSet::with_capacity(n);
    let mut count = 0usize;
    for root in g.vertices() {
        let root_index = root.id().to_index();
        if visited.contains(root_index) {
            continue;
        }
        visited.insert(root_index);
        component[root_index] = count;
        let mut queue = VecDeque::from([root]);
        while let Some(u) = queue.pop_front() {
            for e in g.edges(&u) {
                let index = e.target_id().to_index();
                if !visited.contains(index) {
                    visited.insert(index);
                    component[index] = count;
                    queue.push_back(e.target());
                }
            }
        }
        count += 1;
    }
    Ok(count)
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * STRONG CONNECTIVITY                                                               *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



// First Kosaraju pass: DFS finish order over the whole graph, iterative.
fn finish_order<GraphType>(g: &GraphType) -> Vec<usize>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    let n = g.num_vertices();
    let mut visited = FixedBitSet::with_capacity(n);
    let mut order = Vec::with_capacity(n);
    for root in g.vertices() {
        let root_index = root.id().to_index();
        if visited.contains(root_index) {
            continue;
        }
        visited.insert(root_index);
        let root_edges = g.edges(&root);
        let mut stack = vec![(root_index, root_edges)];
        while !stack.is_empty() {
            let next_edge = match stack.last_mut() {
                Some((_, edges)) => edges.next(),
                None => None,
            };
            match next_edge {
                Some(e) => {
                    let index = e.target_id().to_index();
                    if !visited.contains(index) {
                        visited.insert(index);
                        let target = e.target();
                        let edges = g.edges(&target);
                        stack.push((index, edges));
                    }
                },
                None => {
                    let (index, _) = stack.pop().unwrap();
                    order.push(index);
                },
            }
        }
    }
    order
}

// Second Kosaraju pass: sweep the reverse finish order, labeling each cluster that is
// reachable against the edge direction.
fn label_transposed<NeighborsFnType>(
    finish_order: &[usize],
    in_neighbors: NeighborsFnType,
    component: &mut [usize],
) -> usize
where
    NeighborsFnType: Fn(usize) -> Vec<usize>,
{
    let mut visited = FixedBitSet::with_capacity(finish_order.len());
    let mut count = 0usize;
    for &root in finish_order.iter().rev() {
        if visited.contains(root) {
            continue;
        }
        visited.insert(root);
        let mut stack = vec![root];
        while let Some(index) = stack.pop() {
            component[index] = count;
            for source in in_neighbors(index) {
                if !visited.contains(source) {
                    visited.insert(source);
                    stack.push(source);
                }
            }
        }
        count += 1;
    }
    count
}



/// # Strongly connected components
///
/// ## Description
/// Label every vertex of a directed graph with the ID of its  strongly  connected
/// component, using Kosaraju's two DFS passes. This overload  materialises  the
/// transpose adjacency for the second pass; over a
/// [bidirectional][BidirectionalAdjacencyList] graph, prefer
/// [`strongly_connected_components_bidirectional`], which reads  the  stored  incoming
/// edges instead.
///
/// ## Returns
/// * `GraphResult<usize>` - the number of strong components, or  `Err(GraphError)`
/// with kind [`OutOfRange`][crate::GraphErrorKind::OutOfRange] if `component` is  too
/// small.
///
/// ## Complexity
/// Time: O(|V| + |E|). Space: O(|V| + |E|) for the materialised transpose.
pub fn strongly_connected_components<GraphType>(
    g: &GraphType,
    component: &mut [usize],
) -> GraphResult<usize>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    const FUNCTION_PATH: &str = "algo::strongly_connected_components";
    let n = g.num_vertices();
    check_distances_len(component, n, FUNCTION_PATH)?;

    let mut transpose: Vec<Vec<usize>> = Vec::new();
    transpose.resize_with(n, Vec::new);
    for u in g.vertices() {
        let uindex = u.id().to_index();
        for e in g.edges(&u) {
            transpose[e.target_id().to_index()].push(uindex);
        }
    }

    let order = finish_order(g);
    Ok(label_transposed(&order, |index| transpose[index].clone(), component))
}



/// # Strongly connected components over a bidirectional graph
///
/// ## Description
/// Like [`strongly_connected_components`], with the second pass walking  the  stored
/// [`in_edges`][BidirectionalAdjacencyList::in_edges] - no transpose is materialised.
///
/// ## Complexity
/// Time: O(|V| + |E|). Space: O(|V|).
pub fn strongly_connected_components_bidirectional<GraphType>(
    g: &GraphType,
    component: &mut [usize],
) -> GraphResult<usize>
where
    GraphType: IndexAdjacencyList + BidirectionalAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    const FUNCTION_PATH: &str = "algo::strongly_connected_components_bidirectional";
    let n = g.num_vertices();
    check_distances_len(component, n, FUNCTION_PATH)?;

    let order = finish_order(g);
    Ok(label_transposed(
        &order,
        |index| {
            let v = g.find_vertex(&GraphType::VertexIdType::from_index(index)).unwrap();
            g.in_edges(&v).map(|e| e.source_id().to_index()).collect()
        },
        component,
    ))
}





#[cfg(test)]
mod connected_components_tests {
    use super::*;
    use crate::Bidirectional;

    #[test]
    fn weak_components_label_reachability_clusters() {
        // Undirected: {0, 1, 2} and {3, 4}, stored symmetrically.
        let g: Vec<Vec<usize>> = vec![vec![1], vec![0, 2], vec![1], vec![4], vec![3]];
        let mut component = [0usize; 5];
        assert_eq!(connected_components(&g, &mut component).unwrap(), 2);
        assert_eq!(component[0], component[1]);
        assert_eq!(component[1], component[2]);
        assert_eq!(component[3], component[4]);
        assert_ne!(component[0], component[3]);
    }

    #[test]
    fn isolated_vertices_form_singleton_components() {
        let g: Vec<Vec<usize>> = vec![vec![], vec![], vec![]];
        let mut component = [0usize; 3];
        assert_eq!(connected_components(&g, &mut component).unwrap(), 3);
    }

    #[test]
    fn strong_components_split_one_way_links() {
        // 0 ⇄ 1 form a strong component; 2 is reachable but cannot return.
        let g: Vec<Vec<usize>> = vec![vec![1], vec![0, 2], vec![]];
        let mut component = [0usize; 3];
        assert_eq!(strongly_connected_components(&g, &mut component).unwrap(), 2);
        assert_eq!(component[0], component[1]);
        assert_ne!(component[0], component[2]);
    }

    #[test]
    fn strong_components_on_two_cycles() {
        let g: Vec<Vec<usize>> = vec![vec![1], vec![2], vec![0, 3], vec![4], vec![3]];
        let mut component = [0usize; 5];
        assert_eq!(strongly_connected_components(&g, &mut component).unwrap(), 2);
        assert_eq!(component[0], component[1]);
        assert_eq!(component[1], component[2]);
        assert_eq!(component[3], component[4]);
    }

    #[test]
    fn bidirectional_overload_agrees_with_the_general_one() {
        let forward: Vec<Vec<usize>> = vec![vec![1], vec![2], vec![0, 3], vec![4], vec![3]];
        let mut general = [0usize; 5];
        strongly_connected_components(&forward, &mut general).unwrap();
        let g = Bidirectional::new(forward).unwrap();
        let mut bidirectional = [0usize; 5];
        strongly_connected_components_bidirectional(&g, &mut bidirectional).unwrap();
        for (a, b) in general.iter().zip(bidirectional.iter()) {
            for (c, d) in general.iter().zip(bidirectional.iter()) {
                assert_eq!(a == c, b == d);
            }
        }
    }
}
