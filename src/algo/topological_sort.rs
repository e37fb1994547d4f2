use fixedbitset::FixedBitSet;
use crate::{
    algo::check_sources,
    descriptors::VertexDescriptor,
    errors::GraphResult,
    IndexAdjacencyList, IndexId,
};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * REVERSE POST-ORDER                                                                *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



// Iterative DFS from the given roots. On success appends the reverse post-order of
// every vertex reached to `result` and returns true; a back edge aborts immediately
// with false, leaving `result` untouched.
fn reverse_post_order<GraphType>(
    g: &GraphType,
    roots: Vec<VertexDescriptor<GraphType::VertexIdType>>,
    result: &mut Vec<GraphType::VertexIdType>,
) -> bool
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    let n = g.num_vertices();
    let mut gray = FixedBitSet::with_capacity(n);
    let mut black = FixedBitSet::with_capacity(n);
    let mut finish_order: Vec<GraphType::VertexIdType> = Vec::new();
    for root in roots {
        let root_index = root.id().to_index();
        if gray.contains(root_index) || black.contains(root_index) {
            continue;
        }
        gray.insert(root_index);
        let root_edges = g.edges(&root);
        let mut stack = vec![(root, root_edges)];
        while !stack.is_empty() {
            let next_edge = match stack.last_mut() {
                Some((_, edges)) => edges.next(),
                None => None,
            };
            match next_edge {
                Some(e) => {
                    let index = e.target_id().to_index();
                    if gray.contains(index) {
                        return false;
                    }
                    if !black.contains(index) {
                        gray.insert(index);
                        let target = e.target();
                        let edges = g.edges(&target);
                        stack.push((target, edges));
                    }
                },
                None => {
                    let (vertex, _) = stack.pop().unwrap();
                    let index = vertex.id().to_index();
                    gray.set(index, false);
                    black.insert(index);
                    finish_order.push(vertex.id().clone());
                },
            }
        }
    }
    result.extend(finish_order.into_iter().rev());
    true
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * TOPOLOGICAL SORT                                                                  *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Whole-graph topological sort
///
/// ## Description
/// Append all vertex IDs of `g` to `result` in a topological  order:  for  every  edge
/// `(u, v)`, `u` is placed before `v`.
///
/// ## Returns
/// * `bool` - `true` and a complete order if the graph is acyclic;  `false`  as  soon
/// as a back edge is found, in which case `result` is left as it was.
///
/// ## Complexity
/// Time: O(|V| + |E|). Space: O(|V|).
pub fn topological_sort<GraphType>(g: &GraphType, result: &mut Vec<GraphType::VertexIdType>) -> bool
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    reverse_post_order(g, g.vertices().collect(), result)
}



/// # Single-source topological sort
///
/// ## Description
/// Like [`topological_sort`] restricted to the vertices reachable from `source`.
///
/// ## Returns
/// * `GraphResult<bool>` - `Err(GraphError)` with kind
/// [`OutOfRange`][crate::GraphErrorKind::OutOfRange] if `source` names  no  vertex;
/// the acyclicity flag otherwise.
pub fn topological_sort_from<GraphType>(
    g: &GraphType,
    source: &GraphType::VertexIdType,
    result: &mut Vec<GraphType::VertexIdType>,
) -> GraphResult<bool>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    topological_sort_multi(g, std::slice::from_ref(source), result)
}



/// # Multi-source topological sort
///
/// ## Description
/// Like [`topological_sort`] restricted to the vertices reachable from any  of  the
/// given sources.
pub fn topological_sort_multi<GraphType>(
    g: &GraphType,
    sources: &[GraphType::VertexIdType],
    result: &mut Vec<GraphType::VertexIdType>,
) -> GraphResult<bool>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    const FUNCTION_PATH: &str = "algo::topological_sort";
    check_sources(g, sources, FUNCTION_PATH)?;
    let roots = sources.iter().map(|source| g.find_vertex(source).unwrap()).collect();
    Ok(reverse_post_order(g, roots, result))
}
