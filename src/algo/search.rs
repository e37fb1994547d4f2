use std::collections::VecDeque;
use fixedbitset::FixedBitSet;
use crate::{
    algo::check_sources,
    errors::GraphResult,
    visitors::Visitor,
    IndexAdjacencyList, IndexId,
};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * BREADTH-FIRST SEARCH                                                              *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Multi-source breadth-first search with a visitor
///
/// ## Description
/// Traverses every vertex reachable from the given sources in  level  order,  driving
/// the caller's [`Visitor`] instead of yielding records (use the
/// [BFS view][crate::views::vertices_bfs] for the  latter).  Events,  in  order  per
/// vertex: `on_examine_vertex` when popped, `on_examine_edge` per outgoing edge,
/// `on_tree_edge` + `on_discover_vertex` when the edge finds a new vertex,  and
/// `on_finish_vertex` when the edge scan is done. `on_initialize_vertex` fires  once
/// per vertex before the traversal; `on_discover_vertex` fires on  each  source  when
/// it is seeded.
///
/// ## Returns
/// * `GraphResult<()>` - `Err(GraphError)` with kind
/// [`OutOfRange`][crate::GraphErrorKind::OutOfRange] if some source  ID  names  no
/// vertex; `Ok(())` otherwise.
///
/// ## Complexity
/// Time: O(|V| + |E|). Space: O(|V|).
pub fn breadth_first_search_multi<GraphType, VisitorType>(
    g: &GraphType,
    sources: &[GraphType::VertexIdType],
    visitor: &mut VisitorType,
) -> GraphResult<()>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    VisitorType: Visitor<GraphType>,
{
    const FUNCTION_PATH: &str = "algo::breadth_first_search";
    check_sources(g, sources, FUNCTION_PATH)?;

    for u in g.vertices() {
        visitor.on_initialize_vertex(g, &u);
    }

    let mut visited = FixedBitSet::with_capacity(g.num_vertices());
    let mut queue = VecDeque::new();
    for source in sources {
        let index = source.to_index();
        if !visited.contains(index) {
            visited.insert(index);
            let u = g.find_vertex(source).unwrap();
            visitor.on_discover_vertex(g, &u);
            queue.push_back(u);
        }
    }

    while let Some(u) = queue.pop_front() {
        visitor.on_examine_vertex(g, &u);
        for e in g.edges(&u) {
            visitor.on_examine_edge(g, &e);
            let index = e.target_id().to_index();
            if !visited.contains(index) {
                visited.insert(index);
                visitor.on_tree_edge(g, &e);
                let target = e.target();
                visitor.on_discover_vertex(g, &target);
                queue.push_back(target);
            }
        }
        visitor.on_finish_vertex(g, &u);
    }
    Ok(())
}



/// # Breadth-first search with a visitor
///
/// ## Description
/// Single-source form of [`breadth_first_search_multi`].
pub fn breadth_first_search<GraphType, VisitorType>(
    g: &GraphType,
    source: &GraphType::VertexIdType,
    visitor: &mut VisitorType,
) -> GraphResult<()>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    VisitorType: Visitor<GraphType>,
{
    breadth_first_search_multi(g, std::slice::from_ref(source), visitor)
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * DEPTH-FIRST SEARCH                                                                *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Depth-first search with a visitor
///
/// ## Description
/// Traverses every vertex reachable from `source` depth-first, driving the  caller's
/// [`Visitor`]. Every examined edge is classified exactly once through the three-color
/// scheme: `on_tree_edge` (undiscovered target), `on_back_edge` (target on the  stack
/// - a cycle), `on_forward_or_cross_edge` (target finished); each is followed  by
/// `on_finish_edge`. `on_start_vertex` fires once on the source;  `on_finish_vertex`
/// fires when a vertex's edge scan completes.
///
/// ## Returns
/// * `GraphResult<()>` - `Err(GraphError)` with kind
/// [`OutOfRange`][crate::GraphErrorKind::OutOfRange] if `source` names  no  vertex;
/// `Ok(())` otherwise.
///
/// ## Details
/// Iterative, with an explicit stack of (vertex, remaining edges)  frames;  deep
/// graphs cannot overflow the call stack.
///
/// ## Complexity
/// Time: O(|V| + |E|). Space: O(|V|).
pub fn depth_first_search<GraphType, VisitorType>(
    g: &GraphType,
    source: &GraphType::VertexIdType,
    visitor: &mut VisitorType,
) -> GraphResult<()>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    VisitorType: Visitor<GraphType>,
{
    const FUNCTION_PATH: &str = "algo::depth_first_search";
    check_sources(g, std::slice::from_ref(source), FUNCTION_PATH)?;

    let n = g.num_vertices();
    let mut gray = FixedBitSet::with_capacity(n);
    let mut black = FixedBitSet::with_capacity(n);

    let root = g.find_vertex(source).unwrap();
    visitor.on_initialize_vertex(g, &root);
    visitor.on_start_vertex(g, &root);
    gray.insert(source.to_index());
    visitor.on_discover_vertex(g, &root);

    let root_edges = g.edges(&root);
    let mut stack = vec![(root, root_edges)];
    while !stack.is_empty() {
        let next_edge = match stack.last_mut() {
            Some((_, edges)) => edges.next(),
            None => None,
        };
        match next_edge {
            Some(e) => {
                visitor.on_examine_edge(g, &e);
                let index = e.target_id().to_index();
                if gray.contains(index) {
                    visitor.on_back_edge(g, &e);
                    visitor.on_finish_edge(g, &e);
                } else if black.contains(index) {
                    visitor.on_forward_or_cross_edge(g, &e);
                    visitor.on_finish_edge(g, &e);
                } else {
                    visitor.on_tree_edge(g, &e);
                    visitor.on_finish_edge(g, &e);
                    gray.insert(index);
                    let target = e.target();
                    visitor.on_discover_vertex(g, &target);
                    let edges = g.edges(&target);
                    stack.push((target, edges));
                }
            },
            None => {
                let (vertex, _) = stack.pop().unwrap();
                let index = vertex.id().to_index();
                gray.set(index, false);
                black.insert(index);
                visitor.on_finish_vertex(g, &vertex);
            },
        }
    }
    Ok(())
}
