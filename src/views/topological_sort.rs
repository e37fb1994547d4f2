use fixedbitset::FixedBitSet;
use crate::{
    descriptors::VertexDescriptor,
    records::VertexData,
    views::CancelSearch,
    IndexAdjacencyList, IndexId,
};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * ORDER MATERIALISATION                                                             *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



// Depth-first search from every unvisited vertex, collecting the post-order and
// reversing it. With detect_cycles, a recursion-stack bit vector exposes back edges;
// the second return value is then the vertex that closed the first cycle found, and
// the order is abandoned where detection stopped.
fn build_order<GraphType>(
    g: &GraphType,
    detect_cycles: bool,
) -> (Vec<VertexDescriptor<GraphType::VertexIdType>>, Option<GraphType::VertexIdType>)
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    let n = g.num_vertices();
    let mut visited = FixedBitSet::with_capacity(n);
    let mut on_stack = FixedBitSet::with_capacity(n);
    let mut post_order: Vec<VertexDescriptor<GraphType::VertexIdType>> = Vec::with_capacity(n);
    for root in g.vertices() {
        if visited.contains(root.id().to_index()) {
            continue;
        }
        visited.insert(root.id().to_index());
        on_stack.insert(root.id().to_index());
        let mut stack = vec![(root.clone(), g.edges(&root))];
        while !stack.is_empty() {
            let next_edge = match stack.last_mut() {
                Some((_, edges)) => edges.next(),
                None => None,
            };
            match next_edge {
                Some(e) => {
                    let index = e.target_id().to_index();
                    if detect_cycles && on_stack.contains(index) {
                        return (post_order, Some(e.target_id().clone()));
                    }
                    if !visited.contains(index) {
                        visited.insert(index);
                        on_stack.insert(index);
                        let target = e.target();
                        let edges = g.edges(&target);
                        stack.push((target, edges));
                    }
                },
                None => {
                    let (vertex, _) = stack.pop().unwrap();
                    on_stack.set(vertex.id().to_index(), false);
                    post_order.push(vertex);
                },
            }
        }
    }
    post_order.reverse();
    (post_order, None)
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * TOPOLOGICAL SORT VIEW                                                             *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Topological order view
///
/// ## Description
/// Unlike the other search views, this one materialises its complete order  eagerly:
/// construction runs a depth-first search from every unvisited vertex,  collects  the
/// post-order and reverses it; iteration then  merely  walks  the  buffer,  yielding
/// [`VertexData`] records. Created with [`topological_sort`], [`topological_sort_with`]
/// or the `_safe` factories.
///
/// ## Details
/// On an acyclic graph the yielded order places every edge's source before its target.
/// On a cyclic graph the order produced by the plain factories is  not  a  topological
/// order (none exists) but iteration is still well defined  and  terminates;  use
/// [`topological_sort_safe`] to detect the cycle instead.
///
/// The order is flat, so [`CancelBranch`][CancelSearch::CancelBranch] has no  branch
/// to prune and behaves exactly like [`CancelAll`][CancelSearch::CancelAll].
pub struct TopologicalSort<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    graph: &'a GraphType,
    order: Vec<VertexDescriptor<GraphType::VertexIdType>>,
    index: usize,
    num_visited: usize,
    cancel: CancelSearch,
    value_fn: ValueFnType,
}

// Implementation of TopologicalSort
impl<'a, GraphType, ValueFnType, ValueType> TopologicalSort<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    /// # Number of vertices yielded so far
    #[inline]
    pub fn num_visited(&self) -> usize {
        self.num_visited
    }

    /// # Request cancellation
    #[inline]
    pub fn cancel(&mut self, cancel: CancelSearch) {
        self.cancel = cancel;
    }
}

// TopologicalSort::Iterator
impl<'a, GraphType, ValueFnType, ValueType> Iterator for TopologicalSort<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    type Item = VertexData<GraphType::VertexIdType, ValueType>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cancel != CancelSearch::ContinueSearch {
            return None;
        }
        let u = self.order.get(self.index)?.clone();
        self.index += 1;
        self.num_visited += 1;
        let value = (self.value_fn)(self.graph, &u);
        Some(VertexData::new(u, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.order.len() - self.index;
        (remaining, Some(remaining))
    }
}



/// # Topological order over a graph
///
/// ## Description
/// Materialise a whole-graph topological order and return the view over it.  The  call
/// assumes the graph is acyclic; see [`TopologicalSort`] for what happens if  it  is
/// not.
///
/// ## Complexity
/// O(|V| + |E|) to construct; each step is O(1).
pub fn topological_sort<GraphType>(
    g: &GraphType,
) -> TopologicalSort<'_, GraphType, fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>), ()>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    let (order, _) = build_order(g, false);
    TopologicalSort { graph: g, order, index: 0, num_visited: 0, cancel: CancelSearch::ContinueSearch, value_fn: |_, _| () }
}



/// # Topological order with computed values
pub fn topological_sort_with<GraphType, ValueFnType, ValueType>(
    g: &GraphType,
    value_fn: ValueFnType,
) -> TopologicalSort<'_, GraphType, ValueFnType, ValueType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    let (order, _) = build_order(g, false);
    TopologicalSort { graph: g, order, index: 0, num_visited: 0, cancel: CancelSearch::ContinueSearch, value_fn }
}



/// # Topological order with cycle detection
///
/// ## Description
/// Like [`topological_sort`], additionally tracking the recursion stack to detect back
/// edges.
///
/// ## Returns
/// * `Result<TopologicalSort, GraphType::VertexIdType>` - `Ok(view)` if the graph  is
/// acyclic; `Err(vid)` otherwise, where `vid` is the vertex that closed the first back
/// edge found.
pub fn topological_sort_safe<GraphType>(
    g: &GraphType,
) -> Result<
    TopologicalSort<'_, GraphType, fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>), ()>,
    GraphType::VertexIdType,
>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    let (order, cycle_vertex) = build_order(g, true);
    match cycle_vertex {
        Some(vid) => Err(vid),
        None => Ok(TopologicalSort {
            graph: g,
            order,
            index: 0,
            num_visited: 0,
            cancel: CancelSearch::ContinueSearch,
            value_fn: |_, _| (),
        }),
    }
}



/// # Topological order with cycle detection and computed values
pub fn topological_sort_safe_with<GraphType, ValueFnType, ValueType>(
    g: &GraphType,
    value_fn: ValueFnType,
) -> Result<TopologicalSort<'_, GraphType, ValueFnType, ValueType>, GraphType::VertexIdType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    let (order, cycle_vertex) = build_order(g, true);
    match cycle_vertex {
        Some(vid) => Err(vid),
        None => Ok(TopologicalSort {
            graph: g,
            order,
            index: 0,
            num_visited: 0,
            cancel: CancelSearch::ContinueSearch,
            value_fn,
        }),
    }
}
