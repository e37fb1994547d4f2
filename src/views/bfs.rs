use std::collections::VecDeque;
use fixedbitset::FixedBitSet;
use crate::{
    descriptors::{EdgeDescriptor, VertexDescriptor},
    records::{EdgeData, VertexData},
    views::CancelSearch,
    IndexAdjacencyList, IndexId,
};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * BFS OVER VERTICES                                                                 *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Breadth-first vertex traversal
///
/// ## Description
/// A single-pass range that yields every vertex reachable from the seed(s)  in  level
/// order: all vertices at distance `k` (in tree edges) before any vertex at  distance
/// `k + 1`. Created with [`vertices_bfs`], [`vertices_bfs_with`] or
/// [`vertices_bfs_multi`].
///
/// ## Details
/// The frontier is a FIFO queue; a bit vector over  the  dense  vertex  IDs  tracks
/// discovery, which is why the view requires an [index][IndexAdjacencyList] graph.
///
/// Progress accessors: [`depth`][VerticesBfs::depth]  is  the  distance  of  the  most
/// recently yielded vertex from its seed; [`num_visited`][VerticesBfs::num_visited]
/// counts yielded vertices (stepping increments it, construction does not).
///
/// Cancellation: [`cancel`][VerticesBfs::cancel] with
/// [`CancelBranch`][CancelSearch::CancelBranch] suppresses the expansion of the  most
/// recently yielded vertex, so none of its not-yet-discovered descendants enter  the
/// frontier; [`CancelAll`][CancelSearch::CancelAll] ends the traversal.
pub struct VerticesBfs<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    graph: &'a GraphType,
    queue: VecDeque<(VertexDescriptor<GraphType::VertexIdType>, usize)>,
    visited: FixedBitSet,
    current: Option<(VertexDescriptor<GraphType::VertexIdType>, usize)>,
    depth: usize,
    num_visited: usize,
    cancel: CancelSearch,
    value_fn: ValueFnType,
}

// Implementation of VerticesBfs
impl<'a, GraphType, ValueFnType, ValueType> VerticesBfs<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    fn new(g: &'a GraphType, seeds: &[GraphType::VertexIdType], value_fn: ValueFnType) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FixedBitSet::with_capacity(g.num_vertices());
        for seed in seeds {
            if let Some(u) = g.find_vertex(seed) {
                let index = seed.to_index();
                if !visited.contains(index) {
                    visited.insert(index);
                    queue.push_back((u, 0));
                }
            }
        }
        VerticesBfs {
            graph: g,
            queue,
            visited,
            current: None,
            depth: 0,
            num_visited: 0,
            cancel: CancelSearch::ContinueSearch,
            value_fn,
        }
    }

    fn expand(&mut self, u: &VertexDescriptor<GraphType::VertexIdType>, depth: usize) {
        for e in self.graph.edges(u) {
            let index = e.target_id().to_index();
            if !self.visited.contains(index) {
                self.visited.insert(index);
                self.queue.push_back((e.target(), depth + 1));
            }
        }
    }

    /// # Distance of the most recently yielded vertex from its seed, in tree edges
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// # Number of vertices yielded so far
    #[inline]
    pub fn num_visited(&self) -> usize {
        self.num_visited
    }

    /// # Request cancellation
    ///
    /// ## Description
    /// See [`CancelSearch`] for the semantics of each request. The request  takes
    /// effect on the next step.
    #[inline]
    pub fn cancel(&mut self, cancel: CancelSearch) {
        self.cancel = cancel;
    }
}

// VerticesBfs::Iterator
impl<'a, GraphType, ValueFnType, ValueType> Iterator for VerticesBfs<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    type Item = VertexData<GraphType::VertexIdType, ValueType>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cancel == CancelSearch::CancelAll {
            return None;
        }
        if let Some((u, depth)) = self.current.take() {
            if self.cancel == CancelSearch::CancelBranch {
                self.cancel = CancelSearch::ContinueSearch;
            } else {
                self.expand(&u, depth);
            }
        }
        let (u, depth) = self.queue.pop_front()?;
        self.depth = depth;
        self.num_visited += 1;
        self.current = Some((u.clone(), depth));
        let value = (self.value_fn)(self.graph, &u);
        Some(VertexData::new(u, value))
    }
}



/// # Breadth-first search from one seed
///
/// ## Description
/// Level-order traversal of the vertices reachable from `seed`. An unknown seed  ID
/// yields an empty range.
///
/// ## Complexity
/// O(|V|) to construct (the visited bit vector); a full walk is O(|V| + |E|).
pub fn vertices_bfs<'a, GraphType>(
    g: &'a GraphType,
    seed: &GraphType::VertexIdType,
) -> VerticesBfs<'a, GraphType, fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>), ()>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    VerticesBfs::new(g, std::slice::from_ref(seed), |_, _| ())
}



/// # Breadth-first search with computed values
pub fn vertices_bfs_with<'a, GraphType, ValueFnType, ValueType>(
    g: &'a GraphType,
    seed: &GraphType::VertexIdType,
    value_fn: ValueFnType,
) -> VerticesBfs<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    VerticesBfs::new(g, std::slice::from_ref(seed), value_fn)
}



/// # Multi-source breadth-first search
///
/// ## Description
/// Like [`vertices_bfs`] but seeding the frontier with every given source at depth 0;
/// each vertex is yielded at its distance from the *nearest* seed.
pub fn vertices_bfs_multi<'a, GraphType>(
    g: &'a GraphType,
    seeds: &[GraphType::VertexIdType],
) -> VerticesBfs<'a, GraphType, fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>), ()>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    VerticesBfs::new(g, seeds, |_, _| ())
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * BFS OVER EDGES                                                                    *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Breadth-first edge traversal
///
/// ## Description
/// The edge-yielding sibling of [`VerticesBfs`]: yields one [`EdgeData`] record  per
/// *tree* edge, in the order the traversal crosses them. Created with  [`edges_bfs`],
/// [`edges_bfs_with`] or [`edges_bfs_multi`].
///
/// ## Details
/// [`depth`][EdgesBfs::depth] is the level of the most recently yielded edge's target.
/// [`CancelBranch`][CancelSearch::CancelBranch] suppresses the expansion of that
/// target.
pub struct EdgesBfs<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    graph: &'a GraphType,
    queue: VecDeque<(EdgeDescriptor<GraphType::VertexIdType>, usize)>,
    visited: FixedBitSet,
    current: Option<(EdgeDescriptor<GraphType::VertexIdType>, usize)>,
    depth: usize,
    num_visited: usize,
    cancel: CancelSearch,
    value_fn: ValueFnType,
}

// Implementation of EdgesBfs
impl<'a, GraphType, ValueFnType, ValueType> EdgesBfs<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    fn new(g: &'a GraphType, seeds: &[GraphType::VertexIdType], value_fn: ValueFnType) -> Self {
        let mut view = EdgesBfs {
            graph: g,
            queue: VecDeque::new(),
            visited: FixedBitSet::with_capacity(g.num_vertices()),
            current: None,
            depth: 0,
            num_visited: 0,
            cancel: CancelSearch::ContinueSearch,
            value_fn,
        };
        for seed in seeds {
            if let Some(u) = g.find_vertex(seed) {
                let index = seed.to_index();
                if !view.visited.contains(index) {
                    view.visited.insert(index);
                    view.expand(&u, 0);
                }
            }
        }
        view
    }

    fn expand(&mut self, u: &VertexDescriptor<GraphType::VertexIdType>, depth: usize) {
        for e in self.graph.edges(u) {
            let index = e.target_id().to_index();
            if !self.visited.contains(index) {
                self.visited.insert(index);
                self.queue.push_back((e, depth + 1));
            }
        }
    }

    /// # Level of the most recently yielded edge's target
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// # Number of edges yielded so far
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

// EdgesBfs::Iterator
impl<'a, GraphType, ValueFnType, ValueType> Iterator for EdgesBfs<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    type Item = EdgeData<GraphType::VertexIdType, ValueType>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cancel == CancelSearch::CancelAll {
            return None;
        }
        if let Some((e, depth)) = self.current.take() {
            if self.cancel == CancelSearch::CancelBranch {
                self.cancel = CancelSearch::ContinueSearch;
            } else {
                self.expand(&e.target(), depth);
            }
        }
        let (e, depth) = self.queue.pop_front()?;
        self.depth = depth;
        self.num_visited += 1;
        self.current = Some((e.clone(), depth));
        let value = (self.value_fn)(self.graph, &e);
        Some(EdgeData::new(e, value))
    }
}



/// # Breadth-first edge traversal from one seed
pub fn edges_bfs<'a, GraphType>(
    g: &'a GraphType,
    seed: &GraphType::VertexIdType,
) -> EdgesBfs<'a, GraphType, fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>), ()>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    EdgesBfs::new(g, std::slice::from_ref(seed), |_, _| ())
}



/// # Breadth-first edge traversal with computed values
pub fn edges_bfs_with<'a, GraphType, ValueFnType, ValueType>(
    g: &'a GraphType,
    seed: &GraphType::VertexIdType,
    value_fn: ValueFnType,
) -> EdgesBfs<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    EdgesBfs::new(g, std::slice::from_ref(seed), value_fn)
}



/// # Multi-source breadth-first edge traversal
pub fn edges_bfs_multi<'a, GraphType>(
    g: &'a GraphType,
    seeds: &[GraphType::VertexIdType],
) -> EdgesBfs<'a, GraphType, fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>), ()>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    EdgesBfs::new(g, seeds, |_, _| ())
}
