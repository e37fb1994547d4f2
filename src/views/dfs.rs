use fixedbitset::FixedBitSet;
use crate::{
    descriptors::{EdgeDescriptor, VertexDescriptor},
    records::{EdgeData, VertexData},
    views::CancelSearch,
    Id, IndexAdjacencyList, IndexId,
};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * EDGE CLASSIFICATION                                                               *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Classification of an edge by a depth-first search
///
/// ## Description
/// Every edge examined by a depth-first traversal falls into exactly one class at the
/// moment it is crossed:
///
/// * `Tree` - the target was undiscovered; the edge enters the DFS tree.
/// * `Back` - the target is an ancestor still on the DFS stack. The presence  of  a
/// back edge is exactly the presence of a cycle.
/// * `ForwardOrCross` - the target was already fully processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DfsEdgeKind {
    Tree,
    Back,
    ForwardOrCross,
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * DFS STACK FRAMES                                                                  *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



// One simulated call frame: a vertex and its not-yet-examined outgoing edges.
struct DfsFrame<'a, VertexIdType>
where
    VertexIdType: Id,
{
    vertex: VertexDescriptor<VertexIdType>,
    edges: Box<dyn Iterator<Item = EdgeDescriptor<VertexIdType>> + 'a>,
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * DFS OVER VERTICES                                                                 *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Depth-first vertex traversal
///
/// ## Description
/// A single-pass range that yields the vertices reachable from  the  seed  in  order
/// of discovery (preorder). Created with [`vertices_dfs`] or [`vertices_dfs_with`].
///
/// ## Details
/// The traversal is iterative: an explicit stack of frames, each holding a vertex and
/// its remaining edge iterator, simulates the recursion. Colors  follow  the  classic
/// three-state scheme - undiscovered, on the stack (gray), finished  (black)  -  kept
/// in two bit vectors.
///
/// [`CancelBranch`][CancelSearch::CancelBranch] pops the frame of the most  recently
/// yielded vertex, so none of its undiscovered descendants are entered;
/// [`CancelAll`][CancelSearch::CancelAll] ends the traversal.
pub struct VerticesDfs<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    graph: &'a GraphType,
    stack: Vec<DfsFrame<'a, GraphType::VertexIdType>>,
    gray: FixedBitSet,
    black: FixedBitSet,
    pending_root: Option<VertexDescriptor<GraphType::VertexIdType>>,
    num_visited: usize,
    cancel: CancelSearch,
    value_fn: ValueFnType,
}

// Implementation of VerticesDfs
impl<'a, GraphType, ValueFnType, ValueType> VerticesDfs<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    fn new(g: &'a GraphType, seed: &GraphType::VertexIdType, value_fn: ValueFnType) -> Self {
        let n = g.num_vertices();
        let mut view = VerticesDfs {
            graph: g,
            stack: Vec::new(),
            gray: FixedBitSet::with_capacity(n),
            black: FixedBitSet::with_capacity(n),
            pending_root: None,
            num_visited: 0,
            cancel: CancelSearch::ContinueSearch,
            value_fn,
        };
        if let Some(u) = g.find_vertex(seed) {
            view.gray.insert(seed.to_index());
            view.stack.push(DfsFrame { vertex: u.clone(), edges: g.edges(&u) });
            view.pending_root = Some(u);
        }
        view
    }

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

    fn finish_top_frame(&mut self) {
        if let Some(frame) = self.stack.pop() {
            let index = frame.vertex.id().to_index();
            self.gray.set(index, false);
            self.black.insert(index);
        }
    }
}

// VerticesDfs::Iterator
impl<'a, GraphType, ValueFnType, ValueType> Iterator for VerticesDfs<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    type Item = VertexData<GraphType::VertexIdType, ValueType>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cancel == CancelSearch::CancelAll {
            return None;
        }
        if let Some(root) = self.pending_root.take() {
            self.num_visited += 1;
            let value = (self.value_fn)(self.graph, &root);
            return Some(VertexData::new(root, value));
        }
        if self.cancel == CancelSearch::CancelBranch {
            self.finish_top_frame();
            self.cancel = CancelSearch::ContinueSearch;
        }
        loop {
            let next_edge = match self.stack.last_mut() {
                Some(frame) => frame.edges.next(),
                None => return None,
            };
            match next_edge {
                Some(e) => {
                    let index = e.target_id().to_index();
                    if !self.gray.contains(index) && !self.black.contains(index) {
                        self.gray.insert(index);
                        let target = e.target();
                        self.stack.push(DfsFrame { vertex: target.clone(), edges: self.graph.edges(&target) });
                        self.num_visited += 1;
                        let value = (self.value_fn)(self.graph, &target);
                        return Some(VertexData::new(target, value));
                    }
                },
                None => self.finish_top_frame(),
            }
        }
    }
}



/// # Depth-first search from one seed
///
/// ## Description
/// Preorder traversal of the vertices reachable from `seed`. An unknown seed ID yields
/// an empty range.
///
/// ## Complexity
/// O(|V|) to construct; a full walk is O(|V| + |E|).
pub fn vertices_dfs<'a, GraphType>(
    g: &'a GraphType,
    seed: &GraphType::VertexIdType,
) -> VerticesDfs<'a, GraphType, fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>), ()>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    VerticesDfs::new(g, seed, |_, _| ())
}



/// # Depth-first search with computed values
pub fn vertices_dfs_with<'a, GraphType, ValueFnType, ValueType>(
    g: &'a GraphType,
    seed: &GraphType::VertexIdType,
    value_fn: ValueFnType,
) -> VerticesDfs<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    VerticesDfs::new(g, seed, value_fn)
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * DFS OVER EDGES                                                                    *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Depth-first edge traversal
///
/// ## Description
/// Yields every edge reachable from the seed exactly once, at the moment  the  search
/// crosses it, paired with its [classification][DfsEdgeKind]. Created with
/// [`edges_dfs`] or [`edges_dfs_with`].
///
/// ## Details
/// Classification happens when the edge is yielded and is never revised:  cancelling
/// with [`CancelBranch`][CancelSearch::CancelBranch] right after receiving  an  edge
/// keeps that edge's classification and only suppresses the descent below it.
pub struct EdgesDfs<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    graph: &'a GraphType,
    stack: Vec<DfsFrame<'a, GraphType::VertexIdType>>,
    gray: FixedBitSet,
    black: FixedBitSet,
    num_visited: usize,
    cancel: CancelSearch,
    value_fn: ValueFnType,
}

// Implementation of EdgesDfs
impl<'a, GraphType, ValueFnType, ValueType> EdgesDfs<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    fn new(g: &'a GraphType, seed: &GraphType::VertexIdType, value_fn: ValueFnType) -> Self {
        let n = g.num_vertices();
        let mut view = EdgesDfs {
            graph: g,
            stack: Vec::new(),
            gray: FixedBitSet::with_capacity(n),
            black: FixedBitSet::with_capacity(n),
            num_visited: 0,
            cancel: CancelSearch::ContinueSearch,
            value_fn,
        };
        if let Some(u) = g.find_vertex(seed) {
            view.gray.insert(seed.to_index());
            view.stack.push(DfsFrame { vertex: u.clone(), edges: g.edges(&u) });
        }
        view
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

    fn finish_top_frame(&mut self) {
        if let Some(frame) = self.stack.pop() {
            let index = frame.vertex.id().to_index();
            self.gray.set(index, false);
            self.black.insert(index);
        }
    }
}

// EdgesDfs::Iterator
impl<'a, GraphType, ValueFnType, ValueType> Iterator for EdgesDfs<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    type Item = (DfsEdgeKind, EdgeData<GraphType::VertexIdType, ValueType>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cancel == CancelSearch::CancelAll {
            return None;
        }
        if self.cancel == CancelSearch::CancelBranch {
            self.finish_top_frame();
            self.cancel = CancelSearch::ContinueSearch;
        }
        loop {
            let next_edge = match self.stack.last_mut() {
                Some(frame) => frame.edges.next(),
                None => return None,
            };
            match next_edge {
                Some(e) => {
                    let index = e.target_id().to_index();
                    let kind = if self.gray.contains(index) {
                        DfsEdgeKind::Back
                    } else if self.black.contains(index) {
                        DfsEdgeKind::ForwardOrCross
                    } else {
                        DfsEdgeKind::Tree
                    };
                    if kind == DfsEdgeKind::Tree {
                        self.gray.insert(index);
                        let target = e.target();
                        self.stack.push(DfsFrame { vertex: target.clone(), edges: self.graph.edges(&target) });
                    }
                    self.num_visited += 1;
                    let value = (self.value_fn)(self.graph, &e);
                    return Some((kind, EdgeData::new(e, value)));
                },
                None => self.finish_top_frame(),
            }
        }
    }
}



/// # Depth-first edge traversal from one seed
pub fn edges_dfs<'a, GraphType>(
    g: &'a GraphType,
    seed: &GraphType::VertexIdType,
) -> EdgesDfs<'a, GraphType, fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>), ()>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
{
    EdgesDfs::new(g, seed, |_, _| ())
}



/// # Depth-first edge traversal with computed values
pub fn edges_dfs_with<'a, GraphType, ValueFnType, ValueType>(
    g: &'a GraphType,
    seed: &GraphType::VertexIdType,
    value_fn: ValueFnType,
) -> EdgesDfs<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: IndexAdjacencyList,    GraphType::VertexIdType: IndexId,
    ValueFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    EdgesDfs::new(g, seed, value_fn)
}
