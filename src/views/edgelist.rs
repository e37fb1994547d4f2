use crate::{
    descriptors::{EdgeDescriptor, VertexDescriptor},
    records::EdgeData,
    AdjacencyHints, AdjacencyList,
};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * EDGELIST VIEW                                                                     *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Edgelist view
///
/// ## Description
/// Flattens the two-level adjacency structure into a single range over *all* edges of
/// the graph: vertices are walked in store order and, within each, the outgoing edges
/// in edge-store order. Created with [`edgelist`] or [`edgelist_with`].
///
/// ## Details
/// The first step skips leading zero-degree vertices and is therefore O(|V|) in  the
/// worst case; every subsequent step is amortised O(1).
///
/// The view knows its exact length only when  the  graph  advertises  an  O(1)  edge
/// count ([`AdjacencyHints::SIZED_EDGES`]); otherwise `size_hint` reports an  unknown
/// upper bound rather than paying for the O(|V| + |E|) counting default.
pub struct Edgelist<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: AdjacencyList,
    ValueFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    graph: &'a GraphType,
    vertices: Box<dyn Iterator<Item = VertexDescriptor<GraphType::VertexIdType>> + 'a>,
    edges: Option<Box<dyn Iterator<Item = EdgeDescriptor<GraphType::VertexIdType>> + 'a>>,
    yielded: usize,
    value_fn: ValueFnType,
}

// Edgelist::Iterator
impl<'a, GraphType, ValueFnType, ValueType> Iterator for Edgelist<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: AdjacencyList,
    ValueFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    type Item = EdgeData<GraphType::VertexIdType, ValueType>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(edges) = self.edges.as_mut() {
                if let Some(e) = edges.next() {
                    self.yielded += 1;
                    let value = (self.value_fn)(self.graph, &e);
                    return Some(EdgeData::new(e, value));
                }
            }
            match self.vertices.next() {
                Some(u) => self.edges = Some(self.graph.edges(&u)),
                None => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if GraphType::HINTS.contains(AdjacencyHints::SIZED_EDGES) {
            let remaining = self.graph.num_edges().saturating_sub(self.yielded);
            (remaining, Some(remaining))
        } else {
            (0, None)
        }
    }
}



/// # Edgelist over a graph
///
/// ## Description
/// Lazy view over all edges of `g`, yielding records
/// `EdgeData { source_id, target_id, edge }`.
///
/// ## Complexity
/// O(1) to construct; a full walk is O(|V| + |E|).
pub fn edgelist<GraphType>(
    g: &GraphType,
) -> Edgelist<'_, GraphType, fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>), ()>
where
    GraphType: AdjacencyList,
{
    Edgelist { graph: g, vertices: g.vertices(), edges: None, yielded: 0, value_fn: |_, _| () }
}



/// # Edgelist with computed values
///
/// ## Description
/// Like [`edgelist`], with `value_fn` invoked once per yielded edge. This is how  the
/// shortest-path algorithms read their weights:
/// `edgelist_with(&g, |g, e| *g.edge_value(e).unwrap())`.
pub fn edgelist_with<GraphType, ValueFnType, ValueType>(
    g: &GraphType,
    value_fn: ValueFnType,
) -> Edgelist<'_, GraphType, ValueFnType, ValueType>
where
    GraphType: AdjacencyList,
    ValueFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    Edgelist { graph: g, vertices: g.vertices(), edges: None, yielded: 0, value_fn }
}
