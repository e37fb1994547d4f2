use crate::{
    descriptors::{EdgeDescriptor, VertexDescriptor},
    records::NeighborData,
    AdjacencyList, BidirectionalAdjacencyList,
};
use std::iter::empty;





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * NEIGHBORS VIEW                                                                    *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Neighbors view
///
/// ## Description
/// Iterates the vertices adjacent to one vertex, yielding one [`NeighborData`] record
/// each. Like [`incidence`][super::incidence] but resolving each edge to a descriptor
/// of the vertex on its far side, for callers that don't care about the edges
/// themselves. Created with [`neighbors`] / [`neighbors_with`]  (outgoing  side)  or
/// [`in_neighbors`] / [`in_neighbors_with`] (incoming side of a
/// [bidirectional][BidirectionalAdjacencyList] graph).
pub struct Neighbors<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: AdjacencyList,
    ValueFnType: Fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    graph: &'a GraphType,
    center_id: GraphType::VertexIdType,
    edges: Box<dyn Iterator<Item = EdgeDescriptor<GraphType::VertexIdType>> + 'a>,
    // Which endpoint of each yielded edge is the neighbor: the target for the
    // outgoing side, the source for the incoming side.
    neighbor_is_source: bool,
    value_fn: ValueFnType,
}

// Neighbors::Iterator
impl<'a, GraphType, ValueFnType, ValueType> Iterator for Neighbors<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: AdjacencyList,
    ValueFnType: Fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    type Item = NeighborData<GraphType::VertexIdType, ValueType>;

    fn next(&mut self) -> Option<Self::Item> {
        let e = self.edges.next()?;
        let neighbor_id = if self.neighbor_is_source { e.source_id() } else { e.target_id() };
        let neighbor = self.graph.find_vertex(neighbor_id).unwrap();
        let value = (self.value_fn)(self.graph, &neighbor);
        Some(NeighborData::new(self.center_id.clone(), neighbor, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}



/// # Neighbors of a vertex
///
/// ## Description
/// Lazy view over the out-neighbors of the vertex with ID `uid`,  yielding  records
/// `NeighborData { source_id, target_id, target }`.
///
/// ## Arguments
/// * `g` : `&GraphType` - the graph.
/// * `uid` : `&GraphType::VertexIdType` - the center vertex  ID.  An  unknown  ID
/// yields an empty view.
///
/// ## Details
/// Each step resolves the edge's far endpoint with
/// [`find_vertex`][AdjacencyList::find_vertex] - O(1) for  indexed  graphs,  O(log |V|)
/// for ordered mappings.
pub fn neighbors<'a, GraphType>(
    g: &'a GraphType,
    uid: &GraphType::VertexIdType,
) -> Neighbors<'a, GraphType, fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>), ()>
where
    GraphType: AdjacencyList,
{
    Neighbors {
        graph: g,
        center_id: uid.clone(),
        edges: g.edges_by_id(uid),
        neighbor_is_source: false,
        value_fn: |_, _| (),
    }
}



/// # Neighbors with computed values
///
/// ## Description
/// Like [`neighbors`], with `value_fn` invoked once per yielded neighbor;  the  value
/// function receives the descriptor of the *neighbor* vertex.
pub fn neighbors_with<'a, GraphType, ValueFnType, ValueType>(
    g: &'a GraphType,
    uid: &GraphType::VertexIdType,
    value_fn: ValueFnType,
) -> Neighbors<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: AdjacencyList,
    ValueFnType: Fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    Neighbors { graph: g, center_id: uid.clone(), edges: g.edges_by_id(uid), neighbor_is_source: false, value_fn }
}



/// # In-neighbors of a vertex
///
/// ## Description
/// The incoming counterpart of [`neighbors`]: iterates the vertices with an edge *into*
/// `vid`. The neighbor in each record is the *source* endpoint of the incoming edge.
pub fn in_neighbors<'a, GraphType>(
    g: &'a GraphType,
    vid: &GraphType::VertexIdType,
) -> Neighbors<'a, GraphType, fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>), ()>
where
    GraphType: BidirectionalAdjacencyList,
{
    let edges: Box<dyn Iterator<Item = EdgeDescriptor<GraphType::VertexIdType>> + 'a> =
        match g.find_vertex(vid) {
            Some(v) => g.in_edges(&v),
            None => Box::new(empty()),
        };
    Neighbors { graph: g, center_id: vid.clone(), edges, neighbor_is_source: true, value_fn: |_, _| () }
}



/// # In-neighbors with computed values
pub fn in_neighbors_with<'a, GraphType, ValueFnType, ValueType>(
    g: &'a GraphType,
    vid: &GraphType::VertexIdType,
    value_fn: ValueFnType,
) -> Neighbors<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: BidirectionalAdjacencyList,
    ValueFnType: Fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    let edges: Box<dyn Iterator<Item = EdgeDescriptor<GraphType::VertexIdType>> + 'a> =
        match g.find_vertex(vid) {
            Some(v) => g.in_edges(&v),
            None => Box::new(empty()),
        };
    Neighbors { graph: g, center_id: vid.clone(), edges, neighbor_is_source: true, value_fn }
}





#[cfg(test)]
mod neighbors_tests {
    use super::*;
    use crate::{Bidirectional, VertexValues};

    #[test]
    fn yields_descriptors_of_adjacent_vertices() {
        let g: Vec<Vec<usize>> = vec![vec![1, 2], vec![], vec![]];
        let reached: Vec<usize> = neighbors(&g, &0).map(|record| record.target_id).collect();
        assert_eq!(reached, vec![1, 2]);
        for record in neighbors(&g, &0) {
            assert_eq!(record.source_id, 0);
            assert_eq!(*record.target.id(), record.target_id);
        }
    }

    #[test]
    fn value_function_reads_the_neighbor_payload() {
        let g: Vec<(&str, Vec<usize>)> = vec![("s", vec![1, 2]), ("t", vec![]), ("x", vec![])];
        let names: Vec<&str> =
            neighbors_with(&g, &0, |g, u| *g.vertex_value(u).unwrap()).map(|record| record.value).collect();
        assert_eq!(names, vec!["t", "x"]);
    }

    #[test]
    fn in_neighbors_resolve_the_source_endpoint() {
        let g = Bidirectional::new(vec![vec![2usize], vec![2], vec![]]).unwrap();
        let sources: Vec<usize> = in_neighbors(&g, &2).map(|record| record.target_id).collect();
        assert_eq!(sources, vec![0, 1]);
    }
}
