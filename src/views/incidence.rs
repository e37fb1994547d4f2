use crate::{
    descriptors::EdgeDescriptor,
    records::EdgeData,
    AdjacencyList, BidirectionalAdjacencyList,
};
use std::iter::empty;





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * INCIDENCE VIEW                                                                    *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Incidence view
///
/// ## Description
/// Iterates the edges incident on one vertex, yielding one [`EdgeData`] record  each.
/// Created with [`incidence`] / [`incidence_with`] for the outgoing side and  -  over
/// [bidirectional][BidirectionalAdjacencyList] graphs - with [`in_incidence`] /
/// [`in_incidence_with`] for the incoming side. The two  sides  share  this  type:
/// which edge accessor feeds the view is decided at construction.
pub struct Incidence<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: AdjacencyList,
    ValueFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    graph: &'a GraphType,
    edges: Box<dyn Iterator<Item = EdgeDescriptor<GraphType::VertexIdType>> + 'a>,
    value_fn: ValueFnType,
}

// Incidence::Iterator
impl<'a, GraphType, ValueFnType, ValueType> Iterator for Incidence<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: AdjacencyList,
    ValueFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    type Item = EdgeData<GraphType::VertexIdType, ValueType>;

    fn next(&mut self) -> Option<Self::Item> {
        let e = self.edges.next()?;
        let value = (self.value_fn)(self.graph, &e);
        Some(EdgeData::new(e, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}



/// # Incidence of a vertex
///
/// ## Description
/// Lazy view over the outgoing edges of the vertex with ID `uid`,  yielding  records
/// `EdgeData { source_id, target_id, edge }`.
///
/// ## Arguments
/// * `g` : `&GraphType` - the graph.
/// * `uid` : `&GraphType::VertexIdType` - the source vertex ID. An  unknown  ID
/// yields an empty view.
///
/// ## Complexity
/// O(1) to construct; a full walk is O(deg(`uid`)).
pub fn incidence<'a, GraphType>(
    g: &'a GraphType,
    uid: &GraphType::VertexIdType,
) -> Incidence<'a, GraphType, fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>), ()>
where
    GraphType: AdjacencyList,
{
    Incidence { graph: g, edges: g.edges_by_id(uid), value_fn: |_, _| () }
}



/// # Incidence with computed values
///
/// ## Description
/// Like [`incidence`], with `value_fn` invoked once per yielded edge. A typical  value
/// function reads the edge payload:
/// `incidence_with(&g, &0, |g, e| *g.edge_value(e).unwrap())`.
pub fn incidence_with<'a, GraphType, ValueFnType, ValueType>(
    g: &'a GraphType,
    uid: &GraphType::VertexIdType,
    value_fn: ValueFnType,
) -> Incidence<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: AdjacencyList,
    ValueFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    Incidence { graph: g, edges: g.edges_by_id(uid), value_fn }
}



/// # Incoming incidence of a vertex
///
/// ## Description
/// The in-edge counterpart of [`incidence`]: iterates  the  edges  *into*  the  vertex
/// with ID `vid`. The yielded descriptors are the same  half-edge  descriptors  the
/// source side owns, so `record.target_id` equals `vid` for every record.
pub fn in_incidence<'a, GraphType>(
    g: &'a GraphType,
    vid: &GraphType::VertexIdType,
) -> Incidence<'a, GraphType, fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>), ()>
where
    GraphType: BidirectionalAdjacencyList,
{
    let edges: Box<dyn Iterator<Item = EdgeDescriptor<GraphType::VertexIdType>> + 'a> =
        match g.find_vertex(vid) {
            Some(v) => g.in_edges(&v),
            None => Box::new(empty()),
        };
    Incidence { graph: g, edges, value_fn: |_, _| () }
}



/// # Incoming incidence with computed values
pub fn in_incidence_with<'a, GraphType, ValueFnType, ValueType>(
    g: &'a GraphType,
    vid: &GraphType::VertexIdType,
    value_fn: ValueFnType,
) -> Incidence<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: BidirectionalAdjacencyList,
    ValueFnType: Fn(&GraphType, &EdgeDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    let edges: Box<dyn Iterator<Item = EdgeDescriptor<GraphType::VertexIdType>> + 'a> =
        match g.find_vertex(vid) {
            Some(v) => g.in_edges(&v),
            None => Box::new(empty()),
        };
    Incidence { graph: g, edges, value_fn }
}





#[cfg(test)]
mod incidence_tests {
    use super::*;
    use crate::{Bidirectional, EdgeValues};

    #[test]
    fn yields_outgoing_edges_in_store_order() {
        let g: Vec<Vec<usize>> = vec![vec![2, 1], vec![], vec![]];
        let targets: Vec<usize> = incidence(&g, &0).map(|record| record.target_id).collect();
        assert_eq!(targets, vec![2, 1]);
        assert!(incidence(&g, &7).next().is_none());
    }

    #[test]
    fn iterating_twice_yields_equal_sequences() {
        let g: Vec<Vec<usize>> = vec![vec![1, 2, 1], vec![], vec![]];
        let first: Vec<_> = incidence(&g, &0).collect();
        let second: Vec<_> = incidence(&g, &0).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn value_function_reads_edge_payloads() {
        let g: Vec<Vec<(usize, i32)>> = vec![vec![(1, 7), (2, -3)], vec![], vec![]];
        let weights: Vec<i32> =
            incidence_with(&g, &0, |g, e| *g.edge_value(e).unwrap()).map(|record| record.value).collect();
        assert_eq!(weights, vec![7, -3]);
    }

    #[test]
    fn incoming_side_mirrors_the_outgoing_side() {
        let g = Bidirectional::new(vec![vec![1usize, 2], vec![2], vec![]]).unwrap();
        let sources: Vec<usize> = in_incidence(&g, &2).map(|record| record.source_id).collect();
        assert_eq!(sources, vec![0, 1]);
        for record in in_incidence(&g, &2) {
            assert_eq!(record.target_id, 2);
        }
    }
}
