use crate::{descriptors::VertexDescriptor, records::VertexData, AdjacencyList};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * VERTEXLIST VIEW                                                                   *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Vertexlist view
///
/// ## Description
/// Iterates all vertices of a graph yielding one [`VertexData`] record each.  Created
/// with [`vertexlist`] or [`vertexlist_with`].
pub struct Vertexlist<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: AdjacencyList,
    ValueFnType: Fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    graph: &'a GraphType,
    vertices: Box<dyn Iterator<Item = VertexDescriptor<GraphType::VertexIdType>> + 'a>,
    value_fn: ValueFnType,
}

// Vertexlist::Iterator
impl<'a, GraphType, ValueFnType, ValueType> Iterator for Vertexlist<'a, GraphType, ValueFnType, ValueType>
where
    GraphType: AdjacencyList,
    ValueFnType: Fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    type Item = VertexData<GraphType::VertexIdType, ValueType>;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.vertices.next()?;
        let value = (self.value_fn)(self.graph, &u);
        Some(VertexData::new(u, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.vertices.size_hint()
    }
}



/// # Vertexlist over a graph
///
/// ## Description
/// Lazy view over all vertices of `g`, yielding `VertexData { id, vertex }`  records.
///
/// ## Arguments
/// * `g` : `&GraphType` - the graph.
///
/// ## Returns
/// * `Vertexlist` - a forward-iterable range of [`VertexData`] records.
///
/// ## Complexity
/// O(1) to construct; each step costs what one step  of  the  underlying  vertex
/// store costs.
pub fn vertexlist<GraphType>(
    g: &GraphType,
) -> Vertexlist<'_, GraphType, fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>), ()>
where
    GraphType: AdjacencyList,
{
    Vertexlist { graph: g, vertices: g.vertices(), value_fn: |_, _| () }
}



/// # Vertexlist with computed values
///
/// ## Description
/// Like [`vertexlist`], with `value_fn` invoked once per yielded vertex to  fill  the
/// records' `value` field. `value_fn` must be pure.
pub fn vertexlist_with<GraphType, ValueFnType, ValueType>(
    g: &GraphType,
    value_fn: ValueFnType,
) -> Vertexlist<'_, GraphType, ValueFnType, ValueType>
where
    GraphType: AdjacencyList,
    ValueFnType: Fn(&GraphType, &VertexDescriptor<GraphType::VertexIdType>) -> ValueType,
{
    Vertexlist { graph: g, vertices: g.vertices(), value_fn }
}





#[cfg(test)]
mod vertexlist_tests {
    use super::*;

    #[test]
    fn yields_every_vertex_once() {
        let g: Vec<Vec<usize>> = vec![vec![1], vec![2], vec![]];
        let ids: Vec<usize> = vertexlist(&g).map(|record| record.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn value_function_sees_the_descriptor() {
        let g: Vec<Vec<usize>> = vec![vec![1, 2], vec![], vec![]];
        let degrees: Vec<usize> = vertexlist_with(&g, |g, u| g.degree(u)).map(|record| record.value).collect();
        assert_eq!(degrees, vec![2, 0, 0]);
    }
}
