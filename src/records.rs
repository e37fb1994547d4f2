//! # Structured records module
//!
//! ## Description
//! This module contains the value types yielded by the  [views][crate::views]:  every
//! view dereference produces exactly one of [`VertexData`], [`EdgeData`]  or
//! [`NeighborData`]. The records are plain products, trivially destructurable,  and
//! they are the only observable output of a view.
//!
//! ## Details
//! The `value` field of each record is filled by the optional value function given to
//! the `_with` form of a view constructor. When no value function is  supplied,  the
//! field is the unit type and occupies no storage.
use crate::{descriptors::{EdgeDescriptor, VertexDescriptor}, Id};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * VERTEX DATA                                                                       *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Vertex record
///
/// ## Description
/// One element of a vertex-producing view ([`vertexlist`], [`vertices_bfs`],
/// [`vertices_dfs`], [`topological_sort`]).
///
/// ## Details
/// `id` and `vertex` always name the same vertex; both are kept so that callers  can
/// destructure whichever form the next call wants without a lookup.
///
/// [`vertexlist`]: crate::views::vertexlist
/// [`vertices_bfs`]: crate::views::vertices_bfs
/// [`vertices_dfs`]: crate::views::vertices_dfs
/// [`topological_sort`]: crate::views::topological_sort
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexData<VertexIdType, ValueType = ()>
where
    VertexIdType: Id,
{
    pub id: VertexIdType,
    pub vertex: VertexDescriptor<VertexIdType>,
    pub value: ValueType,
}

// Implementation of VertexData
impl<VertexIdType, ValueType> VertexData<VertexIdType, ValueType>
where
    VertexIdType: Id,
{
    #[inline]
    pub(crate) fn new(vertex: VertexDescriptor<VertexIdType>, value: ValueType) -> Self {
        VertexData { id: vertex.id().clone(), vertex, value }
    }
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * EDGE DATA                                                                         *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Edge record
///
/// ## Description
/// One element of an edge-producing view ([`incidence`], [`edgelist`], [`edges_bfs`],
/// [`edges_dfs`]). Carries both endpoint IDs, the edge descriptor and  the  computed
/// value.
///
/// [`incidence`]: crate::views::incidence
/// [`edgelist`]: crate::views::edgelist
/// [`edges_bfs`]: crate::views::edges_bfs
/// [`edges_dfs`]: crate::views::edges_dfs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeData<VertexIdType, ValueType = ()>
where
    VertexIdType: Id,
{
    pub source_id: VertexIdType,
    pub target_id: VertexIdType,
    pub edge: EdgeDescriptor<VertexIdType>,
    pub value: ValueType,
}

// Implementation of EdgeData
impl<VertexIdType, ValueType> EdgeData<VertexIdType, ValueType>
where
    VertexIdType: Id,
{
    #[inline]
    pub(crate) fn new(edge: EdgeDescriptor<VertexIdType>, value: ValueType) -> Self {
        EdgeData {
            source_id: edge.source_id().clone(),
            target_id: edge.target_id().clone(),
            edge,
            value,
        }
    }
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * NEIGHBOR DATA                                                                     *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Neighbor record
///
/// ## Description
/// One element of the [`neighbors`] view: like [`EdgeData`] but carrying a descriptor
/// of the *target vertex* instead of the edge, for callers that walk adjacent vertices
/// without caring about the connecting edges.
///
/// [`neighbors`]: crate::views::neighbors
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborData<VertexIdType, ValueType = ()>
where
    VertexIdType: Id,
{
    pub source_id: VertexIdType,
    pub target_id: VertexIdType,
    pub target: VertexDescriptor<VertexIdType>,
    pub value: ValueType,
}

// Implementation of NeighborData
impl<VertexIdType, ValueType> NeighborData<VertexIdType, ValueType>
where
    VertexIdType: Id,
{
    #[inline]
    pub(crate) fn new(
        source_id: VertexIdType,
        target: VertexDescriptor<VertexIdType>,
        value: ValueType,
    ) -> Self {
        NeighborData { source_id, target_id: target.id().clone(), target, value }
    }
}





#[cfg(test)]
mod records_tests {
    use super::*;

    #[test]
    fn records_destructure() {
        let e = EdgeDescriptor::new(0usize, 1usize, 0);
        let EdgeData { source_id, target_id, edge, value } = EdgeData::new(e.clone(), 9i32);
        assert_eq!(source_id, 0);
        assert_eq!(target_id, 1);
        assert_eq!(edge, e);
        assert_eq!(value, 9);
    }

    #[test]
    fn unit_value_occupies_no_storage() {
        assert_eq!(
            std::mem::size_of::<VertexData<usize, ()>>(),
            std::mem::size_of::<VertexData<usize, [(); 3]>>()
        );
    }
}
