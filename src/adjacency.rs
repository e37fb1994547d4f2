//! # Adjacency module
//!
//! ## Description
//! This module makes plain standard containers answer the  [access  protocol][crate::AdjacencyList]
//! without a single line of user glue. The  construction  is  layered  exactly  like  a
//! nested container:
//!
//! * [`EdgeRecord`] / [`EdgeValueRecord`] describe one stored  half-edge  (a  bare
//! target ID, a `(target, value)` pair, or any user type that implements them);
//! * [`EdgeStore`] describes the per-vertex container of such records  (`Vec`,
//! `VecDeque`, `LinkedList`, `BTreeSet`, `HashSet`);
//! * [`VertexRecord`] / [`VertexValueRecord`] describe one vertex slot: either an edge
//! store alone or a `(value, edge store)` pair;
//! * the outer store (`Vec`, `VecDeque`, `BTreeMap`, `HashMap`) of  vertex  records
//! is the graph.
//!
//! Every combination of these layers conforms; the blanket implementations  below  are
//! the "default implementation" tier of the protocol. Containers wanting a  fast  path
//! (an O(1) edge count, say) wrap the container in a newtype and  override  the  slow
//! defaults.
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque},
    iter::empty,
};
use crate::{
    descriptors::{EdgeDescriptor, VertexDescriptor},
    errors::{GraphError, GraphErrorKind, GraphResult},
    AdjacencyHints, AdjacencyList, BidirectionalAdjacencyList, EdgeValues, Id, IndexAdjacencyList,
    OrderedEdges, VertexValues,
};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * EDGE RECORDS                                                                      *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Stored half-edge
///
/// ## Description
/// The protocol one stored edge answers: "which vertex do you point  at?".  Resolution
/// mirrors how differently-shaped edge types carry that information:
///
/// * a bare integer (or `String`, for mappings with text keys) *is* the target ID;
/// * a `(target, value)` pair carries the target in position 0;
/// * any user struct implements the trait itself, typically forwarding  to  a  field.
///
/// Implementing this trait is the *only* requirement for a type to  be  usable  as  a
/// stored edge; everything else ([`EdgeValueRecord`], ordering) is opt-in.
pub trait EdgeRecord<VertexIdType>
where
    VertexIdType: Id,
{
    fn target_id(&self) -> VertexIdType;
}

macro_rules! implement_edge_record_trait_for {
    ($t: ty) => {
        impl EdgeRecord<$t> for $t {
            #[inline]
            fn target_id(&self) -> $t {
                *self
            }
        }
    };
}

implement_edge_record_trait_for!(u8);
implement_edge_record_trait_for!(u16);
implement_edge_record_trait_for!(u32);
implement_edge_record_trait_for!(u64);
implement_edge_record_trait_for!(u128);
implement_edge_record_trait_for!(usize);
implement_edge_record_trait_for!(i8);
implement_edge_record_trait_for!(i16);
implement_edge_record_trait_for!(i32);
implement_edge_record_trait_for!(i64);
implement_edge_record_trait_for!(i128);
implement_edge_record_trait_for!(isize);

// String::EdgeRecord
impl EdgeRecord<String> for String {
    #[inline]
    fn target_id(&self) -> String {
        self.clone()
    }
}

// (VertexIdType, EdgeValueType)::EdgeRecord
impl<VertexIdType, EdgeValueType> EdgeRecord<VertexIdType> for (VertexIdType, EdgeValueType)
where
    VertexIdType: Id,
{
    #[inline]
    fn target_id(&self) -> VertexIdType {
        self.0.clone()
    }
}



/// # Stored half-edge with a payload
///
/// ## Description
/// Extension of [`EdgeRecord`] for edge types that also carry a user  value.  Already
/// implemented for `(target, value)` pairs; user structs implement  it  to  expose
/// their payload field.
pub trait EdgeValueRecord<VertexIdType>
where
    Self: EdgeRecord<VertexIdType>,
    VertexIdType: Id,
{
    type ValueType;

    fn value(&self) -> &Self::ValueType;
}

// (VertexIdType, EdgeValueType)::EdgeValueRecord
impl<VertexIdType, EdgeValueType> EdgeValueRecord<VertexIdType> for (VertexIdType, EdgeValueType)
where
    VertexIdType: Id,
{
    type ValueType = EdgeValueType;

    #[inline]
    fn value(&self) -> &EdgeValueType {
        &self.1
    }
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * EDGE STORES                                                                       *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Per-vertex container of stored half-edges
///
/// ## Description
/// The protocol the inner (per-vertex) container answers: iterate  its  records,  look
/// one up by rank, count them. Implemented for  `Vec`,  `VecDeque`,  `LinkedList`,
/// `BTreeSet` and `HashSet`.
///
/// ## Details
/// The rank of a record is its position in iteration order; it is what edge descriptors
/// store. For hash sets the order is unspecified but stable while the  graph  is  not
/// mutated, which is all the descriptor contract needs.
///
/// `ORDERED_BY_TARGET` declares that iteration yields records  in  ascending  target
/// order; only `BTreeSet` (whose element order is its `Ord`, led by the target) sets
/// it.
pub trait EdgeStore {
    type EdgeRecordType;

    const ORDERED_BY_TARGET: bool = false;

    fn iter_records<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Self::EdgeRecordType> + 'a>;
    fn record_at(&self, rank: usize) -> Option<&Self::EdgeRecordType>;
    fn record_count(&self) -> usize;
}

// Vec::EdgeStore
impl<EdgeRecordType> EdgeStore for Vec<EdgeRecordType> {
    type EdgeRecordType = EdgeRecordType;

    #[inline]
    fn iter_records<'a>(&'a self) -> Box<dyn Iterator<Item = &'a EdgeRecordType> + 'a> {
        Box::new(self.iter())
    }

    #[inline]
    fn record_at(&self, rank: usize) -> Option<&EdgeRecordType> {
        self.get(rank)
    }

    #[inline]
    fn record_count(&self) -> usize {
        self.len()
    }
}

// VecDeque::EdgeStore
impl<EdgeRecordType> EdgeStore for VecDeque<EdgeRecordType> {
    type EdgeRecordType = EdgeRecordType;

    #[inline]
    fn iter_records<'a>(&'a self) -> Box<dyn Iterator<Item = &'a EdgeRecordType> + 'a> {
        Box::new(self.iter())
    }

    #[inline]
    fn record_at(&self, rank: usize) -> Option<&EdgeRecordType> {
        self.get(rank)
    }

    #[inline]
    fn record_count(&self) -> usize {
        self.len()
    }
}

// LinkedList::EdgeStore
impl<EdgeRecordType> EdgeStore for LinkedList<EdgeRecordType> {
    type EdgeRecordType = EdgeRecordType;

    #[inline]
    fn iter_records<'a>(&'a self) -> Box<dyn Iterator<Item = &'a EdgeRecordType> + 'a> {
        Box::new(self.iter())
    }

    #[inline]
    fn record_at(&self, rank: usize) -> Option<&EdgeRecordType> {
        self.iter().nth(rank)
    }

    #[inline]
    fn record_count(&self) -> usize {
        self.len()
    }
}

// BTreeSet::EdgeStore
impl<EdgeRecordType> EdgeStore for BTreeSet<EdgeRecordType>
where
    EdgeRecordType: Ord,
{
    type EdgeRecordType = EdgeRecordType;

    const ORDERED_BY_TARGET: bool = true;

    #[inline]
    fn iter_records<'a>(&'a self) -> Box<dyn Iterator<Item = &'a EdgeRecordType> + 'a> {
        Box::new(self.iter())
    }

    #[inline]
    fn record_at(&self, rank: usize) -> Option<&EdgeRecordType> {
        self.iter().nth(rank)
    }

    #[inline]
    fn record_count(&self) -> usize {
        self.len()
    }
}

// HashSet::EdgeStore
impl<EdgeRecordType> EdgeStore for HashSet<EdgeRecordType>
where
    EdgeRecordType: Eq + std::hash::Hash,
{
    type EdgeRecordType = EdgeRecordType;

    #[inline]
    fn iter_records<'a>(&'a self) -> Box<dyn Iterator<Item = &'a EdgeRecordType> + 'a> {
        Box::new(self.iter())
    }

    #[inline]
    fn record_at(&self, rank: usize) -> Option<&EdgeRecordType> {
        self.iter().nth(rank)
    }

    #[inline]
    fn record_count(&self) -> usize {
        self.len()
    }
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * VERTEX RECORDS                                                                    *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # One vertex slot of the outer store
///
/// ## Description
/// The protocol a vertex slot answers: "where is your edge store?". A  bare  edge
/// store is its own slot; a `(value, edge store)` pair keeps  the  payload  in  front.
/// Custom vertex structs implement this (and [`VertexValueRecord`]) to  participate
/// with richer layouts.
pub trait VertexRecord {
    type EdgeStoreType: EdgeStore;

    fn edge_store(&self) -> &Self::EdgeStoreType;
}

macro_rules! implement_vertex_record_trait_for {
    ($t: ident) => {
        impl<EdgeRecordType> VertexRecord for $t<EdgeRecordType> {
            type EdgeStoreType = $t<EdgeRecordType>;

            #[inline]
            fn edge_store(&self) -> &Self::EdgeStoreType {
                self
            }
        }
    };
}

implement_vertex_record_trait_for!(Vec);
implement_vertex_record_trait_for!(VecDeque);
implement_vertex_record_trait_for!(LinkedList);

// BTreeSet::VertexRecord
impl<EdgeRecordType> VertexRecord for BTreeSet<EdgeRecordType>
where
    EdgeRecordType: Ord,
{
    type EdgeStoreType = BTreeSet<EdgeRecordType>;

    #[inline]
    fn edge_store(&self) -> &Self::EdgeStoreType {
        self
    }
}

// HashSet::VertexRecord
impl<EdgeRecordType> VertexRecord for HashSet<EdgeRecordType>
where
    EdgeRecordType: Eq + std::hash::Hash,
{
    type EdgeStoreType = HashSet<EdgeRecordType>;

    #[inline]
    fn edge_store(&self) -> &Self::EdgeStoreType {
        self
    }
}

// (VertexValueType, EdgeStoreType)::VertexRecord
impl<VertexValueType, EdgeStoreType> VertexRecord for (VertexValueType, EdgeStoreType)
where
    EdgeStoreType: EdgeStore,
{
    type EdgeStoreType = EdgeStoreType;

    #[inline]
    fn edge_store(&self) -> &EdgeStoreType {
        &self.1
    }
}



/// # Vertex slot with a payload
pub trait VertexValueRecord
where
    Self: VertexRecord,
{
    type ValueType;

    fn value(&self) -> &Self::ValueType;
}

// (VertexValueType, EdgeStoreType)::VertexValueRecord
impl<VertexValueType, EdgeStoreType> VertexValueRecord for (VertexValueType, EdgeStoreType)
where
    EdgeStoreType: EdgeStore,
{
    type ValueType = VertexValueType;

    #[inline]
    fn value(&self) -> &VertexValueType {
        &self.0
    }
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * SEQUENCE-BASED GRAPHS                                                             *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



macro_rules! implement_adjacency_list_trait_for_sequence {
    ($t: ident) => {
        impl<VertexRecordType> AdjacencyList for $t<VertexRecordType>
        where
            VertexRecordType: VertexRecord,
            <VertexRecordType::EdgeStoreType as EdgeStore>::EdgeRecordType: EdgeRecord<usize>,
        {
            type VertexIdType = usize;

            const HINTS: AdjacencyHints =
                if <VertexRecordType::EdgeStoreType as EdgeStore>::ORDERED_BY_TARGET {
                    AdjacencyHints::ORDERED_EDGES
                } else {
                    AdjacencyHints::empty()
                };

            fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = VertexDescriptor<usize>> + 'a> {
                Box::new((0..self.len()).map(VertexDescriptor::new))
            }

            #[inline]
            fn find_vertex(&self, uid: &usize) -> Option<VertexDescriptor<usize>> {
                if *uid < self.len() {
                    Some(VertexDescriptor::new(*uid))
                } else {
                    None
                }
            }

            fn edges<'a>(
                &'a self,
                u: &VertexDescriptor<usize>,
            ) -> Box<dyn Iterator<Item = EdgeDescriptor<usize>> + 'a> {
                let uid = *u.id();
                match self.get(uid) {
                    Some(record) => Box::new(
                        record
                            .edge_store()
                            .iter_records()
                            .enumerate()
                            .map(move |(rank, e)| EdgeDescriptor::new(uid, e.target_id(), rank)),
                    ),
                    None => Box::new(empty()),
                }
            }

            #[inline]
            fn num_vertices(&self) -> usize {
                self.len()
            }

            fn num_edges(&self) -> usize {
                self.iter().map(|record| record.edge_store().record_count()).sum()
            }

            #[inline]
            fn degree(&self, u: &VertexDescriptor<usize>) -> usize {
                match self.get(*u.id()) {
                    Some(record) => record.edge_store().record_count(),
                    None => 0,
                }
            }
        }

        impl<VertexRecordType> IndexAdjacencyList for $t<VertexRecordType>
        where
            VertexRecordType: VertexRecord,
            <VertexRecordType::EdgeStoreType as EdgeStore>::EdgeRecordType: EdgeRecord<usize>,
        {}

        impl<VertexRecordType> VertexValues for $t<VertexRecordType>
        where
            VertexRecordType: VertexValueRecord,
            <VertexRecordType::EdgeStoreType as EdgeStore>::EdgeRecordType: EdgeRecord<usize>,
        {
            type VertexValueType = VertexRecordType::ValueType;

            fn vertex_value(&self, u: &VertexDescriptor<usize>) -> GraphResult<&Self::VertexValueType> {
                const FUNCTION_PATH: &str = concat!(stringify!($t), "::VertexValues::vertex_value");
                match self.get(*u.id()) {
                    Some(record) => Ok(record.value()),
                    None => Err(GraphError::new(
                        GraphErrorKind::OutOfRange,
                        FUNCTION_PATH,
                        format!("Vertex with ID {} doesn't exist.", u.id()),
                    )),
                }
            }
        }

        impl<VertexRecordType> EdgeValues for $t<VertexRecordType>
        where
            VertexRecordType: VertexRecord,
            <VertexRecordType::EdgeStoreType as EdgeStore>::EdgeRecordType: EdgeValueRecord<usize>,
        {
            type EdgeValueType =
                <<VertexRecordType::EdgeStoreType as EdgeStore>::EdgeRecordType as EdgeValueRecord<usize>>::ValueType;

            fn edge_value(&self, e: &EdgeDescriptor<usize>) -> GraphResult<&Self::EdgeValueType> {
                const FUNCTION_PATH: &str = concat!(stringify!($t), "::EdgeValues::edge_value");
                match self.get(*e.source_id()).and_then(|record| record.edge_store().record_at(e.rank())) {
                    Some(record) => Ok(record.value()),
                    None => Err(GraphError::new(
                        GraphErrorKind::OutOfRange,
                        FUNCTION_PATH,
                        format!(
                            "No edge with rank {} leaves the vertex with ID {}.",
                            e.rank(),
                            e.source_id()
                        ),
                    )),
                }
            }
        }
    };
}

implement_adjacency_list_trait_for_sequence!(Vec);
implement_adjacency_list_trait_for_sequence!(VecDeque);





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * MAPPING-BASED GRAPHS                                                              *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



macro_rules! implement_adjacency_list_trait_for_mapping {
    ($t: ident) => {
        impl<VertexIdType, VertexRecordType> AdjacencyList for $t<VertexIdType, VertexRecordType>
        where
            VertexIdType: Id,
            VertexRecordType: VertexRecord,
            <VertexRecordType::EdgeStoreType as EdgeStore>::EdgeRecordType: EdgeRecord<VertexIdType>,
        {
            type VertexIdType = VertexIdType;

            const HINTS: AdjacencyHints =
                if <VertexRecordType::EdgeStoreType as EdgeStore>::ORDERED_BY_TARGET {
                    AdjacencyHints::ORDERED_EDGES
                } else {
                    AdjacencyHints::empty()
                };

            fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = VertexDescriptor<VertexIdType>> + 'a> {
                Box::new(self.keys().cloned().map(VertexDescriptor::new))
            }

            #[inline]
            fn find_vertex(&self, uid: &VertexIdType) -> Option<VertexDescriptor<VertexIdType>> {
                if self.contains_key(uid) {
                    Some(VertexDescriptor::new(uid.clone()))
                } else {
                    None
                }
            }

            fn edges<'a>(
                &'a self,
                u: &VertexDescriptor<VertexIdType>,
            ) -> Box<dyn Iterator<Item = EdgeDescriptor<VertexIdType>> + 'a> {
                match self.get(u.id()) {
                    Some(record) => {
                        let uid = u.id().clone();
                        Box::new(record.edge_store().iter_records().enumerate().map(
                            move |(rank, e)| EdgeDescriptor::new(uid.clone(), e.target_id(), rank),
                        ))
                    },
                    None => Box::new(empty()),
                }
            }

            #[inline]
            fn num_vertices(&self) -> usize {
                self.len()
            }

            fn num_edges(&self) -> usize {
                self.values().map(|record| record.edge_store().record_count()).sum()
            }

            #[inline]
            fn degree(&self, u: &VertexDescriptor<VertexIdType>) -> usize {
                match self.get(u.id()) {
                    Some(record) => record.edge_store().record_count(),
                    None => 0,
                }
            }
        }

        impl<VertexIdType, VertexRecordType> VertexValues for $t<VertexIdType, VertexRecordType>
        where
            VertexIdType: Id,
            VertexRecordType: VertexValueRecord,
            <VertexRecordType::EdgeStoreType as EdgeStore>::EdgeRecordType: EdgeRecord<VertexIdType>,
        {
            type VertexValueType = VertexRecordType::ValueType;

            fn vertex_value(
                &self,
                u: &VertexDescriptor<VertexIdType>,
            ) -> GraphResult<&Self::VertexValueType> {
                const FUNCTION_PATH: &str = concat!(stringify!($t), "::VertexValues::vertex_value");
                match self.get(u.id()) {
                    Some(record) => Ok(record.value()),
                    None => Err(GraphError::new(
                        GraphErrorKind::OutOfRange,
                        FUNCTION_PATH,
                        format!("Vertex with ID {} doesn't exist.", u.id()),
                    )),
                }
            }
        }

        impl<VertexIdType, VertexRecordType> EdgeValues for $t<VertexIdType, VertexRecordType>
        where
            VertexIdType: Id,
            VertexRecordType: VertexRecord,
            <VertexRecordType::EdgeStoreType as EdgeStore>::EdgeRecordType: EdgeValueRecord<VertexIdType>,
        {
            type EdgeValueType = <<VertexRecordType::EdgeStoreType as EdgeStore>::EdgeRecordType as EdgeValueRecord<VertexIdType>>::ValueType;

            fn edge_value(
                &self,
                e: &EdgeDescriptor<VertexIdType>,
            ) -> GraphResult<&Self::EdgeValueType> {
                const FUNCTION_PATH: &str = concat!(stringify!($t), "::EdgeValues::edge_value");
                match self.get(e.source_id()).and_then(|record| record.edge_store().record_at(e.rank())) {
                    Some(record) => Ok(record.value()),
                    None => Err(GraphError::new(
                        GraphErrorKind::OutOfRange,
                        FUNCTION_PATH,
                        format!(
                            "No edge with rank {} leaves the vertex with ID {}.",
                            e.rank(),
                            e.source_id()
                        ),
                    )),
                }
            }
        }
    };
}

implement_adjacency_list_trait_for_mapping!(BTreeMap);
implement_adjacency_list_trait_for_mapping!(HashMap);





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * ORDERED ADJACENCY                                                                 *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



// Vec<BTreeSet>::OrderedEdges
impl<EdgeRecordType> OrderedEdges for Vec<BTreeSet<EdgeRecordType>>
where
    EdgeRecordType: EdgeRecord<usize> + Ord,
{}

// BTreeMap<_, BTreeSet>::OrderedEdges
impl<VertexIdType, EdgeRecordType> OrderedEdges for BTreeMap<VertexIdType, BTreeSet<EdgeRecordType>>
where
    VertexIdType: Id,
    EdgeRecordType: EdgeRecord<VertexIdType> + Ord,
{}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * BIDIRECTIONAL ADAPTER                                                             *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Bidirectional adapter over a sequence-based graph
///
/// ## Description
/// Wraps a `Vec`-based adjacency and derives its transpose index once,  upgrading  the
/// graph to a [`BidirectionalAdjacencyList`]. Incoming edges are answered from  the
/// derived index in O(in-degree); the descriptors  yielded  are  the  very  same
/// half-edge descriptors the forward side yields.
///
/// ## Details
/// The adapter is built *after* the forward adjacency is fully  populated;  like  every
/// graph handed to this library it is immutable from then on.
#[derive(Debug)]
pub struct Bidirectional<VertexRecordType>
where
    VertexRecordType: VertexRecord,
    <VertexRecordType::EdgeStoreType as EdgeStore>::EdgeRecordType: EdgeRecord<usize>,
{
    forward: Vec<VertexRecordType>,
    reverse: Vec<Vec<(usize, usize)>>,
}

// Implementation of Bidirectional
impl<VertexRecordType> Bidirectional<VertexRecordType>
where
    VertexRecordType: VertexRecord,
    <VertexRecordType::EdgeStoreType as EdgeStore>::EdgeRecordType: EdgeRecord<usize>,
{
    /// # Build the transpose index
    ///
    /// ## Arguments
    /// * `forward` : `Vec<VertexRecordType>` - a fully populated sequence-based graph.
    ///
    /// ## Returns
    /// * `GraphResult<Self>` - `Ok(adapter)` on success; `Err(GraphError)`  with  kind
    /// [`Contract`][GraphErrorKind::Contract] if some stored edge targets a vertex  ID
    /// outside `[0, num_vertices)`.
    ///
    /// ## Complexity
    /// Time: O(|V| + |E|). Space: O(|V| + |E|).
    pub fn new(forward: Vec<VertexRecordType>) -> GraphResult<Self> {
        const FUNCTION_PATH: &str = "Bidirectional::new";
        let mut reverse: Vec<Vec<(usize, usize)>> = Vec::new();
        reverse.resize_with(forward.len(), Vec::new);
        for (uid, record) in forward.iter().enumerate() {
            for (rank, e) in record.edge_store().iter_records().enumerate() {
                let tid = e.target_id();
                match reverse.get_mut(tid) {
                    Some(mirrors) => mirrors.push((uid, rank)),
                    None => {
                        return Err(GraphError::new(
                            GraphErrorKind::Contract,
                            FUNCTION_PATH,
                            format!("Edge ({}, {}) targets a vertex that doesn't exist.", uid, tid),
                        ))
                    },
                }
            }
        }
        Ok(Bidirectional { forward, reverse })
    }
}

// Bidirectional::AdjacencyList
impl<VertexRecordType> AdjacencyList for Bidirectional<VertexRecordType>
where
    VertexRecordType: VertexRecord,
    <VertexRecordType::EdgeStoreType as EdgeStore>::EdgeRecordType: EdgeRecord<usize>,
{
    type VertexIdType = usize;

    const HINTS: AdjacencyHints =
        <Vec<VertexRecordType> as AdjacencyList>::HINTS.union(AdjacencyHints::BIDIRECTIONAL);

    #[inline]
    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = VertexDescriptor<usize>> + 'a> {
        self.forward.vertices()
    }

    #[inline]
    fn find_vertex(&self, uid: &usize) -> Option<VertexDescriptor<usize>> {
        self.forward.find_vertex(uid)
    }

    #[inline]
    fn edges<'a>(&'a self, u: &VertexDescriptor<usize>) -> Box<dyn Iterator<Item = EdgeDescriptor<usize>> + 'a> {
        self.forward.edges(u)
    }

    #[inline]
    fn num_vertices(&self) -> usize {
        self.forward.num_vertices()
    }

    #[inline]
    fn num_edges(&self) -> usize {
        self.forward.num_edges()
    }

    #[inline]
    fn degree(&self, u: &VertexDescriptor<usize>) -> usize {
        self.forward.degree(u)
    }
}

// Bidirectional::BidirectionalAdjacencyList
impl<VertexRecordType> BidirectionalAdjacencyList for Bidirectional<VertexRecordType>
where
    VertexRecordType: VertexRecord,
    <VertexRecordType::EdgeStoreType as EdgeStore>::EdgeRecordType: EdgeRecord<usize>,
{
    fn in_edges<'a>(&'a self, v: &VertexDescriptor<usize>) -> Box<dyn Iterator<Item = EdgeDescriptor<usize>> + 'a> {
        let vid = *v.id();
        match self.reverse.get(vid) {
            Some(mirrors) => {
                Box::new(mirrors.iter().map(move |&(source_id, rank)| EdgeDescriptor::new(source_id, vid, rank)))
            },
            None => Box::new(empty()),
        }
    }

    #[inline]
    fn in_degree(&self, v: &VertexDescriptor<usize>) -> usize {
        match self.reverse.get(*v.id()) {
            Some(mirrors) => mirrors.len(),
            None => 0,
        }
    }
}

// Bidirectional::IndexAdjacencyList
impl<VertexRecordType> IndexAdjacencyList for Bidirectional<VertexRecordType>
where
    VertexRecordType: VertexRecord,
    <VertexRecordType::EdgeStoreType as EdgeStore>::EdgeRecordType: EdgeRecord<usize>,
{}

// Bidirectional::VertexValues
impl<VertexRecordType> VertexValues for Bidirectional<VertexRecordType>
where
    VertexRecordType: VertexValueRecord,
    <VertexRecordType::EdgeStoreType as EdgeStore>::EdgeRecordType: EdgeRecord<usize>,
{
    type VertexValueType = VertexRecordType::ValueType;

    #[inline]
    fn vertex_value(&self, u: &VertexDescriptor<usize>) -> GraphResult<&Self::VertexValueType> {
        self.forward.vertex_value(u)
    }
}

// Bidirectional::EdgeValues
impl<VertexRecordType> EdgeValues for Bidirectional<VertexRecordType>
where
    VertexRecordType: VertexRecord,
    <VertexRecordType::EdgeStoreType as EdgeStore>::EdgeRecordType: EdgeValueRecord<usize>,
{
    type EdgeValueType =
        <<VertexRecordType::EdgeStoreType as EdgeStore>::EdgeRecordType as EdgeValueRecord<usize>>::ValueType;

    #[inline]
    fn edge_value(&self, e: &EdgeDescriptor<usize>) -> GraphResult<&Self::EdgeValueType> {
        self.forward.edge_value(e)
    }
}





#[cfg(test)]
mod adjacency_tests {
    use super::*;

    fn diamond() -> Vec<Vec<usize>> {
        vec![vec![1, 2], vec![3], vec![3], vec![]]
    }

    #[test]
    fn sequence_graph_answers_the_protocol() {
        let g = diamond();
        assert_eq!(g.num_vertices(), 4);
        assert_eq!(g.num_edges(), 4);
        assert!(g.has_edge());
        let u = g.find_vertex(&0).unwrap();
        assert_eq!(g.degree(&u), 2);
        assert_eq!(g.edges(&u).count(), 2);
        assert!(g.contains_edge(&0, &2));
        assert!(!g.contains_edge(&2, &0));
        assert!(g.find_vertex(&4).is_none());
    }

    #[test]
    fn degree_equals_edge_count_for_every_vertex() {
        let g = diamond();
        for u in g.vertices() {
            assert_eq!(g.degree(&u), g.edges(&u).count());
        }
        assert_eq!(g.num_edges(), g.vertices().map(|u| g.degree(&u)).sum::<usize>());
    }

    #[test]
    fn weighted_sequence_graph_exposes_edge_values() {
        let g: Vec<Vec<(usize, i64)>> = vec![vec![(1, 10), (2, 5)], vec![], vec![]];
        let e = g.find_vertex_edge(&0, &2).unwrap();
        assert_eq!(*g.edge_value(&e).unwrap(), 5);
        assert_eq!(*e.target_id(), 2);
        assert_eq!(e.rank(), 1);
    }

    #[test]
    fn vertex_payloads_are_reachable() {
        let g: Vec<(&str, Vec<usize>)> = vec![("s", vec![1]), ("t", vec![])];
        let u = g.find_vertex(&1).unwrap();
        assert_eq!(*g.vertex_value(&u).unwrap(), "t");
    }

    #[test]
    fn mapping_graph_with_text_ids_answers_the_protocol() {
        let mut g: BTreeMap<String, Vec<(String, u32)>> = BTreeMap::new();
        g.insert("a".into(), vec![("b".into(), 1)]);
        g.insert("b".into(), vec![("a".into(), 2)]);
        assert_eq!(g.num_vertices(), 2);
        assert_eq!(g.num_edges(), 2);
        assert!(g.contains_edge(&"a".into(), &"b".into()));
        let e = g.find_vertex_edge(&"b".into(), &"a".into()).unwrap();
        assert_eq!(*g.edge_value(&e).unwrap(), 2);
    }

    #[test]
    fn double_ended_sequences_conform_too() {
        let g: VecDeque<Vec<usize>> = VecDeque::from([vec![1], vec![2], vec![]]);
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.num_edges(), 2);
        assert!(g.contains_edge(&1, &2));
        assert_eq!(g.degree(&g.find_vertex(&0).unwrap()), 1);
    }

    #[test]
    fn ordered_hint_follows_the_inner_store() {
        assert!(<Vec<BTreeSet<usize>> as AdjacencyList>::HINTS.contains(AdjacencyHints::ORDERED_EDGES));
        assert!(!<Vec<Vec<usize>> as AdjacencyList>::HINTS.contains(AdjacencyHints::ORDERED_EDGES));
    }

    #[test]
    fn bidirectional_adapter_mirrors_every_edge() {
        let g = Bidirectional::new(diamond()).unwrap();
        assert!(<Bidirectional<Vec<usize>> as AdjacencyList>::HINTS.contains(AdjacencyHints::BIDIRECTIONAL));
        let v = g.find_vertex(&3).unwrap();
        assert_eq!(g.in_degree(&v), 2);
        for e in g.in_edges(&v) {
            assert_eq!(*e.target_id(), 3);
            assert!(g.edges_by_id(e.source_id()).any(|out| out == e));
        }
        let total_in: usize = g.vertices().map(|u| g.in_degree(&u)).sum();
        assert_eq!(total_in, g.num_edges());
    }

    #[test]
    fn bidirectional_adapter_rejects_dangling_targets() {
        let err = Bidirectional::new(vec![vec![5usize]]).unwrap_err();
        assert_eq!(err.kind(), GraphErrorKind::Contract);
    }
}
