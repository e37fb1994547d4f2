//! <h2 id="crabgraph" style="text-align: center; font-variant: small-caps"><a href="#crabgraph">CrabGraph</a></h2>
//!
//! <div style="text-align: center"><b><i>Container-agnostic graphs, views and algorithms for Rust</i></b></div>
//!
//! ## Welcome!
//! CrabGraph lets you run classical graph algorithms over *your own*  data  structures.
//! Instead of shipping one blessed graph type, the library defines  a  small  protocol
//! ([`AdjacencyList`] and friends) that plain standard  containers  already  satisfy:
//! a `Vec<Vec<usize>>` is a graph, a `BTreeMap<String, Vec<(String, f64)>>` is a graph,
//! and everything else is built on top of that protocol.
//!
//! ## Features
//! * **One protocol, many containers** Dense sequences, ordered and hashed  mappings,
//! sorted and hashed edge sets: all of them answer the  same  access  protocol,  with
//! integral or arbitrary vertex IDs. [More about this...][AdjacencyList]
//! * **Lazy views** Adapt any conforming graph into ranges of  structured  records
//! ([vertex lists][views::vertexlist], [incidence][views::incidence],
//! [neighbors][views::neighbors], [edge lists][views::edgelist]) or traverse it  with
//! [BFS][views::vertices_bfs], [DFS][views::vertices_dfs] and
//! [topological sort][views::topological_sort] ranges that support cancellation.
//! * **Algorithms** Shortest paths (Dijkstra, Bellman-Ford),  connectivity  (weak  and
//! strong components, articulation points, biconnected  components),  spanning  trees
//! (Kruskal, Prim), triangle counting, Jaccard  coefficients,  maximal  independent
//! sets and label propagation. [More about this...][algo]
//! * **Visitors** Hook into algorithmic events with  zero  cost  for  the  hooks  you
//! don't use. [More about this...][visitors::Visitor]





pub mod adjacency;
pub mod algo;
pub mod descriptors;
pub mod errors;
pub mod records;
pub mod views;
pub mod visitors;

use std::{
    fmt::{Debug, Display},
    hash::Hash,
    iter::empty,
};
use bitflags::bitflags;

pub use adjacency::{Bidirectional, EdgeRecord, EdgeStore, EdgeValueRecord, VertexRecord, VertexValueRecord};
pub use descriptors::{EdgeDescriptor, VertexDescriptor};
pub use errors::{GraphError, GraphErrorKind, GraphResult};
pub use records::{EdgeData, NeighborData, VertexData};
pub use visitors::{EmptyVisitor, Visitor};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * ID                                                                                *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # ID trait
/// ## Description
/// Types that implement `Id` can be used as unique identifiers of vertices  within  a
/// graph. The trait is implemented automatically for every type  that  is  totally
/// ordered, hashable, cloneable and displayable: all standard integers  qualify,  and
/// so do `String`s, making mappings with arbitrary keys usable as graphs out  of  the
/// box.
///
/// ## Details
/// Two flavours of IDs exist:
/// * *Index IDs* ([`IndexId`]) - integral, densely packed in `[0, N)`. They allow O(1)
/// random access and bit-vector coloring;  the  search  views  and  most  algorithms
/// require them (see [`IndexAdjacencyList`]).
/// * *Sparse IDs* - anything else (integers with gaps, strings). Mappings  keyed  by
/// such IDs still answer the full access protocol, just without the index fast paths.
pub trait Id
where
    Self: Clone + Debug + Display + Eq + Hash + Ord,
{}

impl<IdType> Id for IdType where IdType: Clone + Debug + Display + Eq + Hash + Ord {}



/// # Index ID trait
///
/// ## Description
/// IDs that are integral and densely packed in `[0, N)`, where `N` is  the  number  of
/// vertices of the graph. Such IDs convert losslessly to and from `usize`  positions,
/// which is what lets algorithms replace hash maps with flat arrays and bit  vectors.
///
/// This trait is already implemented for all standard unsigned integer types.
pub trait IndexId
where
    Self: Id,
{
    /// # Position of this ID in the vertex store
    fn to_index(&self) -> usize;
    /// # ID at the given position of the vertex store
    fn from_index(index: usize) -> Self;
}

macro_rules! implement_index_id_trait_for {
    ($t: ty) => {
        impl IndexId for $t {
            #[inline]
            fn to_index(&self) -> usize {
                *self as usize
            }

            #[inline]
            fn from_index(index: usize) -> Self {
                index as $t
            }
        }
    };
}

implement_index_id_trait_for!(u8);
implement_index_id_trait_for!(u16);
implement_index_id_trait_for!(u32);
implement_index_id_trait_for!(u64);
implement_index_id_trait_for!(u128);
implement_index_id_trait_for!(usize);





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * DECLARATIVE CONTAINER HINTS                                                       *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



bitflags! {
    /// # Adjacency hints
    ///
    /// ## Description
    /// Purely declarative capabilities of a  conforming  container,  exposed  as  the
    /// associated constant [`AdjacencyList::HINTS`]. Views consult the hints  when  a
    /// behavior depends on a capability the type system does not track:
    ///
    /// * `SIZED_EDGES` - [`num_edges`][AdjacencyList::num_edges] runs in O(1) (the
    /// container overrides the summing default). The [`edgelist`][views::edgelist]
    /// view reports an exact size only when this hint is present.
    /// * `ORDERED_EDGES` - every vertex's outgoing targets are iterated in  ascending
    /// ID order. Containers with sorted edge sets advertise this automatically.
    /// * `BIDIRECTIONAL` - the container also answers
    /// [`in_edges`][BidirectionalAdjacencyList::in_edges].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct AdjacencyHints: u8 {
        const SIZED_EDGES   = 0b0000_0001;
        const ORDERED_EDGES = 0b0000_0010;
        const BIDIRECTIONAL = 0b0000_0100;
    }
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * THE ACCESS PROTOCOL                                                               *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Uniform access protocol for graphs
///
/// ## Description
/// This trait is the contract between graph containers and  everything  else  in  the
/// library: [views][crate::views] and [algorithms][crate::algo] call nothing  but  the
/// operations below (plus the capability traits [`VertexValues`], [`EdgeValues`],
/// [`GraphValue`], [`BidirectionalAdjacencyList`]), so any type that implements  this
/// trait can be handed to any of them.
///
/// Three operations are required; every other operation has a  default  derived  from
/// them. The defaults are deliberately conservative - they do the right thing  for  a
/// vector of vectors just as for a mapping of sorted sets,  but  some  of  them  (most
/// notably [`num_edges`][AdjacencyList::num_edges]) are  slow  until  the  container
/// overrides them with its own fast path. Resolution is therefore always:  first  the
/// container's own override, then the structural default. There is no runtime probing
/// - a graph that cannot answer an operation fails to compile at the call site.
///
/// ## Details
/// The library ships implementations of this trait for plain standard containers (see
/// the [`adjacency`] module): `Vec`-of-edge-stores with positional  IDs,  `BTreeMap`s
/// and `HashMap`s of edge stores with arbitrary key  IDs.  Edges  are  directed
/// half-edges; an undirected edge `{u, v}` is stored as the pair `(u->v)`, `(v->u)`.
///
/// Identity of edges is answered by the descriptors themselves:
/// [`EdgeDescriptor::source_id`], [`EdgeDescriptor::target_id`] and
/// [`EdgeDescriptor::rank`] are all O(1) and never consult the container.
pub trait AdjacencyList {
    type VertexIdType: Id;

    /// Declarative capabilities of this container; see [`AdjacencyHints`].
    const HINTS: AdjacencyHints = AdjacencyHints::empty();

    /// # Iterate over vertices
    ///
    /// ## Description
    /// Iterate over all vertices of the graph in store order.
    ///
    /// ## Returns
    /// * `Box<dyn Iterator<Item = VertexDescriptor<Self::VertexIdType>>>` - descriptors
    /// of all vertices. Construction is O(1); a full walk is O(|V|).
    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = VertexDescriptor<Self::VertexIdType>> + 'a>;

    /// # Find a vertex by ID
    ///
    /// ## Description
    /// Resolve a vertex ID to a descriptor.
    ///
    /// ## Arguments
    /// * `uid` : `&Self::VertexIdType` - the ID of interest.
    ///
    /// ## Returns
    /// * `Option<VertexDescriptor<Self::VertexIdType>>` - `Some(descriptor)`  if  the
    /// vertex exists, `None` otherwise.
    ///
    /// ## Complexity
    /// O(1) for index-based containers, O(log |V|) for ordered mappings, expected O(1)
    /// for hashed mappings.
    fn find_vertex(&self, uid: &Self::VertexIdType) -> Option<VertexDescriptor<Self::VertexIdType>>;

    /// # Iterate over outgoing edges
    ///
    /// ## Description
    /// Iterate over the outgoing half-edges of the given vertex, in edge-store order.
    ///
    /// ## Arguments
    /// * `u` : `&VertexDescriptor<Self::VertexIdType>` - the source vertex.
    ///
    /// ## Returns
    /// * `Box<dyn Iterator<Item = EdgeDescriptor<Self::VertexIdType>>>` - descriptors
    /// of all outgoing edges of `u`. A descriptor that no longer  names  an  existing
    /// vertex yields an empty iterator.
    fn edges<'a>(
        &'a self,
        u: &VertexDescriptor<Self::VertexIdType>,
    ) -> Box<dyn Iterator<Item = EdgeDescriptor<Self::VertexIdType>> + 'a>;

    /// # Iterate over outgoing edges by ID
    ///
    /// ## Description
    /// Compose [`find_vertex`][AdjacencyList::find_vertex] and
    /// [`edges`][AdjacencyList::edges]. An unknown ID yields an empty iterator.
    fn edges_by_id<'a>(
        &'a self,
        uid: &Self::VertexIdType,
    ) -> Box<dyn Iterator<Item = EdgeDescriptor<Self::VertexIdType>> + 'a> {
        match self.find_vertex(uid) {
            Some(u) => self.edges(&u),
            None => Box::new(empty()),
        }
    }

    /// # Count vertices
    ///
    /// ## Details
    /// The default counts [`vertices`][AdjacencyList::vertices] once, which is O(|V|);
    /// all shipped containers override it with their O(1) length.
    fn num_vertices(&self) -> usize {
        self.vertices().count()
    }

    /// # Count edges
    ///
    /// ## Details
    /// The default sums [`degree`][AdjacencyList::degree] over all vertices, which  is
    /// O(|V| + |E|). Containers that track their edge count should override this  and
    /// advertise [`AdjacencyHints::SIZED_EDGES`]; the [`edgelist`][views::edgelist]
    /// view only reports an exact size for such containers.
    fn num_edges(&self) -> usize {
        self.vertices().map(|u| self.degree(&u)).sum()
    }

    /// # Out-degree of a vertex
    fn degree(&self, u: &VertexDescriptor<Self::VertexIdType>) -> usize {
        self.edges(u).count()
    }

    /// # Check whether the graph has any edge at all
    fn has_edge(&self) -> bool {
        self.num_edges() > 0
    }

    /// # Find an edge between two vertices
    ///
    /// ## Description
    /// Linear scan of `uid`'s outgoing edges for the first one targeting `vid`.
    ///
    /// ## Complexity
    /// O(deg(`uid`)).
    fn find_vertex_edge(
        &self,
        uid: &Self::VertexIdType,
        vid: &Self::VertexIdType,
    ) -> Option<EdgeDescriptor<Self::VertexIdType>> {
        self.edges_by_id(uid).find(|e| e.target_id() == vid)
    }

    /// # Check existence of an edge between two vertices
    fn contains_edge(&self, uid: &Self::VertexIdType, vid: &Self::VertexIdType) -> bool {
        self.find_vertex_edge(uid, vid).is_some()
    }

    /// # Partition of a vertex
    ///
    /// ## Details
    /// Partitions are caller-defined disjoint sub-ranges of the vertices. The  default
    /// is a single partition `0` holding every vertex;  containers  with  real  vertex
    /// partitions override this and the two functions below.
    fn partition_id(&self, _u: &VertexDescriptor<Self::VertexIdType>) -> usize {
        0
    }

    /// # Number of partitions
    fn num_partitions(&self) -> usize {
        1
    }

    /// # Iterate over the vertices of one partition
    fn vertices_in_partition<'a>(
        &'a self,
        pid: usize,
    ) -> Box<dyn Iterator<Item = VertexDescriptor<Self::VertexIdType>> + 'a> {
        if pid == 0 {
            self.vertices()
        } else {
            Box::new(empty())
        }
    }

    /// # Count the vertices of one partition
    fn num_vertices_in_partition(&self, pid: usize) -> usize {
        if pid == 0 {
            self.num_vertices()
        } else {
            0
        }
    }
}



/// # Access protocol for vertex payloads
///
/// ## Description
/// Graphs whose vertices carry a user value implement this trait in addition  to  the
/// base protocol. Graphs without vertex payloads simply do not implement it - calling
/// [`vertex_value`][VertexValues::vertex_value] on such a  graph  is  a  compile-time
/// error at the call site, never a runtime failure.
pub trait VertexValues
where
    Self: AdjacencyList,
{
    type VertexValueType;

    /// # Immutable reference to the payload of a vertex
    ///
    /// ## Returns
    /// * `GraphResult<&Self::VertexValueType>` - `Ok(value)` if the descriptor  names
    /// an existing vertex; `Err(GraphError)` with kind
    /// [`OutOfRange`][GraphErrorKind::OutOfRange] otherwise.
    fn vertex_value(&self, u: &VertexDescriptor<Self::VertexIdType>) -> GraphResult<&Self::VertexValueType>;
}



/// # Access protocol for edge payloads
///
/// ## Description
/// The edge-side counterpart of [`VertexValues`]: implemented exactly by  the  graphs
/// whose stored edge records carry a user value.
pub trait EdgeValues
where
    Self: AdjacencyList,
{
    type EdgeValueType;

    /// # Immutable reference to the payload of an edge
    ///
    /// ## Returns
    /// * `GraphResult<&Self::EdgeValueType>` - `Ok(value)` if the descriptor  names  a
    /// stored half-edge; `Err(GraphError)` with kind
    /// [`OutOfRange`][GraphErrorKind::OutOfRange] otherwise.
    fn edge_value(&self, e: &EdgeDescriptor<Self::VertexIdType>) -> GraphResult<&Self::EdgeValueType>;
}



/// # Access protocol for the graph-level payload
///
/// ## Description
/// A value attached to the graph as a whole. There  is  no  structural  default:  only
/// containers that actually store such a value implement this trait.
pub trait GraphValue
where
    Self: AdjacencyList,
{
    type GraphValueType;

    fn graph_value(&self) -> &Self::GraphValueType;
}



/// # Access protocol for incoming edges
///
/// ## Description
/// Containers that store the transpose  alongside  the  forward  adjacency  implement
/// this trait; it is what lets  in-edge  views  and  the  two-pass  strong-components
/// algorithm run without materialising a transposed copy of the graph.
///
/// ## Details
/// Implementations must keep the two sides consistent: for every incoming edge `e` of
/// `v`, `e.target_id()` equals the ID of `v` and  `e.source_id()`  names  the  vertex
/// holding the outgoing twin.
pub trait BidirectionalAdjacencyList
where
    Self: AdjacencyList,
{
    /// # Iterate over incoming edges
    ///
    /// ## Description
    /// Iterate over descriptors of the half-edges whose target  is  `v`.  Descriptors
    /// are the same values the source side yields:  `e.source_id()`  is  the  outgoing
    /// neighbor on the dual side.
    fn in_edges<'a>(
        &'a self,
        v: &VertexDescriptor<Self::VertexIdType>,
    ) -> Box<dyn Iterator<Item = EdgeDescriptor<Self::VertexIdType>> + 'a>;

    /// # In-degree of a vertex
    fn in_degree(&self, v: &VertexDescriptor<Self::VertexIdType>) -> usize {
        self.in_edges(v).count()
    }

    /// # Descriptor of the source vertex of an edge
    fn source(&self, e: &EdgeDescriptor<Self::VertexIdType>) -> Option<VertexDescriptor<Self::VertexIdType>> {
        self.find_vertex(e.source_id())
    }
}



/// # Marker for index-based adjacency lists
///
/// ## Description
/// Asserts that the vertex IDs of this graph are [index IDs][IndexId] densely  packed
/// in `[0, num_vertices)`. The  search  views  and  all  algorithms  of  the  [`algo`]
/// module bound on this trait: it is  what  justifies  flat  distance  arrays  and
/// bit-vector visited sets.
pub trait IndexAdjacencyList
where
    Self: AdjacencyList,
    Self::VertexIdType: IndexId,
{}



/// # Marker for ordered adjacency
///
/// ## Description
/// Asserts that every vertex's outgoing targets are iterated in ascending  ID  order.
/// [Triangle counting][algo::triangle_count]  requires  it  for  its  merge-based
/// adjacency intersection. Shipped  containers  with  sorted  edge  sets  (`BTreeSet`
/// inner stores) implement it; containers that keep their edge  sequences  sorted  by
/// construction may opt in manually.
pub trait OrderedEdges
where
    Self: AdjacencyList,
{}
